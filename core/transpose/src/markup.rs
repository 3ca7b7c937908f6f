use std::fmt::Write;
use tracing::debug;

/// TSV テキストを HTML の table 要素に変換する
///
/// One `<tr>` per line and one `<td>` per tab-separated cell. Cells are
/// trimmed; the markup is tab-indented.
pub fn tsv_to_table(tsv: &str) -> String {
    let mut rows = String::new();
    let mut row_count = 0;

    for line in tsv.split('\n') {
        let mut cells = String::new();
        for column in line.split('\t') {
            let _ = writeln!(cells, "\t\t<td>{}</td>", column.trim());
        }
        let _ = write!(rows, "\t<tr>\n{}\t</tr>\n", cells);
        row_count += 1;
    }

    debug!("Generated HTML table with {} rows", row_count);
    format!("<table>\n{}</table>", rows)
}

/// `text` をリンク先 `url` の a 要素で囲む
pub fn anchor(url: &str, text: &str) -> String {
    format!("<a href=\"{}\" target=\"_blank\">{}</a>", url, text)
}

/// 各文字を 16 進の数値文字参照 (`&#x3042;`) に変換する
pub fn numeric_character_reference(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 8);
    for c in text.chars() {
        let _ = write!(out, "&#x{:x};", c as u32);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tsv_to_table() {
        let html = tsv_to_table("名前\t年齢\n太郎 \t 20");
        let expected = "<table>\n\
                        \t<tr>\n\t\t<td>名前</td>\n\t\t<td>年齢</td>\n\t</tr>\n\
                        \t<tr>\n\t\t<td>太郎</td>\n\t\t<td>20</td>\n\t</tr>\n\
                        </table>";
        assert_eq!(html, expected);
    }

    #[test]
    fn test_tsv_to_table_single_cell() {
        assert_eq!(
            tsv_to_table("x"),
            "<table>\n\t<tr>\n\t\t<td>x</td>\n\t</tr>\n</table>"
        );
    }

    #[test]
    fn test_anchor() {
        assert_eq!(
            anchor("https://example.com/", "例"),
            "<a href=\"https://example.com/\" target=\"_blank\">例</a>"
        );
    }

    #[test]
    fn test_numeric_character_reference() {
        assert_eq!(numeric_character_reference("aあ"), "&#x61;&#x3042;");
        assert_eq!(numeric_character_reference("\u{20B9F}"), "&#x20b9f;");
        assert_eq!(numeric_character_reference(""), "");
    }
}
