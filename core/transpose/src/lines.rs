use std::collections::HashSet;

/// Splits `text` on `from` and joins the pieces with `to`.
pub fn convert_delimiter(text: &str, from: char, to: &str) -> String {
    text.split(from).collect::<Vec<_>>().join(to)
}

pub fn lines_to_commas(text: &str) -> String {
    convert_delimiter(text, '\n', ",")
}

pub fn commas_to_lines(text: &str) -> String {
    convert_delimiter(text, ',', "\n")
}

pub fn tabs_to_lines(text: &str) -> String {
    convert_delimiter(text, '\t', "\n")
}

pub fn lines_to_tabs(text: &str) -> String {
    convert_delimiter(text, '\n', "\t")
}

/// 2回以上出現する行を昇順で1回ずつ返す
pub fn overlap_lines(text: &str) -> String {
    let mut lines: Vec<&str> = text.split('\n').collect();
    lines.sort_unstable();

    let mut duplicates: Vec<&str> = Vec::new();
    for pair in lines.windows(2) {
        if pair[0] == pair[1] && duplicates.last() != Some(&pair[0]) {
            duplicates.push(pair[0]);
        }
    }
    duplicates.join("\n")
}

/// 重複行を除去する (最初の出現順を保つ)
pub fn uniq_lines(text: &str) -> String {
    let mut seen = HashSet::new();
    text.split('\n')
        .filter(|line| seen.insert(*line))
        .collect::<Vec<_>>()
        .join("\n")
}
