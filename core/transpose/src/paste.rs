/// クリップボードを行ごとに分割する
pub fn split_rows(clipboard: &str) -> Vec<String> {
    clipboard.split('\n').map(str::to_string).collect()
}

/// クリップボードを前後の空白を除いてセル単位 (改行・タブ区切り) に分割する
pub fn split_tsv_cells(clipboard: &str) -> Vec<String> {
    clipboard
        .trim()
        .split(['\n', '\t'])
        .map(str::to_string)
        .collect()
}

/// Pairs each placeholder with the next replacement.
///
/// Returns the filled `(placeholder, replacement)` pairs and the indices of
/// placeholders left without a replacement.
pub fn assign_replacements<T: Copy>(
    placeholders: &[T],
    replacements: &[String],
) -> (Vec<(T, String)>, Vec<usize>) {
    let mut filled = Vec::new();
    let mut unfilled = Vec::new();

    for (i, placeholder) in placeholders.iter().enumerate() {
        match replacements.get(i) {
            Some(text) => filled.push((*placeholder, text.clone())),
            None => unfilled.push(i),
        }
    }

    (filled, unfilled)
}
