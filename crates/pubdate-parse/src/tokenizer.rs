/// Characters that separate tokens. Runs of them collapse into one split.
fn is_delimiter(c: char) -> bool {
    matches!(c, '.' | '-' | ' ' | '(' | ')' | '[' | ']')
}

/// Split a file name into lowercase tokens.
///
/// The extension is not treated specially and ends up as the last token.
/// Leading, trailing, and repeated delimiters never produce empty tokens.
pub fn tokenize(name: &str) -> Vec<String> {
    name.to_lowercase()
        .split(is_delimiter)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}
