// Words are maximal runs of non-separator characters. Nothing is stripped,
// so "foo." and "foo" are different tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(is_separator)
        .filter(|word| !word.is_empty())
        .map(normalize)
        .collect()
}

// Unicode whitespace plus the ASCII file/group/record/unit separators
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

// Downcase with the full Unicode mapping, same rule for queries and tokens
pub fn normalize(word: &str) -> String {
    word.to_lowercase()
}
