/// A source-text token with its surrounding punctuation preserved
///
/// Punctuation travels with the word through reordering, so "hello,"
/// keeps its comma wherever the word lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawToken {
    pub prefix: String,
    pub core: String,
    pub suffix: String,
    /// Zero-based index in the source text
    pub position: usize,
}

impl RawToken {
    /// The core lowercased, as used for dictionary lookup
    pub fn gloss(&self) -> String {
        self.core.to_lowercase()
    }
}

/// Split on whitespace and peel punctuation off both ends of each word
///
/// Interior punctuation (apostrophes, hyphens) stays in the core.
pub fn tokenize(text: &str) -> Vec<RawToken> {
    text.split_whitespace()
        .enumerate()
        .map(|(position, word)| split_word(word, position))
        .collect()
}

fn split_word(word: &str, position: usize) -> RawToken {
    let chars: Vec<char> = word.chars().collect();

    let start = chars
        .iter()
        .position(|c| c.is_alphanumeric())
        .unwrap_or(chars.len());
    let end = chars
        .iter()
        .rposition(|c| c.is_alphanumeric())
        .map(|i| i + 1)
        .unwrap_or(start);

    RawToken {
        prefix: chars[..start].iter().collect(),
        core: chars[start..end].iter().collect(),
        suffix: chars[end..].iter().collect(),
        position,
    }
}
