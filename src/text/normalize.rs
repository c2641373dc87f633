// Normalizer: raw text -> sequence of tokens.
//
// Text is split on every run of non-word characters. Each fragment is then
// decomposed (NFD), stripped of combining marks and lowercased, so "Café",
// "CAFÉ" and "cafe" all become the same token.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// A normalized word: lowercase, no diacritics, no punctuation.
pub type Token = String;

/// Split raw text into normalized tokens, preserving their order.
///
/// Duplicates are kept. Empty or punctuation-only input yields an empty vec.
pub fn normalize_text(raw: &str) -> Vec<Token> {
    raw.split(|c: char| !is_word_char(c))
        .filter(|fragment| !fragment.is_empty())
        .map(normalize_token)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Normalize a single word: strip diacritics, then lowercase.
pub fn normalize_token(word: &str) -> Token {
    let stripped: String = word.nfd().filter(|c| !is_combining_mark(*c)).collect();
    stripped.to_lowercase()
}

/// Unicode word characters: letters, digits and underscore.
///
/// Combining marks count as word characters too, so text that arrives
/// already decomposed ("e\u{301}") is not split in the middle of a letter.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || is_combining_mark(c)
}
