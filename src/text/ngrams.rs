// N-gram extraction over a token sequence.
//
// An n-gram is `n` consecutive tokens joined by a single space. Order inside
// the n-gram matters: "data science" and "science data" are different.

use std::collections::BTreeSet;

use super::normalize::Token;

/// Window size used by the classifier.
pub const BIGRAM: usize = 2;

/// Canonical n-gram string: tokens joined by one space.
pub type NGram = String;

/// A presence-only set of n-grams. Sorted so that persisted output is stable.
pub type NGramSet = BTreeSet<NGram>;

/// Every window of `n` adjacent tokens, in order of appearance.
///
/// `n == 1` returns the tokens themselves. Fewer than `n` tokens (or `n == 0`)
/// yields an empty vec.
pub fn extract_ngrams(tokens: &[Token], n: usize) -> Vec<NGram> {
    match n {
        0 => Vec::new(),
        1 => tokens.to_vec(),
        _ => tokens.windows(n).map(|window| window.join(" ")).collect(),
    }
}

/// Adjacent token pairs: `[a, b, c]` -> `["a b", "b c"]`.
pub fn extract_bigrams(tokens: &[Token]) -> Vec<NGram> {
    extract_ngrams(tokens, BIGRAM)
}
