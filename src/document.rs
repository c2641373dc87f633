// Document pipeline: read -> normalize -> drop stop words -> bigrams -> set.
//
// A document either yields a non-empty bigram set or a DocumentError. Both
// training and evaluation treat the error as "skip this document".

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::DocumentError;
use crate::text::ngrams::{extract_bigrams, NGramSet};
use crate::text::normalize::normalize_text;
use crate::text::stopwords::{remove_stop_words, StopWords};

/// Read the document at `path` and compute its bigram set.
pub fn document_to_bigram_set(
    path: &Path,
    stop_words: &StopWords,
) -> Result<NGramSet, DocumentError> {
    let text = fs::read_to_string(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let bigrams = text_to_bigram_set(&text, stop_words)?;
    debug!(path = %path.display(), bigrams = bigrams.len(), "Parsed document");
    Ok(bigrams)
}

/// Compute the bigram set of in-memory text.
///
/// Fails with `DocumentError::Degenerate` when fewer than two tokens are
/// left after stop-word removal.
pub fn text_to_bigram_set(text: &str, stop_words: &StopWords) -> Result<NGramSet, DocumentError> {
    let tokens = remove_stop_words(normalize_text(text), stop_words);
    if tokens.len() < 2 {
        return Err(DocumentError::Degenerate {
            tokens: tokens.len(),
        });
    }
    Ok(extract_bigrams(&tokens).into_iter().collect())
}
