// Similarity classifier: arg-max Jaccard over the topic signatures.
//
// Ties are broken by registry order: the first topic reaching the maximum
// wins, so the same inputs always give the same label.

use std::path::Path;

use crate::document::document_to_bigram_set;
use crate::error::{ConfigurationError, DocumentError};
use crate::text::ngrams::NGramSet;
use crate::text::stopwords::StopWords;

use super::registry::TopicRegistry;
use super::similarity::jaccard;

/// The winning topic for one document.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// Name of the winning topic, always one of the registry's names
    pub topic: String,
    /// Position of the winning topic in the registry
    pub index: usize,
    /// Jaccard similarity against the winning signature
    pub similarity: f64,
    /// Similarity against every signature, in registry order
    pub scores: Vec<f64>,
}

/// Outcome of classifying a document from disk.
///
/// Unclassifiable documents are kept distinct from any topic result.
#[derive(Debug)]
pub enum DocumentOutcome {
    Classified(Classification),
    Unclassifiable(DocumentError),
}

/// Classify `document` against parallel lists of signatures and names.
///
/// Both lists must be non-empty and of equal length.
pub fn classify(
    document: &NGramSet,
    signatures: &[NGramSet],
    topic_names: &[String],
) -> Result<Classification, ConfigurationError> {
    if signatures.len() != topic_names.len() {
        return Err(ConfigurationError::LengthMismatch {
            names: topic_names.len(),
            signatures: signatures.len(),
        });
    }
    classify_pairs(
        document,
        topic_names.iter().map(String::as_str).zip(signatures),
    )
}

/// Classify `document` against `(name, signature)` pairs in registry order.
pub(crate) fn classify_pairs<'a, I>(
    document: &NGramSet,
    topics: I,
) -> Result<Classification, ConfigurationError>
where
    I: IntoIterator<Item = (&'a str, &'a NGramSet)>,
{
    let (names, signatures): (Vec<&str>, Vec<&NGramSet>) = topics.into_iter().unzip();
    let (index, similarity, scores) =
        best_match(document, signatures).ok_or(ConfigurationError::Empty)?;
    Ok(Classification {
        topic: names[index].to_string(),
        index,
        similarity,
        scores,
    })
}

/// Score `document` against each signature and return
/// `(winning index, winning similarity, all scores)`.
///
/// Returns `None` when there are no signatures.
pub fn best_match<'a, I>(document: &NGramSet, signatures: I) -> Option<(usize, f64, Vec<f64>)>
where
    I: IntoIterator<Item = &'a NGramSet>,
{
    let scores: Vec<f64> = signatures
        .into_iter()
        .map(|signature| jaccard(document, signature))
        .collect();

    let mut best: Option<(usize, f64)> = None;
    for (index, &score) in scores.iter().enumerate() {
        // Strictly greater: an equal later score never displaces an earlier one
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((index, score));
        }
    }

    best.map(|(index, score)| (index, score, scores))
}

/// Read, parse and classify the document at `path`.
///
/// Read failures and degenerate documents come back as
/// `DocumentOutcome::Unclassifiable`; only a broken registry is an error.
pub fn classify_document(
    path: &Path,
    stop_words: &StopWords,
    registry: &TopicRegistry,
) -> Result<DocumentOutcome, ConfigurationError> {
    match document_to_bigram_set(path, stop_words) {
        Ok(bigrams) => registry.classify(&bigrams).map(DocumentOutcome::Classified),
        Err(e) => Ok(DocumentOutcome::Unclassifiable(e)),
    }
}
