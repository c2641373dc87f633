// Topic signatures: the union of every training document's bigram set.
//
// No weighting, pruning or size cap: a bigram seen once in one document
// counts as much as one seen everywhere.

use serde::{Deserialize, Serialize};

use crate::text::ngrams::NGramSet;

/// A named n-gram set representing one topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicSignature {
    /// Topic name (the training directory name)
    pub name: String,
    /// Number of documents merged into `ngrams`
    pub documents: usize,
    /// Union of the members' bigram sets
    pub ngrams: NGramSet,
}

/// Union all member sets into one signature set.
///
/// The result does not depend on the order the sets are given in.
pub fn build_signature<I>(member_sets: I) -> NGramSet
where
    I: IntoIterator<Item = NGramSet>,
{
    let mut signature = NGramSet::new();
    for set in member_sets {
        signature.extend(set);
    }
    signature
}

/// Accumulates documents for one topic during a training pass.
#[derive(Debug)]
pub struct SignatureBuilder {
    name: String,
    documents: usize,
    ngrams: NGramSet,
}

impl SignatureBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            documents: 0,
            ngrams: NGramSet::new(),
        }
    }

    /// Merge one document's bigram set.
    pub fn add(&mut self, document: NGramSet) {
        self.documents += 1;
        self.ngrams = build_signature([std::mem::take(&mut self.ngrams), document]);
    }

    pub fn documents(&self) -> usize {
        self.documents
    }

    pub fn finish(self) -> TopicSignature {
        TopicSignature {
            name: self.name,
            documents: self.documents,
            ngrams: self.ngrams,
        }
    }
}
