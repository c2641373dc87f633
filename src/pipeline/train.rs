// Training pass: dataset directory -> topic registry.
//
// 1. List topic directories (sorted)
// 2. Parse every document of a topic into a bigram set, skipping failures
// 3. Union the sets into that topic's signature
//
// Names and signatures are produced in the same pass and stored together,
// so the registry order is exactly the traversal order.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::corpus::{list_documents, list_topics};
use crate::document::document_to_bigram_set;
use crate::model::registry::TopicRegistry;
use crate::model::signature::SignatureBuilder;
use crate::text::stopwords::StopWords;

/// Per-topic numbers from a training pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicTrainingStats {
    pub name: String,
    /// Documents merged into the signature
    pub documents: usize,
    /// Documents excluded (unreadable or degenerate)
    pub skipped: usize,
    /// Number of distinct bigrams in the signature
    pub signature_size: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrainingSummary {
    pub topics: Vec<TopicTrainingStats>,
}

impl TrainingSummary {
    /// Total documents merged across all topics.
    pub fn documents(&self) -> usize {
        self.topics.iter().map(|t| t.documents).sum()
    }

    pub fn skipped(&self) -> usize {
        self.topics.iter().map(|t| t.skipped).sum()
    }
}

/// Build a registry from every topic directory under `dataset`.
pub fn run(dataset: &Path, stop_words: &StopWords) -> Result<(TopicRegistry, TrainingSummary)> {
    let topic_dirs = list_topics(dataset)?;
    if topic_dirs.is_empty() {
        anyhow::bail!(
            "No topic directories found in {}. Expected one sub-directory per topic.",
            dataset.display()
        );
    }

    let mut signatures = Vec::with_capacity(topic_dirs.len());
    let mut summary = TrainingSummary::default();

    for topic in &topic_dirs {
        let documents = list_documents(&topic.path)?;

        let pb = ProgressBar::new(documents.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("  {msg} [{bar:30}] {pos}/{len}")?,
        );
        pb.set_message(topic.name.clone());

        let mut builder = SignatureBuilder::new(&topic.name);
        let mut skipped = 0;
        for path in &documents {
            match document_to_bigram_set(path, stop_words) {
                Ok(bigrams) => builder.add(bigrams),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Skipping document");
                    skipped += 1;
                }
            }
            pb.inc(1);
        }
        pb.finish_and_clear();

        let signature = builder.finish();
        info!(
            topic = %signature.name,
            documents = signature.documents,
            skipped,
            bigrams = signature.ngrams.len(),
            "Built topic signature"
        );

        summary.topics.push(TopicTrainingStats {
            name: signature.name.clone(),
            documents: signature.documents,
            skipped,
            signature_size: signature.ngrams.len(),
        });
        signatures.push(signature);
    }

    let registry = TopicRegistry::new(signatures, Utc::now())
        .with_context(|| format!("cannot build a model from {}", dataset.display()))?;

    Ok((registry, summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::text_to_bigram_set;
    use std::fs;

    #[test]
    fn test_train_small_corpus() {
        let dir = tempfile::tempdir().unwrap();
        let sports = dir.path().join("sports");
        let tech = dir.path().join("tech");
        fs::create_dir(&sports).unwrap();
        fs::create_dir(&tech).unwrap();
        fs::write(sports.join("1"), "soccer ball game").unwrap();
        fs::write(sports.join("2"), "the soccer ball").unwrap();
        fs::write(sports.join("3"), "goal").unwrap();
        fs::write(tech.join("1"), "rust compiler error").unwrap();

        let stop = StopWords::from_lines(["the"]);
        let (registry, summary) = run(dir.path(), &stop).unwrap();

        assert_eq!(registry.topic_names().collect::<Vec<_>>(), vec!["sports", "tech"]);
        let sports_sig = &registry.topics()[0];
        assert_eq!(sports_sig.documents, 2);
        assert_eq!(
            sports_sig.ngrams.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["ball game", "soccer ball"]
        );

        assert_eq!(summary.documents(), 3);
        assert_eq!(summary.skipped(), 1);
        assert_eq!(summary.topics[0].skipped, 1);
    }

    #[test]
    fn test_topic_without_usable_documents_keeps_empty_signature() {
        let dir = tempfile::tempdir().unwrap();
        let quiet = dir.path().join("quiet");
        let sports = dir.path().join("sports");
        fs::create_dir(&quiet).unwrap();
        fs::create_dir(&sports).unwrap();
        fs::write(quiet.join("1"), "goal").unwrap();
        fs::write(quiet.join("2"), "").unwrap();
        fs::write(quiet.join("3"), [0xffu8, 0xfe]).unwrap();
        fs::write(sports.join("1"), "soccer ball game").unwrap();

        let stop = StopWords::default();
        let (registry, summary) = run(dir.path(), &stop).unwrap();

        assert!(registry.topic_names().any(|name| name == "quiet"));
        let quiet_sig = &registry.topics()[0];
        assert_eq!(quiet_sig.name, "quiet");
        assert!(quiet_sig.ngrams.is_empty());
        assert_eq!(quiet_sig.documents, 0);

        let quiet_stats = &summary.topics[0];
        assert_eq!(quiet_stats.name, "quiet");
        assert_eq!(quiet_stats.skipped, 3);
        assert_eq!(quiet_stats.documents, 0);

        let doc = text_to_bigram_set("soccer ball", &stop).unwrap();
        let result = registry.classify(&doc).unwrap();
        assert_eq!(result.scores[0], 0.0);
        assert_eq!(result.topic, "sports");
    }

    #[test]
    fn test_empty_dataset_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run(dir.path(), &StopWords::default()).is_err());
    }
}
