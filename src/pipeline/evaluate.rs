// Evaluation pass: classify every document of a labeled dataset and
// report accuracy per topic.
//
// A document counts toward its topic's denominator only if it could be
// classified. Rates are percentages rounded to two decimals; the aggregate
// is the mean of the per-topic rates, not global accuracy.

use std::path::Path;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::corpus::{list_documents, list_topics};
use crate::model::classifier::{classify_document, DocumentOutcome};
use crate::model::registry::TopicRegistry;
use crate::text::stopwords::StopWords;

/// Counts for one topic of the evaluated dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicTally {
    /// The true label (dataset directory name)
    pub name: String,
    /// Documents that were classified
    pub attempted: usize,
    /// Documents classified as `name`
    pub correct: usize,
    /// Documents that could not be classified
    pub skipped: usize,
}

impl TopicTally {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Count one document outcome against this topic.
    pub fn record(&mut self, outcome: &DocumentOutcome) {
        match outcome {
            DocumentOutcome::Classified(classification) => {
                self.attempted += 1;
                if classification.topic == self.name {
                    self.correct += 1;
                }
            }
            DocumentOutcome::Unclassifiable(_) => self.skipped += 1,
        }
    }

    /// Success rate in percent, `None` when nothing was classified.
    pub fn rate(&self) -> Option<f64> {
        if self.attempted == 0 {
            None
        } else {
            Some(round2(self.correct as f64 / self.attempted as f64 * 100.0))
        }
    }
}

/// Result of evaluating a dataset against a registry.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationReport {
    /// One tally per dataset topic, in sorted order
    pub topics: Vec<TopicTally>,
    /// Number of topics the registry can choose from
    pub registry_topics: usize,
}

impl EvaluationReport {
    /// Documents that were actually classified.
    pub fn files_tested(&self) -> usize {
        self.topics.iter().map(|t| t.attempted).sum()
    }

    pub fn files_skipped(&self) -> usize {
        self.topics.iter().map(|t| t.skipped).sum()
    }

    /// Mean of the per-topic rates, skipping topics without a rate.
    pub fn aggregate_rate(&self) -> Option<f64> {
        let rates: Vec<f64> = self.topics.iter().filter_map(TopicTally::rate).collect();
        if rates.is_empty() {
            None
        } else {
            Some(round2(rates.iter().sum::<f64>() / rates.len() as f64))
        }
    }

    /// Expected rate of a uniformly random guess, in percent.
    pub fn chance_rate(&self) -> f64 {
        if self.registry_topics == 0 {
            0.0
        } else {
            round2(100.0 / self.registry_topics as f64)
        }
    }
}

/// Classify every document under `dataset` and tally the results.
pub fn run(
    dataset: &Path,
    stop_words: &StopWords,
    registry: &TopicRegistry,
) -> Result<EvaluationReport> {
    let topic_dirs = list_topics(dataset)?;
    if topic_dirs.is_empty() {
        anyhow::bail!(
            "No topic directories found in {}. Expected one sub-directory per topic.",
            dataset.display()
        );
    }

    let mut tallies = Vec::with_capacity(topic_dirs.len());
    for topic in &topic_dirs {
        let documents = list_documents(&topic.path)?;

        let pb = ProgressBar::new(documents.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("  {msg} [{bar:30}] {pos}/{len} ({eta})")?,
        );
        pb.set_message(topic.name.clone());

        let mut tally = TopicTally::new(&topic.name);
        for path in &documents {
            let outcome = classify_document(path, stop_words, registry)?;
            if let DocumentOutcome::Unclassifiable(e) = &outcome {
                warn!(path = %path.display(), error = %e, "Cannot classify document");
            }
            tally.record(&outcome);
            pb.inc(1);
        }
        pb.finish_and_clear();

        info!(
            topic = %tally.name,
            attempted = tally.attempted,
            correct = tally.correct,
            skipped = tally.skipped,
            "Evaluated topic"
        );
        tallies.push(tally);
    }

    Ok(EvaluationReport {
        topics: tallies,
        registry_topics: registry.len(),
    })
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
