// Topic registry: the trained model as a single JSON manifest.
//
// Topic names and their signatures live in one ordered list, so the
// position that wins classification always maps back to the right name.
// The manifest is rewritten wholesale on every training run and written
// through a temp file so a crash never leaves a half-written model.

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::info;

use super::classifier::{classify_pairs, Classification};
use super::signature::TopicSignature;
use crate::error::ConfigurationError;
use crate::text::ngrams::NGramSet;

/// Bumped whenever the manifest layout changes incompatibly.
pub const FORMAT_VERSION: u32 = 1;

/// Ordered topic signatures plus training metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicRegistry {
    pub format_version: u32,
    pub trained_at: DateTime<Utc>,
    topics: Vec<TopicSignature>,
}

impl TopicRegistry {
    /// Build a registry, rejecting empty or duplicate-named topic lists.
    pub fn new(
        topics: Vec<TopicSignature>,
        trained_at: DateTime<Utc>,
    ) -> Result<Self, ConfigurationError> {
        let registry = Self {
            format_version: FORMAT_VERSION,
            trained_at,
            topics,
        };
        registry.validate()?;
        Ok(registry)
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        if self.topics.is_empty() {
            return Err(ConfigurationError::Empty);
        }
        let mut seen = HashSet::new();
        for topic in &self.topics {
            if !seen.insert(topic.name.as_str()) {
                return Err(ConfigurationError::DuplicateTopic(topic.name.clone()));
            }
        }
        Ok(())
    }

    pub fn topics(&self) -> &[TopicSignature] {
        &self.topics
    }

    pub fn topic_names(&self) -> impl Iterator<Item = &str> {
        self.topics.iter().map(|t| t.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    /// Always false for a validated registry.
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Total number of training documents across all topics.
    pub fn document_count(&self) -> usize {
        self.topics.iter().map(|t| t.documents).sum()
    }

    /// Pick the topic whose signature is most similar to `document`.
    ///
    /// Ties go to the topic listed first.
    pub fn classify(&self, document: &NGramSet) -> Result<Classification, ConfigurationError> {
        classify_pairs(
            document,
            self.topics.iter().map(|t| (t.name.as_str(), &t.ngrams)),
        )
    }

    /// Write the manifest to `path`, replacing any previous model.
    pub fn save(&self, path: &Path) -> Result<()> {
        let parent_dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent_dir)
            .with_context(|| format!("failed to create {}", parent_dir.display()))?;

        let temp_file = NamedTempFile::new_in(parent_dir)?;
        {
            let mut writer = BufWriter::new(temp_file.as_file());
            serde_json::to_writer(&mut writer, self)?;
            writer.flush()?;
        }
        set_model_permissions(&temp_file, path)?;
        temp_file
            .persist(path)
            .with_context(|| format!("failed to write model to {}", path.display()))?;

        info!(
            path = %path.display(),
            topics = self.len(),
            "Saved topic registry"
        );
        Ok(())
    }

    /// Read and validate a manifest written by `save`.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open model {}", path.display()))?;
        let registry: Self = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to parse model {}", path.display()))?;

        if registry.format_version != FORMAT_VERSION {
            anyhow::bail!(
                "model {} has format version {}, expected {}. Re-run `topicgram train`.",
                path.display(),
                registry.format_version,
                FORMAT_VERSION
            );
        }
        registry.validate()?;

        info!(
            path = %path.display(),
            topics = registry.len(),
            documents = registry.document_count(),
            "Loaded topic registry"
        );
        Ok(registry)
    }
}

/// Temp files are created owner-only (0600). Give the model the mode of the
/// file it replaces, or 0644 for a fresh one.
#[cfg(unix)]
fn set_model_permissions(temp_file: &NamedTempFile, target: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let permissions = match fs::metadata(target) {
        Ok(existing) => existing.permissions(),
        Err(_) => fs::Permissions::from_mode(0o644),
    };
    temp_file
        .as_file()
        .set_permissions(permissions)
        .with_context(|| format!("failed to set permissions for {}", target.display()))
}

#[cfg(not(unix))]
fn set_model_permissions(_temp_file: &NamedTempFile, _target: &Path) -> Result<()> {
    Ok(())
}
