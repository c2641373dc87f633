use std::env;
use std::path::PathBuf;

use anyhow::Result;

pub const DEFAULT_TRAIN_DIR: &str = "./resources/topics-dataset-train";
pub const DEFAULT_MODEL_PATH: &str = "./results/model.json";

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. CLI flags
/// override individual fields; components only ever receive explicit paths.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory-of-topics used for training
    pub train_dir: PathBuf,
    /// Stop-word file (one token per line). `None` uses the built-in English list.
    pub stop_words_path: Option<PathBuf>,
    /// Where the trained topic registry is written and read
    pub model_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            train_dir: PathBuf::from(DEFAULT_TRAIN_DIR),
            stop_words_path: None,
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
        }
    }
}

impl Config {
    /// Load configuration from environment variables, with defaults for all.
    pub fn load() -> Result<Self> {
        Ok(Self::from_lookup(|key| env::var(key).ok()))
    }

    /// Build from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            train_dir: var("TOPICGRAM_TRAIN_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.train_dir),
            stop_words_path: var("TOPICGRAM_STOP_WORDS").map(PathBuf::from),
            model_path: var("TOPICGRAM_MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.model_path),
        }
    }

    /// Check that a trained model exists.
    /// Call this before any operation that classifies documents.
    pub fn require_model(&self) -> Result<()> {
        if !self.model_path.is_file() {
            anyhow::bail!(
                "No trained model at {}\n\
                 Run `topicgram train` first, or set TOPICGRAM_MODEL_PATH.",
                self.model_path.display()
            );
        }
        Ok(())
    }
}
