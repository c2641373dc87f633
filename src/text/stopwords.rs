// Stop-word set: loaded once, read-only afterwards.
//
// Either read from a file (one token per line, surrounding whitespace
// trimmed) or taken from the English list shipped with the `stop-words`
// crate when no file is configured.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use stop_words::{get, LANGUAGE};
use tracing::info;

use super::normalize::Token;
use crate::error::ConfigurationError;

/// Tokens excluded from bigram construction.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Load from `path` if given, otherwise fall back to the built-in list.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::builtin()),
        }
    }

    /// Read a stop-word file with one token per line.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigurationError::MissingStopWords(path.to_path_buf()).into());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read stop words from {}", path.display()))?;
        let stop_words = Self::from_lines(contents.lines());
        info!(
            path = %path.display(),
            words = stop_words.len(),
            "Loaded stop words"
        );
        Ok(stop_words)
    }

    /// The English stop-word list from the `stop-words` crate.
    pub fn builtin() -> Self {
        let words: Vec<String> = get(LANGUAGE::English);
        let stop_words = Self::from_lines(words.iter().map(String::as_str));
        info!(words = stop_words.len(), "Using built-in English stop words");
        stop_words
    }

    /// Build from raw lines. Lines are trimmed; blank lines are ignored.
    pub fn from_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let words = lines
            .into_iter()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect();
        Self { words }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Drop every stop word from `tokens`.
///
/// Surviving tokens keep their relative order, duplicates included.
pub fn remove_stop_words(mut tokens: Vec<Token>, stop_words: &StopWords) -> Vec<Token> {
    tokens.retain(|token| !stop_words.contains(token));
    tokens
}
