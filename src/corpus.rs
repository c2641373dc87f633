// Corpus discovery for directory-of-topics datasets.
//
//   dataset/
//     topic-a/  doc1 doc2 ...
//     topic-b/  doc1 ...
//
// Topic name = directory name. Topics and documents are always returned in
// lexicographic order so training output and evaluation reports do not
// depend on filesystem listing order.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// One topic folder of a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicDir {
    pub name: String,
    pub path: PathBuf,
}

/// Immediate sub-directories of `root`, sorted by name. Hidden entries are skipped.
pub fn list_topics(root: &Path) -> Result<Vec<TopicDir>> {
    let entries = fs::read_dir(root)
        .with_context(|| format!("failed to list dataset directory {}", root.display()))?;

    let mut topics = Vec::new();
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if name.starts_with('.') {
            continue;
        }
        topics.push(TopicDir { name, path });
    }

    topics.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(topics)
}

/// Regular files directly inside `topic_dir`, sorted by file name.
///
/// Nested directories are not descended into.
pub fn list_documents(topic_dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(topic_dir)
        .with_context(|| format!("failed to list topic directory {}", topic_dir.display()))?;

    let mut documents = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() {
            documents.push(path);
        }
    }

    documents.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(documents)
}
