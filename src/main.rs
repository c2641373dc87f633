use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use topicgram::config::Config;
use topicgram::model::classifier::{classify_document, DocumentOutcome};
use topicgram::model::registry::TopicRegistry;
use topicgram::output::terminal;
use topicgram::pipeline;
use topicgram::text::stopwords::StopWords;

/// Topicgram: topic classification for short text documents.
///
/// Learns one bigram signature per topic from a directory-of-topics corpus,
/// then labels new documents by Jaccard similarity to those signatures.
#[derive(Parser)]
#[command(name = "topicgram", version, about)]
struct Cli {
    /// Stop-word file, one token per line (default: built-in English list)
    #[arg(long, global = true)]
    stop_words: Option<PathBuf>,

    /// Path of the trained model (default: ./results/model.json)
    #[arg(long, global = true)]
    model: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build topic signatures from a training dataset
    Train {
        /// Dataset root with one sub-directory per topic
        #[arg(long)]
        dataset: Option<PathBuf>,
    },

    /// Detect the topic of a single document
    Classify {
        /// The document to classify
        file: PathBuf,

        /// Also print the similarity to every topic
        #[arg(long)]
        scores: bool,
    },

    /// Measure accuracy on a labeled dataset
    Evaluate {
        /// Dataset root with one sub-directory per topic
        dataset: PathBuf,
    },

    /// Show what the stored model contains
    Status,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("topicgram=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let mut config = Config::load()?;
    if let Some(path) = cli.stop_words {
        config.stop_words_path = Some(path);
    }
    if let Some(path) = cli.model {
        config.model_path = path;
    }

    match cli.command {
        Commands::Train { dataset } => {
            let dataset = dataset.unwrap_or_else(|| config.train_dir.clone());
            let stop_words = StopWords::load(config.stop_words_path.as_deref())?;

            terminal::display_training_start(&dataset);
            let (registry, summary) = pipeline::train::run(&dataset, &stop_words)?;
            registry.save(&config.model_path)?;

            terminal::display_training_summary(&summary, &config.model_path);
        }

        Commands::Classify { file, scores } => {
            config.require_model()?;
            let stop_words = StopWords::load(config.stop_words_path.as_deref())?;
            let registry = TopicRegistry::load(&config.model_path)?;

            match classify_document(&file, &stop_words, &registry)? {
                DocumentOutcome::Classified(classification) => {
                    info!(
                        file = %file.display(),
                        topic = %classification.topic,
                        similarity = classification.similarity,
                        "Classified document"
                    );
                    terminal::display_classification(&classification, &registry, scores);
                }
                DocumentOutcome::Unclassifiable(e) => {
                    anyhow::bail!("This file can't be parsed: {e}");
                }
            }
        }

        Commands::Evaluate { dataset } => {
            config.require_model()?;
            let stop_words = StopWords::load(config.stop_words_path.as_deref())?;
            let registry = TopicRegistry::load(&config.model_path)?;

            terminal::display_evaluation_start(&dataset, &registry);
            let report = pipeline::evaluate::run(&dataset, &stop_words, &registry)?;

            terminal::display_evaluation(&report);
        }

        Commands::Status => {
            if !config.model_path.is_file() {
                terminal::display_untrained_status();
                return Ok(());
            }
            let registry = TopicRegistry::load(&config.model_path)?;
            terminal::display_status(&registry, &config.model_path);
        }
    }

    Ok(())
}
