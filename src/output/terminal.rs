// Colored terminal output for the CLI.
//
// Drivers return plain values (summaries, reports); everything that touches
// stdout lives here. Colors can be turned off globally with
// `colored::control::set_override(false)`.

use std::path::Path;

use colored::Colorize;

use super::format_rate;
use crate::model::classifier::Classification;
use crate::model::registry::TopicRegistry;
use crate::pipeline::evaluate::EvaluationReport;
use crate::pipeline::train::TrainingSummary;

/// Announce a training run.
pub fn display_training_start(dataset: &Path) {
    println!("Building topic signatures from {}...", dataset.display());
}

/// Display the per-topic result of a training run.
pub fn display_training_summary(summary: &TrainingSummary, model_path: &Path) {
    println!(
        "\n{}",
        format!("=== Trained {} topics ===", summary.topics.len()).bold()
    );
    println!();
    println!(
        "  {:<40} {:>8} {:>8} {:>10}",
        "Topic".dimmed(),
        "Docs".dimmed(),
        "Skipped".dimmed(),
        "Bigrams".dimmed(),
    );
    println!("  {}", "-".repeat(69).dimmed());

    for topic in &summary.topics {
        let skipped = if topic.skipped > 0 {
            topic.skipped.to_string().yellow()
        } else {
            topic.skipped.to_string().normal()
        };
        println!(
            "  {:<40} {:>8} {:>8} {:>10}",
            topic.name.bright_yellow(),
            topic.documents,
            skipped,
            topic.signature_size,
        );
    }

    println!();
    println!(
        "  {} files have been treated ({} skipped)",
        summary.documents().to_string().bright_blue(),
        summary.skipped(),
    );
    println!("  Model saved to {}", model_path.display());
}

/// Display the detected topic for a single document.
pub fn display_classification(
    classification: &Classification,
    registry: &TopicRegistry,
    show_scores: bool,
) {
    println!(
        "\nThe topic of this text is {} (similarity {:.4}).",
        classification.topic.bright_yellow().bold(),
        classification.similarity,
    );

    if show_scores {
        println!();
        for (i, (name, score)) in registry
            .topic_names()
            .zip(&classification.scores)
            .enumerate()
        {
            let line = format!("  {:<40} {:.4}", name, score);
            if i == classification.index {
                println!("{}", line.bright_green());
            } else {
                println!("{}", line.dimmed());
            }
        }
    }
}

/// Announce an evaluation run.
pub fn display_evaluation_start(dataset: &Path, registry: &TopicRegistry) {
    println!(
        "Evaluating {} against {} topics...",
        dataset.display(),
        registry.len()
    );
}

/// Display per-topic and aggregate rates for an evaluation run.
pub fn display_evaluation(report: &EvaluationReport) {
    println!(
        "\n{}",
        format!("=== Evaluation ({} topics) ===", report.topics.len()).bold()
    );
    println!();

    for tally in &report.topics {
        let rate = format_rate(tally.rate());
        println!(
            "  Rate of {:>8} with {:>6} files tested on topic {}",
            rate.bright_blue(),
            tally.attempted.to_string().bright_blue(),
            tally.name.bright_yellow(),
        );
        if tally.skipped > 0 {
            println!("      {} unclassifiable", tally.skipped.to_string().yellow());
        }
    }

    println!();
    println!(
        "  Total number of files tested: {}",
        report.files_tested().to_string().bright_blue()
    );
    println!(
        "  Total rate of success: {}",
        format_rate(report.aggregate_rate()).bright_blue().bold()
    );
    println!(
        "  Success rate by chance: {}",
        format_rate(Some(report.chance_rate())).bright_blue()
    );
    if let Some(note) = skipped_note(report) {
        println!("  {}", note.dimmed());
    }
}

/// Footer for evaluations that had to leave documents out of the rates.
fn skipped_note(report: &EvaluationReport) -> Option<String> {
    match report.files_skipped() {
        0 => None,
        skipped => Some(format!(
            "{skipped} unclassifiable files were excluded from the rates."
        )),
    }
}

/// Status when no model has been trained yet.
pub fn display_untrained_status() {
    println!("Model: not trained");
    println!("\nRun `topicgram train` to build it.");
}

/// Display what the stored model contains.
pub fn display_status(registry: &TopicRegistry, model_path: &Path) {
    println!("Model: {}", model_path.display());
    println!(
        "Trained: {}",
        registry.trained_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!(
        "Topics: {}  Documents: {}",
        registry.len(),
        registry.document_count()
    );
    println!();

    for topic in registry.topics() {
        println!(
            "  {:<40} {:>6} docs {:>10} bigrams",
            topic.name.bright_yellow(),
            topic.documents,
            topic.ngrams.len(),
        );
    }
}
