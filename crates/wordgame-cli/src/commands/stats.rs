//! The `wordgame stats` command.

use anyhow::Result;
use clap::ValueEnum;
use serde_json::json;

use wordgame_core::statistics::{compute_word_stats, most_likely, summarize};
use wordgame_core::{HistoryLog, Lexicon};

use crate::SessionArgs;

/// How `wordgame stats` prints its report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Summary line and a table
    #[default]
    Text,
    /// A single JSON document
    Json,
}

pub fn execute(args: SessionArgs, top: usize, format: OutputFormat) -> Result<()> {
    let config = super::resolve(args)?;

    let lexicon = Lexicon::load(&config.lexicon_path)?;
    let history = HistoryLog::load(&config.history_path)?;
    lexicon.validate_history(history.events())?;

    let summary = summarize(history.events());
    let stats = compute_word_stats(&lexicon, history.events(), config.decay)?;
    let ranked = most_likely(&stats, top);

    match format {
        OutputFormat::Json => {
            let report = json!({
                "words": lexicon.len(),
                "decay": config.decay.value(),
                "summary": summary,
                "most_likely": ranked,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            println!(
                "{} words, {} answers ({} correct, {} incorrect, {:.1}% accuracy), \
                 {} distinct words asked",
                lexicon.len(),
                summary.total_answers,
                summary.correct,
                summary.incorrect,
                summary.accuracy * 100.0,
                summary.distinct_words,
            );
            print_table(&ranked);
        }
    }

    Ok(())
}

fn print_table(ranked: &[&wordgame_core::statistics::WordStats]) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec![
        "#", "A", "B", "Attempts", "Accuracy", "Weight", "Next %",
    ]);

    for stats in ranked {
        let accuracy = stats
            .accuracy
            .map(|a| format!("{:.1}%", a * 100.0))
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            Cell::new(stats.index),
            Cell::new(&stats.a),
            Cell::new(&stats.b),
            Cell::new(stats.attempts),
            Cell::new(accuracy),
            Cell::new(format!("{:.4}", stats.weight)),
            Cell::new(format!("{:.2}%", stats.probability * 100.0)),
        ]);
    }

    println!("\n{table}");
}
