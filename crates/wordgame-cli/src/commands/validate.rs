//! The `wordgame validate` command.

use std::path::PathBuf;

use anyhow::Result;

use wordgame_core::statistics::summarize;
use wordgame_core::{HistoryLog, Lexicon};

pub fn execute(lexicon_path: PathBuf, history_path: Option<PathBuf>) -> Result<()> {
    let lexicon = Lexicon::load(&lexicon_path)?;
    let total_freq: f64 = lexicon.base_frequencies().sum();
    println!(
        "Lexicon: {} ({} words, total frequency {:.4})",
        lexicon_path.display(),
        lexicon.len(),
        total_freq
    );

    let mut seen = std::collections::HashSet::new();
    let duplicates = lexicon
        .entries()
        .iter()
        .filter(|e| !seen.insert((e.a.as_str(), e.b.as_str())))
        .count();
    if duplicates > 0 {
        println!("  WARNING: {duplicates} duplicate word pair(s)");
    }

    if let Some(history_path) = history_path {
        let history = HistoryLog::load(&history_path)?;
        lexicon.validate_history(history.events())?;
        let summary = summarize(history.events());
        println!(
            "History: {} ({} answers over {} words)",
            history_path.display(),
            summary.total_answers,
            summary.distinct_words
        );
    }

    println!("All files valid.");
    Ok(())
}
