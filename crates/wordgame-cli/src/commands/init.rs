//! The `wordgame init` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use wordgame_core::HistoryLog;

pub fn execute(dir: PathBuf) -> Result<()> {
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create directory: {}", dir.display()))?;

    let config_path = dir.join("wordgame.toml");
    if config_path.exists() {
        println!("wordgame.toml already exists, skipping.");
    } else {
        std::fs::write(&config_path, SAMPLE_CONFIG)?;
        println!("Created wordgame.toml");
    }

    let lexicon_path = dir.join("lexicon.jsonl");
    if lexicon_path.exists() {
        println!("lexicon.jsonl already exists, skipping.");
    } else {
        std::fs::write(&lexicon_path, SAMPLE_LEXICON)?;
        println!("Created lexicon.jsonl");
    }

    let history_path = dir.join("history.jsonl");
    if history_path.exists() {
        println!("history.jsonl already exists, skipping.");
    } else {
        HistoryLog::create_empty(&history_path)?;
        println!("Created history.jsonl");
    }

    println!("\nNext steps:");
    println!("  1. Replace lexicon.jsonl with your own word list");
    println!("  2. Run: wordgame validate --lexicon lexicon.jsonl --history history.jsonl");
    println!("  3. Run: wordgame play");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# wordgame configuration

lexicon_path = "lexicon.jsonl"
history_path = "history.jsonl"

# How strongly each answer shifts a word's weight (0 < decay < 1).
decay = 0.1
"#;

const SAMPLE_LEXICON: &str = r#"{"a": "cat", "b": "gato", "freq": 0.5}
{"a": "dog", "b": "perro", "freq": 0.5}
{"a": "house", "b": "casa", "freq": 0.8}
{"a": "water", "b": "agua", "freq": 0.9}
{"a": "book", "b": "libro", "freq": 0.4}
{"a": "bread", "b": "pan", "freq": 0.3}
{"a": "friend", "b": "amigo", "freq": 0.6}
{"a": "city", "b": "ciudad", "freq": 0.4}
"#;
