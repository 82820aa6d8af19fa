//! Frequency-annotated lexicon loader.
//!
//! A lexicon file holds one `{"a": ..., "b": ..., "freq": ...}` record per line.
//! Words are identified by their position in the file, so the order is fixed
//! once a history log refers to it.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::{Result, WordGameError};
use crate::jsonl::read_records;
use crate::model::{AnswerEvent, WordEntry};

/// The ordered, read-only word list.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexicon {
    entries: Vec<WordEntry>,
}

fn parse_error(path: &Path, line: usize, source: serde_json::Error) -> WordGameError {
    WordGameError::LexiconParse {
        path: path.to_path_buf(),
        line,
        source,
    }
}

impl Lexicon {
    /// Load a lexicon from a JSON-lines file.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| WordGameError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let lexicon = Self::from_reader(BufReader::new(file), path)?;
        tracing::debug!(
            words = lexicon.len(),
            "loaded lexicon from {}",
            path.display()
        );
        Ok(lexicon)
    }

    /// Parse a lexicon from any buffered reader; `source` names it in errors.
    pub fn from_reader<R: BufRead>(reader: R, source: &Path) -> Result<Self> {
        let records = read_records::<WordEntry, _>(reader, source, parse_error)?;
        if records.is_empty() {
            return Err(WordGameError::EmptyLexicon {
                path: source.to_path_buf(),
            });
        }
        for (line, entry) in &records {
            check_frequency(*line, entry.freq)?;
        }
        Ok(Self {
            entries: records.into_iter().map(|(_, entry)| entry).collect(),
        })
    }

    /// Build a lexicon from entries already in memory.
    ///
    /// Applies the same checks as [`Lexicon::load`]; line numbers in errors are
    /// 1-based positions in `entries`.
    pub fn from_entries(entries: Vec<WordEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(WordGameError::EmptyLexicon {
                path: PathBuf::from("<memory>"),
            });
        }
        for (i, entry) in entries.iter().enumerate() {
            check_frequency(i + 1, entry.freq)?;
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false` for a successfully loaded lexicon.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&WordEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    pub fn base_frequencies(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|e| e.freq)
    }

    /// Check that every event refers to a word in this lexicon.
    pub fn validate_history(&self, events: &[AnswerEvent]) -> Result<()> {
        match events.iter().find(|e| e.id >= self.len()) {
            Some(event) => Err(WordGameError::UnknownWord {
                index: event.id,
                lexicon_len: self.len(),
            }),
            None => Ok(()),
        }
    }
}

fn check_frequency(line: usize, freq: f64) -> Result<()> {
    if freq.is_finite() && freq > 0.0 {
        Ok(())
    } else {
        Err(WordGameError::NonPositiveFrequency { line, freq })
    }
}
