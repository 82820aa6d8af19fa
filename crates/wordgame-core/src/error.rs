//! Error types for the wordgame core.
//!
//! Load-time failures, persistence failures and numerical failures are kept
//! apart so a front end can decide how to report them (a message box, a line on
//! stderr) instead of the process aborting mid-question.

use std::path::PathBuf;

use thiserror::Error;

use crate::session::SessionState;

/// Errors produced by the wordgame core.
#[derive(Debug, Error)]
pub enum WordGameError {
    /// A lexicon or history file could not be opened or read.
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A lexicon record is not a valid `{"a", "b", "freq"}` object.
    #[error("malformed lexicon record at {}:{line}", path.display())]
    LexiconParse {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// A history record is not a valid `{"id", "is_correct"}` object.
    #[error("malformed history record at {}:{line}", path.display())]
    HistoryParse {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// The lexicon contains no words.
    #[error("lexicon {} contains no words", path.display())]
    EmptyLexicon { path: PathBuf },

    /// A lexicon record carries a zero, negative or non-finite frequency.
    #[error("lexicon record at line {line} has non-positive frequency {freq}")]
    NonPositiveFrequency { line: usize, freq: f64 },

    /// A history event references a word the lexicon does not contain.
    #[error("history references word {index}, but the lexicon only has {lexicon_len} words")]
    UnknownWord { index: usize, lexicon_len: usize },

    /// The decay parameter lies outside the open interval (0, 1).
    #[error("decay must lie strictly between 0 and 1, got {0}")]
    InvalidDecay(f64),

    /// The word weights summed to zero (or overflowed), so no distribution exists.
    #[error("word weights sum to zero; the decay is too aggressive for this history")]
    ZeroMass,

    /// An answer could not be made durable in the history file.
    #[error("failed to persist answer to {}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A session operation was called in a state that does not accept it.
    #[error("cannot {action} while the session is {state}")]
    InvalidTransition {
        action: &'static str,
        state: SessionState,
    },
}

impl WordGameError {
    /// Returns `true` for failures that happen while loading input files.
    ///
    /// These abort startup before any question is presented.
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            WordGameError::Io { .. }
                | WordGameError::LexiconParse { .. }
                | WordGameError::HistoryParse { .. }
                | WordGameError::EmptyLexicon { .. }
                | WordGameError::NonPositiveFrequency { .. }
                | WordGameError::UnknownWord { .. }
        )
    }

    /// Returns `true` if the history file could not be written.
    pub fn is_persistence_error(&self) -> bool {
        matches!(self, WordGameError::Persist { .. })
    }

    /// Returns `true` for configuration problems surfaced by the weight engine.
    pub fn is_numerical_error(&self) -> bool {
        matches!(
            self,
            WordGameError::ZeroMass | WordGameError::InvalidDecay(_)
        )
    }
}

/// Convenience alias used throughout the core crate.
pub type Result<T> = std::result::Result<T, WordGameError>;
