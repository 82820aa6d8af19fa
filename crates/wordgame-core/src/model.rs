//! Core data model types for wordgame.
//!
//! These mirror the on-disk record formats: one `WordEntry` per lexicon line and
//! one `AnswerEvent` per history line.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single bilingual vocabulary item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordEntry {
    /// Text in language A.
    pub a: String,
    /// Text in language B.
    pub b: String,
    /// Base frequency weight, strictly positive.
    pub freq: f64,
}

impl WordEntry {
    pub fn new(a: impl Into<String>, b: impl Into<String>, freq: f64) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            freq,
        }
    }

    /// Text shown or withheld for the given language side.
    pub fn text(&self, side: Direction) -> &str {
        match side {
            Direction::A => &self.a,
            Direction::B => &self.b,
        }
    }
}

/// One answered question, as recorded in the history log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerEvent {
    /// Index of the word in the lexicon.
    pub id: usize,
    /// Whether the learner judged their answer correct.
    pub is_correct: bool,
}

impl AnswerEvent {
    pub fn new(id: usize, is_correct: bool) -> Self {
        Self { id, is_correct }
    }
}

/// Which language is shown as the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Language A is shown, language B is the expected answer.
    A,
    /// Language B is shown, language A is the expected answer.
    B,
}

impl Direction {
    /// The language withheld as the answer.
    pub fn opposite(self) -> Self {
        match self {
            Direction::A => Direction::B,
            Direction::B => Direction::A,
        }
    }

    pub fn prompt_text(self, word: &WordEntry) -> &str {
        word.text(self)
    }

    pub fn answer_text(self, word: &WordEntry) -> &str {
        word.text(self.opposite())
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::A => write!(f, "a"),
            Direction::B => write!(f, "b"),
        }
    }
}
