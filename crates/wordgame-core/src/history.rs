//! Append-only answer history.
//!
//! The history file holds one `{"id": N, "is_correct": B}` record per line. It is
//! read completely at startup and grows by exactly one line per answered
//! question. Every append is flushed and synced before it returns, so the file
//! on disk always equals the in-memory log. Only [`HistoryLog::create_empty`]
//! creates a file; appending to a missing file is a persistence error.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Result, WordGameError};
use crate::jsonl::read_records;
use crate::model::AnswerEvent;

/// The ordered record of every answer given so far.
#[derive(Debug)]
pub struct HistoryLog {
    path: PathBuf,
    events: Vec<AnswerEvent>,
    /// Answers appended by this process.
    run_count: usize,
    /// The file ends without a newline, so the next record must start one.
    needs_newline: bool,
}

fn parse_error(path: &Path, line: usize, source: serde_json::Error) -> WordGameError {
    WordGameError::HistoryParse {
        path: path.to_path_buf(),
        line,
        source,
    }
}

impl HistoryLog {
    /// Load the complete history from `path`.
    ///
    /// Any malformed record fails the whole load; a partial history is never
    /// returned.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| WordGameError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let events = read_records::<AnswerEvent, _>(content.as_bytes(), path, parse_error)?
            .into_iter()
            .map(|(_, event)| event)
            .collect::<Vec<_>>();

        tracing::debug!(
            answers = events.len(),
            "loaded history from {}",
            path.display()
        );

        Ok(Self {
            path: path.to_path_buf(),
            events,
            run_count: 0,
            needs_newline: !content.is_empty() && !content.ends_with('\n'),
        })
    }

    /// Create a new, empty history file. Fails if `path` already exists.
    pub fn create_empty(path: &Path) -> Result<Self> {
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|source| WordGameError::Persist {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::from_events(path, Vec::new()))
    }

    /// Wrap events already in memory. Nothing is written until [`append`](Self::append).
    pub fn from_events(path: &Path, events: Vec<AnswerEvent>) -> Self {
        Self {
            path: path.to_path_buf(),
            events,
            run_count: 0,
            needs_newline: false,
        }
    }

    /// Record one answer and make it durable before returning.
    ///
    /// The record is appended to the file, flushed and synced. If any of that
    /// fails the in-memory log is left unchanged and the error is returned; the
    /// caller must not keep presenting questions.
    pub fn append(&mut self, event: AnswerEvent) -> Result<()> {
        let persist_error = |source: std::io::Error| WordGameError::Persist {
            path: self.path.clone(),
            source,
        };

        let json = serde_json::to_string(&event).map_err(|e| persist_error(e.into()))?;
        let mut record = String::with_capacity(json.len() + 2);
        if self.needs_newline {
            record.push('\n');
        }
        record.push_str(&json);
        record.push('\n');

        let mut file = open_for_append(&self.path).map_err(persist_error)?;
        file.write_all(record.as_bytes()).map_err(persist_error)?;
        file.flush().map_err(persist_error)?;
        file.sync_data().map_err(persist_error)?;

        self.needs_newline = false;
        self.events.push(event);
        self.run_count += 1;
        tracing::trace!(id = event.id, correct = event.is_correct, "appended answer");
        Ok(())
    }

    pub fn events(&self) -> &[AnswerEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of answers appended since this log was loaded.
    pub fn run_count(&self) -> usize {
        self.run_count
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn open_for_append(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().append(true).open(path)
}
