//! wordgame-core — adaptive weighting and sampling for a bilingual flashcard trainer.
//!
//! The crate loads a frequency-annotated lexicon and an append-only answer
//! history, turns them into a probability distribution over words, and draws
//! the next question from it. Front ends talk to it through [`session::Session`].

pub mod config;
pub mod error;
mod jsonl;
pub mod history;
pub mod lexicon;
pub mod model;
pub mod sampler;
pub mod session;
pub mod statistics;
pub mod weights;

pub use error::{Result, WordGameError};
pub use history::HistoryLog;
pub use lexicon::Lexicon;
pub use model::{AnswerEvent, Direction, WordEntry};
pub use sampler::Sampler;
pub use session::{Command, Presenter, Prompt, Session, SessionState};
pub use weights::{compute_distribution, Decay, Distribution};
