//! The question/answer loop.
//!
//! A [`Session`] owns the lexicon and history for one process and moves through
//! `Idle -> Presenting -> Revealed -> Presenting -> ... -> Stopped`. Front ends
//! drive it either step by step (`draw`, `reveal`, `judge`, `stop`) or by
//! implementing [`Presenter`] and handing control to [`Session::run`].

use std::fmt;

use crate::error::{Result, WordGameError};
use crate::history::HistoryLog;
use crate::lexicon::Lexicon;
use crate::model::{AnswerEvent, Direction};
use crate::sampler::Sampler;
use crate::weights::{compute_distribution, Decay, Distribution};

/// Where the session is in the question cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// No question presented.
    Idle,
    /// A question is shown and its answer withheld.
    Presenting,
    /// The answer is shown, waiting for the learner's judgment.
    Revealed,
    /// Terminal; no further questions.
    Stopped,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Idle => write!(f, "idle"),
            SessionState::Presenting => write!(f, "presenting"),
            SessionState::Revealed => write!(f, "revealed"),
            SessionState::Stopped => write!(f, "stopped"),
        }
    }
}

/// The question currently on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    /// Lexicon index of the word being asked.
    pub word_index: usize,
    /// Which language is shown.
    pub direction: Direction,
    /// The text shown to the learner.
    pub text: String,
}

/// A learner action delivered by a front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Reveal,
    Judge(bool),
    Stop,
}

/// Presentation hooks for [`Session::run`].
///
/// The session never touches a display or keyboard itself; everything visible
/// goes through this trait.
pub trait Presenter {
    fn show_prompt(&mut self, prompt: &Prompt);
    fn show_answer(&mut self, prompt: &Prompt, answer: &str);
    fn show_run_count(&mut self, count: usize);
    /// Block until the learner acts. Returning [`Command::Stop`] ends the session.
    fn next_command(&mut self) -> Command;
}

/// One learner's training session.
pub struct Session {
    lexicon: Lexicon,
    history: HistoryLog,
    decay: Decay,
    sampler: Sampler,
    state: SessionState,
    current: Option<Prompt>,
}

impl Session {
    /// Start a session. Fails if the history names words the lexicon lacks.
    pub fn new(
        lexicon: Lexicon,
        history: HistoryLog,
        decay: Decay,
        sampler: Sampler,
    ) -> Result<Self> {
        lexicon.validate_history(history.events())?;
        tracing::info!(
            words = lexicon.len(),
            answers = history.len(),
            decay = decay.value(),
            "session started"
        );
        Ok(Self {
            lexicon,
            history,
            decay,
            sampler,
            state: SessionState::Idle,
            current: None,
        })
    }

    /// Pick the next question.
    ///
    /// Only accepted while idle: a question already on screen is never
    /// replaced without a judgment or a stop.
    pub fn draw(&mut self) -> Result<Prompt> {
        self.expect_state("draw", &[SessionState::Idle])?;

        let distribution = self.distribution()?;
        let word_index = self.sampler.sample_index(&distribution);
        let direction = self.sampler.sample_direction();
        let word = &self.lexicon.entries()[word_index];
        let prompt = Prompt {
            word_index,
            direction,
            text: direction.prompt_text(word).to_string(),
        };

        tracing::debug!(
            word = word_index,
            %direction,
            probability = distribution.get(word_index).unwrap_or_default(),
            "drew question"
        );

        self.current = Some(prompt.clone());
        self.state = SessionState::Presenting;
        Ok(prompt)
    }

    /// Show the withheld answer for the current question.
    pub fn reveal(&mut self) -> Result<String> {
        self.expect_state("reveal", &[SessionState::Presenting, SessionState::Revealed])?;
        let prompt = self.current_prompt("reveal")?;
        let answer = prompt
            .direction
            .answer_text(&self.lexicon.entries()[prompt.word_index])
            .to_string();
        self.state = SessionState::Revealed;
        Ok(answer)
    }

    /// Record the learner's judgment and draw the next question.
    ///
    /// The answer is durable in the history file before the next question is
    /// drawn. Returns the number of answers given in this run. If the history
    /// cannot be written the session stops.
    pub fn judge(&mut self, correct: bool) -> Result<usize> {
        self.expect_state("judge", &[SessionState::Revealed])?;
        let word_index = self.current_prompt("judge")?.word_index;

        let event = AnswerEvent::new(word_index, correct);
        if let Err(e) = self.history.append(event) {
            tracing::error!(error = ?e, "stopping session");
            self.halt();
            return Err(e);
        }
        tracing::debug!(
            word = word_index,
            correct,
            run = self.history.run_count(),
            "recorded answer"
        );

        self.state = SessionState::Idle;
        self.current = None;
        if let Err(e) = self.draw() {
            self.halt();
            return Err(e);
        }
        Ok(self.history.run_count())
    }

    /// End the session. Accepted in every state; repeated calls are no-ops.
    pub fn stop(&mut self) {
        if self.state != SessionState::Stopped {
            tracing::info!(
                run = self.history.run_count(),
                total = self.history.len(),
                "session stopped"
            );
        }
        self.halt();
    }

    /// Drive the session with a front end until it stops.
    ///
    /// Commands that do not fit the current state (judging before the answer is
    /// shown, revealing twice) are ignored. Returns the run count.
    pub fn run(&mut self, presenter: &mut dyn Presenter) -> Result<usize> {
        if self.state == SessionState::Stopped {
            return Ok(self.history.run_count());
        }
        if self.state == SessionState::Idle {
            self.draw()?;
        }
        if let Some(prompt) = &self.current {
            presenter.show_prompt(prompt);
        }

        loop {
            match (self.state, presenter.next_command()) {
                (_, Command::Stop) => {
                    self.stop();
                    break;
                }
                (SessionState::Presenting, Command::Reveal) => {
                    let answer = self.reveal()?;
                    if let Some(prompt) = &self.current {
                        presenter.show_answer(prompt, &answer);
                    }
                }
                (SessionState::Revealed, Command::Judge(correct)) => {
                    let count = self.judge(correct)?;
                    presenter.show_run_count(count);
                    if let Some(prompt) = &self.current {
                        presenter.show_prompt(prompt);
                    }
                }
                (state, command) => {
                    tracing::debug!(%state, ?command, "ignoring command");
                }
            }
        }

        Ok(self.history.run_count())
    }

    /// The current selection probabilities.
    pub fn distribution(&self) -> Result<Distribution> {
        compute_distribution(&self.lexicon, self.history.events(), self.decay)
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn current(&self) -> Option<&Prompt> {
        self.current.as_ref()
    }

    /// Answers given since this session started.
    pub fn run_count(&self) -> usize {
        self.history.run_count()
    }

    /// Answers in the whole history, including earlier runs.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn decay(&self) -> Decay {
        self.decay
    }

    fn halt(&mut self) {
        self.state = SessionState::Stopped;
        self.current = None;
    }

    fn expect_state(&self, action: &'static str, allowed: &[SessionState]) -> Result<()> {
        if allowed.contains(&self.state) {
            Ok(())
        } else {
            Err(WordGameError::InvalidTransition {
                action,
                state: self.state,
            })
        }
    }

    fn current_prompt(&self, action: &'static str) -> Result<&Prompt> {
        self.current.as_ref().ok_or(WordGameError::InvalidTransition {
            action,
            state: self.state,
        })
    }
}
