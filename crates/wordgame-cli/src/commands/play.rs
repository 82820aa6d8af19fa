//! The `wordgame play` command.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use wordgame_core::{Command, Direction, HistoryLog, Lexicon, Presenter, Prompt, Sampler, Session};

use crate::SessionArgs;

const HELP: &str = "[enter] show answer  [y] correct  [n] incorrect  [q] quit";

/// Line-oriented terminal front end.
///
/// Reads one command per line. End of input counts as quitting.
pub struct TerminalPresenter<R, W> {
    input: R,
    output: W,
    error: Option<io::Error>,
}

impl<R: BufRead, W: Write> TerminalPresenter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            error: None,
        }
    }

    /// Surface the first I/O error hit while presenting.
    pub fn finish(self) -> io::Result<W> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.output),
        }
    }

    fn write_line(&mut self, line: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.output, "{line}").and_then(|()| self.output.flush()) {
            self.error = Some(e);
        }
    }
}

fn side_label(direction: Direction) -> &'static str {
    match direction {
        Direction::A => "A",
        Direction::B => "B",
    }
}

impl<R: BufRead, W: Write> Presenter for TerminalPresenter<R, W> {
    fn show_prompt(&mut self, prompt: &Prompt) {
        let shown = side_label(prompt.direction);
        let hidden = side_label(prompt.direction.opposite());
        self.write_line(&format!("\n{shown}: {}\n{hidden}: ?", prompt.text));
    }

    fn show_answer(&mut self, prompt: &Prompt, answer: &str) {
        let hidden = side_label(prompt.direction.opposite());
        self.write_line(&format!("{hidden}: {answer}"));
    }

    fn show_run_count(&mut self, count: usize) {
        self.write_line(&format!("Accumulated {count} answers in current run"));
    }

    fn next_command(&mut self) -> Command {
        loop {
            if self.error.is_some() {
                return Command::Stop;
            }
            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => return Command::Stop,
                Ok(_) => {}
                Err(e) => {
                    self.error = Some(e);
                    return Command::Stop;
                }
            }
            match line.trim().to_lowercase().as_str() {
                "" | "s" | "show" => return Command::Reveal,
                "y" | "yes" => return Command::Judge(true),
                "n" | "no" => return Command::Judge(false),
                "q" | "quit" => return Command::Stop,
                other => {
                    tracing::debug!("unrecognised input: {other}");
                    self.write_line(HELP);
                }
            }
        }
    }
}

pub fn execute(args: SessionArgs, seed: Option<u64>) -> Result<()> {
    let config = super::resolve(args)?;

    let lexicon = Lexicon::load(&config.lexicon_path)?;
    let history = HistoryLog::load(&config.history_path)?;

    println!("Loaded {} frequency-annotated words", lexicon.len());
    println!("Loaded {} answers from history", history.len());
    println!("{HELP}");

    let sampler = match seed {
        Some(seed) => Sampler::with_seed(seed),
        None => Sampler::from_entropy(),
    };
    let mut session = Session::new(lexicon, history, config.decay, sampler)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut presenter = TerminalPresenter::new(stdin.lock(), stdout.lock());
    let outcome = session.run(&mut presenter);
    presenter.finish()?;
    let run_count = outcome?;

    println!(
        "\nSession ended: {run_count} answers this run, {} in history",
        session.history_len()
    );

    Ok(())
}
