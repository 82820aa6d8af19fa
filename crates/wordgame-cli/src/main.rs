//! wordgame CLI — the terminal front end for the adaptive flashcard trainer.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

mod commands;

use commands::stats::OutputFormat;

#[derive(Parser)]
#[command(name = "wordgame", version, about = "Adaptive bilingual flashcard trainer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// File and tuning options shared by the commands that open a session.
#[derive(Args, Debug, Clone)]
pub struct SessionArgs {
    /// Lexicon file, one {"a", "b", "freq"} record per line
    #[arg(long)]
    lexicon: Option<PathBuf>,

    /// History file, one {"id", "is_correct"} record per line
    #[arg(long)]
    history: Option<PathBuf>,

    /// Decay level, strictly between 0 and 1 (default: 0.1)
    #[arg(long)]
    decay: Option<f64>,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive training session
    Play {
        #[command(flatten)]
        session: SessionArgs,

        /// Seed for the word and direction draws (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show answer statistics and the words most likely to come up next
    Stats {
        #[command(flatten)]
        session: SessionArgs,

        /// Number of words to list
        #[arg(long, default_value = "10")]
        top: usize,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Check a lexicon (and optionally a history) for errors
    Validate {
        /// Lexicon file to check
        #[arg(long)]
        lexicon: PathBuf,

        /// History file to check against the lexicon
        #[arg(long)]
        history: Option<PathBuf>,
    },

    /// Create a sample lexicon, an empty history and a config file
    Init {
        /// Directory to create the files in
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wordgame=info".parse().expect("static directive is valid")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { session, seed } => commands::play::execute(session, seed),
        Commands::Stats {
            session,
            top,
            format,
        } => commands::stats::execute(session, top, format),
        Commands::Validate { lexicon, history } => commands::validate::execute(lexicon, history),
        Commands::Init { dir } => commands::init::execute(dir),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
