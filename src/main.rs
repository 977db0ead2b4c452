//! Crossword Clue Solver - CLI
//!
//! Suggests answers for a crossword clue from a word list, a letter pattern,
//! and a dictionary of word senses. Remembers confirmed and corrected answers.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clue_solver::{
    commands::{run_confirm, run_correct, run_interactive, run_solve},
    feedback::{FeedbackStore, JsonFeedbackFile},
    lexicon::Lexicon,
    semantic::{ScorerKind, SenseDatabase, Thesaurus},
    solver::{ClueSolver, SolverConfig},
};
use log::info;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "clue_solver",
    about = "Crossword clue solver: letter patterns plus dictionary-based ranking",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list, one candidate answer per line
    #[arg(short = 'w', long, global = true, default_value = "data/words.txt")]
    words: PathBuf,

    /// Sense database (JSON object: lemma -> list of senses)
    #[arg(short = 's', long, global = true, default_value = "data/senses.json")]
    senses: PathBuf,

    /// Where confirmed and corrected answers are remembered
    #[arg(short = 'f', long, global = true, default_value = "feedback.json")]
    feedback: PathBuf,

    /// Word-vector model; enables embedding ranking when it loads
    #[arg(long, global = true)]
    vectors: Option<PathBuf>,

    /// After a remembered answer, also list the best other candidates
    #[arg(long, global = true)]
    fill: bool,

    /// Log more (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default): solve, confirm, and correct in a loop
    Interactive,

    /// Rank candidate answers for a clue
    Solve {
        /// The clue text
        clue: String,

        /// Letters and ? wildcards, e.g. C?T; omit for any length
        #[arg(short, long, default_value = "")]
        pattern: String,
    },

    /// Solve a clue and remember the top answer
    Confirm {
        /// The clue text
        clue: String,

        /// Letters and ? wildcards, e.g. C?T; omit for any length
        #[arg(short, long, default_value = "")]
        pattern: String,
    },

    /// Remember the correct answer for a clue
    Correct {
        /// The clue text
        clue: String,

        /// The correct answer
        answer: String,

        /// Letters and ? wildcards, e.g. C?T; omit for any length
        #[arg(short, long, default_value = "")]
        pattern: String,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    // Only fails if a logger is already installed
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let lexicon = Lexicon::from_file(&cli.words)
        .with_context(|| format!("cannot start without a word list ({})", cli.words.display()))?;
    let thesaurus = Thesaurus::new(SenseDatabase::open_or_empty(&cli.senses));
    let feedback = FeedbackStore::open(JsonFeedbackFile::new(&cli.feedback));

    let scorer = ScorerKind::initialize(&thesaurus, cli.vectors.as_deref());
    info!("Ranking with the {} strategy", scorer.name());

    let config = SolverConfig {
        fill_after_feedback: cli.fill,
        ..SolverConfig::default()
    };
    let mut solver = ClueSolver::new(scorer, &lexicon, &thesaurus, feedback).with_config(config);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Default to interactive mode if no command given
    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => {
            run_interactive(&mut solver, &mut io::stdin().lock(), &mut out)?;
        }
        Commands::Solve { clue, pattern } => {
            run_solve(&mut solver, &clue, &pattern, &mut out)?;
        }
        Commands::Confirm { clue, pattern } => {
            run_confirm(&mut solver, &clue, &pattern, &mut out)?;
        }
        Commands::Correct {
            clue,
            answer,
            pattern,
        } => {
            run_correct(&mut solver, &clue, &pattern, &answer, &mut out)?;
        }
    }

    Ok(())
}
