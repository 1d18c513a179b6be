//! Mastermind - CLI
//!
//! Scores a round of Mastermind given on the command line, or a batch of
//! rounds read from a file.

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{ArgAction, Parser, Subcommand};
use mastermind::{
    commands::{RoundError, load_rounds, score_batch, score_round},
    core::Score,
    logging,
    output::{format_result, print_batch_result, print_batch_summary, print_usage_hint},
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const EXIT_OK: u8 = 0;

/// Exit code for codes that were parsed but rejected
const EXIT_REJECTED: u8 = 1;

/// Exit code for arguments clap could not make sense of
const EXIT_USAGE: u8 = 2;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Solves a round (i.e. an attempt) of the Mastermind game",
    version,
    author,
    subcommand_negates_reqs = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Secret code: comma separated digits 1-9, e.g. 1,7,9,3,7
    #[arg(
        short,
        long = "secret-code",
        visible_alias = "secret",
        alias = "secret_code",
        required = true,
        allow_hyphen_values = true
    )]
    secret_code: Option<String>,

    /// Guess: comma separated digits 1-9, same length as the secret
    #[arg(short, long, required = true, allow_hyphen_values = true)]
    guess: Option<String>,

    /// More logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Score every round in a file, one "<secret> <guess>" pair per line
    Batch {
        /// Path to the rounds file
        file: PathBuf,

        /// Print counts and timing after the results
        #[arg(long)]
        summary: bool,
    },
}

fn main() -> Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return Ok(usage_report(err.kind()).emit());
        }
    };

    logging::init(cli.verbose);

    match cli.command {
        Some(Commands::Batch { file, summary }) => run_batch_command(&file, summary),
        None => match (cli.secret_code.as_deref(), cli.guess.as_deref()) {
            (Some(secret), Some(guess)) => Ok(round_report(&score_round(secret, guess)).emit()),
            _ => Ok(usage_report(ErrorKind::MissingRequiredArgument).emit()),
        },
    }
}

fn run_batch_command(file: &Path, summary: bool) -> Result<ExitCode> {
    let rounds = load_rounds(file)
        .with_context(|| format!("failed to read rounds from {}", file.display()))?;

    let result = score_batch(&rounds);
    print_batch_result(&result);
    if summary {
        print_batch_summary(&result.summary);
    }

    Ok(if result.all_scored() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_REJECTED)
    })
}

/// What a run prints on stdout and how it exits
#[derive(Debug, PartialEq, Eq)]
struct Report {
    /// Print the legacy "Please use only integers..." hint first
    hint: bool,
    result_line: Option<String>,
    exit: u8,
}

impl Report {
    fn rejected(hint: bool, exit: u8) -> Self {
        Self {
            hint,
            result_line: Some(format_result(None)),
            exit,
        }
    }

    fn emit(&self) -> ExitCode {
        if self.hint {
            print_usage_hint();
        }
        if let Some(line) = &self.result_line {
            println!("{line}");
        }
        ExitCode::from(self.exit)
    }
}

/// Malformed or out-of-range digits get the hint; a length mismatch does not
fn round_report(result: &Result<Score, RoundError>) -> Report {
    match result {
        Ok(score) => Report {
            hint: false,
            result_line: Some(format_result(Some(*score))),
            exit: EXIT_OK,
        },
        Err(RoundError::Format { .. }) => Report::rejected(true, EXIT_REJECTED),
        Err(_) => Report::rejected(false, EXIT_REJECTED),
    }
}

/// Help and version go through untouched; anything else keeps the legacy
/// hint and `None` result on stdout.
fn usage_report(kind: ErrorKind) -> Report {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => Report {
            hint: false,
            result_line: None,
            exit: EXIT_OK,
        },
        _ => Report::rejected(true, EXIT_USAGE),
    }
}
