//! cfrec - collaborative filtering from the command line
//!
//! Usage:
//!   cfrec predict ratings.txt                          # Pearson, all neighbors, simple formula
//!   cfrec predict ratings.txt -m cosine -k 3 -f mean-diff
//!   cfrec predict ratings.csv --min 1 --max 5 --top 2  # clamp and list the best two items
//!   cfrec predict ratings.txt --json                   # full result as JSON
//!   cfrec similarity ratings.txt -m euclidean          # similarity matrix and neighbors only

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod output;

use commands::{EngineArgs, InputArgs};

/// cfrec - complete rating matrices with user-based collaborative filtering
#[derive(Parser)]
#[command(name = "cfrec")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict every unrated cell and list recommendations
    Predict {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        engine: EngineArgs,

        /// Show at most N recommendations per user
        #[arg(long, value_name = "N")]
        top: Option<usize>,

        /// Write the completed matrix to this file (rating file layout)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Show the similarity matrix and neighbor lists
    Similarity {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        engine: EngineArgs,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Commands::Predict {
            input,
            engine,
            top,
            output,
        } => commands::predict::run(input, engine, *top, output.as_deref(), cli.json),
        Commands::Similarity { input, engine } => {
            commands::similarity::run(input, engine, cli.json)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            e.exit_code()
        }
    }
}
