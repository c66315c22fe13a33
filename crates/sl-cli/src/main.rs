//! CLI frontend for Storyloom branching quizzes.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "sl",
    about = "Storyloom: branching quizzes that write a story from your answers",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine transitions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a sample quiz file to start from
    Init {
        /// Path of the quiz file to create
        path: PathBuf,
    },

    /// Validate a quiz file and summarize its questions
    Check {
        /// Quiz file (JSON)
        file: PathBuf,
    },

    /// Play a quiz interactively
    Play {
        /// Quiz file (JSON)
        file: PathBuf,

        /// RNG seed for reproducible stories
        #[arg(short, long)]
        seed: Option<u64>,

        /// Player name (default: drawn from the quiz's name list)
        #[arg(short, long)]
        name: Option<String>,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Init { path } => commands::init::run(&path),
        Commands::Check { file } => commands::check::run(&file),
        Commands::Play { file, seed, name } => commands::play::run(&file, seed, name.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
