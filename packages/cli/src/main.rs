mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{apply, init, inspect, validate, ApplyArgs, InitArgs, InspectArgs, ValidateArgs};
use tracing_subscriber::EnvFilter;

/// Blueprint CLI - inspect and edit website blueprint documents
#[derive(Parser, Debug)]
#[command(name = "blueprint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a document holding the initial skeleton
    Init(InitArgs),

    /// Report every structural issue in a document
    Validate(ValidateArgs),

    /// Apply a JSON list of actions to a document
    Apply(ApplyArgs),

    /// Show where a node sits in the tree
    Inspect(InspectArgs),
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Validate(args) => validate(args, &cwd),
        Command::Apply(args) => apply(args, &cwd),
        Command::Inspect(args) => inspect(args, &cwd),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
