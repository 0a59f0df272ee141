//! Gitsplain CLI - symbol extraction from the command line.
//!
//! Reads a repository checkout, extracts its classes, structs, interfaces and
//! top-level functions, and prints them in the one-line prompt format or as a
//! summary.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{OutputFormat, RunOptions};

/// Gitsplain: source symbol extraction for architecture diagrams.
#[derive(Parser)]
#[command(name = "gitsplain")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Config file (defaults to .gitsplain.yaml in the analyzed directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the symbols defined in a directory
    Symbols {
        /// Repository root to analyze
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Keep test files
        #[arg(long)]
        include_tests: bool,

        /// Maximum number of files to parse
        #[arg(short, long)]
        max_files: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show a static analysis summary for a directory
    Stats {
        /// Repository root to analyze
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Keep test files
        #[arg(long)]
        include_tests: bool,

        /// Maximum number of files to parse
        #[arg(short, long)]
        max_files: Option<usize>,
    },

    /// List supported languages and their file extensions
    Languages,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Symbols {
            dir,
            include_tests,
            max_files,
            format,
        } => {
            let options = RunOptions {
                config: cli.config,
                include_tests,
                max_files,
            };
            cli::symbols::run(&dir, &options, format)
        }
        Commands::Stats {
            dir,
            include_tests,
            max_files,
        } => {
            let options = RunOptions {
                config: cli.config,
                include_tests,
                max_files,
            };
            cli::stats::run(&dir, &options)
        }
        Commands::Languages => {
            cli::languages::run();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            // Show cause chain for nested errors
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                eprintln!("  {}: {cause}", "caused by".dimmed());
                source = std::error::Error::source(cause);
            }
            ExitCode::FAILURE
        }
    }
}
