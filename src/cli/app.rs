//! CLI definitions and entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use super::commands;
use schemadiff::config::{Config, FailOn};
use schemadiff::output::{OperationResult, OutputMode};

/// schemadiff - Detect breaking task signature changes
#[derive(Parser, Debug)]
#[command(
    name = "schemadiff",
    version,
    about = "Detect breaking task signature changes between schema snapshots",
    long_about = "Compare two task-schema documents before a deploy.\n\n\
                  Tasks are matched by name. Changed tasks are checked argument by\n\
                  argument, and every incompatibility is reported as [INFO],\n\
                  [WARNING] or [ERROR]."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to a config file (default: ./schemadiff.toml, then the user config dir)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compare two schema documents
    Diff {
        /// Schema of the currently deployed version
        old: PathBuf,

        /// Schema of the version about to be deployed
        new: PathBuf,

        /// Lowest severity that fails the run: never, info, warning, error
        #[arg(long)]
        fail_on: Option<FailOn>,

        /// Hide informational findings
        #[arg(short, long)]
        quiet: bool,
    },

    /// Check that schema documents load cleanly
    Validate {
        /// Schema documents to check
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Diff {
            old,
            new,
            fail_on,
            quiet,
        }) => {
            let config = Config::load(cli.config.as_deref())?;
            commands::diff(&old, &new, fail_on, quiet, &config, output_mode)
        },
        Some(Command::Validate { files }) => commands::validate(&files, output_mode),
        Some(Command::Version) | None => {
            let result = OperationResult {
                success: true,
                message: format!("schemadiff {}", schemadiff::VERSION),
            };
            result.render(output_mode);
            Ok(ExitCode::SUCCESS)
        },
    }
}
