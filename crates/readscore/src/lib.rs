//! Argument parsing for the `readscore` binary.
//!
//! `readscore FILE` scores a file (see [`commands::score`]); `readscore info`
//! shows the effective settings. [`command()`] hands the clap definition to
//! `xtask` for man pages and completions.

pub mod commands;

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// When to color terminal output.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Color when stdout is a capable terminal.
    #[default]
    Auto,
    /// Color even when piped.
    Always,
    /// Plain text only.
    Never,
}

impl ColorChoice {
    /// Install the choice as the process-wide `owo-colors` override.
    pub fn apply(self) {
        match self {
            Self::Auto => owo_colors::unset_override(),
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG               Log filter (e.g., debug, readscore_core=trace)
    READSCORE_LOG_PATH     Explicit log file path
    READSCORE_LOG_DIR      Log directory
    READSCORE_SCORE        Score to calculate without prompting (ARI, FK, SMOG, CL, all)
";

/// `readscore [OPTIONS] [FILE] [COMMAND]`
#[derive(Parser)]
#[command(name = "readscore")]
#[command(
    about = "Estimate the reading age of a text with ARI, Flesch–Kincaid, SMOG and Coleman–Liau",
    long_about = None
)]
#[command(version)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// Run a subcommand instead of scoring.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// File and score selection for the default action.
    #[command(flatten)]
    pub score: commands::score::ScoreArgs,

    /// Print the bare version number and exit
    #[arg(long)]
    pub version_only: bool,

    /// Extra settings file, merged over discovered ones
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Change to DIR before reading settings or FILE
    #[arg(short = 'C', long, global = true)]
    pub chdir: Option<PathBuf>,

    /// Log errors only
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log more (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Color scores and headings
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Print a JSON report instead of text
    #[arg(long, global = true)]
    pub json: bool,
}

/// Subcommands other than scoring.
#[derive(Subcommand)]
pub enum Commands {
    /// Show version and effective settings
    Info(commands::info::InfoArgs),
}

/// The clap command, for man pages and completions.
pub fn command() -> clap::Command {
    Cli::command()
}
