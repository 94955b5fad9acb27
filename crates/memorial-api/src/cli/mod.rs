//! CLI command definitions for the `memorial` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod clock;
pub mod config;
pub mod submit;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Share a memory with the memorial archive.
#[derive(Parser)]
#[command(name = "memorial", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Also export trace spans through OpenTelemetry (stdout exporter).
    ///
    /// Spans are printed to stdout, so this cannot be combined with `--json`.
    #[arg(long, global = true, conflicts_with = "json")]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit a memory (text, optional attachment, tags).
    Submit(SubmitArgs),

    /// Show the memorial clock, updating once per second.
    Clock {
        /// Stop after this many ticks (runs until Ctrl+C when omitted).
        #[arg(long)]
        ticks: Option<u32>,
    },

    /// Show the resolved configuration.
    Config,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[derive(clap::Args)]
pub struct SubmitArgs {
    /// Your name.
    #[arg(long)]
    pub name: Option<String>,

    /// Your email address.
    #[arg(long)]
    pub email: Option<String>,

    /// The memory to share.
    #[arg(long, conflicts_with = "memory_file")]
    pub memory: Option<String>,

    /// Read the memory text from a file.
    #[arg(long, value_name = "PATH")]
    pub memory_file: Option<PathBuf>,

    /// Tag the memory with a date, name or place (repeatable).
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Attach a photo or document.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Do not notify me when the full archive is ready.
    #[arg(long)]
    pub no_notify: bool,

    /// Never prompt; fail if a required field is missing.
    #[arg(long)]
    pub no_input: bool,
}
