//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--json, --color, --verbose) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Aligner - check that a project still does what it says it does
#[derive(Parser, Debug)]
#[command(name = "aligner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Machine-readable output (one JSON object per line)
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score every file against a stated purpose and plan cleanup
    Analyze {
        /// Project root to analyse
        path: PathBuf,

        /// What the project is supposed to do
        #[arg(short, long)]
        purpose: String,

        /// Files scoring below this are misaligned (0.0 - 1.0)
        #[arg(long)]
        threshold: Option<f64>,

        /// Config file to use instead of the discovered one
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Also write the full report as pretty JSON
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Exit non-zero when alignment is below this percentage
        #[arg(long, value_name = "PCT", value_parser = clap::value_parser!(u32).range(0..=100))]
        fail_under: Option<u32>,
    },

    /// Show how a purpose statement is interpreted
    Purpose {
        /// Purpose statement
        text: String,

        /// Config file to use instead of the discovered one
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// List the facts extracted from each file, without scoring
    Scan {
        /// Project root to scan
        path: PathBuf,

        /// Config file to use instead of the discovered one
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}
