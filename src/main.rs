//! Aligner CLI - score a project against its stated purpose
//!
//! Usage: aligner <COMMAND>
//!
//! Commands:
//!   analyze  Score every file against a stated purpose and plan cleanup
//!   purpose  Show how a purpose statement is interpreted
//!   scan     List the facts extracted from each file

mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use aligner::presentation::{Cli, Commands};

use commands::analyze::AnalyzeArgs;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Analyze {
            path,
            purpose,
            threshold,
            config,
            output,
            fail_under,
        } => commands::analyze::cmd_analyze(
            AnalyzeArgs {
                path: &path,
                purpose: &purpose,
                threshold,
                config: config.as_deref(),
                output: output.as_deref(),
                fail_under,
            },
            cli.json,
            cli.verbose,
            cli.color,
        ),
        Commands::Purpose { text, config } => commands::purpose::cmd_purpose(
            &text,
            config.as_deref(),
            cli.json,
            cli.verbose,
            cli.color,
        ),
        Commands::Scan { path, config } => {
            commands::scan::cmd_scan(&path, config.as_deref(), cli.json, cli.verbose, cli.color)
        }
    }
}

/// Logs go to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
