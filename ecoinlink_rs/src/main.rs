//! # ecoinlink
//!
//! Command-line front end for the ECOinLink site renderer.
//!
//! ```bash
//! # Static build for GitHub Pages style hosting
//! ecoinlink build --out dist --base-path /ecoinlink-platform/
//!
//! # Preview a location with the menu open
//! ecoinlink render '#/carlink' --menu-open
//!
//! # Replay shell events
//! printf 'scroll 40\ntoggle-menu\nnavigate /exlink\n' | ecoinlink simulate
//! ```
//!
//! Logs go to stderr; stdout carries command output only.

mod cli;
mod commands;
mod progress;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.parse().unwrap_or_default()),
        )
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            progress::error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = commands::load_config(cli.config.as_deref())?;
    commands::dispatch(cli.command, config)
}
