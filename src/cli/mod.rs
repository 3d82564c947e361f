//! Command-line interface wiring for the `textplate` binary.
//!
//! This module owns the clap definitions and delegates execution to
//! specialized submodules that encapsulate each command family.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod common;
pub mod decode;
pub mod encode;
pub mod settings;
pub mod utils;

/// Parsed CLI entrypoint for the `textplate` binary.
#[derive(Parser, Debug)]
#[command(
    name = "textplate",
    version,
    about = "Generate and decode Factorio text plate blueprint strings"
)]
pub struct Cli {
    /// Top-level command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// High-level commands made available to end users.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a text plate blueprint string from text.
    Encode(encode::EncodeArgs),
    /// Decode a blueprint string into readable JSON.
    Decode(decode::DecodeArgs),
    #[command(subcommand)]
    Settings(settings::SettingsCommand),
}

/// Execute the requested command.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Encode(args) => encode::handle(args),
        Command::Decode(args) => decode::handle(args),
        Command::Settings(cmd) => settings::handle(cmd),
    }
}
