//! Settings file helpers (`textplate settings ...`).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use textplate::PlateSettings;

use crate::cli::utils::write_output;

/// Settings subcommands.
#[derive(Subcommand, Debug)]
pub enum SettingsCommand {
    /// Write the default settings as JSON, ready to edit and pass to
    /// `encode --settings`.
    Init(InitArgs),
}

/// Arguments for `textplate settings init`.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Destination file (`-` for stdout).
    #[arg(long = "out", default_value = "textplate-settings.json")]
    pub out: PathBuf,
}

/// Execute a settings command.
pub fn handle(command: SettingsCommand) -> Result<()> {
    match command {
        SettingsCommand::Init(args) => init(args),
    }
}

fn init(args: InitArgs) -> Result<()> {
    let json = serde_json::to_string_pretty(&PlateSettings::default())
        .context("failed to serialize default settings")?;
    write_output(&args.out, &json)
}
