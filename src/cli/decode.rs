//! Blueprint string inspection (`textplate decode`).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use textplate::decode_bp;

use crate::cli::utils::{read_text_arg, write_output};

/// Arguments for `textplate decode`.
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Blueprint string (falls back to stdin if omitted).
    #[arg(long)]
    pub text: Option<String>,
    /// Read the blueprint string from file (`-` for stdin).
    #[arg(long = "from")]
    pub from: Option<PathBuf>,
    /// Write the decoded JSON here (`-` for stdout).
    #[arg(long = "out", default_value = "-")]
    pub out: PathBuf,
    /// Emit compact JSON instead of pretty-printed.
    #[arg(long)]
    pub compact: bool,
}

/// Execute the decode command.
pub fn handle(args: DecodeArgs) -> Result<()> {
    let wire = read_text_arg(args.text.clone(), args.from.clone())?;
    // files and pasted strings routinely carry trailing newlines
    let wire = wire.trim();

    let (version, envelope) = decode_bp(wire).context("failed to decode blueprint string")?;
    eprintln!("wire version: {version}");

    let json = if args.compact {
        serde_json::to_string(&envelope)
    } else {
        serde_json::to_string_pretty(&envelope)
    }
    .context("failed to serialize decoded blueprint")?;
    write_output(&args.out, &json)
}
