//! Blueprint creation (`textplate encode`).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use textplate::{
    PlateSettingsPatch, WIRE_VERSION, create_text_plate_bp, encode_bp, unsupported_chars,
};

use crate::cli::common::{DirectionArg, MaterialArg, SizeArg};
use crate::cli::utils::{load_settings_patch, read_text_arg, write_output};

/// Arguments for `textplate encode`.
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Input text (`\n` escapes become line breaks; falls back to stdin if omitted).
    #[arg(long)]
    pub text: Option<String>,
    /// Read input from file (`-` for stdin).
    #[arg(long = "from")]
    pub from: Option<PathBuf>,
    /// Write the blueprint string here (`-` for stdout).
    #[arg(long = "out", default_value = "-")]
    pub out: PathBuf,
    /// Settings patch file (JSON); flags below override it.
    #[arg(long)]
    pub settings: Option<PathBuf>,
    /// Plate size.
    #[arg(long)]
    pub size: Option<SizeArg>,
    /// Plate material.
    #[arg(long)]
    pub material: Option<MaterialArg>,
    /// Tiles of space between lines; negative reverses the vertical direction.
    #[arg(long)]
    pub line_spacing: Option<i32>,
    /// Text direction.
    #[arg(long)]
    pub direction: Option<DirectionArg>,
    /// Maximum line length; 0 for unlimited.
    #[arg(long)]
    pub max_line_length: Option<i32>,
    /// Blueprint label.
    #[arg(long)]
    pub label: Option<String>,
    /// Keep explicit line breaks instead of re-flowing the text when wrapping.
    #[arg(long)]
    pub keep_line_breaks: Option<bool>,
}

/// Execute the encode command.
pub fn handle(args: EncodeArgs) -> Result<()> {
    let text = read_text_arg(args.text.clone(), args.from.clone())?;
    // inline --text input uses literal \n for line breaks
    let text = if args.text.is_some() {
        text.replace("\\n", "\n")
    } else {
        text
    };

    let mut settings = match &args.settings {
        Some(path) => load_settings_patch(path)?.resolve(),
        None => PlateSettingsPatch::default().resolve(),
    };
    let flags = PlateSettingsPatch {
        size: args.size.map(Into::into),
        material: args.material.map(Into::into),
        line_spacing: args.line_spacing,
        text_direction: args.direction.map(Into::into),
        max_line_length: args.max_line_length,
        bp_label: args.label.clone(),
        preserve_line_breaks: args.keep_line_breaks,
        version: None,
    };
    settings = flags.apply(&settings);

    let fallback = unsupported_chars(&text);
    if !fallback.is_empty() {
        let list: String = fallback.iter().collect();
        eprintln!(
            "warning: unsupported characters will be rendered as the cog tile: {list}"
        );
    }

    let bp = create_text_plate_bp(&text, &settings).context("failed to build blueprint")?;
    let encoded = encode_bp(&bp, WIRE_VERSION).context("failed to encode blueprint")?;
    write_output(&args.out, &encoded)
}
