//! Core library for generating and decoding Factorio text plate blueprints.

mod blueprint;
mod characters;
mod encoding;
mod layout;
mod settings;

pub use blueprint::{
    Blueprint, BlueprintEnvelope, BuildError, Entity, Icon, Position, Signal, create_text_plate_bp,
};
pub use characters::{
    FALLBACK_VARIANT, PLATE_CHARS, PlateChar, is_supported, resolve_variant, unsupported_chars,
};
pub use encoding::{DecodeError, EncodeError, WIRE_VERSION, decode_bp, encode_bp};
pub use layout::{PlacedChar, layout, wrap};
pub use settings::{
    DEFAULT_LABEL, GAME_VERSION, PlateMaterial, PlateSettings, PlateSettingsPatch, PlateSize,
    TextDirection,
};

use anyhow::Result;

/// Builds a text plate blueprint from `text` and encodes it as a blueprint
/// string in one step, using the game's current wire version.
pub fn text_to_blueprint_string(text: &str, settings: &PlateSettings) -> Result<String> {
    let bp = create_text_plate_bp(text, settings)?;
    Ok(encode_bp(&bp, WIRE_VERSION)?)
}
