use std::io::{Read, Write};

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use flate2::Compression;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use thiserror::Error;

use crate::blueprint::BlueprintEnvelope;

/// Wire version byte the game currently emits: `'0'`.
pub const WIRE_VERSION: u8 = 48;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("failed to serialize blueprint: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to compress blueprint: {0}")]
    Compress(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("blueprint string is empty")]
    Empty,
    #[error("version marker U+{0:04X} is not a single byte")]
    VersionOutOfRange(u32),
    #[error("failed to base64-decode blueprint string: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("failed to decompress blueprint data: {0}")]
    Inflate(#[source] std::io::Error),
    #[error("failed to parse blueprint data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Encodes a blueprint into the printable wire envelope: one version
/// character followed by base64 of the zlib-compressed JSON. Compression is
/// level 9; the Factorio wiki specifies it.
pub fn encode_bp(bp: &BlueprintEnvelope, version: u8) -> Result<String, EncodeError> {
    let json = serde_json::to_vec(bp)?;

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(&json)?;
    let compressed = encoder.finish()?;

    let mut out = String::with_capacity(compressed.len() * 4 / 3 + 4);
    out.push(char::from(version));
    BASE64.encode_string(&compressed, &mut out);
    Ok(out)
}

/// Decodes a wire envelope back into the version byte and the blueprint.
///
/// The version is informational pass-through; no cross-version repair or
/// upgrade is attempted. The top-level `blueprint` field is required
/// (enforced by the envelope shape); anything else in the document is left
/// to the caller.
pub fn decode_bp(wire: &str) -> Result<(u8, BlueprintEnvelope), DecodeError> {
    let mut chars = wire.chars();
    let marker = chars.next().ok_or(DecodeError::Empty)?;
    let version =
        u8::try_from(marker as u32).map_err(|_| DecodeError::VersionOutOfRange(marker as u32))?;

    let compressed = BASE64.decode(chars.as_str())?;

    let mut json = Vec::new();
    ZlibDecoder::new(compressed.as_slice())
        .read_to_end(&mut json)
        .map_err(DecodeError::Inflate)?;

    let envelope: BlueprintEnvelope = serde_json::from_slice(&json)?;
    Ok((version, envelope))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blueprint::create_text_plate_bp;
    use crate::settings::PlateSettings;
    use pretty_assertions::assert_eq;

    fn sample() -> BlueprintEnvelope {
        create_text_plate_bp("Hello world", &PlateSettings::default()).unwrap()
    }

    #[test]
    fn round_trip_preserves_everything() {
        let bp = sample();
        let wire = encode_bp(&bp, WIRE_VERSION).unwrap();
        let (version, decoded) = decode_bp(&wire).unwrap();
        assert_eq!(version, WIRE_VERSION);
        assert_eq!(decoded, bp);
    }

    #[test]
    fn round_trip_across_version_bytes() {
        let bp = sample();
        for version in [0u8, 1, 47, 48, 100, 200, 255] {
            let wire = encode_bp(&bp, version).unwrap();
            let (got, decoded) = decode_bp(&wire).unwrap();
            assert_eq!(got, version);
            assert_eq!(decoded, bp);
        }
    }

    #[test]
    fn wire_string_is_printable_and_versioned() {
        let wire = encode_bp(&sample(), WIRE_VERSION).unwrap();
        assert!(wire.starts_with('0'));
        assert!(wire.chars().skip(1).all(|c| c.is_ascii_graphic()));
    }

    #[test]
    fn garbage_input_fails_to_decode() {
        assert!(matches!(decode_bp(""), Err(DecodeError::Empty)));
        assert!(decode_bp("not-a-valid-wire-string").is_err());
    }

    #[test]
    fn valid_base64_with_bogus_payload_fails() {
        // "0" + base64 of uncompressed junk
        let wire = format!("0{}", BASE64.encode(b"junk"));
        assert!(matches!(decode_bp(&wire), Err(DecodeError::Inflate(_))));
    }

    #[test]
    fn missing_blueprint_field_fails() {
        let mut enc = ZlibEncoder::new(Vec::new(), Compression::best());
        enc.write_all(br#"{"blueprint_book": {}}"#).unwrap();
        let wire = format!("0{}", BASE64.encode(enc.finish().unwrap()));
        assert!(matches!(decode_bp(&wire), Err(DecodeError::Json(_))));
    }

    #[test]
    fn multibyte_version_marker_is_rejected() {
        let err = decode_bp("🦀AAAA").unwrap_err();
        assert!(matches!(err, DecodeError::VersionOutOfRange(_)));
    }

    #[test]
    fn tile_only_blueprint_decodes_without_entities() {
        let mut enc = ZlibEncoder::new(Vec::new(), Compression::best());
        enc.write_all(
            br#"{"blueprint":{"item":"blueprint","version":1,"tiles":[{"name":"stone-path","position":{"x":0,"y":0}}]}}"#,
        )
        .unwrap();
        let wire = format!("0{}", BASE64.encode(enc.finish().unwrap()));
        let (_, decoded) = decode_bp(&wire).unwrap();
        assert_eq!(decoded.blueprint.entities, vec![]);
        assert_eq!(decoded.blueprint.icons, vec![]);
    }

    #[test]
    fn bare_blueprint_object_is_enough() {
        // only the top-level `blueprint` field is required
        let mut enc = ZlibEncoder::new(Vec::new(), Compression::best());
        enc.write_all(br#"{"blueprint":{}}"#).unwrap();
        let wire = format!("0{}", BASE64.encode(enc.finish().unwrap()));
        let (_, decoded) = decode_bp(&wire).unwrap();
        assert_eq!(decoded.blueprint.item, "blueprint");
        assert_eq!(decoded.blueprint.version, 0);
        assert_eq!(decoded.blueprint.label, None);
    }

    #[test]
    fn entity_without_variation_decodes_with_default() {
        let mut enc = ZlibEncoder::new(Vec::new(), Compression::best());
        enc.write_all(
            br#"{"blueprint":{"item":"blueprint","version":1,"icons":[],"entities":[{"entity_number":1,"name":"textplate-small-copper","position":{"x":0.5,"y":0.5}}]}}"#,
        )
        .unwrap();
        let wire = format!("0{}", BASE64.encode(enc.finish().unwrap()));
        let (_, decoded) = decode_bp(&wire).unwrap();
        assert_eq!(decoded.blueprint.entities[0].variation, 1);
    }
}
