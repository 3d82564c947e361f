//! End-to-end coverage of the public surface: build, encode, decode.

use pretty_assertions::assert_eq;
use textplate::{
    PlateSettings, PlateSettingsPatch, PlateSize, TextDirection, WIRE_VERSION,
    create_text_plate_bp, decode_bp, encode_bp, text_to_blueprint_string,
};

#[test]
fn build_encode_decode_round_trip() {
    let settings = PlateSettingsPatch {
        size: Some(PlateSize::Large),
        line_spacing: Some(2),
        max_line_length: Some(16),
        bp_label: Some("Factory sign".to_string()),
        ..Default::default()
    }
    .resolve();

    let bp = create_text_plate_bp("The factory must grow.\nAlways.", &settings).unwrap();
    let wire = encode_bp(&bp, WIRE_VERSION).unwrap();
    let (version, decoded) = decode_bp(&wire).unwrap();

    assert_eq!(version, WIRE_VERSION);
    assert_eq!(decoded, bp);
    assert_eq!(decoded.blueprint.label.as_deref(), Some("Factory sign"));
}

#[test]
fn convenience_entry_point_produces_decodable_strings() {
    let wire = text_to_blueprint_string("Hi", &PlateSettings::default()).unwrap();
    let (version, decoded) = decode_bp(&wire).unwrap();
    assert_eq!(version, WIRE_VERSION);

    let bp = decoded.blueprint;
    assert_eq!(bp.entities.len(), 2);
    assert_eq!(bp.entities[0].position.x, 0.5);
    assert_eq!(bp.entities[1].position.x, 1.5);
    assert_eq!(bp.icons.len(), 2);
}

#[test]
fn entity_numbers_stay_contiguous_through_the_wire() {
    let settings = PlateSettingsPatch {
        text_direction: Some(TextDirection::Rtl),
        max_line_length: Some(8),
        ..Default::default()
    }
    .resolve();

    let wire = text_to_blueprint_string("grid of plates, wrapped and mirrored", &settings).unwrap();
    let (_, decoded) = decode_bp(&wire).unwrap();

    let numbers: Vec<u32> = decoded
        .blueprint
        .entities
        .iter()
        .map(|e| e.entity_number)
        .collect();
    let expected: Vec<u32> = (1..=numbers.len() as u32).collect();
    assert_eq!(numbers, expected);

    for entity in &decoded.blueprint.entities {
        assert!(entity.variation >= 1);
    }
}

#[test]
fn empty_input_is_a_build_error() {
    assert!(create_text_plate_bp("", &PlateSettings::default()).is_err());
}

#[test]
fn garbage_wire_strings_are_decode_errors() {
    assert!(decode_bp("not-a-valid-wire-string").is_err());
}
