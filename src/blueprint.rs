use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::characters::resolve_variant;
use crate::layout::{layout, wrap};
use crate::settings::{PlateSettings, PlateSize, TextDirection};

/// Link embedded in generated blueprint descriptions.
const PROJECT_LINK: &str = "https://github.com/factorio-tools/textplate";

/// Descriptions longer than this are truncated (the game cuts them off).
const MAX_DESCRIPTION_LEN: usize = 499;
const TRUNCATED_DESCRIPTION_LEN: usize = 496;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("input text is empty")]
    EmptyInput,
}

/// Top-level wire shape: the game wraps the blueprint record in a
/// `{"blueprint": ...}` envelope. Parsing this struct is also what enforces
/// the "must contain a blueprint field" rule on decode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlueprintEnvelope {
    pub blueprint: Blueprint,
}

/// See <https://wiki.factorio.com/Blueprint_string_format> for the JSON
/// representation this mirrors.
///
/// Every field besides the envelope's `blueprint` key defaults on decode:
/// game exports vary (tile-only blueprints carry no `entities`, some tools
/// omit `icons` or `version`), and the decoder's contract checks only the
/// required top-level field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Blueprint {
    #[serde(default = "default_item")]
    pub item: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub version: i64,
    #[serde(default)]
    pub icons: Vec<Icon>,
    #[serde(default)]
    pub entities: Vec<Entity>,
}

fn default_item() -> String {
    "blueprint".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Icon {
    pub signal: Signal,
    pub index: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Signal {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entity {
    pub entity_number: u32,
    pub name: String,
    pub position: Position,
    // Game exports omit `variation` for entities without one.
    #[serde(default = "default_variation")]
    pub variation: u16,
}

fn default_variation() -> u16 {
    1
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Builds a text plate blueprint from `input` under the given settings.
///
/// Wraps and lays out the text, resolves each visible character to a plate
/// variant, and assigns contiguous `entity_number`s in reading order. The
/// only input validation is the empty check; unsupported characters become
/// cog tiles rather than errors. Construction is all-or-nothing.
pub fn create_text_plate_bp(
    input: &str,
    settings: &PlateSettings,
) -> Result<BlueprintEnvelope, BuildError> {
    if input.is_empty() {
        return Err(BuildError::EmptyInput);
    }

    let entity_name = format!("textplate-{}-{}", settings.size, settings.material);

    let size_mult = match settings.size {
        PlateSize::Small => 1.0,
        PlateSize::Large => 2.0,
    };
    let dir_mult = match settings.text_direction {
        TextDirection::Ltr => 1.0,
        TextDirection::Rtl => -1.0,
    };
    let spacing = settings.line_spacing as f64;

    let lines = wrap(input, settings.max_line_length, settings.preserve_line_breaks);
    let entities = layout(&lines)
        .iter()
        .enumerate()
        .map(|(i, placed)| Entity {
            entity_number: i as u32 + 1,
            name: entity_name.clone(),
            position: Position {
                x: placed.col as f64 * size_mult * dir_mult + 0.5,
                y: (placed.row as f64 * size_mult + placed.row as f64 * spacing) * dir_mult + 0.5,
            },
            variation: resolve_variant(placed.ch),
        })
        .collect();

    Ok(BlueprintEnvelope {
        blueprint: Blueprint {
            item: "blueprint".to_string(),
            label: Some(settings.bp_label.clone()),
            description: Some(build_description(input, &entity_name)),
            version: settings.version,
            icons: build_icons(input, &entity_name),
            entities,
        },
    })
}

/// First four alphanumeric input characters as virtual signals; the plate
/// item itself when the input has none.
fn build_icons(input: &str, entity_name: &str) -> Vec<Icon> {
    let letters: Vec<char> = input
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric())
        .take(4)
        .collect();

    if letters.is_empty() {
        return vec![Icon {
            signal: Signal { kind: None, name: entity_name.to_string() },
            index: 1,
        }];
    }

    letters
        .iter()
        .enumerate()
        .map(|(i, ch)| Icon {
            signal: Signal {
                kind: Some("virtual".to_string()),
                name: format!("signal-{}", ch.to_ascii_uppercase()),
            },
            index: i as u8 + 1,
        })
        .collect()
}

fn build_description(input: &str, entity_name: &str) -> String {
    let raw = format!("[item={entity_name}] {PROJECT_LINK}\n{input} [item={entity_name}]");
    if raw.chars().count() > MAX_DESCRIPTION_LEN {
        let mut cut: String = raw.chars().take(TRUNCATED_DESCRIPTION_LEN).collect();
        cut.push_str("...");
        cut
    } else {
        raw
    }
}
