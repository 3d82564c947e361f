use serde::{Deserialize, Serialize};
use std::fmt;

/// Blueprint format revision the generator targets. Written into the
/// blueprint's `version` field; independent of the wire version byte.
pub const GAME_VERSION: i64 = 562949954207746;

/// Label applied when the caller does not set one.
pub const DEFAULT_LABEL: &str = "Text plates";

/// Physical size of the plates (1x1 or 2x2 tiles).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlateSize {
    Small,
    Large,
}

impl Default for PlateSize {
    fn default() -> Self {
        PlateSize::Small
    }
}

impl fmt::Display for PlateSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlateSize::Small => write!(f, "small"),
            PlateSize::Large => write!(f, "large"),
        }
    }
}

/// Plate material; selects the entity prototype.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlateMaterial {
    Concrete,
    Copper,
    Glass,
    Gold,
    Iron,
    Plastic,
    Steel,
    Stone,
    Uranium,
}

impl Default for PlateMaterial {
    fn default() -> Self {
        PlateMaterial::Copper
    }
}

impl fmt::Display for PlateMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlateMaterial::Concrete => "concrete",
            PlateMaterial::Copper => "copper",
            PlateMaterial::Glass => "glass",
            PlateMaterial::Gold => "gold",
            PlateMaterial::Iron => "iron",
            PlateMaterial::Plastic => "plastic",
            PlateMaterial::Steel => "steel",
            PlateMaterial::Stone => "stone",
            PlateMaterial::Uranium => "uranium",
        };
        write!(f, "{name}")
    }
}

/// Horizontal direction the text is laid out in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl Default for TextDirection {
    fn default() -> Self {
        TextDirection::Ltr
    }
}

impl fmt::Display for TextDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextDirection::Ltr => write!(f, "ltr"),
            TextDirection::Rtl => write!(f, "rtl"),
        }
    }
}

/// Fully resolved generator settings. The builder consumes this directly;
/// callers with partial input go through [`PlateSettingsPatch`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlateSettings {
    /// Size of the plates. Default `small`.
    pub size: PlateSize,
    /// Plate material. Default `copper`.
    pub material: PlateMaterial,
    /// Tiles of space between lines; negative values flip the vertical
    /// direction. Default `1`.
    pub line_spacing: i32,
    /// Text direction. Default `ltr`.
    pub text_direction: TextDirection,
    /// Maximum line length; `<= 0` means unlimited. Default `0`.
    pub max_line_length: i32,
    /// Blueprint label. Default `Text plates`.
    pub bp_label: String,
    /// Keep explicit line breaks in the input instead of re-flowing the
    /// whole text when wrapping. Default `true`.
    pub preserve_line_breaks: bool,
    /// Blueprint format revision. Default [`GAME_VERSION`].
    pub version: i64,
}

impl Default for PlateSettings {
    fn default() -> Self {
        Self {
            size: PlateSize::default(),
            material: PlateMaterial::default(),
            line_spacing: 1,
            text_direction: TextDirection::default(),
            max_line_length: 0,
            bp_label: DEFAULT_LABEL.to_string(),
            preserve_line_breaks: true,
            version: GAME_VERSION,
        }
    }
}

/// Partial settings; every field optional. `apply` merges the set fields
/// over a base, leaving the rest untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlateSettingsPatch {
    pub size: Option<PlateSize>,
    pub material: Option<PlateMaterial>,
    pub line_spacing: Option<i32>,
    pub text_direction: Option<TextDirection>,
    pub max_line_length: Option<i32>,
    pub bp_label: Option<String>,
    pub preserve_line_breaks: Option<bool>,
    pub version: Option<i64>,
}

impl PlateSettingsPatch {
    /// Merge this patch over `base`, producing resolved settings.
    pub fn apply(&self, base: &PlateSettings) -> PlateSettings {
        PlateSettings {
            size: self.size.unwrap_or(base.size),
            material: self.material.unwrap_or(base.material),
            line_spacing: self.line_spacing.unwrap_or(base.line_spacing),
            text_direction: self.text_direction.unwrap_or(base.text_direction),
            max_line_length: self.max_line_length.unwrap_or(base.max_line_length),
            bp_label: self.bp_label.clone().unwrap_or_else(|| base.bp_label.clone()),
            preserve_line_breaks: self
                .preserve_line_breaks
                .unwrap_or(base.preserve_line_breaks),
            version: self.version.unwrap_or(base.version),
        }
    }

    /// Resolve against the defaults.
    pub fn resolve(&self) -> PlateSettings {
        self.apply(&PlateSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_original_generator() {
        let s = PlateSettings::default();
        assert_eq!(s.size, PlateSize::Small);
        assert_eq!(s.material, PlateMaterial::Copper);
        assert_eq!(s.line_spacing, 1);
        assert_eq!(s.text_direction, TextDirection::Ltr);
        assert_eq!(s.max_line_length, 0);
        assert_eq!(s.bp_label, "Text plates");
        assert!(s.preserve_line_breaks);
        assert_eq!(s.version, 562949954207746);
    }

    #[test]
    fn empty_patch_resolves_to_defaults() {
        assert_eq!(PlateSettingsPatch::default().resolve(), PlateSettings::default());
    }

    #[test]
    fn patch_overrides_only_set_fields() {
        let patch = PlateSettingsPatch {
            size: Some(PlateSize::Large),
            line_spacing: Some(-2),
            ..Default::default()
        };
        let resolved = patch.resolve();
        assert_eq!(resolved.size, PlateSize::Large);
        assert_eq!(resolved.line_spacing, -2);
        assert_eq!(resolved.material, PlateMaterial::Copper);
        assert_eq!(resolved.bp_label, "Text plates");
    }

    #[test]
    fn partial_patch_deserializes_with_missing_fields() {
        let patch: PlateSettingsPatch =
            serde_json::from_str(r#"{"material": "steel", "max_line_length": 12}"#).unwrap();
        let resolved = patch.resolve();
        assert_eq!(resolved.material, PlateMaterial::Steel);
        assert_eq!(resolved.max_line_length, 12);
        assert_eq!(resolved.size, PlateSize::Small);
    }

    #[test]
    fn enums_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&PlateSize::Large).unwrap(), r#""large""#);
        assert_eq!(serde_json::to_string(&PlateMaterial::Uranium).unwrap(), r#""uranium""#);
        assert_eq!(serde_json::to_string(&TextDirection::Rtl).unwrap(), r#""rtl""#);
    }
}
