//! Shared clap helper types for CLI commands.

use clap::ValueEnum;
use textplate::{PlateMaterial, PlateSize, TextDirection};

/// Plate sizes accepted on the command line.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum SizeArg {
    Small,
    Large,
}

impl From<SizeArg> for PlateSize {
    fn from(value: SizeArg) -> PlateSize {
        match value {
            SizeArg::Small => PlateSize::Small,
            SizeArg::Large => PlateSize::Large,
        }
    }
}

/// Plate materials accepted on the command line.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum MaterialArg {
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

impl From<MaterialArg> for PlateMaterial {
    fn from(value: MaterialArg) -> PlateMaterial {
        match value {
            MaterialArg::Concrete => PlateMaterial::Concrete,
            MaterialArg::Copper => PlateMaterial::Copper,
            MaterialArg::Glass => PlateMaterial::Glass,
            MaterialArg::Gold => PlateMaterial::Gold,
            MaterialArg::Iron => PlateMaterial::Iron,
            MaterialArg::Plastic => PlateMaterial::Plastic,
            MaterialArg::Steel => PlateMaterial::Steel,
            MaterialArg::Stone => PlateMaterial::Stone,
            MaterialArg::Uranium => PlateMaterial::Uranium,
        }
    }
}

/// Text direction selector.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum DirectionArg {
    Ltr,
    Rtl,
}

impl From<DirectionArg> for TextDirection {
    fn from(value: DirectionArg) -> TextDirection {
        match value {
            DirectionArg::Ltr => TextDirection::Ltr,
            DirectionArg::Rtl => TextDirection::Rtl,
        }
    }
}
