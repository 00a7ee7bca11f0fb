use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{
    common::{ColorRGB, ColorValue, Shade},
    error::TileError,
};

// Colors are ordered lightest to darkest, so a color's index is its shade.
pub type Palette = [ColorRGB; 4];

pub const PALETTE_GREYSCALE: Palette = [
    [0xFF, 0xFF, 0xFF],
    [0xCC, 0xCC, 0xCC],
    [0x77, 0x77, 0x77],
    [0x00, 0x00, 0x00],
];

// Green tint of the original hardware's screen.
pub const PALETTE_ORIGINAL: Palette = [
    [0x9B, 0xBC, 0x0F],
    [0x8B, 0xAC, 0x0F],
    [0x30, 0x62, 0x30],
    [0x0F, 0x38, 0x0F],
];

// Default palette of the BGB emulator.
pub const PALETTE_BGB: Palette = [
    [0xE0, 0xF8, 0xD0],
    [0x88, 0xC0, 0x70],
    [0x34, 0x68, 0x56],
    [0x08, 0x18, 0x20],
];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PaletteId(pub u8);

impl PaletteId {
    pub const GREYSCALE: PaletteId = PaletteId(0);
    pub const ORIGINAL: PaletteId = PaletteId(1);
    pub const BGB: PaletteId = PaletteId(2);
}

impl Display for PaletteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)?;
        Ok(())
    }
}

/// Palette selection as exposed on the command line and in the config file.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum PaletteName {
    Greyscale,
    Original,
    #[default]
    Bgb,
}

impl PaletteName {
    pub fn id(self) -> PaletteId {
        match self {
            PaletteName::Greyscale => PaletteId::GREYSCALE,
            PaletteName::Original => PaletteId::ORIGINAL,
            PaletteName::Bgb => PaletteId::BGB,
        }
    }
}

/// Display color of a shade when rendering tiles: 255, 170, 85, 0.
/// Shades past 3 saturate to black.
pub fn grey_ramp(shade: Shade) -> ColorValue {
    let shade = shade.min(3);
    (255 * (3 - shade as u16) / 3) as ColorValue
}

// Inverse of `grey_ramp` for pure grey pixels.
fn grey_ramp_shade(color: ColorRGB) -> Option<Shade> {
    let [r, g, b] = color;
    if r != g || g != b {
        return None;
    }
    (0..4).find(|&shade| grey_ramp(shade) == r)
}

/// Immutable set of palettes used to classify pixel colors into shades.
#[derive(Clone, Debug)]
pub struct PaletteTable {
    palettes: Vec<Palette>,
}

impl PaletteTable {
    pub fn new(palettes: Vec<Palette>) -> Result<Self, TileError> {
        for (i, pal) in palettes.iter().enumerate() {
            for (j, color) in pal.iter().enumerate() {
                if pal[..j].contains(color) {
                    return Err(TileError::DuplicateColor {
                        color: *color,
                        palette: PaletteId(i as u8),
                    });
                }
            }
        }
        Ok(PaletteTable { palettes })
    }

    pub fn standard() -> Self {
        PaletteTable {
            palettes: vec![PALETTE_GREYSCALE, PALETTE_ORIGINAL, PALETTE_BGB],
        }
    }

    pub fn palette(&self, id: PaletteId) -> Result<&Palette, TileError> {
        self.palettes
            .get(id.0 as usize)
            .ok_or(TileError::InvalidPalette(id))
    }

    /// Classify a pixel color. Pure greys on the rendering ramp are accepted
    /// for any palette; everything else must be one of the palette's colors.
    pub fn color_to_shade(&self, color: ColorRGB, id: PaletteId) -> Result<Shade, TileError> {
        let pal = self.palette(id)?;
        if let Some(shade) = grey_ramp_shade(color) {
            return Ok(shade);
        }
        pal.iter()
            .position(|c| *c == color)
            .map(|i| i as Shade)
            .ok_or(TileError::UnknownColor { color, palette: id })
    }

    pub fn shade_to_color(&self, shade: Shade, id: PaletteId) -> Result<ColorRGB, TileError> {
        let pal = self.palette(id)?;
        pal.get(shade as usize)
            .copied()
            .ok_or(TileError::InvalidIndex(shade))
    }
}
