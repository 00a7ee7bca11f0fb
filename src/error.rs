//! Errors produced by the tile pipeline.

use thiserror::Error;

use crate::{
    common::{ColorRGB, Shade},
    palette::PaletteId,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TileError {
    /// Screenshot does not have the display's native size
    #[error("Unexpected resolution {width}x{height}, expected {expected_width}x{expected_height}")]
    UnexpectedResolution {
        width: usize,
        height: usize,
        expected_width: usize,
        expected_height: usize,
    },
    /// A pixel matches none of the palette's colors
    #[error("Unknown color #{:02X}{:02X}{:02X} for palette {palette}", color[0], color[1], color[2])]
    UnknownColor { color: ColorRGB, palette: PaletteId },
    #[error("Tile is {width}x{height}, expected 8x8")]
    NotSquareTile { width: usize, height: usize },
    #[error("Invalid shade index {0}")]
    InvalidIndex(Shade),
    #[error("Invalid palette {0}")]
    InvalidPalette(PaletteId),
    /// Classification needs every color of a palette to be distinct
    #[error("Palette {palette} uses color #{:02X}{:02X}{:02X} more than once", color[0], color[1], color[2])]
    DuplicateColor { color: ColorRGB, palette: PaletteId },
    #[error("Invalid shift of {0} columns, expected 0-7")]
    InvalidShift(usize),
    /// Strict mode: no alignment of the tile grid had every tile in the ROM.
    /// Reports the first missing tile of the most complete alignment.
    #[error("Tile at ({x}, {y}) with a {shift} pixel shift is not in the ROM, and no shift located every tile")]
    NoMatchFound { shift: usize, x: usize, y: usize },
    #[error("Expected {expected} pixels, got {actual}")]
    PixelCountMismatch { expected: usize, actual: usize },
}
