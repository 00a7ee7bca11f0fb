pub type ColorValue = u8; // Color component value (0-255)
pub type ColorRGB = [ColorValue; 3];
pub type Shade = u8; // Shade index (0-3), 0 is the lightest
pub type PixelCoord = usize;

pub const TILE_SIZE: usize = 8; // Tiles are 8x8 pixels
pub const TILE_BYTES: usize = 16; // 2 bytes per row in 2BPP

pub type EncodedTile = [u8; TILE_BYTES];

pub const WHITE: ColorRGB = [0xFF, 0xFF, 0xFF];
pub const BLACK: ColorRGB = [0x00, 0x00, 0x00];
