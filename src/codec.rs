// Conversion between 8x8 pixel tiles and the packed bitplane format stored in ROM.
//
// In 2BPP each pixel row takes two bytes: the low bitplane followed by the high
// bitplane, with the most significant bit holding the leftmost pixel.
use crate::{
    common::{EncodedTile, Shade, TILE_BYTES, TILE_SIZE, WHITE},
    error::TileError,
    palette::{grey_ramp, PaletteId, PaletteTable},
    pixels::PixelGrid,
};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum BitDepth {
    #[value(name = "1")]
    One,
    #[default]
    #[value(name = "2")]
    Two,
}

impl BitDepth {
    pub fn bytes_per_tile(self) -> usize {
        match self {
            BitDepth::One => TILE_SIZE,
            BitDepth::Two => TILE_BYTES,
        }
    }
}

pub fn encode_tile(
    tile: &PixelGrid,
    palettes: &PaletteTable,
    palette: PaletteId,
) -> Result<EncodedTile, TileError> {
    if !tile.is_tile() {
        return Err(TileError::NotSquareTile {
            width: tile.width(),
            height: tile.height(),
        });
    }
    let mut out: EncodedTile = [0; TILE_BYTES];
    for y in 0..TILE_SIZE {
        let mut low = 0u8;
        let mut high = 0u8;
        for x in 0..TILE_SIZE {
            let shade = palettes.color_to_shade(tile.get(x, y), palette)?;
            low |= (shade & 1) << (7 - x);
            high |= ((shade >> 1) & 1) << (7 - x);
        }
        out[y * 2] = low;
        out[y * 2 + 1] = high;
    }
    Ok(out)
}

/// Decode a stream of tiles, rendered with the grey ramp. A trailing partial
/// tile is still returned, with its missing rows left white.
pub fn decode_tiles(data: &[u8], depth: BitDepth) -> Vec<PixelGrid> {
    data.chunks(depth.bytes_per_tile())
        .map(|chunk| decode_tile(chunk, depth))
        .collect()
}

fn decode_tile(chunk: &[u8], depth: BitDepth) -> PixelGrid {
    let mut tile = PixelGrid::new(TILE_SIZE, TILE_SIZE, WHITE);
    for y in 0..TILE_SIZE {
        let row = match depth {
            BitDepth::One => chunk.get(y).map(|&b| (b, b)),
            BitDepth::Two => chunk.get(2 * y).zip(chunk.get(2 * y + 1)).map(|(&l, &h)| (l, h)),
        };
        let Some((low, high)) = row else {
            break;
        };
        for x in 0..TILE_SIZE {
            let low_bit = (low >> (7 - x)) & 1;
            let high_bit = (high >> (7 - x)) & 1;
            // In 1BPP a set bit is black.
            let shade: Shade = match depth {
                BitDepth::One => low_bit * 3,
                BitDepth::Two => (high_bit << 1) | low_bit,
            };
            let v = grey_ramp(shade);
            tile.set(x, y, [v, v, v]);
        }
    }
    tile
}
