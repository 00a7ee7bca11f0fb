use crate::{
    common::{TILE_SIZE, WHITE},
    pixels::PixelGrid,
};

/// Lay tiles out left to right on a white sheet `width` pixels wide, wrapping
/// to a new row of tiles when a row is full.
pub fn render_tiles(tiles: &[PixelGrid], width: usize) -> PixelGrid {
    let per_row = (width / TILE_SIZE).max(1);
    let rows = tiles.len().div_ceil(per_row).max(1);
    let mut sheet = PixelGrid::new(width, rows * TILE_SIZE, WHITE);
    for (i, tile) in tiles.iter().enumerate() {
        sheet.blit(tile, (i % per_row) * TILE_SIZE, (i / per_row) * TILE_SIZE);
    }
    sheet
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::BLACK;

    #[test]
    fn wraps_rows() {
        let tiles = vec![PixelGrid::new(8, 8, BLACK); 3];
        let sheet = render_tiles(&tiles, 16);
        assert_eq!((sheet.width(), sheet.height()), (16, 16));
        assert_eq!(sheet.get(15, 7), BLACK);
        assert_eq!(sheet.get(0, 15), BLACK);
        assert_eq!(sheet.get(8, 8), WHITE);
    }

    #[test]
    fn empty_input_gives_one_blank_row() {
        let sheet = render_tiles(&[], 8);
        assert_eq!((sheet.width(), sheet.height()), (8, 8));
        assert!(sheet.pixels().iter().all(|&c| c == WHITE));
    }
}
