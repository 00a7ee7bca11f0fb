use crate::{common::TILE_SIZE, error::TileError, pixels::PixelGrid};

/// Largest horizontal crop; shifting by 8 would just skip a whole tile column.
pub const MAX_SHIFT: usize = TILE_SIZE - 1;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub width: usize,
    pub height: usize,
}

impl Resolution {
    // LCD of the original handheld: 20x18 tiles.
    pub const DMG: Resolution = Resolution {
        width: 160,
        height: 144,
    };
}

fn check_resolution(screen: &PixelGrid, resolution: Resolution) -> Result<(), TileError> {
    if screen.width() != resolution.width || screen.height() != resolution.height {
        return Err(TileError::UnexpectedResolution {
            width: screen.width(),
            height: screen.height(),
            expected_width: resolution.width,
            expected_height: resolution.height,
        });
    }
    Ok(())
}

// Every complete 8x8 cell, row by row. Incomplete cells at the right or bottom edge are skipped.
fn split_cells(grid: &PixelGrid) -> Vec<PixelGrid> {
    let cols = grid.width() / TILE_SIZE;
    let rows = grid.height() / TILE_SIZE;
    let mut tiles = Vec::with_capacity(cols * rows);
    for ty in 0..rows {
        for tx in 0..cols {
            tiles.push(grid.sub_grid(tx * TILE_SIZE, ty * TILE_SIZE, TILE_SIZE, TILE_SIZE));
        }
    }
    tiles
}

pub fn split_fixed(screen: &PixelGrid, resolution: Resolution) -> Result<Vec<PixelGrid>, TileError> {
    check_resolution(screen, resolution)?;
    Ok(split_cells(screen))
}

/// Split after cropping `shift` columns off the left edge, which realigns the
/// grid with tiles scrolled by a sub-tile amount. The rightmost column of cells
/// is lost whenever `shift > 0`.
pub fn split_shifted(
    screen: &PixelGrid,
    resolution: Resolution,
    shift: usize,
) -> Result<Vec<PixelGrid>, TileError> {
    if shift > MAX_SHIFT {
        return Err(TileError::InvalidShift(shift));
    }
    check_resolution(screen, resolution)?;
    if shift == 0 {
        return Ok(split_cells(screen));
    }
    Ok(split_cells(&screen.crop_left(shift)))
}
