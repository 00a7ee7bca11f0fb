// Runs the split/reduce/encode/scan pipeline over every horizontal alignment
// of the screenshot and merges the ROM addresses found.
use itertools::Itertools;
use log::{debug, warn};
use rayon::prelude::*;

use crate::{
    codec::encode_tile,
    common::{EncodedTile, PixelCoord, TILE_SIZE},
    error::TileError,
    geometry::{split_fixed, split_shifted, Resolution, MAX_SHIFT},
    palette::{PaletteId, PaletteTable},
    pixels::PixelGrid,
    reduce::unique_indices,
    scan::{locate, Rom, RomAddr},
};

/// What to do with screenshot tiles that are not in the ROM.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ScanMode {
    /// Leave them out of the result.
    #[default]
    Lenient,
    /// Fail unless at least one shift located every one of its tiles.
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassSummary {
    pub shift: usize,
    pub tiles: usize,
    pub unique_tiles: usize,
    pub encodings: usize,
    pub addrs: Vec<RomAddr>,
    /// Screen position (left, top) of each distinct tile with no ROM match.
    pub missing: Vec<(PixelCoord, PixelCoord)>,
}

impl PassSummary {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

pub struct TileFinder<'a> {
    pub palettes: &'a PaletteTable,
    pub palette: PaletteId,
    pub resolution: Resolution,
    pub mode: ScanMode,
    pub parallel: bool,
}

// Screen position of the `cell`-th tile (row-major) of a pass.
fn cell_position(screen: &PixelGrid, shift: usize, cell: usize) -> (PixelCoord, PixelCoord) {
    let cols = screen.width().saturating_sub(shift) / TILE_SIZE;
    if cols == 0 {
        return (shift, 0);
    }
    ((cell % cols) * TILE_SIZE + shift, (cell / cols) * TILE_SIZE)
}

impl<'a> TileFinder<'a> {
    pub fn new(palettes: &'a PaletteTable, palette: PaletteId) -> Self {
        TileFinder {
            palettes,
            palette,
            resolution: Resolution::DMG,
            mode: ScanMode::default(),
            parallel: false,
        }
    }

    pub fn run_pass(&self, screen: &PixelGrid, rom: &Rom, shift: usize) -> Result<PassSummary, TileError> {
        let tiles = if shift == 0 {
            split_fixed(screen, self.resolution)?
        } else {
            split_shifted(screen, self.resolution, shift)?
        };
        let kept = unique_indices(&tiles);
        let encoded: Vec<(EncodedTile, usize)> = kept
            .iter()
            .map(|&cell| Ok((encode_tile(&tiles[cell], self.palettes, self.palette)?, cell)))
            .collect::<Result<Vec<_>, TileError>>()?;
        // Distinct tiles can still share an encoding, e.g. when two palette
        // colors land on the same shade.
        let (encoded, cells): (Vec<EncodedTile>, Vec<usize>) =
            encoded.into_iter().unique_by(|(enc, _)| *enc).unzip();

        let mut addrs = vec![];
        let mut missing = vec![];
        for (found, cell) in locate(&encoded, rom).into_iter().zip(cells) {
            match found {
                Some(addr) => addrs.push(addr),
                None => missing.push(cell_position(screen, shift, cell)),
            }
        }
        let summary = PassSummary {
            shift,
            tiles: tiles.len(),
            unique_tiles: kept.len(),
            encodings: encoded.len(),
            addrs,
            missing,
        };
        debug!(
            "Pass {}: {} tiles, {} unique, {} encodings, {} located, {} missing",
            summary.shift,
            summary.tiles,
            summary.unique_tiles,
            summary.encodings,
            summary.addrs.len(),
            summary.missing.len()
        );
        Ok(summary)
    }

    /// One summary per shift, in shift order regardless of how the passes were scheduled.
    /// On failure the error of the lowest failing shift is returned.
    pub fn run_all_passes(&self, screen: &PixelGrid, rom: &Rom) -> Result<Vec<PassSummary>, TileError> {
        if self.parallel {
            // Collecting straight into a Result would keep whichever error
            // a worker hit first.
            let results: Vec<Result<PassSummary, TileError>> = (0..=MAX_SHIFT)
                .into_par_iter()
                .map(|shift| self.run_pass(screen, rom, shift))
                .collect();
            results.into_iter().collect()
        } else {
            (0..=MAX_SHIFT)
                .map(|shift| self.run_pass(screen, rom, shift))
                .collect()
        }
    }

    /// Distinct addresses in the order they were first found.
    pub fn find(&self, screen: &PixelGrid, rom: &Rom) -> Result<Vec<RomAddr>, TileError> {
        let passes = self.run_all_passes(screen, rom)?;
        if !passes.iter().any(PassSummary::is_complete) {
            // Ties go to the lowest shift.
            if let Some(best) = passes.iter().min_by_key(|pass| pass.missing.len()) {
                let (x, y) = best.missing[0];
                if self.mode == ScanMode::Strict {
                    return Err(TileError::NoMatchFound {
                        shift: best.shift,
                        x,
                        y,
                    });
                }
                warn!(
                    "No shift located every tile; best was shift {} with {} missing, first at ({}, {})",
                    best.shift,
                    best.missing.len(),
                    x,
                    y
                );
            }
        }
        Ok(passes
            .into_iter()
            .flat_map(|pass| pass.addrs)
            .unique()
            .collect_vec())
    }
}
