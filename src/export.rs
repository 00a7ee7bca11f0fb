// Writes located tiles and raw ROM ranges back out as images.
use anyhow::{ensure, Result};
use log::info;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::{
    codec::{decode_tiles, BitDepth},
    common::{TILE_BYTES, TILE_SIZE},
    helpers::hex_bytes,
    palette::PaletteName,
    persist::{numbered_path, save_png},
    render::render_tiles,
    scan::{Rom, RomAddr},
};

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LocatedTile {
    pub address: String,
    pub bytes: String,
    pub file: PathBuf,
}

#[derive(Serialize, Debug)]
pub struct Report {
    pub rom: PathBuf,
    pub screenshot: PathBuf,
    pub palette: PaletteName,
    pub tiles: Vec<LocatedTile>,
}

/// Render the tile at each address to `<output stem>_<i>.png`.
pub fn export_tiles(rom: &Rom, addrs: &[RomAddr], output: &Path) -> Result<Vec<LocatedTile>> {
    let mut located = vec![];
    for (i, &addr) in addrs.iter().enumerate() {
        let data = rom.read_n(addr, TILE_BYTES)?;
        let path = numbered_path(output, i);
        save_png(&path, &render_tiles(&decode_tiles(data, BitDepth::Two), TILE_SIZE))?;
        let bytes = hex_bytes(data);
        info!(
            "'{}' (Found at location {}) converted to '{}'",
            bytes,
            addr,
            path.display()
        );
        located.push(LocatedTile {
            address: addr.to_string(),
            bytes,
            file: path,
        });
    }
    Ok(located)
}

/// Render `length` bytes starting at `offset` as an image `width` pixels wide.
pub fn dump_range(
    rom: &Rom,
    offset: RomAddr,
    length: usize,
    width: usize,
    depth: BitDepth,
    output: &Path,
) -> Result<()> {
    ensure!(
        width > 0 && width % TILE_SIZE == 0,
        "Invalid width {}, expected a non-zero multiple of {}",
        width,
        TILE_SIZE
    );
    let data = rom.read_n(offset, length)?;
    let sheet = render_tiles(&decode_tiles(data, depth), width);
    save_png(output, &sheet)?;
    info!(
        "'{}' (Found at location {}) converted to '{}'",
        hex_bytes(data),
        offset,
        output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        common::{BLACK, WHITE},
        persist::load_png,
    };

    #[test]
    fn exports_numbered_tiles() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.png");
        let mut data = vec![0x00; 16];
        data.extend([0xFF; 16]);
        let rom = Rom::new(data);
        let located = export_tiles(&rom, &[RomAddr(0x10), RomAddr(0x0)], &output).unwrap();
        assert_eq!(located.len(), 2);
        assert_eq!(located[0].address, "0x10");
        assert_eq!(located[0].bytes, ["FF"; 16].join(" "));
        assert_eq!(located[1].file, dir.path().join("out_1.png"));
        let first = load_png(&dir.path().join("out_0.png")).unwrap();
        assert!(first.is_tile());
        assert!(first.pixels().iter().all(|&c| c == BLACK));
    }

    #[test]
    fn export_fails_past_end_of_rom() {
        let dir = tempfile::tempdir().unwrap();
        let rom = Rom::new(vec![0; 20]);
        assert!(export_tiles(&rom, &[RomAddr(8)], &dir.path().join("out.png")).is_err());
    }

    #[test]
    fn dump_lays_out_tiles() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("dump.png");
        let mut data = vec![0x5A; 4];
        data.extend([0xFF; 16]);
        data.extend([0x00; 16]);
        data.extend([0xFF; 16]);
        let rom = Rom::new(data);
        dump_range(&rom, RomAddr(4), 48, 16, BitDepth::Two, &output).unwrap();
        let sheet = load_png(&output).unwrap();
        assert_eq!((sheet.width(), sheet.height()), (16, 16));
        assert_eq!(sheet.get(0, 0), BLACK);
        assert_eq!(sheet.get(8, 0), WHITE);
        assert_eq!(sheet.get(7, 15), BLACK);
        assert_eq!(sheet.get(8, 15), WHITE);
    }

    #[test]
    fn dump_rejects_bad_width() {
        let dir = tempfile::tempdir().unwrap();
        let rom = Rom::new(vec![0; 16]);
        let output = dir.path().join("dump.png");
        assert!(dump_range(&rom, RomAddr(0), 16, 12, BitDepth::Two, &output).is_err());
        assert!(dump_range(&rom, RomAddr(0), 16, 0, BitDepth::Two, &output).is_err());
    }
}
