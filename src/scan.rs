use anyhow::{ensure, Result};
use std::fmt::Display;

use crate::common::EncodedTile;

// Byte index into the ROM file.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RomAddr(pub usize);

impl Display for RomAddr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:X}", self.0)?;
        Ok(())
    }
}

#[derive(Clone)]
pub struct Rom {
    pub data: Vec<u8>,
}

impl Rom {
    pub fn new(data: Vec<u8>) -> Self {
        Rom { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn read_n(&self, addr: RomAddr, n: usize) -> Result<&[u8]> {
        ensure!(
            addr.0.checked_add(n).is_some_and(|end| end <= self.data.len()),
            "read of {} bytes at {} is out of bounds (ROM size 0x{:X})",
            n,
            addr,
            self.data.len()
        );
        Ok(&self.data[addr.0..addr.0 + n])
    }

    /// Lowest offset at which `pattern` occurs verbatim.
    pub fn find_first(&self, pattern: &[u8]) -> Option<RomAddr> {
        if pattern.is_empty() {
            return Some(RomAddr(0));
        }
        self.data
            .windows(pattern.len())
            .position(|w| w == pattern)
            .map(RomAddr)
    }
}

/// First ROM offset of each tile, in tile order.
pub fn locate(tiles: &[EncodedTile], rom: &Rom) -> Vec<Option<RomAddr>> {
    tiles.iter().map(|tile| rom.find_first(tile)).collect()
}

/// Offsets of the tiles present in the ROM; tiles that are not found are left out.
pub fn find_all(tiles: &[EncodedTile], rom: &Rom) -> Vec<RomAddr> {
    locate(tiles, rom).into_iter().flatten().collect()
}
