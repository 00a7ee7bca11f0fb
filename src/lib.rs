//! Locate Game Boy graphics tiles in a ROM from a screenshot of the game.
//!
//! A screenshot is cut into 8x8 cells, mirrored duplicates are collapsed, each
//! remaining tile is encoded to its 16-byte 2BPP form and the ROM is searched
//! for that exact byte sequence. Because the game may have scrolled its
//! background by a few pixels, this is repeated for every horizontal alignment
//! of the tile grid.

pub mod codec;
pub mod common;
pub mod config;
pub mod error;
pub mod export;
pub mod finder;
pub mod geometry;
pub mod helpers;
pub mod palette;
pub mod persist;
pub mod pixels;
pub mod reduce;
pub mod render;
pub mod scan;
