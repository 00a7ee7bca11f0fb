// Pixel grids: whole screenshots as well as individual 8x8 tiles.
use crate::{
    common::{ColorRGB, PixelCoord, TILE_SIZE},
    error::TileError,
};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    pixels: Vec<ColorRGB>, // row-major
}

impl PixelGrid {
    pub fn new(width: usize, height: usize, fill: ColorRGB) -> Self {
        PixelGrid {
            width,
            height,
            pixels: vec![fill; width * height],
        }
    }

    pub fn from_pixels(
        width: usize,
        height: usize,
        pixels: Vec<ColorRGB>,
    ) -> Result<Self, TileError> {
        if pixels.len() != width * height {
            return Err(TileError::PixelCountMismatch {
                expected: width * height,
                actual: pixels.len(),
            });
        }
        Ok(PixelGrid {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_tile(&self) -> bool {
        self.width == TILE_SIZE && self.height == TILE_SIZE
    }

    pub fn get(&self, x: PixelCoord, y: PixelCoord) -> ColorRGB {
        self.pixels[y * self.width + x]
    }

    pub fn set(&mut self, x: PixelCoord, y: PixelCoord, color: ColorRGB) {
        self.pixels[y * self.width + x] = color;
    }

    pub fn pixels(&self) -> &[ColorRGB] {
        &self.pixels
    }

    /// Copy of the `width x height` region whose top-left corner is `(x0, y0)`.
    pub fn sub_grid(&self, x0: PixelCoord, y0: PixelCoord, width: usize, height: usize) -> Self {
        let mut out = PixelGrid::new(width, height, [0, 0, 0]);
        for y in 0..height {
            let start = (y0 + y) * self.width + x0;
            out.pixels[y * width..(y + 1) * width]
                .copy_from_slice(&self.pixels[start..start + width]);
        }
        out
    }

    /// Drop the leftmost `columns` columns.
    pub fn crop_left(&self, columns: usize) -> Self {
        let columns = columns.min(self.width);
        self.sub_grid(columns, 0, self.width - columns, self.height)
    }

    /// Draw `other` with its top-left corner at `(x0, y0)`, clipping at the edges.
    pub fn blit(&mut self, other: &PixelGrid, x0: PixelCoord, y0: PixelCoord) {
        for y in 0..other.height {
            for x in 0..other.width {
                if x0 + x < self.width && y0 + y < self.height {
                    self.set(x0 + x, y0 + y, other.get(x, y));
                }
            }
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Flip {
    #[default]
    None,
    Horizontal,
    Vertical,
    Both,
}

impl Flip {
    pub const ALL: [Flip; 4] = [Flip::None, Flip::Horizontal, Flip::Vertical, Flip::Both];

    pub fn apply_to_grid(self, grid: &PixelGrid) -> PixelGrid {
        let (w, h) = (grid.width, grid.height);
        let mut out = grid.clone();
        for y in 0..h {
            for x in 0..w {
                let (sx, sy) = match self {
                    Flip::None => (x, y),
                    Flip::Horizontal => (w - 1 - x, y),
                    Flip::Vertical => (x, h - 1 - y),
                    Flip::Both => (w - 1 - x, h - 1 - y),
                };
                out.set(x, y, grid.get(sx, sy));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(width: usize, height: usize) -> PixelGrid {
        let pixels = (0..width * height).map(|i| [i as u8, 0, 0]).collect();
        PixelGrid::from_pixels(width, height, pixels).unwrap()
    }

    #[test]
    fn from_pixels_checks_length() {
        assert_eq!(
            PixelGrid::from_pixels(2, 2, vec![[0, 0, 0]; 3]),
            Err(TileError::PixelCountMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn flips() {
        let g = numbered(3, 2);
        let h = Flip::Horizontal.apply_to_grid(&g);
        assert_eq!(h.get(0, 0), [2, 0, 0]);
        assert_eq!(h.get(2, 1), [3, 0, 0]);
        let v = Flip::Vertical.apply_to_grid(&g);
        assert_eq!(v.get(0, 0), [3, 0, 0]);
        let both = Flip::Both.apply_to_grid(&g);
        assert_eq!(both, Flip::Horizontal.apply_to_grid(&v));
        assert_eq!(Flip::None.apply_to_grid(&g), g);
    }

    #[test]
    fn flips_do_not_mutate_input() {
        let g = numbered(4, 4);
        let copy = g.clone();
        let _ = Flip::Both.apply_to_grid(&g);
        assert_eq!(g, copy);
    }

    #[test]
    fn crop_and_sub_grid() {
        let g = numbered(4, 2);
        let c = g.crop_left(1);
        assert_eq!((c.width(), c.height()), (3, 2));
        assert_eq!(c.get(0, 0), [1, 0, 0]);
        assert_eq!(c.get(2, 1), [7, 0, 0]);
        let s = g.sub_grid(2, 1, 2, 1);
        assert_eq!(s.pixels(), &[[6, 0, 0], [7, 0, 0]]);
    }

    #[test]
    fn blit_clips() {
        let mut dst = PixelGrid::new(3, 3, [9, 9, 9]);
        dst.blit(&numbered(2, 2), 2, 2);
        assert_eq!(dst.get(2, 2), [0, 0, 0]);
        assert_eq!(dst.get(1, 1), [9, 9, 9]);
    }
}
