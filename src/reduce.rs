use hashbrown::HashSet;

use crate::pixels::{Flip, PixelGrid};

/// Whether `b` is `a` or one of its mirror images.
pub fn equivalent(a: &PixelGrid, b: &PixelGrid) -> bool {
    if a.width() != b.width() || a.height() != b.height() {
        return false;
    }
    Flip::ALL.iter().any(|flip| flip.apply_to_grid(a) == *b)
}

/// Indices of the tiles that survive `reduce`, in input order.
pub fn unique_indices(tiles: &[PixelGrid]) -> Vec<usize> {
    // Every orientation of each kept tile goes into the lookup, so a single
    // hash probe answers whether a new tile is equivalent to any kept one.
    let mut lookup: HashSet<PixelGrid> = HashSet::new();
    let mut kept: Vec<usize> = vec![];
    for (i, tile) in tiles.iter().enumerate() {
        if lookup.contains(tile) {
            continue;
        }
        for flip in Flip::ALL {
            lookup.insert(flip.apply_to_grid(tile));
        }
        kept.push(i);
    }
    kept
}

/// Collapse mirrored duplicates, keeping the first occurrence of each tile in input order.
pub fn reduce(tiles: Vec<PixelGrid>) -> Vec<PixelGrid> {
    let kept = unique_indices(&tiles);
    let mut kept = kept.into_iter().peekable();
    tiles
        .into_iter()
        .enumerate()
        .filter_map(|(i, tile)| kept.next_if_eq(&i).map(|_| tile))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile_from_rows(rows: [&str; 8]) -> PixelGrid {
        let mut tile = PixelGrid::new(8, 8, [255, 255, 255]);
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                if c == '#' {
                    tile.set(x, y, [0, 0, 0]);
                }
            }
        }
        tile
    }

    fn corner() -> PixelGrid {
        tile_from_rows([
            "##......", "#.......", "........", "........", "........", "........", "........",
            "........",
        ])
    }

    fn bar() -> PixelGrid {
        tile_from_rows([
            "........", "........", "........", "########", "........", "........", "........",
            "........",
        ])
    }

    // Reference pairwise reduction.
    fn reduce_pairwise(tiles: Vec<PixelGrid>) -> Vec<PixelGrid> {
        let mut out: Vec<PixelGrid> = vec![];
        for tile in tiles {
            if !out.iter().any(|u| equivalent(&tile, u)) {
                out.push(tile);
            }
        }
        out
    }

    #[test]
    fn reflexive_and_symmetric() {
        let a = corner();
        let b = Flip::Both.apply_to_grid(&a);
        assert!(equivalent(&a, &a));
        assert!(equivalent(&a, &b));
        assert!(equivalent(&b, &a));
        assert!(!equivalent(&a, &bar()));
        assert!(!equivalent(&bar(), &a));
    }

    #[test]
    fn rotation_by_90_is_not_a_mirror() {
        let a = bar();
        let mut rotated = PixelGrid::new(8, 8, [255, 255, 255]);
        for y in 0..8 {
            for x in 0..8 {
                rotated.set(7 - y, x, a.get(x, y));
            }
        }
        assert!(!equivalent(&a, &rotated));
    }

    #[test]
    fn different_sizes_are_not_equivalent() {
        let a = PixelGrid::new(8, 8, [0, 0, 0]);
        let b = PixelGrid::new(16, 4, [0, 0, 0]);
        assert!(!equivalent(&a, &b));
    }

    #[test]
    fn first_seen_wins() {
        let a = corner();
        let a_h = Flip::Horizontal.apply_to_grid(&a);
        let a_v = Flip::Vertical.apply_to_grid(&a);
        let out = reduce(vec![a_h.clone(), bar(), a.clone(), a_v, bar()]);
        assert_eq!(out, vec![a_h, bar()]);
    }

    #[test]
    fn indices_point_at_first_occurrences() {
        let a = corner();
        let tiles = vec![
            bar(),
            Flip::Vertical.apply_to_grid(&bar()),
            a.clone(),
            bar(),
            Flip::Both.apply_to_grid(&a),
            PixelGrid::new(8, 8, [0, 0, 0]),
        ];
        assert_eq!(unique_indices(&tiles), vec![0, 2, 5]);
    }

    #[test]
    fn idempotent() {
        let a = corner();
        let tiles = vec![
            a.clone(),
            bar(),
            Flip::Both.apply_to_grid(&a),
            PixelGrid::new(8, 8, [0, 0, 0]),
        ];
        let once = reduce(tiles);
        let twice = reduce(once.clone());
        assert_eq!(once, twice);
        assert_eq!(once.len(), 3);
    }

    #[test]
    fn matches_pairwise_reduction() {
        let a = corner();
        let tiles = vec![
            bar(),
            Flip::Vertical.apply_to_grid(&a),
            Flip::Horizontal.apply_to_grid(&bar()),
            a.clone(),
            Flip::Both.apply_to_grid(&a),
            PixelGrid::new(8, 8, [255, 255, 255]),
            Flip::Horizontal.apply_to_grid(&a),
        ];
        assert_eq!(reduce(tiles.clone()), reduce_pairwise(tiles));
    }
}
