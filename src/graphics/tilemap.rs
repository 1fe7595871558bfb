//! # Tile Map Construction
//!
//! Scans the tile grid of an image, merges tiles with identical pixel
//! content, and produces a map of tile ids plus the deduplicated tile data.
//!
//! Tile identity is decided on the raw RGB samples of the source region, not
//! on the quantized 2bpp encoding. Two tiles whose colors differ but happen
//! to quantize alike stay distinct.

use std::collections::HashMap;

use crate::graphics::tile::{encode_tile, TILE_BYTES};
use crate::pixels::{PixelSource, TILE_DIM};

/// Grid position of a distinct tile together with its assigned id.
#[derive(Debug, Clone, Copy)]
struct TileRecord {
    x: usize,
    y: usize,
    id: usize,
}

/// Grid of tile ids matching the image's tile layout, row-major.
pub struct Tilemap {
    tiles_x: usize,
    tiles_y: usize,
    cells: Vec<usize>,
}

impl Tilemap {
    pub fn tiles_x(&self) -> usize {
        self.tiles_x
    }

    pub fn tiles_y(&self) -> usize {
        self.tiles_y
    }

    /// Id of the tile occupying grid cell (x, y).
    pub fn get(&self, x: usize, y: usize) -> usize {
        self.cells[y * self.tiles_x + x]
    }

    /// Row-major cell values with `offset` added to each, ready for
    /// emission. The offset never affects id assignment, only the emitted
    /// numbers.
    pub fn cells(&self, offset: usize) -> Vec<usize> {
        self.cells.iter().map(|id| id + offset).collect()
    }
}

/// Deduplicated tile encodings in ascending id order.
pub struct TileSet {
    tiles: Vec<[u8; TILE_BYTES]>,
}

impl TileSet {
    /// Number of distinct tile contents encountered.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn get(&self, id: usize) -> Option<&[u8; TILE_BYTES]> {
        self.tiles.get(id)
    }

    /// Flattened tile data, 16 bytes per tile, id order.
    pub fn bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.tiles.len() * TILE_BYTES);
        for tile in &self.tiles {
            out.extend_from_slice(tile);
        }
        out
    }
}

/// Sum of all 192 raw channel bytes of a tile.
///
/// Deliberately weak: it only pre-filters candidates for the exact
/// comparison below, so colliding hashes are expected and harmless.
fn tile_hash(source: &impl PixelSource, tile_x: usize, tile_y: usize) -> u32 {
    let mut hash = 0u32;
    for iy in 0..TILE_DIM {
        for ix in 0..TILE_DIM {
            let (r, g, b) = source.sample(tile_x * TILE_DIM + ix, tile_y * TILE_DIM + iy);
            hash += r as u32 + g as u32 + b as u32;
        }
    }
    hash
}

/// Exact content equality of two tiles, all 192 channel samples.
fn tiles_equal(
    source: &impl PixelSource,
    ax: usize,
    ay: usize,
    bx: usize,
    by: usize,
) -> bool {
    for iy in 0..TILE_DIM {
        for ix in 0..TILE_DIM {
            let a = source.sample(ax * TILE_DIM + ix, ay * TILE_DIM + iy);
            let b = source.sample(bx * TILE_DIM + ix, by * TILE_DIM + iy);
            if a != b {
                return false;
            }
        }
    }
    true
}

/// Build the tilemap and deduplicated tile set for an image.
///
/// Tiles are visited in row-major order and ids assigned in order of first
/// occurrence, starting at 0. The scan order is an observable contract:
/// map cells index into the returned tile set.
pub fn build_tilemap(source: &impl PixelSource) -> (Tilemap, TileSet) {
    let tiles_x = source.tiles_x();
    let tiles_y = source.tiles_y();

    let mut cells = Vec::with_capacity(tiles_x * tiles_y);
    let mut tiles: Vec<[u8; TILE_BYTES]> = Vec::new();
    let mut buckets: HashMap<u32, Vec<TileRecord>> = HashMap::new();

    for iy in 0..tiles_y {
        for ix in 0..tiles_x {
            let hash = tile_hash(source, ix, iy);
            let bucket = buckets.entry(hash).or_default();

            let existing = bucket
                .iter()
                .find(|rec| tiles_equal(source, ix, iy, rec.x, rec.y))
                .map(|rec| rec.id);

            match existing {
                Some(id) => cells.push(id),
                None => {
                    // New distinct content; a bucket may hold several
                    // distinct tiles sharing a hash.
                    let id = tiles.len();
                    tiles.push(encode_tile(source, ix, iy));
                    bucket.push(TileRecord { x: ix, y: iy, id });
                    cells.push(id);
                }
            }
        }
    }

    (
        Tilemap {
            tiles_x,
            tiles_y,
            cells,
        },
        TileSet { tiles },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixels::PixelBuffer;

    /// Image built from a grid of solid-color tiles.
    fn tile_grid(tiles_x: usize, tiles_y: usize, colors: &[(u8, u8, u8)]) -> PixelBuffer {
        assert_eq!(colors.len(), tiles_x * tiles_y);
        let width = tiles_x * 8;
        let height = tiles_y * 8;
        let mut data = vec![0u8; width * height * 3];
        for ty in 0..tiles_y {
            for tx in 0..tiles_x {
                let (r, g, b) = colors[ty * tiles_x + tx];
                for iy in 0..8 {
                    for ix in 0..8 {
                        let i = ((ty * 8 + iy) * width + tx * 8 + ix) * 3;
                        data[i] = r;
                        data[i + 1] = g;
                        data[i + 2] = b;
                    }
                }
            }
        }
        PixelBuffer::from_raw(width, height, data).unwrap()
    }

    #[test]
    fn identical_tiles_collapse_to_one() {
        let img = tile_grid(2, 2, &[(9, 9, 9); 4]);
        let (map, tiles) = build_tilemap(&img);

        assert_eq!(tiles.len(), 1);
        assert_eq!(map.cells(0), vec![0, 0, 0, 0]);
    }

    #[test]
    fn ids_follow_row_major_first_occurrence() {
        let img = tile_grid(
            2,
            2,
            &[(10, 0, 0), (0, 20, 0), (10, 0, 0), (0, 0, 30)],
        );
        let (map, tiles) = build_tilemap(&img);

        assert_eq!(tiles.len(), 3);
        assert_eq!(map.cells(0), vec![0, 1, 0, 2]);
        assert_eq!(map.get(0, 1), 0);
        assert_eq!(map.get(1, 1), 2);
    }

    #[test]
    fn tile_set_is_in_id_order() {
        let img = tile_grid(2, 1, &[(0, 0, 0), (255, 255, 255)]);
        let (_, tiles) = build_tilemap(&img);

        assert_eq!(tiles.get(0), Some(&[0xFFu8; 16]));
        assert_eq!(tiles.get(1), Some(&[0u8; 16]));
        assert_eq!(tiles.bytes().len(), 32);
    }

    #[test]
    fn colliding_hashes_stay_distinct() {
        // Both tiles sum to the same additive hash but differ in content.
        let img = tile_grid(2, 1, &[(3, 0, 0), (0, 3, 0)]);
        let (map, tiles) = build_tilemap(&img);

        assert_eq!(tiles.len(), 2);
        assert_eq!(map.cells(0), vec![0, 1]);
    }

    #[test]
    fn equal_quantization_is_not_equal_content() {
        // Both colors quantize to index 3, but the raw pixels differ, so
        // the tiles stay separate (and their encodings coincide).
        let img = tile_grid(2, 1, &[(10, 10, 10), (20, 20, 20)]);
        let (map, tiles) = build_tilemap(&img);

        assert_eq!(tiles.len(), 2);
        assert_eq!(map.cells(0), vec![0, 1]);
        assert_eq!(tiles.get(0), tiles.get(1));
    }

    #[test]
    fn undersized_image_yields_empty_outputs() {
        let img = PixelBuffer::from_raw(7, 7, vec![0; 7 * 7 * 3]).unwrap();
        let (map, tiles) = build_tilemap(&img);

        assert_eq!(tiles.len(), 0);
        assert!(tiles.is_empty());
        assert!(map.cells(0).is_empty());
        assert_eq!(map.tiles_x(), 0);
        assert_eq!(map.tiles_y(), 0);
    }

    #[test]
    fn offset_shifts_emitted_cells_only() {
        let img = tile_grid(2, 1, &[(1, 1, 1), (2, 2, 2)]);
        let (map, tiles) = build_tilemap(&img);

        assert_eq!(map.cells(128), vec![128, 129]);
        // Ids themselves are untouched by the offset.
        assert_eq!(map.get(0, 0), 0);
        assert_eq!(tiles.len(), 2);
    }

    #[test]
    fn rebuild_is_bit_identical() {
        let img = tile_grid(
            2,
            2,
            &[(1, 2, 3), (3, 2, 1), (1, 2, 3), (7, 7, 7)],
        );
        let (map_a, tiles_a) = build_tilemap(&img);
        let (map_b, tiles_b) = build_tilemap(&img);

        assert_eq!(map_a.cells(0), map_b.cells(0));
        assert_eq!(tiles_a.bytes(), tiles_b.bytes());
    }
}
