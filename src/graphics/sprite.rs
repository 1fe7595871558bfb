//! # Sprite Sequencing
//!
//! Orders the tiles of a sprite sheet for the hardware's sprite layouts and
//! concatenates their encodings. Sprite data is never deduplicated: every
//! grid cell contributes its own 16 bytes.

use std::fmt;

use crate::graphics::tile::{encode_tile, TILE_BYTES};
use crate::pixels::PixelSource;

/// Hardware sprite cell layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteLayout {
    /// One tile per sprite, plain row-major order.
    Single8x8,
    /// Two vertically stacked tiles per sprite; both halves of a column are
    /// emitted together before advancing to the next column.
    Paired8x16,
}

#[derive(Debug, PartialEq, Eq)]
pub enum SpriteError {
    /// Paired 8x16 layout requires an even number of tile rows.
    UnsupportedSpriteLayout { tiles_y: usize },
}

impl fmt::Display for SpriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpriteError::UnsupportedSpriteLayout { tiles_y } => write!(
                f,
                "8x16 sprite layout needs an even number of tile rows, image has {}",
                tiles_y
            ),
        }
    }
}

/// Concatenate the encodings of every tile in the sheet, ordered for the
/// requested layout.
pub fn sequence_sprites(
    source: &impl PixelSource,
    layout: SpriteLayout,
) -> Result<Vec<u8>, SpriteError> {
    let tiles_x = source.tiles_x();
    let tiles_y = source.tiles_y();
    let mut out = Vec::with_capacity(tiles_x * tiles_y * TILE_BYTES);

    match layout {
        SpriteLayout::Single8x8 => {
            for iy in 0..tiles_y {
                for ix in 0..tiles_x {
                    out.extend_from_slice(&encode_tile(source, ix, iy));
                }
            }
        }
        SpriteLayout::Paired8x16 => {
            if tiles_y % 2 != 0 {
                return Err(SpriteError::UnsupportedSpriteLayout { tiles_y });
            }
            for base_row in (0..tiles_y).step_by(2) {
                for ix in 0..tiles_x {
                    out.extend_from_slice(&encode_tile(source, ix, base_row));
                    out.extend_from_slice(&encode_tile(source, ix, base_row + 1));
                }
            }
        }
    }

    Ok(out)
}
