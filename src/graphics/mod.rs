//! Tile graphics core
//!
//! This module provides the conversion pipeline from raw pixels to hardware
//! tile data: 2bpp encoding, tile map deduplication and sprite sequencing.

// Declare submodules
pub mod sprite;
pub mod tile;
pub mod tilemap;

// Re-export commonly used items for convenience
pub use sprite::{sequence_sprites, SpriteError, SpriteLayout};
pub use tile::{encode_tile, TILE_BYTES};
pub use tilemap::{build_tilemap, TileSet, Tilemap};
