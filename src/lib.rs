//! Image to tile data conversion for 8x8-tile-addressable 2bpp graphics
//! hardware.
//!
//! The core consumes any [`pixels::PixelSource`] and produces byte streams:
//! deduplicated tile sets with a tile map, or sequenced sprite data, both
//! optionally RLE-compressed. Formatting those bytes into a C header is a
//! separate, thin output layer.

pub mod compression;
pub mod graphics;
pub mod output;
pub mod pixels;
