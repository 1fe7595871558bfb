//! Lossless compression for emitted byte streams.

pub mod rle;

pub use rle::{rle_decode, rle_encode, RleError};
