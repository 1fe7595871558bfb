//! # Pixel Access
//!
//! Read-only view over a decoded image. The converter only ever needs the
//! dimensions and individual RGB samples, so the loader's buffer is borrowed
//! behind this trait for the duration of one conversion.

use std::io;

use image::{ImageBuffer, RgbImage};

/// Tiles are 8x8 pixels, the hardware's atomic graphics unit.
pub const TILE_DIM: usize = 8;

/// Random-access RGB view over a decoded image.
pub trait PixelSource {
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// Raw RGB sample at pixel (x, y). Implementations panic on
    /// out-of-range coordinates.
    fn sample(&self, x: usize, y: usize) -> (u8, u8, u8);

    /// Number of whole tile columns. Trailing pixels narrower than a tile
    /// are excluded from the grid.
    fn tiles_x(&self) -> usize {
        self.width() / TILE_DIM
    }

    /// Number of whole tile rows.
    fn tiles_y(&self) -> usize {
        self.height() / TILE_DIM
    }
}

impl PixelSource for RgbImage {
    fn width(&self) -> usize {
        ImageBuffer::width(self) as usize
    }

    fn height(&self) -> usize {
        ImageBuffer::height(self) as usize
    }

    fn sample(&self, x: usize, y: usize) -> (u8, u8, u8) {
        let p = self.get_pixel(x as u32, y as u32);
        (p[0], p[1], p[2])
    }
}

/// Owned 3-channel pixel buffer, row-major.
///
/// Useful when pixel data comes from somewhere other than an image file.
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self, io::Error> {
        if data.len() != width * height * 3 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "pixel buffer length {} does not match {}x{} RGB image",
                    data.len(),
                    width,
                    height
                ),
            ));
        }
        Ok(PixelBuffer {
            width,
            height,
            data,
        })
    }
}

impl PixelSource for PixelBuffer {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn sample(&self, x: usize, y: usize) -> (u8, u8, u8) {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) outside {}x{} image",
            x,
            y,
            self.width,
            self.height
        );
        let i = (y * self.width + x) * 3;
        (self.data[i], self.data[i + 1], self.data[i + 2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_rejects_wrong_length() {
        assert!(PixelBuffer::from_raw(2, 2, vec![0; 11]).is_err());
        assert!(PixelBuffer::from_raw(2, 2, vec![0; 12]).is_ok());
    }

    #[test]
    fn sample_reads_row_major_rgb() {
        let mut data = vec![0u8; 2 * 2 * 3];
        // pixel (1, 0) = (10, 20, 30)
        data[3] = 10;
        data[4] = 20;
        data[5] = 30;
        let buf = PixelBuffer::from_raw(2, 2, data).unwrap();
        assert_eq!(buf.sample(1, 0), (10, 20, 30));
        assert_eq!(buf.sample(0, 0), (0, 0, 0));
    }

    #[test]
    fn tile_grid_truncates_partial_tiles() {
        let buf = PixelBuffer::from_raw(20, 9, vec![0; 20 * 9 * 3]).unwrap();
        assert_eq!(buf.tiles_x(), 2);
        assert_eq!(buf.tiles_y(), 1);

        let small = PixelBuffer::from_raw(7, 7, vec![0; 7 * 7 * 3]).unwrap();
        assert_eq!(small.tiles_x(), 0);
        assert_eq!(small.tiles_y(), 0);
    }
}
