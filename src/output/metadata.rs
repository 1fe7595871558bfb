//! Conversion summary report, written as a JSON sidecar next to the
//! generated header.

use std::{fs, io, path::Path};

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ConversionReport {
    pub image: String,
    pub width: usize,
    pub height: usize,
    pub tiles_x: usize,
    pub tiles_y: usize,
    pub mode: String,
    /// Tiles in the grid, before any deduplication.
    pub total_tiles: usize,
    /// Distinct tiles actually emitted (equals total_tiles in sprite mode).
    pub unique_tiles: usize,
    /// Byte size of the uncompressed tile data.
    pub data_bytes: usize,
    /// Byte size of the data array as emitted.
    pub emitted_bytes: usize,
    pub rle: bool,
}

pub fn write_report(report: &ConversionReport, path: &Path) -> Result<(), io::Error> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_serializes_all_fields() {
        let report = ConversionReport {
            image: "bg.png".into(),
            width: 160,
            height: 144,
            tiles_x: 20,
            tiles_y: 18,
            mode: "map".into(),
            total_tiles: 360,
            unique_tiles: 96,
            data_bytes: 1536,
            emitted_bytes: 812,
            rle: true,
        };

        let json = serde_json::to_string(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["tiles_x"], 20);
        assert_eq!(value["unique_tiles"], 96);
        assert_eq!(value["mode"], "map");
        assert_eq!(value["rle"], true);
    }
}
