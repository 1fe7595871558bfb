//! # C Header Emission
//!
//! Formats converted tile data into C header text: include guard, length
//! defines and `unsigned char` arrays, ready to be compiled into a target
//! program. This is a thin templating layer; all byte values come in
//! fully-formed from the codec.

use crate::graphics::tilemap::Tilemap;

/// Bytes per emitted line in tile data arrays (one tile per line).
const BYTES_PER_LINE: usize = 16;

/// Header for sprite data: tile count define and the data array.
pub fn sprite_header(name: &str, tile_count: usize, data: &[u8], rle: bool) -> String {
    let mut out = String::new();
    let guard = format!("{}_SPRITES_H", name.to_uppercase());

    out.push_str(&format!("#ifndef {}\n", guard));
    out.push_str(&format!("#define {}\n\n", guard));

    out.push_str(&format!("#define {}_data_length {}\n", name, tile_count));
    if rle {
        out.push_str(&format!("#define {}_data_rle 1\n", name));
    }
    push_array(
        &mut out,
        &format!("{}_data", name),
        data.iter().map(|&b| b as usize),
        BYTES_PER_LINE,
    );

    out.push_str("\n#endif\n");
    out
}

/// Header for a background map: tile data array plus the tilemap grid with
/// the configured offset added to every cell.
pub fn map_header(
    name: &str,
    map: &Tilemap,
    tile_count: usize,
    tile_data: &[u8],
    offset: usize,
    rle: bool,
) -> String {
    let mut out = String::new();
    let guard = format!("{}_MAP_H", name.to_uppercase());

    out.push_str(&format!("#ifndef {}\n", guard));
    out.push_str(&format!("#define {}\n\n", guard));

    out.push_str(&format!("#define {}_data_length {}\n", name, tile_count));
    if rle {
        out.push_str(&format!("#define {}_data_rle 1\n", name));
    }
    push_array(
        &mut out,
        &format!("{}_data", name),
        tile_data.iter().map(|&b| b as usize),
        BYTES_PER_LINE,
    );
    out.push('\n');

    out.push_str(&format!("#define {}_tiles_width {}\n", name, map.tiles_x()));
    out.push_str(&format!("#define {}_tiles_height {}\n", name, map.tiles_y()));
    out.push_str(&format!("#define {}_offset {}\n", name, offset));
    // The map array is never compressed; cells are emitted one grid row
    // per line.
    push_array(
        &mut out,
        &format!("{}_tiles", name),
        map.cells(offset).into_iter(),
        map.tiles_x().max(1),
    );

    out.push_str("\n#endif\n");
    out
}

fn push_array(
    out: &mut String,
    symbol: &str,
    values: impl Iterator<Item = usize>,
    per_line: usize,
) {
    out.push_str(&format!("const unsigned char {}[] = {{", symbol));
    for (i, v) in values.enumerate() {
        if i % per_line == 0 {
            out.push_str("\n\t");
        }
        out.push_str(&format!("{:3}, ", v));
    }
    out.push_str("\n};\n");
}
