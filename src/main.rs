use std::{fmt, fs, io, path::PathBuf, process};

use clap::{ArgGroup, Parser};
use image::ImageError;

use gbtiler::compression::rle_encode;
use gbtiler::graphics::{build_tilemap, sequence_sprites, SpriteError, SpriteLayout};
use gbtiler::output::header::{map_header, sprite_header};
use gbtiler::output::metadata::{write_report, ConversionReport};
use gbtiler::pixels::PixelSource;

/// Convert an image to Game Boy background or sprite data.
#[derive(Parser)]
#[command(name = "gbtiler", version, about = "Convert images to 2bpp tile and sprite data")]
#[command(group = ArgGroup::new("mode").required(true))]
struct Args {
    /// Image file to convert
    image: PathBuf,

    /// Produce a deduplicated tile map
    #[arg(long, group = "mode")]
    map: bool,

    /// Produce sprite tiles (no deduplication)
    #[arg(long, group = "mode")]
    sprite: bool,

    /// Offset added to every tile map cell
    #[arg(short = 'O', long, default_value_t = 0)]
    offset: usize,

    /// Emit sprites as paired 8x16 cells
    #[arg(long = "8x16")]
    size_8x16: bool,

    /// Compress tile data using RLE
    #[arg(short, long)]
    rle: bool,

    /// Write the header to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Symbol name; defaults to the image file stem
    #[arg(short, long)]
    name: Option<String>,

    /// Write a JSON conversion report to this path
    #[arg(long)]
    metadata: Option<PathBuf>,
}

#[derive(Debug)]
enum CliError {
    Io(io::Error),
    Image(ImageError),
    Sprite(SpriteError),
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::Io(err)
    }
}
impl From<ImageError> for CliError {
    fn from(err: ImageError) -> Self {
        CliError::Image(err)
    }
}
impl From<SpriteError> for CliError {
    fn from(err: SpriteError) -> Self {
        CliError::Sprite(err)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(err) => write!(f, "I/O error: {}", err),
            CliError::Image(err) => write!(f, "image error: {}", err),
            CliError::Sprite(err) => write!(f, "{}", err),
        }
    }
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let img = image::open(&args.image)?.to_rgb8();
    let (width, height) = (PixelSource::width(&img), PixelSource::height(&img));
    eprintln!(
        "Loaded image {} ({}x{} pixels, {}x{} tiles)",
        args.image.display(),
        width,
        height,
        img.tiles_x(),
        img.tiles_y()
    );

    let name = match &args.name {
        Some(name) => name.clone(),
        None => args
            .image
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("image")
            .to_string(),
    };

    let total_tiles = img.tiles_x() * img.tiles_y();
    let (header, unique_tiles, data_bytes, emitted_bytes);

    if args.map {
        let (map, tiles) = build_tilemap(&img);
        eprintln!(
            "Tile map: {} cells, {} unique tiles",
            total_tiles,
            tiles.len()
        );

        let raw = tiles.bytes();
        unique_tiles = tiles.len();
        data_bytes = raw.len();
        let data = compress(raw, args.rle);
        header = map_header(&name, &map, tiles.len(), &data, args.offset, args.rle);
        emitted_bytes = data.len();
    } else {
        let layout = if args.size_8x16 {
            SpriteLayout::Paired8x16
        } else {
            SpriteLayout::Single8x8
        };
        let raw = sequence_sprites(&img, layout)?;
        eprintln!("Sprite data: {} tiles", total_tiles);

        unique_tiles = total_tiles;
        data_bytes = raw.len();
        let data = compress(raw, args.rle);
        header = sprite_header(&name, total_tiles, &data, args.rle);
        emitted_bytes = data.len();
    }

    if args.rle {
        eprintln!("RLE: {} -> {} bytes", data_bytes, emitted_bytes);
    }

    match &args.output {
        Some(path) => {
            fs::write(path, &header)?;
            eprintln!("Wrote {}", path.display());
        }
        None => print!("{}", header),
    }

    if let Some(path) = &args.metadata {
        let report = ConversionReport {
            image: args.image.display().to_string(),
            width,
            height,
            tiles_x: img.tiles_x(),
            tiles_y: img.tiles_y(),
            mode: if args.map { "map".into() } else { "sprite".into() },
            total_tiles,
            unique_tiles,
            data_bytes,
            emitted_bytes,
            rle: args.rle,
        };
        write_report(&report, path)?;
        eprintln!("Wrote {}", path.display());
    }

    Ok(())
}

fn compress(raw: Vec<u8>, rle: bool) -> Vec<u8> {
    if rle {
        rle_encode(&raw)
    } else {
        raw
    }
}
