//! texpack - pack an image into an embeddable zero-run coded C array
//!
//! Pipeline per band: raw plane -> predictor -> zero-run encoder -> stream.
//! Every stream is decoded again and compared with its source before anything
//! is reported.

mod args;
mod report;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use args::Args;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use zrun::{
    decode_bands, encode_bands, split_bands, CodecOptions, Histogram, Plane, PlaneDecoder,
    PlaneEncoder,
};

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    run(&args)
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Load an image as 8-bit interleaved samples plus its channel count
fn load_pixels(path: &Path) -> Result<(u32, u32, usize, Vec<u8>)> {
    let img = image::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let (width, height) = (img.width(), img.height());
    let (channels, pixels) = match img.color().channel_count() {
        1 => (1, img.to_luma8().into_raw()),
        2 => (2, img.to_luma_alpha8().into_raw()),
        3 => (3, img.to_rgb8().into_raw()),
        _ => (4, img.to_rgba8().into_raw()),
    };
    Ok((width, height, channels, pixels))
}

fn run(args: &Args) -> Result<()> {
    let (width, height, channels, pixels) = load_pixels(&args.input)?;
    info!(width, height, channels, "loaded {}", args.input.display());

    let options = CodecOptions::new()
        .predictor(args.predictor.into())
        .encoding(args.encoding.into());
    let row = width as usize;

    let planes = split_bands(&pixels, channels)?
        .into_iter()
        .map(|band| Plane::new(band, row))
        .collect::<zrun::ZrunResult<Vec<_>>>()?;

    let streams = encode_bands(&PlaneEncoder::new(options), &planes)?;
    let decoded = decode_bands(&PlaneDecoder::new(options), &streams, row)?;

    let mut raw = Vec::with_capacity(pixels.len());
    let mut enc = Vec::new();
    let mut dec = Vec::with_capacity(pixels.len());
    let bands = planes.iter().zip(&streams).zip(&decoded);
    for (band, ((plane, stream), restored)) in bands.enumerate() {
        debug!(band, raw = plane.len(), encoded = stream.len(), "band packed");
        raw.extend_from_slice(plane.as_bytes());
        enc.extend_from_slice(stream);
        dec.extend_from_slice(restored.as_bytes());
    }

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("failed to create {}", args.out_dir.display()))?;
    let out_path = |suffix: &str| args.out_dir.join(format!("{}_{}", args.stem, suffix));

    write_file(&out_path("raw.bin"), &raw)?;
    write_file(&out_path("enc.bin"), &enc)?;
    write_file(&out_path("dec.bin"), &dec)?;

    verify(&raw, &dec)?;

    let hist = Histogram::from_bytes(&enc);
    let entropy = hist.shannon_entropy();
    info!("encoded image size: {} bytes", enc.len());
    info!("{} out of 256 values used", hist.distinct());
    info!(
        "Shannon entropy: {:.2} bits -> ideal size = {} bytes",
        entropy,
        hist.ideal_size()
    );

    let hist_path = out_path("hist.txt");
    let mut file = create(&hist_path)?;
    report::write_histogram(&mut file, &hist, options.predictor.name(), options.encoding.name())
        .and_then(|_| file.flush())
        .with_context(|| format!("failed to write {}", hist_path.display()))?;

    let tex_path = out_path("tex.c");
    let mut file = create(&tex_path)?;
    report::write_c_array(&mut file, &args.symbol, width, height, &enc)
        .and_then(|_| file.flush())
        .with_context(|| format!("failed to write {}", tex_path.display()))?;

    info!("wrote {}", tex_path.display());
    Ok(())
}

/// Fail unless the decoded bytes reproduce the source exactly
fn verify(raw: &[u8], dec: &[u8]) -> Result<()> {
    if raw.len() != dec.len() {
        bail!("decoded {} bytes, expected {}", dec.len(), raw.len());
    }
    if let Some(first) = raw.iter().zip(dec).position(|(a, b)| a != b) {
        bail!("decoded data differs from the source at byte {}", first);
    }
    Ok(())
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    Ok(BufWriter::new(file))
}

fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    fs::write(path, data).with_context(|| format!("failed to write {}", path.display()))
}
