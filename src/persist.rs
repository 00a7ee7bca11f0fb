use std::{
    fs,
    io::BufWriter,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use json_pretty_compact::PrettyCompactFormatter;
use log::info;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Serializer;

use crate::{common::ColorRGB, pixels::PixelGrid};

pub fn save_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    info!("Saving {}", path.display());
    let formatter = PrettyCompactFormatter::new();
    let mut data_bytes = vec![];
    let mut ser = Serializer::with_formatter(&mut data_bytes, formatter);
    data.serialize(&mut ser)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, &data_bytes)?;
    Ok(())
}

pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    info!("Loading {}", path.display());
    let data_bytes = std::fs::read(path)?;
    let data: T = serde_json::from_slice(&data_bytes)
        .with_context(|| format!("Unable to parse {}", path.display()))?;
    Ok(data)
}

/// Read a PNG as RGB pixels. Palette, grey and 16-bit images are expanded to
/// 8-bit color; alpha is dropped.
pub fn load_png(path: &Path) -> Result<PixelGrid> {
    info!("Loading {}", path.display());
    let file = fs::File::open(path).with_context(|| format!("Unable to open {}", path.display()))?;
    let mut decoder = png::Decoder::new(file);
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .with_context(|| format!("{} is not a PNG", path.display()))?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut buf)?;
    let data = &buf[..frame.buffer_size()];

    let channels = frame.color_type.samples();
    let (width, height) = (frame.width as usize, frame.height as usize);
    let mut pixels: Vec<ColorRGB> = Vec::with_capacity(width * height);
    for px in data.chunks_exact(channels) {
        let color = match frame.color_type {
            png::ColorType::Rgb | png::ColorType::Rgba => [px[0], px[1], px[2]],
            png::ColorType::Grayscale | png::ColorType::GrayscaleAlpha => [px[0], px[0], px[0]],
            png::ColorType::Indexed => bail!("Unexpanded indexed PNG: {}", path.display()),
        };
        pixels.push(color);
    }
    Ok(PixelGrid::from_pixels(width, height, pixels)?)
}

pub fn save_png(path: &Path, grid: &PixelGrid) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = fs::File::create(path).with_context(|| format!("Unable to create {}", path.display()))?;
    let mut encoder = png::Encoder::new(
        BufWriter::new(file),
        grid.width() as u32,
        grid.height() as u32,
    );
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    let data: Vec<u8> = grid.pixels().iter().flatten().copied().collect();
    writer.write_image_data(&data)?;
    writer.finish()?;
    Ok(())
}

/// `out.png` -> `out_<i>.png`, next to the original.
pub fn numbered_path(output: &Path, i: usize) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    output.with_file_name(format!("{}_{}.png", stem, i))
}

/// Delete tile images left over from an earlier run with the same output name.
pub fn clean_numbered_outputs(output: &Path) -> Result<usize> {
    let dir = match output.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let pattern = dir
        .join(format!("{}_*.png", glob::Pattern::escape(&stem)))
        .to_string_lossy()
        .into_owned();
    let mut removed = 0;
    for entry in glob::glob(&pattern)? {
        let path = entry?;
        let is_numbered = path
            .file_stem()
            .and_then(|s| s.to_str())
            .and_then(|s| s.rsplit('_').next())
            .is_some_and(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()));
        if is_numbered {
            info!("Deleting {}", path.display());
            fs::remove_file(&path)?;
            removed += 1;
        }
    }
    Ok(removed)
}
