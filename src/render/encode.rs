//! Raster encoders (PNG via `png`, JPEG via `image`)

use anyhow::{Context, Result};
use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use super::{Canvas, render};
use crate::constants::export::JPEG_QUALITY;
use crate::document::ControllerConfig;
use crate::export::{ExportFormat, export_filename};

pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, canvas.width(), canvas.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().context("Failed to write PNG header")?;
        writer
            .write_image_data(canvas.image().as_raw())
            .context("Failed to write PNG image data")?;
        writer.finish().context("Failed to finish PNG stream")?;
    }
    Ok(out)
}

pub fn encode_jpeg(canvas: &Canvas) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let rgb = canvas.to_rgb();
    JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY)
        .write_image(rgb.as_raw(), rgb.width(), rgb.height(), ExtendedColorType::Rgb8)
        .context("Failed to encode JPEG")?;
    Ok(out)
}

/// Render `doc` and write it into `dir` under its slug filename
pub fn export_image(
    doc: &ControllerConfig,
    format: ExportFormat,
    dir: &Path,
    scale: f64,
    selected: Option<&str>,
) -> Result<PathBuf> {
    let canvas = render(doc, scale, selected);
    let bytes = match format {
        ExportFormat::Png => encode_png(&canvas)?,
        ExportFormat::Jpeg => encode_jpeg(&canvas)?,
        ExportFormat::Json => anyhow::bail!("JSON is not a raster format"),
    };

    let path = dir.join(export_filename(doc, format));
    fs::write(&path, &bytes).with_context(|| format!("Failed to write {:?}", path))?;
    info!(path = %path.display(), bytes = bytes.len(), width = canvas.width(), height = canvas.height(), "Exported image");
    Ok(path)
}
