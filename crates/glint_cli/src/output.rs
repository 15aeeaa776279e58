//! Image file output.
//!
//! Writes the gamma-encoded 8-bit image either as ASCII PPM (`P3`) or as
//! PNG through the `image` crate. The format is chosen by file extension.

use glint_tracer::{color_to_rgb8, ImageBuffer};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Unsupported output extension: {0:?} (expected .ppm or .png)")]
    UnsupportedExtension(String),

    #[error("Pixel buffer does not match {width}x{height}")]
    BufferMismatch { width: u32, height: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Ppm,
    Png,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Result<Self, OutputError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        match extension.as_str() {
            "ppm" => Ok(OutputFormat::Ppm),
            "png" => Ok(OutputFormat::Png),
            _ => Err(OutputError::UnsupportedExtension(extension)),
        }
    }
}

/// Write the image as plain-text PPM, top row first.
pub fn write_ppm<W: Write>(image: &ImageBuffer, mut out: W) -> Result<(), OutputError> {
    writeln!(out, "P3")?;
    writeln!(out, "{} {}", image.width, image.height)?;
    writeln!(out, "255")?;

    for color in &image.pixels {
        let [r, g, b] = color_to_rgb8(*color);
        writeln!(out, "{} {} {}", r, g, b)?;
    }

    out.flush()?;
    Ok(())
}

/// Save the image to `path` in the format named by its extension.
pub fn save(image: &ImageBuffer, path: &Path) -> Result<(), OutputError> {
    match OutputFormat::from_path(path)? {
        OutputFormat::Ppm => {
            let file = File::create(path)?;
            write_ppm(image, BufWriter::new(file))
        }
        OutputFormat::Png => {
            let rgb = image::RgbImage::from_raw(image.width, image.height, image.to_rgb8())
                .ok_or(OutputError::BufferMismatch {
                    width: image.width,
                    height: image.height,
                })?;
            rgb.save_with_format(path, image::ImageFormat::Png)?;
            Ok(())
        }
    }
}
