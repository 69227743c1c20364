//! Decoding to RGBA and PNG export

use crate::io::error::{FlipError, Result};
use image::{ImageFormat, RgbaImage};
use log::info;
use std::path::Path;

/// Decode an image file and normalize it to 8-bit RGBA
///
/// Sources without an alpha channel become fully opaque.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not a decodable image
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let decoded = image::open(path).map_err(|e| FlipError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    let rgba = decoded.to_rgba8();

    info!(
        "Decoded '{}' ({}x{})",
        path.display(),
        rgba.width(),
        rgba.height()
    );

    Ok(rgba)
}

/// Encode `image` as PNG at `path`, replacing any existing file
///
/// The format is always PNG regardless of the path's extension.
///
/// # Errors
///
/// Returns an error if the file cannot be created or encoding fails
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| FlipError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })
}
