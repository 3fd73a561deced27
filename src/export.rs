//! PNG export of the full-resolution calendar page.

use std::path::{Path, PathBuf};

use image::RgbaImage;
use log::info;

use crate::error::{Error, Result};
use crate::rendering::{PixelSurface, Surface};

/// Where Ctrl+S writes by default, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "./print_me!.png";

/// Write `page` to `path` as PNG, replacing any existing file. Returns the
/// absolute path that was written.
pub fn save_page(page: &PixelSurface, path: &Path) -> Result<PathBuf> {
    let image = RgbaImage::from_raw(page.width(), page.height(), page.data().to_vec())
        .ok_or_else(|| Error::Encode("surface dimensions do not match pixel data".into()))?;
    image.save(path).map_err(|e| match e {
        image::ImageError::IoError(io) => Error::Export(io),
        other => Error::Encode(other.to_string()),
    })?;
    let absolute = std::fs::canonicalize(path)?;
    info!("saved calendar page to {}", absolute.display());
    Ok(absolute)
}
