//! Loading and saving surfaces via the `image` crate.
//!
//! Every decoded image is converted to RGBA8 so masks and sheets share one
//! pixel layout no matter how they were stored.

use crate::image::Surface;
use crate::util::{ExploderError, ExploderResult};
use std::path::Path;

/// Creates a surface from an RGBA image buffer.
pub fn surface_from_rgba_image(img: &image::RgbaImage) -> ExploderResult<Surface> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img.pixels().map(|px| px.0).collect();
    Surface::new(data, width, height)
}

/// Creates an RGBA surface from a dynamic image of any pixel format.
pub fn surface_from_dynamic_image(img: &image::DynamicImage) -> ExploderResult<Surface> {
    surface_from_rgba_image(&img.to_rgba8())
}

/// Converts a surface back into an `image` buffer.
pub fn surface_to_rgba_image(surface: &Surface) -> ExploderResult<image::RgbaImage> {
    let (width, height) = (surface.width(), surface.height());
    let invalid = ExploderError::InvalidDimensions { width, height };
    let w = u32::try_from(width).map_err(|_| invalid.clone())?;
    let h = u32::try_from(height).map_err(|_| invalid.clone())?;
    let raw = surface.pixels().iter().flatten().copied().collect();
    image::RgbaImage::from_raw(w, h, raw).ok_or(invalid)
}

/// Loads an image from disk and converts it to an RGBA surface.
pub fn load_surface<P: AsRef<Path>>(path: P) -> ExploderResult<Surface> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|err| ExploderError::ImageIo {
        path: path.display().to_string(),
        reason: err.to_string(),
    })?;
    surface_from_dynamic_image(&img)
}

/// Writes a surface to disk as PNG.
pub fn save_surface<P: AsRef<Path>>(path: P, surface: &Surface) -> ExploderResult<()> {
    let path = path.as_ref();
    surface_to_rgba_image(surface)?
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|err| ExploderError::ImageIo {
            path: path.display().to_string(),
            reason: err.to_string(),
        })
}
