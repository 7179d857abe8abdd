use crate::image::ImageView;
use crate::util::{ExploderError, ExploderResult};

/// One RGBA8 pixel with straight alpha.
pub type Rgba = [u8; 4];

/// Fully transparent black.
pub const TRANSPARENT: Rgba = [0, 0, 0, 0];

/// Owned contiguous RGBA image buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    data: Vec<Rgba>,
    width: usize,
    height: usize,
}

impl Surface {
    /// Creates a surface from a row-major pixel buffer of exactly `width * height` pixels.
    pub fn new(data: Vec<Rgba>, width: usize, height: usize) -> ExploderResult<Self> {
        if width == 0 || height == 0 {
            return Err(ExploderError::InvalidDimensions { width, height });
        }
        let needed = width
            .checked_mul(height)
            .ok_or(ExploderError::InvalidDimensions { width, height })?;
        if data.len() < needed {
            return Err(ExploderError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        if data.len() > needed {
            return Err(ExploderError::InvalidDimensions { width, height });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Creates a surface where every pixel is `pixel`.
    pub fn filled(width: usize, height: usize, pixel: Rgba) -> ExploderResult<Self> {
        let len = width
            .checked_mul(height)
            .ok_or(ExploderError::InvalidDimensions { width, height })?;
        Self::new(vec![pixel; len], width, height)
    }

    /// Copies a (possibly strided) view into a new contiguous surface.
    pub fn from_view(view: ImageView<'_, Rgba>) -> ExploderResult<Self> {
        let width = view.width();
        let height = view.height();
        let mut data = Vec::with_capacity(width.saturating_mul(height));
        for y in 0..height {
            let row = view.row(y).ok_or(ExploderError::BufferTooSmall {
                needed: y.saturating_mul(view.stride()).saturating_add(width),
                got: view.as_slice().len(),
            })?;
            data.extend_from_slice(row);
        }
        Self::new(data, width, height)
    }

    /// Returns a borrowed view of the surface.
    pub fn view(&self) -> ImageView<'_, Rgba> {
        ImageView {
            data: &self.data,
            width: self.width,
            height: self.height,
            stride: self.width,
        }
    }

    /// Returns the width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the pixels in row-major order.
    pub fn pixels(&self) -> &[Rgba] {
        &self.data
    }

    /// Returns the pixel at `(x, y)` if it is within bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<Rgba> {
        self.view().get(x, y).copied()
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [Rgba] {
        &mut self.data
    }
}
