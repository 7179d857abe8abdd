//! Pixel buffers, views and sub-image extraction.
//!
//! `ImageView` is a borrowed 2D view into a 1D buffer with an explicit stride.
//! The stride counts elements between the starts of consecutive rows, so a
//! stride larger than the width represents padded rows. ROI slices are zero-copy
//! views into the same backing slice and retain the original stride.
//!
//! Sheets and masks are held as [`Surface`]s: owned RGBA8 buffers with
//! straight alpha, regardless of the format they were decoded from.

use crate::util::{ExploderError, ExploderResult};

pub mod cut;
pub mod io;
mod surface;

pub use cut::{cut_surface, CutRect};
pub use surface::{Rgba, Surface, TRANSPARENT};

/// Borrowed 2D image view with an explicit stride.
///
/// [`cut_surface`] reads the sheet through an ROI of this view. The public
/// constructors let callers cut from pixel buffers they already own without
/// copying them into a [`Surface`] first.
#[derive(Copy, Clone)]
pub struct ImageView<'a, T> {
    data: &'a [T],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a, T> ImageView<'a, T> {
    /// Creates a contiguous view with `stride == width`.
    pub fn from_slice(data: &'a [T], width: usize, height: usize) -> ExploderResult<Self> {
        Self::new(data, width, height, width)
    }

    /// Creates a view with an explicit stride.
    pub fn new(data: &'a [T], width: usize, height: usize, stride: usize) -> ExploderResult<Self> {
        let needed = required_len(width, height, stride)?;
        if data.len() < needed {
            return Err(ExploderError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            stride,
        })
    }

    /// Returns the image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the stride in elements between row starts.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Returns the backing slice including any row padding.
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    /// Returns the element at `(x, y)` if it is within bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<&'a T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = y.checked_mul(self.stride)?.checked_add(x)?;
        self.data.get(idx)
    }

    /// Returns a contiguous slice for row `y` with length `width`.
    pub fn row(&self, y: usize) -> Option<&'a [T]> {
        if y >= self.height {
            return None;
        }
        let start = y.checked_mul(self.stride)?;
        let end = start.checked_add(self.width)?;
        self.data.get(start..end)
    }

    /// Returns a zero-copy ROI view into the same backing buffer.
    ///
    /// The region must lie entirely inside the view; [`cut_surface`] clips
    /// its rectangle before asking for one.
    pub fn roi(
        &self,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    ) -> ExploderResult<ImageView<'a, T>> {
        if width == 0 || height == 0 {
            return Err(ExploderError::InvalidDimensions { width, height });
        }

        let out_of_bounds = || ExploderError::RoiOutOfBounds {
            x,
            y,
            width,
            height,
            img_width: self.width,
            img_height: self.height,
        };
        let end_x = x.checked_add(width).ok_or_else(out_of_bounds)?;
        let end_y = y.checked_add(height).ok_or_else(out_of_bounds)?;
        if end_x > self.width || end_y > self.height {
            return Err(out_of_bounds());
        }

        let start = y
            .checked_mul(self.stride)
            .and_then(|v| v.checked_add(x))
            .ok_or(ExploderError::InvalidDimensions {
                width: self.width,
                height: self.height,
            })?;
        let data = self
            .data
            .get(start..)
            .ok_or(ExploderError::BufferTooSmall {
                needed: start.saturating_add(1),
                got: self.data.len(),
            })?;

        ImageView::new(data, width, height, self.stride)
    }
}

fn required_len(width: usize, height: usize, stride: usize) -> ExploderResult<usize> {
    if width == 0 || height == 0 {
        return Err(ExploderError::InvalidDimensions { width, height });
    }
    if stride < width {
        return Err(ExploderError::InvalidStride { width, stride });
    }
    let needed = (height - 1)
        .checked_mul(stride)
        .and_then(|v| v.checked_add(width))
        .ok_or(ExploderError::InvalidDimensions { width, height })?;
    Ok(needed)
}
