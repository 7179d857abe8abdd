//! Rectangular sub-image extraction.
//!
//! The cut rectangle has a signed origin and may extend past the source
//! edges. The output always has the rectangle's size; pixels that fall
//! outside the source are [`TRANSPARENT`]. A rectangle that does not touch
//! the source at all produces no image.

use crate::image::{ImageView, Rgba, Surface, TRANSPARENT};
use crate::util::{ExploderError, ExploderResult};

/// Rectangle to cut, in source pixel coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CutRect {
    pub x: i64,
    pub y: i64,
    pub width: usize,
    pub height: usize,
}

impl CutRect {
    pub fn new(x: i64, y: i64, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Clips the rectangle against a `img_width` x `img_height` image.
    ///
    /// Returns the overlapping span as `(x0, y0, x1, y1)` in source
    /// coordinates (end exclusive), or `None` if nothing overlaps.
    fn clip(&self, img_width: usize, img_height: usize) -> Option<(usize, usize, usize, usize)> {
        let width = i64::try_from(self.width).ok()?;
        let height = i64::try_from(self.height).ok()?;
        let img_width = i64::try_from(img_width).ok()?;
        let img_height = i64::try_from(img_height).ok()?;

        let x0 = self.x.max(0);
        let y0 = self.y.max(0);
        let x1 = self.x.checked_add(width)?.min(img_width);
        let y1 = self.y.checked_add(height)?.min(img_height);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0 as usize, y0 as usize, x1 as usize, y1 as usize))
    }
}

/// Copies `rect` out of `source` into a new surface.
pub fn cut_surface(source: ImageView<'_, Rgba>, rect: CutRect) -> ExploderResult<Surface> {
    if rect.width == 0 || rect.height == 0 {
        return Err(ExploderError::InvalidDimensions {
            width: rect.width,
            height: rect.height,
        });
    }
    let (x0, y0, x1, y1) = rect
        .clip(source.width(), source.height())
        .ok_or(ExploderError::DisjointCut {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            img_width: source.width(),
            img_height: source.height(),
        })?;
    let overlap = source.roi(x0, y0, x1 - x0, y1 - y0)?;
    if overlap.width() == rect.width && overlap.height() == rect.height {
        return Surface::from_view(overlap);
    }

    // Offsets of the overlap inside the output; non-negative after clipping.
    let dst_x = (x0 as i64 - rect.x) as usize;
    let dst_y = (y0 as i64 - rect.y) as usize;
    let mut out = Surface::filled(rect.width, rect.height, TRANSPARENT)?;
    let pixels = out.pixels_mut();
    for y in 0..overlap.height() {
        let row = overlap.row(y).ok_or(ExploderError::BufferTooSmall {
            needed: y.saturating_mul(overlap.stride()).saturating_add(overlap.width()),
            got: overlap.as_slice().len(),
        })?;
        let start = (dst_y + y) * rect.width + dst_x;
        pixels[start..start + row.len()].copy_from_slice(row);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::{cut_surface, CutRect};
    use crate::image::{Surface, TRANSPARENT};
    use crate::util::ExploderError;

    fn sheet(width: usize, height: usize) -> Surface {
        let data = (0..width * height)
            .map(|i| [i as u8, (i / width) as u8, (i % width) as u8, 255])
            .collect();
        Surface::new(data, width, height).unwrap()
    }

    #[test]
    fn inner_cut_copies_pixels() {
        let src = sheet(8, 6);
        let out = cut_surface(src.view(), CutRect::new(2, 1, 3, 2)).unwrap();
        assert_eq!((out.width(), out.height()), (3, 2));
        assert_eq!(out.get(0, 0), src.get(2, 1));
        assert_eq!(out.get(2, 1), src.get(4, 2));
    }

    #[test]
    fn partial_overlap_is_padded_with_transparency() {
        let src = sheet(4, 4);
        let out = cut_surface(src.view(), CutRect::new(-1, 2, 3, 3)).unwrap();
        assert_eq!((out.width(), out.height()), (3, 3));
        assert_eq!(out.get(0, 0), Some(TRANSPARENT));
        assert_eq!(out.get(1, 0), src.get(0, 2));
        assert_eq!(out.get(2, 1), src.get(1, 3));
        assert_eq!(out.get(1, 2), Some(TRANSPARENT));
    }

    #[test]
    fn disjoint_cut_fails() {
        let src = sheet(4, 4);
        let err = cut_surface(src.view(), CutRect::new(4, 0, 2, 2)).unwrap_err();
        assert_eq!(
            err,
            ExploderError::DisjointCut {
                x: 4,
                y: 0,
                width: 2,
                height: 2,
                img_width: 4,
                img_height: 4,
            }
        );
        assert!(cut_surface(src.view(), CutRect::new(-2, -2, 2, 2)).is_err());
    }

    #[test]
    fn empty_cut_fails() {
        let src = sheet(4, 4);
        let err = cut_surface(src.view(), CutRect::new(0, 0, 0, 2)).unwrap_err();
        assert_eq!(
            err,
            ExploderError::InvalidDimensions {
                width: 0,
                height: 2
            }
        );
    }
}
