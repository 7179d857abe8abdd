//! Error types for exploder.

use thiserror::Error;

/// Result alias for exploder operations.
pub type ExploderResult<T> = std::result::Result<T, ExploderError>;

/// Broad category of an [`ExploderError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or missing configuration, name conflicts, missing masks.
    Configuration,
    /// Files that cannot be read, decoded or written.
    Io,
    /// A cut that produced no image.
    Extraction,
}

/// Errors that can occur while loading masks or cutting a sheet.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ExploderError {
    /// A configuration line could not be parsed.
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },
    /// The configuration for an image could not be loaded.
    #[error("unable to load the configuration for the file {file}: {reason}")]
    ConfigLoad { file: String, reason: String },
    /// A `[mask]` entry has no name.
    #[error("un-named mask")]
    UnnamedMask,
    /// A `[mask]` entry has no image.
    #[error("missing image for mask {name}")]
    MissingMaskImage { name: String },
    /// A `shift` attribute is not a pair of integers.
    #[error("invalid shift {value}")]
    InvalidShift { value: String },
    /// The same mask name was declared with two different files.
    #[error("mask {name} corresponds to two different files: {first} and {second}")]
    MaskConflict {
        name: String,
        first: String,
        second: String,
    },
    /// A `[part]` entry has no name.
    #[error("un-named sub-image")]
    UnnamedPart,
    /// No mask is registered under the requested name.
    #[error("unable to find mask corresponding to {name}")]
    MissingMask { name: String },
    /// A `pos` attribute is not a pair of integers.
    #[error("invalid position {value}")]
    InvalidPosition { value: String },
    /// Reading or writing a file failed.
    #[error("{path}: {reason}")]
    Io { path: String, reason: String },
    /// Decoding or encoding an image failed.
    #[error("unable to load image {path}: {reason}")]
    ImageIo { path: String, reason: String },
    /// Cutting a sub-image out of the sheet failed.
    #[error("unable to cut sub-image {name}: {reason}")]
    CutFailed { name: String, reason: String },
    /// A cut rectangle does not overlap the source image.
    #[error(
        "cut {width}x{height} at ({x}, {y}) does not overlap the {img_width}x{img_height} image"
    )]
    DisjointCut {
        x: i64,
        y: i64,
        width: usize,
        height: usize,
        img_width: usize,
        img_height: usize,
    },
    /// Image dimensions are zero or overflow.
    #[error("invalid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// The stride is smaller than the width.
    #[error("invalid stride {stride} for width {width}")]
    InvalidStride { width: usize, stride: usize },
    /// The backing buffer is shorter than the declared geometry.
    #[error("buffer too small: needed {needed}, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// A region of interest does not fit inside the image.
    #[error(
        "roi {width}x{height} at ({x}, {y}) is outside the {img_width}x{img_height} image"
    )]
    RoiOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        img_width: usize,
        img_height: usize,
    },
}

impl ExploderError {
    /// Returns the category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io { .. } | Self::ImageIo { .. } => ErrorKind::Io,
            Self::CutFailed { .. } => ErrorKind::Extraction,
            _ => ErrorKind::Configuration,
        }
    }

    pub(crate) fn io(path: impl AsRef<std::path::Path>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().display().to_string(),
            reason: err.to_string(),
        }
    }
}
