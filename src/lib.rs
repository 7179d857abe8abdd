//! Exploder cuts sprite sheets into named sub-images.
//!
//! Masks (template image plus shift) and parts (mask name plus position) are
//! declared in a WML-style configuration file that sits next to the sheet
//! under a naming convention. The [`Cutter`] loads the masks, then extracts
//! one independent RGBA sub-image per part.
//!
//! ```no_run
//! use exploder::{Cutter, CutterSettings};
//!
//! let settings = CutterSettings::from_data_dir("/usr/share/game").with_verbose(true);
//! let mut cutter = Cutter::new(settings);
//! for (name, part) in cutter.cut_file("terrain_grass.png")? {
//!     println!("{name} at ({}, {})", part.x, part.y);
//! }
//! # Ok::<(), exploder::ExploderError>(())
//! ```

pub mod config;
pub mod cutter;
pub mod image;
pub mod lowlevel;
pub mod mask;
pub mod settings;
mod trace;
pub mod util;

pub use crate::config::Config;
pub use crate::cutter::{resolve_configuration_path, Cutter, PositionedSubImage, SurfaceMap};
pub use crate::image::{CutRect, ImageView, Rgba, Surface};
pub use crate::mask::{FileLoader, Mask, MaskRegistry, SurfaceLoader};
pub use crate::settings::CutterSettings;
pub use crate::util::{ErrorKind, ExploderError, ExploderResult};

pub use crate::image::io;
