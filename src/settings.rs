//! Run-wide settings shared by the mask registry and the cutter.

use std::path::{Path, PathBuf};

/// Directory of mask images relative to a game data root.
pub const MASK_SUBDIR: &str = "images/tools/exploder";
/// Directory of cutting configurations relative to a game data root.
pub const EXPLODER_SUBDIR: &str = "data/tools/exploder";

/// Locations and diagnostics for one cutting run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CutterSettings {
    /// Directory that `image=` attributes of `[mask]` entries are resolved against.
    pub mask_dir: PathBuf,
    /// Directory holding the `.cfg` file for each sprite sheet.
    pub exploder_dir: PathBuf,
    /// Emit a tracing event for every mask added and sub-image extracted.
    pub verbose: bool,
}

impl Default for CutterSettings {
    fn default() -> Self {
        Self::from_data_dir(".")
    }
}

impl CutterSettings {
    /// Settings for the standard layout under a game data root.
    pub fn from_data_dir(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref();
        Self {
            mask_dir: data_dir.join(MASK_SUBDIR),
            exploder_dir: data_dir.join(EXPLODER_SUBDIR),
            verbose: false,
        }
    }

    pub fn with_mask_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.mask_dir = dir.into();
        self
    }

    pub fn with_exploder_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.exploder_dir = dir.into();
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
