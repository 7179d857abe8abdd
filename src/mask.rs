//! Named masks loaded from `[mask]` entries.
//!
//! A mask is a template image whose size gives the size of every sub-image
//! cut with it, plus a shift applied to the declared part position. Mask
//! names are global for a run: declaring one name with two different image
//! files is an error, while repeating an identical declaration is a no-op.

use crate::config::Config;
use crate::image::io::load_surface;
use crate::image::Surface;
use crate::settings::CutterSettings;
use crate::trace::{trace_event, trace_span};
use crate::util::list::parse_int_pair;
use crate::util::{ExploderError, ExploderResult};
use indexmap::IndexMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Source of mask images.
pub trait SurfaceLoader {
    /// Loads the image stored at `path`.
    fn load(&self, path: &Path) -> ExploderResult<Surface>;
}

/// Loads mask images from disk with the `image` crate.
#[derive(Copy, Clone, Debug, Default)]
pub struct FileLoader;

impl SurfaceLoader for FileLoader {
    fn load(&self, path: &Path) -> ExploderResult<Surface> {
        load_surface(path)
    }
}

impl<F> SurfaceLoader for F
where
    F: Fn(&Path) -> ExploderResult<Surface>,
{
    fn load(&self, path: &Path) -> ExploderResult<Surface> {
        self(path)
    }
}

/// A named template image with a position shift.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    pub name: String,
    /// Image path after resolution against the mask directory.
    pub filename: PathBuf,
    pub image: Surface,
    pub shift_x: i64,
    pub shift_y: i64,
}

/// Masks of one cutting run, keyed by name.
pub struct MaskRegistry {
    settings: CutterSettings,
    loader: Box<dyn SurfaceLoader>,
    masks: IndexMap<String, Arc<Mask>>,
}

impl MaskRegistry {
    /// Creates an empty registry that reads mask images from disk.
    pub fn new(settings: CutterSettings) -> Self {
        Self::with_loader(settings, FileLoader)
    }

    /// Creates an empty registry with a custom image source.
    pub fn with_loader(settings: CutterSettings, loader: impl SurfaceLoader + 'static) -> Self {
        Self {
            settings,
            loader: Box::new(loader),
            masks: IndexMap::new(),
        }
    }

    /// Adds every `[mask]` child of `conf` and returns how many were new.
    ///
    /// Stops at the first invalid entry; masks added before it stay registered.
    pub fn load_masks(&mut self, conf: &Config) -> ExploderResult<usize> {
        let _guard = trace_span!("load_masks").entered();
        let mut added = 0;
        for entry in conf.children("mask") {
            if self.add_mask(entry)? {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Returns `false` when an identical declaration was already registered.
    fn add_mask(&mut self, entry: &Config) -> ExploderResult<bool> {
        let name = entry.get("name");
        if name.is_empty() {
            return Err(ExploderError::UnnamedMask);
        }
        let image = entry.get("image");
        if image.is_empty() {
            return Err(ExploderError::MissingMaskImage {
                name: name.to_string(),
            });
        }
        let filename = self.settings.mask_dir.join(image);

        let (shift_x, shift_y) = match entry.get("shift") {
            "" => (0, 0),
            shift => parse_int_pair(shift).ok_or_else(|| ExploderError::InvalidShift {
                value: shift.to_string(),
            })?,
        };

        let added = match self.masks.get(name) {
            Some(existing) if existing.filename != filename => {
                return Err(ExploderError::MaskConflict {
                    name: name.to_string(),
                    first: existing.filename.display().to_string(),
                    second: filename.display().to_string(),
                });
            }
            Some(_) => false,
            None => {
                let image = self.loader.load(&filename)?;
                let mask = Mask {
                    name: name.to_string(),
                    filename: filename.clone(),
                    image,
                    shift_x,
                    shift_y,
                };
                self.masks.insert(name.to_string(), Arc::new(mask));
                if self.settings.verbose {
                    trace_event!("mask_added", mask = name, shift_x = shift_x, shift_y = shift_y);
                }
                true
            }
        };

        let loaded = self
            .masks
            .get(name)
            .is_some_and(|mask| mask.image.width() > 0 && mask.image.height() > 0);
        if !loaded {
            return Err(ExploderError::ImageIo {
                path: filename.display().to_string(),
                reason: "mask image is empty".into(),
            });
        }
        Ok(added)
    }

    /// Returns the mask registered as `name`.
    pub fn lookup(&self, name: &str) -> ExploderResult<&Arc<Mask>> {
        self.get(name).ok_or_else(|| ExploderError::MissingMask {
            name: name.to_string(),
        })
    }

    /// Returns the mask registered as `name`, if any.
    pub fn get(&self, name: &str) -> Option<&Arc<Mask>> {
        self.masks.get(name)
    }

    /// Number of registered masks.
    pub fn len(&self) -> usize {
        self.masks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masks.is_empty()
    }

    /// Iterates masks in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Mask> {
        self.masks.values().map(|mask| mask.as_ref())
    }

    /// Settings this registry was created with.
    pub fn settings(&self) -> &CutterSettings {
        &self.settings
    }
}
