//! Cutting a sprite sheet into named sub-images.
//!
//! Each `[part]` entry names a registered mask and places it on the sheet:
//!
//! ```text
//! [part]
//!     name=grass-n
//!     pos=72,0
//! [/part]
//! ```
//!
//! The cut origin is `pos` plus the mask's shift, and the cut size is the
//! mask image's size.

use crate::config::Config;
use crate::image::io::load_surface;
use crate::image::{cut_surface, CutRect, Surface};
use crate::mask::{Mask, MaskRegistry, SurfaceLoader};
use crate::settings::CutterSettings;
use crate::trace::{trace_event, trace_span};
use crate::util::list::parse_int_pair;
use crate::util::{ExploderError, ExploderResult};
use indexmap::IndexMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A sub-image together with where it was cut from.
#[derive(Clone, Debug)]
pub struct PositionedSubImage {
    pub name: String,
    /// Independent copy of the cut region, sized like the mask image.
    pub image: Surface,
    pub mask: Arc<Mask>,
    /// Cut origin on the sheet: declared position plus mask shift.
    pub x: i64,
    pub y: i64,
}

/// Sub-images keyed by part name, in first-insertion order.
///
/// A name that appears in several parts keeps the last cut.
pub type SurfaceMap = IndexMap<String, PositionedSubImage>;

/// Derives the `.cfg` path for a sprite sheet file name.
///
/// The directory is dropped, then everything up to and including the last
/// `_`, then the extension: `terrain_grass.png` maps to
/// `<exploder_dir>/grass.cfg`.
pub fn resolve_configuration_path(
    exploder_dir: impl AsRef<Path>,
    image_filename: impl AsRef<Path>,
) -> PathBuf {
    let fname = image_filename
        .as_ref()
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let tail = match fname.rfind('_') {
        Some(pos) => &fname[pos + 1..],
        None => fname.as_str(),
    };
    let base = match tail.rfind('.') {
        Some(pos) => &tail[..pos],
        None => tail,
    };
    exploder_dir.as_ref().join(format!("{base}.cfg"))
}

/// Loads masks and cuts sheets for one run.
pub struct Cutter {
    settings: CutterSettings,
    masks: MaskRegistry,
}

impl Cutter {
    /// Creates a cutter that reads mask images from disk.
    pub fn new(settings: CutterSettings) -> Self {
        let masks = MaskRegistry::new(settings.clone());
        Self { settings, masks }
    }

    /// Creates a cutter with a custom mask image source.
    pub fn with_loader(settings: CutterSettings, loader: impl SurfaceLoader + 'static) -> Self {
        let masks = MaskRegistry::with_loader(settings.clone(), loader);
        Self { settings, masks }
    }

    pub fn settings(&self) -> &CutterSettings {
        &self.settings
    }

    /// Masks registered so far.
    pub fn masks(&self) -> &MaskRegistry {
        &self.masks
    }

    /// Returns the configuration path for `image_filename`.
    pub fn find_configuration(&self, image_filename: impl AsRef<Path>) -> PathBuf {
        resolve_configuration_path(&self.settings.exploder_dir, image_filename)
    }

    /// Reads, preprocesses and parses the configuration for `image_filename`.
    pub fn load_config(&self, image_filename: impl AsRef<Path>) -> ExploderResult<Config> {
        let image_filename = image_filename.as_ref();
        let path = self.find_configuration(image_filename);
        let text = fs::read_to_string(&path).map_err(|err| ExploderError::io(&path, err))?;
        Config::parse(&text).map_err(|err| ExploderError::ConfigLoad {
            file: image_filename.display().to_string(),
            reason: err.to_string(),
        })
    }

    /// Registers every `[mask]` entry of `conf`; returns how many were new.
    pub fn load_masks(&mut self, conf: &Config) -> ExploderResult<usize> {
        self.masks.load_masks(conf)
    }

    /// Cuts every `[part]` entry of `conf` out of `surface`.
    ///
    /// Fails on the first invalid part; no partial result is returned.
    pub fn cut_surface(&self, surface: &Surface, conf: &Config) -> ExploderResult<SurfaceMap> {
        let _guard = trace_span!("cut_surface", parts = conf.child_count("part")).entered();
        let mut res = SurfaceMap::new();
        for part in conf.children("part") {
            self.add_sub_image(surface, &mut res, part)?;
        }
        Ok(res)
    }

    /// Runs the whole pipeline for a sheet file: configuration, masks, cut.
    pub fn cut_file(&mut self, sheet: impl AsRef<Path>) -> ExploderResult<SurfaceMap> {
        let sheet = sheet.as_ref();
        let conf = self.load_config(sheet)?;
        self.load_masks(&conf)?;
        let surface = load_surface(sheet)?;
        self.cut_surface(&surface, &conf)
    }

    fn add_sub_image(
        &self,
        surface: &Surface,
        map: &mut SurfaceMap,
        part: &Config,
    ) -> ExploderResult<()> {
        let name = part.get("name");
        if name.is_empty() {
            return Err(ExploderError::UnnamedPart);
        }
        let mask = self.masks.lookup(name)?;

        let pos = part.get("pos");
        let invalid = || ExploderError::InvalidPosition {
            value: pos.to_string(),
        };
        let (x, y) = parse_int_pair(pos).ok_or_else(invalid)?;

        let rect = CutRect::new(
            x.checked_add(mask.shift_x).ok_or_else(invalid)?,
            y.checked_add(mask.shift_y).ok_or_else(invalid)?,
            mask.image.width(),
            mask.image.height(),
        );
        let image =
            cut_surface(surface.view(), rect).map_err(|err| ExploderError::CutFailed {
                name: name.to_string(),
                reason: err.to_string(),
            })?;

        map.insert(
            name.to_string(),
            PositionedSubImage {
                name: name.to_string(),
                image,
                mask: Arc::clone(mask),
                x: rect.x,
                y: rect.y,
            },
        );

        if self.settings.verbose {
            trace_event!("sub_image_extracted", part = name, x = x, y = y);
        }
        Ok(())
    }
}
