//! Low-level building blocks for custom cutting pipelines.
//!
//! These expose the attribute-list helpers, the comment preprocessor and the
//! raw rectangle cut used by [`Cutter`](crate::Cutter). Most users should
//! prefer the top-level `Cutter` and `MaskRegistry` types.

pub use crate::config::preprocess;
pub use crate::image::cut::cut_surface;
pub use crate::util::list::{parse_int_pair, split_list};
