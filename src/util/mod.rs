//! Shared utility helpers.

pub mod error;
pub(crate) mod list;

pub use error::{ErrorKind, ExploderError, ExploderResult};
