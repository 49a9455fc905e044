//! Filename derivation, source selection and the batch renamer.

mod batch;
pub mod filename;
pub mod selection;

pub use batch::{BatchObserver, BatchRenamer, RenameOptions};
pub use filename::{sanitize_filename, FilenameBuilder};
pub use selection::{classify, Selection};

use crate::error::RenameError;

/// Result type for rename operations.
pub type Result<T> = std::result::Result<T, RenameError>;
