//! Class origins and the compound source built from them.
//!
//! ```text
//! ┌──────────────────────┐
//! │ FoldersOrigin        │─┐
//! │  (classes dirs)      │ │    ┌──────────────────────────────┐
//! └──────────────────────┘ ├───▶│ CompoundSource               │──▶ engine
//! ┌──────────────────────┐ │    │  entries: concatenated       │
//! │ ArchiveOrigin × N    │─┘    │  locator: first match wins   │
//! │  (scope jars)        │      └──────────────────────────────┘
//! └──────────────────────┘
//! ```

pub mod archive;
pub mod compound;
pub mod directory;
pub mod locator;

pub use archive::{ArchiveLocator, ArchiveOrigin};
pub use compound::CompoundSource;
pub use directory::{DirectoryLocator, DirectoryOrigin, FoldersOrigin};
pub use locator::{ClassFileLocatorMaker, CompoundClassFileLocator};

use std::sync::Arc;
use weaver_api::{ClassEntries, ClassFileLocator};

/// One physical container of class files.
pub trait ClassOrigin {
    /// Origin name (for logging/debugging)
    fn describe(&self) -> String;

    /// Locator over this origin's classes, usable independently of iteration.
    fn class_file_locator(&self) -> Arc<dyn ClassFileLocator>;

    /// Lazily yields the origin's class entries; consumes the origin.
    fn into_entries(self: Box<Self>) -> ClassEntries;
}
