//! The read-once source handed to an instrumentation engine.

use crate::error::{ApiError, ApiResult};
use crate::locator::ClassFileLocator;
use std::path::PathBuf;
use std::sync::Arc;

/// Where the bytes of an entry live.
#[derive(Debug, Clone)]
pub enum EntryContent {
    /// A class file on disk, read when asked for
    File(PathBuf),
    /// Bytes already pulled out of a sequentially read container
    Bytes(Vec<u8>),
}

/// One class file yielded by a source.
#[derive(Debug, Clone)]
pub struct ClassEntry {
    /// Binary name, e.g. `com.example.Foo`
    pub name: String,
    pub content: EntryContent,
}

impl ClassEntry {
    pub fn from_file(name: impl Into<String>, path: PathBuf) -> Self {
        Self {
            name: name.into(),
            content: EntryContent::File(path),
        }
    }

    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content: EntryContent::Bytes(bytes),
        }
    }

    /// Read the class file content.
    pub fn read(&self) -> ApiResult<Vec<u8>> {
        match &self.content {
            EntryContent::File(path) => {
                std::fs::read(path).map_err(|e| ApiError::io(path.display(), e))
            }
            EntryContent::Bytes(bytes) => Ok(bytes.clone()),
        }
    }

    /// Consume the entry and return its content without copying in-memory bytes.
    pub fn into_bytes(self) -> ApiResult<Vec<u8>> {
        match self.content {
            EntryContent::File(path) => {
                std::fs::read(&path).map_err(|e| ApiError::io(path.display(), e))
            }
            EntryContent::Bytes(bytes) => Ok(bytes),
        }
    }
}

/// Forward-only stream of class entries.
pub type ClassEntries = Box<dyn Iterator<Item = ApiResult<ClassEntry>>>;

/// A source of classes for the engine.
///
/// Consuming the entries takes the source by value, so a source is iterated at most once.
/// Grab the locator first if it is needed while iterating.
pub trait EngineSource {
    /// Raw manifest bytes, if the source has one.
    fn manifest(&self) -> Option<&[u8]>;

    /// Unified locator over every class the source contains.
    fn class_file_locator(&self) -> Arc<dyn ClassFileLocator>;

    fn into_entries(self: Box<Self>) -> ClassEntries;
}
