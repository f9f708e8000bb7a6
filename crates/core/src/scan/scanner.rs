//! Classpath scanner that builds a [`TypeHierarchy`] from directories and archives.

use super::classfile::parse_class_header;
use super::hierarchy::TypeHierarchy;
use crate::error::Result;
use crate::source::{ArchiveOrigin, ClassOrigin, DirectoryOrigin};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Result of a classpath scan
#[derive(Debug, Default)]
pub struct ScanResult {
    pub hierarchy: TypeHierarchy,
    /// Number of files scanned successfully
    pub scanned_files: usize,
    /// Files that could not be read, with the reason
    pub failed_files: Vec<(PathBuf, String)>,
    /// Class entries whose header could not be parsed
    pub skipped_classes: usize,
    /// Time taken for the scan
    pub duration: std::time::Duration,
}

/// Per-file counts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FileScan {
    pub classes: usize,
    pub skipped: usize,
}

pub struct ClasspathScanner;

impl ClasspathScanner {
    fn open(path: &Path) -> Result<Box<dyn ClassOrigin>> {
        if path.is_dir() {
            Ok(Box::new(DirectoryOrigin::open(path)?))
        } else {
            Ok(Box::new(ArchiveOrigin::open(path)?))
        }
    }

    /// Scans one directory or archive into `hierarchy`.
    ///
    /// An unreadable container is an error and contributes nothing, even classes read before
    /// the failure. A single unparsable class entry is skipped.
    pub fn scan_file(path: &Path, hierarchy: &mut TypeHierarchy) -> Result<FileScan> {
        let origin = Self::open(path)?;
        let mut counts = FileScan::default();
        let mut parsed = Vec::new();

        for entry in origin.into_entries() {
            let entry = entry?;
            let bytes = entry.read()?;
            match parse_class_header(&bytes, &entry.name) {
                Ok(description) => parsed.push(description),
                Err(e) => {
                    debug!("Skipping class in {}: {}", path.display(), e);
                    counts.skipped += 1;
                }
            }
        }

        counts.classes = parsed.len();
        for description in parsed {
            hierarchy.insert(description);
        }
        Ok(counts)
    }

    /// Scans every file, logging and skipping the ones that cannot be read.
    pub fn scan<P: AsRef<Path>>(files: impl IntoIterator<Item = P>) -> ScanResult {
        let start = std::time::Instant::now();
        let mut result = ScanResult::default();

        for file in files {
            let path = file.as_ref();
            match Self::scan_file(path, &mut result.hierarchy) {
                Ok(counts) => {
                    result.scanned_files += 1;
                    result.skipped_classes += counts.skipped;
                }
                Err(e) => {
                    warn!("Failed to scan {}: {}", path.display(), e);
                    result.failed_files.push((path.to_path_buf(), e.to_string()));
                }
            }
        }

        result.duration = start.elapsed();
        info!(
            "Classpath scan complete: {} files, {} failed, {} classes in {:?}",
            result.scanned_files,
            result.failed_files.len(),
            result.hierarchy.len(),
            result.duration
        );
        result
    }
}
