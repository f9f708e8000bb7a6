use super::ClassOrigin;
use crate::error::{Result, WeaveError};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use weaver_api::models::class_name::{binary_name_of_resource, resource_name};
use weaver_api::{ApiError, ApiResult, ClassEntries, ClassEntry, ClassFileLocator};
use zip::ZipArchive;
use zip::result::ZipError;

/// Upper bound on the buffer reserved up front from a declared entry size.
const MAX_PREALLOCATION: u64 = 1 << 20;

fn initial_capacity(declared: u64) -> usize {
    declared.min(MAX_PREALLOCATION) as usize
}

fn open_archive(path: &Path) -> Result<ZipArchive<File>> {
    let file = File::open(path).map_err(|e| WeaveError::io(path, e))?;
    ZipArchive::new(file).map_err(|e| WeaveError::archive(path, e))
}

/// A jar (zip) read sequentially, entry by entry.
pub struct ArchiveOrigin {
    path: PathBuf,
    archive: ZipArchive<File>,
}

impl ArchiveOrigin {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let archive = open_archive(&path)?;
        Ok(Self { path, archive })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ClassOrigin for ArchiveOrigin {
    fn describe(&self) -> String {
        format!("archive {}", self.path.display())
    }

    fn class_file_locator(&self) -> Arc<dyn ClassFileLocator> {
        // The origin already opened the archive once; reopening for lookups only fails if the
        // file vanished in between, which then surfaces on the first lookup.
        match ArchiveLocator::open(&self.path) {
            Ok(locator) => Arc::new(locator),
            Err(e) => Arc::new(BrokenLocator {
                path: self.path.clone(),
                reason: e.to_string(),
            }),
        }
    }

    fn into_entries(self: Box<Self>) -> ClassEntries {
        Box::new(ArchiveEntries {
            path: self.path,
            archive: self.archive,
            index: 0,
        })
    }
}

struct ArchiveEntries {
    path: PathBuf,
    archive: ZipArchive<File>,
    index: usize,
}

impl Iterator for ArchiveEntries {
    type Item = ApiResult<ClassEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.archive.len() {
            let index = self.index;
            self.index += 1;

            let mut entry = match self.archive.by_index(index) {
                Ok(entry) => entry,
                Err(e) => {
                    return Some(Err(ApiError::Internal(format!(
                        "entry #{index} of {}: {e}",
                        self.path.display()
                    ))));
                }
            };
            if entry.is_dir() {
                continue;
            }
            let Some(name) = binary_name_of_resource(entry.name()) else {
                continue;
            };

            let mut bytes = Vec::with_capacity(initial_capacity(entry.size()));
            if let Err(e) = entry.read_to_end(&mut bytes) {
                return Some(Err(ApiError::io(
                    format!("{}!{}", self.path.display(), entry.name()),
                    e,
                )));
            }
            return Some(Ok(ClassEntry::from_bytes(name, bytes)));
        }
        None
    }
}

/// Looks classes up by entry name inside one archive.
pub struct ArchiveLocator {
    path: PathBuf,
    archive: Mutex<ZipArchive<File>>,
}

impl ArchiveLocator {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let archive = open_archive(&path)?;
        Ok(Self {
            path,
            archive: Mutex::new(archive),
        })
    }

    /// Raw bytes of any entry (class or resource), `None` when absent.
    pub fn read_entry(&self, entry_name: &str) -> ApiResult<Option<Vec<u8>>> {
        let mut archive = self
            .archive
            .lock()
            .map_err(|_| ApiError::Internal(format!("{} lock poisoned", self.path.display())))?;

        let mut entry = match archive.by_name(entry_name) {
            Ok(entry) => entry,
            Err(ZipError::FileNotFound) => return Ok(None),
            Err(e) => {
                return Err(ApiError::Internal(format!(
                    "{}!{entry_name}: {e}",
                    self.path.display()
                )));
            }
        };

        let mut bytes = Vec::with_capacity(initial_capacity(entry.size()));
        entry
            .read_to_end(&mut bytes)
            .map_err(|e| ApiError::io(format!("{}!{entry_name}", self.path.display()), e))?;
        Ok(Some(bytes))
    }
}

impl ClassFileLocator for ArchiveLocator {
    fn locate(&self, class_name: &str) -> ApiResult<Option<Vec<u8>>> {
        self.read_entry(&resource_name(class_name))
    }

    fn describe(&self) -> String {
        format!("archive {}", self.path.display())
    }
}

struct BrokenLocator {
    path: PathBuf,
    reason: String,
}

impl ClassFileLocator for BrokenLocator {
    fn locate(&self, _class_name: &str) -> ApiResult<Option<Vec<u8>>> {
        Err(ApiError::Internal(format!(
            "archive {} is unavailable: {}",
            self.path.display(),
            self.reason
        )))
    }

    fn describe(&self) -> String {
        format!("unavailable archive {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn create_jar(path: &Path, entries: &[(&str, &[u8])]) {
        let file = File::create(path).unwrap();
        let mut zip = zip::ZipWriter::new(file);
        let options = zip::write::SimpleFileOptions::default();
        for (name, content) in entries {
            zip.start_file(*name, options).unwrap();
            zip.write_all(content).unwrap();
        }
        zip.finish().unwrap();
    }

    #[test]
    fn test_archive_entries_keep_archive_order() {
        let dir = tempfile::tempdir().unwrap();
        let jar = dir.path().join("lib.jar");
        create_jar(
            &jar,
            &[
                ("com/example/Z.class", b"z"),
                ("META-INF/MANIFEST.MF", b"Manifest-Version: 1.0"),
                ("com/example/A.class", b"a"),
            ],
        );

        let origin = Box::new(ArchiveOrigin::open(&jar).unwrap());
        let entries: Vec<_> = origin.into_entries().map(|e| e.unwrap()).collect();

        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["com.example.Z", "com.example.A"]);
        assert_eq!(entries[0].read().unwrap(), b"z");
    }

    #[test]
    fn test_archive_locator() {
        let dir = tempfile::tempdir().unwrap();
        let jar = dir.path().join("lib.jar");
        create_jar(&jar, &[("com/example/A.class", b"a")]);

        let locator = ArchiveLocator::open(&jar).unwrap();
        assert_eq!(locator.locate("com.example.A").unwrap(), Some(b"a".to_vec()));
        assert_eq!(locator.locate("com.example.B").unwrap(), None);
    }

    #[test]
    fn test_corrupt_archive_fails() {
        let dir = tempfile::tempdir().unwrap();
        let jar = dir.path().join("broken.jar");
        std::fs::write(&jar, b"definitely not a zip").unwrap();

        let err = ArchiveOrigin::open(&jar).err().unwrap();
        assert!(matches!(err, WeaveError::Archive { .. }));
        assert!(err.to_string().contains("broken.jar"));
    }

    #[test]
    fn test_declared_size_is_capped() {
        assert_eq!(initial_capacity(512), 512);
        assert_eq!(initial_capacity(u64::MAX), MAX_PREALLOCATION as usize);
    }
}
