use super::ClassOrigin;
use super::locator::CompoundClassFileLocator;
use crate::error::{Result, WeaveError};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use walkdir::WalkDir;
use weaver_api::models::class_name::{binary_name_of_resource, resource_name};
use weaver_api::{ApiError, ApiResult, ClassEntries, ClassEntry, ClassFileLocator};

/// A classes directory, walked recursively in file-name order.
#[derive(Debug)]
pub struct DirectoryOrigin {
    root: PathBuf,
}

impl DirectoryOrigin {
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let metadata = std::fs::metadata(&root).map_err(|e| WeaveError::io(&root, e))?;
        if !metadata.is_dir() {
            return Err(WeaveError::io(
                &root,
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a directory"),
            ));
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Binary class name of `path` relative to `root`, `None` for non-class files.
fn class_name_in(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let resource = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    binary_name_of_resource(&resource)
}

impl ClassOrigin for DirectoryOrigin {
    fn describe(&self) -> String {
        format!("directory {}", self.root.display())
    }

    fn class_file_locator(&self) -> Arc<dyn ClassFileLocator> {
        Arc::new(DirectoryLocator::new(self.root.clone()))
    }

    fn into_entries(self: Box<Self>) -> ClassEntries {
        let root = self.root;
        Box::new(
            WalkDir::new(root.clone())
                .sort_by_file_name()
                .into_iter()
                .filter_map(move |entry| match entry {
                    Ok(entry) => {
                        if !entry.file_type().is_file() {
                            return None;
                        }
                        let name = class_name_in(&root, entry.path())?;
                        Some(Ok(ClassEntry::from_file(name, entry.into_path())))
                    }
                    Err(e) => {
                        let path = e
                            .path()
                            .map(Path::to_path_buf)
                            .unwrap_or_else(|| root.clone());
                        Some(Err(ApiError::io(path.display(), e.into())))
                    }
                }),
        )
    }
}

/// Several classes directories presented as one origin.
pub struct FoldersOrigin {
    folders: Vec<DirectoryOrigin>,
}

impl FoldersOrigin {
    pub fn open<P: AsRef<Path>>(folders: impl IntoIterator<Item = P>) -> Result<Self> {
        let folders = folders
            .into_iter()
            .map(|p| DirectoryOrigin::open(p.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { folders })
    }

    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }
}

impl ClassOrigin for FoldersOrigin {
    fn describe(&self) -> String {
        let roots: Vec<_> = self
            .folders
            .iter()
            .map(|f| f.root.display().to_string())
            .collect();
        format!("directories [{}]", roots.join(", "))
    }

    fn class_file_locator(&self) -> Arc<dyn ClassFileLocator> {
        Arc::new(CompoundClassFileLocator::new(
            self.folders.iter().map(|f| f.class_file_locator()).collect(),
        ))
    }

    fn into_entries(self: Box<Self>) -> ClassEntries {
        Box::new(
            self.folders
                .into_iter()
                .flat_map(|folder| Box::new(folder).into_entries()),
        )
    }
}

/// Looks classes up as `<root>/<package path>/<Name>.class`.
#[derive(Debug, Clone)]
pub struct DirectoryLocator {
    root: PathBuf,
}

impl DirectoryLocator {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl ClassFileLocator for DirectoryLocator {
    fn locate(&self, class_name: &str) -> ApiResult<Option<Vec<u8>>> {
        let path = self.root.join(resource_name(class_name));
        if !path.is_file() {
            return Ok(None);
        }
        std::fs::read(&path)
            .map(Some)
            .map_err(|e| ApiError::io(path.display(), e))
    }

    fn describe(&self) -> String {
        format!("directory {}", self.root.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_class(root: &Path, resource: &str, content: &[u8]) {
        let path = root.join(resource);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_directory_entries_are_sorted_and_filtered() {
        let temp = tempfile::tempdir().unwrap();
        write_class(temp.path(), "com/example/B.class", b"b");
        write_class(temp.path(), "com/example/A.class", b"a");
        write_class(temp.path(), "com/example/notes.txt", b"skip");

        let origin = Box::new(DirectoryOrigin::open(temp.path()).unwrap());
        let entries: Vec<_> = origin.into_entries().map(|e| e.unwrap()).collect();

        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["com.example.A", "com.example.B"]);
        assert_eq!(entries[1].read().unwrap(), b"b");
    }

    #[test]
    fn test_missing_directory_fails() {
        let temp = tempfile::tempdir().unwrap();
        let err = DirectoryOrigin::open(temp.path().join("missing")).unwrap_err();
        assert!(matches!(err, WeaveError::Io { .. }));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_folders_origin_concatenates_in_order() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        write_class(first.path(), "p/Z.class", b"z1");
        write_class(second.path(), "p/A.class", b"a2");
        write_class(second.path(), "p/Z.class", b"z2");

        let origin = FoldersOrigin::open([first.path(), second.path()]).unwrap();
        let locator = origin.class_file_locator();
        let names: Vec<_> = Box::new(origin)
            .into_entries()
            .map(|e| e.unwrap().name)
            .collect();

        assert_eq!(names, vec!["p.Z", "p.A", "p.Z"]);
        assert_eq!(locator.locate("p.Z").unwrap(), Some(b"z1".to_vec()));
        assert_eq!(locator.locate("p.A").unwrap(), Some(b"a2".to_vec()));
        assert_eq!(locator.locate("p.Missing").unwrap(), None);
    }
}
