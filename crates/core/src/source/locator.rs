use super::archive::ArchiveLocator;
use super::directory::DirectoryLocator;
use crate::error::Result;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;
use weaver_api::{ApiResult, ClassFileLocator};

/// Asks each locator in order; the first one that knows the class wins.
pub struct CompoundClassFileLocator {
    locators: Vec<Arc<dyn ClassFileLocator>>,
}

impl CompoundClassFileLocator {
    pub fn new(locators: Vec<Arc<dyn ClassFileLocator>>) -> Self {
        Self { locators }
    }

    pub fn len(&self) -> usize {
        self.locators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locators.is_empty()
    }
}

impl ClassFileLocator for CompoundClassFileLocator {
    fn locate(&self, class_name: &str) -> ApiResult<Option<Vec<u8>>> {
        for locator in &self.locators {
            if let Some(bytes) = locator.locate(class_name)? {
                return Ok(Some(bytes));
            }
        }
        Ok(None)
    }

    fn describe(&self) -> String {
        format!("compound of {} locators", self.locators.len())
    }
}

/// Builds locators over classpath files.
pub struct ClassFileLocatorMaker;

impl ClassFileLocatorMaker {
    /// Locator for one classpath element: a directory or an archive.
    pub fn for_path(path: &Path) -> Result<Arc<dyn ClassFileLocator>> {
        if path.is_dir() {
            Ok(Arc::new(DirectoryLocator::new(path.to_path_buf())))
        } else {
            Ok(Arc::new(ArchiveLocator::open(path)?))
        }
    }

    /// Compound locator over a whole classpath, in order.
    ///
    /// Entries that do not exist are skipped, like a class loader ignores missing URLs; an entry
    /// that exists but cannot be read is an error.
    pub fn make<P: AsRef<Path>>(
        files: impl IntoIterator<Item = P>,
    ) -> Result<CompoundClassFileLocator> {
        let mut locators = Vec::new();
        for file in files {
            let path = file.as_ref();
            if !path.exists() {
                debug!("Skipping missing classpath entry {}", path.display());
                continue;
            }
            locators.push(Self::for_path(path)?);
        }
        Ok(CompoundClassFileLocator::new(locators))
    }
}
