use super::classfile::parse_class_header;
use crate::error::{Result, WeaveError};
use crate::source::{ClassFileLocatorMaker, CompoundClassFileLocator};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;
use weaver_api::{ClassFileLocator, TypeDescription};

/// Per-variant view of a classpath, standing in for an isolated class loader.
///
/// Loading a class only reads and parses its header; nothing is executed. Loaded headers are
/// cached inside the scope and released with it, so nothing leaks from one variant to the next.
pub struct ClassScope {
    files: Vec<PathBuf>,
    locator: Arc<CompoundClassFileLocator>,
    loaded: RefCell<HashMap<String, Option<Arc<TypeDescription>>>>,
}

impl ClassScope {
    pub fn create<P: AsRef<Path>>(files: impl IntoIterator<Item = P>) -> Result<Self> {
        let files: Vec<PathBuf> = files.into_iter().map(|f| f.as_ref().to_path_buf()).collect();
        let locator = ClassFileLocatorMaker::make(&files)
            .map_err(|e| WeaveError::ClassLoader(e.to_string()))?;
        debug!(
            "Class scope over {} classpath entries ({} readable)",
            files.len(),
            locator.len()
        );
        Ok(Self {
            files,
            locator: Arc::new(locator),
            loaded: RefCell::new(HashMap::new()),
        })
    }

    /// Finds and parses a class without initializing anything. `Ok(None)` if absent.
    pub fn load_class(&self, class_name: &str) -> Result<Option<Arc<TypeDescription>>> {
        if let Some(cached) = self.loaded.borrow().get(class_name) {
            return Ok(cached.clone());
        }

        let loaded = match self.locator.locate(class_name)? {
            Some(bytes) => {
                let description = parse_class_header(&bytes, class_name)?;
                if description.name != class_name {
                    return Err(WeaveError::ClassFormat {
                        name: class_name.to_string(),
                        reason: format!("file declares class {}", description.name),
                    });
                }
                Some(Arc::new(description))
            }
            None => None,
        };

        self.loaded
            .borrow_mut()
            .insert(class_name.to_string(), loaded.clone());
        Ok(loaded)
    }

    /// Locator over the whole scope.
    pub fn locator(&self) -> Arc<dyn ClassFileLocator> {
        self.locator.clone()
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn loaded_count(&self) -> usize {
        self.loaded.borrow().len()
    }
}

impl Drop for ClassScope {
    fn drop(&mut self) {
        debug!(
            "Releasing class scope ({} classes looked up)",
            self.loaded.get_mut().len()
        );
    }
}
