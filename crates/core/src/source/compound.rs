use super::ClassOrigin;
use super::archive::ArchiveOrigin;
use super::directory::FoldersOrigin;
use super::locator::CompoundClassFileLocator;
use crate::error::Result;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;
use weaver_api::{ApiResult, ClassEntries, ClassEntry, ClassFileLocator, EngineSource};

/// Several class origins presented as one read-once source.
///
/// Entries are the concatenation of every origin's entries in construction order; classes
/// present in more than one origin are yielded once per origin. The locator answers with the
/// first origin that has the class.
pub struct CompoundSource {
    origins: Vec<Box<dyn ClassOrigin>>,
    locator: Arc<CompoundClassFileLocator>,
}

impl CompoundSource {
    pub fn new(origins: Vec<Box<dyn ClassOrigin>>) -> Self {
        let locator = Arc::new(CompoundClassFileLocator::new(
            origins.iter().map(|o| o.class_file_locator()).collect(),
        ));
        Self { origins, locator }
    }

    /// One origin for all classes directories, then one origin per archive.
    ///
    /// Fails as a whole if any container cannot be opened.
    pub fn from_scope<D, J>(directories: &[D], archives: &[J]) -> Result<Self>
    where
        D: AsRef<Path>,
        J: AsRef<Path>,
    {
        let mut origins: Vec<Box<dyn ClassOrigin>> = Vec::with_capacity(archives.len() + 1);
        origins.push(Box::new(FoldersOrigin::open(directories)?));
        for archive in archives {
            origins.push(Box::new(ArchiveOrigin::open(archive.as_ref())?));
        }
        debug!("Compound source over {} origins", origins.len());
        Ok(Self::new(origins))
    }

    /// The source is its own readable handle.
    pub fn read(&self) -> &Self {
        self
    }

    /// Compound sources never carry a manifest.
    pub fn manifest(&self) -> Option<&[u8]> {
        None
    }

    pub fn locate(&self, class_name: &str) -> ApiResult<Option<Vec<u8>>> {
        self.locator.locate(class_name)
    }

    pub fn origin_descriptions(&self) -> Vec<String> {
        self.origins.iter().map(|o| o.describe()).collect()
    }
}

impl IntoIterator for CompoundSource {
    type Item = ApiResult<ClassEntry>;
    type IntoIter = ClassEntries;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.origins.into_iter().flat_map(|o| o.into_entries()))
    }
}

impl EngineSource for CompoundSource {
    fn manifest(&self) -> Option<&[u8]> {
        CompoundSource::manifest(self)
    }

    fn class_file_locator(&self) -> Arc<dyn ClassFileLocator> {
        self.locator.clone()
    }

    fn into_entries(self: Box<Self>) -> ClassEntries {
        (*self).into_iter()
    }
}
