//! Producer side: the metadata a plugin library ships so consumers can find its plugins.

use crate::constants::{PLUGIN_CAPABILITY_CLASS, PLUGINS_METADATA_FILE_NAME};
use crate::discovery::{PluginMetadataRecord, PluginsFinder};
use crate::error::{Result, WeaveError};
use crate::scan::ClasspathScanner;
use crate::transform::DirectoryCleaner;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes `plugins.properties` for a library into a dedicated output directory.
pub struct LibraryPropertiesWriter {
    output_dir: PathBuf,
}

impl LibraryPropertiesWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Every class under `class_dirs` that extends or implements the plugin capability type.
    pub fn find_plugin_class_names<P: AsRef<Path>>(class_dirs: &[P]) -> BTreeSet<String> {
        let scan = ClasspathScanner::scan(class_dirs);
        PluginsFinder::new(&scan.hierarchy).find_built_plugin_class_names(PLUGIN_CAPABILITY_CLASS)
    }

    /// Cleans the output directory and writes the record. Returns the written file.
    pub fn write(&self, plugin_names: &BTreeSet<String>) -> Result<PathBuf> {
        DirectoryCleaner::clean_directory(&self.output_dir)?;
        let record = PluginMetadataRecord::new(plugin_names.iter().cloned());
        let file = self.output_dir.join(PLUGINS_METADATA_FILE_NAME);
        fs::write(&file, record.to_properties_string()).map_err(|e| WeaveError::io(&file, e))?;
        debug!("Plugins found: {:?}", plugin_names);
        Ok(file)
    }
}
