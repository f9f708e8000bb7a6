//! The plugin metadata resource a library ships to declare its plugin classes.
//!
//! Location: `META-INF/weaver-plugins/plugins.properties`, single key `plugin-classes` holding
//! a comma-joined list of binary class names.

use super::properties::Properties;
use crate::constants::{PLUGINS_PROPERTIES_CLASSES_KEY, plugins_metadata_path};
use crate::error::{Result, WeaveError};
use crate::source::ArchiveLocator;
use std::collections::BTreeSet;
use std::path::Path;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PluginMetadataRecord {
    pub class_names: BTreeSet<String>,
}

impl PluginMetadataRecord {
    pub fn new<S: Into<String>>(class_names: impl IntoIterator<Item = S>) -> Self {
        Self {
            class_names: class_names.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses the resource text. A missing key yields an empty record.
    pub fn parse(text: &str) -> Self {
        let properties = Properties::parse(text);
        let class_names = properties
            .get(PLUGINS_PROPERTIES_CLASSES_KEY)
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        Self { class_names }
    }

    pub fn to_properties_string(&self) -> String {
        let mut properties = Properties::new();
        let joined = self
            .class_names
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(",");
        properties.set(PLUGINS_PROPERTIES_CLASSES_KEY, joined);
        properties.store(None)
    }

    /// Reads the resource from a dependency (archive or directory). `Ok(None)` if it has none.
    pub fn read_from(dependency: &Path) -> Result<Option<Self>> {
        let resource = plugins_metadata_path();
        let bytes = if dependency.is_dir() {
            let path = dependency.join(&resource);
            if !path.is_file() {
                return Ok(None);
            }
            std::fs::read(&path).map_err(|e| WeaveError::io(&path, e))?
        } else {
            match ArchiveLocator::open(dependency)?.read_entry(&resource)? {
                Some(bytes) => bytes,
                None => return Ok(None),
            }
        };

        let text = String::from_utf8(bytes).map_err(|e| WeaveError::Metadata {
            path: dependency.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(Some(Self::parse(&text)))
    }
}
