//! Plugin discovery: which classes are instrumentation plugins for this variant.
//!
//! Two groups are kept apart all the way to the report:
//! - local plugins, declared by name in the build configuration and trusted as-is;
//! - dependency plugins, declared as entry points in a dependency's metadata resource and
//!   expanded to every class of the scanned dependencies that extends them.

pub mod finder;
pub mod metadata;
pub mod properties;

pub use finder::{PluginDiscoveryService, PluginsFinder};
pub use metadata::PluginMetadataRecord;
pub use properties::Properties;

use serde::Serialize;
use std::collections::BTreeSet;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PluginOrigin {
    Local,
    Dependency,
}

/// A discovered plugin class, prior to instantiation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PluginDescriptor {
    pub class_name: String,
    pub origin: PluginOrigin,
}

impl PluginDescriptor {
    pub fn local(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            origin: PluginOrigin::Local,
        }
    }

    pub fn dependency(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            origin: PluginOrigin::Dependency,
        }
    }
}

/// Outcome of a discovery pass.
#[derive(Debug, Default, Clone, Serialize)]
pub struct DiscoveredPlugins {
    pub local: BTreeSet<String>,
    pub dependencies: BTreeSet<String>,
    /// Dependency files excluded because they could not be read
    pub skipped_files: Vec<PathBuf>,
}

impl DiscoveredPlugins {
    /// Union of both groups; a name present in both appears once.
    pub fn class_names(&self) -> BTreeSet<String> {
        self.local.union(&self.dependencies).cloned().collect()
    }

    /// Names declared locally and also shipped by a dependency.
    pub fn overlapping(&self) -> BTreeSet<&str> {
        self.local
            .intersection(&self.dependencies)
            .map(String::as_str)
            .collect()
    }

    /// One descriptor per distinct name, local first; an overlapping name stays local.
    pub fn descriptors(&self) -> Vec<PluginDescriptor> {
        self.local
            .iter()
            .map(PluginDescriptor::local)
            .chain(
                self.dependencies
                    .iter()
                    .filter(|name| !self.local.contains(*name))
                    .map(PluginDescriptor::dependency),
            )
            .collect()
    }

    pub fn len(&self) -> usize {
        self.class_names().len()
    }

    pub fn is_empty(&self) -> bool {
        self.local.is_empty() && self.dependencies.is_empty()
    }
}
