//! Per-variant dependency buckets and the merge of their resolved files.

use super::{ConfigurationGroup, ConfigurationNamesGenerator, Variant, VariantPathResolver};
use crate::error::Result;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::debug;

/// Resolves a bucket (by name) into files. Implemented by the host's dependency machinery.
pub trait DependencyResolver {
    /// Files of the bucket, or an empty list when the host does not know the bucket.
    fn resolve(&self, configuration_name: &str) -> Result<Vec<PathBuf>>;
}

/// Resolver backed by a precomputed name -> files table.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaticDependencyResolver {
    buckets: BTreeMap<String, Vec<PathBuf>>,
}

impl StaticDependencyResolver {
    pub fn new(buckets: BTreeMap<String, Vec<PathBuf>>) -> Self {
        Self { buckets }
    }

    pub fn with_bucket(mut self, name: impl Into<String>, files: Vec<PathBuf>) -> Self {
        self.buckets.insert(name.into(), files);
        self
    }
}

impl DependencyResolver for StaticDependencyResolver {
    fn resolve(&self, configuration_name: &str) -> Result<Vec<PathBuf>> {
        Ok(self
            .buckets
            .get(configuration_name)
            .cloned()
            .unwrap_or_default())
    }
}

/// The three bucket names of one path element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketNames {
    pub path_element: String,
    pub bucket: String,
    pub consumable: String,
    pub resolvable: String,
}

impl BucketNames {
    /// Names for every element of the variant's top-bottom path, in that order.
    pub fn for_variant(variant: &Variant, group: &ConfigurationGroup) -> Vec<BucketNames> {
        VariantPathResolver::new(variant)
            .top_bottom_path()
            .into_iter()
            .map(|path_element| {
                let generator = ConfigurationNamesGenerator::new(group, &path_element);
                BucketNames {
                    bucket: generator.bucket_name(),
                    consumable: generator.consumable_name(),
                    resolvable: generator.resolvable_name(),
                    path_element,
                }
            })
            .collect()
    }
}

/// Collects the plugin library jars a variant sees through its resolvable buckets.
pub struct LibrariesJarsProvider<'a> {
    resolver: &'a dyn DependencyResolver,
    group: &'a ConfigurationGroup,
    variant: &'a Variant,
}

impl<'a> LibrariesJarsProvider<'a> {
    pub fn new(
        resolver: &'a dyn DependencyResolver,
        group: &'a ConfigurationGroup,
        variant: &'a Variant,
    ) -> Self {
        Self {
            resolver,
            group,
            variant,
        }
    }

    /// Files of every resolvable bucket in top-bottom order; a file seen twice keeps its first
    /// position.
    pub fn libraries_jars(&self) -> Result<IndexSet<PathBuf>> {
        let mut jars = IndexSet::new();
        for names in BucketNames::for_variant(self.variant, self.group) {
            let files = self.resolver.resolve(&names.resolvable)?;
            debug!(
                "Bucket {} resolved {} files for variant {}",
                names.resolvable,
                files.len(),
                self.variant.name()
            );
            jars.extend(files);
        }
        Ok(jars)
    }
}
