use super::DiscoveredPlugins;
use super::metadata::PluginMetadataRecord;
use crate::scan::{ClasspathScanner, TypeHierarchy};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Answers plugin questions over a scanned type hierarchy.
pub struct PluginsFinder<'a> {
    hierarchy: &'a TypeHierarchy,
}

impl<'a> PluginsFinder<'a> {
    pub fn new(hierarchy: &'a TypeHierarchy) -> Self {
        Self { hierarchy }
    }

    /// Every scanned class extending or implementing `capability`, abstract ones included.
    pub fn find_built_plugin_class_names(&self, capability: &str) -> BTreeSet<String> {
        self.hierarchy.all_subtypes(capability)
    }

    /// Each entry point plus everything in the hierarchy that extends it.
    ///
    /// Entry points missing from the hierarchy are kept: a declared plugin that cannot be found
    /// fails later, when its factory is built.
    pub fn expand_entry_points<'e>(
        &self,
        entry_points: impl IntoIterator<Item = &'e str>,
    ) -> BTreeSet<String> {
        let mut expanded = BTreeSet::new();
        for entry_point in entry_points {
            if !self.hierarchy.contains(entry_point) {
                debug!("Declared plugin {} is not part of the scanned classes", entry_point);
            }
            expanded.insert(entry_point.to_string());
            expanded.extend(self.hierarchy.all_subtypes(entry_point));
        }
        expanded
    }
}

/// Finds the plugins of one variant.
pub struct PluginDiscoveryService;

impl PluginDiscoveryService {
    /// Local names are taken as-is. External files are searched for metadata resources whose
    /// entry points are expanded over a type scan of the same files. A dependency that cannot
    /// be read is logged and left out.
    pub fn discover<S, P>(
        local_plugin_class_names: impl IntoIterator<Item = S>,
        external_files: impl IntoIterator<Item = P>,
    ) -> DiscoveredPlugins
    where
        S: Into<String>,
        P: AsRef<Path>,
    {
        let mut discovered = DiscoveredPlugins {
            local: local_plugin_class_names.into_iter().map(Into::into).collect(),
            ..Default::default()
        };

        let mut declared: Vec<(PathBuf, BTreeSet<String>)> = Vec::new();
        let mut readable: Vec<PathBuf> = Vec::new();
        for file in external_files {
            let path = file.as_ref();
            match PluginMetadataRecord::read_from(path) {
                Ok(Some(record)) => {
                    debug!(
                        "{} declares plugins {:?}",
                        path.display(),
                        record.class_names
                    );
                    declared.push((path.to_path_buf(), record.class_names));
                    readable.push(path.to_path_buf());
                }
                Ok(None) => readable.push(path.to_path_buf()),
                Err(e) => {
                    warn!("Skipping dependency {}: {}", path.display(), e);
                    discovered.skipped_files.push(path.to_path_buf());
                }
            }
        }

        if !declared.is_empty() {
            let scan = ClasspathScanner::scan(&readable);
            for (failed, _) in &scan.failed_files {
                discovered.skipped_files.push(failed.clone());
            }
            declared.retain(|(path, _)| !scan.failed_files.iter().any(|(f, _)| f == path));

            let finder = PluginsFinder::new(&scan.hierarchy);
            discovered.dependencies = finder.expand_entry_points(
                declared
                    .iter()
                    .flat_map(|(_, names)| names.iter().map(String::as_str)),
            );
        }

        info!(
            "Plugin discovery: {} local, {} from dependencies, {} dependencies skipped",
            discovered.local.len(),
            discovered.dependencies.len(),
            discovered.skipped_files.len()
        );
        debug!("Local plugins found: {:?}", discovered.local);
        debug!("Dependencies plugins found: {:?}", discovered.dependencies);
        let overlapping = discovered.overlapping();
        if !overlapping.is_empty() {
            debug!(
                "Plugins both declared locally and shipped by dependencies: {:?}",
                overlapping
            );
        }

        discovered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::plugins_metadata_path;
    use crate::scan::fixtures::{ACC_ABSTRACT, ACC_PUBLIC, class_bytes, simple_class};
    use std::io::Write;

    fn create_jar(path: &Path, entries: &[(String, Vec<u8>)]) {
        let mut zip = zip::ZipWriter::new(std::fs::File::create(path).unwrap());
        let options = zip::write::SimpleFileOptions::default();
        for (name, content) in entries {
            zip.start_file(name.as_str(), options).unwrap();
            zip.write_all(content).unwrap();
        }
        zip.finish().unwrap();
    }

    #[test]
    fn test_find_built_plugin_class_names() {
        let temp = tempfile::tempdir().unwrap();
        let jar = temp.path().join("classes.jar");
        create_jar(
            &jar,
            &[
                (
                    "p/AbstractPlugin.class".into(),
                    class_bytes(
                        "p/AbstractPlugin",
                        Some("java/lang/Object"),
                        &["net/bytebuddy/build/Plugin"],
                        ACC_PUBLIC | ACC_ABSTRACT,
                    ),
                ),
                (
                    "p/BasePlugin.class".into(),
                    simple_class("p/BasePlugin", Some("p/AbstractPlugin"), &[]),
                ),
                (
                    "p/NotAPlugin.class".into(),
                    simple_class("p/NotAPlugin", None, &[]),
                ),
            ],
        );

        let scan = ClasspathScanner::scan([&jar]);
        let found = PluginsFinder::new(&scan.hierarchy)
            .find_built_plugin_class_names("net.bytebuddy.build.Plugin");

        assert_eq!(
            found.into_iter().collect::<Vec<_>>(),
            vec!["p.AbstractPlugin", "p.BasePlugin"]
        );
    }

    #[test]
    fn test_no_plugins_is_empty_not_error() {
        let temp = tempfile::tempdir().unwrap();
        let jar = temp.path().join("plain.jar");
        create_jar(&jar, &[("a/A.class".into(), simple_class("a/A", None, &[]))]);

        let discovered = PluginDiscoveryService::discover(Vec::<String>::new(), [&jar]);

        assert!(discovered.is_empty());
        assert!(discovered.skipped_files.is_empty());
    }

    #[test]
    fn test_malformed_dependency_is_skipped() {
        let temp = tempfile::tempdir().unwrap();
        let broken = temp.path().join("broken.jar");
        std::fs::write(&broken, b"not a zip").unwrap();
        let good = temp.path().join("good.jar");
        create_jar(
            &good,
            &[
                (plugins_metadata_path(), b"plugin-classes=g.Plugin".to_vec()),
                ("g/Plugin.class".into(), simple_class("g/Plugin", None, &[])),
            ],
        );

        let discovered = PluginDiscoveryService::discover(["l.Local"], [&broken, &good]);

        assert_eq!(discovered.skipped_files, vec![broken]);
        assert_eq!(
            discovered.class_names(),
            BTreeSet::from(["g.Plugin".to_string(), "l.Local".to_string()])
        );
    }
}
