use super::MANIFEST_PATH;
use crate::scan::parse_class_header;
use crate::source::CompoundClassFileLocator;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};
use weaver_api::{
    ApiError, ApiResult, ClassFileLocator, EngineSource, EngineSummary, InstrumentationEngine,
    Plugin, PluginFactory, TypeDescription, resource_name,
};

/// Runs plugins over every class of a source and writes the results as a class folder.
///
/// Each entry is matched against the plugins in factory order; every matching plugin gets the
/// output of the previous one. Entries no plugin matches are copied through unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct WeavingEngine;

impl WeavingEngine {
    pub fn new() -> Self {
        Self
    }

    fn weave(
        plugins: &mut [Box<dyn Plugin>],
        target: &TypeDescription,
        mut bytes: Vec<u8>,
        locator: &dyn ClassFileLocator,
    ) -> ApiResult<(Vec<u8>, bool)> {
        let mut transformed = false;
        for plugin in plugins.iter_mut() {
            if plugin.matches(target) {
                bytes = plugin.apply(target, bytes, locator)?;
                transformed = true;
            }
        }
        Ok((bytes, transformed))
    }

    fn close_all(plugins: &mut [Box<dyn Plugin>]) -> ApiResult<()> {
        let mut first_error = None;
        for plugin in plugins.iter_mut() {
            if let Err(e) = plugin.close() {
                warn!("Failed to close plugin: {}", e);
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}

fn write_output(target: &Path, relative: &str, bytes: &[u8]) -> ApiResult<()> {
    let path = target.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ApiError::io(parent.display(), e))?;
    }
    fs::write(&path, bytes).map_err(|e| ApiError::io(path.display(), e))
}

impl InstrumentationEngine for WeavingEngine {
    fn apply(
        &self,
        source: Box<dyn EngineSource>,
        extra: Arc<dyn ClassFileLocator>,
        target: &Path,
        factories: &[Box<dyn PluginFactory>],
    ) -> ApiResult<EngineSummary> {
        let start = Instant::now();
        fs::create_dir_all(target).map_err(|e| ApiError::io(target.display(), e))?;

        let mut plugins = factories
            .iter()
            .map(|factory| {
                debug!("Instantiating plugin {}", factory.class_name());
                factory.make()
            })
            .collect::<ApiResult<Vec<_>>>()?;

        if let Some(manifest) = source.manifest() {
            write_output(target, MANIFEST_PATH, manifest)?;
        }

        // Source classes shadow anything the extra classpath provides.
        let locator = CompoundClassFileLocator::new(vec![source.class_file_locator(), extra]);

        let mut summary = EngineSummary::default();
        let outcome = source.into_entries().try_for_each(|entry| {
            let entry = entry?;
            let name = entry.name.clone();
            let bytes = entry.into_bytes()?;
            let description = parse_class_header(&bytes, &name).map_err(ApiError::from)?;
            let (bytes, transformed) = Self::weave(&mut plugins, &description, bytes, &locator)?;
            if transformed {
                debug!("Transformed {}", name);
                summary.transformed += 1;
            } else {
                summary.unchanged += 1;
            }
            write_output(target, &resource_name(&name), &bytes)
        });

        let closed = Self::close_all(&mut plugins);
        outcome?;
        closed?;

        info!(
            "Weaving finished: {} transformed, {} unchanged in {:?}",
            summary.transformed,
            summary.unchanged,
            start.elapsed()
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::fixtures::simple_class;
    use crate::source::{ClassOrigin, CompoundSource};
    use std::sync::Mutex;
    use weaver_api::{ClassEntries, ClassEntry, NoOpLocator};

    /// Appends a marker byte to every class whose simple name starts with a prefix.
    struct Marking {
        prefix: &'static str,
        marker: u8,
        closed: Arc<Mutex<Vec<&'static str>>>,
    }

    impl Plugin for Marking {
        fn matches(&self, target: &TypeDescription) -> bool {
            target.simple_name().starts_with(self.prefix)
        }

        fn apply(
            &mut self,
            _target: &TypeDescription,
            mut bytes: Vec<u8>,
            _locator: &dyn ClassFileLocator,
        ) -> ApiResult<Vec<u8>> {
            bytes.push(self.marker);
            Ok(bytes)
        }

        fn close(&mut self) -> ApiResult<()> {
            self.closed.lock().unwrap().push(self.prefix);
            Ok(())
        }
    }

    struct MarkingFactory {
        prefix: &'static str,
        marker: u8,
        closed: Arc<Mutex<Vec<&'static str>>>,
    }

    impl PluginFactory for MarkingFactory {
        fn class_name(&self) -> &str {
            "test.Marking"
        }

        fn make(&self) -> ApiResult<Box<dyn Plugin>> {
            Ok(Box::new(Marking {
                prefix: self.prefix,
                marker: self.marker,
                closed: self.closed.clone(),
            }))
        }
    }

    struct Classes(Vec<(&'static str, Vec<u8>)>);

    impl ClassOrigin for Classes {
        fn describe(&self) -> String {
            "memory".to_string()
        }

        fn class_file_locator(&self) -> Arc<dyn ClassFileLocator> {
            Arc::new(NoOpLocator)
        }

        fn into_entries(self: Box<Self>) -> ClassEntries {
            Box::new(
                self.0
                    .into_iter()
                    .map(|(name, bytes)| Ok(ClassEntry::from_bytes(name, bytes))),
            )
        }
    }

    fn source() -> Box<dyn EngineSource> {
        Box::new(CompoundSource::new(vec![Box::new(Classes(vec![
            ("a.FooService", simple_class("a/FooService", None, &[])),
            ("a.FooBar", simple_class("a/FooBar", None, &[])),
            ("b.Other", simple_class("b/Other", None, &[])),
        ]))]))
    }

    #[test]
    fn test_matching_plugins_are_chained_in_order() {
        let temp = tempfile::tempdir().unwrap();
        let closed = Arc::new(Mutex::new(Vec::new()));
        let factories: Vec<Box<dyn PluginFactory>> = vec![
            Box::new(MarkingFactory {
                prefix: "Foo",
                marker: 1,
                closed: closed.clone(),
            }),
            Box::new(MarkingFactory {
                prefix: "FooB",
                marker: 2,
                closed: closed.clone(),
            }),
        ];

        let summary = WeavingEngine::new()
            .apply(source(), Arc::new(NoOpLocator), temp.path(), &factories)
            .unwrap();

        assert_eq!(summary, EngineSummary { transformed: 2, unchanged: 1 });

        let original = simple_class("a/FooBar", None, &[]);
        let woven = fs::read(temp.path().join("a/FooBar.class")).unwrap();
        assert_eq!(&woven[..original.len()], original.as_slice());
        assert_eq!(&woven[original.len()..], &[1, 2]);

        let untouched = fs::read(temp.path().join("b/Other.class")).unwrap();
        assert_eq!(untouched, simple_class("b/Other", None, &[]));

        assert_eq!(*closed.lock().unwrap(), vec!["Foo", "FooB"]);
    }

    #[test]
    fn test_invalid_class_aborts_and_still_closes_plugins() {
        let temp = tempfile::tempdir().unwrap();
        let closed = Arc::new(Mutex::new(Vec::new()));
        let factories: Vec<Box<dyn PluginFactory>> =
            vec![Box::new(MarkingFactory {
                prefix: "X",
                marker: 9,
                closed: closed.clone(),
            })];
        let broken: Box<dyn EngineSource> = Box::new(CompoundSource::new(vec![Box::new(
            Classes(vec![("a.Broken", vec![0xCA, 0xFE])]),
        )]));

        let result =
            WeavingEngine::new().apply(broken, Arc::new(NoOpLocator), temp.path(), &factories);

        assert!(result.is_err());
        assert_eq!(closed.lock().unwrap().len(), 1);
    }
}
