use super::{DirectoryCleaner, ScopeClasspath, TransformInvocation};
use crate::discovery::PluginDiscoveryService;
use crate::engine::WeavingEngine;
use crate::error::Result;
use crate::factory::{ArgumentBindings, PluginFactoryBuilder, PluginLogger, PluginRegistry};
use crate::scan::ClassScope;
use crate::source::{ClassFileLocatorMaker, CompoundSource};
use crate::variant::{LibrariesJarsProvider, VariantPathResolver};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;
use weaver_api::{EngineSummary, InstrumentationEngine};

/// What one transform did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformReport {
    pub variant: String,
    /// Plugin classes a factory was built for, in application order
    pub plugins: Vec<String>,
    pub summary: EngineSummary,
}

/// Runs variant transforms with a fixed plugin registry and engine.
///
/// Every run gets a [`PluginLogger`] binding for the variant unless one was bound explicitly.
pub struct Transform<E = WeavingEngine> {
    registry: PluginRegistry,
    bindings: ArgumentBindings,
    engine: E,
}

impl Transform<WeavingEngine> {
    pub fn new(registry: PluginRegistry) -> Self {
        Self::with_engine(registry, WeavingEngine::new())
    }
}

impl<E: InstrumentationEngine> Transform<E> {
    pub fn with_engine(registry: PluginRegistry, engine: E) -> Self {
        Self {
            registry,
            bindings: ArgumentBindings::new(),
            engine,
        }
    }

    pub fn with_bindings(mut self, bindings: ArgumentBindings) -> Self {
        self.bindings = bindings;
        self
    }

    pub fn registry(&self) -> &PluginRegistry {
        &self.registry
    }

    pub fn run(&self, invocation: &TransformInvocation) -> Result<TransformReport> {
        let start = Instant::now();
        let variant = invocation.variant()?;
        info!(
            "Transforming variant {} (buckets {:?})",
            variant.name(),
            VariantPathResolver::new(&variant).top_bottom_path()
        );

        let classpath = ScopeClasspath::split(&invocation.scope);
        let source = CompoundSource::from_scope(&classpath.directories, &classpath.archives)?;
        let extra_classpath =
            classpath.extra_classpath(&invocation.boot_classpath, &invocation.java_classpath);

        let scope = ClassScope::create(classpath.all_files().iter().chain(extra_classpath.iter()))?;

        let group = invocation.configuration_group();
        let libraries = LibrariesJarsProvider::new(&invocation.dependencies, &group, &variant)
            .libraries_jars()?;

        let discovered =
            PluginDiscoveryService::discover(invocation.local_plugins.iter().cloned(), &libraries);

        let mut bindings = self.bindings.clone();
        if !bindings.contains::<PluginLogger>() {
            bindings = bindings.bind(PluginLogger::new(variant.name()));
        }
        let factories = PluginFactoryBuilder::new(&scope, &self.registry, &bindings)
            .build_all(&discovered.descriptors())?;
        let plugins: Vec<String> = factories.iter().map(|f| f.class_name().to_string()).collect();
        info!("Applying plugins {:?}", plugins);

        DirectoryCleaner::clean_directory(&invocation.output_dir)?;

        let extra_locator = ClassFileLocatorMaker::make(&extra_classpath)?;
        let summary = self.engine.apply(
            Box::new(source),
            Arc::new(extra_locator),
            &invocation.output_dir,
            &factories,
        )?;

        drop(factories);
        drop(scope);
        info!(
            "Variant {} transformed in {:?}",
            variant.name(),
            start.elapsed()
        );

        Ok(TransformReport {
            variant: variant.name().to_string(),
            plugins,
            summary,
        })
    }
}
