use super::bindings::ArgumentBindings;
use super::registry::{Arguments, PluginConstructor, PluginRegistry};
use crate::discovery::PluginDescriptor;
use crate::error::{Result, WeaveError};
use crate::scan::ClassScope;
use tracing::debug;
use weaver_api::{ApiResult, Plugin, PluginFactory};

/// Factory bound to one plugin class and its resolved constructor arguments.
#[derive(Debug, Clone)]
pub struct ReflectionPluginFactory {
    class_name: String,
    constructor: PluginConstructor,
    arguments: Arguments,
}

impl ReflectionPluginFactory {
    pub fn arguments(&self) -> &Arguments {
        &self.arguments
    }
}

impl PluginFactory for ReflectionPluginFactory {
    fn class_name(&self) -> &str {
        &self.class_name
    }

    fn make(&self) -> ApiResult<Box<dyn Plugin>> {
        self.constructor.construct(&self.arguments)
    }
}

/// Builds factories for descriptors resolved against one class scope.
pub struct PluginFactoryBuilder<'a> {
    scope: &'a ClassScope,
    registry: &'a PluginRegistry,
    bindings: &'a ArgumentBindings,
}

impl<'a> PluginFactoryBuilder<'a> {
    pub fn new(
        scope: &'a ClassScope,
        registry: &'a PluginRegistry,
        bindings: &'a ArgumentBindings,
    ) -> Self {
        Self {
            scope,
            registry,
            bindings,
        }
    }

    /// Loads the class from the scope (metadata only), finds its constructor and binds every
    /// declared parameter by type.
    pub fn build(&self, descriptor: &PluginDescriptor) -> Result<ReflectionPluginFactory> {
        let class_name = descriptor.class_name.as_str();
        let description = self
            .scope
            .load_class(class_name)?
            .ok_or_else(|| WeaveError::ClassNotFound(class_name.to_string()))?;
        if !description.is_concrete() {
            return Err(WeaveError::NotInstantiable(class_name.to_string()));
        }

        let constructor = self
            .registry
            .get(class_name)
            .ok_or_else(|| {
                WeaveError::ClassNotFound(format!("{class_name} (no registered constructor)"))
            })?
            .clone();

        let mut arguments = Arguments::default();
        for parameter in constructor.parameters() {
            let value = self.bindings.resolve(parameter).ok_or_else(|| {
                WeaveError::UnboundArgument {
                    plugin: class_name.to_string(),
                    type_name: parameter.type_name().to_string(),
                }
            })?;
            arguments.push(parameter, value);
        }

        Ok(ReflectionPluginFactory {
            class_name: class_name.to_string(),
            constructor,
            arguments,
        })
    }

    /// Builds a factory for every instantiable descriptor, in order.
    ///
    /// Abstract classes and interfaces (bases recovered by discovery) are skipped. Any other
    /// failure aborts.
    pub fn build_all(
        &self,
        descriptors: &[PluginDescriptor],
    ) -> Result<Vec<Box<dyn PluginFactory>>> {
        let mut factories: Vec<Box<dyn PluginFactory>> = Vec::with_capacity(descriptors.len());
        for descriptor in descriptors {
            match self.build(descriptor) {
                Ok(factory) => factories.push(Box::new(factory)),
                Err(WeaveError::NotInstantiable(name)) => {
                    debug!("Skipping abstract plugin type {}", name);
                }
                Err(e) => return Err(e),
            }
        }
        Ok(factories)
    }
}
