use super::bindings::SharedValue;
use std::any::{Any, TypeId};
use std::collections::BTreeMap;
use std::sync::Arc;
use weaver_api::{ApiError, ApiResult, Plugin};

/// A declared constructor parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameter {
    type_id: TypeId,
    type_name: &'static str,
}

impl Parameter {
    pub fn of<T: Any>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

/// Arguments resolved for one constructor.
#[derive(Clone, Default)]
pub struct Arguments {
    values: Vec<(TypeId, SharedValue)>,
}

impl Arguments {
    pub(crate) fn push(&mut self, parameter: &Parameter, value: SharedValue) {
        self.values.push((parameter.type_id(), value));
    }

    pub fn get<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        self.values
            .iter()
            .find(|(id, _)| *id == TypeId::of::<T>())
            .and_then(|(_, value)| value.clone().downcast::<T>().ok())
    }

    /// Like [`Arguments::get`], failing when the argument was not resolved.
    pub fn require<T: Any + Send + Sync>(&self) -> ApiResult<Arc<T>> {
        self.get::<T>().ok_or_else(|| {
            ApiError::Plugin(format!(
                "constructor argument {} was not resolved",
                std::any::type_name::<T>()
            ))
        })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl std::fmt::Debug for Arguments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Arguments").field("len", &self.len()).finish()
    }
}

type ConstructFn = dyn Fn(&Arguments) -> ApiResult<Box<dyn Plugin>> + Send + Sync;

/// How to instantiate one plugin class.
#[derive(Clone)]
pub struct PluginConstructor {
    parameters: Vec<Parameter>,
    construct: Arc<ConstructFn>,
}

impl PluginConstructor {
    pub fn no_args<P, F>(make: F) -> Self
    where
        P: Plugin + 'static,
        F: Fn() -> P + Send + Sync + 'static,
    {
        Self::with_parameters(vec![], move |_| Ok(Box::new(make())))
    }

    /// Single-argument constructor, the argument injected by type.
    pub fn with_argument<A, P, F>(make: F) -> Self
    where
        A: Any + Send + Sync,
        P: Plugin + 'static,
        F: Fn(Arc<A>) -> P + Send + Sync + 'static,
    {
        Self::with_parameters(vec![Parameter::of::<A>()], move |args| {
            Ok(Box::new(make(args.require::<A>()?)))
        })
    }

    /// General form: declared parameter types plus a body pulling them from [`Arguments`].
    pub fn with_parameters<F>(parameters: Vec<Parameter>, construct: F) -> Self
    where
        F: Fn(&Arguments) -> ApiResult<Box<dyn Plugin>> + Send + Sync + 'static,
    {
        Self {
            parameters,
            construct: Arc::new(construct),
        }
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub(crate) fn construct(&self, arguments: &Arguments) -> ApiResult<Box<dyn Plugin>> {
        (self.construct)(arguments)
    }
}

impl std::fmt::Debug for PluginConstructor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginConstructor")
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

/// Plugin constructors by binary class name.
#[derive(Debug, Default, Clone)]
pub struct PluginRegistry {
    constructors: BTreeMap<String, PluginConstructor>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        mut self,
        class_name: impl Into<String>,
        constructor: PluginConstructor,
    ) -> Self {
        self.insert(class_name, constructor);
        self
    }

    pub fn insert(&mut self, class_name: impl Into<String>, constructor: PluginConstructor) {
        self.constructors.insert(class_name.into(), constructor);
    }

    pub fn get(&self, class_name: &str) -> Option<&PluginConstructor> {
        self.constructors.get(class_name)
    }

    pub fn contains(&self, class_name: &str) -> bool {
        self.constructors.contains_key(class_name)
    }

    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.constructors.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}
