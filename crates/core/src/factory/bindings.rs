use super::registry::Parameter;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

pub(crate) type SharedValue = Arc<dyn Any + Send + Sync>;

/// Values available to plugin constructors, keyed by their exact type.
#[derive(Default, Clone)]
pub struct ArgumentBindings {
    values: HashMap<TypeId, (&'static str, SharedValue)>,
}

impl ArgumentBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `value` for parameters of type `T`, replacing a previous binding of that type.
    pub fn bind<T: Any + Send + Sync>(self, value: T) -> Self {
        self.bind_shared(Arc::new(value))
    }

    pub fn bind_shared<T: Any + Send + Sync>(mut self, value: Arc<T>) -> Self {
        self.values
            .insert(TypeId::of::<T>(), (std::any::type_name::<T>(), value));
        self
    }

    pub fn contains<T: Any>(&self) -> bool {
        self.values.contains_key(&TypeId::of::<T>())
    }

    pub(crate) fn resolve(&self, parameter: &Parameter) -> Option<SharedValue> {
        self.values
            .get(&parameter.type_id())
            .map(|(_, value)| value.clone())
    }

    pub fn bound_type_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.values.values().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names
    }
}

impl std::fmt::Debug for ArgumentBindings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArgumentBindings")
            .field("types", &self.bound_type_names())
            .finish()
    }
}
