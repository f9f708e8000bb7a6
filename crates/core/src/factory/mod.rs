//! Plugin factories: from a discovered class name to something that makes plugin instances.
//!
//! There is no runtime reflection here. Plugin implementations are registered up front in a
//! [`PluginRegistry`] under their binary class name, each with a [`PluginConstructor`] that
//! declares the argument types it needs. Arguments are injected by type from
//! [`ArgumentBindings`] when the factory is built.

pub mod bindings;
pub mod builder;
pub mod logger;
pub mod registry;

pub use bindings::ArgumentBindings;
pub use builder::{PluginFactoryBuilder, ReflectionPluginFactory};
pub use logger::PluginLogger;
pub use registry::{Arguments, Parameter, PluginConstructor, PluginRegistry};
