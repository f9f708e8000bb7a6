pub mod engine;
pub mod error;
pub mod locator;
pub mod models;
pub mod plugin;
pub mod source;

// Re-export commonly used types
pub use engine::{EngineSummary, InstrumentationEngine};
pub use error::{ApiError, ApiResult};
pub use locator::{ClassFileLocator, NoOpLocator};
pub use models::*;
pub use plugin::{Plugin, PluginFactory};
pub use source::{ClassEntries, ClassEntry, EngineSource, EntryContent};
