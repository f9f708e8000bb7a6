//! Per-variant transform: discovery, factories and the engine run, in that order.

pub mod classpath;
pub mod invocation;
pub mod output;
pub mod run;

pub use classpath::ScopeClasspath;
pub use invocation::TransformInvocation;
pub use output::DirectoryCleaner;
pub use run::{Transform, TransformReport};
