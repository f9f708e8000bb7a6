use crate::error::ApiResult;
use crate::locator::ClassFileLocator;
use crate::plugin::PluginFactory;
use crate::source::EngineSource;
use std::path::Path;
use std::sync::Arc;

/// Outcome of one engine run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EngineSummary {
    /// Entries rewritten by at least one plugin
    pub transformed: usize,
    /// Entries written through unchanged
    pub unchanged: usize,
}

impl EngineSummary {
    pub fn total(&self) -> usize {
        self.transformed + self.unchanged
    }
}

/// The black-box bytecode rewriter.
pub trait InstrumentationEngine {
    /// Run every plugin built by `factories` over `source`, writing results under `target`.
    ///
    /// `extra` resolves classes that are referenced by the source but not part of it.
    fn apply(
        &self,
        source: Box<dyn EngineSource>,
        extra: Arc<dyn ClassFileLocator>,
        target: &Path,
        factories: &[Box<dyn PluginFactory>],
    ) -> ApiResult<EngineSummary>;
}
