use crate::error::ApiResult;
use crate::locator::ClassFileLocator;
use crate::models::TypeDescription;

/// An instrumentation unit.
///
/// The engine asks `matches` for every class of the source and hands the bytes of matching
/// classes to `apply`, chaining plugins in factory order.
pub trait Plugin: Send {
    fn matches(&self, target: &TypeDescription) -> bool;

    /// Rewrite `bytes` (the current content of `target`) and return the new content.
    fn apply(
        &mut self,
        target: &TypeDescription,
        bytes: Vec<u8>,
        locator: &dyn ClassFileLocator,
    ) -> ApiResult<Vec<u8>>;

    /// Called once after the engine finished with the plugin.
    fn close(&mut self) -> ApiResult<()> {
        Ok(())
    }
}

/// Creates plugin instances.
pub trait PluginFactory: Send + Sync {
    /// Binary name of the plugin class this factory instantiates.
    fn class_name(&self) -> &str;

    fn make(&self) -> ApiResult<Box<dyn Plugin>>;
}
