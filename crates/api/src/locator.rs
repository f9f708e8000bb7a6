use crate::error::ApiResult;

/// Looks up the bytes of a class file by binary name.
///
/// Lookups are independent of any iteration over a source: a locator may be queried for any
/// class at any time, in any order.
pub trait ClassFileLocator: Send + Sync {
    /// Returns `Ok(None)` when this locator does not know the class.
    fn locate(&self, class_name: &str) -> ApiResult<Option<Vec<u8>>>;

    /// Locator name (for logging/debugging)
    fn describe(&self) -> String;
}

/// Locator that never finds anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpLocator;

impl ClassFileLocator for NoOpLocator {
    fn locate(&self, _class_name: &str) -> ApiResult<Option<Vec<u8>>> {
        Ok(None)
    }

    fn describe(&self) -> String {
        "no-op".to_string()
    }
}
