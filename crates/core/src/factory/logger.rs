use tracing::{debug, error, info, warn};

/// Logging sink handed to plugins that ask for one in their constructor.
#[derive(Debug, Clone)]
pub struct PluginLogger {
    variant: String,
}

impl PluginLogger {
    pub fn new(variant: impl Into<String>) -> Self {
        Self {
            variant: variant.into(),
        }
    }

    pub fn variant(&self) -> &str {
        &self.variant
    }

    pub fn debug(&self, message: &str) {
        debug!(variant = %self.variant, "{}", message);
    }

    pub fn info(&self, message: &str) {
        info!(variant = %self.variant, "{}", message);
    }

    pub fn warn(&self, message: &str) {
        warn!(variant = %self.variant, "{}", message);
    }

    pub fn error(&self, message: &str) {
        error!(variant = %self.variant, "{}", message);
    }
}
