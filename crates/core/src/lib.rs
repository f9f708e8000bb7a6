pub mod constants;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod factory;
pub mod library;
pub mod logging;
pub mod scan;
pub mod source;
pub mod transform;
pub mod variant;

pub use error::{Result, WeaveError};
