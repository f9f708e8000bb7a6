//! Default [`InstrumentationEngine`](weaver_api::InstrumentationEngine) implementation.

pub mod weaving;

pub use weaving::WeavingEngine;

/// Name of the manifest entry written when a source carries one.
pub const MANIFEST_PATH: &str = "META-INF/MANIFEST.MF";
