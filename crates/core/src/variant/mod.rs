//! Build variants and the names of their dependency buckets.
//!
//! A variant crosses a build type (`debug`, `release`) with zero or more flavor values. Its
//! dependency buckets are staged per path element, from the narrowest flavor up to the full
//! variant, see [`VariantPathResolver`].

pub mod buckets;
pub mod naming;
pub mod path;

pub use buckets::{BucketNames, DependencyResolver, LibrariesJarsProvider, StaticDependencyResolver};
pub use naming::{ConfigurationGroup, ConfigurationNamesGenerator, ConfigurationType};
pub use path::VariantPathResolver;

use crate::error::{Result, WeaveError};
use serde::{Deserialize, Serialize};

/// Uppercase the first character, leave the rest untouched.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Joins values camel-case style: `["demo", "stable"]` -> `demoStable`.
pub fn camel_join<'a>(values: impl IntoIterator<Item = &'a str>) -> String {
    let mut joined = String::new();
    for value in values {
        if joined.is_empty() {
            joined.push_str(value);
        } else {
            joined.push_str(&capitalize(value));
        }
    }
    joined
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    name: String,
    build_type: String,
    flavors: Vec<String>,
}

impl Variant {
    /// Builds a variant, checking that `name` is the camel-case join of flavors and build type.
    pub fn new(
        name: impl Into<String>,
        build_type: impl Into<String>,
        flavors: Vec<String>,
    ) -> Result<Self> {
        let name = name.into();
        let build_type = build_type.into();
        if build_type.is_empty() {
            return Err(WeaveError::InvalidVariant(format!(
                "variant {name} has an empty build type"
            )));
        }
        if let Some(blank) = flavors.iter().position(|f| f.is_empty()) {
            return Err(WeaveError::InvalidVariant(format!(
                "variant {name} has an empty flavor at position {blank}"
            )));
        }

        let expected = Self::compose_name(&build_type, &flavors);
        if name != expected {
            return Err(WeaveError::InvalidVariant(format!(
                "variant name {name} does not match its dimensions, expected {expected}"
            )));
        }

        Ok(Self {
            name,
            build_type,
            flavors,
        })
    }

    /// Builds a variant whose name is derived from its dimensions.
    pub fn from_dimensions(build_type: impl Into<String>, flavors: Vec<String>) -> Result<Self> {
        let build_type = build_type.into();
        let name = Self::compose_name(&build_type, &flavors);
        Self::new(name, build_type, flavors)
    }

    fn compose_name(build_type: &str, flavors: &[String]) -> String {
        camel_join(
            flavors
                .iter()
                .map(String::as_str)
                .chain(std::iter::once(build_type)),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn build_type(&self) -> &str {
        &self.build_type
    }

    pub fn flavors(&self) -> &[String] {
        &self.flavors
    }

    /// Combined flavor name, `None` without flavors.
    pub fn flavor_name(&self) -> Option<String> {
        if self.flavors.is_empty() {
            None
        } else {
            Some(camel_join(self.flavors.iter().map(String::as_str)))
        }
    }
}
