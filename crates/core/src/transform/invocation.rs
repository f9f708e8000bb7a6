use crate::error::{Result, WeaveError};
use crate::variant::{ConfigurationGroup, StaticDependencyResolver, Variant};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Everything one variant transform needs from the host build.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformInvocation {
    /// Full variant name; derived from the dimensions when absent
    #[serde(default)]
    pub variant: Option<String>,
    pub build_type: String,
    #[serde(default)]
    pub flavors: Vec<String>,
    /// Class directories and archives to instrument
    pub scope: Vec<PathBuf>,
    #[serde(default)]
    pub boot_classpath: Vec<PathBuf>,
    #[serde(default)]
    pub java_classpath: Vec<PathBuf>,
    /// Plugin classes declared by the project itself
    #[serde(default)]
    pub local_plugins: Vec<String>,
    pub output_dir: PathBuf,
    /// Files behind each resolvable bucket
    #[serde(default)]
    pub dependencies: StaticDependencyResolver,
    #[serde(default)]
    pub configuration_group: Option<ConfigurationGroup>,
}

impl TransformInvocation {
    pub fn new(build_type: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            variant: None,
            build_type: build_type.into(),
            flavors: Vec::new(),
            scope: Vec::new(),
            boot_classpath: Vec::new(),
            java_classpath: Vec::new(),
            local_plugins: Vec::new(),
            output_dir: output_dir.into(),
            dependencies: StaticDependencyResolver::default(),
            configuration_group: None,
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| WeaveError::io(path, e))?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn variant(&self) -> Result<Variant> {
        match &self.variant {
            Some(name) => Variant::new(name.clone(), self.build_type.clone(), self.flavors.clone()),
            None => Variant::from_dimensions(self.build_type.clone(), self.flavors.clone()),
        }
    }

    pub fn configuration_group(&self) -> ConfigurationGroup {
        self.configuration_group.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::DependencyResolver;

    #[test]
    fn test_minimal_json() {
        let json = r#"{
            "build_type": "debug",
            "flavors": ["free"],
            "scope": ["/p/classes"],
            "output_dir": "/p/out",
            "dependencies": { "weaverFreeResolvable": ["/m2/lib.jar"] }
        }"#;

        let invocation: TransformInvocation = serde_json::from_str(json).unwrap();

        assert_eq!(invocation.variant().unwrap().name(), "freeDebug");
        assert!(invocation.local_plugins.is_empty());
        assert_eq!(invocation.configuration_group(), ConfigurationGroup::default());
        assert_eq!(
            invocation.dependencies.resolve("weaverFreeResolvable").unwrap(),
            vec![PathBuf::from("/m2/lib.jar")]
        );
    }

    #[test]
    fn test_mismatched_variant_name_is_rejected() {
        let mut invocation = TransformInvocation::new("debug", "/p/out");
        invocation.variant = Some("release".to_string());

        assert!(matches!(invocation.variant(), Err(WeaveError::InvalidVariant(_))));
    }
}
