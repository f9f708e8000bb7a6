use super::capitalize;
use crate::constants::CUSTOM_CONFIGURATIONS_PREFIX;
use serde::{Deserialize, Serialize};

/// One bucket role, carrying its capitalized display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConfigurationType {
    capitalized_name: String,
}

impl ConfigurationType {
    pub fn new(name: &str) -> Self {
        Self {
            capitalized_name: capitalize(name),
        }
    }

    pub fn capitalized_name(&self) -> &str {
        &self.capitalized_name
    }
}

/// The three roles a per-variant dependency set is staged with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationGroup {
    /// Where users declare dependencies
    pub bucket_type: ConfigurationType,
    /// Exposed to consumers of this project
    pub consumable_type: ConfigurationType,
    /// Resolved into files
    pub resolvable_type: ConfigurationType,
}

impl ConfigurationGroup {
    pub fn new(
        bucket_type: ConfigurationType,
        consumable_type: ConfigurationType,
        resolvable_type: ConfigurationType,
    ) -> Self {
        Self {
            bucket_type,
            consumable_type,
            resolvable_type,
        }
    }
}

impl Default for ConfigurationGroup {
    fn default() -> Self {
        Self::new(
            ConfigurationType::new("Bucket"),
            ConfigurationType::new("Consumable"),
            ConfigurationType::new("Resolvable"),
        )
    }
}

/// Generates `<prefix><BuildType><Role>` bucket names for one build type (or path element).
pub struct ConfigurationNamesGenerator<'a> {
    configuration_group: &'a ConfigurationGroup,
    capitalized_build_type_name: String,
}

impl<'a> ConfigurationNamesGenerator<'a> {
    pub fn new(configuration_group: &'a ConfigurationGroup, build_type_name: &str) -> Self {
        Self {
            configuration_group,
            capitalized_build_type_name: capitalize(build_type_name),
        }
    }

    pub fn bucket_name(&self) -> String {
        self.custom_configuration_name(&self.configuration_group.bucket_type)
    }

    pub fn consumable_name(&self) -> String {
        self.custom_configuration_name(&self.configuration_group.consumable_type)
    }

    pub fn resolvable_name(&self) -> String {
        self.custom_configuration_name(&self.configuration_group.resolvable_type)
    }

    fn custom_configuration_name(&self, configuration_type: &ConfigurationType) -> String {
        format!(
            "{CUSTOM_CONFIGURATIONS_PREFIX}{}{}",
            self.capitalized_build_type_name,
            configuration_type.capitalized_name()
        )
    }
}
