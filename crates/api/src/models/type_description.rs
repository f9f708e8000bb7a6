use serde::{Deserialize, Serialize};

/// Engine-facing view of a class: what a plugin sees when deciding whether to match it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescription {
    /// Binary name, e.g. `com.example.Foo`
    pub name: String,
    /// Binary name of the direct super class; `None` for `java.lang.Object` and module infos
    pub super_name: Option<String>,
    /// Binary names of the directly implemented interfaces, in declaration order
    pub interfaces: Vec<String>,
    pub is_abstract: bool,
    pub is_interface: bool,
}

impl TypeDescription {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            super_name: None,
            interfaces: Vec::new(),
            is_abstract: false,
            is_interface: false,
        }
    }

    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }

    pub fn package(&self) -> Option<&str> {
        self.name.rfind('.').map(|idx| &self.name[..idx])
    }

    /// True when the class can be instantiated directly.
    pub fn is_concrete(&self) -> bool {
        !self.is_abstract && !self.is_interface
    }

    /// Direct supertypes: the super class first, then interfaces.
    pub fn supertypes(&self) -> impl Iterator<Item = &str> {
        self.super_name
            .iter()
            .map(String::as_str)
            .chain(self.interfaces.iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_and_supertypes() {
        let mut desc = TypeDescription::new("com.example.Foo");
        desc.super_name = Some("com.example.Base".to_string());
        desc.interfaces = vec!["java.io.Serializable".to_string()];

        assert_eq!(desc.simple_name(), "Foo");
        assert_eq!(desc.package(), Some("com.example"));
        assert!(desc.is_concrete());
        assert_eq!(
            desc.supertypes().collect::<Vec<_>>(),
            vec!["com.example.Base", "java.io.Serializable"]
        );
    }
}
