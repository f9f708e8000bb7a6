use std::collections::{BTreeMap, BTreeSet, VecDeque};
use weaver_api::TypeDescription;

/// Type graph of every class found on a scanned classpath.
///
/// Edges point from a supertype to the classes that directly extend or implement it. The
/// supertype does not need to be part of the scan (e.g. `java.lang.Object`).
#[derive(Debug, Default)]
pub struct TypeHierarchy {
    types: BTreeMap<String, TypeDescription>,
    subtypes: BTreeMap<String, BTreeSet<String>>,
}

impl TypeHierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a class. A class already present keeps its first definition.
    pub fn insert(&mut self, description: TypeDescription) -> bool {
        if self.types.contains_key(&description.name) {
            return false;
        }
        for supertype in description.supertypes() {
            self.subtypes
                .entry(supertype.to_string())
                .or_default()
                .insert(description.name.clone());
        }
        self.types.insert(description.name.clone(), description);
        true
    }

    pub fn get(&self, name: &str) -> Option<&TypeDescription> {
        self.types.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn direct_subtypes(&self, name: &str) -> impl Iterator<Item = &str> {
        self.subtypes
            .get(name)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    /// Every class that transitively extends or implements `name`, excluding `name` itself.
    pub fn all_subtypes(&self, name: &str) -> BTreeSet<String> {
        let mut found = BTreeSet::new();
        let mut queue = VecDeque::from([name.to_string()]);

        while let Some(current) = queue.pop_front() {
            for subtype in self.direct_subtypes(&current) {
                if subtype != name && found.insert(subtype.to_string()) {
                    queue.push_back(subtype.to_string());
                }
            }
        }

        found
    }

    /// True if `name` is `ancestor` or one of its transitive subtypes.
    pub fn is_assignable_to(&self, name: &str, ancestor: &str) -> bool {
        name == ancestor || self.all_subtypes(ancestor).contains(name)
    }
}
