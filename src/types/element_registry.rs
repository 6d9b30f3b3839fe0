use std::collections::HashSet;

/// Distinct element names referenced by conditions, in first-reference order.
///
/// Built while parsing by registering the subject of every atomic condition;
/// registering a name again leaves its position unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementRegistry {
    names: Vec<String>,
    seen: HashSet<String>,
}

impl ElementRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element name. Returns `true` if the name was not yet registered.
    pub fn register(&mut self, name: &str) -> bool {
        if self.seen.contains(name) {
            return false;
        }
        self.seen.insert(name.to_owned());
        self.names.push(name.to_owned());
        true
    }

    /// Register every name of `other`, preserving its order after our own names.
    pub fn extend(&mut self, other: &ElementRegistry) {
        for name in other.iter() {
            self.register(name);
        }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(name)
    }

    /// The number of registered elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over the names in first-reference order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    #[must_use]
    pub fn into_names(self) -> Vec<String> {
        self.names
    }
}

impl<S: AsRef<str>> FromIterator<S> for ElementRegistry {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut registry = Self::new();
        for name in iter {
            registry.register(name.as_ref());
        }
        registry
    }
}
