//! Dependency token collection.

use indexmap::IndexSet;

/// Registry of the import/include tokens a rendered model needs.
///
/// Registration is idempotent and keeps first-insertion order, so a type
/// mapping may register the same token on every call.
///
/// # Example
///
/// ```
/// use morphgen_codegen::generation::DependencyManager;
///
/// let mut deps = DependencyManager::new();
/// deps.add_dependency("use std::collections::HashMap;");
/// deps.add_dependency("use std::collections::HashMap;");
///
/// assert_eq!(deps.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyManager {
    dependencies: IndexSet<String>,
}

impl DependencyManager {
    /// Create a new empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a token. Returns false if it was already registered.
    pub fn add_dependency(&mut self, token: impl Into<String>) -> bool {
        self.dependencies.insert(token.into())
    }

    /// Merge another manager into this one.
    pub fn merge(&mut self, other: &DependencyManager) {
        self.dependencies.extend(other.dependencies.iter().cloned());
    }

    /// Check if a token is registered.
    pub fn contains(&self, token: &str) -> bool {
        self.dependencies.contains(token)
    }

    /// Iterate over tokens in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.dependencies.iter().map(String::as_str)
    }

    /// Get the registered tokens in registration order.
    pub fn dependencies(&self) -> Vec<String> {
        self.dependencies.iter().cloned().collect()
    }

    /// Check if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }

    /// Get the number of tokens.
    pub fn len(&self) -> usize {
        self.dependencies.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_is_idempotent() {
        let mut deps = DependencyManager::new();
        assert!(deps.add_dependency("import { Pet } from './Pet';"));
        assert!(!deps.add_dependency("import { Pet } from './Pet';"));
        assert_eq!(deps.dependencies(), vec!["import { Pet } from './Pet';"]);
    }

    #[test]
    fn test_keeps_registration_order() {
        let mut deps = DependencyManager::new();
        deps.add_dependency("b");
        deps.add_dependency("a");
        deps.add_dependency("b");
        assert_eq!(deps.iter().collect::<Vec<_>>(), vec!["b", "a"]);
    }

    #[test]
    fn test_merge() {
        let mut first = DependencyManager::new();
        first.add_dependency("a");
        let mut second = DependencyManager::new();
        second.add_dependency("a");
        second.add_dependency("c");

        first.merge(&second);
        assert_eq!(first.dependencies(), vec!["a", "c"]);
        assert!(first.contains("c"));
    }
}
