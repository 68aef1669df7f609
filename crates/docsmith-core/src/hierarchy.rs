//! Per-file class hierarchy tracking.
//!
//! While scanning a file, docsmith records which classes the file defines
//! and the parents each class declares. One [`ClassRegistry`] covers one
//! source file; [`FileRegistries`] owns the registry of every scanned file.
//! Folding the per-file registries into a whole-program inheritance graph
//! (and walking it) happens in a later stage, outside this crate.
//!
//! A class with no recorded parents is still a class of the file: the
//! registry distinguishes "registered, zero parents" from "not registered".

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

// ============================================================================
// ClassRegistry
// ============================================================================

/// Classes defined in one source file, each with its declared parent set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRegistry {
    // class name → declared parents; BTree keeps iteration deterministic
    classes: BTreeMap<String, BTreeSet<String>>,
}

impl ClassRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        ClassRegistry::default()
    }

    /// Register a class. No-op if it is already registered.
    pub fn add_class(&mut self, name: impl Into<String>) {
        self.classes.entry(name.into()).or_default();
    }

    /// Remove a class and its parent set entirely.
    pub fn delete_class(&mut self, name: &str) {
        self.classes.remove(name);
    }

    /// Record a declared parent, registering the class first if needed.
    /// Idempotent.
    pub fn add_parent(&mut self, class: impl Into<String>, parent: impl Into<String>) {
        self.classes
            .entry(class.into())
            .or_default()
            .insert(parent.into());
    }

    /// Remove one declared parent. Emptying the parent set keeps the class
    /// registered; only [`ClassRegistry::delete_class`] removes it.
    pub fn delete_parent(&mut self, class: &str, parent: &str) {
        if let Some(parents) = self.classes.get_mut(class) {
            parents.remove(parent);
        }
    }

    /// Registered class names, in stable order.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    /// Whether the file defines this class.
    pub fn has_class(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Declared parents of a class, in stable order; empty when the class
    /// is absent or parentless.
    pub fn parents_of(&self, name: &str) -> impl Iterator<Item = &str> {
        self.classes
            .get(name)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// Whether `class` is registered here with `parent` declared.
    pub fn has_parent(&self, class: &str, parent: &str) -> bool {
        self.classes
            .get(class)
            .is_some_and(|parents| parents.contains(parent))
    }

    /// Number of registered classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether no classes are registered.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

// ============================================================================
// FileRegistries
// ============================================================================

/// The class registry of every scanned file, keyed by file path.
///
/// Scanners write through [`FileRegistries::registry_mut`]; the hierarchy
/// aggregation stage reads the per-file registries back out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRegistries {
    registries: BTreeMap<String, ClassRegistry>,
}

impl FileRegistries {
    /// Create an empty map.
    pub fn new() -> Self {
        FileRegistries::default()
    }

    /// Registry for a file, created on first access.
    pub fn registry_mut(&mut self, file: impl Into<String>) -> &mut ClassRegistry {
        self.registries.entry(file.into()).or_default()
    }

    /// Registry for a file, if the file has been scanned.
    pub fn registry(&self, file: &str) -> Option<&ClassRegistry> {
        self.registries.get(file)
    }

    /// Drop one file's registry, returning it. Other files are untouched.
    pub fn remove_file(&mut self, file: &str) -> Option<ClassRegistry> {
        self.registries.remove(file)
    }

    /// Scanned file paths, in stable order.
    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.registries.keys().map(String::as_str)
    }

    /// File paths with their registries, in stable order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ClassRegistry)> {
        self.registries.iter().map(|(file, reg)| (file.as_str(), reg))
    }

    /// Number of files with a registry.
    pub fn len(&self) -> usize {
        self.registries.len()
    }

    /// Whether no files have been scanned.
    pub fn is_empty(&self) -> bool {
        self.registries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_parent_implicitly_registers_class() {
        let mut registry = ClassRegistry::new();
        registry.add_parent("X", "Y");

        assert!(registry.has_class("X"));
        assert_eq!(registry.parents_of("X").collect::<Vec<_>>(), vec!["Y"]);
        assert!(registry.has_parent("X", "Y"));
    }

    #[test]
    fn deleting_last_parent_keeps_class_registered() {
        let mut registry = ClassRegistry::new();
        registry.add_parent("X", "Y");
        registry.delete_parent("X", "Y");

        assert!(registry.has_class("X"));
        assert_eq!(registry.parents_of("X").count(), 0);
        assert!(!registry.has_parent("X", "Y"));
    }

    #[test]
    fn parentless_class_differs_from_absent_class() {
        let mut registry = ClassRegistry::new();
        registry.add_class("Base");

        assert!(registry.has_class("Base"));
        assert!(!registry.has_class("Other"));
        // Both read back as parentless.
        assert_eq!(registry.parents_of("Base").count(), 0);
        assert_eq!(registry.parents_of("Other").count(), 0);
        assert!(!registry.has_parent("Other", "Base"));
    }

    #[test]
    fn add_class_keeps_existing_parents() {
        let mut registry = ClassRegistry::new();
        registry.add_parent("Child", "Parent");
        registry.add_class("Child");

        assert!(registry.has_parent("Child", "Parent"));
    }

    #[test]
    fn add_parent_is_idempotent() {
        let mut registry = ClassRegistry::new();
        registry.add_parent("Child", "Parent");
        registry.add_parent("Child", "Parent");

        assert_eq!(registry.parents_of("Child").count(), 1);
    }

    #[test]
    fn delete_class_removes_all_trace() {
        let mut registry = ClassRegistry::new();
        registry.add_parent("Child", "A");
        registry.add_parent("Child", "B");
        registry.delete_class("Child");

        assert!(!registry.has_class("Child"));
        assert_eq!(registry.parents_of("Child").count(), 0);
        assert!(registry.is_empty());
    }

    #[test]
    fn delete_parent_on_absent_class_is_noop() {
        let mut registry = ClassRegistry::new();
        registry.delete_parent("Ghost", "Parent");

        assert!(!registry.has_class("Ghost"));
        assert!(registry.is_empty());
    }

    #[test]
    fn multiple_parents_iterate_in_stable_order() {
        let mut registry = ClassRegistry::new();
        registry.add_parent("Child", "Zed");
        registry.add_parent("Child", "Alpha");

        let parents: Vec<_> = registry.parents_of("Child").collect();
        assert_eq!(parents, vec!["Alpha", "Zed"]);
    }

    mod file_registries {
        use super::*;

        #[test]
        fn registry_mut_creates_on_first_access() {
            let mut map = FileRegistries::new();
            map.registry_mut("a.c").add_parent("Child", "Base");

            assert_eq!(map.len(), 1);
            assert!(map.registry("a.c").expect("a.c").has_class("Child"));
            assert!(map.registry("b.c").is_none());
        }

        #[test]
        fn registries_are_independent_per_file() {
            let mut map = FileRegistries::new();
            map.registry_mut("a.c").add_parent("Child", "Base");
            map.registry_mut("b.c").add_class("Other");

            assert!(!map.registry("b.c").expect("b.c").has_class("Child"));
            assert!(!map.registry("a.c").expect("a.c").has_class("Other"));
        }

        #[test]
        fn remove_file_drops_only_that_registry() {
            let mut map = FileRegistries::new();
            map.registry_mut("a.c").add_class("A");
            map.registry_mut("b.c").add_class("B");

            let removed = map.remove_file("a.c").expect("a.c registry");
            assert!(removed.has_class("A"));
            assert_eq!(map.files().collect::<Vec<_>>(), vec!["b.c"]);
        }
    }
}
