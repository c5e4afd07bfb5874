//! Arena storage for Meta-Model graphs.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{MetaModel, MetaModelKind};

/// Handle to a node in a [`MetaModelArena`].
///
/// Node identity is handle identity: two handles are the same node exactly
/// when they compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetaModelId(usize);

impl MetaModelId {
    /// Create a handle from a raw index.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// The raw index.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for MetaModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Owner of every node of a Meta-Model graph.
///
/// Cycles are built by reserving a slot first and filling it once the
/// children that point back at it exist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetaModelArena {
    models: Vec<MetaModel>,
}

impl MetaModelArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node and return its handle.
    pub fn insert(&mut self, model: MetaModel) -> MetaModelId {
        let id = MetaModelId(self.models.len());
        self.models.push(model);
        id
    }

    /// Reserve a slot to be filled later with [`MetaModelArena::set`].
    ///
    /// Until then the slot holds an Any model with the given name.
    pub fn reserve(&mut self, name: impl Into<String>) -> MetaModelId {
        self.insert(MetaModel::new(name, MetaModelKind::Any))
    }

    /// Replace the node behind `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this arena.
    pub fn set(&mut self, id: MetaModelId, model: MetaModel) {
        self.models[id.0] = model;
    }

    /// Get a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this arena.
    pub fn get(&self, id: MetaModelId) -> &MetaModel {
        &self.models[id.0]
    }

    /// Get a node mutably.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this arena.
    pub fn get_mut(&mut self, id: MetaModelId) -> &mut MetaModel {
        &mut self.models[id.0]
    }

    /// Look up a node without panicking.
    pub fn try_get(&self, id: MetaModelId) -> Option<&MetaModel> {
        self.models.get(id.0)
    }

    /// Iterate over all nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (MetaModelId, &MetaModel)> {
        self.models
            .iter()
            .enumerate()
            .map(|(i, m)| (MetaModelId(i), m))
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Check if the arena is empty.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

/// The hand-off from an input processor.
///
/// Holds the arena plus the ordered name → root mapping of the top-level
/// models found in the input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputMetaModel {
    /// Storage for every node.
    pub arena: MetaModelArena,
    /// Top-level models in declaration order.
    pub models: IndexMap<String, MetaModelId>,
    /// The complete processed input.
    #[serde(default)]
    pub original_input: Value,
}

impl InputMetaModel {
    /// Create an empty input model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an input model around an existing arena.
    pub fn with_arena(arena: MetaModelArena) -> Self {
        Self {
            arena,
            ..Self::default()
        }
    }

    /// Register a top-level model under its own name.
    pub fn add_root(&mut self, id: MetaModelId) {
        let name = self.arena.get(id).name.clone();
        self.models.insert(name, id);
    }

    /// Top-level model handles in declaration order.
    pub fn roots(&self) -> impl Iterator<Item = MetaModelId> + '_ {
        self.models.values().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ObjectModel, ReferenceModel};

    #[test]
    fn test_insert_and_get() {
        let mut arena = MetaModelArena::new();
        let id = arena.insert(MetaModel::string("name"));

        assert_eq!(arena.len(), 1);
        assert_eq!(arena.get(id).name, "name");
        assert!(arena.try_get(MetaModelId::new(5)).is_none());
    }

    #[test]
    fn test_reserve_builds_cycle() {
        let mut arena = MetaModelArena::new();
        let person = arena.reserve("Person");
        let this = arena.insert(MetaModel::reference("self", person));
        arena.set(
            person,
            MetaModel::object("Person", ObjectModel::new().property("self", this, false)),
        );

        let MetaModelKind::Reference(ReferenceModel { ref_model }) = &arena.get(this).kind else {
            panic!("expected reference");
        };
        assert_eq!(*ref_model, person);
        assert_eq!(arena.get(person).kind(), crate::ModelKind::Object);
    }

    #[test]
    fn test_input_roots_keep_order() {
        let mut input = InputMetaModel::new();
        let b = input.arena.insert(MetaModel::string("B"));
        let a = input.arena.insert(MetaModel::string("A"));
        input.add_root(b);
        input.add_root(a);

        assert_eq!(input.roots().collect::<Vec<_>>(), vec![b, a]);
        assert_eq!(input.models.get_index(0).map(|(k, _)| k.as_str()), Some("B"));
    }
}
