//! Arena storage for Constrained Meta-Model graphs.

use super::{ConstrainedKind, ConstrainedModel};

/// Handle to a node in a [`ConstrainedGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConstrainedId(usize);

impl ConstrainedId {
    /// Placeholder target of a reference whose referent is still being built.
    ///
    /// Never observable once the factory returns.
    pub const DANGLING: ConstrainedId = ConstrainedId(usize::MAX);

    /// The raw index.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for ConstrainedId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An outgoing edge of a node, addressed by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Object property at the given position.
    Property(usize),
    /// Union member at the given position.
    UnionMember(usize),
    /// Union property at the given position.
    UnionProperty(usize),
    /// Extended parent at the given position.
    Extend(usize),
    ArrayValue,
    /// Tuple slot at the given position.
    TupleValue(usize),
    DictionaryKey,
    DictionaryValue,
    ReferenceTarget,
}

/// Something noteworthy that happened while building or resolving a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphNote {
    /// A cyclic edge of `from` was rewritten from `target` to an Any placeholder.
    Widened {
        from: ConstrainedId,
        target: ConstrainedId,
        placeholder: ConstrainedId,
    },
    /// A union dictionary key was replaced by an Any node.
    DictionaryKeyFallback {
        dictionary: ConstrainedId,
        key: ConstrainedId,
    },
}

/// Owner of every node of one Constrained Meta-Model.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstrainedGraph {
    models: Vec<ConstrainedModel>,
    root: ConstrainedId,
    notes: Vec<GraphNote>,
}

impl Default for ConstrainedGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstrainedGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            models: Vec::new(),
            root: ConstrainedId::DANGLING,
            notes: Vec::new(),
        }
    }

    /// Allocate a node and return its handle.
    pub fn alloc(&mut self, model: ConstrainedModel) -> ConstrainedId {
        let id = ConstrainedId(self.models.len());
        self.models.push(model);
        id
    }

    /// Get a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this graph.
    pub fn get(&self, id: ConstrainedId) -> &ConstrainedModel {
        &self.models[id.0]
    }

    /// Get a node mutably.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this graph.
    pub fn get_mut(&mut self, id: ConstrainedId) -> &mut ConstrainedModel {
        &mut self.models[id.0]
    }

    /// The node the graph was built from.
    pub fn root(&self) -> ConstrainedId {
        self.root
    }

    pub(crate) fn set_root(&mut self, root: ConstrainedId) {
        self.root = root;
    }

    /// The root node.
    pub fn root_model(&self) -> &ConstrainedModel {
        self.get(self.root)
    }

    /// Iterate over all nodes in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (ConstrainedId, &ConstrainedModel)> {
        self.models
            .iter()
            .enumerate()
            .map(|(i, m)| (ConstrainedId(i), m))
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Check if the graph is empty.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Notes recorded while building and resolving this graph.
    pub fn notes(&self) -> &[GraphNote] {
        &self.notes
    }

    pub(crate) fn push_note(&mut self, note: GraphNote) {
        self.notes.push(note);
    }

    /// Outgoing edges of a node in walk order.
    ///
    /// Properties and members come first, extended parents last.
    pub fn edges(&self, id: ConstrainedId) -> Vec<(Edge, ConstrainedId)> {
        let model = self.get(id);
        let mut edges = Vec::new();

        match &model.kind {
            ConstrainedKind::Object(object) => {
                for (i, property) in object.properties.values().enumerate() {
                    edges.push((Edge::Property(i), property.property));
                }
            }
            ConstrainedKind::Union(union) => {
                for (i, member) in union.union.iter().enumerate() {
                    edges.push((Edge::UnionMember(i), *member));
                }
                for (i, property) in union.properties.values().enumerate() {
                    edges.push((Edge::UnionProperty(i), property.property));
                }
            }
            ConstrainedKind::Array(array) => edges.push((Edge::ArrayValue, array.value_model)),
            ConstrainedKind::Tuple(tuple) => {
                for (i, slot) in tuple.tuple.iter().enumerate() {
                    edges.push((Edge::TupleValue(i), slot.value));
                }
            }
            ConstrainedKind::Dictionary(dictionary) => {
                edges.push((Edge::DictionaryKey, dictionary.key));
                edges.push((Edge::DictionaryValue, dictionary.value));
            }
            ConstrainedKind::Reference(reference) => {
                edges.push((Edge::ReferenceTarget, reference.ref_model));
            }
            ConstrainedKind::Enum(_)
            | ConstrainedKind::String
            | ConstrainedKind::Integer
            | ConstrainedKind::Float
            | ConstrainedKind::Boolean
            | ConstrainedKind::Any => {}
        }

        for (i, parent) in model.options.extend.iter().enumerate() {
            edges.push((Edge::Extend(i), *parent));
        }
        edges
    }

    /// Point an edge of `id` at `target`.
    ///
    /// # Panics
    ///
    /// Panics if the node has no such edge.
    pub fn set_edge(&mut self, id: ConstrainedId, edge: Edge, target: ConstrainedId) {
        let model = self.get_mut(id);
        let slot = match (edge, &mut model.kind) {
            (Edge::Extend(i), _) => model.options.extend.get_mut(i),
            (Edge::Property(i), ConstrainedKind::Object(object)) => object
                .properties
                .get_index_mut(i)
                .map(|(_, property)| &mut property.property),
            (Edge::UnionMember(i), ConstrainedKind::Union(union)) => union.union.get_mut(i),
            (Edge::UnionProperty(i), ConstrainedKind::Union(union)) => union
                .properties
                .get_index_mut(i)
                .map(|(_, property)| &mut property.property),
            (Edge::ArrayValue, ConstrainedKind::Array(array)) => Some(&mut array.value_model),
            (Edge::TupleValue(i), ConstrainedKind::Tuple(tuple)) => {
                tuple.tuple.get_mut(i).map(|slot| &mut slot.value)
            }
            (Edge::DictionaryKey, ConstrainedKind::Dictionary(dictionary)) => {
                Some(&mut dictionary.key)
            }
            (Edge::DictionaryValue, ConstrainedKind::Dictionary(dictionary)) => {
                Some(&mut dictionary.value)
            }
            (Edge::ReferenceTarget, ConstrainedKind::Reference(reference)) => {
                Some(&mut reference.ref_model)
            }
            _ => None,
        };

        match slot {
            Some(slot) => *slot = target,
            None => panic!("node {id} has no edge {edge:?}"),
        }
    }

    /// Allocate an Any placeholder standing in for `target`.
    ///
    /// The placeholder copies the target's name, original input and options
    /// and starts out untyped.
    pub fn widen(&mut self, target: ConstrainedId) -> ConstrainedId {
        let source = self.get(target);
        let placeholder = ConstrainedModel::new(
            source.name.clone(),
            source.original_input.clone(),
            source.options.clone(),
            ConstrainedKind::Any,
        );
        self.alloc(placeholder)
    }
}
