//! Derivable trait analysis.
//!
//! Decides which standard traits a generated Rust type can `#[derive]`,
//! given the types its fields, members or slots end up with. Cycles are
//! cut by a visited set: a model already on the current walk is assumed to
//! derive the trait, so the answer is decided by the rest of the graph.

use std::collections::HashSet;

use morphgen_codegen::constrained::{ConstrainedGraph, ConstrainedId, ConstrainedKind};
use tracing::trace;

/// A derivable standard trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeriveTrait {
    Hash,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
}

impl DeriveTrait {
    pub const ALL: [DeriveTrait; 6] = [
        DeriveTrait::Hash,
        DeriveTrait::Copy,
        DeriveTrait::PartialEq,
        DeriveTrait::Eq,
        DeriveTrait::PartialOrd,
        DeriveTrait::Ord,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeriveTrait::Hash => "Hash",
            DeriveTrait::Copy => "Copy",
            DeriveTrait::PartialEq => "PartialEq",
            DeriveTrait::Eq => "Eq",
            DeriveTrait::PartialOrd => "PartialOrd",
            DeriveTrait::Ord => "Ord",
        }
    }

    /// The trait that must be derivable first.
    fn supertrait(&self) -> Option<DeriveTrait> {
        match self {
            DeriveTrait::Eq => Some(DeriveTrait::PartialEq),
            DeriveTrait::Ord => Some(DeriveTrait::PartialOrd),
            _ => None,
        }
    }

    /// Whether a model of `kind` can never implement this trait.
    fn blocked_by(&self, kind: &ConstrainedKind) -> bool {
        match self {
            // f64 and HashMap do not implement Hash
            DeriveTrait::Hash => matches!(
                kind,
                ConstrainedKind::Dictionary(_) | ConstrainedKind::Float | ConstrainedKind::Any
            ),
            // String, HashMap and boxed references own heap memory
            DeriveTrait::Copy => matches!(
                kind,
                ConstrainedKind::Any
                    | ConstrainedKind::Dictionary(_)
                    | ConstrainedKind::Reference(_)
                    | ConstrainedKind::String
            ),
            DeriveTrait::PartialEq => matches!(kind, ConstrainedKind::Any),
            DeriveTrait::Eq => matches!(kind, ConstrainedKind::Float | ConstrainedKind::Any),
            DeriveTrait::PartialOrd => {
                matches!(kind, ConstrainedKind::Any | ConstrainedKind::Dictionary(_))
            }
            DeriveTrait::Ord => matches!(
                kind,
                ConstrainedKind::Float | ConstrainedKind::Any | ConstrainedKind::Dictionary(_)
            ),
        }
    }
}

impl std::fmt::Display for DeriveTrait {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Check if the type generated for `id` can derive `derive`.
pub fn can_derive(graph: &ConstrainedGraph, id: ConstrainedId, derive: DeriveTrait) -> bool {
    can_derive_inner(graph, id, derive, &mut HashSet::new())
}

/// Every trait the type generated for `id` can derive, in [`DeriveTrait::ALL`] order.
pub fn derivable_traits(graph: &ConstrainedGraph, id: ConstrainedId) -> Vec<DeriveTrait> {
    let traits: Vec<DeriveTrait> = DeriveTrait::ALL
        .into_iter()
        .filter(|derive| can_derive(graph, id, *derive))
        .collect();
    trace!(model = %graph.get(id).name, ?traits, "derivable traits");
    traits
}

fn can_derive_inner(
    graph: &ConstrainedGraph,
    id: ConstrainedId,
    derive: DeriveTrait,
    visited: &mut HashSet<ConstrainedId>,
) -> bool {
    if visited.contains(&id) {
        return true;
    }
    if let Some(supertrait) = derive.supertrait()
        && !can_derive_inner(graph, id, supertrait, &mut visited.clone())
    {
        return false;
    }
    visited.insert(id);

    let model = graph.get(id);
    if derive.blocked_by(&model.kind) {
        return false;
    }

    match &model.kind {
        ConstrainedKind::Reference(reference) => {
            can_derive_inner(graph, reference.ref_model, derive, visited)
        }
        ConstrainedKind::Object(object) => object
            .properties
            .values()
            .all(|property| can_derive_inner(graph, property.property, derive, visited)),
        ConstrainedKind::Union(union) => union
            .union
            .iter()
            .all(|member| can_derive_inner(graph, *member, derive, visited)),
        ConstrainedKind::Tuple(tuple) => tuple
            .tuple
            .iter()
            .all(|slot| can_derive_inner(graph, slot.value, derive, visited)),
        ConstrainedKind::Array(array) => {
            can_derive_inner(graph, array.value_model, derive, visited)
        }
        ConstrainedKind::Dictionary(dictionary) => {
            can_derive_inner(graph, dictionary.value, derive, visited)
        }
        // variants carry no data
        ConstrainedKind::Enum(_) => true,
        ConstrainedKind::String
        | ConstrainedKind::Integer
        | ConstrainedKind::Float
        | ConstrainedKind::Boolean
        | ConstrainedKind::Any => true,
    }
}
