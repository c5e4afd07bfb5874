//! Cyclic-resolution pass.
//!
//! Assigns types to a graph built by a language that does not resolve types
//! eagerly. Every node is in one of three states while the pass walks the
//! graph: unvisited, in progress or resolved. Following an edge into a node
//! that is still in progress means the edge closes a cycle that the type
//! mapping cannot express, so the edge is redirected to an Any placeholder
//! carrying the target's name.

use std::collections::HashMap;

use eyre::Result;
use tracing::{debug, trace};

use crate::{
    constrained::{ConstrainedGraph, ConstrainedId},
    generation::DependencyManager,
    language::Language,
    typing::{assign_type, format_constant, resolve_discriminator, widen_edge},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    InProgress,
    Resolved,
}

/// Assign a type to every node of `graph`.
///
/// Walks from the root first, then sweeps any node the root does not reach,
/// in allocation order.
pub fn apply_types<L: Language + ?Sized>(
    language: &L,
    graph: &mut ConstrainedGraph,
    dependencies: &mut DependencyManager,
) -> Result<()> {
    debug!(
        language = language.name(),
        nodes = graph.len(),
        "applying types"
    );

    let root = graph.root();
    let pending: Vec<ConstrainedId> = graph.iter().map(|(id, _)| id).collect();
    let mut resolver = Resolver {
        language,
        graph,
        dependencies,
        states: HashMap::new(),
    };

    if root != ConstrainedId::DANGLING {
        resolver.walk(root)?;
    }
    for id in pending {
        if !resolver.states.contains_key(&id) {
            resolver.walk(id)?;
        }
    }

    debug!(nodes = resolver.graph.len(), "types applied");
    Ok(())
}

struct Resolver<'a, L: Language + ?Sized> {
    language: &'a L,
    graph: &'a mut ConstrainedGraph,
    dependencies: &'a mut DependencyManager,
    states: HashMap<ConstrainedId, State>,
}

impl<L: Language + ?Sized> Resolver<'_, L> {
    fn walk(&mut self, id: ConstrainedId) -> Result<()> {
        if self.states.contains_key(&id) {
            return Ok(());
        }
        self.states.insert(id, State::InProgress);

        let safe = self.language.is_safe(self.graph.get(id).kind());
        if safe {
            self.assign_type(id);
            format_constant(self.language, self.graph, id)?;
            self.states.insert(id, State::Resolved);
            trace!(node = %id, ty = self.graph.get(id).ty(), "typed safe node");
        }

        for (edge, child) in self.graph.edges(id) {
            match self.states.get(&child) {
                Some(State::Resolved) => {}
                Some(State::InProgress) => {
                    let placeholder = widen_edge(
                        self.language,
                        self.graph,
                        self.dependencies,
                        id,
                        edge,
                        child,
                    )?;
                    self.states.insert(placeholder, State::Resolved);
                }
                None => self.walk(child)?,
            }
        }

        if self.graph.get(id).ty.is_none() {
            self.assign_type(id);
        }
        self.states.insert(id, State::Resolved);
        if !safe {
            format_constant(self.language, self.graph, id)?;
        }
        resolve_discriminator(self.graph, id);
        Ok(())
    }

    fn assign_type(&mut self, id: ConstrainedId) {
        assign_type(self.language, self.graph, id, self.dependencies);
    }
}
