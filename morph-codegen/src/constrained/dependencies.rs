//! Direct model dependencies of a rendered artifact.

use std::collections::HashSet;

use super::{ConstrainedGraph, ConstrainedId, ConstrainedKind};

impl ConstrainedGraph {
    /// Reference nodes that `id` depends on directly.
    ///
    /// Nested non-reference children (an array of references, an inline
    /// union, ...) are looked through. The result keeps first-seen order, holds
    /// at most one reference per target and never contains a reference back
    /// to `id` itself.
    pub fn nearest_dependencies(&self, id: ConstrainedId) -> Vec<ConstrainedId> {
        let mut visited = HashSet::new();
        let mut found = Vec::new();
        self.collect_dependencies(id, &mut visited, &mut found);

        let mut targets = HashSet::new();
        found.retain(|reference| {
            let target = self.reference_target(*reference);
            target != Some(id) && targets.insert(target)
        });
        found
    }

    fn collect_dependencies(
        &self,
        id: ConstrainedId,
        visited: &mut HashSet<ConstrainedId>,
        found: &mut Vec<ConstrainedId>,
    ) {
        visited.insert(id);
        for (_, child) in self.edges(id) {
            if matches!(self.get(child).kind, ConstrainedKind::Reference(_)) {
                found.push(child);
            } else if !visited.contains(&child) {
                self.collect_dependencies(child, visited, found);
            }
        }
    }

    fn reference_target(&self, id: ConstrainedId) -> Option<ConstrainedId> {
        match &self.get(id).kind {
            ConstrainedKind::Reference(reference) => Some(reference.ref_model),
            _ => None,
        }
    }
}
