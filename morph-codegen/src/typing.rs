//! Type assignment steps shared by the factory and the resolution pass.

use eyre::Result;
use tracing::debug;

use crate::{
    constrained::{ConstrainedGraph, ConstrainedId, ConstrainedKind, Edge, GraphNote},
    constraints::ConstantContext,
    generation::DependencyManager,
    language::{Language, TypeContext, map_type},
};

/// Compute and store the type of `id`.
pub(crate) fn assign_type<L: Language + ?Sized>(
    language: &L,
    graph: &mut ConstrainedGraph,
    id: ConstrainedId,
    dependencies: &mut DependencyManager,
) {
    let ty = {
        let mut ctx = TypeContext {
            graph: &*graph,
            id,
            options: language.options(),
            dependencies,
        };
        map_type(language.type_mapping(), &mut ctx)
    };
    graph.get_mut(id).ty = Some(ty);
}

/// Format the constant of `id`, if it has one.
pub(crate) fn format_constant<L: Language + ?Sized>(
    language: &L,
    graph: &mut ConstrainedGraph,
    id: ConstrainedId,
) -> Result<()> {
    if graph.get(id).options.constant.is_none() {
        return Ok(());
    }
    let value = language.constraints().constant(&ConstantContext {
        graph: &*graph,
        id,
        options: language.options(),
    })?;
    if let Some(constant) = graph.get_mut(id).options.constant.as_mut() {
        constant.value = value;
    }
    Ok(())
}

/// Point `edge` of `from` at a typed Any placeholder standing in for `target`.
pub(crate) fn widen_edge<L: Language + ?Sized>(
    language: &L,
    graph: &mut ConstrainedGraph,
    dependencies: &mut DependencyManager,
    from: ConstrainedId,
    edge: Edge,
    target: ConstrainedId,
) -> Result<ConstrainedId> {
    let placeholder = graph.widen(target);
    assign_type(language, graph, placeholder, dependencies);
    format_constant(language, graph, placeholder)?;
    graph.set_edge(from, edge, placeholder);
    graph.push_note(GraphNote::Widened {
        from,
        target,
        placeholder,
    });
    debug!(
        from = %from,
        target = %target,
        placeholder = %placeholder,
        name = %graph.get(placeholder).name,
        "widened cyclic edge to any"
    );
    Ok(placeholder)
}

/// Record the type shared by the discriminator property of every member.
///
/// Only Reference members pointing at Objects take part. The type is left
/// unset if any of those objects lacks the property or the types disagree;
/// members that have the property do not decide the type on their own.
pub(crate) fn resolve_discriminator(graph: &mut ConstrainedGraph, id: ConstrainedId) {
    let model = graph.get(id);
    let (ConstrainedKind::Union(union), Some(discriminator)) =
        (&model.kind, &model.options.discriminator)
    else {
        return;
    };

    let mut shared: Option<&str> = None;
    let mut consistent = true;
    for member in &union.union {
        let ConstrainedKind::Reference(reference) = &graph.get(*member).kind else {
            continue;
        };
        let ConstrainedKind::Object(object) = &graph.get(reference.ref_model).kind else {
            continue;
        };
        let ty = object
            .property_by_unconstrained_name(&discriminator.discriminator)
            .and_then(|property| graph.get(property.property).ty.as_deref());
        match (shared, ty) {
            (_, None) => consistent = false,
            (None, Some(ty)) => shared = Some(ty),
            (Some(previous), Some(ty)) if previous != ty => consistent = false,
            _ => {}
        }
        if !consistent {
            break;
        }
    }

    let resolved = shared.filter(|_| consistent).map(str::to_string);
    if let Some(discriminator) = graph.get_mut(id).options.discriminator.as_mut() {
        discriminator.ty = resolved;
    }
}
