//! Deterministic textual dump of a constrained graph.
//!
//! Nodes are listed in allocation order, one header line per node followed
//! by an indented line per outgoing edge or enum entry:
//!
//! ```text
//! #0 object Person: Person
//!   name -> #1
//!   self -> #2 optional
//! #1 string name: string
//! #2 reference self: Person -> #0
//! ```

use std::fmt::{self, Write};

use morphgen_ir::SerializationType;

use super::{
    ConstrainedGraph, ConstrainedId, ConstrainedKind, ConstrainedModel, ConstrainedProperties,
};

/// Declarative formatter for a [`ConstrainedGraph`].
#[derive(Debug, Clone)]
pub struct GraphDisplay<'a> {
    graph: &'a ConstrainedGraph,
    indent_str: &'a str,
}

impl<'a> GraphDisplay<'a> {
    pub fn new(graph: &'a ConstrainedGraph) -> Self {
        Self {
            graph,
            indent_str: "  ",
        }
    }

    /// Set the indentation string (default: two spaces).
    pub fn indent(mut self, indent: &'a str) -> Self {
        self.indent_str = indent;
        self
    }

    /// Render the graph to a string.
    pub fn render(&self) -> String {
        let mut output = String::new();
        for (id, model) in self.graph.iter() {
            self.render_node(&mut output, id, model);
        }
        output
    }

    fn render_node(&self, out: &mut String, id: ConstrainedId, model: &ConstrainedModel) {
        let _ = write!(out, "{} {} {}", id, model.kind(), model.name);
        if let Some(ty) = &model.ty {
            let _ = write!(out, ": {}", ty);
        }
        if model.options.is_nullable {
            out.push_str(" nullable");
        }
        if let Some(value) = model.options.constant.as_ref().and_then(|c| c.value.as_ref()) {
            let _ = write!(out, " = {}", value);
        }
        if let Some(discriminator) = &model.options.discriminator {
            let _ = write!(out, " [discriminator {}", discriminator.discriminator);
            if let Some(ty) = &discriminator.ty {
                let _ = write!(out, ": {}", ty);
            }
            out.push(']');
        }
        match &model.kind {
            ConstrainedKind::Reference(reference) => {
                let _ = write!(out, " -> {}", reference.ref_model);
            }
            ConstrainedKind::Dictionary(dictionary)
                if dictionary.serialization_type == SerializationType::Unwrap =>
            {
                out.push_str(" unwrap");
            }
            _ => {}
        }
        out.push('\n');

        let indent = self.indent_str;
        match &model.kind {
            ConstrainedKind::Object(object) => self.render_properties(out, &object.properties),
            ConstrainedKind::Union(union) => {
                for member in &union.union {
                    let _ = writeln!(out, "{indent}| {}", member);
                }
                self.render_properties(out, &union.properties);
            }
            ConstrainedKind::Array(array) => {
                let _ = writeln!(out, "{indent}[] -> {}", array.value_model);
            }
            ConstrainedKind::Tuple(tuple) => {
                for slot in &tuple.tuple {
                    let _ = writeln!(out, "{indent}{} -> {}", slot.index, slot.value);
                }
            }
            ConstrainedKind::Dictionary(dictionary) => {
                let _ = writeln!(out, "{indent}key -> {}", dictionary.key);
                let _ = writeln!(out, "{indent}value -> {}", dictionary.value);
            }
            ConstrainedKind::Enum(enumeration) => {
                for value in &enumeration.values {
                    let _ = writeln!(out, "{indent}{} = {}", value.key, value.value);
                }
            }
            ConstrainedKind::Reference(_)
            | ConstrainedKind::String
            | ConstrainedKind::Integer
            | ConstrainedKind::Float
            | ConstrainedKind::Boolean
            | ConstrainedKind::Any => {}
        }
        for parent in &model.options.extend {
            let _ = writeln!(out, "{indent}extends {}", parent);
        }
    }

    fn render_properties(&self, out: &mut String, properties: &ConstrainedProperties) {
        for (key, property) in properties {
            let _ = write!(out, "{}{} -> {}", self.indent_str, key, property.property);
            if !property.required {
                out.push_str(" optional");
            }
            if property.unconstrained_property_name != *key {
                let _ = write!(out, " (from {})", property.unconstrained_property_name);
            }
            out.push('\n');
        }
    }
}

impl fmt::Display for GraphDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let output = self.render();
        write!(f, "{}", output.trim_end())
    }
}

impl ConstrainedGraph {
    /// Formatter for a deterministic textual dump of this graph.
    pub fn display(&self) -> GraphDisplay<'_> {
        GraphDisplay::new(self)
    }
}
