//! Diagnostics reported by pipeline phases.
//!
//! Constraining never fails on lossy decisions. A widened cycle or a
//! dictionary key replaced by Any is recorded as a [`GraphNote`] on the graph
//! and surfaces here as a warning located at the artifact it belongs to.

use serde::Serialize;

use crate::constrained::{ConstrainedGraph, GraphNote};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message produced by a phase, optionally tied to a model name.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Name of the phase that reported it.
    pub phase: String,
    pub message: String,
    pub location: Option<String>,
}

impl Diagnostic {
    pub fn new(severity: Severity, phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            phase: phase.into(),
            message: message.into(),
            location: None,
        }
    }

    pub fn error(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, phase, message)
    }

    pub fn warning(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, phase, message)
    }

    pub fn info(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, phase, message)
    }

    /// Warning describing `note`, located at the root model of `graph`.
    pub fn from_note(phase: &str, graph: &ConstrainedGraph, note: &GraphNote) -> Self {
        let message = match note {
            GraphNote::Widened {
                from,
                target,
                placeholder,
            } => format!(
                "cyclic reference from `{}` to `{}` widened to `{}`",
                graph.get(*from).name,
                graph.get(*target).name,
                graph.get(*placeholder).ty.as_deref().unwrap_or("any"),
            ),
            GraphNote::DictionaryKeyFallback { dictionary, key } => format!(
                "union key `{}` of dictionary `{}` constrained as any",
                graph.get(*key).name,
                graph.get(*dictionary).name,
            ),
        };
        Self::warning(phase, message).at(graph.root_model().name.clone())
    }

    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;
        match &self.location {
            Some(location) => write!(f, " (at {location})"),
            None => Ok(()),
        }
    }
}
