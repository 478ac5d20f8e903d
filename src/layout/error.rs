//! Error types for the layout engine

use thiserror::Error;

/// A room or part that could not be positioned.
///
/// Resolution never aborts on these; they are collected into
/// [`crate::Resolution::errors`] alongside the entries that did resolve.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The entry's attachment target was never resolved.
    ///
    /// A target that does not exist and a target whose chain cycles back are
    /// indistinguishable to the fixed-point algorithm: both simply never
    /// leave the worklist, so both get this error.
    #[error("'{name}' could not be positioned. Referenced room '{reference}' not found or circular dependency detected.")]
    Unresolvable { name: String, reference: String },
}

impl ResolveError {
    pub fn unresolvable(name: impl Into<String>, reference: impl Into<String>) -> Self {
        Self::Unresolvable {
            name: name.into(),
            reference: reference.into(),
        }
    }

    /// The identifier of the entry that failed to resolve.
    pub fn name(&self) -> &str {
        match self {
            Self::Unresolvable { name, .. } => name,
        }
    }

    /// The reference that blocked it.
    pub fn reference(&self) -> &str {
        match self {
            Self::Unresolvable { reference, .. } => reference,
        }
    }
}

/// Errors from composite outline tracing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OutlineError {
    /// The rectangles do not form one connected region.
    ///
    /// Also raised for rectangles touching only at a single point: a point
    /// contact shares no edge segment, so the shapes stay separate loops.
    #[error("composite shape is not a single connected region ({loops} separate boundary loops)")]
    Disconnected { loops: usize },
}
