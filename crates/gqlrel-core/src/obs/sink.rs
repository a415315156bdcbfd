//! Diagnostic sink boundary.
//!
//! The compiler holds a `&dyn DiagnosticSink` for the duration of a build
//! and calls `report` synchronously; sinks never outlive the build call.

use crate::obs::{Diagnostic, DiagnosticKind};
use std::cell::RefCell;

///
/// DiagnosticSink
///

pub trait DiagnosticSink {
    fn report(&self, diagnostic: Diagnostic);
}

///
/// TracingSink
/// Default sink: forwards every diagnostic as a `tracing` warning.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: Diagnostic) {
        tracing::warn!(
            kind = %diagnostic.kind,
            type_name = %diagnostic.type_name,
            field_name = diagnostic.field_name.as_deref(),
            "{}",
            diagnostic.message
        );
    }
}

///
/// CollectingSink
/// Buffers diagnostics so callers can inspect them after a build.
///

#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl CollectingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.diagnostics.borrow().is_empty()
    }

    /// Number of diagnostics of one kind.
    #[must_use]
    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.kind == kind)
            .count()
    }

    #[must_use]
    pub fn snapshot(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<Diagnostic> {
        self.diagnostics.into_inner()
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn report(&self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}
