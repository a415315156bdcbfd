//! Observability: diagnostics emitted while compiling and the sinks that
//! receive them.
//!
//! Build passes only emit `debug` events themselves. Every warning flows
//! through a [`Diagnostic`] and a [`DiagnosticSink`].

mod diagnostic;
mod sink;

pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use sink::{CollectingSink, DiagnosticSink, TracingSink};
