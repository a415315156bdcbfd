//! Structural compiler from annotated GraphQL type schemas to an abstract
//! relational schema description.
//!
//! The entry point is [`Compiler`]: it walks every data object type of a
//! [`Schema`](gqlrel_schema::Schema), resolves each field into a column
//! descriptor, synthesizes many-to-many join tables, accumulates indexes,
//! and finally backfills foreign-key targets. The result is an
//! [`AbstractDatabase`](model::AbstractDatabase) ready for a DDL emitter.
//!
//! Malformed input never aborts a build. Problems are reported to a
//! [`DiagnosticSink`](obs::DiagnosticSink) and the offending field or
//! relation is dropped.

pub mod annotation;
pub mod build;
pub mod config;
pub mod error;
pub mod model;
pub mod naming;
pub mod obs;
pub mod scalar;

#[cfg(any(test, feature = "testing"))]
pub mod test_support;

pub use build::Compiler;
pub use error::Error;

///
/// CONSTANTS
///

/// Annotation namespace read from type and field documentation.
pub const ANNOTATION_NAMESPACE: &str = "db";

/// Field conventionally used as primary key and many-to-many linkage key.
pub const IDENTITY_FIELD: &str = "id";

/// Scalar type that makes the identity field a primary key by default.
pub const IDENTITY_SCALAR: &str = "ID";

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        annotation::{AnnotationReader, Annotations},
        build::Compiler,
        config::BuildOptions,
        model::{AbstractDatabase, Column, Descriptor, ForeignKey, Index, Table, TypeTag},
        obs::{CollectingSink, Diagnostic, DiagnosticKind, DiagnosticSink, TracingSink},
        scalar::ScalarResolver,
    };
}
