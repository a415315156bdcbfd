//! Input type-system description for gqlrel.
//!
//! A [`Schema`] is an ordered collection of named types (objects, enums,
//! scalars and the categories the compiler does not map). Fields carry a
//! [`TypeRef`] describing list and non-null wrapping around a named type,
//! plus an optional documentation string that holds annotations.

pub mod error;
pub mod node;
pub mod schema;

pub use error::SchemaError;
pub use node::*;
pub use schema::{RootTypes, Schema, SchemaBuilder};

/// Prefix reserved for introspection types (`__Type`, `__Schema`, ...).
pub const INTROSPECTION_PREFIX: &str = "__";

/// Scalars every schema defines implicitly.
pub const BUILTIN_SCALARS: [&str; 5] = ["ID", "String", "Int", "Float", "Boolean"];

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        node::{EnumType, EnumValue, Field, NamedType, ObjectType, ScalarType, TypeKind, TypeRef},
        schema::Schema,
    };
}
