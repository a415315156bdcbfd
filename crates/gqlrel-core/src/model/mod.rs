//! Abstract relational schema produced by a build.
//!
//! The model is a pure data artifact: tables in output order, each with
//! ordered columns and index groups. It serializes with camelCase keys for
//! downstream DDL emitters; the lookup maps used while building are
//! rebuilt on demand and never serialized.

mod column;
mod database;
mod foreign;
mod index;
mod table;
mod type_tag;

pub use column::{Column, Descriptor};
pub use database::AbstractDatabase;
pub use foreign::ForeignKey;
pub use index::{Index, IndexKind};
pub use table::Table;
pub use type_tag::TypeTag;
