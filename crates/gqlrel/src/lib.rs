//! ## Crate layout
//! - `core`: the compiler, output model, options and diagnostics.
//! - `schema`: the input type-system description.
//!
//! ```ignore
//! use gqlrel::prelude::*;
//!
//! let schema = Schema::from_json(&json)?;
//! let sink = CollectingSink::new();
//! let db = Compiler::new(&schema, &reader).with_sink(&sink).compile();
//! ```

pub use gqlrel_core as core;
pub use gqlrel_schema as schema;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use gqlrel_core::{Compiler, Error};

///
/// Prelude
///

pub mod prelude {
    pub use gqlrel_core::prelude::*;
    pub use gqlrel_schema::prelude::*;
}
