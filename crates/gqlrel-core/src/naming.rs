//! Identifier synthesis.
//!
//! One naming policy is applied to every derived table and column name.
//! Index names are always lowercased and bounded by [`MAX_INDEX_NAME_LEN`];
//! table and column names are not truncated.

use convert_case::{Case, Casing};

/// Maximum length of a generated or supplied index name.
pub const MAX_INDEX_NAME_LEN: usize = 63;

/// Suffix for object-reference columns (`author` -> `author_foreign`).
pub const FOREIGN_SUFFIX: &str = "_foreign";

/// Suffix appended when a column name is already taken in its table.
pub const COLLISION_SUFFIX: &str = "_other";

/// Separator between the two sides of a join table name.
pub const JOIN_SEPARATOR: &str = "_join_";

///
/// Naming
///

#[derive(Clone, Copy, Debug)]
pub struct Naming {
    normalize: bool,
}

impl Naming {
    #[must_use]
    pub const fn new(normalize: bool) -> Self {
        Self { normalize }
    }

    #[must_use]
    pub fn table(&self, name: &str) -> String {
        self.normalize(name)
    }

    #[must_use]
    pub fn column(&self, name: &str) -> String {
        self.normalize(name)
    }

    #[must_use]
    pub fn foreign_column(&self, field: &str) -> String {
        self.normalize(&format!("{field}{FOREIGN_SUFFIX}"))
    }

    /// Canonical join table name for two `(type, field)` sides. The sides are
    /// sorted so both directions of a relation agree on one name.
    #[must_use]
    pub fn join_table(&self, a: (&str, &str), b: (&str, &str)) -> String {
        let mut sides = [format!("{}_{}", a.0, a.1), format!("{}_{}", b.0, b.1)];
        sides.sort();

        self.normalize(&sides.join(JOIN_SEPARATOR))
    }

    fn normalize(&self, name: &str) -> String {
        if self.normalize {
            name.to_lowercase()
        } else {
            name.to_string()
        }
    }
}

impl Default for Naming {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Lowercase and bound an index name.
#[must_use]
pub fn index_name(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .take(MAX_INDEX_NAME_LEN)
        .collect()
}

/// Default enum name for an enum type (`OrderStatus` -> `orderStatus`).
#[must_use]
pub fn enum_name(type_name: &str) -> String {
    type_name.to_case(Case::Camel)
}

/// First free name starting at `name`, appending [`COLLISION_SUFFIX`] until
/// `taken` reports it unused.
#[must_use]
pub fn dedupe(mut name: String, taken: impl Fn(&str) -> bool) -> String {
    while taken(&name) {
        name.push_str(COLLISION_SUFFIX);
    }

    name
}
