use crate::annotation::keys;
use serde::{Deserialize, Serialize};

///
/// IndexKind
///
/// The three index groups a table accumulates. Each kind is driven by its
/// own annotation key.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IndexKind {
    Index,
    Primary,
    Unique,
}

impl IndexKind {
    pub const ALL: [Self; 3] = [Self::Index, Self::Primary, Self::Unique];

    #[must_use]
    pub const fn annotation_key(self) -> &'static str {
        match self {
            Self::Index => keys::INDEX,
            Self::Primary => keys::PRIMARY,
            Self::Unique => keys::UNIQUE,
        }
    }

    /// Maximum number of entries in the table's list for this kind.
    #[must_use]
    pub const fn capacity(self) -> Option<usize> {
        match self {
            Self::Primary => Some(1),
            Self::Index | Self::Unique => None,
        }
    }

    /// Only general indexes carry an index type tag.
    #[must_use]
    pub const fn has_type(self) -> bool {
        matches!(self, Self::Index)
    }

    /// Generated name for an index created from one column.
    #[must_use]
    pub fn default_name(self, table: &str, column: &str) -> String {
        let suffix = match self {
            Self::Index => "index",
            Self::Primary => "primary",
            Self::Unique => "unique",
        };

        format!("{table}_{column}_{suffix}")
    }
}

///
/// Index
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Index {
    pub name: String,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub index_type: Option<String>,

    pub columns: Vec<String>,
}

impl Index {
    #[must_use]
    pub const fn new(name: String, index_type: Option<String>) -> Self {
        Self {
            name,
            index_type,
            columns: Vec::new(),
        }
    }

    /// Append a column, keeping repeated membership out.
    pub fn push_column(&mut self, column: &str) {
        if !self.columns.iter().any(|c| c == column) {
            self.columns.push(column.to_string());
        }
    }
}
