use serde::{Deserialize, Serialize};

///
/// ForeignKey
///
/// Reference from a column to a field of another source type. `table_name`
/// and `column_name` stay `None` until the backfill pass resolves them, and
/// remain `None` when the target was never built.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForeignKey {
    /// Referenced source type name.
    #[serde(rename = "type")]
    pub type_name: String,

    /// Referenced source field name.
    pub field: String,

    pub table_name: Option<String>,
    pub column_name: Option<String>,
}

impl ForeignKey {
    #[must_use]
    pub fn new(type_name: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            field: field.into(),
            table_name: None,
            column_name: None,
        }
    }

    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.table_name.is_some() && self.column_name.is_some()
    }
}
