use thiserror::Error as ThisError;

///
/// SchemaError
///
/// Raised while assembling or loading a [`Schema`](crate::Schema).
///

#[derive(Debug, ThisError)]
pub enum SchemaError {
    #[error("duplicate field '{field}' on type '{type_name}'")]
    DuplicateField { type_name: String, field: String },

    #[error("duplicate type name '{name}'")]
    DuplicateType { name: String },

    #[error("schema json is invalid: {0}")]
    Json(#[from] serde_json::Error),
}
