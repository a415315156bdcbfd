use crate::config::ConfigError;
use gqlrel_schema::SchemaError;
use thiserror::Error as ThisError;

///
/// Error
///
/// Boundary errors. Compilation itself never fails; only loading inputs can.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Schema(#[from] SchemaError),
}
