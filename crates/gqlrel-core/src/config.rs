//! Build configuration.
//!
//! Options can be constructed in code or read from TOML, either at the top
//! level of the document or nested under a `[gqlrel]` table:
//!
//! ```toml
//! [gqlrel]
//! normalize_names = true
//! map_lists_to_json = false
//! ```

use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use thiserror::Error as ThisError;

/// Table name used when options are nested inside a larger config file.
pub const CONFIG_TABLE: &str = "gqlrel";

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid config toml: {0}")]
    Toml(#[from] toml::de::Error),
}

///
/// BuildOptions
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildOptions {
    /// Lowercase derived table and column identifiers.
    #[serde(alias = "normalizeNames")]
    pub normalize_names: bool,

    /// Store lists of scalars or enums as `json` columns instead of
    /// dropping them with a diagnostic.
    #[serde(alias = "mapListsToJson")]
    pub map_lists_to_json: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            normalize_names: true,
            map_lists_to_json: false,
        }
    }
}

impl BuildOptions {
    #[must_use]
    pub const fn with_normalize_names(mut self, normalize: bool) -> Self {
        self.normalize_names = normalize;
        self
    }

    #[must_use]
    pub const fn with_map_lists_to_json(mut self, enabled: bool) -> Self {
        self.map_lists_to_json = enabled;
        self
    }

    /// Parse options from TOML text. A `[gqlrel]` table takes precedence
    /// over top-level keys.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let mut document: toml::Table = toml::from_str(text)?;
        let value = match document.remove(CONFIG_TABLE) {
            Some(nested) => nested,
            None => toml::Value::Table(document),
        };

        Ok(value.try_into()?)
    }

    /// Read options from a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_toml_str(&text)
    }
}
