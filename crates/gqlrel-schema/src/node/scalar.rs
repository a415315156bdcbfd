use serde::{Deserialize, Serialize};

///
/// ScalarType
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ScalarType {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ScalarType {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }
}
