use serde::{Deserialize, Serialize};

///
/// UnionType
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct UnionType {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub members: Vec<String>,
}

impl UnionType {
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            description: None,
            members: members.into_iter().map(Into::into).collect(),
        }
    }
}
