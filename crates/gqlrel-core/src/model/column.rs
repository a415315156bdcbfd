use crate::{
    annotation::Annotations,
    model::{ForeignKey, TypeTag},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

///
/// Descriptor
///
/// Storage representation of a field, independent of nullability and
/// naming: a type tag plus its ordered arguments.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Descriptor {
    #[serde(rename = "type")]
    pub ty: TypeTag,

    #[serde(default)]
    pub args: Vec<Value>,
}

impl Descriptor {
    #[must_use]
    pub fn new(ty: impl Into<TypeTag>) -> Self {
        Self {
            ty: ty.into(),
            args: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_args(ty: impl Into<TypeTag>, args: Vec<Value>) -> Self {
        Self {
            ty: ty.into(),
            args,
        }
    }
}

///
/// Column
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub name: String,

    /// Source field the column was produced from, recorded on insertion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    pub comment: Option<String>,
    pub annotations: Annotations,

    #[serde(rename = "type")]
    pub ty: TypeTag,

    pub args: Vec<Value>,
    pub nullable: bool,
    pub foreign: Option<ForeignKey>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
}

impl Column {
    #[must_use]
    pub fn descriptor(&self) -> Descriptor {
        Descriptor {
            ty: self.ty.clone(),
            args: self.args.clone(),
        }
    }
}
