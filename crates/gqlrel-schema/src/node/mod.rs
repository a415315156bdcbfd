mod r#enum;
mod field;
mod object;
mod scalar;
mod type_ref;
mod union;

// pub use all node types
pub use self::r#enum::*;
pub use self::field::*;
pub use self::object::*;
pub use self::scalar::*;
pub use self::type_ref::*;
pub use self::union::*;

use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// TypeKind
/// Category of a named type, used for resolver dispatch.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum TypeKind {
    Enum,
    InputObject,
    Interface,
    Object,
    Scalar,
    Union,
}

///
/// NamedType
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NamedType {
    Enum(EnumType),
    InputObject(ObjectType),
    Interface(ObjectType),
    Object(ObjectType),
    Scalar(ScalarType),
    Union(UnionType),
}

impl NamedType {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Enum(node) => &node.name,
            Self::InputObject(node) | Self::Interface(node) | Self::Object(node) => &node.name,
            Self::Scalar(node) => &node.name,
            Self::Union(node) => &node.name,
        }
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Enum(node) => node.description.as_deref(),
            Self::InputObject(node) | Self::Interface(node) | Self::Object(node) => {
                node.description.as_deref()
            }
            Self::Scalar(node) => node.description.as_deref(),
            Self::Union(node) => node.description.as_deref(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> TypeKind {
        match self {
            Self::Enum(_) => TypeKind::Enum,
            Self::InputObject(_) => TypeKind::InputObject,
            Self::Interface(_) => TypeKind::Interface,
            Self::Object(_) => TypeKind::Object,
            Self::Scalar(_) => TypeKind::Scalar,
            Self::Union(_) => TypeKind::Union,
        }
    }

    /// Fields declared by the type, for the categories that have any.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        match self {
            Self::InputObject(node) | Self::Interface(node) | Self::Object(node) => &node.fields,
            Self::Enum(_) | Self::Scalar(_) | Self::Union(_) => &[],
        }
    }

    #[must_use]
    pub const fn as_object(&self) -> Option<&ObjectType> {
        match self {
            Self::Object(node) => Some(node),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_enum(&self) -> Option<&EnumType> {
        match self {
            Self::Enum(node) => Some(node),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_scalar(&self) -> Option<&ScalarType> {
        match self {
            Self::Scalar(node) => Some(node),
            _ => None,
        }
    }
}

impl From<EnumType> for NamedType {
    fn from(node: EnumType) -> Self {
        Self::Enum(node)
    }
}

impl From<ObjectType> for NamedType {
    fn from(node: ObjectType) -> Self {
        Self::Object(node)
    }
}

impl From<ScalarType> for NamedType {
    fn from(node: ScalarType) -> Self {
        Self::Scalar(node)
    }
}

impl From<UnionType> for NamedType {
    fn from(node: UnionType) -> Self {
        Self::Union(node)
    }
}
