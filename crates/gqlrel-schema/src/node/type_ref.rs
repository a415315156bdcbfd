use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

///
/// TypeRef
///
/// A reference to a named type, optionally wrapped in list and non-null
/// modifiers. `[Post!]!` is `NonNull(List(NonNull(Named("Post"))))`.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeRef {
    List(Box<Self>),
    Named(String),
    NonNull(Box<Self>),
}

impl TypeRef {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    #[must_use]
    pub fn list(inner: Self) -> Self {
        Self::List(Box::new(inner))
    }

    /// Wrap in a non-null modifier. Already non-null references are returned as is.
    #[must_use]
    pub fn non_null(self) -> Self {
        match self {
            Self::NonNull(_) => self,
            other => Self::NonNull(Box::new(other)),
        }
    }

    #[must_use]
    pub const fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }

    /// Strip one outer non-null modifier, if present.
    #[must_use]
    pub fn nullable(&self) -> &Self {
        match self {
            Self::NonNull(inner) => inner,
            other => other,
        }
    }

    /// Element type when this reference is a list (after stripping non-null).
    #[must_use]
    pub fn list_element(&self) -> Option<&Self> {
        match self.nullable() {
            Self::List(inner) => Some(inner),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_list(&self) -> bool {
        self.list_element().is_some()
    }

    /// Name of the innermost named type.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::List(inner) | Self::NonNull(inner) => inner.name(),
        }
    }

    /// The named type when the reference carries no list wrapping.
    #[must_use]
    pub fn as_named(&self) -> Option<&str> {
        match self.nullable() {
            Self::Named(name) => Some(name),
            _ => None,
        }
    }
}

impl Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::Named(name) => f.write_str(name),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}
