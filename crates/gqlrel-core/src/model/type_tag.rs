use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

///
/// TypeTag
///
/// Storage type of a column. Known tags come from the builtin scalar table;
/// explicit `type` annotations and custom resolvers may produce any other
/// tag, carried as `Custom`.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(from = "String", into = "String")]
#[remain::sorted]
pub enum TypeTag {
    BigInteger,
    Binary,
    Boolean,
    Custom(String),
    Date,
    Decimal,
    Enum,
    Float,
    Integer,
    Json,
    String,
    Text,
    Time,
    Timestamp,
    Uuid,
}

impl TypeTag {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::BigInteger => "bigInteger",
            Self::Binary => "binary",
            Self::Boolean => "boolean",
            Self::Custom(tag) => tag,
            Self::Date => "date",
            Self::Decimal => "decimal",
            Self::Enum => "enum",
            Self::Float => "float",
            Self::Integer => "integer",
            Self::Json => "json",
            Self::String => "string",
            Self::Text => "text",
            Self::Time => "time",
            Self::Timestamp => "timestamp",
            Self::Uuid => "uuid",
        }
    }
}

impl From<&str> for TypeTag {
    fn from(tag: &str) -> Self {
        match tag {
            "bigInteger" => Self::BigInteger,
            "binary" => Self::Binary,
            "boolean" => Self::Boolean,
            "date" => Self::Date,
            "decimal" => Self::Decimal,
            "enum" => Self::Enum,
            "float" => Self::Float,
            "integer" => Self::Integer,
            "json" => Self::Json,
            "string" => Self::String,
            "text" => Self::Text,
            "time" => Self::Time,
            "timestamp" => Self::Timestamp,
            "uuid" => Self::Uuid,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl From<String> for TypeTag {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl From<TypeTag> for String {
    fn from(tag: TypeTag) -> Self {
        match tag {
            TypeTag::Custom(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
