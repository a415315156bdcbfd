use derive_more::Display;
use serde::Serialize;
use std::fmt::{self, Display};

///
/// DiagnosticKind
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq, Serialize)]
#[remain::sorted]
pub enum DiagnosticKind {
    /// Mirrored foreign fields reference each other in a loop.
    CircularReference,
    /// Two tables ended up with the same name.
    DuplicateTableName,
    /// Referenced field does not exist on the target type.
    ForeignFieldMissing,
    /// Referenced type does not exist in the schema.
    ForeignTypeMissing,
    /// Referenced type exists but is not an object type.
    ForeignTypeNotObject,
    /// A list-of-object field was used as a foreign key target.
    ListReference,
    /// The referenced field could not be resolved into a column.
    MirrorFailed,
    /// Reciprocal many-to-many field declares a different partner.
    ReciprocalMismatch,
    /// Foreign key target table or column was not built.
    UnresolvedForeignKey,
    /// List of scalars or enums with list-to-JSON mapping disabled.
    UnsupportedList,
    /// No resolver produced a descriptor for the scalar.
    UnsupportedScalar,
    /// Field type category cannot be stored.
    UnsupportedType,
}

///
/// Diagnostic
///
/// One human-readable warning tied to the offending type and field.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub type_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,

    pub message: String,
}

impl Diagnostic {
    #[must_use]
    pub fn new(
        kind: DiagnosticKind,
        type_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            type_name: type_name.into(),
            field_name: None,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn field(
        kind: DiagnosticKind,
        type_name: impl Into<String>,
        field_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            type_name: type_name.into(),
            field_name: Some(field_name.into()),
            message: message.into(),
        }
    }

    /// `Type.field` or `Type` location string.
    #[must_use]
    pub fn location(&self) -> String {
        match &self.field_name {
            Some(field) => format!("{}.{field}", self.type_name),
            None => self.type_name.clone(),
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_includes_field_when_present() {
        let diag = Diagnostic::field(DiagnosticKind::UnsupportedScalar, "User", "avatar", "msg");
        assert_eq!(diag.location(), "User.avatar");

        let diag = Diagnostic::new(DiagnosticKind::DuplicateTableName, "User", "msg");
        assert_eq!(diag.location(), "User");
    }

    #[test]
    fn display_is_the_message() {
        let diag = Diagnostic::new(DiagnosticKind::DuplicateTableName, "User", "duplicate");
        assert_eq!(diag.to_string(), "duplicate");
        assert_eq!(diag.kind.to_string(), "DuplicateTableName");
    }
}
