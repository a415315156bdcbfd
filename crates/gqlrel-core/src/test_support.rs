//! Helpers for exercising the compiler without a real annotation parser.
//!
//! [`DocReader`] understands one annotation per line, written as
//! `@<namespace>.<key>: <value>`. The value is read as JSON when it parses
//! and as a bare string otherwise.

use crate::annotation::{AnnotationReader, Annotations};
use gqlrel_schema::{Field, ObjectType, TypeRef};
use serde_json::Value;

///
/// DocReader
///

#[derive(Clone, Copy, Debug, Default)]
pub struct DocReader;

impl DocReader {
    fn directive<'t>(namespace: &str, line: &'t str) -> Option<(&'t str, &'t str)> {
        let rest = line.trim().strip_prefix('@')?;
        let rest = rest.strip_prefix(namespace)?.strip_prefix('.')?;
        let (key, value) = rest.split_once(':')?;

        Some((key.trim(), value.trim()))
    }
}

impl AnnotationReader for DocReader {
    fn parse(&self, namespace: &str, text: Option<&str>) -> Annotations {
        text.into_iter()
            .flat_map(str::lines)
            .filter_map(|line| Self::directive(namespace, line))
            .map(|(key, raw)| {
                let value: Value = serde_json::from_str(raw).unwrap_or_else(|_| raw.into());
                (key, value)
            })
            .collect()
    }

    fn strip(&self, text: Option<&str>) -> Option<String> {
        let kept: Vec<&str> = text?
            .lines()
            .filter(|line| !line.trim_start().starts_with('@'))
            .collect();
        let comment = kept.join("\n").trim().to_string();

        (!comment.is_empty()).then_some(comment)
    }
}

/// Object type with an optional documentation string.
#[must_use]
pub fn object(name: &str, doc: &str, fields: Vec<Field>) -> ObjectType {
    let mut object = ObjectType::new(name);
    if !doc.is_empty() {
        object = object.with_description(doc);
    }
    object.fields = fields;

    object
}

/// Field with an optional documentation string.
#[must_use]
pub fn field(name: &str, ty: TypeRef, doc: &str) -> Field {
    let field = Field::new(name, ty);
    if doc.is_empty() {
        field
    } else {
        field.with_description(doc)
    }
}

/// Non-null `id: ID` field.
#[must_use]
pub fn identity() -> Field {
    scalar_field("id", "ID", true)
}

/// Non-null list of non-null `name` elements.
#[must_use]
pub fn list_of(name: &str) -> TypeRef {
    TypeRef::list(TypeRef::named(name).non_null()).non_null()
}

/// Field of a named scalar, enum or object type.
#[must_use]
pub fn scalar_field(name: &str, ty: &str, non_null: bool) -> Field {
    let ty = TypeRef::named(ty);
    field(name, if non_null { ty.non_null() } else { ty }, "")
}
