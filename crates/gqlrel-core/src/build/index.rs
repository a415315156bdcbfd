//! Index accumulation for declared tables.
//!
//! Each column may join a general index, the primary key and any number of
//! unique constraints. Annotation values select the index:
//!
//! - `true`: member of a new index with a generated name
//! - `"name"`: member of the index called `name`, created on first use
//! - `{ "name": .., "type": .. }`: as above; `type` applies to general
//!   indexes only
//! - `false`: not a member; on `primary` it also opts out of the identity
//!   default

use crate::{
    IDENTITY_FIELD, IDENTITY_SCALAR,
    annotation::Annotations,
    model::{Index, IndexKind, Table},
    naming::{self, Naming},
};
use gqlrel_schema::Field;
use serde_json::Value;

///
/// Membership
///

#[derive(Debug, Eq, PartialEq)]
enum Membership {
    Named { name: String, ty: Option<String> },
    Unnamed { ty: Option<String> },
}

pub(super) fn accumulate(
    table: &mut Table,
    field: &Field,
    column: &str,
    annotations: &Annotations,
    naming: Naming,
) {
    for kind in IndexKind::ALL {
        let key = kind.annotation_key();
        if annotations.is_false(key) {
            continue;
        }

        let membership = match annotations.value(key) {
            Some(value) => membership(value),
            None if kind == IndexKind::Primary && is_identity(field, column, naming) => {
                Some(Membership::Unnamed { ty: None })
            }
            None => None,
        };

        if let Some(membership) = membership {
            add(table, kind, column, membership);
        }
    }
}

fn membership(value: &Value) -> Option<Membership> {
    match value {
        Value::Bool(true) => Some(Membership::Unnamed { ty: None }),
        Value::String(name) if !name.is_empty() => Some(Membership::Named {
            name: name.clone(),
            ty: None,
        }),
        Value::Object(spec) => {
            let ty = spec.get("type").and_then(Value::as_str).map(str::to_string);
            match spec.get("name").and_then(Value::as_str) {
                Some(name) if !name.is_empty() => Some(Membership::Named {
                    name: name.to_string(),
                    ty,
                }),
                _ => Some(Membership::Unnamed { ty }),
            }
        }
        _ => None,
    }
}

// The identity field joins the primary key when it is typed as the identity
// scalar.
fn is_identity(field: &Field, column: &str, naming: Naming) -> bool {
    column == naming.column(IDENTITY_FIELD) && field.ty.as_named() == Some(IDENTITY_SCALAR)
}

fn add(table: &mut Table, kind: IndexKind, column: &str, membership: Membership) {
    let (name, ty, merge) = match membership {
        Membership::Named { name, ty } => (naming::index_name(&name), ty, true),
        Membership::Unnamed { ty } => (
            naming::index_name(&kind.default_name(&table.name, column)),
            ty,
            false,
        ),
    };
    let ty = ty.filter(|_| kind.has_type());
    let list = table.index_list_mut(kind);

    if merge && let Some(existing) = list.iter_mut().find(|index| index.name == name) {
        existing.push_column(column);
        return;
    }

    if kind.capacity().is_some_and(|cap| list.len() >= cap) {
        list.remove(0);
    }

    let mut index = Index::new(name, ty);
    index.push_column(column);
    list.push(index);
}
