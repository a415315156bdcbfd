//! Many-to-many join table synthesis.
//!
//! A list-of-object field `A.f: [B]` pairs with a list field on `B`. Each
//! side contributes one column to the shared join table when it is
//! processed; a self-referential field `A.f: [A]` contributes both columns
//! at once.

use crate::{
    IDENTITY_FIELD,
    annotation::{Annotations, keys},
    build::{
        Build,
        field::{Link, Scope, Visiting},
    },
    model::{Column, Index, Table},
    naming,
    obs::{Diagnostic, DiagnosticKind},
};
use gqlrel_schema::{Field, ObjectType};

impl<'a> Build<'a> {
    pub(super) fn join(
        &mut self,
        owner: &'a ObjectType,
        owner_table: &str,
        field: &'a Field,
        annotations: &Annotations,
        target: &'a ObjectType,
        visiting: &mut Visiting<'a>,
    ) {
        let self_referential = target.name == owner.name;
        let reciprocal_name = if self_referential {
            field.name.as_str()
        } else {
            annotations.str(keys::MANY_TO_MANY).unwrap_or(owner_table)
        };

        // One-sided list declarations are valid and produce nothing.
        let Some(reciprocal) = target.field(reciprocal_name) else {
            tracing::debug!(
                type_name = %owner.name,
                field = %field.name,
                reciprocal = reciprocal_name,
                "no reciprocal field, join skipped"
            );
            return;
        };

        let partner = self
            .annotations(reciprocal.description.as_deref())
            .str(keys::FOREIGN)
            .map(str::to_string);
        if let Some(partner) = partner.filter(|partner| *partner != field.name) {
            self.report(Diagnostic::field(
                DiagnosticKind::ReciprocalMismatch,
                &owner.name,
                &field.name,
                format!(
                    "{}.{}: reciprocal field `{}.{}` pairs with `{partner}`",
                    owner.name, field.name, target.name, reciprocal.name
                ),
            ));
            return;
        }

        if !reciprocal.ty.is_list() {
            return;
        }

        let columns = if self_referential {
            self.self_join_columns(owner, field, annotations, visiting)
        } else {
            let link = Link {
                target: owner,
                key: IDENTITY_FIELD.to_string(),
            };

            self.resolve(Scope::Mirror, target, reciprocal, Some(&link), visiting)
                .into_iter()
                .collect()
        };
        if columns.is_empty() {
            return;
        }

        let name = annotations.str(keys::TABLE).map_or_else(
            || {
                self.naming.join_table(
                    (owner.name.as_str(), field.name.as_str()),
                    (target.name.as_str(), reciprocal.name.as_str()),
                )
            },
            str::to_string,
        );
        let comment = annotations.str(keys::TABLE_COMMENT).map_or_else(
            || {
                format!(
                    "Join table for {}.{} and {}.{}",
                    owner.name, field.name, target.name, reciprocal.name
                )
            },
            str::to_string,
        );

        let table = self.join_table(&name, comment, annotations);
        let added: Vec<String> = columns
            .into_iter()
            .map(|column| {
                let source = column.name.clone();
                table.insert_column(&source, column)
            })
            .collect();
        add_composite_index(table, &added);

        tracing::debug!(
            table = %name,
            type_name = %owner.name,
            field = %field.name,
            columns = ?added,
            "join table extended"
        );
    }

    // Both ends of a self relation reference the identity field of the
    // owning type.
    fn self_join_columns(
        &mut self,
        owner: &'a ObjectType,
        field: &'a Field,
        annotations: &Annotations,
        visiting: &mut Visiting<'a>,
    ) -> Vec<Column> {
        let key = annotations
            .str(keys::MANY_TO_MANY)
            .unwrap_or(IDENTITY_FIELD);
        let Some(identity) = owner.field(key) else {
            self.report(Diagnostic::field(
                DiagnosticKind::ForeignFieldMissing,
                &owner.name,
                &field.name,
                format!(
                    "{}.{}: identity field `{}.{key}` does not exist",
                    owner.name, field.name, owner.name
                ),
            ));
            return Vec::new();
        };

        let link = Link {
            target: owner,
            key: key.to_string(),
        };
        let Some(column) = self.resolve(Scope::Mirror, owner, identity, Some(&link), visiting)
        else {
            return Vec::new();
        };

        vec![column.clone(), column]
    }

    /// Join table called `name`, created and queued on first use.
    fn join_table(&mut self, name: &str, comment: String, annotations: &Annotations) -> &mut Table {
        let pos = match self.join_index.get(name) {
            Some(&pos) => pos,
            None => {
                let pos = self.joins.len();
                let table = Table::new(name, Some(comment), annotations.clone());
                self.joins.push(table);
                self.join_index.insert(name.to_string(), pos);
                tracing::debug!(table = name, "join table created");

                pos
            }
        };

        &mut self.joins[pos]
    }
}

fn add_composite_index(table: &mut Table, columns: &[String]) {
    let name = naming::index_name(&format!("{}_{}_index", table.name, columns.join("_")));

    let pos = match table.indexes.iter().position(|index| index.name == name) {
        Some(pos) => pos,
        None => {
            table.indexes.push(Index::new(name, None));
            table.indexes.len() - 1
        }
    };

    for column in columns {
        table.indexes[pos].push_column(column);
    }
}
