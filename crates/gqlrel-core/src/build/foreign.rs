use crate::{
    model::AbstractDatabase,
    obs::{Diagnostic, DiagnosticKind, DiagnosticSink},
};

///
/// Resolution
///

struct Resolution {
    table: usize,
    column: usize,
    target: Option<(String, String)>,
}

/// Fill in the target table and column of every unresolved foreign key.
/// Unresolvable keys are reported and left dangling.
pub(super) fn backfill(db: &mut AbstractDatabase, sink: &dyn DiagnosticSink) {
    let mut resolutions = Vec::new();

    for (t, table) in db.tables.iter().enumerate() {
        for (c, column) in table.columns.iter().enumerate() {
            let Some(foreign) = column.foreign.as_ref().filter(|fk| !fk.is_resolved()) else {
                continue;
            };

            let target = db.table_for_type(&foreign.type_name).and_then(|target| {
                target
                    .column_for_field(&foreign.field)
                    .map(|col| (target.name.clone(), col.name.clone()))
            });

            if target.is_none() {
                let type_name = table.source.as_deref().unwrap_or(&table.name);
                let field_name = column.source.as_deref().unwrap_or(&column.name);
                sink.report(Diagnostic::field(
                    DiagnosticKind::UnresolvedForeignKey,
                    type_name,
                    field_name,
                    format!(
                        "{type_name}.{field_name}: no table column for `{}.{}`",
                        foreign.type_name, foreign.field
                    ),
                ));
            }

            resolutions.push(Resolution {
                table: t,
                column: c,
                target,
            });
        }
    }

    for Resolution { table, column, target } in resolutions {
        let Some((table_name, column_name)) = target else {
            continue;
        };

        let owner = &mut db.tables[table];
        tracing::debug!(
            table = %owner.name,
            column = %owner.columns[column].name,
            references = %format!("{table_name}.{column_name}"),
            "foreign key resolved"
        );
        if let Some(foreign) = owner.columns[column].foreign.as_mut() {
            foreign.table_name = Some(table_name);
            foreign.column_name = Some(column_name);
        }
    }
}
