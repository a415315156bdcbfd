use crate::{
    model::AbstractDatabase,
    obs::{Diagnostic, DiagnosticKind, DiagnosticSink},
};
use std::collections::BTreeSet;

/// Report every table whose name was already taken by an earlier table.
pub(super) fn unique_table_names(db: &AbstractDatabase, sink: &dyn DiagnosticSink) {
    let mut seen = BTreeSet::new();

    for table in db {
        if !seen.insert(table.name.as_str()) {
            sink.report(Diagnostic::new(
                DiagnosticKind::DuplicateTableName,
                &table.name,
                format!("table name `{}` is used more than once", table.name),
            ));
        }
    }
}
