use crate::{
    annotation::Annotations,
    model::{Column, Index, IndexKind},
    naming,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// Table
///
/// Ordered columns plus two lookup maps: by column name (unique within the
/// table) and by the source field that produced the column.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Table {
    pub name: String,

    /// Object type the table was built from; `None` for join tables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    pub comment: Option<String>,
    pub annotations: Annotations,
    pub columns: Vec<Column>,
    pub indexes: Vec<Index>,
    pub primaries: Vec<Index>,
    pub uniques: Vec<Index>,

    #[serde(skip)]
    by_name: BTreeMap<String, usize>,

    #[serde(skip)]
    by_field: BTreeMap<String, usize>,
}

impl Table {
    #[must_use]
    pub fn new(name: impl Into<String>, comment: Option<String>, annotations: Annotations) -> Self {
        Self {
            name: name.into(),
            source: None,
            comment,
            annotations,
            columns: Vec::new(),
            indexes: Vec::new(),
            primaries: Vec::new(),
            uniques: Vec::new(),
            by_name: BTreeMap::new(),
            by_field: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_source(mut self, type_name: impl Into<String>) -> Self {
        self.source = Some(type_name.into());
        self
    }

    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.by_name.get(name).map(|&i| &self.columns[i])
    }

    /// Column produced by a source field.
    #[must_use]
    pub fn column_for_field(&self, field: &str) -> Option<&Column> {
        self.by_field.get(field).map(|&i| &self.columns[i])
    }

    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Insert a column, suffixing its name until it is unique in the table.
    /// Returns the final column name.
    pub fn insert_column(&mut self, source_field: &str, mut column: Column) -> String {
        column.name = naming::dedupe(column.name, |name| self.has_column(name));
        column.source = Some(source_field.to_string());

        let name = column.name.clone();
        let pos = self.columns.len();
        self.columns.push(column);
        self.by_name.insert(name.clone(), pos);
        self.by_field.entry(source_field.to_string()).or_insert(pos);

        name
    }

    #[must_use]
    pub fn index_list(&self, kind: IndexKind) -> &[Index] {
        match kind {
            IndexKind::Index => &self.indexes,
            IndexKind::Primary => &self.primaries,
            IndexKind::Unique => &self.uniques,
        }
    }

    pub(crate) const fn index_list_mut(&mut self, kind: IndexKind) -> &mut Vec<Index> {
        match kind {
            IndexKind::Index => &mut self.indexes,
            IndexKind::Primary => &mut self.primaries,
            IndexKind::Unique => &mut self.uniques,
        }
    }

    /// Restore lookup maps after deserialization. Columns without a recorded
    /// source field are keyed by their own name.
    pub fn reindex(&mut self) {
        self.by_name.clear();
        self.by_field.clear();

        for (pos, column) in self.columns.iter().enumerate() {
            let field = column.source.as_deref().unwrap_or(&column.name);
            self.by_name.insert(column.name.clone(), pos);
            self.by_field.entry(field.to_string()).or_insert(pos);
        }
    }
}
