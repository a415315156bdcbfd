use crate::model::Table;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// AbstractDatabase
///
/// Every table of a build in output order: declared tables first, then
/// synthesized join tables in discovery order.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct AbstractDatabase {
    pub tables: Vec<Table>,

    #[serde(skip)]
    by_name: BTreeMap<String, usize>,

    #[serde(skip)]
    by_type: BTreeMap<String, usize>,
}

impl AbstractDatabase {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a table. A recorded source type registers it for foreign key
    /// lookup; on a name clash the first table keeps the name entry.
    pub fn push_table(&mut self, table: Table) {
        let pos = self.tables.len();
        self.register(&table, pos);
        self.tables.push(table);
    }

    fn register(&mut self, table: &Table, pos: usize) {
        self.by_name.entry(table.name.clone()).or_insert(pos);
        if let Some(source) = &table.source {
            self.by_type.insert(source.clone(), pos);
        }
    }

    #[must_use]
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.by_name.get(name).map(|&i| &self.tables[i])
    }

    /// Table built from a source object type.
    #[must_use]
    pub fn table_for_type(&self, type_name: &str) -> Option<&Table> {
        self.by_type.get(type_name).map(|&i| &self.tables[i])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Table> {
        self.tables.iter()
    }

    #[must_use]
    pub fn table_names(&self) -> Vec<&str> {
        self.tables.iter().map(|t| t.name.as_str()).collect()
    }

    /// Restore lookup maps after deserialization.
    pub fn reindex(&mut self) {
        self.by_name.clear();
        self.by_type.clear();

        let mut tables = std::mem::take(&mut self.tables);
        for (pos, table) in tables.iter_mut().enumerate() {
            table.reindex();
            self.register(table, pos);
        }
        self.tables = tables;
    }
}

impl<'a> IntoIterator for &'a AbstractDatabase {
    type Item = &'a Table;
    type IntoIter = std::slice::Iter<'a, Table>;

    fn into_iter(self) -> Self::IntoIter {
        self.tables.iter()
    }
}
