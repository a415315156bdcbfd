use crate::{
    annotation::keys,
    build::{Build, field::Scope, index},
    model::Table,
};
use gqlrel_schema::ObjectType;

impl<'a> Build<'a> {
    /// Build the table for one data object type. Fields that resolve to no
    /// column are skipped; a bad field never aborts its table.
    pub(super) fn table(&mut self, object: &'a ObjectType) {
        let annotations = self.annotations(object.description.as_deref());
        if annotations.flag(keys::SKIP) {
            tracing::debug!(type_name = %object.name, "type skipped");
            return;
        }

        let name = annotations
            .str(keys::NAME)
            .map_or_else(|| self.naming.table(&object.name), str::to_string);
        let comment = self.reader.strip(object.description.as_deref());
        let mut table = Table::new(name, comment, annotations);
        table.source = Some(object.name.clone());

        for field in &object.fields {
            let mut visiting = Vec::new();
            let Some(column) = self.resolve(
                Scope::Table(&table.name),
                object,
                field,
                None,
                &mut visiting,
            ) else {
                continue;
            };

            let annotations = column.annotations.clone();
            let column_name = table.insert_column(&field.name, column);
            index::accumulate(&mut table, field, &column_name, &annotations, self.naming);
        }

        tracing::debug!(
            type_name = %object.name,
            table = %table.name,
            columns = table.columns.len(),
            "table built"
        );
        self.db.push_table(table);
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        build::Compiler,
        obs::CollectingSink,
        test_support::{DocReader, identity, object, scalar_field},
    };
    use gqlrel_schema::Schema;

    #[test]
    fn skipped_type_produces_nothing() {
        let audit = object("Audit", "@db.skip: true", vec![identity()]);
        let schema = Schema::builder().with_type(audit).build().unwrap();
        let sink = CollectingSink::new();
        let db = Compiler::new(&schema, &DocReader)
            .with_sink(&sink)
            .compile();

        assert!(db.is_empty());
        assert!(sink.is_empty());
    }

    #[test]
    fn name_override_and_stripped_comment() {
        let doc = "Registered accounts\n@db.name: \"accounts\"";
        let user = object("User", doc, vec![identity()]);
        let schema = Schema::builder().with_type(user).build().unwrap();
        let db = Compiler::new(&schema, &DocReader).compile();

        let table = db.table("accounts").unwrap();
        assert_eq!(table.comment.as_deref(), Some("Registered accounts"));
        assert_eq!(table.annotations.str("name"), Some("accounts"));
        assert_eq!(db.table_for_type("User").unwrap().name, "accounts");
    }

    #[test]
    fn columns_follow_declaration_order() {
        let user = object(
            "User",
            "",
            vec![
                scalar_field("name", "String", true),
                identity(),
                scalar_field("age", "Int", false),
            ],
        );
        let schema = Schema::builder().with_type(user).build().unwrap();
        let db = Compiler::new(&schema, &DocReader).compile();

        let table = &db.tables[0];
        let names: Vec<_> = table.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["name", "id", "age"]);
    }
}
