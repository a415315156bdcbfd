//! Build passes.
//!
//! A build runs in a fixed order: one table per data object type (columns
//! then indexes), join tables flushed after every declared table, a table
//! name check, and finally the foreign key backfill.

mod check;
mod field;
mod foreign;
mod index;
mod join;
mod table;

use crate::{
    ANNOTATION_NAMESPACE,
    annotation::{AnnotationReader, Annotations},
    config::BuildOptions,
    model::{AbstractDatabase, Table},
    naming::Naming,
    obs::{Diagnostic, DiagnosticSink, TracingSink},
    scalar::{ScalarChain, ScalarResolver},
};
use gqlrel_schema::Schema;
use std::collections::BTreeMap;

///
/// Compiler
///
/// Compiles a schema into an [`AbstractDatabase`]. A compiler only borrows
/// its collaborators, so one schema can be compiled repeatedly with
/// different options.
///

#[derive(Clone, Copy)]
pub struct Compiler<'a> {
    schema: &'a Schema,
    reader: &'a dyn AnnotationReader,
    options: BuildOptions,
    scalars: Option<&'a dyn ScalarResolver>,
    sink: &'a dyn DiagnosticSink,
}

impl<'a> Compiler<'a> {
    #[must_use]
    pub fn new(schema: &'a Schema, reader: &'a dyn AnnotationReader) -> Self {
        Self {
            schema,
            reader,
            options: BuildOptions::default(),
            scalars: None,
            sink: &TracingSink,
        }
    }

    #[must_use]
    pub const fn with_options(mut self, options: BuildOptions) -> Self {
        self.options = options;
        self
    }

    /// Resolver consulted before the builtin scalar table.
    #[must_use]
    pub fn with_scalar_resolver(mut self, resolver: &'a dyn ScalarResolver) -> Self {
        self.scalars = Some(resolver);
        self
    }

    #[must_use]
    pub fn with_sink(mut self, sink: &'a dyn DiagnosticSink) -> Self {
        self.sink = sink;
        self
    }

    #[must_use]
    pub const fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Run every pass and return the finished database. Problems are
    /// reported to the sink; they never stop the build.
    #[must_use]
    pub fn compile(&self) -> AbstractDatabase {
        let mut build = Build::new(self);

        for object in self.schema.data_objects() {
            build.table(object);
        }

        build.finish()
    }
}

///
/// Build
///
/// State of one compilation. Declared tables and join tables are kept in
/// separate ordered collections and merged once in `finish`.
///

pub(crate) struct Build<'a> {
    schema: &'a Schema,
    reader: &'a dyn AnnotationReader,
    options: BuildOptions,
    naming: Naming,
    scalars: ScalarChain<'a>,
    sink: &'a dyn DiagnosticSink,

    db: AbstractDatabase,
    joins: Vec<Table>,
    join_index: BTreeMap<String, usize>,
}

impl<'a> Build<'a> {
    fn new(compiler: &Compiler<'a>) -> Self {
        Self {
            schema: compiler.schema,
            reader: compiler.reader,
            options: compiler.options,
            naming: Naming::new(compiler.options.normalize_names),
            scalars: ScalarChain::new(compiler.scalars),
            sink: compiler.sink,
            db: AbstractDatabase::new(),
            joins: Vec::new(),
            join_index: BTreeMap::new(),
        }
    }

    fn annotations(&self, text: Option<&str>) -> Annotations {
        self.reader.parse(ANNOTATION_NAMESPACE, text)
    }

    fn report(&self, diagnostic: Diagnostic) {
        self.sink.report(diagnostic);
    }

    fn finish(mut self) -> AbstractDatabase {
        let joins = std::mem::take(&mut self.joins);
        tracing::debug!(
            tables = self.db.len(),
            joins = joins.len(),
            "declared tables built"
        );

        for join in joins {
            self.db.push_table(join);
        }

        check::unique_table_names(&self.db, self.sink);
        foreign::backfill(&mut self.db, self.sink);

        self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        obs::{CollectingSink, DiagnosticKind},
        test_support::{DocReader, identity, object, scalar_field},
    };

    #[test]
    fn empty_schema_compiles_to_empty_database() {
        let schema = Schema::builder().build().unwrap();
        let db = Compiler::new(&schema, &DocReader).compile();

        assert!(db.is_empty());
    }

    #[test]
    fn roots_are_not_tables() {
        let query = object("Query", "", vec![scalar_field("me", "ID", true)]);
        let schema = Schema::builder()
            .with_type(query)
            .with_type(object("User", "", vec![identity()]))
            .build()
            .unwrap();
        let db = Compiler::new(&schema, &DocReader).compile();

        assert_eq!(db.table_names(), ["user"]);
    }

    #[test]
    fn options_reach_the_naming_policy() {
        let post = object(
            "BlogPost",
            "",
            vec![scalar_field("Title", "String", false)],
        );
        let schema = Schema::builder().with_type(post).build().unwrap();
        let sink = CollectingSink::new();
        let db = Compiler::new(&schema, &DocReader)
            .with_options(BuildOptions::default().with_normalize_names(false))
            .with_sink(&sink)
            .compile();

        let table = db.table("BlogPost").unwrap();
        assert!(table.column("Title").is_some());
        assert_eq!(sink.count(DiagnosticKind::UnsupportedScalar), 0);
    }
}
