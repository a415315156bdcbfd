//! Field descriptor resolution.

use crate::{
    IDENTITY_FIELD,
    annotation::{Annotations, keys},
    build::Build,
    model::{Column, Descriptor, ForeignKey, TypeTag},
    naming,
    obs::{Diagnostic, DiagnosticKind},
};
use gqlrel_schema::{EnumType, Field, NamedType, ObjectType, ScalarType, TypeKind, TypeRef};
use serde_json::{Value, json};

///
/// Scope
///
/// Where a resolved column goes. Only table columns honour the field skip
/// flag and may synthesize join tables; mirrored resolution just needs the
/// descriptor.
///

#[derive(Clone, Copy, Debug)]
pub(super) enum Scope<'t> {
    Mirror,
    Table(&'t str),
}

///
/// Link
///
/// Explicit reference target, used by join synthesis to resolve a field as
/// a reference to `target.key` regardless of its declared type.
///

pub(super) struct Link<'a> {
    pub target: &'a ObjectType,
    pub key: String,
}

///
/// Category
/// Storage category of a field's underlying type.
///

enum Category<'a> {
    Enum(&'a EnumType),
    List(&'a TypeRef),
    Missing(&'a str),
    NotObject(&'a str, TypeKind),
    Object(&'a ObjectType),
    ObjectList(&'a ObjectType),
    Scalar(Option<&'a ScalarType>),
    Unsupported(&'a str, TypeKind),
}

/// Stack of `(type, field)` pairs currently being mirrored.
pub(super) type Visiting<'a> = Vec<(&'a str, &'a str)>;

impl<'a> Build<'a> {
    /// Resolve `field` of `owner` into a column. `None` means no column: the
    /// field was skipped, turned into a join, or diagnosed.
    pub(super) fn resolve(
        &mut self,
        scope: Scope<'_>,
        owner: &'a ObjectType,
        field: &'a Field,
        link: Option<&Link<'a>>,
        visiting: &mut Visiting<'a>,
    ) -> Option<Column> {
        let annotations = self.annotations(field.description.as_deref());
        if matches!(scope, Scope::Table(_)) && annotations.flag(keys::SKIP) {
            return None;
        }

        let category = match link {
            Some(link) => Category::Object(link.target),
            None => self.classify(&field.ty, &annotations),
        };

        let (descriptor, foreign) = match category {
            Category::Scalar(scalar) => {
                let Some(descriptor) = self.scalars.resolve(field, scalar, &annotations) else {
                    self.report(Diagnostic::field(
                        DiagnosticKind::UnsupportedScalar,
                        &owner.name,
                        &field.name,
                        format!(
                            "{}.{}: scalar `{}` has no column type; set a `type` annotation",
                            owner.name, field.name, field.ty.name()
                        ),
                    ));
                    return None;
                };

                (descriptor, None)
            }

            Category::Enum(ty) => (self.enum_descriptor(ty, &annotations), None),

            Category::Object(target) => {
                let key = link.map_or_else(
                    || annotations.str(keys::FOREIGN).unwrap_or(IDENTITY_FIELD),
                    |link| link.key.as_str(),
                );
                let (descriptor, foreign) = self.reference(owner, field, target, key, visiting)?;

                (descriptor, Some(foreign))
            }

            Category::ObjectList(target) => {
                match scope {
                    Scope::Table(table) => {
                        self.join(owner, table, field, &annotations, target, visiting);
                    }
                    Scope::Mirror => self.report(Diagnostic::field(
                        DiagnosticKind::ListReference,
                        &owner.name,
                        &field.name,
                        format!(
                            "{}.{}: list of `{}` cannot be the target of a foreign key",
                            owner.name, field.name, target.name
                        ),
                    )),
                }

                return None;
            }

            Category::List(element) => {
                if !self.options.map_lists_to_json {
                    self.report(Diagnostic::field(
                        DiagnosticKind::UnsupportedList,
                        &owner.name,
                        &field.name,
                        format!(
                            "{}.{}: list of `{element}` is unsupported; enable map_lists_to_json",
                            owner.name, field.name
                        ),
                    ));
                    return None;
                }

                (Descriptor::new(TypeTag::Json), None)
            }

            Category::Missing(name) => {
                self.report(Diagnostic::field(
                    DiagnosticKind::ForeignTypeMissing,
                    &owner.name,
                    &field.name,
                    format!(
                        "{}.{}: type `{name}` does not exist",
                        owner.name, field.name
                    ),
                ));
                return None;
            }

            Category::NotObject(name, kind) => {
                self.report(Diagnostic::field(
                    DiagnosticKind::ForeignTypeNotObject,
                    &owner.name,
                    &field.name,
                    format!(
                        "{}.{}: `{name}` is a {kind} type, only object types can be referenced",
                        owner.name, field.name
                    ),
                ));
                return None;
            }

            Category::Unsupported(name, kind) => {
                self.report(Diagnostic::field(
                    DiagnosticKind::UnsupportedType,
                    &owner.name,
                    &field.name,
                    format!(
                        "{}.{}: `{name}` ({kind}) cannot be stored in a column",
                        owner.name, field.name
                    ),
                ));
                return None;
            }
        };

        let name = annotations.str(keys::NAME).map_or_else(
            || {
                if foreign.is_some() {
                    self.naming.foreign_column(&field.name)
                } else {
                    self.naming.column(&field.name)
                }
            },
            str::to_string,
        );

        Some(Column {
            name,
            source: None,
            comment: self.reader.strip(field.description.as_deref()),
            default_value: annotations.value(keys::DEFAULT).cloned(),
            nullable: !field.ty.is_non_null(),
            ty: descriptor.ty,
            args: descriptor.args,
            foreign,
            annotations,
        })
    }

    fn classify(&self, ty: &'a TypeRef, annotations: &Annotations) -> Category<'a> {
        let schema = self.schema;
        let named = |name: &'a str| schema.get_type(name);

        if annotations.str(keys::TYPE).is_some() {
            let scalar = ty.as_named().and_then(named);
            return Category::Scalar(scalar.and_then(NamedType::as_scalar));
        }

        if let Some(element) = ty.list_element() {
            let element = element.nullable();
            return match element.as_named().and_then(named) {
                Some(NamedType::Object(object)) => Category::ObjectList(object),
                _ => Category::List(element),
            };
        }

        let name = ty.name();
        match named(name) {
            None => Category::Missing(name),
            Some(NamedType::Scalar(scalar)) => Category::Scalar(Some(scalar)),
            Some(NamedType::Enum(ty)) => Category::Enum(ty),
            Some(NamedType::Object(object)) => Category::Object(object),
            Some(other @ (NamedType::Interface(_) | NamedType::Union(_))) => {
                Category::NotObject(name, other.kind())
            }
            Some(other) => Category::Unsupported(name, other.kind()),
        }
    }

    fn enum_descriptor(&self, ty: &EnumType, annotations: &Annotations) -> Descriptor {
        let enum_name = annotations
            .str(keys::ENUM_NAME)
            .map_or_else(|| naming::enum_name(&ty.name), str::to_string);
        let values: Vec<Value> = ty.value_names().map(Value::from).collect();

        Descriptor::with_args(
            TypeTag::Enum,
            vec![Value::Array(values), json!({ "enumName": enum_name })],
        )
    }

    /// Resolve an object reference to `target.key`, copying the referenced
    /// column's storage type.
    fn reference(
        &mut self,
        owner: &'a ObjectType,
        field: &'a Field,
        target: &'a ObjectType,
        key: &str,
        visiting: &mut Visiting<'a>,
    ) -> Option<(Descriptor, ForeignKey)> {
        let Some(foreign_field) = target.field(key) else {
            self.report(Diagnostic::field(
                DiagnosticKind::ForeignFieldMissing,
                &owner.name,
                &field.name,
                format!(
                    "{}.{}: referenced field `{}.{key}` does not exist",
                    owner.name, field.name, target.name
                ),
            ));
            return None;
        };

        let target_key = (target.name.as_str(), foreign_field.name.as_str());
        if visiting.contains(&target_key) {
            self.report(Diagnostic::field(
                DiagnosticKind::CircularReference,
                &owner.name,
                &field.name,
                format!(
                    "{}.{}: reference to `{}.{}` is circular",
                    owner.name, field.name, target.name, foreign_field.name
                ),
            ));
            return None;
        }

        visiting.push((owner.name.as_str(), field.name.as_str()));
        let mirrored = self.resolve(Scope::Mirror, target, foreign_field, None, visiting);
        visiting.pop();

        let Some(mirrored) = mirrored else {
            self.report(Diagnostic::field(
                DiagnosticKind::MirrorFailed,
                &owner.name,
                &field.name,
                format!(
                    "{}.{}: referenced field `{}.{}` has no column type to copy",
                    owner.name, field.name, target.name, foreign_field.name
                ),
            ));
            return None;
        };

        Some((
            mirrored.descriptor(),
            ForeignKey::new(&target.name, &foreign_field.name),
        ))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        build::Compiler,
        config::BuildOptions,
        model::{AbstractDatabase, Column, TypeTag},
        obs::{CollectingSink, DiagnosticKind},
        test_support::{DocReader, field, identity, object, scalar_field},
    };
    use gqlrel_schema::{EnumType, NamedType, Schema, ScalarType, TypeRef, UnionType};
    use serde_json::json;

    fn compile(types: Vec<NamedType>, options: BuildOptions) -> (AbstractDatabase, CollectingSink) {
        let mut builder = Schema::builder();
        for ty in types {
            builder = builder.with_type(ty);
        }
        let schema = builder.build().unwrap();
        let sink = CollectingSink::new();
        let db = Compiler::new(&schema, &DocReader)
            .with_options(options)
            .with_sink(&sink)
            .compile();

        (db, sink)
    }

    fn column<'d>(db: &'d AbstractDatabase, table: &str, column: &str) -> &'d Column {
        db.table(table).unwrap().column(column).unwrap()
    }

    #[test]
    fn nullability_follows_non_null_wrapper() {
        let user = object(
            "User",
            "",
            vec![identity(), scalar_field("bio", "String", false)],
        );
        let (db, _) = compile(vec![user.into()], BuildOptions::default());

        assert!(!column(&db, "user", "id").nullable);
        assert!(column(&db, "user", "bio").nullable);
    }

    #[test]
    fn enum_column_carries_values_and_name() {
        let status = EnumType::new("OrderStatus", ["OPEN", "CLOSED"]);
        let order = object(
            "Order",
            "",
            vec![
                field("status", TypeRef::named("OrderStatus").non_null(), ""),
                field(
                    "previous",
                    TypeRef::named("OrderStatus"),
                    "@db.enumName: \"prev_status\"",
                ),
            ],
        );
        let (db, _) = compile(vec![status.into(), order.into()], BuildOptions::default());

        let status = column(&db, "order", "status");
        let values = json!(["OPEN", "CLOSED"]);
        assert_eq!(status.ty, TypeTag::Enum);
        assert_eq!(status.args, [values, json!({ "enumName": "orderStatus" })]);

        let previous = column(&db, "order", "previous");
        assert_eq!(previous.args[1], json!({ "enumName": "prev_status" }));
    }

    #[test]
    fn reference_mirrors_target_type_and_honours_foreign_override() {
        let user = object(
            "User",
            "",
            vec![
                identity(),
                field("email", TypeRef::named("String"), "@db.length: 120"),
            ],
        );
        let post = object(
            "Post",
            "",
            vec![
                field("author", TypeRef::named("User").non_null(), ""),
                field(
                    "editor",
                    TypeRef::named("User"),
                    "@db.foreign: \"email\"\n@db.name: \"editor_email\"",
                ),
            ],
        );
        let (db, sink) = compile(vec![user.into(), post.into()], BuildOptions::default());

        assert!(sink.is_empty());

        let author = column(&db, "post", "author_foreign");
        assert_eq!(author.ty, TypeTag::Uuid);
        assert!(!author.nullable);

        let editor = column(&db, "post", "editor_email");
        let foreign = editor.foreign.as_ref().unwrap();
        assert_eq!(editor.ty, TypeTag::String);
        assert_eq!(editor.args, [json!(120)]);
        assert_eq!(foreign.field, "email");
        assert_eq!(foreign.column_name.as_deref(), Some("email"));
    }

    #[test]
    fn broken_references_are_diagnosed_and_dropped() {
        let image = object("Image", "", vec![scalar_field("url", "String", true)]);
        let post = object(
            "Post",
            "",
            vec![
                identity(),
                field("owner", TypeRef::named("Ghost"), ""),
                field("cover", TypeRef::named("Image"), ""),
                field("media", TypeRef::named("Media"), ""),
            ],
        );
        let (db, sink) = compile(
            vec![
                UnionType::new("Media", ["Image"]).into(),
                image.into(),
                post.into(),
            ],
            BuildOptions::default(),
        );

        let post = db.table("post").unwrap();
        assert_eq!(post.columns.len(), 1);
        assert_eq!(sink.count(DiagnosticKind::ForeignTypeMissing), 1);
        assert_eq!(sink.count(DiagnosticKind::ForeignFieldMissing), 1);
        assert_eq!(sink.count(DiagnosticKind::ForeignTypeNotObject), 1);
    }

    #[test]
    fn circular_references_terminate() {
        let a = object(
            "A",
            "",
            vec![field("b", TypeRef::named("B"), "@db.foreign: \"a\"")],
        );
        let b = object(
            "B",
            "",
            vec![field("a", TypeRef::named("A"), "@db.foreign: \"b\"")],
        );
        let (db, sink) = compile(vec![a.into(), b.into()], BuildOptions::default());

        assert!(db.table("a").unwrap().columns.is_empty());
        assert!(db.table("b").unwrap().columns.is_empty());
        assert_eq!(sink.count(DiagnosticKind::CircularReference), 2);
    }

    #[test]
    fn self_reference_resolves_to_own_identity() {
        let parent = field("parent", TypeRef::named("Node"), "");
        let node = object("Node", "", vec![identity(), parent]);
        let (db, sink) = compile(vec![node.into()], BuildOptions::default());

        assert!(sink.is_empty());
        let parent = column(&db, "node", "parent_foreign");
        let foreign = parent.foreign.as_ref().unwrap();
        assert_eq!(parent.ty, TypeTag::Uuid);
        assert_eq!(foreign.table_name.as_deref(), Some("node"));
    }

    #[test]
    fn scalar_lists_follow_json_policy() {
        let types = || {
            let tags = TypeRef::list(TypeRef::named("String").non_null());
            vec![object("Post", "", vec![field("tags", tags, "")]).into()]
        };

        let (db, sink) = compile(types(), BuildOptions::default());
        assert!(db.table("post").unwrap().columns.is_empty());
        assert_eq!(sink.count(DiagnosticKind::UnsupportedList), 1);
        assert!(sink.snapshot()[0].message.contains("map_lists_to_json"));

        let options = BuildOptions::default().with_map_lists_to_json(true);
        let (db, sink) = compile(types(), options);
        let tags = column(&db, "post", "tags");
        assert_eq!((tags.ty.clone(), tags.args.len()), (TypeTag::Json, 0));
        assert!(sink.is_empty());
    }

    #[test]
    fn unsupported_scalar_yields_one_diagnostic() {
        let file = object(
            "File",
            "",
            vec![
                scalar_field("blob", "Upload", true),
                field("raw", TypeRef::named("Upload"), "@db.type: \"binary\""),
            ],
        );
        let types = vec![ScalarType::new("Upload").into(), file.into()];
        let (db, sink) = compile(types, BuildOptions::default());

        let file = db.table("file").unwrap();
        assert!(file.column("blob").is_none());
        assert_eq!(file.column("raw").unwrap().ty, TypeTag::Binary);
        assert_eq!(sink.len(), 1);
        assert_eq!(sink.snapshot()[0].location(), "File.blob");
    }

    #[test]
    fn field_skip_defaults_and_comments() {
        let user = object(
            "User",
            "",
            vec![
                field("secret", TypeRef::named("Upload"), "@db.skip: true"),
                field(
                    "active",
                    TypeRef::named("Boolean"),
                    "Whether the account is live\n@db.default: true",
                ),
            ],
        );
        let (db, sink) = compile(vec![user.into()], BuildOptions::default());

        let user = db.table("user").unwrap();
        assert_eq!(user.columns.len(), 1);
        assert!(sink.is_empty());

        let active = &user.columns[0];
        let comment = active.comment.as_deref();
        assert_eq!(active.default_value, Some(json!(true)));
        assert_eq!(comment, Some("Whether the account is live"));
    }
}
