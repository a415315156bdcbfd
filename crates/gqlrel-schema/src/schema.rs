use crate::{
    BUILTIN_SCALARS, INTROSPECTION_PREFIX,
    error::SchemaError,
    node::{NamedType, ObjectType, ScalarType},
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

///
/// RootTypes
///
/// Names of the operation root types. They describe the API surface, not
/// stored data, so the compiler never builds tables for them.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct RootTypes {
    pub query: Option<String>,
    pub mutation: Option<String>,
    pub subscription: Option<String>,
}

impl Default for RootTypes {
    fn default() -> Self {
        Self {
            query: Some("Query".to_string()),
            mutation: Some("Mutation".to_string()),
            subscription: Some("Subscription".to_string()),
        }
    }
}

impl RootTypes {
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        [&self.query, &self.mutation, &self.subscription]
            .into_iter()
            .flatten()
            .any(|root| root == name)
    }
}

///
/// Schema
///
/// Immutable, ordered collection of named types. Iteration order is
/// declaration order, with the builtin scalars first.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(try_from = "SchemaDef", into = "SchemaDef")]
pub struct Schema {
    types: Vec<NamedType>,
    index: BTreeMap<String, usize>,
    roots: RootTypes,
}

impl Schema {
    #[must_use]
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// Parse a schema from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let schema = serde_json::from_str(json)?;

        Ok(schema)
    }

    #[must_use]
    pub fn get_type(&self, name: &str) -> Option<&NamedType> {
        self.index.get(name).map(|&i| &self.types[i])
    }

    #[must_use]
    pub fn object(&self, name: &str) -> Option<&ObjectType> {
        self.get_type(name).and_then(NamedType::as_object)
    }

    pub fn types(&self) -> impl Iterator<Item = &NamedType> {
        self.types.iter()
    }

    #[must_use]
    pub const fn roots(&self) -> &RootTypes {
        &self.roots
    }

    /// Object types that describe stored data: not introspection types and
    /// not operation roots.
    pub fn data_objects(&self) -> impl Iterator<Item = &ObjectType> {
        self.types
            .iter()
            .filter_map(NamedType::as_object)
            .filter(|object| {
                !object.name.starts_with(INTROSPECTION_PREFIX) && !self.roots.contains(&object.name)
            })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

///
/// SchemaBuilder
///

#[derive(Debug, Default)]
pub struct SchemaBuilder {
    types: Vec<NamedType>,
    roots: RootTypes,
}

impl SchemaBuilder {
    #[must_use]
    pub fn with_type(mut self, ty: impl Into<NamedType>) -> Self {
        self.types.push(ty.into());
        self
    }

    #[must_use]
    pub fn with_roots(mut self, roots: RootTypes) -> Self {
        self.roots = roots;
        self
    }

    /// Assemble the schema, registering builtin scalars that were not
    /// declared explicitly.
    pub fn build(self) -> Result<Schema, SchemaError> {
        let declared: BTreeSet<&str> = self.types.iter().map(NamedType::name).collect();
        let mut types: Vec<NamedType> = BUILTIN_SCALARS
            .iter()
            .filter(|name| !declared.contains(*name))
            .map(|name| ScalarType::new(*name).into())
            .collect();
        types.extend(self.types);

        let mut index = BTreeMap::new();
        for (i, ty) in types.iter().enumerate() {
            if index.insert(ty.name().to_string(), i).is_some() {
                return Err(SchemaError::DuplicateType {
                    name: ty.name().to_string(),
                });
            }

            let mut seen = BTreeSet::new();
            for field in ty.fields() {
                if !seen.insert(field.name.as_str()) {
                    return Err(SchemaError::DuplicateField {
                        type_name: ty.name().to_string(),
                        field: field.name.clone(),
                    });
                }
            }
        }

        Ok(Schema {
            types,
            index,
            roots: self.roots,
        })
    }
}

///
/// SchemaDef
/// Serialized form of a schema.
///

#[derive(Deserialize, Serialize)]
struct SchemaDef {
    #[serde(default)]
    types: Vec<NamedType>,

    #[serde(default)]
    roots: RootTypes,
}

impl TryFrom<SchemaDef> for Schema {
    type Error = SchemaError;

    fn try_from(def: SchemaDef) -> Result<Self, Self::Error> {
        SchemaBuilder {
            types: def.types,
            roots: def.roots,
        }
        .build()
    }
}

impl From<Schema> for SchemaDef {
    fn from(schema: Schema) -> Self {
        Self {
            types: schema.types,
            roots: schema.roots,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{EnumType, Field, TypeRef};

    fn user() -> ObjectType {
        ObjectType::new("User")
            .with_field(Field::new("id", TypeRef::named("ID").non_null()))
            .with_field(Field::new("name", TypeRef::named("String")))
    }

    #[test]
    fn builtin_scalars_are_registered() {
        let schema = Schema::builder().build().unwrap();

        for name in BUILTIN_SCALARS {
            let ty = schema.get_type(name);
            assert!(ty.and_then(NamedType::as_scalar).is_some());
        }
    }

    #[test]
    fn declared_order_is_preserved() {
        let schema = Schema::builder()
            .with_type(user())
            .with_type(EnumType::new("Status", ["ACTIVE"]))
            .with_type(ObjectType::new("Post"))
            .build()
            .unwrap();

        let names: Vec<_> = schema
            .types()
            .skip(BUILTIN_SCALARS.len())
            .map(NamedType::name)
            .collect();
        assert_eq!(names, ["User", "Status", "Post"]);
    }

    #[test]
    fn duplicate_types_are_rejected() {
        let err = Schema::builder()
            .with_type(user())
            .with_type(user())
            .build()
            .unwrap_err();

        let SchemaError::DuplicateType { name } = &err else {
            panic!("unexpected error: {err}");
        };
        assert_eq!(name, "User");
    }

    #[test]
    fn duplicate_fields_are_rejected() {
        let err = Schema::builder()
            .with_type(user().with_field(Field::new("id", TypeRef::named("ID"))))
            .build()
            .unwrap_err();

        let SchemaError::DuplicateField { type_name, field } = &err else {
            panic!("unexpected error: {err}");
        };
        assert_eq!((type_name.as_str(), field.as_str()), ("User", "id"));
    }

    #[test]
    fn data_objects_skip_roots_and_introspection() {
        let schema = Schema::builder()
            .with_type(ObjectType::new("Query"))
            .with_type(ObjectType::new("__Type"))
            .with_type(user())
            .build()
            .unwrap();

        let names: Vec<_> = schema.data_objects().map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["User"]);
    }

    #[test]
    fn custom_root_names_are_honoured() {
        let roots = RootTypes {
            query: Some("RootQuery".to_string()),
            mutation: None,
            subscription: None,
        };
        let schema = Schema::builder()
            .with_roots(roots)
            .with_type(ObjectType::new("RootQuery"))
            .with_type(ObjectType::new("Mutation"))
            .build()
            .unwrap();

        let names: Vec<_> = schema.data_objects().map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["Mutation"]);
    }

    #[test]
    fn loads_from_json() {
        let json = r#"{
            "types": [
                {
                    "kind": "object",
                    "name": "User",
                    "description": "@db.name: \"users\"",
                    "fields": [
                        { "name": "id", "type": { "non_null": { "named": "ID" } } },
                        { "name": "tags", "type": { "list": { "named": "String" } } }
                    ]
                },
                { "kind": "enum", "name": "Role", "values": [{ "name": "ADMIN" }] }
            ]
        }"#;

        let schema = Schema::from_json(json).unwrap();
        let user = schema.object("User").unwrap();

        assert_eq!(user.fields.len(), 2);
        assert_eq!(user.fields[1].ty.to_string(), "[String]");
        let role = schema.get_type("Role");
        assert!(role.and_then(NamedType::as_enum).is_some());
        assert!(schema.roots().contains("Query"));
    }

    #[test]
    fn invalid_json_is_reported() {
        let err = Schema::from_json("{ \"types\": 3 }").unwrap_err();
        assert!(matches!(err, SchemaError::Json(_)));
    }
}
