use crate::{
    annotation::{Annotations, keys},
    model::{Descriptor, TypeTag},
    scalar::ScalarResolver,
};
use gqlrel_schema::{Field, ScalarType};
use serde_json::Value;

///
/// BuiltinScalars
///
/// | Scalar     | Tag         | Args                                  |
/// |------------|-------------|---------------------------------------|
/// | `ID`       | `uuid`      |                                       |
/// | `String`   | `text`      | `string` + `[length]` when annotated  |
/// | `Int`      | `integer`   |                                       |
/// | `Float`    | `float`     | `[precision, scale]` when annotated   |
/// | `Boolean`  | `boolean`   |                                       |
/// | `DateTime` | `timestamp` |                                       |
/// | `Date`     | `date`      |                                       |
/// | `Time`     | `time`      |                                       |
/// | `JSON`     | `json`      |                                       |
///
/// An explicit `type` annotation wins, with `args` as its arguments.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinScalars;

impl ScalarResolver for BuiltinScalars {
    fn resolve(
        &self,
        _field: &Field,
        scalar: Option<&ScalarType>,
        annotations: &Annotations,
    ) -> Option<Descriptor> {
        if let Some(tag) = annotations.str(keys::TYPE) {
            let args = match annotations.value(keys::ARGS) {
                Some(Value::Array(args)) => args.clone(),
                Some(single) => vec![single.clone()],
                None => Vec::new(),
            };

            return Some(Descriptor::with_args(tag, args));
        }

        let descriptor = match scalar?.name.as_str() {
            "ID" => Descriptor::new(TypeTag::Uuid),
            "String" => match annotations.value(keys::LENGTH) {
                Some(length) => Descriptor::with_args(TypeTag::String, vec![length.clone()]),
                None => Descriptor::new(TypeTag::Text),
            },
            "Int" => Descriptor::new(TypeTag::Integer),
            "Float" => {
                let precision = annotations.value(keys::PRECISION);
                let scale = annotations.value(keys::SCALE);
                let args = if precision.is_some() || scale.is_some() {
                    vec![
                        precision.cloned().unwrap_or(Value::Null),
                        scale.cloned().unwrap_or(Value::Null),
                    ]
                } else {
                    Vec::new()
                };

                Descriptor::with_args(TypeTag::Float, args)
            }
            "Boolean" => Descriptor::new(TypeTag::Boolean),
            "DateTime" => Descriptor::new(TypeTag::Timestamp),
            "Date" => Descriptor::new(TypeTag::Date),
            "Time" => Descriptor::new(TypeTag::Time),
            "JSON" => Descriptor::new(TypeTag::Json),
            _ => return None,
        };

        Some(descriptor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gqlrel_schema::TypeRef;
    use serde_json::json;

    fn resolve(scalar: &str, annotations: &Annotations) -> Option<Descriptor> {
        let field = Field::new("f", TypeRef::named(scalar));
        BuiltinScalars.resolve(&field, Some(&ScalarType::new(scalar)), annotations)
    }

    #[test]
    fn standard_scalars() {
        let none = Annotations::new();

        assert_eq!(resolve("ID", &none).unwrap().ty, TypeTag::Uuid);
        assert_eq!(resolve("String", &none).unwrap().ty, TypeTag::Text);
        assert_eq!(resolve("Int", &none).unwrap().ty, TypeTag::Integer);
        assert_eq!(
            resolve("Float", &none).unwrap(),
            Descriptor::new(TypeTag::Float)
        );
        assert_eq!(resolve("Boolean", &none).unwrap().ty, TypeTag::Boolean);
        assert_eq!(resolve("DateTime", &none).unwrap().ty, TypeTag::Timestamp);
        assert_eq!(resolve("JSON", &none).unwrap().ty, TypeTag::Json);
        assert!(resolve("Upload", &none).is_none());
    }

    #[test]
    fn string_length_becomes_bounded_string() {
        let ann = Annotations::new().with(keys::LENGTH, 80);
        assert_eq!(
            resolve("String", &ann).unwrap(),
            Descriptor::with_args(TypeTag::String, vec![json!(80)])
        );
    }

    #[test]
    fn float_precision_and_scale() {
        let ann = Annotations::new().with(keys::PRECISION, 10);
        assert_eq!(
            resolve("Float", &ann).unwrap().args,
            vec![json!(10), Value::Null]
        );
    }

    #[test]
    fn explicit_type_needs_no_scalar() {
        let ann = Annotations::new()
            .with(keys::TYPE, "string")
            .with(keys::ARGS, json!([255]));
        let field = Field::new("tags", TypeRef::list(TypeRef::named("String")));

        let got = BuiltinScalars.resolve(&field, None, &ann).unwrap();
        assert_eq!(
            got,
            Descriptor::with_args(TypeTag::String, vec![json!(255)])
        );
    }
}
