//! Scalar type resolution.
//!
//! A user-supplied [`ScalarResolver`] is consulted first; [`BuiltinScalars`]
//! covers the standard scalars and explicit `type` annotations.

mod builtin;

pub use builtin::BuiltinScalars;

use crate::{annotation::Annotations, model::Descriptor};
use gqlrel_schema::{Field, ScalarType};

///
/// ScalarResolver
///
/// Maps a field to a column descriptor. `scalar` is `None` when the field
/// is not scalar-typed but carries an explicit `type` annotation. Returning
/// `None` means "unsupported here".
///

pub trait ScalarResolver {
    fn resolve(
        &self,
        field: &Field,
        scalar: Option<&ScalarType>,
        annotations: &Annotations,
    ) -> Option<Descriptor>;
}

impl<F> ScalarResolver for F
where
    F: Fn(&Field, Option<&ScalarType>, &Annotations) -> Option<Descriptor>,
{
    fn resolve(
        &self,
        field: &Field,
        scalar: Option<&ScalarType>,
        annotations: &Annotations,
    ) -> Option<Descriptor> {
        self(field, scalar, annotations)
    }
}

///
/// ScalarChain
/// Optional override resolver backed by the builtin table.
///

#[derive(Clone, Copy)]
pub(crate) struct ScalarChain<'a> {
    custom: Option<&'a dyn ScalarResolver>,
}

impl<'a> ScalarChain<'a> {
    pub(crate) const fn new(custom: Option<&'a dyn ScalarResolver>) -> Self {
        Self { custom }
    }

    pub(crate) fn resolve(
        &self,
        field: &Field,
        scalar: Option<&ScalarType>,
        annotations: &Annotations,
    ) -> Option<Descriptor> {
        self.custom
            .and_then(|custom| custom.resolve(field, scalar, annotations))
            .or_else(|| BuiltinScalars.resolve(field, scalar, annotations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{annotation::keys, model::TypeTag};
    use gqlrel_schema::TypeRef;

    fn money(_: &Field, scalar: Option<&ScalarType>, _: &Annotations) -> Option<Descriptor> {
        (scalar?.name == "Money").then(|| Descriptor::new("decimal"))
    }

    #[test]
    fn custom_resolver_wins_then_builtin_fills_in() {
        let chain = ScalarChain::new(Some(&money));
        let field = Field::new("price", TypeRef::named("Money"));

        let money_ty = ScalarType::new("Money");
        let got = chain.resolve(&field, Some(&money_ty), &Annotations::new());
        assert_eq!(got.unwrap().ty, TypeTag::Decimal);

        let int_ty = ScalarType::new("Int");
        let got = chain.resolve(&field, Some(&int_ty), &Annotations::new());
        assert_eq!(got.unwrap().ty, TypeTag::Integer);
    }

    #[test]
    fn unknown_scalar_without_override_is_unsupported() {
        let chain = ScalarChain::new(None);
        let field = Field::new("avatar", TypeRef::named("Upload"));
        let upload = ScalarType::new("Upload");
        let none = Annotations::new();

        assert!(chain.resolve(&field, Some(&upload), &none).is_none());

        let ann = Annotations::new().with(keys::TYPE, "binary");
        let got = chain.resolve(&field, Some(&upload), &ann).unwrap();
        assert_eq!(got.ty, TypeTag::Binary);
    }
}
