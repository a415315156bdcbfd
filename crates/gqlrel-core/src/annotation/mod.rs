//! Annotation contracts.
//!
//! Annotations are structured directives embedded in documentation strings
//! under a reserved namespace (`@db.name: "users"`). Parsing that grammar is
//! the job of an external [`AnnotationReader`]; the compiler only consumes
//! the resulting [`Annotations`] mapping.

pub mod keys;

use derive_more::Deref;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

///
/// AnnotationReader
///
/// Parses annotations out of a documentation string and strips them to
/// leave a human-readable comment.
///

pub trait AnnotationReader {
    /// Parse the annotations of `namespace` found in `text`.
    fn parse(&self, namespace: &str, text: Option<&str>) -> Annotations;

    /// Remove annotation syntax from `text`, returning what a reader would
    /// see as the comment.
    fn strip(&self, text: Option<&str>) -> Option<String>;
}

///
/// NoopReader
/// Reader for schemas that carry no annotations.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct NoopReader;

impl AnnotationReader for NoopReader {
    fn parse(&self, _namespace: &str, _text: Option<&str>) -> Annotations {
        Annotations::default()
    }

    fn strip(&self, text: Option<&str>) -> Option<String> {
        text.map(str::to_string)
    }
}

///
/// Annotations
///
/// Parsed annotation mapping: recognized keys to strings, booleans, numbers
/// or structured objects.
///

#[derive(Clone, Debug, Default, Deref, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Annotations(BTreeMap<String, Value>);

impl Annotations {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// True only for an explicit boolean `true`.
    #[must_use]
    pub fn flag(&self, key: &str) -> bool {
        matches!(self.0.get(key), Some(Value::Bool(true)))
    }

    /// True only for an explicit boolean `false`.
    #[must_use]
    pub fn is_false(&self, key: &str) -> bool {
        matches!(self.0.get(key), Some(Value::Bool(false)))
    }

    /// Non-empty string value of `key`.
    #[must_use]
    pub fn str(&self, key: &str) -> Option<&str> {
        match self.0.get(key) {
            Some(Value::String(s)) if !s.is_empty() => Some(s),
            _ => None,
        }
    }

    /// Value of `key` unless absent or JSON null.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Annotations {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let entries = iter.into_iter().map(|(k, v)| (k.into(), v.into()));
        Self(entries.collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flag_requires_literal_true() {
        let ann = Annotations::new()
            .with(keys::SKIP, true)
            .with(keys::PRIMARY, "yes")
            .with(keys::UNIQUE, false);

        assert!(ann.flag(keys::SKIP));
        assert!(!ann.flag(keys::PRIMARY));
        assert!(!ann.flag(keys::UNIQUE));
        assert!(ann.is_false(keys::UNIQUE));
        assert!(!ann.flag(keys::INDEX));
    }

    #[test]
    fn str_ignores_empty_and_non_strings() {
        let ann: Annotations = [
            (keys::NAME, json!("users")),
            (keys::TABLE, json!("")),
            (keys::FOREIGN, json!(3)),
        ]
        .into_iter()
        .collect();

        assert_eq!(ann.str(keys::NAME), Some("users"));
        assert_eq!(ann.str(keys::TABLE), None);
        assert_eq!(ann.str(keys::FOREIGN), None);
    }

    #[test]
    fn value_treats_null_as_absent() {
        let ann = Annotations::new()
            .with(keys::DEFAULT, Value::Null)
            .with(keys::ARGS, json!([1, 2]));

        assert_eq!(ann.value(keys::DEFAULT), None);
        assert_eq!(ann.value(keys::ARGS), Some(&json!([1, 2])));
    }

    #[test]
    fn noop_reader_keeps_comment() {
        let reader = NoopReader;

        assert!(reader.parse("db", Some("@db.skip: true")).is_empty());
        assert_eq!(reader.strip(Some("A user")), Some("A user".to_string()));
        assert_eq!(reader.strip(None), None);
    }
}
