//! Override adapter that reads the name out of context fields.

use serde_json::Value;

use crate::ports::NameOverride;

/// Looks up `keys` in an object context, in order, and returns the first
/// non-empty string or number found.
///
/// `FieldOverride::new(["_id", "name"])` behaves like
/// `|ctx| ctx._id || ctx.name`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldOverride {
    keys: Vec<String>,
}

impl FieldOverride {
    /// Creates an adapter consulting `keys` in order.
    #[must_use]
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { keys: keys.into_iter().map(Into::into).collect() }
    }

    /// The keys consulted, in priority order.
    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }
}

impl NameOverride for FieldOverride {
    fn name_for(&self, context: &Value) -> Option<String> {
        let object = context.as_object()?;
        self.keys.iter().find_map(|key| match object.get(key)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn id_or_name() -> FieldOverride {
        FieldOverride::new(["_id", "name"])
    }

    #[test]
    fn first_present_key_wins() {
        let ov = id_or_name();
        assert_eq!(ov.name_for(&json!({"_id": "my-id", "name": "n"})), Some("my-id".into()));
        assert_eq!(ov.name_for(&json!({"name": "my-name"})), Some("my-name".into()));
    }

    #[test]
    fn empty_strings_are_skipped() {
        let ov = id_or_name();
        assert_eq!(ov.name_for(&json!({"_id": "", "name": "n"})), Some("n".into()));
    }

    #[test]
    fn numbers_are_stringified() {
        assert_eq!(id_or_name().name_for(&json!({"_id": 42})), Some("42".into()));
    }

    #[test]
    fn missing_fields_and_non_objects_yield_none() {
        let ov = id_or_name();
        assert_eq!(ov.name_for(&json!({"foo": "bar", "baz": "bang"})), None);
        assert_eq!(ov.name_for(&json!("loose string")), None);
        assert_eq!(ov.name_for(&json!({"_id": null, "name": true})), None);
    }
}
