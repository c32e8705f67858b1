//! The call shapes accepted by [`Generator::next`](super::Generator::next).

use serde_json::{Map, Value};

use crate::options::GroupOptions;

/// What a single `next` call asks for.
///
/// Every shape normalizes to a group name (absent means `"default"`), a
/// context for the override (an empty object unless given), and per-call
/// options.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    /// The default group, no context.
    Default,
    /// A context handed to the override; falls back to the default group.
    Context(Value),
    /// A named group, empty context.
    Group(String),
    /// A named group with options applied to this call only.
    GroupWith(String, GroupOptions),
}

/// A request after normalization.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Call {
    pub group: Option<String>,
    pub context: Value,
    pub options: GroupOptions,
}

impl Request {
    pub(crate) fn into_call(self) -> Call {
        let empty = || Value::Object(Map::new());
        match self {
            Request::Default => {
                Call { group: None, context: empty(), options: GroupOptions::default() }
            }
            Request::Context(context) => {
                Call { group: None, context, options: GroupOptions::default() }
            }
            Request::Group(name) => {
                Call { group: Some(name), context: empty(), options: GroupOptions::default() }
            }
            Request::GroupWith(name, options) => {
                Call { group: Some(name), context: empty(), options }
            }
        }
    }
}

impl From<()> for Request {
    fn from((): ()) -> Self {
        Request::Default
    }
}

impl From<&str> for Request {
    fn from(group: &str) -> Self {
        Request::Group(group.to_owned())
    }
}

impl From<String> for Request {
    fn from(group: String) -> Self {
        Request::Group(group)
    }
}

/// A JSON string addresses a group; any other value is a context.
impl From<Value> for Request {
    fn from(value: Value) -> Self {
        match value {
            Value::String(group) => Request::Group(group),
            Value::Null => Request::Default,
            context => Request::Context(context),
        }
    }
}

impl From<(&str, GroupOptions)> for Request {
    fn from((group, options): (&str, GroupOptions)) -> Self {
        Request::GroupWith(group.to_owned(), options)
    }
}

impl From<(String, GroupOptions)> for Request {
    fn from((group, options): (String, GroupOptions)) -> Self {
        Request::GroupWith(group, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strings_address_groups() {
        assert_eq!(Request::from("page"), Request::Group("page".into()));
        assert_eq!(Request::from(json!("page")), Request::Group("page".into()));
    }

    #[test]
    fn objects_are_contexts() {
        let call = Request::from(json!({"_id": "a"})).into_call();
        assert_eq!(call.group, None);
        assert_eq!(call.context, json!({"_id": "a"}));
    }

    #[test]
    fn null_and_unit_mean_default() {
        assert_eq!(Request::from(()), Request::Default);
        assert_eq!(Request::from(Value::Null), Request::Default);
    }

    #[test]
    fn group_calls_carry_empty_context() {
        let call = Request::from(("page", GroupOptions::new().digits(2))).into_call();
        assert_eq!(call.group.as_deref(), Some("page"));
        assert_eq!(call.context, json!({}));
        assert_eq!(call.options.digit_width, Some(2));
    }
}
