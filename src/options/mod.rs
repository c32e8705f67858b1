//! Formatting options for name groups and their precedence rules.
//!
//! Options are stored sparsely and only collapsed into a
//! [`ResolvedOptions`] when a name is formatted. Layers are merged in
//! order, later layers winning field by field:
//!
//! ```text
//! builtin < generator defaults < group options < per-call options
//! ```

pub mod config;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::warn;

use crate::format::{decimal_width, pad, MAX_WIDTH};

pub use config::GeneratorConfig;

/// Digit width used when neither `digitWidth` nor `autoMax` is set anywhere.
pub const DEFAULT_DIGIT_WIDTH: usize = 3;

/// Sparse formatting options for a group.
///
/// Unset fields defer to the next, less specific layer. Deserializing is
/// lenient: fields holding a value of the wrong type are skipped with a
/// warning, and a non-object yields empty options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub struct GroupOptions {
    /// Fixed width for zero-padding the counter.
    pub digit_width: Option<usize>,
    /// Expected maximum count; its decimal length becomes the width when
    /// `digit_width` is unset.
    pub auto_max: Option<u64>,
    /// Text prepended to every generated name.
    pub prefix: Option<String>,
}

impl GroupOptions {
    /// Options with nothing set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The builtin bottom layer. Only the prefix is fixed here; the digit
    /// width falls back to [`DEFAULT_DIGIT_WIDTH`] after `auto_max` has had
    /// its chance.
    #[must_use]
    pub fn builtin() -> Self {
        Self { digit_width: None, auto_max: None, prefix: Some(String::new()) }
    }

    /// Sets the zero-padding width.
    #[must_use]
    pub fn digits(mut self, width: usize) -> Self {
        self.digit_width = Some(width);
        self
    }

    /// Derives the width from the decimal length of `max`.
    #[must_use]
    pub fn auto(mut self, max: u64) -> Self {
        self.auto_max = Some(max);
        self
    }

    /// Sets the name prefix.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Reads options from a loosely-typed map.
    ///
    /// Accepts `digitWidth`/`digit_width`/`digits`, `autoMax`/`auto_max`/`auto`
    /// and `prefix`. Unknown keys and `null` values are ignored; a value of
    /// the wrong type is logged under `scope` and left unset.
    #[must_use]
    pub fn from_map(scope: &str, map: &Map<String, Value>) -> Self {
        let mut options = Self::default();
        for (key, value) in map {
            if value.is_null() {
                continue;
            }
            let applied = match key.as_str() {
                "digitWidth" | "digit_width" | "digits" => {
                    field(value).map(|width| options.digit_width = Some(width))
                }
                "autoMax" | "auto_max" | "auto" => {
                    field(value).map(|max| options.auto_max = Some(max))
                }
                "prefix" => field(value).map(|prefix| options.prefix = Some(prefix)),
                _ => continue,
            };
            if let Err(e) = applied {
                warn!(scope, field = %key, error = %e, "ignoring invalid option");
            }
        }
        options
    }

    /// Returns true when no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Shallow merge where fields set on `over` win.
    #[must_use]
    pub fn merge(&self, over: &GroupOptions) -> GroupOptions {
        GroupOptions {
            digit_width: over.digit_width.or(self.digit_width),
            auto_max: over.auto_max.or(self.auto_max),
            prefix: over.prefix.clone().or_else(|| self.prefix.clone()),
        }
    }
}

impl From<Value> for GroupOptions {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::from_map("options", &map),
            _ => Self::default(),
        }
    }
}

fn field<T: DeserializeOwned>(value: &Value) -> Result<T, serde_json::Error> {
    T::deserialize(value)
}

/// Fully resolved options, ready to format a counter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    /// Minimum numeral width.
    pub digit_width: usize,
    /// Prefix for every name.
    pub prefix: String,
}

impl ResolvedOptions {
    /// Merges `layers` over the builtin layer, least specific first.
    #[must_use]
    pub fn resolve(layers: &[&GroupOptions]) -> Self {
        let merged =
            layers.iter().fold(GroupOptions::builtin(), |acc, layer| acc.merge(layer));

        let digit_width = merged
            .digit_width
            .or_else(|| merged.auto_max.map(decimal_width))
            .unwrap_or(DEFAULT_DIGIT_WIDTH)
            .min(MAX_WIDTH);

        Self { digit_width, prefix: merged.prefix.unwrap_or_default() }
    }

    /// Formats a counter value as `prefix + padded numeral`.
    #[must_use]
    pub fn format(&self, counter: u64) -> String {
        format!("{}{}", self.prefix, pad(counter, self.digit_width))
    }
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        Self::resolve(&[])
    }
}
