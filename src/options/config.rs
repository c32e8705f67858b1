//! Generator-wide configuration: default options plus pre-declared groups.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use super::GroupOptions;
use crate::error::GeneratorError;

/// Options a generator is constructed with.
///
/// In serialized form the two parts share one map: scalar fields are
/// default options, object-valued fields declare groups.
///
/// ```yaml
/// digits: 4          # default option
/// page:              # group "page"
///   digits: 5
///   prefix: Page-
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub struct GeneratorConfig {
    /// Options applied to every group unless the group overrides them.
    pub defaults: GroupOptions,
    /// Groups created at construction, keyed by name.
    pub groups: BTreeMap<String, GroupOptions>,
}

impl GeneratorConfig {
    /// Config carrying only default options.
    #[must_use]
    pub fn with_defaults(defaults: GroupOptions) -> Self {
        Self { defaults, groups: BTreeMap::new() }
    }

    /// Adds a pre-declared group.
    #[must_use]
    pub fn group(mut self, name: impl Into<String>, options: GroupOptions) -> Self {
        self.groups.insert(name.into(), options);
        self
    }

    /// Splits a loosely-typed options map into defaults and groups.
    ///
    /// Anything other than an object is treated as "no options". Fields
    /// holding a value of the wrong type are skipped with a warning, so the
    /// affected option falls back to the next less specific layer.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        let Value::Object(entries) = value else {
            return Self::default();
        };

        let mut scalars = Map::new();
        let mut groups = BTreeMap::new();
        for (key, value) in entries {
            if let Value::Object(options) = &value {
                groups.insert(key.clone(), GroupOptions::from_map(&key, options));
            } else {
                scalars.insert(key, value);
            }
        }

        Self { defaults: GroupOptions::from_map("defaults", &scalars), groups }
    }

    /// Parses YAML (or JSON, which YAML accepts) text.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidConfig`] if the text is not valid
    /// YAML or JSON.
    pub fn parse(text: &str) -> Result<Self, GeneratorError> {
        let value: Value =
            serde_yaml::from_str(text).map_err(|e| GeneratorError::InvalidConfig(e.to_string()))?;
        Ok(Self::from_value(value))
    }

    /// Reads and parses a config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, GeneratorError> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| GeneratorError::ConfigIo { path: path.to_path_buf(), source })?;
        Self::parse(&text)
    }
}

impl From<Value> for GeneratorConfig {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}
