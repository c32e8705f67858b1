//! The grouped sequential name generator.
//!
//! A [`Generator`] keeps independent counters per named group. Each
//! [`next`](Generator::next) call first asks the override for a name and,
//! only when it declines, advances the addressed group's counter and
//! formats it.

mod group;
mod request;

use std::collections::BTreeMap;
use std::fmt;

use tracing::{debug, trace, warn};

use crate::error::GeneratorError;
use crate::options::{GeneratorConfig, GroupOptions, ResolvedOptions};
use crate::ports::{NameOverride, NoOverride};

pub use group::Group;
pub use request::Request;

/// Name of the group that always exists.
pub const DEFAULT_GROUP: &str = "default";

/// Generates sequential, zero-padded names organized into groups.
pub struct Generator {
    name_override: Box<dyn NameOverride>,
    defaults: GroupOptions,
    groups: BTreeMap<String, Group>,
}

impl Generator {
    /// A generator with builtin options and no override.
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(NoOverride, GeneratorConfig::default())
    }

    /// A generator that consults `name_override` first.
    #[must_use]
    pub fn with_override(name_override: impl NameOverride + 'static) -> Self {
        Self::from_parts(name_override, GeneratorConfig::default())
    }

    /// A generator with configured defaults and groups, and no override.
    #[must_use]
    pub fn with_options(config: GeneratorConfig) -> Self {
        Self::from_parts(NoOverride, config)
    }

    /// A generator with both an override and configuration.
    ///
    /// A `"default"` entry in `config.groups` becomes the default group's
    /// own options; otherwise the default group starts with none and
    /// inherits `config.defaults`.
    #[must_use]
    pub fn from_parts(name_override: impl NameOverride + 'static, config: GeneratorConfig) -> Self {
        let GeneratorConfig { defaults, mut groups } = config;

        let default_options = groups.remove(DEFAULT_GROUP).unwrap_or_default();
        let mut table = BTreeMap::new();
        table.insert(DEFAULT_GROUP.to_owned(), Group::new(default_options));
        for (name, options) in groups {
            table.insert(name, Group::new(options));
        }

        Self { name_override: Box::new(name_override), defaults, groups: table }
    }

    /// Creates or replaces a group, resetting its counter to zero.
    ///
    /// Returns `self` so calls can be chained with `?`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::EmptyGroupName`] if `name` is empty.
    pub fn create_group(
        &mut self,
        name: impl Into<String>,
        options: GroupOptions,
    ) -> Result<&mut Self, GeneratorError> {
        let name = name.into();
        if name.is_empty() {
            return Err(GeneratorError::EmptyGroupName);
        }
        trace!(group = %name, ?options, "creating group");
        self.groups.insert(name, Group::new(options));
        Ok(self)
    }

    /// Looks up a group without creating it.
    #[must_use]
    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.get(name)
    }

    /// All groups in name order.
    #[must_use]
    pub fn groups(&self) -> impl Iterator<Item = (&str, &Group)> {
        self.groups.iter().map(|(name, group)| (name.as_str(), group))
    }

    /// Generator-wide default options.
    #[must_use]
    pub fn defaults(&self) -> &GroupOptions {
        &self.defaults
    }

    /// The options a fallback name in `name` would be formatted with,
    /// ignoring per-call options.
    #[must_use]
    pub fn resolved_options(&self, name: &str) -> Option<ResolvedOptions> {
        let group = self.groups.get(name)?;
        Some(ResolvedOptions::resolve(&[&self.defaults, group.options()]))
    }

    /// Produces the next name.
    ///
    /// Accepts any [`Request`] shape: `()`, a group name, a JSON context,
    /// or `(group, per_call_options)`. The override sees only the context;
    /// a non-empty answer is returned verbatim and no counter moves.
    /// Otherwise the addressed group (or `"default"` if unknown) advances
    /// by one and its counter is formatted.
    pub fn next(&mut self, request: impl Into<Request>) -> String {
        let call = request.into().into_call();

        if let Some(name) = self.name_override.name_for(&call.context) {
            if !name.is_empty() {
                debug!(%name, "override supplied name");
                return name;
            }
        }

        self.next_in_sequence(call.group.as_deref().unwrap_or(DEFAULT_GROUP), &call.options)
    }

    /// Shorthand for `next(())`.
    pub fn next_default(&mut self) -> String {
        self.next(Request::Default)
    }

    /// Shorthand for `next(group)`.
    pub fn next_in(&mut self, group: &str) -> String {
        self.next(group)
    }

    /// Produces `count` names for the same request, in order.
    pub fn take(&mut self, request: impl Into<Request>, count: usize) -> Vec<String> {
        let request = request.into();
        (0..count).map(|_| self.next(request.clone())).collect()
    }

    fn next_in_sequence(&mut self, name: &str, per_call: &GroupOptions) -> String {
        let (key, group) = match self.groups.get_mut(name) {
            Some(group) => (name, group),
            None => {
                warn!(group = %name, "unknown group, falling back to default");
                let group = self
                    .groups
                    .get_mut(DEFAULT_GROUP)
                    .expect("default group is created at construction");
                (DEFAULT_GROUP, group)
            }
        };

        let counter = group.advance();
        let resolved = ResolvedOptions::resolve(&[&self.defaults, group.options(), per_call]);
        debug!(group = %key, counter, "generated from sequence");
        resolved.format(counter)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("defaults", &self.defaults)
            .field("groups", &self.groups)
            .finish_non_exhaustive()
    }
}
