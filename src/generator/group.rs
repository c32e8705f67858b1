//! Per-group counter state.

use crate::options::GroupOptions;

/// A named sequence: stored options plus its counter.
///
/// Options are kept exactly as given; they are merged with the
/// generator defaults only when a name is formatted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group {
    options: GroupOptions,
    counter: u64,
}

impl Group {
    /// Creates a group with its counter at zero.
    #[must_use]
    pub fn new(options: GroupOptions) -> Self {
        Self { options, counter: 0 }
    }

    /// Options stored for this group.
    #[must_use]
    pub fn options(&self) -> &GroupOptions {
        &self.options
    }

    /// Number of names generated from this group's sequence so far.
    #[must_use]
    pub fn counter(&self) -> u64 {
        self.counter
    }

    /// Increments the counter and returns the new value.
    pub(crate) fn advance(&mut self) -> u64 {
        self.counter += 1;
        self.counter
    }
}
