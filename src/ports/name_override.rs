//! Override port consulted before counter-based naming.

use serde_json::Value;

/// Produces a caller-chosen name for a context, if it has one.
///
/// Returning `None` (or an empty string) hands the call back to the
/// generator's own counter sequence.
pub trait NameOverride {
    /// Returns a name for `context`, or `None` to fall back.
    fn name_for(&self, context: &Value) -> Option<String>;
}

impl<F> NameOverride for F
where
    F: Fn(&Value) -> Option<String>,
{
    fn name_for(&self, context: &Value) -> Option<String> {
        self(context)
    }
}

/// Override that never produces a name.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOverride;

impl NameOverride for NoOverride {
    fn name_for(&self, _context: &Value) -> Option<String> {
        None
    }
}
