//! Port traits defining the generator's pluggable boundaries.
//!
//! Implementations shipped with the crate live in `src/adapters/`;
//! callers may also pass any `Fn(&Value) -> Option<String>`.

pub mod name_override;

pub use name_override::{NameOverride, NoOverride};
