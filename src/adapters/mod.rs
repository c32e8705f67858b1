//! Ready-made override adapters.

pub mod field;

pub use field::FieldOverride;
