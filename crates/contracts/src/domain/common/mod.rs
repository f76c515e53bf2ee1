//! Common types and traits for all records

pub mod field_value;
pub mod record;

// Re-exports
pub use field_value::FieldValue;
pub use record::Record;
