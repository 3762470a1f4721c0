//! Common types and traits for all admin entities

pub mod aggregate_root;
pub mod reference;

// Re-exports
pub use aggregate_root::AggregateRoot;
pub use reference::{one_or_many, Reference};
