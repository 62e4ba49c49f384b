//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core business logic and the
//! systems that produce schemas (task registries, plugin hosts).
//!
//! Implementations live in the `adapters` module.

mod schema_source;

pub use schema_source::{SchemaSource, generate_schema};
