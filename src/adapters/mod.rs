//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `document` - YAML / JSON schema documents
//! - `registry` - In-memory task registry implementing `SchemaSource`

pub mod document;
pub mod registry;

pub use document::{DocumentFormat, SchemaError, dump_schema, load_schema, parse_schema, save_schema};
pub use registry::{TaskRegistry, TaskSignature};
