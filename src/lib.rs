//! schemadiff - Detect breaking signature changes between task-schema snapshots
//!
//! A task schema maps task names to their ordered call arguments. This
//! library diffs two schemas and classifies every incompatibility an existing
//! caller would hit: renamed, missing, or newly required arguments.
//!
//! ```
//! use schemadiff::core::models::{ArgumentDescriptor, Schema, Severity};
//! use schemadiff::core::services::{build_report, diff_schemas};
//!
//! let old: Schema = [("send", vec![ArgumentDescriptor::new("to")])].into_iter().collect();
//! let new: Schema = [("send", vec![ArgumentDescriptor::new("recipient")])].into_iter().collect();
//!
//! let report = build_report(&diff_schemas(&old, &new));
//! assert_eq!(report.max_severity(), Some(Severity::Error));
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod output;
