//! Domain models for schemadiff
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`ArgumentDescriptor`] - One parameter of a task signature
//! - [`Schema`] - Ordered task name → argument list mapping
//! - [`Finding`] - A classified, severity-tagged diagnostic
//! - [`Severity`] - How serious a finding is

mod argument;
mod finding;
mod schema;
mod severity;

pub use argument::{ArgumentDescriptor, ArgumentKind, ArgumentList};
pub use finding::{Finding, FindingKind};
pub use schema::Schema;
pub use severity::Severity;
