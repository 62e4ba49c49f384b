//! Business logic services
//!
//! Pure logic that operates on domain models. These services have no I/O
//! dependencies - they operate on data passed in and return results.
//!
//! - [`differ`] - Partition two schemas into added, changed and removed tasks
//! - [`assessor`] - Positional argument compatibility walk
//! - [`report`] - Collect findings for every differing task

pub mod assessor;
pub mod differ;
pub mod report;

pub use assessor::assess;
pub use differ::{ChangedTask, DiffResult, diff_schemas};
pub use report::{Report, TaskChange, TaskReport, build_report};
