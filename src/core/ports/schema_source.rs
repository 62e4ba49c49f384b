//! Schema source port
//!
//! Anything that can enumerate tasks and describe their call signatures:
//! an in-process registry, a plugin host, a generated manifest.

use crate::core::models::{ArgumentList, Schema};

/// Provider of task signatures
///
/// Implementations are the only place that knows how a task's callable is
/// represented; the core only ever sees argument lists.
#[cfg_attr(test, mockall::automock)]
pub trait SchemaSource: Send + Sync {
    /// Names of all tasks known to this source
    fn task_names(&self) -> Vec<String>;

    /// Describe one task's arguments in positional order
    ///
    /// Returns `None` if the task is unknown to this source.
    fn describe(&self, task: &str) -> Option<ArgumentList>;
}

/// Snapshot every task of a source into a schema sorted by task name
///
/// Names the source lists but cannot describe are skipped.
#[must_use]
pub fn generate_schema<S: SchemaSource + ?Sized>(source: &S) -> Schema {
    let mut names = source.task_names();
    names.sort();
    names.dedup();

    names
        .into_iter()
        .filter_map(|name| match source.describe(&name) {
            Some(args) => Some((name, args)),
            None => {
                log::warn!("task {name} is listed but has no description, skipping");
                None
            },
        })
        .collect()
}
