//! Schema differ - partitions task names into added, changed and removed
//!
//! Task names are the key. A task present in both schemas is changed when
//! its argument lists are not structurally equal, order included.

use std::collections::HashMap;

use serde::Serialize;

use super::assessor::assess;
use crate::core::models::{ArgumentList, Finding, Schema};

/// Old and new argument lists of a task present in both schemas
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangedTask {
    /// Arguments in the old schema
    pub old: ArgumentList,
    /// Arguments in the new schema
    pub new: ArgumentList,
}

impl ChangedTask {
    /// Run the positional compatibility walk over this task's arguments
    pub fn assess(&self) -> impl Iterator<Item = Finding> + Clone + '_ {
        assess(&self.old, &self.new)
    }
}

/// Set-level difference between two schemas
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiffResult {
    /// Tasks only in the new schema, in new-schema order
    pub added: Schema,
    /// Tasks in both with differing arguments, in old-schema order
    pub changed: Vec<(String, ChangedTask)>,
    /// Tasks only in the old schema, in old-schema order
    pub removed: Schema,
}

impl DiffResult {
    /// Whether the two schemas were identical
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.added.is_empty() && self.changed.is_empty() && self.removed.is_empty()
    }
}

/// Compare two schema snapshots
///
/// This is pure business logic with no I/O. Any two schemas, empty ones
/// included, are valid input.
#[must_use]
pub fn diff_schemas(old: &Schema, new: &Schema) -> DiffResult {
    let old_index: HashMap<&str, &ArgumentList> = old.iter().collect();
    let new_index: HashMap<&str, &ArgumentList> = new.iter().collect();

    let added = new
        .iter()
        .filter(|(name, _)| !old_index.contains_key(name))
        .map(|(name, args)| (name, args.clone()))
        .collect();

    let mut changed = Vec::new();
    let mut removed = Schema::new();
    for (name, old_args) in old.iter() {
        match new_index.get(name) {
            Some(new_args) if *new_args != old_args => changed.push((
                name.to_string(),
                ChangedTask {
                    old: old_args.clone(),
                    new: (*new_args).clone(),
                },
            )),
            Some(_) => {},
            None => {
                removed.insert(name, old_args.clone());
            },
        }
    }

    let result = DiffResult {
        added,
        changed,
        removed,
    };
    log::debug!(
        "schema diff: {} added, {} changed, {} removed",
        result.added.len(),
        result.changed.len(),
        result.removed.len()
    );
    result
}
