//! Argument compatibility assessor
//!
//! Walks a changed task's old and new argument lists position by position.
//! The alignment is strictly positional and greedy: an insertion or a
//! reorder in the middle of the list shows up as a run of "replaced"
//! findings followed by "missing" or "new" findings at the tail. Only the
//! argument name is compared at shared positions.

use crate::core::models::{ArgumentDescriptor, Finding};

/// Assess compatibility of `new` against callers written for `old`
///
/// Findings are produced lazily in emission order:
///
/// 1. shared positions whose names differ (`error`)
/// 2. old arguments past the end of `new` (`error`)
/// 3. new arguments past the end of `old` (`error` without a default,
///    `info` with one)
///
/// The returned iterator is `Clone`, so the sequence can be replayed.
pub fn assess<'a>(
    old: &'a [ArgumentDescriptor],
    new: &'a [ArgumentDescriptor],
) -> impl Iterator<Item = Finding> + Clone + 'a {
    let common = old.len().min(new.len());

    let replaced = old
        .iter()
        .zip(new)
        .filter(|(o, n)| o.name != n.name)
        .map(|(o, n)| Finding::argument_replaced(&o.name, &n.name));

    let missing = old[common..].iter().map(|o| Finding::argument_missing(&o.name));

    let appended = new[common..].iter().map(|n| match &n.default {
        None => Finding::argument_added_required(&n.name),
        Some(default) => Finding::argument_added_with_default(&n.name, default),
    });

    replaced.chain(missing).chain(appended)
}
