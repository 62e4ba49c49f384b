//! Property-based tests for the differ and assessor
//!
//! Uses proptest to verify properties that should hold for all inputs.

use std::collections::BTreeSet;

use proptest::prelude::*;
use schemadiff::core::models::{ArgumentDescriptor, ArgumentList, Schema, Severity};
use schemadiff::core::services::{assess, diff_schemas};

fn argument() -> impl Strategy<Value = ArgumentDescriptor> {
    ("[a-e]", proptest::option::of("[0-9]")).prop_map(|(name, default)| ArgumentDescriptor {
        default,
        ..ArgumentDescriptor::new(name)
    })
}

fn argument_list() -> impl Strategy<Value = ArgumentList> {
    proptest::collection::vec(argument(), 0..5)
}

fn schema() -> impl Strategy<Value = Schema> {
    proptest::collection::btree_map("t[0-9]", argument_list(), 0..6)
        .prop_map(|tasks| tasks.into_iter().collect())
}

proptest! {
    /// Diffing a schema against itself finds nothing
    #[test]
    fn self_diff_is_empty(s in schema()) {
        prop_assert!(diff_schemas(&s, &s).is_empty());
    }

    /// Added, changed and removed never overlap and cover every differing name
    #[test]
    fn partitions_are_disjoint(old in schema(), new in schema()) {
        let diff = diff_schemas(&old, &new);
        let added: BTreeSet<_> = diff.added.names().collect();
        let removed: BTreeSet<_> = diff.removed.names().collect();
        let changed: BTreeSet<_> = diff.changed.iter().map(|(n, _)| n.as_str()).collect();

        prop_assert!(added.is_disjoint(&removed));
        prop_assert!(added.is_disjoint(&changed));
        prop_assert!(removed.is_disjoint(&changed));

        for name in old.names().chain(new.names()) {
            let identical = old.get(name).is_some() && old.get(name) == new.get(name);
            let listed = added.contains(name) || removed.contains(name) || changed.contains(name);
            prop_assert_eq!(identical, !listed);
        }
    }

    /// Assessing the same lists twice yields the same findings
    #[test]
    fn assess_is_deterministic(old in argument_list(), new in argument_list()) {
        let first: Vec<_> = assess(&old, &new).collect();
        let second: Vec<_> = assess(&old, &new).collect();
        prop_assert_eq!(first, second);
    }

    /// Tail findings account for exactly the length difference
    #[test]
    fn tail_findings_match_length_difference(old in argument_list(), new in argument_list()) {
        let common = old.len().min(new.len());
        let renamed = old.iter().zip(&new).filter(|(o, n)| o.name != n.name).count();
        let total = assess(&old, &new).count();
        prop_assert_eq!(total, renamed + (old.len() - common) + (new.len() - common));
    }

    /// Appending only defaulted arguments never produces an error
    #[test]
    fn appending_defaults_is_compatible(
        old in argument_list(),
        extra in proptest::collection::vec(("[f-z]", "[0-9]"), 0..4),
    ) {
        let mut new = old.clone();
        new.extend(extra.into_iter().map(|(n, d)| ArgumentDescriptor::new(n).with_default(d)));
        prop_assert!(assess(&old, &new).all(|f| f.severity == Severity::Info));
    }
}
