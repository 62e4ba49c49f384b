//! Finding model
//!
//! A finding is the output unit of schema comparison: one classified,
//! severity-tagged diagnostic.

use serde::{Deserialize, Serialize};

use super::Severity;

/// What kind of discrepancy a finding reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    /// Task exists only in the new schema
    TaskAdded,
    /// Task exists only in the old schema
    TaskRemoved,
    /// Different argument name at the same position
    ArgumentReplaced,
    /// Old argument has no counterpart in the new list
    ArgumentMissing,
    /// New trailing argument callers must now supply
    ArgumentAddedRequired,
    /// New trailing argument with a default value
    ArgumentAddedWithDefault,
}

impl FindingKind {
    /// Severity this kind of discrepancy is reported with
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::ArgumentAddedWithDefault => Severity::Info,
            Self::TaskAdded | Self::TaskRemoved => Severity::Warning,
            Self::ArgumentReplaced | Self::ArgumentMissing | Self::ArgumentAddedRequired => {
                Severity::Error
            },
        }
    }
}

/// A single classified diagnostic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// How serious the discrepancy is
    pub severity: Severity,
    /// Classification
    pub kind: FindingKind,
    /// Human-readable description
    pub message: String,
}

impl Finding {
    fn of(kind: FindingKind, message: String) -> Self {
        Self {
            severity: kind.severity(),
            kind,
            message,
        }
    }

    /// `old` was renamed to `new` at the same position
    #[must_use]
    pub fn argument_replaced(old: &str, new: &str) -> Self {
        Self::of(FindingKind::ArgumentReplaced, format!("argument {old} was replaced with {new}"))
    }

    /// `name` is gone from the new argument list
    #[must_use]
    pub fn argument_missing(name: &str) -> Self {
        Self::of(FindingKind::ArgumentMissing, format!("missing argument: {name}"))
    }

    /// `name` was appended without a default
    #[must_use]
    pub fn argument_added_required(name: &str) -> Self {
        Self::of(
            FindingKind::ArgumentAddedRequired,
            format!("new argument {name} without default value"),
        )
    }

    /// `name` was appended with `default`
    #[must_use]
    pub fn argument_added_with_default(name: &str, default: &str) -> Self {
        Self::of(
            FindingKind::ArgumentAddedWithDefault,
            format!("new argument {name} with default value: {default}"),
        )
    }

    /// Task only present in the new schema
    #[must_use]
    pub fn task_added(task: &str) -> Self {
        Self::of(FindingKind::TaskAdded, format!("added task: {task}"))
    }

    /// Task only present in the old schema
    #[must_use]
    pub fn task_removed(task: &str) -> Self {
        Self::of(FindingKind::TaskRemoved, format!("removed task: {task}"))
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.severity.label(), self.message)
    }
}
