//! Report service - turns a schema diff into per-task findings
//!
//! Tasks are reported in the order added, changed, removed.

use serde::Serialize;

use super::differ::DiffResult;
use crate::core::models::{Finding, Severity};

/// How a task differs between the two schemas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskChange {
    /// Only in the new schema
    Added,
    /// In both, with different arguments
    Changed,
    /// Only in the old schema
    Removed,
}

/// Findings for one task
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskReport {
    /// Task name
    pub task: String,
    /// How the task differs
    pub change: TaskChange,
    /// Findings for this task, in emission order
    pub findings: Vec<Finding>,
}

/// Full comparison report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    /// One entry per differing task
    pub tasks: Vec<TaskReport>,
}

impl Report {
    /// Iterate over `(task, finding)` pairs in report order
    pub fn findings(&self) -> impl Iterator<Item = (&str, &Finding)> {
        self.tasks
            .iter()
            .flat_map(|t| t.findings.iter().map(move |f| (t.task.as_str(), f)))
    }

    /// Number of findings with exactly this severity
    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.findings().filter(|(_, f)| f.severity == severity).count()
    }

    /// Highest severity across all findings
    #[must_use]
    pub fn max_severity(&self) -> Option<Severity> {
        self.findings().map(|(_, f)| f.severity).max()
    }

    /// Whether no finding reaches `threshold`
    #[must_use]
    pub fn passes(&self, threshold: Option<Severity>) -> bool {
        match (threshold, self.max_severity()) {
            (Some(threshold), Some(max)) => max < threshold,
            _ => true,
        }
    }

    /// Whether the report has no findings at all
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.max_severity().is_none()
    }
}

/// Build a report from a schema diff
#[must_use]
pub fn build_report(diff: &DiffResult) -> Report {
    let added = diff.added.names().map(|name| TaskReport {
        task: name.to_string(),
        change: TaskChange::Added,
        findings: vec![Finding::task_added(name)],
    });

    let changed = diff.changed.iter().map(|(name, task)| {
        let findings: Vec<Finding> = task.assess().collect();
        log::trace!("{name}: {} finding(s)", findings.len());
        TaskReport {
            task: name.clone(),
            change: TaskChange::Changed,
            findings,
        }
    });

    let removed = diff.removed.names().map(|name| TaskReport {
        task: name.to_string(),
        change: TaskChange::Removed,
        findings: vec![Finding::task_removed(name)],
    });

    Report {
        tasks: added.chain(changed).chain(removed).collect(),
    }
}
