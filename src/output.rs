//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON. Human mode prints one line
//! per finding prefixed with `[INFO]`, `[WARNING]` or `[ERROR]` so output can
//! be filtered by severity with plain text tools.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::Severity;
use crate::core::services::{Report, TaskReport};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Options for human-readable rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HumanStyle {
    /// Print `info` findings
    pub show_info: bool,
    /// Color severity labels
    pub color: bool,
}

impl Default for HumanStyle {
    fn default() -> Self {
        Self {
            show_info: true,
            color: false,
        }
    }
}

/// Finding counts per severity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Number of `info` findings
    pub info: usize,
    /// Number of `warning` findings
    pub warning: usize,
    /// Number of `error` findings
    pub error: usize,
}

impl Summary {
    /// Count findings in a report
    #[must_use]
    pub fn of(report: &Report) -> Self {
        Self {
            info: report.count(Severity::Info),
            warning: report.count(Severity::Warning),
            error: report.count(Severity::Error),
        }
    }
}

/// Result of a `diff` operation
#[derive(Debug, Serialize)]
pub struct DiffOutput {
    /// Whether no finding reached the failure threshold
    pub passed: bool,
    /// Old schema document
    pub old: String,
    /// New schema document
    pub new: String,
    /// Finding counts
    pub summary: Summary,
    /// Per-task findings
    pub tasks: Vec<TaskReport>,
}

/// A schema document that loaded successfully
#[derive(Debug, Serialize)]
pub struct ValidatedFile {
    /// Document path
    pub path: String,
    /// Number of tasks in the document
    pub tasks: usize,
}

/// Result of a `validate` operation
#[derive(Debug, Serialize)]
pub struct ValidateOutput {
    /// Documents that were checked
    pub files: Vec<ValidatedFile>,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

fn severity_label(severity: Severity, color: bool) -> String {
    let label = format!("[{}]", severity.label());
    if !color {
        return label;
    }
    match severity {
        Severity::Info => label.cyan().to_string(),
        Severity::Warning => label.yellow().bold().to_string(),
        Severity::Error => label.red().bold().to_string(),
    }
}

impl DiffOutput {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode, style: HumanStyle) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human(style)),
            OutputMode::Json => self.render_json(),
        }
    }

    /// Format the human-readable report
    #[must_use]
    pub fn to_human(&self, style: HumanStyle) -> String {
        let mut out = String::new();

        for task in &self.tasks {
            for finding in &task.findings {
                if finding.severity == Severity::Info && !style.show_info {
                    continue;
                }
                out.push_str(&format!(
                    "{} {}: {}\n",
                    severity_label(finding.severity, style.color),
                    task.task,
                    finding.message
                ));
            }
        }

        if self.tasks.is_empty() {
            out.push_str("Schemas are identical.\n");
            return out;
        }

        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&format!(
            "{} task(s) differ: {} error(s), {} warning(s), {} info\n",
            self.tasks.len(),
            self.summary.error,
            self.summary.warning,
            self.summary.info
        ));
        if !self.passed {
            out.push_str("FAILED: incompatible schema changes\n");
        }
        out
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl ValidateOutput {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                for file in &self.files {
                    println!("{}: {} task(s)", file.path, file.tasks);
                }
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
