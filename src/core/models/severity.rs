//! Finding severity levels
//!
//! Defines how serious a reported schema discrepancy is. The ordering
//! `Info < Warning < Error` is what exit-code thresholds compare against.

use serde::{Deserialize, Serialize};

/// Finding severity levels
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational - compatible change worth knowing about
    #[default]
    Info,
    /// Warning - a task appeared or disappeared
    Warning,
    /// Error - existing callers will break
    Error,
}

impl Severity {
    /// Uppercase label used in human-readable output (`[ERROR]`, ...)
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}
