//! Configuration management
//!
//! Reporting policy is read from TOML. Lookup order:
//!
//! 1. the path given with `--config`
//! 2. `schemadiff.toml` in the current directory
//! 3. `<config dir>/schemadiff/config.toml` (XDG on Linux)
//!
//! The first file found wins; no file at all means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::Severity;

/// Project configuration filename
pub const PROJECT_CONFIG: &str = "schemadiff.toml";

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Explicitly requested config file does not exist
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Config file could not be read
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        /// Config path
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        /// Config path
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },
}

/// Lowest severity that makes `diff` exit non-zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailOn {
    /// Never fail on findings
    Never,
    /// Fail on any finding
    Info,
    /// Fail on warnings and errors
    Warning,
    /// Fail on errors only
    #[default]
    Error,
}

impl FailOn {
    /// Severity threshold, `None` for [`FailOn::Never`]
    #[must_use]
    pub const fn threshold(self) -> Option<Severity> {
        match self {
            Self::Never => None,
            Self::Info => Some(Severity::Info),
            Self::Warning => Some(Severity::Warning),
            Self::Error => Some(Severity::Error),
        }
    }
}

impl std::str::FromStr for FailOn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "never" => Ok(Self::Never),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            _ => Err(format!("Invalid threshold: {s}. Use: never, info, warning, error")),
        }
    }
}

/// When to color human-readable output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Color when writing to a terminal
    #[default]
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

/// Reporting preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Exit non-zero when a finding reaches this severity
    pub fail_on: FailOn,
    /// Print `info` findings in human mode
    pub show_info: bool,
    /// Colored severity labels
    pub color: ColorChoice,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            fail_on: FailOn::default(),
            show_info: true,
            color: ColorChoice::default(),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Reporting preferences
    #[serde(default)]
    pub report: ReportConfig,
}

impl Config {
    /// Global config file path, if the platform has a config directory
    #[must_use]
    pub fn global_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("schemadiff").join("config.toml"))
    }

    /// Load config following the lookup order
    ///
    /// An explicit path must exist; implicit locations are optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_file(path);
        }

        let candidates = std::iter::once(PathBuf::from(PROJECT_CONFIG)).chain(Self::global_path());
        for path in candidates {
            if path.is_file() {
                return Self::load_file(&path);
            }
        }

        log::debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    /// Load config from a specific file
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }
}
