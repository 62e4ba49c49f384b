//! Schema documents on disk
//!
//! Reads and writes schemas as YAML or JSON. The top level is a mapping of
//! task name to a list of `{name, kind, default}` records; key order in the
//! document is kept as task order.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::models::Schema;

/// Errors raised while loading or saving schema documents
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Document could not be read
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Document path
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Document could not be written
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Document path
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// YAML syntax or shape error
    #[error("invalid YAML schema: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON syntax or shape error
    #[error("invalid JSON schema: {0}")]
    Json(#[from] serde_json::Error),

    /// Parse error with the offending file attached
    #[error("{}: {source}", path.display())]
    InFile {
        /// Document path
        path: PathBuf,
        /// What went wrong
        source: Box<SchemaError>,
    },
}

/// Serialization format of a schema document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentFormat {
    /// YAML (`.yaml`, `.yml`)
    #[default]
    Yaml,
    /// JSON (`.json`)
    Json,
}

impl DocumentFormat {
    /// Pick a format from a file extension, falling back to YAML
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// Parse a schema document
///
/// An empty (or whitespace-only) document is an empty schema.
pub fn parse_schema(content: &str, format: DocumentFormat) -> Result<Schema, SchemaError> {
    if content.trim().is_empty() {
        return Ok(Schema::new());
    }

    let schema: Schema = match format {
        DocumentFormat::Yaml => serde_yaml::from_str(content)?,
        DocumentFormat::Json => serde_json::from_str(content)?,
    };
    Ok(schema)
}

/// Serialize a schema document
pub fn dump_schema(schema: &Schema, format: DocumentFormat) -> Result<String, SchemaError> {
    let content = match format {
        DocumentFormat::Yaml => serde_yaml::to_string(schema)?,
        DocumentFormat::Json => {
            let mut s = serde_json::to_string_pretty(schema)?;
            s.push('\n');
            s
        },
    };
    Ok(content)
}

/// Load a schema document, choosing the format from the file extension
pub fn load_schema(path: &Path) -> Result<Schema, SchemaError> {
    let content = fs::read_to_string(path).map_err(|source| SchemaError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let schema =
        parse_schema(&content, DocumentFormat::from_path(path)).map_err(|e| SchemaError::InFile {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;
    log::debug!("loaded {} task(s) from {}", schema.len(), path.display());
    Ok(schema)
}

/// Write a schema document, choosing the format from the file extension
pub fn save_schema(path: &Path, schema: &Schema) -> Result<(), SchemaError> {
    let content = dump_schema(schema, DocumentFormat::from_path(path))?;
    fs::write(path, content).map_err(|source| SchemaError::Write {
        path: path.to_path_buf(),
        source,
    })
}
