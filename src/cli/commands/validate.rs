//! Check that schema documents load

use std::path::PathBuf;
use std::process::ExitCode;

use schemadiff::adapters::load_schema;
use schemadiff::output::{OutputMode, ValidatedFile, ValidateOutput};

/// Load every document, failing on the first malformed one
pub fn validate(files: &[PathBuf], mode: OutputMode) -> anyhow::Result<ExitCode> {
    let mut validated = Vec::with_capacity(files.len());

    for path in files {
        let schema = load_schema(path)?;
        log::debug!("{}: ok", path.display());
        validated.push(ValidatedFile {
            path: path.display().to_string(),
            tasks: schema.len(),
        });
    }

    ValidateOutput { files: validated }.render(mode);
    Ok(ExitCode::SUCCESS)
}
