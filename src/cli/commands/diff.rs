//! Compare two schema documents

use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use schemadiff::adapters::load_schema;
use schemadiff::config::{ColorChoice, Config, FailOn};
use schemadiff::core::services::{build_report, diff_schemas};
use schemadiff::output::{DiffOutput, HumanStyle, OutputMode, Summary};

/// Diff `old` against `new` and report findings
///
/// Exits with code 1 when a finding reaches the failure threshold.
pub fn diff(
    old: &Path,
    new: &Path,
    fail_on: Option<FailOn>,
    quiet: bool,
    config: &Config,
    mode: OutputMode,
) -> anyhow::Result<ExitCode> {
    let old_schema =
        load_schema(old).with_context(|| format!("loading old schema {}", old.display()))?;
    let new_schema =
        load_schema(new).with_context(|| format!("loading new schema {}", new.display()))?;

    let diff = diff_schemas(&old_schema, &new_schema);
    let report = build_report(&diff);

    let threshold = fail_on.unwrap_or(config.report.fail_on).threshold();
    let passed = report.passes(threshold);
    log::debug!("max severity {:?}, threshold {threshold:?}", report.max_severity());

    let result = DiffOutput {
        passed,
        old: old.display().to_string(),
        new: new.display().to_string(),
        summary: Summary::of(&report),
        tasks: report.tasks,
    };

    let style = HumanStyle {
        show_info: config.report.show_info && !quiet,
        color: use_color(config.report.color),
    };
    result.render(mode, style);

    Ok(if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn use_color(choice: ColorChoice) -> bool {
    match choice {
        ColorChoice::Always => {
            colored::control::set_override(true);
            true
        },
        ColorChoice::Never => false,
        ColorChoice::Auto => std::io::stdout().is_terminal(),
    }
}
