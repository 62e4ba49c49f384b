//! Tests for schema generation from a task registry

use schemadiff::adapters::{DocumentFormat, TaskRegistry, TaskSignature, dump_schema};
use schemadiff::core::models::Severity;
use schemadiff::core::ports::generate_schema;
use schemadiff::core::services::{build_report, diff_schemas};

fn registry_v1() -> TaskRegistry {
    let mut registry = TaskRegistry::new();
    registry.register(
        "tasks.send_email",
        TaskSignature::new().positional("to").positional("subject"),
    );
    registry.register(
        "tasks.cleanup",
        TaskSignature::new().keyword_only("older_than", Some("30")),
    );
    registry
}

#[test]
fn test_generated_schema_is_sorted() {
    let schema = generate_schema(&registry_v1());
    assert_eq!(schema.names().collect::<Vec<_>>(), vec!["tasks.cleanup", "tasks.send_email"]);
}

#[test]
fn test_generated_schema_dumps_with_nulls() {
    let yaml = dump_schema(&generate_schema(&registry_v1()), DocumentFormat::Yaml).unwrap();
    assert!(yaml.contains("default: null"));
    assert!(yaml.contains("kind: keyword_only"));
}

#[test]
fn test_deploy_check_between_registry_versions() {
    let old = generate_schema(&registry_v1());

    let mut v2 = registry_v1();
    v2.register(
        "tasks.send_email",
        TaskSignature::new().positional("to").positional("subject").with_default("cc", "None"),
    );
    let new = generate_schema(&v2);

    let report = build_report(&diff_schemas(&old, &new));
    assert_eq!(report.max_severity(), Some(Severity::Info));
    assert!(report.passes(Some(Severity::Warning)));
}
