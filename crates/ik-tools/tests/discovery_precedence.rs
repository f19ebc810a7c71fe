//! Integration test exercising the override precedence across discovery
//! directories with real executable files, matching the scenario named in
//! the tool subsystem's testable end-to-end properties (S5/S9/S10).

#![cfg(unix)]

use ik_tools::{ToolRegistry, discover};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use tempfile::tempdir;

fn write_tool(dir: &Path, filename: &str, schema_json: &str) {
    let path = dir.join(filename);
    let script = format!(
        "#!/bin/sh\nif [ \"$1\" = \"--schema\" ]; then\n  printf '%s' '{schema_json}'\nelse\n  cat\nfi\n"
    );
    fs::write(&path, script).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
}

#[test]
fn project_directory_overrides_system_for_same_tool_name() {
    let system = tempdir().unwrap();
    let user = tempdir().unwrap();
    let project = tempdir().unwrap();

    write_tool(system.path(), "bash-tool", r#"{"version":1}"#);
    write_tool(project.path(), "bash-tool", r#"{"version":2}"#);

    let mut registry = ToolRegistry::new();
    discover(system.path(), user.path(), project.path(), &mut registry);

    assert_eq!(registry.len(), 1);
    let entry = registry.lookup("bash").unwrap();
    assert!(entry.path.starts_with(project.path().to_str().unwrap()));
    assert_eq!(entry.schema["version"], 2);
}

#[test]
fn non_matching_suffix_is_ignored() {
    let system = tempdir().unwrap();
    write_tool(system.path(), "bash-helper", r#"{"version":1}"#);

    let empty = tempdir().unwrap();
    let mut registry = ToolRegistry::new();
    discover(system.path(), empty.path(), empty.path(), &mut registry);

    assert!(registry.is_empty());
}
