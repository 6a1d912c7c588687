//! Integration tests for the `app-model inspect` command.

use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn test_inspect_text() {
    let project = TestProject::sample().unwrap();
    project.assemble();

    project
        .cmd()
        .args(["inspect", "model.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("org.acme:app:jar:1.0.0"))
        .stdout(predicate::str::contains("Runtime dependencies: 1"))
        .stdout(predicate::str::contains("Full deployment dependencies: 2"))
        .stdout(predicate::str::contains("Parent-first artifacts (2):"))
        .stdout(predicate::str::contains("platform.quarkus.native.builder-image = mandrel"));
}

#[test]
fn test_inspect_json() {
    let project = TestProject::sample().unwrap();
    project.assemble();

    let output = project.cmd().args(["inspect", "model.toml", "--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["app_artifact"], "org.acme:app:jar:1.0.0");
    assert_eq!(report["dependencies"]["runtime"], 1);
    assert_eq!(report["dependencies"]["deployment"], 1);
    assert_eq!(report["lesser_priority_artifacts"][0], "org.slf4j:slf4j-simple");
    assert_eq!(report["runner_parent_first_artifacts"][0], "org.graalvm.sdk:graal-sdk");
    assert!(report["fingerprint"].as_str().unwrap().starts_with("sha256:"));
}

#[test]
fn test_inspect_rejects_unknown_format() {
    let project = TestProject::sample().unwrap();
    project.assemble();

    project.cmd().args(["inspect", "model.toml", "--format", "yaml"]).assert().failure();
}
