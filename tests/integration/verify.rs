//! Integration tests for the `app-model verify` command.

use predicates::prelude::*;

use crate::common::TestProject;
use app_model::core::Dependency;
use app_model::model::AppModel;

#[test]
fn test_verify_valid_model() {
    let project = TestProject::sample().unwrap();
    let path = project.assemble();
    let expected = AppModel::load(&path).unwrap().fingerprint().unwrap();

    project
        .cmd()
        .args(["verify", "model.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Valid application model org.acme:app:jar:1.0.0"))
        .stdout(predicate::str::contains(expected.as_str()));
}

#[test]
fn test_verify_expected_fingerprint() {
    let project = TestProject::sample().unwrap();
    let path = project.assemble();
    let fingerprint = AppModel::load(&path).unwrap().fingerprint().unwrap();

    project.cmd().args(["verify", "model.toml", "--expected", fingerprint.as_str()]).assert().success();

    project
        .cmd()
        .args(["verify", "model.toml", "--expected", "sha256:0000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Fingerprint mismatch"));
}

#[test]
fn test_verify_detects_missing_full_deployment_dep() {
    let project = TestProject::new().unwrap();
    let mut builder = AppModel::builder();
    builder
        .set_app_artifact("org.acme:app:1.0".parse().unwrap())
        .unwrap()
        .add_deployment_dep(Dependency::direct("org.acme:ext-deployment:1.0".parse().unwrap()))
        .unwrap();
    builder.build().unwrap().save(&project.file("model.toml")).unwrap();

    project
        .cmd()
        .args(["verify", "model.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("org.acme:ext-deployment:jar:1.0"))
        .stderr(predicate::str::contains("invariant violated"));
}

#[test]
fn test_verify_rejects_other_format_version() {
    let project = TestProject::sample().unwrap();
    let path = project.assemble();
    let content = std::fs::read_to_string(&path).unwrap();
    std::fs::write(&path, content.replacen("format_version = 1", "format_version = 7", 1)).unwrap();

    project
        .cmd()
        .args(["verify", "model.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("format version 7"))
        .stderr(predicate::str::contains("Regenerate the model"));
}

#[test]
fn test_verify_missing_model() {
    let project = TestProject::new().unwrap();

    project
        .cmd()
        .args(["verify", "absent.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot read application model"));
}
