//! Integration tests for the `app-model assemble` command.

use predicates::prelude::*;

use crate::common::TestProject;
use app_model::model::AppModel;

#[test]
fn test_assemble_to_stdout() {
    let project = TestProject::sample().unwrap();

    project
        .cmd()
        .args(["assemble", "plan.toml"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("format_version = 1"))
        .stdout(predicate::str::contains("org.jboss.logmanager:jboss-logmanager"))
        .stdout(predicate::str::contains("quarkus-ide-launcher").not())
        .stdout(predicate::str::contains("commons-logging").not());
}

#[test]
fn test_assemble_writes_model_file() {
    let project = TestProject::sample().unwrap();

    project
        .cmd()
        .args(["assemble", "plan.toml", "-o", "target/app-model.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote org.acme:app:jar:1.0.0"));

    let content = project.read("target/app-model.toml").unwrap();
    assert!(content.starts_with("# Generated application model - DO NOT EDIT"));

    let model = AppModel::load(&project.file("target/app-model.toml")).unwrap();
    let runtime: Vec<String> = model.runtime_deps().iter().map(|d| d.artifact().to_string()).collect();
    assert_eq!(runtime, vec!["org.acme:lib:jar:2.0"]);
    assert_eq!(model.full_deployment_deps().len(), 2);
    assert_eq!(model.parent_first_artifacts().len(), 2);
}

#[test]
fn test_assemble_is_deterministic() {
    let project = TestProject::sample().unwrap();

    let first = project.cmd().args(["assemble", "plan.toml"]).output().unwrap();
    let second = project.cmd().args(["assemble", "plan.toml"]).output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_rejected_descriptor_is_a_warning() {
    let project = TestProject::sample().unwrap();
    let plan = format!(
        "{}\n[[extensions]]\nname = \"broken\"\nproperties = {{ parent-first-artifacts = \"org.acme:fine, nogroup\" }}\n",
        crate::common::SAMPLE_PLAN
    );
    project.write("plan.toml", &plan).unwrap();

    project
        .cmd()
        .args(["assemble", "plan.toml", "-o", "model.toml"])
        .assert()
        .success()
        .stderr(predicate::str::contains("extension 'broken' was ignored"));

    let model = AppModel::load(&project.file("model.toml")).unwrap();
    assert!(!model.is_parent_first(&"org.acme:fine".parse().unwrap()));
}

#[test]
fn test_strict_mode_fails_on_rejected_descriptor() {
    let project = TestProject::sample().unwrap();
    let plan = format!(
        "{}\n[[extensions]]\nname = \"broken\"\nproperties = {{ excluded-artifacts = \"a:b:c:d:e\" }}\n",
        crate::common::SAMPLE_PLAN
    );
    project.write("plan.toml", &plan).unwrap();

    project
        .cmd()
        .args(["assemble", "plan.toml", "-o", "model.toml", "--strict"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("1 extension descriptor(s) were rejected"))
        .stderr(predicate::str::contains("Rejected extensions: broken"))
        .stderr(predicate::str::contains("--strict"));

    assert!(!project.file("model.toml").exists());
}

#[test]
fn test_missing_plan() {
    let project = TestProject::new().unwrap();

    project
        .cmd()
        .args(["assemble", "absent.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot read assembly plan"));
}

#[test]
fn test_bad_token_in_plan_names_the_entry() {
    let project = TestProject::new().unwrap();
    project
        .write(
            "plan.toml",
            "app_artifact = \"org.acme:app:1.0\"\n\n[[deployment_deps]]\nartifact = \"org.acme:versionless\"\n",
        )
        .unwrap();

    project
        .cmd()
        .args(["assemble", "plan.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("deployment_deps[0]"));
}

#[test]
fn test_missing_root_in_plan() {
    let project = TestProject::new().unwrap();
    project.write("plan.toml", "[[runtime_deps]]\nartifact = \"org.acme:lib:1.0\"\n").unwrap();

    project
        .cmd()
        .args(["assemble", "plan.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid assembly plan"));
}
