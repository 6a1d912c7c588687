//! Integration tests for the `app-model classify` command.

use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn test_classify_parent_first() {
    let project = TestProject::sample().unwrap();
    project.assemble();

    project
        .cmd()
        .args(["classify", "model.toml", "org.jboss.logging:jboss-logging"])
        .assert()
        .success()
        .stdout(predicate::str::contains("augmentation: parent-first"))
        .stdout(predicate::str::contains("runner: isolated"))
        .stdout(predicate::str::contains("local project: no"));
}

#[test]
fn test_classify_runner_parent_first() {
    let project = TestProject::sample().unwrap();
    project.assemble();

    project
        .cmd()
        .args(["classify", "model.toml", "org.graalvm.sdk:graal-sdk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("augmentation: isolated"))
        .stdout(predicate::str::contains("runner: parent-first"));
}

#[test]
fn test_classify_lesser_priority_and_local_project() {
    let project = TestProject::sample().unwrap();
    project.assemble();

    project
        .cmd()
        .args(["classify", "model.toml", "org.slf4j:slf4j-simple"])
        .assert()
        .success()
        .stdout(predicate::str::contains("augmentation: lesser-priority"))
        .stdout(predicate::str::contains("runner: lesser-priority"));

    project
        .cmd()
        .args(["classify", "model.toml", "org.acme:app"])
        .assert()
        .success()
        .stdout(predicate::str::contains("local project: yes"));
}

#[test]
fn test_classify_classifier_is_part_of_the_key() {
    let project = TestProject::sample().unwrap();
    project.assemble();

    project
        .cmd()
        .args(["classify", "model.toml", "org.jboss.logging:jboss-logging:sources"])
        .assert()
        .success()
        .stdout(predicate::str::contains("augmentation: isolated"));
}

#[test]
fn test_classify_malformed_key() {
    let project = TestProject::sample().unwrap();
    project.assemble();

    project
        .cmd()
        .args(["classify", "model.toml", "org.acme"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed artifact descriptor 'org.acme'"));
}
