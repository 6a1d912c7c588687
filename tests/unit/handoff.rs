//! Producer/consumer handoff through the public API.

use std::collections::BTreeMap;
use std::thread;

use app_model::core::{ArtifactKey, Dependency};
use app_model::model::{AppModel, ClassLoadingContext, Diagnostics, Placement};
use app_model::test_utils::fixtures::{direct, key, sample_builder, transitive};
use app_model::test_utils::init_test_logging;
use tempfile::TempDir;

#[test]
fn test_saved_model_reconstructs_identically() {
    init_test_logging(None);
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("app-model.toml");

    let produced = sample_builder().build().unwrap();
    produced.save(&path).unwrap();
    let fingerprint = produced.fingerprint().unwrap();

    let consumed = AppModel::load(&path).unwrap();
    assert_eq!(consumed, produced);
    assert!(consumed.matches_fingerprint(&fingerprint).unwrap());
    assert_eq!(consumed.runtime_deps(), produced.runtime_deps());
    assert_eq!(consumed.platform_properties(), produced.platform_properties());
}

#[test]
fn test_consumer_builds_isolated_search_order() {
    init_test_logging(None);
    let model = sample_builder().build().unwrap();
    let consumed = AppModel::from_toml_str(&model.to_toml_string().unwrap()).unwrap();

    let order: Vec<&str> = consumed
        .isolated_search_order(consumed.runtime_deps(), ClassLoadingContext::Augmentation)
        .iter()
        .map(|d| d.artifact().name())
        .collect();
    // jboss-logging is parent-first for augmentation
    assert_eq!(order, vec!["lib", "quarkus-core"]);

    let order: Vec<&str> = consumed
        .isolated_search_order(consumed.runtime_deps(), ClassLoadingContext::Runner)
        .iter()
        .map(|d| d.artifact().name())
        .collect();
    assert_eq!(order, vec!["lib", "quarkus-core", "jboss-logging"]);
}

#[test]
fn test_lesser_priority_moves_to_tail() {
    let mut builder = AppModel::builder();
    builder
        .set_app_artifact("org.acme:app:1.0".parse().unwrap())
        .unwrap()
        .add_runtime_deps([
            direct("org.slf4j:slf4j-simple:2.0"),
            direct("org.acme:a:1"),
            transitive("org.acme:b:1"),
        ])
        .unwrap();
    let mut diagnostics = Diagnostics::new();
    builder.merge_extension_descriptor(
        &BTreeMap::from([(
            "lesser-priority-artifacts".to_string(),
            "org.slf4j:slf4j-simple".to_string(),
        )]),
        "logging",
        &mut diagnostics,
    );
    let model = builder.build().unwrap();

    assert_eq!(
        model.placement(&key("org.slf4j:slf4j-simple"), ClassLoadingContext::Runner),
        Placement::LesserPriority
    );
    let order: Vec<&str> = model
        .isolated_search_order(model.runtime_deps(), ClassLoadingContext::Runner)
        .iter()
        .map(|d| d.artifact().name())
        .collect();
    assert_eq!(order, vec!["a", "b", "slf4j-simple"]);
}

#[test]
fn test_model_is_shared_across_threads() {
    let model = std::sync::Arc::new(sample_builder().build().unwrap());
    let jboss = ArtifactKey::new("org.jboss.logging", "jboss-logging");

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let model = model.clone();
            let jboss = jboss.clone();
            thread::spawn(move || model.is_parent_first(&jboss) && model.runtime_deps().len() == 3)
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn test_dependency_flags_survive_transport() {
    let mut builder = AppModel::builder();
    builder
        .set_app_artifact("org.acme:app:1.0".parse().unwrap())
        .unwrap()
        .add_runtime_dep(
            Dependency::transitive("org.acme:opt:tests:test-jar:1.0".parse().unwrap())
                .with_scope("test")
                .with_optional(true),
        )
        .unwrap();
    let model = builder.build().unwrap();

    let decoded = AppModel::from_toml_str(&model.to_toml_string().unwrap()).unwrap();
    let dep = &decoded.runtime_deps()[0];
    assert_eq!(dep.scope(), "test");
    assert!(!dep.is_direct());
    assert!(dep.is_optional());
    assert_eq!(dep.key().classifier(), "tests");
    assert_eq!(dep.key().artifact_type(), "test-jar");
}
