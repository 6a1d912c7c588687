//! Assembly plans driving the builder.

use std::path::PathBuf;

use app_model::config::{AssemblyPlan, parse_properties};
use app_model::model::Diagnostics;
use app_model::test_utils::fixtures::{LOGGING_DESCRIPTOR, key, sample_builder};

const PLAN: &str = r#"
app_artifact = "org.acme:app:1.0.0"
local_project_artifacts = ["org.acme:app"]

[platform_properties]
"platform.quarkus.native.builder-image" = "mandrel"

[[runtime_deps]]
artifact = "org.acme:lib:2.0"

[[runtime_deps]]
artifact = "io.quarkus:quarkus-ide-launcher:3.0.0"
direct = false

[[runtime_deps]]
artifact = "io.quarkus:quarkus-core:3.0.0"

[[runtime_deps]]
artifact = "org.jboss.logging:jboss-logging:3.5.0"
direct = false

[[runtime_deps]]
artifact = "commons-logging:commons-logging:1.2"
direct = false

[[deployment_deps]]
artifact = "io.quarkus:quarkus-core-deployment:3.0.0"

[[full_deployment_deps]]
artifact = "io.quarkus:quarkus-core-deployment:3.0.0"

[[full_deployment_deps]]
artifact = "io.quarkus:quarkus-builder:3.0.0"
direct = false

[[full_deployment_deps]]
artifact = "commons-logging:commons-logging:1.2"
direct = false

[[extensions]]
name = "logging"
properties = { parent-first-artifacts = "org.jboss.logging:jboss-logging", lesser-priority-artifacts = "org.slf4j:slf4j-simple" }

[[extensions]]
name = "rest"
properties = { excluded-artifacts = "commons-logging:commons-logging", runner-parent-first-artifacts = "org.graalvm.sdk:graal-sdk" }
"#;

#[test]
fn test_plan_matches_equivalent_builder_calls() {
    let plan = AssemblyPlan::parse(PLAN, "plan.toml", PathBuf::new()).unwrap();
    let mut diagnostics = Diagnostics::new();
    let from_plan = plan.into_builder(&mut diagnostics).unwrap().build().unwrap();

    assert!(diagnostics.is_empty());
    assert_eq!(from_plan, sample_builder().build().unwrap());
}

#[test]
fn test_descriptor_file_contents() {
    let props = parse_properties(LOGGING_DESCRIPTOR);
    assert_eq!(props.len(), 3);
    assert!(props["parent-first-artifacts"].contains("org.jboss.logmanager:jboss-logmanager"));
}

#[test]
fn test_plan_order_is_merge_order() {
    let content = r#"
app_artifact = "org.acme:app:1.0"

[[extensions]]
name = "first"
properties = { parent-first-artifacts = "org.acme:a" }

[[extensions]]
name = "broken"
properties = { parent-first-artifacts = "org.acme:b,:x" }

[[extensions]]
name = "last"
properties = { parent-first-artifacts = "org.acme:c" }
"#;
    let plan = AssemblyPlan::parse(content, "plan.toml", PathBuf::new()).unwrap();
    let mut diagnostics = Diagnostics::new();
    let model = plan.into_builder(&mut diagnostics).unwrap().build().unwrap();

    let rejected: Vec<&str> = diagnostics.iter().map(|d| d.extension.as_str()).collect();
    assert_eq!(rejected, vec!["broken"]);
    assert!(model.is_parent_first(&key("org.acme:a")));
    assert!(!model.is_parent_first(&key("org.acme:b")));
    assert!(model.is_parent_first(&key("org.acme:c")));
}
