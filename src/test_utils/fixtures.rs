//! Fixtures for model tests.
//!
//! These panic on malformed input: they are only ever fed literals.

use std::collections::BTreeMap;

use crate::core::{Artifact, ArtifactKey, Dependency};
use crate::model::{Builder, Diagnostics};

/// Parse an artifact key token.
pub fn key(token: &str) -> ArtifactKey {
    token.parse().unwrap_or_else(|e| panic!("bad key fixture {token}: {e}"))
}

/// Parse an artifact token (`group:name[[:classifier]:type]:version`).
pub fn artifact(token: &str) -> Artifact {
    token.parse().unwrap_or_else(|e| panic!("bad artifact fixture {token}: {e}"))
}

/// A direct dependency on the given artifact token.
pub fn direct(token: &str) -> Dependency {
    Dependency::direct(artifact(token))
}

/// A transitive dependency on the given artifact token.
pub fn transitive(token: &str) -> Dependency {
    Dependency::transitive(artifact(token))
}

/// Build a descriptor property map.
pub fn descriptor(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
}

/// Sample `quarkus-extension.properties` content for a logging extension.
pub const LOGGING_DESCRIPTOR: &str = "\
# generated by the extension build
deployment-artifact=io.quarkus:quarkus-logging-deployment:3.0.0
parent-first-artifacts=org.jboss.logging:jboss-logging,\\
    org.jboss.logmanager:jboss-logmanager
lesser-priority-artifacts=org.slf4j:slf4j-simple
";

/// A builder populated the way a typical build would populate it.
///
/// Root `org.acme:app:1.0.0`; runtime, deployment and full deployment lists
/// that include the IDE launcher and an artifact excluded by the `rest`
/// extension; two extension descriptors; one platform property; one local
/// project module.
pub fn sample_builder() -> Builder {
    let mut builder = Builder::new();
    let mut diagnostics = Diagnostics::new();

    builder
        .set_app_artifact(artifact("org.acme:app:1.0.0"))
        .and_then(|b| {
            b.add_runtime_deps([
                direct("org.acme:lib:2.0"),
                transitive("io.quarkus:quarkus-ide-launcher:3.0.0"),
                direct("io.quarkus:quarkus-core:3.0.0"),
                transitive("org.jboss.logging:jboss-logging:3.5.0"),
                transitive("commons-logging:commons-logging:1.2"),
            ])
        })
        .and_then(|b| b.add_deployment_deps([direct("io.quarkus:quarkus-core-deployment:3.0.0")]))
        .and_then(|b| {
            b.add_full_deployment_deps([
                direct("io.quarkus:quarkus-core-deployment:3.0.0"),
                transitive("io.quarkus:quarkus-builder:3.0.0"),
                transitive("commons-logging:commons-logging:1.2"),
            ])
        })
        .and_then(|b| b.add_local_project_artifact(key("org.acme:app")))
        .unwrap_or_else(|e| panic!("sample builder: {e}"));

    builder.add_platform_properties([("platform.quarkus.native.builder-image", "mandrel")]);

    builder.merge_extension_descriptor(
        &descriptor(&[
            ("parent-first-artifacts", "org.jboss.logging:jboss-logging"),
            ("lesser-priority-artifacts", "org.slf4j:slf4j-simple"),
        ]),
        "logging",
        &mut diagnostics,
    );
    builder.merge_extension_descriptor(
        &descriptor(&[
            ("excluded-artifacts", "commons-logging:commons-logging"),
            ("runner-parent-first-artifacts", "org.graalvm.sdk:graal-sdk"),
        ]),
        "rest",
        &mut diagnostics,
    );
    assert!(diagnostics.is_empty(), "sample descriptors must be valid");

    builder
}
