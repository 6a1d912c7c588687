//! Common test utilities for app-model test suites

// Not every suite uses every helper
#![allow(dead_code)]

use anyhow::{Context, Result};
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Plan used by most end-to-end tests.
///
/// Runtime list contains the IDE launcher and an artifact the `rest`
/// extension excludes; the `logging` extension reads its descriptor from disk.
pub const SAMPLE_PLAN: &str = r#"
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
artifact = "commons-logging:commons-logging:1.2"
direct = false

[[deployment_deps]]
artifact = "io.quarkus:quarkus-core-deployment:3.0.0"

[[full_deployment_deps]]
artifact = "io.quarkus:quarkus-core-deployment:3.0.0"

[[full_deployment_deps]]
artifact = "io.quarkus:quarkus-builder:3.0.0"
direct = false

[[extensions]]
name = "logging"
descriptor = "descriptors/logging.properties"

[[extensions]]
name = "rest"
properties = { excluded-artifacts = "commons-logging:commons-logging", runner-parent-first-artifacts = "org.graalvm.sdk:graal-sdk" }
"#;

/// Scratch project directory holding plans, descriptors and models.
pub struct TestProject {
    temp: TempDir,
}

impl TestProject {
    /// Create an empty project directory.
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp: TempDir::new().context("Failed to create temp dir")?,
        })
    }

    /// Create a project with [`SAMPLE_PLAN`] and its descriptor in place.
    pub fn sample() -> Result<Self> {
        let project = Self::new()?;
        project.write(
            "descriptors/logging.properties",
            app_model::test_utils::fixtures::LOGGING_DESCRIPTOR,
        )?;
        project.write("plan.toml", SAMPLE_PLAN)?;
        Ok(project)
    }

    /// Project root.
    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Absolute path of a file inside the project.
    pub fn file(&self, relative: &str) -> PathBuf {
        self.temp.path().join(relative)
    }

    /// Write a file, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) -> Result<PathBuf> {
        let path = self.file(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    /// Read a file inside the project.
    pub fn read(&self, relative: &str) -> Result<String> {
        fs::read_to_string(self.file(relative)).with_context(|| format!("Failed to read {relative}"))
    }

    /// The `app-model` binary, running inside the project directory.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("app-model").expect("app-model binary is built");
        cmd.current_dir(self.path()).env("NO_COLOR", "1").env_remove("RUST_LOG");
        cmd
    }

    /// Run `assemble plan.toml -o model.toml` and return the model path.
    pub fn assemble(&self) -> PathBuf {
        self.cmd().args(["assemble", "plan.toml", "-o", "model.toml"]).assert().success();
        self.file("model.toml")
    }
}
