//! The application dependency model.
//!
//! An [`AppModel`] describes everything the two class loading contexts of an
//! application need: the root artifact, three ordered dependency lists, and the
//! classification sets that tell the class loader builder how to treat each
//! artifact. It is computed once during a build by a [`Builder`], then handed
//! to a separate process that constructs the actual class loaders.
//!
//! # Lifecycle
//!
//! 1. The resolver feeds ordered dependency lists into a [`Builder`].
//! 2. Each processed extension contributes its descriptor through
//!    [`Builder::merge_extension_descriptor`], in extension-processing order.
//! 3. [`Builder::build`] filters excluded artifacts out of every list and
//!    freezes the result.
//! 4. The frozen model is encoded with [`AppModel::to_toml_string`] (or
//!    [`AppModel::save`]) and reconstructed on the other side unchanged.
//!
//! # Serialized Format
//!
//! ```toml
//! # Generated application model - DO NOT EDIT
//! format_version = 1
//!
//! [model]
//! parent_first_artifacts = ["org.jboss.logging:jboss-logging"]
//! runner_parent_first_artifacts = []
//! lesser_priority_artifacts = []
//! local_project_artifacts = ["org.acme:app"]
//!
//! [model.app_artifact]
//! group = "org.acme"
//! name = "app"
//! classifier = ""
//! type = "jar"
//! version = "1.0.0-SNAPSHOT"
//!
//! [model.platform_properties]
//! "platform.quarkus.native.builder-image" = "mandrel"
//!
//! [[model.runtime_deps]]
//! group = "org.acme"
//! name = "lib"
//! classifier = ""
//! type = "jar"
//! version = "2.0"
//! scope = "compile"
//! direct = true
//! optional = false
//! ```
//!
//! # Immutability
//!
//! All fields are private and exposed through read-only accessors; nothing can
//! change a model after [`Builder::build`] returns it. The model owns plain
//! data only, so it is `Send + Sync` and safe to read from many threads.

mod builder;
mod checksum;
mod descriptor;
mod io;
mod policy;


pub use builder::Builder;
pub use descriptor::{DescriptorDiagnostic, Diagnostics};
pub use policy::{ClassLoadingContext, Placement};

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt;

use crate::core::{Artifact, ArtifactKey, Dependency};

/// The frozen application dependency model.
///
/// The four classification sets are independent and may overlap: an artifact
/// can be parent-first and lesser-priority at the same time. Resolving such
/// overlaps is up to the consumer; see [`AppModel::placement`] for the
/// documented precedence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppModel {
    #[serde(default)]
    parent_first_artifacts: BTreeSet<ArtifactKey>,
    #[serde(default)]
    runner_parent_first_artifacts: BTreeSet<ArtifactKey>,
    #[serde(default)]
    lesser_priority_artifacts: BTreeSet<ArtifactKey>,
    #[serde(default)]
    local_project_artifacts: BTreeSet<ArtifactKey>,
    app_artifact: Artifact,
    #[serde(default)]
    platform_properties: BTreeMap<String, String>,
    #[serde(default)]
    runtime_deps: Vec<Dependency>,
    #[serde(default)]
    deployment_deps: Vec<Dependency>,
    #[serde(default)]
    full_deployment_deps: Vec<Dependency>,
}

impl AppModel {
    /// Start assembling a new model.
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// The artifact being built.
    pub fn app_artifact(&self) -> &Artifact {
        &self.app_artifact
    }

    /// Runtime dependencies of the application, including the runtime parts of
    /// all extensions, with exclusions applied.
    pub fn runtime_deps(&self) -> &[Dependency] {
        &self.runtime_deps
    }

    /// Dependencies the user added that have nothing to do with the platform
    /// (third-party libraries, additional modules). Same list as
    /// [`runtime_deps`](Self::runtime_deps).
    pub fn user_dependencies(&self) -> &[Dependency] {
        &self.runtime_deps
    }

    /// Direct deployment dependencies only.
    ///
    /// This narrow view predates [`full_deployment_deps`](Self::full_deployment_deps)
    /// and is kept for consumers that still read it.
    pub fn deployment_deps(&self) -> &[Dependency] {
        &self.deployment_deps
    }

    /// Deployment dependencies including their transitive closure. Used to
    /// build the isolated augmentation class loader.
    pub fn full_deployment_deps(&self) -> &[Dependency] {
        &self.full_deployment_deps
    }

    /// Artifacts the augmentation class loader delegates to its parent first.
    pub fn parent_first_artifacts(&self) -> &BTreeSet<ArtifactKey> {
        &self.parent_first_artifacts
    }

    /// Artifacts the packaged runner class loader delegates to its parent first.
    pub fn runner_parent_first_artifacts(&self) -> &BTreeSet<ArtifactKey> {
        &self.runner_parent_first_artifacts
    }

    /// Artifacts placed after all others in class path search order.
    pub fn lesser_priority_artifacts(&self) -> &BTreeSet<ArtifactKey> {
        &self.lesser_priority_artifacts
    }

    /// Artifacts that come from modules of the local multi-module build.
    ///
    /// Dev mode uses these when deciding how to package mutable jars; they
    /// carry no class loader delegation meaning.
    pub fn local_project_artifacts(&self) -> &BTreeSet<ArtifactKey> {
        &self.local_project_artifacts
    }

    /// Key/value configuration contributed by platform descriptors.
    pub fn platform_properties(&self) -> &BTreeMap<String, String> {
        &self.platform_properties
    }

    /// Whether the key is parent-first for the augmentation class loader.
    pub fn is_parent_first(&self, key: &ArtifactKey) -> bool {
        self.parent_first_artifacts.contains(key)
    }

    /// Whether the key is parent-first for the runner class loader.
    pub fn is_runner_parent_first(&self, key: &ArtifactKey) -> bool {
        self.runner_parent_first_artifacts.contains(key)
    }

    /// Whether the key is a lesser-priority artifact.
    pub fn is_lesser_priority(&self, key: &ArtifactKey) -> bool {
        self.lesser_priority_artifacts.contains(key)
    }

    /// Whether the key belongs to the local project.
    pub fn is_local_project(&self, key: &ArtifactKey) -> bool {
        self.local_project_artifacts.contains(key)
    }

    /// Deployment dependencies whose artifact is absent from the full
    /// deployment list, in deployment order.
    ///
    /// Empty whenever the resolver honoured its contract.
    pub fn missing_full_deployment_deps(&self) -> Vec<&Dependency> {
        let full: HashSet<&Artifact> =
            self.full_deployment_deps.iter().map(Dependency::artifact).collect();
        self.deployment_deps.iter().filter(|dep| !full.contains(dep.artifact())).collect()
    }
}

impl fmt::Display for AppModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (runtime: {}, deployment: {}, full deployment: {}, parent-first: {}, \
             runner parent-first: {}, lesser-priority: {}, local project: {})",
            self.app_artifact,
            self.runtime_deps.len(),
            self.deployment_deps.len(),
            self.full_deployment_deps.len(),
            self.parent_first_artifacts.len(),
            self.runner_parent_first_artifacts.len(),
            self.lesser_priority_artifacts.len(),
            self.local_project_artifacts.len(),
        )
    }
}
