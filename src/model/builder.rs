//! Mutable accumulator that produces an [`AppModel`].

use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

use super::AppModel;
use crate::constants::{IDE_LAUNCHER_GROUP, IDE_LAUNCHER_NAME};
use crate::core::{Artifact, ArtifactKey, Dependency, ModelError};

/// Accumulates dependency lists and classification data for one build.
///
/// Accumulation is append-only: dependency batches keep the order the
/// resolver produced and are never sorted or deduplicated here. Key sets
/// absorb duplicates.
///
/// A builder is meant to be driven by a single build pipeline. Mutation takes
/// `&mut self`, so sharing one across threads needs external
/// synchronization that the pipeline never has a reason to add.
///
/// # Examples
///
/// ```rust
/// use app_model::core::{Artifact, ArtifactKey, Dependency};
/// use app_model::model::{Builder, Diagnostics};
/// use std::collections::BTreeMap;
///
/// # fn main() -> Result<(), app_model::core::ModelError> {
/// let mut builder = Builder::new();
/// builder
///     .set_app_artifact("org.acme:app:1.0".parse()?)?
///     .add_runtime_dep(Dependency::direct("org.acme:lib:2.0".parse()?))?;
///
/// let descriptor = BTreeMap::from([(
///     "parent-first-artifacts".to_string(),
///     "org.jboss.logging:jboss-logging".to_string(),
/// )]);
/// let mut diagnostics = Diagnostics::new();
/// builder.merge_extension_descriptor(&descriptor, "logging", &mut diagnostics);
///
/// let model = builder.build()?;
/// assert_eq!(model.runtime_deps().len(), 1);
/// assert!(model.is_parent_first(&ArtifactKey::new("org.jboss.logging", "jboss-logging")));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Builder {
    pub(super) app_artifact: Option<Artifact>,
    pub(super) runtime_deps: Vec<Dependency>,
    pub(super) deployment_deps: Vec<Dependency>,
    pub(super) full_deployment_deps: Vec<Dependency>,
    pub(super) parent_first_artifacts: BTreeSet<ArtifactKey>,
    pub(super) runner_parent_first_artifacts: BTreeSet<ArtifactKey>,
    pub(super) excluded_artifacts: BTreeSet<ArtifactKey>,
    pub(super) lesser_priority_artifacts: BTreeSet<ArtifactKey>,
    pub(super) local_project_artifacts: BTreeSet<ArtifactKey>,
    pub(super) platform_properties: BTreeMap<String, String>,
}

impl Builder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the artifact being built. A later call replaces an earlier one.
    pub fn set_app_artifact(&mut self, artifact: Artifact) -> Result<&mut Self, ModelError> {
        artifact.ensure_resolved("application artifact")?;
        self.app_artifact = Some(artifact);
        Ok(self)
    }

    /// Merge platform properties; on key collision the later value wins.
    pub fn add_platform_properties<I, K, V>(&mut self, properties: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.platform_properties
            .extend(properties.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Append one runtime dependency.
    pub fn add_runtime_dep(&mut self, dep: Dependency) -> Result<&mut Self, ModelError> {
        append(&mut self.runtime_deps, [dep], "runtime dependency")?;
        Ok(self)
    }

    /// Append runtime dependencies in the given order.
    pub fn add_runtime_deps(
        &mut self,
        deps: impl IntoIterator<Item = Dependency>,
    ) -> Result<&mut Self, ModelError> {
        append(&mut self.runtime_deps, deps, "runtime dependency")?;
        Ok(self)
    }

    /// Append one direct deployment dependency.
    pub fn add_deployment_dep(&mut self, dep: Dependency) -> Result<&mut Self, ModelError> {
        append(&mut self.deployment_deps, [dep], "deployment dependency")?;
        Ok(self)
    }

    /// Append direct deployment dependencies in the given order.
    pub fn add_deployment_deps(
        &mut self,
        deps: impl IntoIterator<Item = Dependency>,
    ) -> Result<&mut Self, ModelError> {
        append(&mut self.deployment_deps, deps, "deployment dependency")?;
        Ok(self)
    }

    /// Append one dependency to the full (transitive) deployment list.
    pub fn add_full_deployment_dep(&mut self, dep: Dependency) -> Result<&mut Self, ModelError> {
        append(&mut self.full_deployment_deps, [dep], "full deployment dependency")?;
        Ok(self)
    }

    /// Append dependencies to the full (transitive) deployment list in the given order.
    pub fn add_full_deployment_deps(
        &mut self,
        deps: impl IntoIterator<Item = Dependency>,
    ) -> Result<&mut Self, ModelError> {
        append(&mut self.full_deployment_deps, deps, "full deployment dependency")?;
        Ok(self)
    }

    /// Mark an artifact parent-first for the augmentation class loader.
    pub fn add_parent_first_artifact(&mut self, key: ArtifactKey) -> Result<&mut Self, ModelError> {
        insert_keys(&mut self.parent_first_artifacts, [key], "parent-first artifact")?;
        Ok(self)
    }

    /// Mark artifacts parent-first for the augmentation class loader.
    pub fn add_parent_first_artifacts(
        &mut self,
        keys: impl IntoIterator<Item = ArtifactKey>,
    ) -> Result<&mut Self, ModelError> {
        insert_keys(&mut self.parent_first_artifacts, keys, "parent-first artifact")?;
        Ok(self)
    }

    /// Mark an artifact parent-first for the runner class loader.
    pub fn add_runner_parent_first_artifact(
        &mut self,
        key: ArtifactKey,
    ) -> Result<&mut Self, ModelError> {
        insert_keys(&mut self.runner_parent_first_artifacts, [key], "runner parent-first artifact")?;
        Ok(self)
    }

    /// Mark artifacts parent-first for the runner class loader.
    pub fn add_runner_parent_first_artifacts(
        &mut self,
        keys: impl IntoIterator<Item = ArtifactKey>,
    ) -> Result<&mut Self, ModelError> {
        insert_keys(&mut self.runner_parent_first_artifacts, keys, "runner parent-first artifact")?;
        Ok(self)
    }

    /// Exclude an artifact from every dependency list.
    pub fn add_excluded_artifact(&mut self, key: ArtifactKey) -> Result<&mut Self, ModelError> {
        insert_keys(&mut self.excluded_artifacts, [key], "excluded artifact")?;
        Ok(self)
    }

    /// Exclude artifacts from every dependency list.
    pub fn add_excluded_artifacts(
        &mut self,
        keys: impl IntoIterator<Item = ArtifactKey>,
    ) -> Result<&mut Self, ModelError> {
        insert_keys(&mut self.excluded_artifacts, keys, "excluded artifact")?;
        Ok(self)
    }

    /// Place an artifact at the tail of the class path.
    pub fn add_lesser_priority_artifact(
        &mut self,
        key: ArtifactKey,
    ) -> Result<&mut Self, ModelError> {
        insert_keys(&mut self.lesser_priority_artifacts, [key], "lesser-priority artifact")?;
        Ok(self)
    }

    /// Place artifacts at the tail of the class path.
    pub fn add_lesser_priority_artifacts(
        &mut self,
        keys: impl IntoIterator<Item = ArtifactKey>,
    ) -> Result<&mut Self, ModelError> {
        insert_keys(&mut self.lesser_priority_artifacts, keys, "lesser-priority artifact")?;
        Ok(self)
    }

    /// Record an artifact as a module of the local project.
    pub fn add_local_project_artifact(
        &mut self,
        key: ArtifactKey,
    ) -> Result<&mut Self, ModelError> {
        insert_keys(&mut self.local_project_artifacts, [key], "local project artifact")?;
        Ok(self)
    }

    /// Record artifacts as modules of the local project.
    pub fn add_local_project_artifacts(
        &mut self,
        keys: impl IntoIterator<Item = ArtifactKey>,
    ) -> Result<&mut Self, ModelError> {
        insert_keys(&mut self.local_project_artifacts, keys, "local project artifact")?;
        Ok(self)
    }

    /// Whether [`build`](Self::build) would drop this artifact.
    ///
    /// True when its key was excluded, or when it is the bootstrap-only IDE
    /// launcher, which is never part of a model.
    pub fn is_excluded(&self, artifact: &Artifact) -> bool {
        // we never include the ide launcher in the final model
        if artifact.group() == IDE_LAUNCHER_GROUP && artifact.name() == IDE_LAUNCHER_NAME {
            return true;
        }
        self.excluded_artifacts.contains(artifact.key())
    }

    /// Finalize into an immutable [`AppModel`].
    ///
    /// Filters excluded artifacts out of all three dependency lists, keeping
    /// survivors in their original order, and copies every set into the model.
    /// The excluded set itself is not carried over.
    ///
    /// Does not consume or modify the builder: calling it twice without
    /// intervening mutation yields equal models.
    ///
    /// # Errors
    ///
    /// [`ModelError::IncompleteModel`] when no application artifact was set.
    pub fn build(&self) -> Result<AppModel, ModelError> {
        let app_artifact = self.app_artifact.clone().ok_or_else(|| ModelError::IncompleteModel {
            reason: "no application artifact was set".to_string(),
        })?;

        let model = AppModel {
            parent_first_artifacts: self.parent_first_artifacts.clone(),
            runner_parent_first_artifacts: self.runner_parent_first_artifacts.clone(),
            lesser_priority_artifacts: self.lesser_priority_artifacts.clone(),
            local_project_artifacts: self.local_project_artifacts.clone(),
            app_artifact,
            platform_properties: self.platform_properties.clone(),
            runtime_deps: self.retained(&self.runtime_deps),
            deployment_deps: self.retained(&self.deployment_deps),
            full_deployment_deps: self.retained(&self.full_deployment_deps),
        };

        debug!("Created application model {model}");
        Ok(model)
    }

    fn retained(&self, deps: &[Dependency]) -> Vec<Dependency> {
        deps.iter().filter(|dep| !self.is_excluded(dep.artifact())).cloned().collect()
    }
}

/// Validate a whole batch before appending any of it.
fn append(
    target: &mut Vec<Dependency>,
    deps: impl IntoIterator<Item = Dependency>,
    argument: &str,
) -> Result<(), ModelError> {
    let deps: Vec<Dependency> = deps.into_iter().collect();
    for dep in &deps {
        dep.artifact().ensure_resolved(argument)?;
    }
    target.extend(deps);
    Ok(())
}

fn insert_keys(
    target: &mut BTreeSet<ArtifactKey>,
    keys: impl IntoIterator<Item = ArtifactKey>,
    argument: &str,
) -> Result<(), ModelError> {
    let keys: Vec<ArtifactKey> = keys.into_iter().collect();
    for key in &keys {
        key.ensure_complete(argument)?;
    }
    target.extend(keys);
    Ok(())
}
