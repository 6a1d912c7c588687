//! Assembly plans.
//!
//! A plan is a TOML file that captures one build invocation: the root
//! artifact, the three resolved dependency lists and the descriptors of every
//! processed extension. Turning a plan into a [`Builder`] replays those inputs
//! in declaration order, which is exactly what a build pipeline would do.
//!
//! ```toml
//! app_artifact = "org.acme:app:1.0.0-SNAPSHOT"
//! local_project_artifacts = ["org.acme:app"]
//!
//! [platform_properties]
//! "platform.quarkus.native.builder-image" = "mandrel"
//!
//! [[runtime_deps]]
//! artifact = "org.acme:lib:2.0"
//!
//! [[runtime_deps]]
//! artifact = "io.quarkus:quarkus-core:3.0.0"
//! direct = false
//!
//! [[extensions]]
//! name = "logging"
//! descriptor = "descriptors/logging.properties"
//!
//! [[extensions]]
//! name = "rest"
//! properties = { excluded-artifacts = "commons-logging:commons-logging" }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::properties::load_properties;
use crate::core::{Artifact, ArtifactKey, Dependency, ModelError};
use crate::model::{Builder, Diagnostics};

/// One build invocation, as read from a plan file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssemblyPlan {
    /// Root artifact token, `group:name[[:classifier]:type]:version`
    pub app_artifact: String,

    /// Artifact key tokens of local project modules
    #[serde(default)]
    pub local_project_artifacts: Vec<String>,

    /// Platform configuration copied into the model
    #[serde(default)]
    pub platform_properties: BTreeMap<String, String>,

    /// Runtime dependencies in resolver order
    #[serde(default)]
    pub runtime_deps: Vec<PlanDependency>,

    /// Direct deployment dependencies in resolver order
    #[serde(default)]
    pub deployment_deps: Vec<PlanDependency>,

    /// Deployment dependencies with their transitive closure
    #[serde(default)]
    pub full_deployment_deps: Vec<PlanDependency>,

    /// Extension descriptors in processing order
    #[serde(default)]
    pub extensions: Vec<PlanExtension>,

    /// Where the plan came from, for error messages
    #[serde(skip)]
    source_name: String,

    /// Directory that relative descriptor paths are resolved against
    #[serde(skip)]
    base_dir: PathBuf,
}

/// A dependency entry of a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanDependency {
    /// Artifact token
    pub artifact: String,
    /// Resolver scope, `compile` when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// Whether the application declares the dependency itself
    #[serde(default = "default_direct")]
    pub direct: bool,
    /// Whether the dependency is optional
    #[serde(default)]
    pub optional: bool,
}

/// An extension entry of a plan.
///
/// Exactly one of `properties` and `descriptor` must be given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanExtension {
    /// Extension name used in diagnostics
    pub name: String,
    /// Inline descriptor properties
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, String>>,
    /// Path to a `.properties` descriptor, relative to the plan file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descriptor: Option<PathBuf>,
}

fn default_direct() -> bool {
    true
}

impl AssemblyPlan {
    /// Read a plan file. Relative descriptor paths resolve against its directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).with_context(|| {
            format!(
                "Cannot read assembly plan: {}\n\n\
                    Possible causes:\n\
                    - File doesn't exist\n\
                    - Permission denied (check file ownership)",
                path.display()
            )
        })?;

        let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        let plan = Self::parse(&content, &path.display().to_string(), base_dir)?;
        debug!(
            "Loaded plan {} with {} extension(s)",
            path.display(),
            plan.extensions.len()
        );
        Ok(plan)
    }

    /// Parse plan content. Relative descriptor paths resolve against `base_dir`.
    pub fn parse(content: &str, source_name: &str, base_dir: PathBuf) -> Result<Self, ModelError> {
        let mut plan: Self = toml::from_str(content).map_err(|e| ModelError::PlanError {
            file: source_name.to_string(),
            reason: e.to_string(),
        })?;
        plan.source_name = source_name.to_string();
        plan.base_dir = base_dir;
        Ok(plan)
    }

    /// Feed the plan into a fresh [`Builder`].
    ///
    /// Dependency lists and key sets are added first, then each extension
    /// descriptor is merged in declaration order. A descriptor with a malformed
    /// token is skipped and reported through `diagnostics`; every other
    /// problem aborts with an error naming the offending entry.
    pub fn into_builder(self, diagnostics: &mut Diagnostics) -> Result<Builder> {
        let mut builder = Builder::new();

        let root: Artifact = self.token(&self.app_artifact, "app_artifact")?;
        builder.set_app_artifact(root)?;
        builder.add_platform_properties(self.platform_properties.clone());

        let keys = self
            .local_project_artifacts
            .iter()
            .enumerate()
            .map(|(i, token)| self.token::<ArtifactKey>(token, &format!("local_project_artifacts[{i}]")))
            .collect::<Result<Vec<_>, _>>()?;
        builder.add_local_project_artifacts(keys)?;

        builder.add_runtime_deps(self.dependencies(&self.runtime_deps, "runtime_deps")?)?;
        builder.add_deployment_deps(self.dependencies(&self.deployment_deps, "deployment_deps")?)?;
        builder.add_full_deployment_deps(
            self.dependencies(&self.full_deployment_deps, "full_deployment_deps")?,
        )?;

        for extension in &self.extensions {
            let properties = self.extension_properties(extension)?;
            if builder.merge_extension_descriptor(&properties, &extension.name, diagnostics) {
                debug!("Merged descriptor of extension {}", extension.name);
            }
        }

        info!(
            "Assembled {} ({} extension(s), {} ignored)",
            self.app_artifact,
            self.extensions.len(),
            diagnostics.len()
        );
        Ok(builder)
    }

    fn dependencies(&self, entries: &[PlanDependency], list: &str) -> Result<Vec<Dependency>, ModelError> {
        entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let artifact: Artifact = self.token(&entry.artifact, &format!("{list}[{i}]"))?;
                let dep = if entry.direct {
                    Dependency::direct(artifact)
                } else {
                    Dependency::transitive(artifact)
                };
                let dep = match &entry.scope {
                    Some(scope) => dep.with_scope(scope.clone()),
                    None => dep,
                };
                Ok(dep.with_optional(entry.optional))
            })
            .collect()
    }

    fn extension_properties(&self, extension: &PlanExtension) -> Result<BTreeMap<String, String>> {
        match (&extension.properties, &extension.descriptor) {
            (Some(properties), None) => Ok(properties.clone()),
            (None, Some(descriptor)) => {
                let path = self.base_dir.join(descriptor);
                load_properties(&path).with_context(|| {
                    format!("Cannot load descriptor of extension '{}'", extension.name)
                })
            }
            (Some(_), Some(_)) => Err(self
                .plan_error(format!(
                    "extension '{}' sets both 'properties' and 'descriptor'",
                    extension.name
                ))
                .into()),
            (None, None) => Err(self
                .plan_error(format!(
                    "extension '{}' needs either 'properties' or 'descriptor'",
                    extension.name
                ))
                .into()),
        }
    }

    fn token<T>(&self, token: &str, entry: &str) -> Result<T, ModelError>
    where
        T: std::str::FromStr<Err = ModelError>,
    {
        token.parse().map_err(|e: ModelError| self.plan_error(format!("{entry}: {e}")))
    }

    fn plan_error(&self, reason: String) -> ModelError {
        ModelError::PlanError {
            file: self.source_name.clone(),
            reason,
        }
    }
}
