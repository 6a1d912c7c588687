//! Artifact identity types.
//!
//! Two identities coexist in the model:
//!
//! - [`ArtifactKey`] - `(group, name, classifier, type)` with no version. All
//!   classification and exclusion matching happens on keys, so a policy written
//!   against `org.jboss.logging:jboss-logging` applies to every version of it.
//! - [`Artifact`] - a key plus a version. Resolution identity is versioned.
//!
//! A [`Dependency`] is an artifact as produced by the resolver, together with
//! the kind flags the resolver recorded for it.
//!
//! # Token formats
//!
//! Keys use 1 to 4 colon-delimited segments:
//!
//! ```text
//! group:name
//! group:name:classifier
//! group:name:classifier:type
//! ```
//!
//! Missing trailing segments default to an empty classifier and type `jar`.
//! Artifacts append the version and drop the classifier when it is empty:
//!
//! ```text
//! group:name:version                  (type jar)
//! group:name:type:version
//! group:name:classifier:type:version
//! ```
//!
//! ```
//! use app_model::core::{Artifact, ArtifactKey};
//! use std::str::FromStr;
//!
//! let key = ArtifactKey::from_str("org.jboss.logging:jboss-logging").unwrap();
//! assert_eq!(key.classifier(), "");
//! assert_eq!(key.artifact_type(), "jar");
//!
//! let artifact = Artifact::from_str("org.acme:lib:jar:2.0").unwrap();
//! assert_eq!(artifact.key().name(), "lib");
//! assert_eq!(artifact.version(), "2.0");
//! assert_eq!(artifact.to_string(), "org.acme:lib:jar:2.0");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{DEFAULT_ARTIFACT_TYPE, DEFAULT_SCOPE};
use crate::core::ModelError;

/// Artifact identity without version.
///
/// Equality, hashing and ordering are structural over all four fields and
/// case-sensitive. No whitespace or case normalization happens here; callers
/// trim tokens before parsing.
///
/// Serialized as its canonical token string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ArtifactKey {
    group: String,
    name: String,
    classifier: String,
    artifact_type: String,
}

impl ArtifactKey {
    /// Create a key with an empty classifier and type `jar`.
    pub fn new(group: impl Into<String>, name: impl Into<String>) -> Self {
        Self::with_coordinates(group, name, "", DEFAULT_ARTIFACT_TYPE)
    }

    /// Create a key from all four coordinates.
    pub fn with_coordinates(
        group: impl Into<String>,
        name: impl Into<String>,
        classifier: impl Into<String>,
        artifact_type: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            classifier: classifier.into(),
            artifact_type: artifact_type.into(),
        }
    }

    /// Parse the segments of an already split token.
    ///
    /// Accepts 1 to 4 segments. An empty trailing classifier or type falls back
    /// to its default; an empty group or name is rejected.
    pub fn from_segments(segments: &[&str]) -> Result<Self, ModelError> {
        let token = segments.join(":");
        let malformed = |reason: &str| ModelError::MalformedArtifactDescriptor {
            token: token.clone(),
            reason: reason.to_string(),
        };

        match segments.len() {
            0 => return Err(malformed("no segments")),
            1..=4 => {}
            n => {
                return Err(malformed(&format!(
                    "expected at most 4 segments (group:name:classifier:type), found {n}"
                )));
            }
        }

        let group = segments[0];
        if group.is_empty() {
            return Err(malformed("artifact group is empty"));
        }
        let name = segments.get(1).copied().unwrap_or_default();
        if name.is_empty() {
            return Err(malformed("artifact name is empty"));
        }
        let classifier = segments.get(2).copied().unwrap_or_default();
        let artifact_type = match segments.get(3).copied() {
            Some(t) if !t.is_empty() => t,
            _ => DEFAULT_ARTIFACT_TYPE,
        };

        Ok(Self::with_coordinates(group, name, classifier, artifact_type))
    }

    /// The group coordinate.
    pub fn group(&self) -> &str {
        &self.group
    }

    /// The artifact name coordinate.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The classifier, empty when the artifact has none.
    pub fn classifier(&self) -> &str {
        &self.classifier
    }

    /// The packaging type, `jar` unless stated otherwise.
    pub fn artifact_type(&self) -> &str {
        &self.artifact_type
    }

    /// Reject keys that would not survive their token form: a missing group,
    /// name or type, or a `:` inside any coordinate.
    pub(crate) fn ensure_complete(&self, argument: &str) -> Result<(), ModelError> {
        let invalid = |reason: String| ModelError::InvalidArgument {
            argument: argument.to_string(),
            reason,
        };

        if self.group.is_empty() || self.name.is_empty() {
            return Err(invalid(format!("artifact key '{self}' has an empty group or name")));
        }
        if self.artifact_type.is_empty() {
            return Err(invalid(format!("artifact key '{self}' has an empty type")));
        }
        let coordinates = [&self.group, &self.name, &self.classifier, &self.artifact_type];
        if let Some(field) = coordinates.iter().find(|c| c.contains(':')) {
            return Err(invalid(format!(
                "artifact key coordinate '{field}' contains the ':' delimiter"
            )));
        }
        Ok(())
    }
}

impl FromStr for ArtifactKey {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments: Vec<&str> = s.split(':').collect();
        Self::from_segments(&segments)
    }
}

impl fmt::Display for ArtifactKey {
    /// Canonical token form; default trailing segments are omitted so that a
    /// parsed token renders back to itself.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.name)?;
        if self.artifact_type != DEFAULT_ARTIFACT_TYPE {
            write!(f, ":{}:{}", self.classifier, self.artifact_type)
        } else if !self.classifier.is_empty() {
            write!(f, ":{}", self.classifier)
        } else {
            Ok(())
        }
    }
}

impl TryFrom<String> for ArtifactKey {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ArtifactKey> for String {
    fn from(key: ArtifactKey) -> Self {
        key.to_string()
    }
}

/// A resolved artifact: key plus version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "ArtifactRecord", into = "ArtifactRecord")]
pub struct Artifact {
    key: ArtifactKey,
    version: String,
}

impl Artifact {
    /// Create an artifact from its key and version.
    pub fn new(key: ArtifactKey, version: impl Into<String>) -> Self {
        Self {
            key,
            version: version.into(),
        }
    }

    /// The version-less identity used for classification.
    pub fn key(&self) -> &ArtifactKey {
        &self.key
    }

    /// The resolved version.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Shorthand for `self.key().group()`.
    pub fn group(&self) -> &str {
        self.key.group()
    }

    /// Shorthand for `self.key().name()`.
    pub fn name(&self) -> &str {
        self.key.name()
    }

    /// Reject artifacts that are not fully resolved.
    pub(crate) fn ensure_resolved(&self, argument: &str) -> Result<(), ModelError> {
        self.key.ensure_complete(argument)?;
        if self.version.is_empty() {
            return Err(ModelError::InvalidArgument {
                argument: argument.to_string(),
                reason: format!("artifact '{}' has no version", self.key),
            });
        }
        Ok(())
    }
}

impl FromStr for Artifact {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments: Vec<&str> = s.split(':').collect();
        let (key_segments, version): (Vec<&str>, &str) = match segments.as_slice() {
            [group, name, version] => (vec![*group, *name], *version),
            [group, name, artifact_type, version] => {
                (vec![*group, *name, "", *artifact_type], *version)
            }
            [group, name, classifier, artifact_type, version] => {
                (vec![*group, *name, *classifier, *artifact_type], *version)
            }
            _ => {
                return Err(ModelError::MalformedArtifactDescriptor {
                    token: s.to_string(),
                    reason: "expected group:name[[:classifier]:type]:version".to_string(),
                });
            }
        };

        if version.is_empty() {
            return Err(ModelError::MalformedArtifactDescriptor {
                token: s.to_string(),
                reason: "artifact version is empty".to_string(),
            });
        }

        let key = ArtifactKey::from_segments(&key_segments).map_err(|e| match e {
            ModelError::MalformedArtifactDescriptor {
                reason,
                ..
            } => ModelError::MalformedArtifactDescriptor {
                token: s.to_string(),
                reason,
            },
            other => other,
        })?;
        Ok(Self::new(key, version))
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = &self.key;
        if key.classifier.is_empty() {
            write!(f, "{}:{}:{}:{}", key.group, key.name, key.artifact_type, self.version)
        } else {
            write!(
                f,
                "{}:{}:{}:{}:{}",
                key.group, key.name, key.classifier, key.artifact_type, self.version
            )
        }
    }
}

/// Table form of an [`Artifact`] in serialized models.
#[derive(Serialize, Deserialize)]
struct ArtifactRecord {
    group: String,
    name: String,
    #[serde(default)]
    classifier: String,
    #[serde(rename = "type", default = "default_artifact_type")]
    artifact_type: String,
    version: String,
}

fn default_artifact_type() -> String {
    DEFAULT_ARTIFACT_TYPE.to_string()
}

fn default_scope() -> String {
    DEFAULT_SCOPE.to_string()
}

impl From<ArtifactRecord> for Artifact {
    fn from(record: ArtifactRecord) -> Self {
        Self::new(
            ArtifactKey::with_coordinates(
                record.group,
                record.name,
                record.classifier,
                record.artifact_type,
            ),
            record.version,
        )
    }
}

impl From<Artifact> for ArtifactRecord {
    fn from(artifact: Artifact) -> Self {
        let Artifact {
            key,
            version,
        } = artifact;
        Self {
            group: key.group,
            name: key.name,
            classifier: key.classifier,
            artifact_type: key.artifact_type,
            version,
        }
    }
}

/// An artifact as produced by the resolver, with its kind flags.
///
/// Dependencies compare structurally, including the flags; the builder never
/// deduplicates them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "DependencyRecord", into = "DependencyRecord")]
pub struct Dependency {
    artifact: Artifact,
    scope: String,
    direct: bool,
    optional: bool,
}

impl Dependency {
    /// A dependency declared directly by the application.
    pub fn direct(artifact: Artifact) -> Self {
        Self {
            artifact,
            scope: DEFAULT_SCOPE.to_string(),
            direct: true,
            optional: false,
        }
    }

    /// A dependency reached through another dependency.
    pub fn transitive(artifact: Artifact) -> Self {
        Self {
            direct: false,
            ..Self::direct(artifact)
        }
    }

    /// Replace the resolver scope (defaults to `compile`).
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    /// Mark the dependency optional or not.
    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// The resolved artifact.
    pub fn artifact(&self) -> &Artifact {
        &self.artifact
    }

    /// Shorthand for `self.artifact().key()`.
    pub fn key(&self) -> &ArtifactKey {
        self.artifact.key()
    }

    /// The resolver scope.
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Whether the application declared this dependency itself.
    pub fn is_direct(&self) -> bool {
        self.direct
    }

    /// Whether the dependency was declared optional.
    pub fn is_optional(&self) -> bool {
        self.optional
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}", self.artifact, self.scope)?;
        if !self.direct {
            write!(f, ", transitive")?;
        }
        if self.optional {
            write!(f, ", optional")?;
        }
        write!(f, ")")
    }
}

/// Flat table form of a [`Dependency`] in serialized models.
#[derive(Serialize, Deserialize)]
struct DependencyRecord {
    group: String,
    name: String,
    #[serde(default)]
    classifier: String,
    #[serde(rename = "type", default = "default_artifact_type")]
    artifact_type: String,
    version: String,
    #[serde(default = "default_scope")]
    scope: String,
    #[serde(default)]
    direct: bool,
    #[serde(default)]
    optional: bool,
}

impl From<DependencyRecord> for Dependency {
    fn from(record: DependencyRecord) -> Self {
        Self {
            artifact: Artifact::new(
                ArtifactKey::with_coordinates(
                    record.group,
                    record.name,
                    record.classifier,
                    record.artifact_type,
                ),
                record.version,
            ),
            scope: record.scope,
            direct: record.direct,
            optional: record.optional,
        }
    }
}

impl From<Dependency> for DependencyRecord {
    fn from(dependency: Dependency) -> Self {
        let ArtifactRecord {
            group,
            name,
            classifier,
            artifact_type,
            version,
        } = dependency.artifact.into();
        Self {
            group,
            name,
            classifier,
            artifact_type,
            version,
            scope: dependency.scope,
            direct: dependency.direct,
            optional: dependency.optional,
        }
    }
}
