//! Extension descriptor merging.
//!
//! Every extension ships a descriptor with up to four comma-separated lists of
//! artifact keys (see [`crate::constants`]). Merging a descriptor adds those
//! keys to the matching builder sets. A descriptor with a malformed token is
//! rejected whole: nothing from it is applied, a [`DescriptorDiagnostic`] is
//! recorded, and merging carries on with the next descriptor.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use tracing::{debug, warn};

use super::Builder;
use crate::constants::{
    EXCLUDED_ARTIFACTS, LESSER_PRIORITY_ARTIFACTS, PARENT_FIRST_ARTIFACTS,
    RUNNER_PARENT_FIRST_ARTIFACTS,
};
use crate::core::{ArtifactKey, ModelError};

/// A descriptor that was rejected during merging.
#[derive(Debug, Clone)]
pub struct DescriptorDiagnostic {
    /// Name of the extension that contributed the descriptor
    pub extension: String,
    /// Descriptor property holding the bad token
    pub property: String,
    /// The offending token, trimmed
    pub token: String,
    /// The parse failure
    pub error: ModelError,
}

impl fmt::Display for DescriptorDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "extension '{}' was ignored: {} (in {})",
            self.extension, self.error, self.property
        )
    }
}

/// Collector for descriptor diagnostics, passed explicitly into each merge.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    entries: Vec<DescriptorDiagnostic>,
}

impl Diagnostics {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic.
    pub fn push(&mut self, diagnostic: DescriptorDiagnostic) {
        self.entries.push(diagnostic);
    }

    /// Number of recorded diagnostics.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Recorded diagnostics in the order they occurred.
    pub fn iter(&self) -> std::slice::Iter<'_, DescriptorDiagnostic> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a DescriptorDiagnostic;
    type IntoIter = std::slice::Iter<'a, DescriptorDiagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// The four classification properties, in merge order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Classification {
    ParentFirst,
    RunnerParentFirst,
    Excluded,
    LesserPriority,
}

impl Classification {
    const ALL: [Self; 4] =
        [Self::ParentFirst, Self::RunnerParentFirst, Self::Excluded, Self::LesserPriority];

    fn property(self) -> &'static str {
        match self {
            Self::ParentFirst => PARENT_FIRST_ARTIFACTS,
            Self::RunnerParentFirst => RUNNER_PARENT_FIRST_ARTIFACTS,
            Self::Excluded => EXCLUDED_ARTIFACTS,
            Self::LesserPriority => LESSER_PRIORITY_ARTIFACTS,
        }
    }
}

impl Builder {
    /// Merge the classification lists of one extension descriptor.
    ///
    /// Reads `parent-first-artifacts`, `runner-parent-first-artifacts`,
    /// `excluded-artifacts` and `lesser-priority-artifacts`; other properties
    /// are ignored. Tokens are trimmed and empty tokens skipped.
    ///
    /// Returns `true` when the descriptor was applied. On the first malformed
    /// token the whole descriptor is discarded, a diagnostic naming the
    /// extension and token is pushed to `diagnostics`, and `false` is returned.
    /// Merging the same descriptor again changes nothing.
    pub fn merge_extension_descriptor(
        &mut self,
        properties: &BTreeMap<String, String>,
        extension: &str,
        diagnostics: &mut Diagnostics,
    ) -> bool {
        let mut staged: Vec<(Classification, ArtifactKey)> = Vec::new();

        for classification in Classification::ALL {
            let property = classification.property();
            let Some(value) = properties.get(property) else {
                continue;
            };
            match parse_artifact_list(value) {
                Ok(keys) => staged.extend(keys.into_iter().map(|key| (classification, key))),
                Err((token, error)) => {
                    warn!("Ignoring descriptor of extension {extension}: {error} (in {property})");
                    diagnostics.push(DescriptorDiagnostic {
                        extension: extension.to_string(),
                        property: property.to_string(),
                        token,
                        error,
                    });
                    return false;
                }
            }
        }

        for (classification, key) in staged {
            self.classification_set(classification).insert(key.clone());
            match classification {
                Classification::Excluded => {
                    debug!("Extension {extension} is excluding {key}");
                }
                Classification::LesserPriority => {
                    debug!("Extension {extension} is making {key} a lesser priority artifact");
                }
                _ => {}
            }
        }
        true
    }

    fn classification_set(&mut self, classification: Classification) -> &mut BTreeSet<ArtifactKey> {
        match classification {
            Classification::ParentFirst => &mut self.parent_first_artifacts,
            Classification::RunnerParentFirst => &mut self.runner_parent_first_artifacts,
            Classification::Excluded => &mut self.excluded_artifacts,
            Classification::LesserPriority => &mut self.lesser_priority_artifacts,
        }
    }
}

/// Parse a comma-separated list of artifact key tokens.
///
/// On failure returns the offending (trimmed) token with its error.
pub(crate) fn parse_artifact_list(value: &str) -> Result<Vec<ArtifactKey>, (String, ModelError)> {
    value
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| token.parse::<ArtifactKey>().map_err(|e| (token.to_string(), e)))
        .collect()
}
