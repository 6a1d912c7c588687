//! Class loading precedence as read by model consumers.
//!
//! The model stores the classification sets raw and never resolves overlaps.
//! Class loader builders apply one precedence rule, reproduced here so that
//! every consumer reads the sets the same way:
//!
//! 1. Parent-first membership (augmentation) or runner parent-first membership
//!    (packaged runner) wins: the artifact is delegated to the shared loader.
//! 2. Otherwise lesser-priority membership moves the artifact to the tail of
//!    the isolated loader's search path.
//! 3. Everything else is loaded by the isolated loader in list order.
//!
//! Local project membership plays no part in delegation.

use serde::Serialize;
use std::fmt;

use super::AppModel;
use crate::core::{ArtifactKey, Dependency};

/// Which class loader is being assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClassLoadingContext {
    /// The isolated loader running build-time augmentation
    Augmentation,
    /// The loader of the packaged application
    Runner,
}

impl ClassLoadingContext {
    /// Both contexts, augmentation first.
    pub const ALL: [Self; 2] = [Self::Augmentation, Self::Runner];
}

impl fmt::Display for ClassLoadingContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Augmentation => write!(f, "augmentation"),
            Self::Runner => write!(f, "runner"),
        }
    }
}

/// Where an artifact ends up in a given context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    /// Delegated to the shared parent loader before the isolated one
    ParentFirst,
    /// Loaded by the isolated loader in list order
    Isolated,
    /// Loaded by the isolated loader after every other artifact
    LesserPriority,
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParentFirst => write!(f, "parent-first"),
            Self::Isolated => write!(f, "isolated"),
            Self::LesserPriority => write!(f, "lesser-priority"),
        }
    }
}

impl AppModel {
    /// Placement of a key in the given context.
    pub fn placement(&self, key: &ArtifactKey, context: ClassLoadingContext) -> Placement {
        let parent_first = match context {
            ClassLoadingContext::Augmentation => self.is_parent_first(key),
            ClassLoadingContext::Runner => self.is_runner_parent_first(key),
        };
        if parent_first {
            Placement::ParentFirst
        } else if self.is_lesser_priority(key) {
            Placement::LesserPriority
        } else {
            Placement::Isolated
        }
    }

    /// Search order of the isolated loader for `deps`.
    ///
    /// Parent-first artifacts are left out, lesser-priority ones move to the
    /// tail; relative order is otherwise kept.
    pub fn isolated_search_order<'a>(
        &self,
        deps: &'a [Dependency],
        context: ClassLoadingContext,
    ) -> Vec<&'a Dependency> {
        let (tail, head): (Vec<&Dependency>, Vec<&Dependency>) = deps
            .iter()
            .filter(|dep| self.placement(dep.key(), context) != Placement::ParentFirst)
            .partition(|dep| self.placement(dep.key(), context) == Placement::LesserPriority);
        head.into_iter().chain(tail).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Artifact;

    fn key(token: &str) -> ArtifactKey {
        token.parse().unwrap()
    }

    fn dep(token: &str) -> Dependency {
        Dependency::direct(token.parse::<Artifact>().unwrap())
    }

    fn model() -> AppModel {
        let mut builder = AppModel::builder();
        builder
            .set_app_artifact("org.acme:app:1.0".parse().unwrap())
            .unwrap()
            .add_parent_first_artifacts([key("org.acme:both"), key("org.acme:pf")])
            .unwrap()
            .add_runner_parent_first_artifact(key("org.acme:rpf"))
            .unwrap()
            .add_lesser_priority_artifacts([key("org.acme:both"), key("org.acme:lp")])
            .unwrap();
        builder.build().unwrap()
    }

    #[test]
    fn test_parent_first_wins_over_lesser_priority() {
        let model = model();
        assert_eq!(
            model.placement(&key("org.acme:both"), ClassLoadingContext::Augmentation),
            Placement::ParentFirst
        );
        // not runner parent-first, so lesser priority applies there
        assert_eq!(
            model.placement(&key("org.acme:both"), ClassLoadingContext::Runner),
            Placement::LesserPriority
        );
    }

    #[test]
    fn test_placement_is_context_specific() {
        let model = model();
        assert_eq!(
            model.placement(&key("org.acme:rpf"), ClassLoadingContext::Augmentation),
            Placement::Isolated
        );
        assert_eq!(
            model.placement(&key("org.acme:rpf"), ClassLoadingContext::Runner),
            Placement::ParentFirst
        );
        assert_eq!(
            model.placement(&key("org.acme:other"), ClassLoadingContext::Runner),
            Placement::Isolated
        );
    }

    #[test]
    fn test_isolated_search_order() {
        let model = model();
        let deps = vec![
            dep("org.acme:lp:1"),
            dep("org.acme:a:1"),
            dep("org.acme:pf:1"),
            dep("org.acme:both:1"),
            dep("org.acme:b:1"),
        ];

        let order: Vec<String> = model
            .isolated_search_order(&deps, ClassLoadingContext::Augmentation)
            .iter()
            .map(|d| d.key().name().to_string())
            .collect();
        assert_eq!(order, vec!["a", "b", "lp"]);

        let order: Vec<String> = model
            .isolated_search_order(&deps, ClassLoadingContext::Runner)
            .iter()
            .map(|d| d.key().name().to_string())
            .collect();
        assert_eq!(order, vec!["a", "pf", "b", "lp", "both"]);
    }
}
