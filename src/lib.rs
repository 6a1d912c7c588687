//! app-model - application dependency model for isolated class loading
//!
//! A build computes, once, everything the class loaders of an application need
//! to know about its dependencies: which artifacts make up the runtime and
//! deployment views, which must be delegated to a parent loader, which are
//! dropped, and which go to the back of the class path. The result is an
//! immutable [`AppModel`](model::AppModel) that is serialized and handed to a
//! separate process, where it is reconstructed unchanged.
//!
//! # Architecture Overview
//!
//! - Artifacts are identified by a version-less [`ArtifactKey`](core::ArtifactKey)
//!   (`group:name[:classifier[:type]]`) for classification and by a versioned
//!   [`Artifact`](core::Artifact) in dependency lists
//! - A mutable [`Builder`](model::Builder) accumulates resolver output and merges
//!   each extension's descriptor; a malformed descriptor is skipped with a
//!   diagnostic instead of failing the build
//! - [`Builder::build`](model::Builder::build) applies exclusions and freezes the model
//! - The model travels as a versioned TOML document with a SHA-256 fingerprint
//!
//! # Core Modules
//!
//! - [`core`] - artifact identity types and error handling
//! - [`model`] - the model, its builder, descriptor merging, class loading
//!   precedence and transport
//! - [`config`] - assembly plans and `.properties` descriptors read by the tool
//! - [`cli`] - the `app-model` command-line tool
//! - [`constants`] - descriptor keys and format parameters
//! - [`utils`] - atomic file writes
//!
//! # Example
//!
//! ```rust
//! use app_model::core::{ArtifactKey, Dependency};
//! use app_model::model::{AppModel, ClassLoadingContext, Diagnostics, Placement};
//! use std::collections::BTreeMap;
//!
//! # fn main() -> Result<(), app_model::core::ModelError> {
//! let mut builder = AppModel::builder();
//! builder
//!     .set_app_artifact("org.acme:app:1.0.0".parse()?)?
//!     .add_runtime_deps([
//!         Dependency::direct("org.acme:lib:2.0".parse()?),
//!         Dependency::transitive("commons-logging:commons-logging:1.2".parse()?),
//!     ])?;
//!
//! let descriptor = BTreeMap::from([
//!     ("excluded-artifacts".to_string(), "commons-logging:commons-logging".to_string()),
//!     ("parent-first-artifacts".to_string(), "org.jboss.logging:jboss-logging".to_string()),
//! ]);
//! let mut diagnostics = Diagnostics::new();
//! builder.merge_extension_descriptor(&descriptor, "logging", &mut diagnostics);
//!
//! let model = builder.build()?;
//! assert_eq!(model.runtime_deps().len(), 1);
//!
//! let decoded = AppModel::from_toml_str(&model.to_toml_string()?)?;
//! assert_eq!(decoded, model);
//! assert_eq!(
//!     decoded.placement(
//!         &ArtifactKey::new("org.jboss.logging", "jboss-logging"),
//!         ClassLoadingContext::Augmentation,
//!     ),
//!     Placement::ParentFirst
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Command-Line Tool
//!
//! ```bash
//! app-model assemble plan.toml -o target/app-model.toml --strict
//! app-model verify target/app-model.toml
//! app-model classify target/app-model.toml org.jboss.logging:jboss-logging
//! app-model inspect target/app-model.toml --format json
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod model;
pub mod utils;

// test_utils is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
