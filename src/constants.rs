//! Global constants used throughout the app-model codebase.
//!
//! This module contains the well-known descriptor keys, identity defaults and
//! transport format parameters that are shared across multiple modules.
//! Defining them centrally makes the classification vocabulary discoverable.

/// Descriptor key listing artifacts that must be loaded parent-first by the
/// augmentation class loader.
pub const PARENT_FIRST_ARTIFACTS: &str = "parent-first-artifacts";

/// Descriptor key listing artifacts that must be loaded parent-first by the
/// packaged runner class loader.
pub const RUNNER_PARENT_FIRST_ARTIFACTS: &str = "runner-parent-first-artifacts";

/// Descriptor key listing artifacts that are dropped from every dependency list.
pub const EXCLUDED_ARTIFACTS: &str = "excluded-artifacts";

/// Descriptor key listing artifacts placed at the tail of the class path.
pub const LESSER_PRIORITY_ARTIFACTS: &str = "lesser-priority-artifacts";

/// Type used when an artifact key omits the type segment.
pub const DEFAULT_ARTIFACT_TYPE: &str = "jar";

/// Scope used when a dependency record omits one.
pub const DEFAULT_SCOPE: &str = "compile";

/// Group of the bootstrap-only IDE launcher.
///
/// The launcher is a build-time convenience and never reaches either class
/// loader, whatever extension descriptors say.
pub const IDE_LAUNCHER_GROUP: &str = "io.quarkus";

/// Name of the bootstrap-only IDE launcher. See [`IDE_LAUNCHER_GROUP`].
pub const IDE_LAUNCHER_NAME: &str = "quarkus-ide-launcher";

/// Current version of the serialized model format.
///
/// Models are only exchanged between processes running the same build of the
/// tool, so any mismatch is rejected on load.
pub const MODEL_FORMAT_VERSION: u32 = 1;

/// Header written at the top of saved model files.
pub const MODEL_FILE_HEADER: &str = "# Generated application model - DO NOT EDIT\n";

/// Prefix of model fingerprints.
pub const FINGERPRINT_PREFIX: &str = "sha256:";
