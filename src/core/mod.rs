//! Core types for app-model
//!
//! This module holds the value types every other module builds on: the
//! artifact identity types and the error taxonomy.
//!
//! # Modules
//!
//! ## `artifact` - Artifact Identity
//!
//! - [`ArtifactKey`] - version-less identity used for classification and exclusion
//! - [`Artifact`] - versioned identity used for resolution
//! - [`Dependency`] - an artifact plus the resolver's kind flags
//!
//! ## `error` - Error Handling
//!
//! - [`ModelError`] - enumerated failure modes
//! - [`ErrorContext`] - user-friendly wrapper with suggestions and details
//! - [`user_friendly_error`] - convert any error to the user-friendly format
//! - [`IntoAnyhowWithContext`] - extension trait for error conversion
//!
//! # Thread Safety
//!
//! All core types are owned, immutable values: they are `Send + Sync` and can
//! be shared freely once constructed.
//!
//! # Examples
//!
//! ```rust
//! use app_model::core::{Artifact, ArtifactKey, Dependency};
//!
//! let key = ArtifactKey::new("org.acme", "lib");
//! let dep = Dependency::direct(Artifact::new(key.clone(), "2.0"));
//! assert_eq!(dep.key(), &key);
//! ```

pub mod artifact;
pub mod error;

pub use artifact::{Artifact, ArtifactKey, Dependency};
pub use error::{ErrorContext, IntoAnyhowWithContext, ModelError, user_friendly_error};
