//! Error handling for app-model
//!
//! This module provides the typed error enum used by the model core and the
//! user-friendly reporting layer used by the command-line tool. The error
//! system follows two principles:
//! 1. **Strongly-typed errors** so callers can match on the failure mode
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Architecture
//!
//! - [`ModelError`] - enumerated failure cases of model assembly and transport
//! - [`ErrorContext`] - wrapper that adds details and suggestions for display
//! - [`user_friendly_error`] - converts any [`anyhow::Error`] into an [`ErrorContext`]
//!
//! # Error Categories
//!
//! - **Identity**: [`ModelError::MalformedArtifactDescriptor`]
//! - **Accumulation**: [`ModelError::InvalidArgument`]
//! - **Finalization**: [`ModelError::IncompleteModel`]
//! - **Transport**: [`ModelError::ModelParseError`], [`ModelError::InvariantViolation`]
//! - **Tooling**: [`ModelError::PlanError`], [`ModelError::StrictModeViolation`]
//!
//! # Propagation
//!
//! Descriptor parse failures never reach the caller as errors: the builder
//! records them in a [`Diagnostics`](crate::model::Diagnostics) collector and
//! moves on to the next descriptor. Everything else propagates synchronously.
//!
//! # Examples
//!
//! ```rust,no_run
//! use app_model::core::{ModelError, user_friendly_error};
//!
//! let error = ModelError::IncompleteModel {
//!     reason: "no application artifact was set".to_string(),
//! };
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! ctx.display(); // Shows colored error with suggestions
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for model assembly and transport.
///
/// # Examples
///
/// ```rust
/// use app_model::core::ModelError;
///
/// fn describe(error: &ModelError) -> &'static str {
///     match error {
///         ModelError::MalformedArtifactDescriptor { .. } => "bad token",
///         ModelError::IncompleteModel { .. } => "missing root",
///         _ => "other",
///     }
/// }
///
/// let error = ModelError::MalformedArtifactDescriptor {
///     token: "org.acme:".to_string(),
///     reason: "artifact name is empty".to_string(),
/// };
/// assert_eq!(describe(&error), "bad token");
/// ```
#[derive(Error, Debug)]
pub enum ModelError {
    /// A colon-delimited artifact key token could not be parsed
    ///
    /// Raised by [`ArtifactKey::from_str`](crate::core::ArtifactKey) when the
    /// token has no segments, more than four segments, or an empty group or
    /// name. Inside descriptor merges it is recovered per descriptor.
    #[error("Malformed artifact descriptor '{token}': {reason}")]
    MalformedArtifactDescriptor {
        /// The offending token, exactly as supplied
        token: String,
        /// Why the token was rejected
        reason: String,
    },

    /// An accumulation call received a value lacking a required part
    #[error("Invalid argument for {argument}: {reason}")]
    InvalidArgument {
        /// Which input was rejected (e.g. "runtime dependency")
        argument: String,
        /// Why it was rejected
        reason: String,
    },

    /// The builder was finalized without the data a model requires
    #[error("Incomplete application model: {reason}")]
    IncompleteModel {
        /// What is missing
        reason: String,
    },

    /// A serialized model could not be decoded
    #[error("Invalid application model in {source_name}: {reason}")]
    ModelParseError {
        /// Where the encoded model came from (a path or "<string>")
        source_name: String,
        /// Specific reason for the failure
        reason: String,
    },

    /// A decoded model breaks an invariant the resolver is expected to honour
    #[error("Application model invariant violated: {reason}")]
    InvariantViolation {
        /// Description of the violation
        reason: String,
    },

    /// An assembly plan file is invalid
    #[error("Invalid assembly plan {file}: {reason}")]
    PlanError {
        /// Path to the plan file
        file: String,
        /// Specific reason for the failure
        reason: String,
    },

    /// Descriptor diagnostics were reported while running in strict mode
    #[error("{count} extension descriptor(s) were rejected")]
    StrictModeViolation {
        /// Number of rejected descriptors
        count: usize,
    },

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSerError(#[from] toml::ser::Error),

    /// Other error
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

impl Clone for ModelError {
    fn clone(&self) -> Self {
        match self {
            Self::MalformedArtifactDescriptor {
                token,
                reason,
            } => Self::MalformedArtifactDescriptor {
                token: token.clone(),
                reason: reason.clone(),
            },
            Self::InvalidArgument {
                argument,
                reason,
            } => Self::InvalidArgument {
                argument: argument.clone(),
                reason: reason.clone(),
            },
            Self::IncompleteModel {
                reason,
            } => Self::IncompleteModel {
                reason: reason.clone(),
            },
            Self::ModelParseError {
                source_name,
                reason,
            } => Self::ModelParseError {
                source_name: source_name.clone(),
                reason: reason.clone(),
            },
            Self::InvariantViolation {
                reason,
            } => Self::InvariantViolation {
                reason: reason.clone(),
            },
            Self::PlanError {
                file,
                reason,
            } => Self::PlanError {
                file: file.clone(),
                reason: reason.clone(),
            },
            Self::StrictModeViolation {
                count,
            } => Self::StrictModeViolation {
                count: *count,
            },
            // toml::ser::Error is not Clone
            Self::TomlSerError(e) => Self::Other {
                message: format!("TOML serialization error: {e}"),
            },
            Self::Other {
                message,
            } => Self::Other {
                message: message.clone(),
            },
        }
    }
}

/// Error context wrapper that provides user-friendly error information
///
/// `ErrorContext` wraps a [`ModelError`] and adds optional suggestions and
/// details. This is how the command-line tool presents errors.
///
/// When displayed, errors show:
/// 1. **Error**: the main message in red
/// 2. **Details**: additional context in yellow (optional)
/// 3. **Suggestion**: actionable steps in green (optional)
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: ModelError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: ModelError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Extension trait for converting [`ModelError`] to [`anyhow::Error`] with context
pub trait IntoAnyhowWithContext {
    /// Convert the error to an [`anyhow::Error`] carrying its usual suggestion
    /// and the given details
    fn into_anyhow_with_details(self, details: impl Into<String>) -> anyhow::Error;
}

impl IntoAnyhowWithContext for ModelError {
    fn into_anyhow_with_details(self, details: impl Into<String>) -> anyhow::Error {
        anyhow::Error::new(create_error_context(self).with_details(details))
    }
}

/// Convert any error to a user-friendly [`ErrorContext`]
///
/// Recognizes [`ModelError`] (anywhere in the chain), an already-built
/// [`ErrorContext`] and [`std::io::Error`]; anything else is
/// wrapped as [`ModelError::Other`] with the full context chain as message.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(ctx) = error.downcast_ref::<ErrorContext>() {
        return ErrorContext {
            error: ctx.error.clone(),
            suggestion: ctx.suggestion.clone(),
            details: ctx.details.clone(),
        };
    }

    for cause in error.chain() {
        if let Some(model_error) = cause.downcast_ref::<ModelError>() {
            let mut ctx = create_error_context(model_error.clone());
            // Keep the outermost context message when the typed error sits below it
            let outer = error.to_string();
            if outer != model_error.to_string() && ctx.details.is_none() {
                ctx.details = Some(outer);
            }
            return ctx;
        }
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        return match io_error.kind() {
            std::io::ErrorKind::NotFound => ErrorContext::new(ModelError::Other {
                message: format!("{error:#}"),
            })
            .with_suggestion("Check that the file exists and the path is correct"),
            std::io::ErrorKind::PermissionDenied => ErrorContext::new(ModelError::Other {
                message: format!("{error:#}"),
            })
            .with_suggestion("Check file ownership and permissions"),
            _ => ErrorContext::new(ModelError::Other {
                message: format!("{error:#}"),
            }),
        };
    }

    ErrorContext::new(ModelError::Other {
        message: format!("{error:#}"),
    })
}

fn create_error_context(error: ModelError) -> ErrorContext {
    match &error {
        ModelError::MalformedArtifactDescriptor {
            ..
        } => ErrorContext::new(error)
            .with_suggestion(
                "Use group:name[:classifier[:type]] with a non-empty group and name",
            ),
        ModelError::InvalidArgument {
            ..
        } => ErrorContext::new(error).with_details(
            "Dependencies handed to the model must be fully resolved, with group, name and version set",
        ),
        ModelError::IncompleteModel {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Set the application artifact before building the model"),
        ModelError::ModelParseError {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Regenerate the model with the same version of app-model that reads it")
            .with_details("Serialized models are only exchanged between identical tool versions"),
        ModelError::InvariantViolation {
            ..
        } => ErrorContext::new(error).with_details(
            "Every deployment dependency must also be listed among the full deployment dependencies",
        ),
        ModelError::PlanError {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Check the plan's artifact tokens and descriptor paths"),
        ModelError::StrictModeViolation {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Fix the reported descriptor tokens or run without --strict"),
        _ => ErrorContext::new(error),
    }
}
