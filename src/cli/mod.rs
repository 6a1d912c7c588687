//! Command-line interface for app-model.
//!
//! The tool stands in for the two ends of the model handoff: `assemble`
//! plays the build pipeline that produces a model, the other commands play
//! the process that consumes it.
//!
//! # Available Commands
//!
//! - `assemble` - Build a model from an assembly plan and write it out
//! - `inspect` - Summarize a serialized model
//! - `classify` - Show where an artifact key lands in each class loader
//! - `verify` - Decode a model, check its invariants and print its fingerprint
//!
//! # Command Usage Patterns
//!
//! ```bash
//! # Producer side
//! app-model assemble plan.toml -o target/app-model.toml --strict
//!
//! # Consumer side
//! app-model verify target/app-model.toml
//! app-model classify target/app-model.toml org.jboss.logging:jboss-logging
//! app-model inspect target/app-model.toml --format json
//! ```
//!
//! # Logging
//!
//! Diagnostics go to stderr through `tracing`. `--verbose` enables debug
//! output, `--quiet` limits it to errors; otherwise `RUST_LOG` applies, with
//! `info` as the fallback.

mod assemble;
mod classify;
mod inspect;
mod verify;


pub use inspect::OutputFormat;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Runtime settings derived from the global flags.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Filter directive for the log subscriber; `None` defers to `RUST_LOG`
    pub log_level: Option<String>,
}

impl CliConfig {
    /// Create a configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the global `tracing` subscriber writing to stderr.
    ///
    /// Later calls are no-ops, so tests may run commands repeatedly.
    pub fn init_logging(&self) {
        let filter = match &self.log_level {
            Some(level) => EnvFilter::new(level),
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

/// Top-level command-line interface.
#[derive(Parser, Debug)]
#[command(
    name = "app-model",
    about = "Assemble, inspect and verify application dependency models",
    version,
    long_about = "app-model builds the application dependency model consumed by class loader \
                  builders, and inspects serialized models on the consuming side."
)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a model from an assembly plan
    Assemble(assemble::AssembleCommand),

    /// Summarize a serialized model
    Inspect(inspect::InspectCommand),

    /// Show the placement of an artifact key in both class loading contexts
    Classify(classify::ClassifyCommand),

    /// Check a serialized model and print its fingerprint
    Verify(verify::VerifyCommand),
}

impl Cli {
    /// Initialize logging and run the selected command.
    pub fn execute(self) -> Result<()> {
        self.build_config().init_logging();

        match self.command {
            Commands::Assemble(cmd) => cmd.execute(),
            Commands::Inspect(cmd) => cmd.execute(),
            Commands::Classify(cmd) => cmd.execute(),
            Commands::Verify(cmd) => cmd.execute(),
        }
    }

    /// Map the global flags onto a [`CliConfig`].
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            Some("error".to_string())
        } else {
            None
        };

        CliConfig {
            log_level,
        }
    }
}
