//! Check a serialized model on the consuming side.
//!
//! Decoding already enforces the format version and key syntax. On top of
//! that the command checks that every deployment dependency also appears in
//! the full deployment list, and optionally compares the fingerprint with the
//! one the producer reported.

use anyhow::{Result, bail};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use crate::core::ModelError;
use crate::model::AppModel;

/// Command to verify a model file.
#[derive(Args, Debug)]
pub struct VerifyCommand {
    /// Serialized model to read
    #[arg(value_name = "MODEL")]
    pub model: PathBuf,

    /// Fail unless the model has this fingerprint
    #[arg(long, value_name = "FINGERPRINT")]
    pub expected: Option<String>,
}

impl VerifyCommand {
    /// Execute the verify command.
    pub fn execute(self) -> Result<()> {
        let model = AppModel::load(&self.model)?;

        let missing = model.missing_full_deployment_deps();
        if !missing.is_empty() {
            for dep in &missing {
                eprintln!("{} {} is not in the full deployment list", "✗".red(), dep);
            }
            return Err(ModelError::InvariantViolation {
                reason: format!(
                    "{} deployment dependency(ies) missing from the full deployment list",
                    missing.len()
                ),
            }
            .into());
        }

        let fingerprint = model.fingerprint()?;
        if let Some(expected) = self.expected.as_deref().filter(|e| *e != fingerprint) {
            bail!("Fingerprint mismatch: expected {expected}, found {fingerprint}");
        }

        println!("{} Valid application model {}", "✓".green(), model.app_artifact());
        println!("{fingerprint}");
        Ok(())
    }
}
