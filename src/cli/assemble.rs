//! Build a model from an assembly plan.
//!
//! # Examples
//!
//! ```bash
//! # Print the encoded model
//! app-model assemble plan.toml
//!
//! # Write it to a file, failing if any extension descriptor was rejected
//! app-model assemble plan.toml -o target/app-model.toml --strict
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use crate::config::AssemblyPlan;
use crate::core::{IntoAnyhowWithContext, ModelError};
use crate::model::Diagnostics;

/// Command to assemble an application model.
#[derive(Args, Debug)]
pub struct AssembleCommand {
    /// Assembly plan to read
    #[arg(value_name = "PLAN")]
    pub plan: PathBuf,

    /// Write the model here instead of stdout
    #[arg(short, long, value_name = "OUT")]
    pub output: Option<PathBuf>,

    /// Fail if any extension descriptor is rejected
    #[arg(long)]
    pub strict: bool,
}

impl AssembleCommand {
    /// Execute the assemble command.
    ///
    /// Rejected descriptors are printed as warnings. In strict mode they fail
    /// the command before anything is written.
    pub fn execute(self) -> Result<()> {
        let plan = AssemblyPlan::load(&self.plan)?;
        let mut diagnostics = Diagnostics::new();
        let model = plan.into_builder(&mut diagnostics)?.build()?;

        for diagnostic in &diagnostics {
            eprintln!("{} {}", "⚠".yellow(), diagnostic);
        }
        if self.strict && !diagnostics.is_empty() {
            let rejected: Vec<&str> =
                diagnostics.iter().map(|d| d.extension.as_str()).collect();
            return Err(ModelError::StrictModeViolation {
                count: diagnostics.len(),
            }
            .into_anyhow_with_details(format!("Rejected extensions: {}", rejected.join(", "))));
        }

        match &self.output {
            Some(path) => {
                model.save(path)?;
                println!("{} Wrote {} to {}", "✓".green(), model.app_artifact(), path.display());
            }
            None => print!("{}", model.to_toml_string()?),
        }

        Ok(())
    }
}
