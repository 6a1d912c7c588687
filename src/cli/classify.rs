//! Show how a model classifies one artifact key.
//!
//! ```bash
//! $ app-model classify target/app-model.toml org.jboss.logging:jboss-logging
//! org.jboss.logging:jboss-logging
//!   augmentation: parent-first
//!   runner: isolated
//!   local project: no
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use crate::core::ArtifactKey;
use crate::model::{AppModel, ClassLoadingContext, Placement};

/// Command to classify an artifact key against a model.
#[derive(Args, Debug)]
pub struct ClassifyCommand {
    /// Serialized model to read
    #[arg(value_name = "MODEL")]
    pub model: PathBuf,

    /// Artifact key, `group:name[:classifier[:type]]`
    #[arg(value_name = "KEY")]
    pub key: String,
}

impl ClassifyCommand {
    /// Execute the classify command.
    pub fn execute(self) -> Result<()> {
        let key: ArtifactKey = self.key.parse()?;
        let model = AppModel::load(&self.model)?;

        println!("{}", key.to_string().bold());
        for context in ClassLoadingContext::ALL {
            let placement = model.placement(&key, context);
            let rendered = match placement {
                Placement::ParentFirst => placement.to_string().cyan(),
                Placement::LesserPriority => placement.to_string().yellow(),
                Placement::Isolated => placement.to_string().normal(),
            };
            println!("  {context}: {rendered}");
        }
        println!("  local project: {}", if model.is_local_project(&key) { "yes" } else { "no" });

        Ok(())
    }
}
