//! Summarize a serialized model.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use crate::core::ArtifactKey;
use crate::model::AppModel;

/// Output format for `inspect`.
#[derive(Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON for scripts
    Json,
}

/// Command to summarize a model file.
#[derive(Args, Debug)]
pub struct InspectCommand {
    /// Serialized model to read
    #[arg(value_name = "MODEL")]
    pub model: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct Counts {
    runtime: usize,
    deployment: usize,
    full_deployment: usize,
}

#[derive(Serialize)]
struct InspectReport<'a> {
    app_artifact: String,
    fingerprint: String,
    dependencies: Counts,
    parent_first_artifacts: &'a BTreeSet<ArtifactKey>,
    runner_parent_first_artifacts: &'a BTreeSet<ArtifactKey>,
    lesser_priority_artifacts: &'a BTreeSet<ArtifactKey>,
    local_project_artifacts: &'a BTreeSet<ArtifactKey>,
    platform_properties: &'a BTreeMap<String, String>,
}

impl<'a> InspectReport<'a> {
    fn new(model: &'a AppModel) -> Result<Self> {
        Ok(Self {
            app_artifact: model.app_artifact().to_string(),
            fingerprint: model.fingerprint()?,
            dependencies: Counts {
                runtime: model.runtime_deps().len(),
                deployment: model.deployment_deps().len(),
                full_deployment: model.full_deployment_deps().len(),
            },
            parent_first_artifacts: model.parent_first_artifacts(),
            runner_parent_first_artifacts: model.runner_parent_first_artifacts(),
            lesser_priority_artifacts: model.lesser_priority_artifacts(),
            local_project_artifacts: model.local_project_artifacts(),
            platform_properties: model.platform_properties(),
        })
    }

    fn print_text(&self) {
        println!("{}", self.app_artifact.bold());
        println!("  Fingerprint: {}", self.fingerprint);
        println!("  Runtime dependencies: {}", self.dependencies.runtime);
        println!("  Deployment dependencies: {}", self.dependencies.deployment);
        println!("  Full deployment dependencies: {}", self.dependencies.full_deployment);

        print_set("Parent-first artifacts", self.parent_first_artifacts);
        print_set("Runner parent-first artifacts", self.runner_parent_first_artifacts);
        print_set("Lesser-priority artifacts", self.lesser_priority_artifacts);
        print_set("Local project artifacts", self.local_project_artifacts);

        if !self.platform_properties.is_empty() {
            println!("  Platform properties ({}):", self.platform_properties.len());
            for (key, value) in self.platform_properties {
                println!("    {key} = {value}");
            }
        }
    }
}

fn print_set(title: &str, keys: &BTreeSet<ArtifactKey>) {
    if keys.is_empty() {
        return;
    }
    println!("  {title} ({}):", keys.len());
    for key in keys {
        println!("    {key}");
    }
}

impl InspectCommand {
    /// Execute the inspect command.
    pub fn execute(self) -> Result<()> {
        let model = AppModel::load(&self.model)?;
        let report = InspectReport::new(&model)?;

        match self.format {
            OutputFormat::Text => report.print_text(),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        }
        Ok(())
    }
}
