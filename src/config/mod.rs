//! Inputs of the command-line tool.
//!
//! The model core takes already-resolved data through [`Builder`](crate::model::Builder)
//! calls. The tool gets that data from files instead:
//!
//! 1. **Assembly plans** (`plan.toml`) - one build invocation: root artifact,
//!    dependency lists, platform properties and extension entries
//! 2. **Extension descriptors** (`quarkus-extension.properties`) - the
//!    classification lists of one extension, referenced from a plan
//!
//! # Modules
//!
//! - `plan` - [`AssemblyPlan`] loading and replay into a builder
//! - `properties` - the `.properties` reader used for descriptors
//!
//! # Example
//!
//! ```rust,no_run
//! use app_model::config::AssemblyPlan;
//! use app_model::model::Diagnostics;
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! let plan = AssemblyPlan::load(Path::new("plan.toml"))?;
//! let mut diagnostics = Diagnostics::new();
//! let model = plan.into_builder(&mut diagnostics)?.build()?;
//! println!("{model}");
//! # Ok(())
//! # }
//! ```

mod plan;
mod properties;

pub use plan::{AssemblyPlan, PlanDependency, PlanExtension};
pub use properties::{load_properties, parse_properties};
