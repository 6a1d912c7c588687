//! app-model CLI entry point
//!
//! Parses arguments, runs the selected command and renders any error with
//! its details and suggestion before exiting with status 1.
//!
//! - `assemble` - Build a model from an assembly plan
//! - `inspect` - Summarize a serialized model
//! - `classify` - Show the placement of an artifact key
//! - `verify` - Check a serialized model and print its fingerprint

use anyhow::Result;
use app_model::cli;
use app_model::core::error::user_friendly_error;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute() {
        Ok(()) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
