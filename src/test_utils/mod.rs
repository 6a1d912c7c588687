//! Test utilities for app-model
//!
//! Helpers shared by unit tests and the integration suites: one-time logging
//! initialization and fixtures for artifacts, descriptors and populated
//! builders.
//!
//! # Example
//!
//! ```rust,no_run
//! use app_model::test_utils::{fixtures, init_test_logging};
//!
//! init_test_logging(None);
//! let model = fixtures::sample_builder().build().unwrap();
//! assert_eq!(model.app_artifact().name(), "app");
//! ```

pub mod fixtures;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has an effect. Uses `level` when given, otherwise
/// `RUST_LOG` when it is set; with neither, tests run without logging.
///
/// ```bash
/// RUST_LOG=app_model=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true)
            .try_init();
    });
}
