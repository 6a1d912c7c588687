//! Integration test suite for app-model
//!
//! End-to-end tests that drive the `app-model` binary the way a build and a
//! consuming process would: assemble a model from a plan, then verify,
//! classify and inspect the written file.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **assemble**: Plan loading, descriptor diagnostics and strict mode
//! - **classify**: Placement output for both class loading contexts
//! - **inspect**: Text and JSON summaries
//! - **verify**: Invariant checks, fingerprints and decode failures

// Shared test utilities (from parent tests/ directory)
#[path = "../common/mod.rs"]
mod common;

mod assemble;
mod classify;
mod inspect;
mod verify;
