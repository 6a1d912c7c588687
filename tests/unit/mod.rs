//! Unit test suite for app-model
//!
//! Exercises the public library API without the binary: model assembly from
//! builder calls and plans, and the handoff of a model between processes.
//!
//! ```bash
//! cargo test --test unit
//! ```

mod handoff;
mod plan_assembly;
