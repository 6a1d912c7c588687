//! Utilities shared by the file-handling parts of the crate.
//!
//! The model core never touches the filesystem; these helpers serve the
//! transport layer, the plan loader and the command-line tool.
//!
//! # Modules
//!
//! - [`fs`] - atomic writes and directory creation

pub mod fs;

pub use fs::{atomic_write, ensure_dir};
