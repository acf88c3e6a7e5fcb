//! Shared functionality for the seqgen command-line tool.
//!
//! This crate provides the configuration, validation, and orchestration layer
//! between the `seqgen` binary and the generation engine in `seqgen-core`: a
//! validated generation request, the per-file creation step, and the
//! sequential loop that produces the whole batch.

pub mod config;
pub mod error;
pub mod operations;
pub mod process;


pub use config::CliConfig;
pub use error::{Error, Result};
pub use process::{run_cli, run_generation, GenerationSummary};
