//! # seqgen-core
//!
//! Chunked random-data fill pipeline for sequence files.
//!
//! This crate provides the engine behind the `seqgen` command-line tool: a
//! filename renderer for numbered file sequences and a streaming fill routine
//! that writes an exact number of random bytes to any output in bounded-size
//! chunks, keeping peak memory use independent of the requested size.

pub mod config;
pub mod error;
pub mod naming;
pub mod options;
pub mod pipeline;

pub use config::FillSummary;
pub use error::{Error, Result};
pub use naming::SequenceNamer;
pub use options::FillOptions;
pub use pipeline::fill;
