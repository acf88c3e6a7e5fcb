//! Error types for the seqgen CLI.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Specialized `Result` type for seqgen CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for seqgen CLI operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A numeric command-line parameter failed to parse
    #[error("{parameter} must be an integer")]
    InvalidArgument {
        /// Name of the offending parameter
        parameter: &'static str,
    },

    /// Failed to create an output file
    #[error("{}: {source}", path.display())]
    CreateOutput {
        /// Path to the output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed to fill an output file with random data
    #[error("{}: {source}", path.display())]
    WriteOutput {
        /// Path to the output file
        path: PathBuf,
        /// Underlying fill pipeline error
        #[source]
        source: seqgen_core::Error,
    },
}
