//! Configuration types for the seqgen CLI.

use std::path::PathBuf;

/// A validated generation request.
///
/// Built once from command-line arguments before any file I/O starts and
/// never mutated afterwards.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Base name used verbatim in every generated filename.
    pub prefix: String,
    /// Extension appended after the index, without the leading dot.
    pub extension: String,
    /// Exact size of each generated file in bytes.
    pub size_bytes: u64,
    /// How many files to create.
    pub count: u64,
    /// Minimum digit count for the index segment; 0 disables padding.
    pub zero_pad: usize,
    /// Directory the files are created in.
    pub directory: PathBuf,
    /// Quiet level: 1 suppresses progress output, 2 also suppresses errors.
    pub quiet: u8,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            extension: String::new(),
            size_bytes: 0,
            count: 0,
            zero_pad: 0,
            directory: PathBuf::from("."),
            quiet: 0,
        }
    }
}
