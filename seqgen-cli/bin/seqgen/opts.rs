//! Command line argument parsing for the seqgen utility.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;

use seqgen_cli::{CliConfig, Error};

/// Sequence file generator
///
/// Creates a numbered sequence of files of an exact size, each filled with
/// cryptographically random data.
#[derive(Parser, Debug)]
#[command(
    name = "seqgen",
    version = "0.1.0",
    about = "Create sequences of random-filled files",
    long_about = "seqgen creates <COUNT> files named <PREFIX>_<index>.<EXTENSION>, each \
                  containing exactly <SIZE_IN_BYTES> bytes of random data. Indices start \
                  at 1 and can be zero-padded to a fixed width."
)]
pub struct SeqgenOpts {
    /// Base name for the files (e.g. "file", "test")
    #[arg(value_name = "PREFIX")]
    pub prefix: String,

    /// Extension for the files, without the leading dot (e.g. "txt")
    #[arg(value_name = "EXTENSION")]
    pub extension: String,

    /// Exact size for each file in bytes
    #[arg(value_name = "SIZE_IN_BYTES")]
    pub size: String,

    /// How many files to create
    #[arg(value_name = "COUNT")]
    pub count: String,

    /// Number of digits for zero-padding the index; 0 disables padding
    #[arg(value_name = "ZERO_PAD")]
    pub zero_pad: Option<String>,

    /// Create the files in DIR instead of the current directory
    #[arg(short = 'C', long = "directory", value_name = "DIR", default_value = ".")]
    pub directory: PathBuf,

    /// Suppress progress output. Use twice to suppress error messages too.
    #[arg(short = 'q', long = "quiet", action = clap::ArgAction::Count)]
    pub quiet: u8,
}

impl SeqgenOpts {
    /// Build the validated CLI configuration from the parsed options.
    ///
    /// All numeric parameters are validated here, before any file I/O starts.
    pub fn config(&self) -> Result<CliConfig, Error> {
        Ok(CliConfig {
            prefix: self.prefix.clone(),
            extension: self.extension.clone(),
            size_bytes: parse_integer(&self.size, "size_in_bytes")?,
            count: parse_integer(&self.count, "count")?,
            zero_pad: match self.zero_pad.as_deref() {
                Some(raw) => parse_integer(raw, "zero_pad")?,
                None => 0,
            },
            directory: self.directory.clone(),
            quiet: self.quiet,
        })
    }
}

/// Parses a non-negative integer parameter, naming it in the error.
fn parse_integer<T>(raw: &str, parameter: &'static str) -> Result<T, Error>
where
    T: FromStr,
{
    raw.trim()
        .parse()
        .map_err(|_| Error::InvalidArgument { parameter })
}
