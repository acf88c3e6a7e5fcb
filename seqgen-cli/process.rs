//! Generation loop and CLI orchestration.

use rand::rngs::OsRng;
use rand::RngCore;

use seqgen_core::{FillOptions, SequenceNamer};

use crate::config::CliConfig;
use crate::error::Result;
use crate::operations::create_sequence_file;

/// Outcome of a completed generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Number of files created.
    pub files_created: u64,
    /// Total random bytes written across all files.
    pub bytes_written: u64,
}

/// Runs the generation loop described by `config`, drawing random data from
/// `rng`.
///
/// Files are created strictly in ascending index order, one at a time. A
/// progress line is printed to stdout before each file is written and a
/// summary line after the last one, unless `config.quiet` suppresses them. A
/// count of 0 is not an error; the loop simply produces nothing.
///
/// # Errors
///
/// Returns an error as soon as a file cannot be created or filled. Files
/// created before the failure are left in place; there is no rollback.
pub fn run_generation<R>(config: &CliConfig, rng: &mut R) -> Result<GenerationSummary>
where
    R: RngCore + ?Sized,
{
    let namer = SequenceNamer::new(&config.prefix, &config.extension).with_width(config.zero_pad);
    let options = FillOptions::default();
    let mut bytes_written = 0u64;

    for index in 1..=config.count {
        let filename = namer.render(index);

        if config.quiet == 0 {
            println!(
                "Creating file: {filename} ({} bytes) with random data",
                config.size_bytes
            );
        }

        let path = config.directory.join(&filename);
        let summary = create_sequence_file(&path, config.size_bytes, &options, rng)?;
        bytes_written += summary.bytes_written;
    }

    if config.quiet == 0 {
        println!(
            "Done! Created {} file(s) with prefix '{}', extension '{}', and size {} bytes each.",
            config.count, config.prefix, config.extension, config.size_bytes
        );
    }

    Ok(GenerationSummary {
        files_created: config.count,
        bytes_written,
    })
}

/// Runs a full CLI invocation against the operating-system CSPRNG.
///
/// The generator handle is acquired once and reused for every chunk of every
/// file.
///
/// # Errors
///
/// Returns an error if any file in the sequence cannot be created or filled.
pub fn run_cli(config: &CliConfig) -> Result<GenerationSummary> {
    let mut rng = OsRng;
    run_generation(config, &mut rng)
}
