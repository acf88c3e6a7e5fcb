//! Per-file creation and fill operations.

use std::fs::File;
use std::path::Path;

use rand::RngCore;

use seqgen_core::{fill, FillOptions, FillSummary};

use crate::error::{Error, Result};

/// Creates (or truncates) a single sequence file and fills it with random data.
///
/// The file handle lives only for the duration of this call: it is moved into
/// the fill pipeline and closed on return whether the fill succeeded or
/// failed.
///
/// # Parameters
///
/// * `path` - Full path of the file to create
/// * `size_bytes` - Exact number of random bytes to write
/// * `options` - Fill configuration (chunk size)
/// * `rng` - Random byte source, reused across chunks
///
/// # Errors
///
/// Returns an error if the file cannot be created, or if writing the random
/// data fails partway through. In the latter case the partially written file
/// is left on disk.
pub fn create_sequence_file<R>(
    path: &Path,
    size_bytes: u64,
    options: &FillOptions,
    rng: &mut R,
) -> Result<FillSummary>
where
    R: RngCore + ?Sized,
{
    let file = File::create(path).map_err(|source| Error::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;

    fill(file, rng, size_bytes, options).map_err(|source| Error::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}
