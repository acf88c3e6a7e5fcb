//! Streaming random-fill pipeline.

use std::io::Write;

use rand::RngCore;

use crate::config::FillSummary;
use crate::error::{Error, Result};
use crate::options::FillOptions;

/// Writes exactly `size` random bytes from `rng` into `writer`.
///
/// Output is produced in chunks of at most the configured chunk size, so peak
/// memory use stays bounded regardless of `size`. The chunk buffer is
/// allocated once and refilled from `rng` for every write. The writer is
/// flushed before returning.
///
/// # Parameters
///
/// * `writer` - Output destination implementing [`Write`]
/// * `rng` - Random byte source implementing [`RngCore`]
/// * `size` - Exact number of bytes to produce
/// * `options` - Fill configuration options [`FillOptions`]
///
/// # Returns
///
/// Returns a [`FillSummary`] with the byte and chunk counts, or an error if
/// the fill fails.
///
/// # Errors
///
/// This function will return an error if:
///
/// - The chunk buffer cannot be allocated
/// - The random generator fails to produce bytes
/// - A write or flush on the output fails
pub fn fill<W, R>(mut writer: W, rng: &mut R, size: u64, options: &FillOptions) -> Result<FillSummary>
where
    W: Write,
    R: RngCore + ?Sized,
{
    let capacity = options.chunk_capacity();
    let mut chunk = Vec::new();
    chunk
        .try_reserve_exact(capacity)
        .map_err(|_| Error::AllocationFailed { capacity })?;
    chunk.resize(capacity, 0);

    let mut remaining = size;
    let mut chunks_written = 0u64;

    while remaining > 0 {
        // Remaining bytes can exceed usize::MAX on 32-bit targets; a full
        // chunk is always safe there.
        let take = usize::try_from(remaining).map_or(capacity, |left| left.min(capacity));

        let buf = &mut chunk[..take];
        rng.try_fill_bytes(buf)?;
        writer.write_all(buf)?;

        remaining -= take as u64;
        chunks_written += 1;
    }

    writer.flush()?;
    Ok(FillSummary::new(size, chunks_written))
}
