//! Configuration builder for fill operations.

use std::num::NonZeroUsize;

/// Default chunk size for bounded writes (64KB).
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Configuration builder for fill operations.
#[derive(Debug, Clone)]
pub struct FillOptions {
    chunk_size: NonZeroUsize,
}

impl Default for FillOptions {
    fn default() -> Self {
        Self {
            chunk_size: NonZeroUsize::new(DEFAULT_CHUNK_SIZE).unwrap(),
        }
    }
}

impl FillOptions {
    /// Sets the chunk size for bounded writes.
    ///
    /// Each write to the output carries at most this many bytes, which caps
    /// peak memory use regardless of the requested fill size. The default
    /// (64KB) works well for most cases.
    #[must_use]
    pub fn with_chunk_size(mut self, size: NonZeroUsize) -> Self {
        self.chunk_size = size;
        self
    }

    pub(crate) fn chunk_capacity(&self) -> usize {
        self.chunk_size.get()
    }
}
