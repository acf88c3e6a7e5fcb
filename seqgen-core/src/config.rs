//! Shared statistics types for fill operations.

/// Statistical summary of a completed fill operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillSummary {
    /// Total number of random bytes written to the output.
    pub bytes_written: u64,

    /// Number of bounded-size writes it took to produce them.
    pub chunks_written: u64,
}

impl FillSummary {
    /// Creates a new fill summary with the specified counts.
    ///
    /// This is used internally by the fill pipeline to report statistics
    /// after a fill completes.
    pub(crate) const fn new(bytes_written: u64, chunks_written: u64) -> Self {
        Self {
            bytes_written,
            chunks_written,
        }
    }

    /// Returns `true` if the fill produced no output (a zero-byte request).
    pub fn is_empty(&self) -> bool {
        self.bytes_written == 0
    }
}
