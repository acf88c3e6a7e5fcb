//! Error types and result handling for the fill pipeline.

use std::fmt;

/// Result alias using the crate-level [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type covering all failure modes of the fill pipeline.
#[derive(Debug)]
pub enum Error {
    /// I/O failure while writing output.
    Io(std::io::Error),

    /// The random generator failed to produce bytes.
    Rng(rand::Error),

    /// Requested chunk buffer could not be allocated.
    AllocationFailed {
        /// Size in bytes of the buffer that failed to allocate
        capacity: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "I/O error: {err}"),
            Error::Rng(err) => write!(f, "random generator error: {err}"),
            Error::AllocationFailed { capacity } => {
                write!(f, "unable to allocate chunk buffer of {capacity} bytes")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Rng(err) => Some(err),
            Error::AllocationFailed { .. } => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<rand::Error> for Error {
    fn from(err: rand::Error) -> Self {
        Error::Rng(err)
    }
}
