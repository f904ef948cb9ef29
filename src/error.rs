//! Error type shared by every fallible operation in the crate.

use std::io;

/// Errors raised while constructing or updating a renderer.
///
/// A failed update never changes the renderer's state: values are validated
/// before they are committed.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The new position is past the configured maximum.
    #[error("progress value {value} exceeds maximum {maximum}")]
    OutOfRange {
        /// The rejected position.
        value: u64,
        /// The maximum the renderer was built with.
        maximum: u64,
    },

    /// The new position is lower than the current one.
    #[error("progress value {value} is below current position {current}")]
    Regression {
        /// The rejected position.
        value: u64,
        /// The position at the time of the call.
        current: u64,
    },

    /// A renderer needs at least one step.
    #[error("maximum must be at least 1")]
    InvalidMaximum,

    /// Writing to or flushing the output sink failed.
    #[error("failed to write progress line: {0}")]
    Io(#[from] io::Error),
}

/// Convenience alias for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
