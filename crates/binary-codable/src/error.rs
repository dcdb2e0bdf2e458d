//! Encoding and decoding error types.

use binary_codable_buffers::BufferError;
use thiserror::Error;

/// Error type for decoding operations.
///
/// Any decoding error means the input is not a valid encoding of the
/// requested type; there is no partial result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodingError {
    /// More bytes were requested than remain in the container's bound or in
    /// the underlying buffer.
    #[error("premature end of data: needed {needed} bytes, {remaining} remaining")]
    PrematureEndOfData { needed: usize, remaining: usize },
    /// A nested container would exceed its parent's bound, a length prefix
    /// is negative or not addressable, a count of zero-width elements is
    /// implausible, or an incomplete stream value outgrew its buffer limit.
    #[error("invalid length {length}: {reason}")]
    InvalidLength { length: i128, reason: &'static str },
    /// Text payload is not valid UTF-8.
    #[error("incompatible string encoding: {0}")]
    IncompatibleEncoding(#[from] std::str::Utf8Error),
    /// The cursor refused to move; indicates a bounds bookkeeping bug.
    #[error(transparent)]
    OutOfBounds(#[from] BufferError),
    /// Rejected by a user-defined type.
    #[error("{0}")]
    Custom(String),
}

impl DecodingError {
    /// Creates a [`DecodingError::Custom`] from any displayable message.
    pub fn custom(msg: impl std::fmt::Display) -> Self {
        Self::Custom(msg.to_string())
    }
}

/// Error type for encoding operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// A length or count does not fit in the 8-byte signed prefix.
    #[error("length {0} does not fit in a length prefix")]
    InvalidLength(usize),
    /// A value cannot be represented in the encoding a user-defined type
    /// requires, e.g. non-ASCII text for an ASCII-only field. The built-in
    /// impls never return it, since every `str` is valid UTF-8.
    #[error("incompatible string encoding: {0}")]
    IncompatibleEncoding(String),
    /// Rejected by a user-defined type.
    #[error("{0}")]
    Custom(String),
}

impl EncodingError {
    /// Creates an [`EncodingError::Custom`] from any displayable message.
    pub fn custom(msg: impl std::fmt::Display) -> Self {
        Self::Custom(msg.to_string())
    }
}
