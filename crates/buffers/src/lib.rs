//! Byte cursors for binary-codable.
//!
//! This crate provides the forward-only cursors that every container in
//! `binary-codable` is built on.
//!
//! # Overview
//!
//! - [`Reader`] - Reads from a borrowed byte slice, never moving backward
//! - [`Writer`] - Appends to an owned, auto-growing buffer
//! - [`StreamingReader`] - Accumulates chunks and hands out [`Reader`]s over
//!   the bytes not yet consumed
//!
//! # Example
//!
//! ```
//! use binary_codable_buffers::{Reader, Writer};
//!
//! let mut writer = Writer::new();
//! writer.u8(0x01);
//! writer.buf(b"hello");
//! let data = writer.flush();
//!
//! let mut reader = Reader::new(&data);
//! assert_eq!(reader.u8().unwrap(), 0x01);
//! assert_eq!(reader.advance(5).unwrap(), b"hello");
//! assert!(reader.is_empty());
//! ```

mod reader;
mod streaming_reader;
mod writer;

pub use reader::Reader;
pub use streaming_reader::StreamingReader;
pub use writer::Writer;

use thiserror::Error;

/// Error type for cursor operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Attempted to move the cursor past the end of the buffer.
    #[error("cursor at {position} cannot advance {requested} bytes in a buffer of {len}")]
    OutOfBounds {
        position: usize,
        requested: usize,
        len: usize,
    },
}
