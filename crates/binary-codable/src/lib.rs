//! Compact, schema-less binary encoding.
//!
//! Values are written back-to-back with no type tags. Every encode and decode
//! goes through a container: a scoped view over a forward-only cursor.
//! Decoding containers may be bounded, and variable-length payloads are read
//! through nested containers bounded to their length prefix, so a corrupt
//! prefix can never make a decoder read past the region it declared.
//!
//! # Wire format
//!
//! | Type | Encoding |
//! |---|---|
//! | integers, floats, `bool` | fixed width, little-endian by default |
//! | `Option<T>` | `0` (absent) or `1` followed by `T` |
//! | `Vec<T>`, `[T]` | 8-byte signed count, then each element |
//! | `String`, `str` | 8-byte signed byte length, then UTF-8 bytes |
//! | `Uuid`, `[u8; N]` | `N` raw bytes, no prefix |
//!
//! # Example
//!
//! ```
//! use binary_codable::{
//!     from_bytes, to_bytes, BinaryDecodable, BinaryEncodable, DecodingContainer,
//!     DecodingError, EncodingContainer, EncodingError,
//! };
//!
//! #[derive(Debug, PartialEq)]
//! struct Track {
//!     title: String,
//!     plays: u32,
//!     rating: Option<u8>,
//! }
//!
//! impl BinaryEncodable for Track {
//!     fn encode(&self, container: &mut EncodingContainer<'_>) -> Result<(), EncodingError> {
//!         container.encode(&self.title)?;
//!         container.encode(&self.plays)?;
//!         container.encode(&self.rating)
//!     }
//! }
//!
//! impl BinaryDecodable for Track {
//!     fn decode(container: &mut DecodingContainer<'_, '_>) -> Result<Self, DecodingError> {
//!         Ok(Self {
//!             title: container.decode()?,
//!             plays: container.decode()?,
//!             rating: container.decode()?,
//!         })
//!     }
//! }
//!
//! let track = Track { title: "Intro".into(), plays: 12, rating: None };
//! let bytes = to_bytes(&track).unwrap();
//! assert_eq!(bytes.len(), 8 + 5 + 4 + 1);
//! assert_eq!(from_bytes::<Track>(&bytes).unwrap(), track);
//! ```

mod codable;
mod config;
mod decoder;
mod encoder;
mod error;
mod primitive;
mod stream;

pub use codable::{BinaryCodable, BinaryDecodable, BinaryEncodable};
pub use config::{ByteOrder, Config};
pub use decoder::{BinaryDecoder, ContainerState, DecodingContainer};
pub use encoder::{BinaryEncoder, EncodingContainer};
pub use error::{DecodingError, EncodingError};
pub use primitive::FixedWidth;
pub use stream::StreamDecoder;

use std::collections::HashMap;

/// Key under which contextual values are stored in [`UserInfo`].
pub type UserInfoKey = String;

/// Contextual values an encoder or decoder makes available to every
/// container, e.g. a format revision a composite type should honor.
pub type UserInfo = HashMap<UserInfoKey, serde_json::Value>;

/// Encodes `value` with the default [`Config`].
pub fn to_bytes<T: BinaryEncodable + ?Sized>(value: &T) -> Result<Vec<u8>, EncodingError> {
    to_bytes_with(value, Config::default())
}

/// Encodes `value` with `config`.
pub fn to_bytes_with<T: BinaryEncodable + ?Sized>(
    value: &T,
    config: Config,
) -> Result<Vec<u8>, EncodingError> {
    let mut encoder = BinaryEncoder::with_config(config);
    encoder.encode(value)?;
    Ok(encoder.finish())
}

/// Decodes a `T` from the start of `bytes` with the default [`Config`].
///
/// Trailing bytes are ignored; use [`BinaryDecoder::is_at_end`] to reject
/// them.
pub fn from_bytes<T: BinaryDecodable>(bytes: &[u8]) -> Result<T, DecodingError> {
    from_bytes_with(bytes, Config::default())
}

/// Decodes a `T` from the start of `bytes` with `config`, ignoring trailing
/// bytes like [`from_bytes`].
pub fn from_bytes_with<T: BinaryDecodable>(
    bytes: &[u8],
    config: Config,
) -> Result<T, DecodingError> {
    BinaryDecoder::with_config(bytes, config).decode()
}
