//! Incremental decoding of values as their bytes arrive.

use binary_codable_buffers::StreamingReader;
use tracing::{debug, trace};

use crate::{BinaryDecodable, Config, DecodingContainer, DecodingError, UserInfo, UserInfoKey};

/// Decodes a stream of back-to-back values from chunks pushed over time.
///
/// A value is only consumed once it decodes completely. Running out of bytes
/// mid-value is not an error here: the partial bytes stay buffered and the
/// next [`decode`](Self::decode) after more data arrives starts over from the
/// beginning of that value. Any other decoding error is fatal for the stream.
///
/// An incomplete value may hold at most [`Config::max_buffered`] bytes. Past
/// that, [`decode`](Self::decode) fails with [`DecodingError::InvalidLength`]
/// instead of waiting for more data.
///
/// # Example
///
/// ```
/// use binary_codable::{to_bytes, StreamDecoder};
///
/// let bytes = to_bytes("hello").unwrap();
/// let mut stream = StreamDecoder::new();
///
/// stream.push(&bytes[..6]);
/// assert_eq!(stream.decode::<String>().unwrap(), None);
///
/// stream.push(&bytes[6..]);
/// assert_eq!(stream.decode::<String>().unwrap().as_deref(), Some("hello"));
/// assert_eq!(stream.buffered(), 0);
/// ```
#[derive(Debug, Default)]
pub struct StreamDecoder {
    buffer: StreamingReader,
    config: Config,
    user_info: UserInfo,
}

impl StreamDecoder {
    /// Creates an empty stream decoder with the default [`Config`].
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an empty stream decoder using `config` for every value.
    pub fn with_config(config: Config) -> Self {
        Self {
            buffer: StreamingReader::new(),
            config,
            user_info: UserInfo::new(),
        }
    }

    /// Makes `value` visible to every value this stream decodes.
    pub fn set_user_info(&mut self, key: impl Into<UserInfoKey>, value: serde_json::Value) {
        self.user_info.insert(key.into(), value);
    }

    /// Appends a chunk of received bytes.
    pub fn push(&mut self, data: &[u8]) {
        self.buffer.push(data);
    }

    /// Returns the number of bytes received but not yet decoded.
    pub fn buffered(&self) -> usize {
        self.buffer.size()
    }

    /// Decodes the next value, or returns `Ok(None)` if it is not complete yet.
    pub fn decode<T: BinaryDecodable>(&mut self) -> Result<Option<T>, DecodingError> {
        let (result, consumed) = {
            let mut reader = self.buffer.reader();
            let result =
                DecodingContainer::new(&mut reader, None, &self.config, &self.user_info).decode();
            (result, reader.position())
        };
        match result {
            Ok(value) => {
                self.buffer.consume(consumed);
                trace!(consumed, buffered = self.buffer.size(), "stream value decoded");
                Ok(Some(value))
            }
            Err(DecodingError::PrematureEndOfData { .. })
                if self.buffer.size() > self.config.max_buffered =>
            {
                let buffered = self.buffer.size();
                debug!(
                    buffered,
                    limit = self.config.max_buffered,
                    "incomplete value exceeds the stream buffer limit"
                );
                Err(DecodingError::InvalidLength {
                    length: buffered as i128,
                    reason: "incomplete value exceeds the stream buffer limit",
                })
            }
            Err(DecodingError::PrematureEndOfData { needed, .. }) => {
                trace!(needed, buffered = self.buffer.size(), "waiting for more data");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Decodes every complete value currently buffered.
    pub fn decode_all<T: BinaryDecodable>(&mut self) -> Result<Vec<T>, DecodingError> {
        let mut values = Vec::new();
        loop {
            let before = self.buffered();
            match self.decode()? {
                Some(value) => values.push(value),
                None => break,
            }
            // Zero-width values would otherwise repeat forever.
            if self.buffered() == before {
                break;
            }
        }
        Ok(values)
    }
}
