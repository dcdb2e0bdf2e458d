//! Decoding side: the top-level [`BinaryDecoder`] and the bounded
//! [`DecodingContainer`] every decode goes through.

use binary_codable_buffers::Reader;
use tracing::{debug, trace};

use crate::{BinaryDecodable, Config, DecodingError, FixedWidth, UserInfo, UserInfoKey};

/// Logical state of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerState {
    /// Bytes remain within the bound.
    Open,
    /// The bound is fully consumed; only zero-length reads succeed.
    Exhausted,
    /// No bound; reads proceed until the end of the buffer.
    Unbounded,
}

/// Decodes values from a borrowed byte slice.
///
/// # Example
///
/// ```
/// use binary_codable::BinaryDecoder;
///
/// let data = [2, 0, 0, 0, 0, 0, 0, 0, b'h', b'i', 0xff];
/// let mut decoder = BinaryDecoder::new(&data);
/// let text: String = decoder.decode().unwrap();
/// assert_eq!(text, "hi");
/// assert_eq!(decoder.remaining(), 1);
/// ```
pub struct BinaryDecoder<'de> {
    reader: Reader<'de>,
    config: Config,
    user_info: UserInfo,
}

impl<'de> BinaryDecoder<'de> {
    /// Creates a decoder with the default [`Config`].
    pub fn new(data: &'de [u8]) -> Self {
        Self::with_config(data, Config::default())
    }

    /// Creates a decoder using `config` for every container.
    pub fn with_config(data: &'de [u8], config: Config) -> Self {
        Self {
            reader: Reader::new(data),
            config,
            user_info: UserInfo::new(),
        }
    }

    /// Returns the decoder's config.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Makes `value` visible to every container this decoder hands out.
    pub fn set_user_info(&mut self, key: impl Into<UserInfoKey>, value: serde_json::Value) {
        self.user_info.insert(key.into(), value);
    }

    /// Returns the user info set so far.
    pub fn user_info(&self) -> &UserInfo {
        &self.user_info
    }

    /// Returns a container rooted at the current position.
    ///
    /// `max_length` is taken as given: it is not checked against the bytes
    /// left in the buffer, so reading past the end fails with
    /// [`DecodingError::PrematureEndOfData`].
    pub fn container(&mut self, max_length: Option<usize>) -> DecodingContainer<'_, 'de> {
        DecodingContainer::new(&mut self.reader, max_length, &self.config, &self.user_info)
    }

    /// Decodes one `T` from the current position.
    pub fn decode<T: BinaryDecodable>(&mut self) -> Result<T, DecodingError> {
        self.container(None).decode()
    }

    /// Returns the number of bytes decoded so far.
    pub fn position(&self) -> usize {
        self.reader.position()
    }

    /// Returns the number of bytes not yet decoded.
    pub fn remaining(&self) -> usize {
        self.reader.size()
    }

    /// Returns `true` once every byte has been decoded.
    pub fn is_at_end(&self) -> bool {
        self.reader.is_empty()
    }
}

/// A scoped, optionally bounded view over a decoder's cursor.
///
/// A container never reads past `start + bound`. Nested containers reborrow
/// the same cursor, so only the innermost one can advance it.
pub struct DecodingContainer<'c, 'de> {
    reader: &'c mut Reader<'de>,
    start: usize,
    bound: Option<usize>,
    config: &'c Config,
    user_info: &'c UserInfo,
}

impl<'c, 'de> DecodingContainer<'c, 'de> {
    pub(crate) fn new(
        reader: &'c mut Reader<'de>,
        bound: Option<usize>,
        config: &'c Config,
        user_info: &'c UserInfo,
    ) -> Self {
        let start = reader.position();
        Self {
            reader,
            start,
            bound,
            config,
            user_info,
        }
    }

    /// Returns the owning decoder's config.
    pub fn config(&self) -> &Config {
        self.config
    }

    /// Returns the owning decoder's user info.
    pub fn user_info(&self) -> &UserInfo {
        self.user_info
    }

    /// Absolute cursor position in the decoder's buffer.
    pub fn position(&self) -> usize {
        self.reader.position()
    }

    /// Bytes this container may still read, or `None` when unbounded.
    pub fn remaining(&self) -> Option<usize> {
        let consumed = self.reader.position() - self.start;
        self.bound.map(|bound| bound.saturating_sub(consumed))
    }

    /// Returns the container's state, derived from its remaining bound.
    pub fn state(&self) -> ContainerState {
        match self.remaining() {
            None => ContainerState::Unbounded,
            Some(0) => ContainerState::Exhausted,
            Some(_) => ContainerState::Open,
        }
    }

    /// Returns `true` when no further byte can be read, either because the
    /// bound is consumed or the buffer is.
    pub fn is_at_end(&self) -> bool {
        self.available() == 0
    }

    fn available(&self) -> usize {
        match self.remaining() {
            Some(remaining) => remaining.min(self.reader.size()),
            None => self.reader.size(),
        }
    }

    fn take(&mut self, n: usize) -> Result<&'de [u8], DecodingError> {
        let available = self.available();
        if n > available {
            debug!(
                position = self.reader.position(),
                needed = n,
                remaining = available,
                "premature end of data"
            );
            return Err(DecodingError::PrematureEndOfData {
                needed: n,
                remaining: available,
            });
        }
        Ok(self.reader.advance(n)?)
    }

    /// Reads a fixed-width primitive in the configured byte order.
    pub fn decode_primitive<T: FixedWidth>(&mut self) -> Result<T, DecodingError> {
        let bytes = self.take(T::WIDTH)?;
        Ok(T::read_from(bytes, self.config.byte_order))
    }

    /// Reads exactly `count` raw bytes.
    pub fn decode_raw_bytes(&mut self, count: usize) -> Result<&'de [u8], DecodingError> {
        self.take(count)
    }

    /// Reads every byte left in this container's bound, or to the end of the
    /// buffer when unbounded.
    pub fn decode_remainder(&mut self) -> Result<&'de [u8], DecodingError> {
        let n = self.remaining().unwrap_or_else(|| self.reader.size());
        self.take(n)
    }

    /// Reads an 8-byte signed length or count prefix.
    pub fn decode_length(&mut self) -> Result<usize, DecodingError> {
        let raw: i64 = self.decode_primitive()?;
        usize::try_from(raw).map_err(|_| {
            debug!(length = raw, "invalid length prefix");
            DecodingError::InvalidLength {
                length: raw.into(),
                reason: if raw < 0 {
                    "negative length prefix"
                } else {
                    "length prefix is not addressable"
                },
            }
        })
    }

    /// Carves a child container out of this one at the current position.
    ///
    /// The child is bounded to `max_length` bytes, or inherits this
    /// container's remaining bound when `max_length` is `None`.
    pub fn nested_container(
        &mut self,
        max_length: Option<usize>,
    ) -> Result<DecodingContainer<'_, 'de>, DecodingError> {
        let remaining = self.remaining();
        let bound = match (max_length, remaining) {
            (Some(length), Some(remaining)) if length > remaining => {
                debug!(
                    requested = length,
                    remaining, "nested container exceeds parent bound"
                );
                return Err(DecodingError::InvalidLength {
                    length: length as i128,
                    reason: "exceeds the parent container's remaining bound",
                });
            }
            (Some(length), _) => Some(length),
            (None, remaining) => remaining,
        };
        trace!(position = self.reader.position(), ?bound, "nested container");
        Ok(DecodingContainer::new(
            &mut *self.reader,
            bound,
            self.config,
            self.user_info,
        ))
    }

    /// Decodes a `T` from this container.
    pub fn decode<T: BinaryDecodable>(&mut self) -> Result<T, DecodingError> {
        T::decode(self)
    }
}
