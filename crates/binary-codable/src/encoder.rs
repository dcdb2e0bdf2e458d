//! Encoding side: the top-level [`BinaryEncoder`] and the append-only
//! [`EncodingContainer`].

use binary_codable_buffers::Writer;

use crate::{
    BinaryEncodable, Config, ContainerState, EncodingError, FixedWidth, UserInfo, UserInfoKey,
};

/// Encodes values into an owned, growing buffer.
///
/// # Example
///
/// ```
/// use binary_codable::BinaryEncoder;
///
/// let mut encoder = BinaryEncoder::new();
/// encoder.encode("hi").unwrap();
/// assert_eq!(encoder.finish(), vec![2, 0, 0, 0, 0, 0, 0, 0, b'h', b'i']);
/// ```
#[derive(Debug, Default)]
pub struct BinaryEncoder {
    writer: Writer,
    config: Config,
    user_info: UserInfo,
}

impl BinaryEncoder {
    /// Creates an encoder with the default [`Config`].
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an encoder using `config` for every container.
    pub fn with_config(config: Config) -> Self {
        Self {
            writer: Writer::new(),
            config,
            user_info: UserInfo::new(),
        }
    }

    /// Returns the encoder's config.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Makes `value` visible to every container this encoder hands out.
    pub fn set_user_info(&mut self, key: impl Into<UserInfoKey>, value: serde_json::Value) {
        self.user_info.insert(key.into(), value);
    }

    /// Returns the user info set so far.
    pub fn user_info(&self) -> &UserInfo {
        &self.user_info
    }

    /// Returns a container appending to this encoder's buffer.
    pub fn container(&mut self) -> EncodingContainer<'_> {
        EncodingContainer {
            writer: &mut self.writer,
            config: &self.config,
            user_info: &self.user_info,
        }
    }

    /// Appends the encoding of `value`.
    pub fn encode<T: BinaryEncodable + ?Sized>(&mut self, value: &T) -> Result<(), EncodingError> {
        self.container().encode(value)
    }

    /// Returns the number of bytes encoded so far.
    pub fn position(&self) -> usize {
        self.writer.position()
    }

    /// Takes the encoded bytes, keeping config and user info for reuse.
    pub fn flush(&mut self) -> Vec<u8> {
        self.writer.flush()
    }

    /// Consumes the encoder and returns everything encoded.
    pub fn finish(self) -> Vec<u8> {
        self.writer.into_vec()
    }
}

/// An unbounded, append-only view over an encoder's buffer.
pub struct EncodingContainer<'c> {
    writer: &'c mut Writer,
    config: &'c Config,
    user_info: &'c UserInfo,
}

impl<'c> EncodingContainer<'c> {
    /// Returns the owning encoder's config.
    pub fn config(&self) -> &Config {
        self.config
    }

    /// Returns the owning encoder's user info.
    pub fn user_info(&self) -> &UserInfo {
        self.user_info
    }

    /// Encode containers never carry a bound.
    pub fn state(&self) -> ContainerState {
        ContainerState::Unbounded
    }

    /// Returns the total number of bytes in the encoder's buffer.
    pub fn bytes_written(&self) -> usize {
        self.writer.position()
    }

    /// Writes a fixed-width primitive in the configured byte order.
    pub fn encode_primitive<T: FixedWidth>(&mut self, value: T) {
        value.write_to(self.writer.reserve(T::WIDTH), self.config.byte_order);
    }

    /// Writes `bytes` verbatim, without a length prefix.
    pub fn encode_raw_bytes(&mut self, bytes: &[u8]) {
        self.writer.buf(bytes);
    }

    /// Writes an 8-byte signed length or count prefix.
    pub fn encode_length(&mut self, length: usize) -> Result<(), EncodingError> {
        let prefix = i64::try_from(length).map_err(|_| EncodingError::InvalidLength(length))?;
        self.encode_primitive(prefix);
        Ok(())
    }

    /// Encodes `value` through its [`BinaryEncodable`] impl.
    pub fn encode<T: BinaryEncodable + ?Sized>(&mut self, value: &T) -> Result<(), EncodingError> {
        value.encode(self)
    }
}
