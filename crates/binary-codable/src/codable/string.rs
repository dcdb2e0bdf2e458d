//! UTF-8 text: an 8-byte byte-length prefix, then the raw bytes.
//!
//! The payload is read through a nested container bounded to the prefix, so
//! a corrupt prefix can never pull bytes from whatever follows.

use crate::{
    BinaryDecodable, BinaryEncodable, DecodingContainer, DecodingError, EncodingContainer,
    EncodingError,
};

impl BinaryEncodable for str {
    fn encode(&self, container: &mut EncodingContainer<'_>) -> Result<(), EncodingError> {
        container.encode_length(self.len())?;
        container.encode_raw_bytes(self.as_bytes());
        Ok(())
    }
}

impl BinaryEncodable for String {
    fn encode(&self, container: &mut EncodingContainer<'_>) -> Result<(), EncodingError> {
        self.as_str().encode(container)
    }
}

impl BinaryDecodable for String {
    fn decode(container: &mut DecodingContainer<'_, '_>) -> Result<Self, DecodingError> {
        let length = container.decode_length()?;
        let mut payload = container.nested_container(Some(length))?;
        let bytes = payload.decode_remainder()?;
        Ok(std::str::from_utf8(bytes)?.to_owned())
    }
}
