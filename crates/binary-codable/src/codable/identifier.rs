//! Fixed-size blobs: exactly `N` raw bytes with no length prefix.

use uuid::Uuid;

use crate::{
    BinaryDecodable, BinaryEncodable, DecodingContainer, DecodingError, EncodingContainer,
    EncodingError,
};

impl<const N: usize> BinaryEncodable for [u8; N] {
    fn encode(&self, container: &mut EncodingContainer<'_>) -> Result<(), EncodingError> {
        container.encode_raw_bytes(self);
        Ok(())
    }
}

impl<const N: usize> BinaryDecodable for [u8; N] {
    fn decode(container: &mut DecodingContainer<'_, '_>) -> Result<Self, DecodingError> {
        // A short blob is truncated data, not an oversized nested bound.
        if let Some(remaining) = container.remaining().filter(|&remaining| remaining < N) {
            return Err(DecodingError::PrematureEndOfData {
                needed: N,
                remaining,
            });
        }
        let mut blob = container.nested_container(Some(N))?;
        let bytes = blob.decode_remainder()?;
        <[u8; N]>::try_from(bytes).map_err(|_| DecodingError::PrematureEndOfData {
            needed: N,
            remaining: bytes.len(),
        })
    }
}

impl BinaryEncodable for Uuid {
    fn encode(&self, container: &mut EncodingContainer<'_>) -> Result<(), EncodingError> {
        container.encode(self.as_bytes())
    }
}

impl BinaryDecodable for Uuid {
    fn decode(container: &mut DecodingContainer<'_, '_>) -> Result<Self, DecodingError> {
        container.decode().map(Uuid::from_bytes)
    }
}
