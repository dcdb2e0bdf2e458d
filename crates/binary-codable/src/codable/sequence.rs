//! Sequences: an 8-byte signed element count, then each element back-to-back.

use tracing::debug;

use crate::{
    BinaryDecodable, BinaryEncodable, DecodingContainer, DecodingError, EncodingContainer,
    EncodingError,
};

impl<T: BinaryEncodable> BinaryEncodable for [T] {
    fn encode(&self, container: &mut EncodingContainer<'_>) -> Result<(), EncodingError> {
        container.encode_length(self.len())?;
        for element in self {
            container.encode(element)?;
        }
        Ok(())
    }
}

impl<T: BinaryEncodable> BinaryEncodable for Vec<T> {
    fn encode(&self, container: &mut EncodingContainer<'_>) -> Result<(), EncodingError> {
        self.as_slice().encode(container)
    }
}

impl<T: BinaryDecodable> BinaryDecodable for Vec<T> {
    fn decode(container: &mut DecodingContainer<'_, '_>) -> Result<Self, DecodingError> {
        let count = container.decode_length()?;
        let limit = container.config().max_preallocation;
        let mut elements = Vec::with_capacity(count.min(limit));
        for i in 0..count {
            let before = container.position();
            elements.push(container.decode()?);
            // Elements that take no bytes cannot be cross-checked against the
            // input, so their count is only trusted up to `limit`.
            if i == 0 && count > limit && container.position() == before {
                debug!(count, limit, "implausible element count");
                return Err(DecodingError::InvalidLength {
                    length: count as i128,
                    reason: "implausible element count",
                });
            }
        }
        Ok(elements)
    }
}
