//! `Option<T>`: a one-byte presence flag followed by the value iff present.

use crate::{
    BinaryDecodable, BinaryEncodable, DecodingContainer, DecodingError, EncodingContainer,
    EncodingError,
};

const ABSENT: u8 = 0;
const PRESENT: u8 = 1;

impl<T: BinaryEncodable> BinaryEncodable for Option<T> {
    fn encode(&self, container: &mut EncodingContainer<'_>) -> Result<(), EncodingError> {
        match self {
            Some(value) => {
                container.encode_primitive(PRESENT);
                container.encode(value)
            }
            None => {
                container.encode_primitive(ABSENT);
                Ok(())
            }
        }
    }
}

impl<T: BinaryDecodable> BinaryDecodable for Option<T> {
    fn decode(container: &mut DecodingContainer<'_, '_>) -> Result<Self, DecodingError> {
        let flag: u8 = container.decode_primitive()?;
        if flag == ABSENT {
            Ok(None)
        } else {
            container.decode().map(Some)
        }
    }
}
