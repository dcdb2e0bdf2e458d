//! The [`BinaryEncodable`] / [`BinaryDecodable`] capability pair and its
//! implementations for composite standard types.
//!
//! Every implementation here is written purely against the container
//! operations; none of them touch the underlying buffer.

mod identifier;
mod optional;
mod sequence;
mod string;

use crate::{DecodingContainer, DecodingError, EncodingContainer, EncodingError};

/// A type that can write itself into an [`EncodingContainer`].
pub trait BinaryEncodable {
    /// Appends the encoding of `self` to `container`.
    fn encode(&self, container: &mut EncodingContainer<'_>) -> Result<(), EncodingError>;
}

/// A type that can read itself out of a [`DecodingContainer`].
///
/// Implementations may consume up to the container's remaining bound, and
/// may carve nested containers out of it to frame sub-regions.
pub trait BinaryDecodable: Sized {
    /// Reads one value from `container`.
    fn decode(container: &mut DecodingContainer<'_, '_>) -> Result<Self, DecodingError>;
}

/// A type that converts both into and out of the binary representation.
pub trait BinaryCodable: BinaryEncodable + BinaryDecodable {}

impl<T: BinaryEncodable + BinaryDecodable> BinaryCodable for T {}

impl<T: BinaryEncodable + ?Sized> BinaryEncodable for &T {
    fn encode(&self, container: &mut EncodingContainer<'_>) -> Result<(), EncodingError> {
        (**self).encode(container)
    }
}

impl<T: BinaryEncodable + ?Sized> BinaryEncodable for Box<T> {
    fn encode(&self, container: &mut EncodingContainer<'_>) -> Result<(), EncodingError> {
        (**self).encode(container)
    }
}

impl<T: BinaryDecodable> BinaryDecodable for Box<T> {
    fn decode(container: &mut DecodingContainer<'_, '_>) -> Result<Self, DecodingError> {
        container.decode().map(Box::new)
    }
}
