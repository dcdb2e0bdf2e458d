//! Fixed-width primitive encoding.
//!
//! | Rust type        | Width |
//! |------------------|-------|
//! | `bool`, `u8`, `i8` | 1   |
//! | `u16`, `i16`     | 2     |
//! | `u32`, `i32`, `f32` | 4  |
//! | `u64`, `i64`, `f64` | 8  |
//! | `u128`, `i128`   | 16    |
//!
//! Multi-byte values use the [`ByteOrder`] from the active [`Config`](crate::Config).

use crate::{
    BinaryDecodable, BinaryEncodable, ByteOrder, DecodingContainer, DecodingError,
    EncodingContainer, EncodingError,
};

/// A value with a fixed-size byte representation.
///
/// Containers size every read and write from [`WIDTH`](Self::WIDTH), so
/// `write_to` and `read_from` always receive exactly that many bytes.
pub trait FixedWidth: Copy {
    /// Encoded size in bytes.
    const WIDTH: usize;

    /// Writes `self` into `out`, which is exactly `WIDTH` bytes long.
    fn write_to(self, out: &mut [u8], order: ByteOrder);

    /// Reads a value from `bytes`, which is exactly `WIDTH` bytes long.
    fn read_from(bytes: &[u8], order: ByteOrder) -> Self;
}

macro_rules! impl_fixed_width {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FixedWidth for $ty {
                const WIDTH: usize = std::mem::size_of::<$ty>();

                #[inline]
                fn write_to(self, out: &mut [u8], order: ByteOrder) {
                    let bytes = match order {
                        ByteOrder::Little => self.to_le_bytes(),
                        ByteOrder::Big => self.to_be_bytes(),
                    };
                    out.copy_from_slice(&bytes);
                }

                #[inline]
                fn read_from(bytes: &[u8], order: ByteOrder) -> Self {
                    let mut raw = [0u8; std::mem::size_of::<$ty>()];
                    raw.copy_from_slice(bytes);
                    match order {
                        ByteOrder::Little => <$ty>::from_le_bytes(raw),
                        ByteOrder::Big => <$ty>::from_be_bytes(raw),
                    }
                }
            }

            impl BinaryEncodable for $ty {
                fn encode(&self, container: &mut EncodingContainer<'_>) -> Result<(), EncodingError> {
                    container.encode_primitive(*self);
                    Ok(())
                }
            }

            impl BinaryDecodable for $ty {
                fn decode(container: &mut DecodingContainer<'_, '_>) -> Result<Self, DecodingError> {
                    container.decode_primitive()
                }
            }
        )*
    };
}

impl_fixed_width!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128, f32, f64);

/// Booleans are one byte: `1` for true, `0` for false. Any nonzero byte
/// decodes as true.
impl FixedWidth for bool {
    const WIDTH: usize = 1;

    #[inline]
    fn write_to(self, out: &mut [u8], _order: ByteOrder) {
        out[0] = u8::from(self);
    }

    #[inline]
    fn read_from(bytes: &[u8], _order: ByteOrder) -> Self {
        bytes[0] != 0
    }
}

impl BinaryEncodable for bool {
    fn encode(&self, container: &mut EncodingContainer<'_>) -> Result<(), EncodingError> {
        container.encode_primitive(*self);
        Ok(())
    }
}

impl BinaryDecodable for bool {
    fn decode(container: &mut DecodingContainer<'_, '_>) -> Result<Self, DecodingError> {
        container.decode_primitive()
    }
}
