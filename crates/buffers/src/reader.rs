//! Forward-only reader over a borrowed byte slice.

use crate::BufferError;

/// A binary buffer reader that reads data from a byte slice.
///
/// The reader maintains a cursor position that only ever moves forward.
/// Every read returns a sub-slice of the original buffer; nothing is copied.
///
/// # Example
///
/// ```
/// use binary_codable_buffers::Reader;
///
/// let data = [0x01, 0x02, 0x03, 0x04];
/// let mut reader = Reader::new(&data);
///
/// assert_eq!(reader.u8().unwrap(), 0x01);
/// assert_eq!(reader.array::<2>().unwrap(), [0x02, 0x03]);
/// assert_eq!(reader.size(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    /// The underlying byte slice.
    uint8: &'a [u8],
    /// Current cursor position.
    x: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader positioned at the start of `uint8`.
    pub fn new(uint8: &'a [u8]) -> Self {
        Self { uint8, x: 0 }
    }

    /// Returns the current cursor position.
    #[inline]
    pub fn position(&self) -> usize {
        self.x
    }

    /// Returns the number of remaining bytes.
    #[inline]
    pub fn size(&self) -> usize {
        self.uint8.len() - self.x
    }

    /// Returns `true` once every byte has been read.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Advances the cursor by `n` bytes and returns the range passed over.
    pub fn advance(&mut self, n: usize) -> Result<&'a [u8], BufferError> {
        let x = self.x;
        let end = match x.checked_add(n) {
            Some(end) if end <= self.uint8.len() => end,
            _ => {
                return Err(BufferError::OutOfBounds {
                    position: x,
                    requested: n,
                    len: self.uint8.len(),
                })
            }
        };
        self.x = end;
        Ok(&self.uint8[x..end])
    }

    /// Reads exactly `N` bytes into an array.
    #[inline]
    pub fn array<const N: usize>(&mut self) -> Result<[u8; N], BufferError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.advance(N)?);
        Ok(out)
    }

    /// Reads a single byte.
    #[inline]
    pub fn u8(&mut self) -> Result<u8, BufferError> {
        Ok(self.advance(1)?[0])
    }

    /// Returns the bytes not yet read without advancing.
    pub fn rest(&self) -> &'a [u8] {
        &self.uint8[self.x..]
    }
}
