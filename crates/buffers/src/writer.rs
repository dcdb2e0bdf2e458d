//! Append-only writer over an auto-growing buffer.

/// Default number of bytes reserved by [`Writer::new`].
const DEFAULT_ALLOC_SIZE: usize = 64;

/// A binary buffer writer.
///
/// The position always equals the length of the buffer: bytes are only ever
/// appended, never patched.
///
/// # Example
///
/// ```
/// use binary_codable_buffers::Writer;
///
/// let mut writer = Writer::new();
/// writer.u8(0x2a);
/// writer.reserve(2).copy_from_slice(&[0x01, 0x02]);
/// assert_eq!(writer.flush(), vec![0x2a, 0x01, 0x02]);
/// assert_eq!(writer.position(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Writer {
    uint8: Vec<u8>,
}

impl Writer {
    /// Creates a new writer with the default allocation size.
    pub fn new() -> Self {
        Self::with_alloc_size(DEFAULT_ALLOC_SIZE)
    }

    /// Creates a new writer with room for `alloc_size` bytes.
    pub fn with_alloc_size(alloc_size: usize) -> Self {
        Self {
            uint8: Vec::with_capacity(alloc_size),
        }
    }

    /// Returns the number of bytes written so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.uint8.len()
    }

    /// Appends `n` zero bytes and returns them for the caller to fill in.
    pub fn reserve(&mut self, n: usize) -> &mut [u8] {
        let x = self.uint8.len();
        self.uint8.resize(x + n, 0);
        &mut self.uint8[x..]
    }

    /// Writes a single byte.
    #[inline]
    pub fn u8(&mut self, byte: u8) {
        self.uint8.push(byte);
    }

    /// Writes a byte slice.
    #[inline]
    pub fn buf(&mut self, data: &[u8]) {
        self.uint8.extend_from_slice(data);
    }

    /// Returns the bytes written so far.
    pub fn as_slice(&self) -> &[u8] {
        &self.uint8
    }

    /// Discards everything written so far.
    pub fn reset(&mut self) {
        self.uint8.clear();
    }

    /// Takes the written bytes, leaving the writer empty.
    pub fn flush(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.uint8)
    }

    /// Consumes the writer and returns the written bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.uint8
    }
}
