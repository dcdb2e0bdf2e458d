//! Streaming reader with internal buffer management.

use crate::Reader;

/// Unconsumed prefix size above which [`StreamingReader::consume`] compacts
/// the internal buffer.
const COMPACT_THRESHOLD: usize = 16 * 1024;

/// A streaming reader that internally manages a growing buffer.
///
/// Data chunks are pushed into the reader, read through a fresh [`Reader`]
/// and released with [`consume`](Self::consume) once fully decoded.
#[derive(Debug, Default)]
pub struct StreamingReader {
    uint8: Vec<u8>,
    /// Offset of the first unconsumed byte.
    x: usize,
}

impl StreamingReader {
    /// Creates an empty streaming reader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of bytes not yet consumed.
    pub fn size(&self) -> usize {
        self.uint8.len() - self.x
    }

    /// Adds a chunk of data to be read.
    pub fn push(&mut self, data: &[u8]) {
        self.uint8.extend_from_slice(data);
    }

    /// Returns a reader over the unconsumed bytes.
    pub fn reader(&self) -> Reader<'_> {
        Reader::new(&self.uint8[self.x..])
    }

    /// Marks `n` bytes as consumed, freeing memory for reuse.
    ///
    /// # Panics
    ///
    /// Panics if `n` exceeds [`size`](Self::size).
    pub fn consume(&mut self, n: usize) {
        assert!(n <= self.size(), "OUT_OF_BOUNDS");
        self.x += n;
        if self.x == self.uint8.len() {
            self.uint8.clear();
            self.x = 0;
        } else if self.x >= COMPACT_THRESHOLD {
            self.uint8.drain(..self.x);
            self.x = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_read() {
        let mut reader = StreamingReader::new();
        reader.push(&[1, 2]);
        reader.push(&[3]);
        assert_eq!(reader.size(), 3);
        let mut r = reader.reader();
        assert_eq!(r.advance(3).unwrap(), &[1, 2, 3]);
    }

    #[test]
    fn test_consume_keeps_tail() {
        let mut reader = StreamingReader::new();
        reader.push(&[1, 2, 3, 4]);
        reader.consume(3);
        assert_eq!(reader.size(), 1);
        assert_eq!(reader.reader().u8().unwrap(), 4);
        reader.push(&[5]);
        assert_eq!(reader.reader().rest(), &[4, 5]);
    }

    #[test]
    fn test_consume_all_clears() {
        let mut reader = StreamingReader::default();
        reader.push(&[1, 2]);
        reader.consume(2);
        assert_eq!(reader.size(), 0);
        assert!(reader.reader().is_empty());
    }

    #[test]
    fn test_compaction_preserves_data() {
        let mut reader = StreamingReader::new();
        let data: Vec<u8> = (0..=255u8).cycle().take(COMPACT_THRESHOLD + 10).collect();
        reader.push(&data);
        reader.consume(COMPACT_THRESHOLD);
        assert_eq!(reader.reader().rest(), &data[COMPACT_THRESHOLD..]);
    }

    #[test]
    #[should_panic(expected = "OUT_OF_BOUNDS")]
    fn test_consume_too_much_panics() {
        let mut reader = StreamingReader::new();
        reader.push(&[1]);
        reader.consume(2);
    }
}
