//! Writer/Reader/StreamingReader behavior matrix for the buffers crate.

use binary_codable_buffers::{BufferError, Reader, StreamingReader, Writer};

// ---------------------------------------------------------------------------
// Writer -> Reader
// ---------------------------------------------------------------------------

#[test]
fn written_bytes_read_back_in_order() {
    let mut w = Writer::new();
    w.u8(0x00);
    w.buf(&[0x7f, 0x80]);
    w.reserve(2).copy_from_slice(&0xbeefu16.to_be_bytes());
    w.u8(0xff);
    let data = w.flush();

    let mut r = Reader::new(&data);
    assert_eq!(r.u8().unwrap(), 0x00);
    assert_eq!(r.advance(2).unwrap(), &[0x7f, 0x80]);
    assert_eq!(u16::from_be_bytes(r.array().unwrap()), 0xbeef);
    assert_eq!(r.u8().unwrap(), 0xff);
    assert!(r.is_empty());
}

#[test]
fn reads_borrow_without_copying() {
    let data = vec![1u8, 2, 3, 4];
    let mut r = Reader::new(&data);
    let head = r.advance(2).unwrap();
    assert_eq!(head.as_ptr(), data.as_ptr());
    let tail = r.advance(2).unwrap();
    assert_eq!(tail.as_ptr(), data[2..].as_ptr());
}

#[test]
fn reader_never_moves_past_end() {
    let data = [1u8, 2, 3];
    let mut r = Reader::new(&data);
    r.advance(2).unwrap();
    for n in [2, 3, usize::MAX] {
        assert_eq!(
            r.advance(n),
            Err(BufferError::OutOfBounds {
                position: 2,
                requested: n,
                len: 3,
            })
        );
        assert_eq!(r.position(), 2);
    }
    assert_eq!(r.size(), 1);
}

#[test]
fn out_of_bounds_message() {
    let err = Reader::new(&[]).u8().unwrap_err();
    assert_eq!(
        err.to_string(),
        "cursor at 0 cannot advance 1 bytes in a buffer of 0"
    );
}

#[test]
fn cloned_reader_is_independent() {
    let data = [5u8, 6];
    let mut a = Reader::new(&data);
    let mut b = a.clone();
    assert_eq!(a.u8().unwrap(), 5);
    assert_eq!(b.advance(2).unwrap(), &[5, 6]);
    assert_eq!(a.u8().unwrap(), 6);
}

// ---------------------------------------------------------------------------
// StreamingReader
// ---------------------------------------------------------------------------

#[test]
fn streaming_reader_consumes_prefixes() {
    let mut s = StreamingReader::new();
    s.push(b"abc");
    {
        let mut r = s.reader();
        assert_eq!(r.advance(2).unwrap(), b"ab");
    }
    // Reading does not consume.
    assert_eq!(s.size(), 3);
    s.consume(2);
    s.push(b"de");
    assert_eq!(s.reader().rest(), b"cde");
}
