use binary_codable::{
    from_bytes_with, to_bytes_with, BinaryCodable, BinaryDecoder, ByteOrder, Config,
};
use proptest::prelude::*;
use uuid::Uuid;

fn any_config() -> impl Strategy<Value = Config> {
    prop_oneof![Just(ByteOrder::Little), Just(ByteOrder::Big)].prop_map(Config::with_byte_order)
}

fn roundtrip<T>(value: &T, config: Config) -> Result<(), TestCaseError>
where
    T: BinaryCodable + PartialEq + std::fmt::Debug,
{
    let bytes = to_bytes_with(value, config.clone()).expect("encode");
    let mut decoder = BinaryDecoder::with_config(&bytes, config);
    let back: T = decoder.decode().expect("decode");
    prop_assert_eq!(&back, value);
    prop_assert!(decoder.is_at_end());
    Ok(())
}

proptest! {
    #[test]
    fn integers(a in any::<i64>(), b in any::<u32>(), c in any::<i8>(), d in any::<u128>(), config in any_config()) {
        roundtrip(&a, config.clone())?;
        roundtrip(&b, config.clone())?;
        roundtrip(&c, config.clone())?;
        roundtrip(&d, config)?;
    }

    #[test]
    fn floats_keep_their_bits(x in any::<f64>(), config in any_config()) {
        let bytes = to_bytes_with(&x, config.clone()).unwrap();
        let back: f64 = from_bytes_with(&bytes, config).unwrap();
        prop_assert_eq!(back.to_bits(), x.to_bits());
    }

    #[test]
    fn strings(s in any::<String>(), config in any_config()) {
        let bytes = to_bytes_with(&s, config.clone()).unwrap();
        prop_assert_eq!(bytes.len(), 8 + s.len());
        roundtrip(&s, config)?;
    }

    #[test]
    fn optionals(v in proptest::option::of(any::<u16>()), config in any_config()) {
        let bytes = to_bytes_with(&v, config.clone()).unwrap();
        prop_assert_eq!(bytes[0], u8::from(v.is_some()));
        roundtrip(&v, config)?;
    }

    #[test]
    fn nested_sequences(
        v in proptest::collection::vec(
            proptest::collection::vec(proptest::option::of(".{0,8}"), 0..4),
            0..6,
        ),
        config in any_config(),
    ) {
        roundtrip(&v, config)?;
    }

    #[test]
    fn identifiers(raw in any::<[u8; 16]>(), config in any_config()) {
        let id = Uuid::from_bytes(raw);
        let bytes = to_bytes_with(&id, config.clone()).unwrap();
        prop_assert_eq!(&bytes[..], &raw[..]);
        roundtrip(&id, config)?;
    }

    #[test]
    fn arbitrary_input_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        let _ = from_bytes_with::<Vec<Option<String>>>(&bytes, Config::default());
        let _ = from_bytes_with::<Vec<Uuid>>(&bytes, Config::default());
    }
}
