//! Property-based tests for the quantified invariants: round-trip,
//! canonicality, narrowest-size-class selection, and truncation
//! robustness. Concrete fixed scenarios live in `scenarios.rs`; this
//! file is for the properties that are stated over "every legal value"
//! rather than a fixed table.

use poculum::{decode, encode, DecodeError, Value};
use proptest::collection::vec as pvec;
use proptest::prelude::*;

/// Generates an arbitrary legal `Value`, bounded in depth and size so
/// shrinking stays fast.
///
/// `Value::Bool` is deliberately excluded: it shares tag 0x01 with
/// `UInt8` (see the crate-level design notes), so it does not round-trip
/// as a distinct variant and would falsify `round_trip` below. See
/// `bool_round_trips_as_its_underlying_uint` for the behavior that
/// replaces it.
fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<u64>().prop_map(Value::UInt),
        (i64::MIN..0i64).prop_map(Value::Int),
        any::<f64>()
            .prop_filter("finite", |f| f.is_finite())
            .prop_map(Value::Float),
        ".{0,40}".prop_map(Value::string),
        pvec(any::<u8>(), 0..40).prop_map(Value::Bytes),
    ];

    leaf.prop_recursive(3, 64, 8, |inner| {
        prop_oneof![
            pvec(inner.clone(), 0..8).prop_map(Value::List),
            pvec((".{0,16}", inner), 0..8).prop_map(Value::map),
        ]
    })
}

proptest! {
    #[test]
    fn round_trip(value in arb_value()) {
        let bytes = encode(&value).unwrap();
        let decoded = decode(&bytes).unwrap();
        prop_assert_eq!(decoded, value);
    }

    #[test]
    fn canonicality_is_idempotent(value in arb_value()) {
        let once = encode(&value).unwrap();
        let decoded = decode(&once).unwrap();
        let twice = encode(&decoded).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn truncation_never_panics(value in arb_value()) {
        let bytes = encode(&value).unwrap();
        for k in 0..bytes.len() {
            let prefix = &bytes[0..k];
            match decode(prefix) {
                Err(DecodeError::Truncated { .. }) | Err(DecodeError::UnknownTag { .. }) => {}
                other => prop_assert!(
                    false,
                    "expected Truncated or UnknownTag for a strict prefix, got {:?}",
                    other
                ),
            }
        }
    }
}

#[test]
fn narrowest_uint_class_boundaries() {
    assert_eq!(encode(&Value::UInt(0xFF)).unwrap()[0], 0x01);
    assert_eq!(encode(&Value::UInt(0x100)).unwrap()[0], 0x02);
    assert_eq!(encode(&Value::UInt(0xFFFF)).unwrap()[0], 0x02);
    assert_eq!(encode(&Value::UInt(0x1_0000)).unwrap()[0], 0x03);
    assert_eq!(encode(&Value::UInt(0xFFFF_FFFF)).unwrap()[0], 0x03);
    assert_eq!(encode(&Value::UInt(0x1_0000_0000)).unwrap()[0], 0x04);
}

#[test]
fn narrowest_int_class_boundaries() {
    assert_eq!(encode(&Value::Int(-1)).unwrap()[0], 0x11);
    assert_eq!(encode(&Value::Int(-128)).unwrap()[0], 0x11);
    assert_eq!(encode(&Value::Int(-129)).unwrap()[0], 0x12);
    assert_eq!(encode(&Value::Int(-32_768)).unwrap()[0], 0x12);
    assert_eq!(encode(&Value::Int(-32_769)).unwrap()[0], 0x13);
}

#[test]
fn bool_round_trips_as_its_underlying_uint() {
    // Bool shares tag 0x01 with UInt8, so it decodes as UInt, not Bool.
    assert_eq!(decode(&encode(&Value::Bool(true)).unwrap()).unwrap(), Value::UInt(1));
    assert_eq!(decode(&encode(&Value::Bool(false)).unwrap()).unwrap(), Value::UInt(0));
}

#[test]
fn endianness_is_big_endian_throughout() {
    let bytes = encode(&Value::UInt(0x0102_0304)).unwrap();
    assert_eq!(bytes, vec![0x03, 0x01, 0x02, 0x03, 0x04]);

    let bytes = encode(&Value::Int(-2)).unwrap();
    assert_eq!(bytes, vec![0x11, 0xfe]);
}
