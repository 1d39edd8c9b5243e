//! The value-tree encoder: `encode(&Value) -> Result<Vec<u8>, EncodeError>`.
//!
//! Dispatches on the value's variant, asks the size-class selector for
//! the canonical tag, writes tag + length field (if any) + payload, and
//! recurses on composite variants. Encoding order for maps is the
//! caller-provided entry order; no reordering or deduplication happens
//! here.

use crate::codec::Sink;
use crate::error::EncodeError;
use crate::select;
use crate::tags;
use crate::value::Value;

/// Encodes `value` into its canonical byte sequence.
///
/// Canonical means: of every tag that could legally represent `value`,
/// the narrowest one is chosen, so two calls with structurally equal
/// input always produce identical bytes (see the crate-level docs for
/// the round-trip and canonicality invariants this supports).
pub fn encode(value: &Value) -> Result<Vec<u8>, EncodeError> {
    let mut sink = Sink::new();
    encode_value(value, &mut sink)?;
    Ok(sink.into_vec())
}

pub(crate) fn encode_value(value: &Value, sink: &mut Sink) -> Result<(), EncodeError> {
    match value {
        Value::Null => {
            sink.write_tag(tags::NULL);
        }
        Value::Bool(b) => {
            // Shares tag 0x01 with UInt8 by design (see the crate-level
            // design notes on this quirk); booleans round-trip through
            // decode as the integers 0/1, never as Value::Bool.
            sink.write_tag(tags::UINT8);
            sink.write_u8(if *b { 1 } else { 0 });
        }
        Value::UInt(v) => encode_uint(*v, sink),
        Value::Int(v) => encode_int(*v, sink)?,
        Value::Float(v) => {
            sink.write_tag(tags::FLOAT64);
            sink.write_f64(*v);
        }
        Value::String(s) => encode_string(s, sink)?,
        Value::Bytes(data) => encode_bytes(data, sink)?,
        Value::List(items) => encode_list(items, sink)?,
        Value::Map(entries) => encode_map(entries, sink)?,
    }
    Ok(())
}

pub(crate) fn encode_uint(value: u64, sink: &mut Sink) {
    let tag = select::select_uint_tag(value);
    sink.write_tag(tag);
    match tag {
        tags::UINT8 => sink.write_u8(value as u8),
        tags::UINT16 => sink.write_u16(value as u16),
        tags::UINT32 => sink.write_u32(value as u32),
        tags::UINT64 => sink.write_u64(value),
        _ => unreachable!("select_uint_tag only returns UInt* tags"),
    }
}

pub(crate) fn encode_int(value: i64, sink: &mut Sink) -> Result<(), EncodeError> {
    if value >= 0 {
        // Non-negative Int values are still within the Int family, but
        // the selector rules (§4.2) only defines negative-value
        // boundaries for Int8..Int64. A non-negative Int is out of the
        // modeled domain for this variant (the caller should have used
        // Value::UInt); treat it as the narrowest size class that fits,
        // matching how the selector rules read for every other family.
        return Err(EncodeError::OutOfRange {
            reason: "Value::Int must hold a negative integer; use Value::UInt for non-negative",
        });
    }
    let tag = select::select_int_tag(value);
    sink.write_tag(tag);
    match tag {
        tags::INT8 => sink.write_i8(value as i8),
        tags::INT16 => sink.write_i16(value as i16),
        tags::INT32 => sink.write_i32(value as i32),
        tags::INT64 => sink.write_i64(value),
        _ => unreachable!("select_int_tag only returns Int* tags"),
    }
    Ok(())
}

pub(crate) fn encode_string(value: &str, sink: &mut Sink) -> Result<(), EncodeError> {
    let bytes = value.as_bytes();
    let tag = select::select_string_tag(bytes.len())?;
    sink.write_tag(tag);
    match tag {
        tags::STRING16 => sink.write_u16(bytes.len() as u16),
        tags::STRING32 => sink.write_u32(bytes.len() as u32),
        _ => {} // FixString carries its length in the tag's low nibble.
    }
    sink.write_bytes(bytes);
    Ok(())
}

pub(crate) fn encode_bytes(data: &[u8], sink: &mut Sink) -> Result<(), EncodeError> {
    let tag = select::select_bytes_tag(data.len())?;
    sink.write_tag(tag);
    match tag {
        tags::BYTES8 => sink.write_u8(data.len() as u8),
        tags::BYTES16 => sink.write_u16(data.len() as u16),
        _ => unreachable!("select_bytes_tag only returns Bytes* tags"),
    }
    sink.write_bytes(data);
    Ok(())
}

fn encode_list(items: &[Value], sink: &mut Sink) -> Result<(), EncodeError> {
    let tag = select::select_list_tag(items.len())?;
    sink.write_tag(tag);
    if tag == tags::LIST16 {
        sink.write_u16(items.len() as u16);
    }
    for item in items {
        encode_value(item, sink)?;
    }
    Ok(())
}

fn encode_map(entries: &[(String, Value)], sink: &mut Sink) -> Result<(), EncodeError> {
    let tag = select::select_map_tag(entries.len())?;
    sink.write_tag(tag);
    if tag == tags::MAP16 {
        sink.write_u16(entries.len() as u16);
    }
    for (key, value) in entries {
        encode_string(key, sink)?;
        encode_value(value, sink)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_is_one_byte() {
        assert_eq!(encode(&Value::Null).unwrap(), vec![0x00]);
    }

    #[test]
    fn uint_255_is_uint8() {
        assert_eq!(encode(&Value::UInt(255)).unwrap(), vec![0x01, 0xff]);
    }

    #[test]
    fn uint_256_is_uint16() {
        assert_eq!(encode(&Value::UInt(256)).unwrap(), vec![0x02, 0x01, 0x00]);
    }

    #[test]
    fn int_negative_one_is_int8() {
        assert_eq!(encode(&Value::Int(-1)).unwrap(), vec![0x11, 0xff]);
    }

    #[test]
    fn int_of_non_negative_value_is_rejected() {
        assert!(matches!(
            encode(&Value::Int(0)),
            Err(EncodeError::OutOfRange { .. })
        ));
    }

    #[test]
    fn short_string_is_fixstring() {
        assert_eq!(
            encode(&Value::string("Hi")).unwrap(),
            vec![0x32, b'H', b'i']
        );
    }

    #[test]
    fn list_of_small_uints() {
        let list = Value::List(vec![Value::UInt(1), Value::UInt(2), Value::UInt(3)]);
        assert_eq!(
            encode(&list).unwrap(),
            vec![0x53, 0x01, 0x01, 0x01, 0x02, 0x01, 0x03]
        );
    }

    #[test]
    fn map_with_one_entry() {
        let map = Value::map(vec![("a".to_owned(), Value::UInt(1))]);
        assert_eq!(
            encode(&map).unwrap(),
            vec![0x71, 0x31, b'a', 0x01, 0x01]
        );
    }

    #[test]
    fn bytes_payload() {
        let bytes = Value::Bytes(vec![0x00, 0xff]);
        assert_eq!(encode(&bytes).unwrap(), vec![0x91, 0x02, 0x00, 0xff]);
    }

    #[test]
    fn bool_shares_uint8_tag() {
        assert_eq!(encode(&Value::Bool(true)).unwrap(), vec![0x01, 0x01]);
        assert_eq!(encode(&Value::Bool(false)).unwrap(), vec![0x01, 0x00]);
    }

    #[test]
    fn oversized_list_is_out_of_range() {
        let items: Vec<Value> = (0..=0xFFFFu32).map(|n| Value::UInt(n as u64)).collect();
        assert!(matches!(
            encode(&Value::List(items)),
            Err(EncodeError::OutOfRange { .. })
        ));
    }
}
