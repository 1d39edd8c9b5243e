//! The decoder: reads one tag byte, dispatches on it, reads the payload
//! per the tag table, and recurses for composite variants. A single
//! cursor advances monotonically; there is no backtracking.

use crate::error::DecodeError;
use crate::tags;
use crate::value::{Value, ValueView};
use byteorder::{BigEndian, ByteOrder};

/// Options controlling decode behavior that are not part of the wire
/// format itself.
#[derive(Clone, Copy, Debug)]
pub struct DecodeOptions {
    /// Maximum nesting depth of List/Map values before decode aborts
    /// with [`DecodeError::DepthExceeded`]. Defends against stack
    /// exhaustion on adversarial input; not part of the wire contract.
    pub max_depth: u32,
}

impl Default for DecodeOptions {
    fn default() -> DecodeOptions {
        DecodeOptions { max_depth: 1024 }
    }
}

/// A monotonically advancing cursor over the input buffer. Never
/// backtracks; every read either advances `position` or fails.
struct Reader<'a> {
    buffer: &'a [u8],
    position: usize,
}

impl<'a> Reader<'a> {
    fn new(buffer: &'a [u8]) -> Reader<'a> {
        Reader {
            buffer,
            position: 0,
        }
    }

    fn advance(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        if self.buffer.len() < self.position + n {
            Err(DecodeError::Truncated {
                offset: self.position,
            })
        } else {
            let slice = &self.buffer[self.position..self.position + n];
            self.position += n;
            Ok(slice)
        }
    }

    fn read_u8(&mut self) -> Result<u8, DecodeError> {
        Ok(self.advance(1)?[0])
    }

    fn read_u16(&mut self) -> Result<u16, DecodeError> {
        Ok(BigEndian::read_u16(self.advance(2)?))
    }

    fn read_u32(&mut self) -> Result<u32, DecodeError> {
        Ok(BigEndian::read_u32(self.advance(4)?))
    }

    fn read_u64(&mut self) -> Result<u64, DecodeError> {
        Ok(BigEndian::read_u64(self.advance(8)?))
    }

    fn read_i8(&mut self) -> Result<i8, DecodeError> {
        Ok(self.advance(1)?[0] as i8)
    }

    fn read_i16(&mut self) -> Result<i16, DecodeError> {
        Ok(BigEndian::read_i16(self.advance(2)?))
    }

    fn read_i32(&mut self) -> Result<i32, DecodeError> {
        Ok(BigEndian::read_i32(self.advance(4)?))
    }

    fn read_i64(&mut self) -> Result<i64, DecodeError> {
        Ok(BigEndian::read_i64(self.advance(8)?))
    }

    fn read_f64(&mut self) -> Result<f64, DecodeError> {
        Ok(BigEndian::read_f64(self.advance(8)?))
    }
}

/// Tracks recursive descent depth against a configured maximum.
struct Depth {
    max: u32,
    current: u32,
}

impl Depth {
    fn new(max: u32) -> Depth {
        Depth { max, current: 0 }
    }

    fn enter(&mut self) -> Result<(), DecodeError> {
        if self.current >= self.max {
            return Err(DecodeError::DepthExceeded { max_depth: self.max });
        }
        self.current += 1;
        Ok(())
    }

    fn exit(&mut self) {
        self.current -= 1;
    }
}

/// Decodes exactly one root [`Value`] from `input` with the default
/// [`DecodeOptions`], rejecting any trailing bytes after it.
pub fn decode(input: &[u8]) -> Result<Value, DecodeError> {
    decode_with_options(input, DecodeOptions::default())
}

/// Like [`decode`], but with caller-supplied [`DecodeOptions`].
pub fn decode_with_options(input: &[u8], options: DecodeOptions) -> Result<Value, DecodeError> {
    let (value, consumed) = decode_prefix_with_options(input, options)?;
    if consumed != input.len() {
        return Err(DecodeError::TrailingBytes {
            remaining: input.len() - consumed,
            total: input.len(),
        });
    }
    Ok(value)
}

/// Decodes one root [`Value`] from the start of `input`, returning it
/// along with the number of bytes consumed. Trailing bytes after the
/// root value are left for the caller to judge, unlike [`decode`], which
/// enforces that the whole buffer is consumed.
pub fn decode_prefix(input: &[u8]) -> Result<(Value, usize), DecodeError> {
    decode_prefix_with_options(input, DecodeOptions::default())
}

/// Like [`decode_prefix`], but with caller-supplied [`DecodeOptions`].
pub fn decode_prefix_with_options(
    input: &[u8],
    options: DecodeOptions,
) -> Result<(Value, usize), DecodeError> {
    let mut reader = Reader::new(input);
    let mut depth = Depth::new(options.max_depth);
    let value = decode_value(&mut reader, &mut depth)?;
    Ok((value, reader.position))
}

fn decode_value(reader: &mut Reader, depth: &mut Depth) -> Result<Value, DecodeError> {
    let tag_offset = reader.position;
    let tag = reader.read_u8()?;
    match tag {
        tags::NULL => Ok(Value::Null),
        tags::UINT8 => Ok(Value::UInt(reader.read_u8()? as u64)),
        tags::UINT16 => Ok(Value::UInt(reader.read_u16()? as u64)),
        tags::UINT32 => Ok(Value::UInt(reader.read_u32()? as u64)),
        tags::UINT64 => Ok(Value::UInt(reader.read_u64()?)),
        tags::INT8 => Ok(Value::Int(reader.read_i8()? as i64)),
        tags::INT16 => Ok(Value::Int(reader.read_i16()? as i64)),
        tags::INT32 => Ok(Value::Int(reader.read_i32()? as i64)),
        tags::INT64 => Ok(Value::Int(reader.read_i64()?)),
        tags::FLOAT64 => Ok(Value::Float(reader.read_f64()?)),
        tags::STRING16 => {
            let len = reader.read_u16()? as usize;
            decode_string_payload(reader, len, tag_offset).map(Value::String)
        }
        tags::STRING32 => {
            let len = reader.read_u32()? as usize;
            decode_string_payload(reader, len, tag_offset).map(Value::String)
        }
        tags::BYTES8 => {
            let len = reader.read_u8()? as usize;
            Ok(Value::Bytes(reader.advance(len)?.to_vec()))
        }
        tags::BYTES16 => {
            let len = reader.read_u16()? as usize;
            Ok(Value::Bytes(reader.advance(len)?.to_vec()))
        }
        tags::LIST16 => {
            let count = reader.read_u16()? as usize;
            decode_list_items(reader, depth, count).map(Value::List)
        }
        tags::MAP16 => {
            let count = reader.read_u16()? as usize;
            decode_map_entries(reader, depth, count).map(Value::Map)
        }
        tag if tags::is_fixstring(tag) => {
            let len = (tag - tags::FIXSTRING_MIN) as usize;
            decode_string_payload(reader, len, tag_offset).map(Value::String)
        }
        tag if tags::is_fixlist(tag) => {
            let count = (tag - tags::FIXLIST_MIN) as usize;
            decode_list_items(reader, depth, count).map(Value::List)
        }
        tag if tags::is_fixmap(tag) => {
            let count = (tag - tags::FIXMAP_MIN) as usize;
            decode_map_entries(reader, depth, count).map(Value::Map)
        }
        tag => Err(DecodeError::UnknownTag {
            tag,
            offset: tag_offset,
        }),
    }
}

fn decode_string_payload(
    reader: &mut Reader,
    len: usize,
    tag_offset: usize,
) -> Result<String, DecodeError> {
    let bytes = reader.advance(len)?;
    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|_| DecodeError::InvalidUtf8 { offset: tag_offset })
}

fn decode_list_items(
    reader: &mut Reader,
    depth: &mut Depth,
    count: usize,
) -> Result<Vec<Value>, DecodeError> {
    depth.enter()?;
    let mut items = Vec::with_capacity(count.min(1024));
    for _ in 0..count {
        items.push(decode_value(reader, depth)?);
    }
    depth.exit();
    Ok(items)
}

fn decode_map_entries(
    reader: &mut Reader,
    depth: &mut Depth,
    count: usize,
) -> Result<Vec<(String, Value)>, DecodeError> {
    depth.enter()?;
    let mut entries = Vec::with_capacity(count.min(1024));
    for _ in 0..count {
        let key_offset = reader.position;
        let key_tag = reader.read_u8()?;
        if !tags::is_string_tag(key_tag) {
            return Err(DecodeError::InvalidKey {
                tag: key_tag,
                offset: key_offset,
            });
        }
        let key = decode_key_payload(reader, key_tag, key_offset)?;
        let value = decode_value(reader, depth)?;
        entries.push((key, value));
    }
    depth.exit();
    Ok(entries)
}

fn decode_key_payload(
    reader: &mut Reader,
    key_tag: u8,
    key_offset: usize,
) -> Result<String, DecodeError> {
    let len = if tags::is_fixstring(key_tag) {
        (key_tag - tags::FIXSTRING_MIN) as usize
    } else if key_tag == tags::STRING16 {
        reader.read_u16()? as usize
    } else {
        reader.read_u32()? as usize
    };
    decode_string_payload(reader, len, key_offset)
}

// --- Borrowing decode path (ValueView) ---
//
// Mirrors decode_value/decode_list_items/decode_map_entries above
// exactly, but builds borrowed ValueView nodes instead of owned Value
// nodes. Kept as a parallel set of functions rather than parameterizing
// one generic tree walk over both representations.

/// Decodes one root [`ValueView`] from `input`, borrowing strings and
/// byte strings from `input` instead of allocating, with the default
/// [`DecodeOptions`]. Rejects any trailing bytes after the root value.
pub fn decode_view(input: &[u8]) -> Result<ValueView<'_>, DecodeError> {
    let (value, consumed) = decode_prefix_view(input)?;
    if consumed != input.len() {
        return Err(DecodeError::TrailingBytes {
            remaining: input.len() - consumed,
            total: input.len(),
        });
    }
    Ok(value)
}

/// Like [`decode_view`], but returns the number of bytes consumed and
/// leaves any trailing bytes to the caller.
pub fn decode_prefix_view(input: &[u8]) -> Result<(ValueView<'_>, usize), DecodeError> {
    let mut reader = Reader::new(input);
    let mut depth = Depth::new(DecodeOptions::default().max_depth);
    let value = decode_value_view(&mut reader, &mut depth)?;
    Ok((value, reader.position))
}

fn decode_value_view<'a>(
    reader: &mut Reader<'a>,
    depth: &mut Depth,
) -> Result<ValueView<'a>, DecodeError> {
    let tag_offset = reader.position;
    let tag = reader.read_u8()?;
    match tag {
        tags::NULL => Ok(ValueView::Null),
        tags::UINT8 => Ok(ValueView::UInt(reader.read_u8()? as u64)),
        tags::UINT16 => Ok(ValueView::UInt(reader.read_u16()? as u64)),
        tags::UINT32 => Ok(ValueView::UInt(reader.read_u32()? as u64)),
        tags::UINT64 => Ok(ValueView::UInt(reader.read_u64()?)),
        tags::INT8 => Ok(ValueView::Int(reader.read_i8()? as i64)),
        tags::INT16 => Ok(ValueView::Int(reader.read_i16()? as i64)),
        tags::INT32 => Ok(ValueView::Int(reader.read_i32()? as i64)),
        tags::INT64 => Ok(ValueView::Int(reader.read_i64()?)),
        tags::FLOAT64 => Ok(ValueView::Float(reader.read_f64()?)),
        tags::STRING16 => {
            let len = reader.read_u16()? as usize;
            decode_str_view(reader, len, tag_offset).map(ValueView::String)
        }
        tags::STRING32 => {
            let len = reader.read_u32()? as usize;
            decode_str_view(reader, len, tag_offset).map(ValueView::String)
        }
        tags::BYTES8 => {
            let len = reader.read_u8()? as usize;
            Ok(ValueView::Bytes(reader.advance(len)?))
        }
        tags::BYTES16 => {
            let len = reader.read_u16()? as usize;
            Ok(ValueView::Bytes(reader.advance(len)?))
        }
        tags::LIST16 => {
            let count = reader.read_u16()? as usize;
            decode_list_items_view(reader, depth, count).map(ValueView::List)
        }
        tags::MAP16 => {
            let count = reader.read_u16()? as usize;
            decode_map_entries_view(reader, depth, count).map(ValueView::Map)
        }
        tag if tags::is_fixstring(tag) => {
            let len = (tag - tags::FIXSTRING_MIN) as usize;
            decode_str_view(reader, len, tag_offset).map(ValueView::String)
        }
        tag if tags::is_fixlist(tag) => {
            let count = (tag - tags::FIXLIST_MIN) as usize;
            decode_list_items_view(reader, depth, count).map(ValueView::List)
        }
        tag if tags::is_fixmap(tag) => {
            let count = (tag - tags::FIXMAP_MIN) as usize;
            decode_map_entries_view(reader, depth, count).map(ValueView::Map)
        }
        tag => Err(DecodeError::UnknownTag {
            tag,
            offset: tag_offset,
        }),
    }
}

fn decode_str_view<'a>(
    reader: &mut Reader<'a>,
    len: usize,
    tag_offset: usize,
) -> Result<&'a str, DecodeError> {
    let bytes = reader.advance(len)?;
    std::str::from_utf8(bytes).map_err(|_| DecodeError::InvalidUtf8 { offset: tag_offset })
}

fn decode_list_items_view<'a>(
    reader: &mut Reader<'a>,
    depth: &mut Depth,
    count: usize,
) -> Result<Vec<ValueView<'a>>, DecodeError> {
    depth.enter()?;
    let mut items = Vec::with_capacity(count.min(1024));
    for _ in 0..count {
        items.push(decode_value_view(reader, depth)?);
    }
    depth.exit();
    Ok(items)
}

fn decode_map_entries_view<'a>(
    reader: &mut Reader<'a>,
    depth: &mut Depth,
    count: usize,
) -> Result<Vec<(&'a str, ValueView<'a>)>, DecodeError> {
    depth.enter()?;
    let mut entries = Vec::with_capacity(count.min(1024));
    for _ in 0..count {
        let key_offset = reader.position;
        let key_tag = reader.read_u8()?;
        if !tags::is_string_tag(key_tag) {
            return Err(DecodeError::InvalidKey {
                tag: key_tag,
                offset: key_offset,
            });
        }
        let len = if tags::is_fixstring(key_tag) {
            (key_tag - tags::FIXSTRING_MIN) as usize
        } else if key_tag == tags::STRING16 {
            reader.read_u16()? as usize
        } else {
            reader.read_u32()? as usize
        };
        let key = decode_str_view(reader, len, key_offset)?;
        let value = decode_value_view(reader, depth)?;
        entries.push((key, value));
    }
    depth.exit();
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_truncated() {
        assert!(matches!(
            decode(&[]),
            Err(DecodeError::Truncated { offset: 0 })
        ));
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert!(matches!(
            decode(&[0xff]),
            Err(DecodeError::UnknownTag { tag: 0xff, offset: 0 })
        ));
    }

    #[test]
    fn string16_with_short_payload_is_truncated() {
        let input = [0x41, 0x00, 0x05, b'H', b'i'];
        assert!(matches!(decode(&input), Err(DecodeError::Truncated { .. })));
    }

    #[test]
    fn invalid_utf8_string_payload() {
        let input = [0x32, 0xff, 0xfe, 0xfd];
        assert!(matches!(
            decode(&input),
            Err(DecodeError::InvalidUtf8 { .. })
        ));
    }

    #[test]
    fn trailing_byte_is_rejected() {
        let input = [0x00, 0x00];
        assert!(matches!(
            decode(&input),
            Err(DecodeError::TrailingBytes {
                remaining: 1,
                total: 2
            })
        ));
    }

    #[test]
    fn decode_prefix_allows_trailing_bytes() {
        let input = [0x00, 0xAB, 0xCD];
        let (value, consumed) = decode_prefix(&input).unwrap();
        assert_eq!(value, Value::Null);
        assert_eq!(consumed, 1);
    }

    #[test]
    fn map_with_non_string_key_is_rejected() {
        // FixMap, count=1, key tag 0x00 (Null) is not a string variant.
        let input = [0x71, 0x00];
        assert!(matches!(
            decode(&input),
            Err(DecodeError::InvalidKey { tag: 0x00, .. })
        ));
    }

    #[test]
    fn zero_length_fix_containers_decode_empty() {
        assert_eq!(decode(&[0x30]).unwrap(), Value::String(String::new()));
        assert_eq!(decode(&[0x50]).unwrap(), Value::List(vec![]));
        assert_eq!(decode(&[0x70]).unwrap(), Value::Map(vec![]));
    }

    #[test]
    fn depth_guard_rejects_deeply_nested_lists() {
        // 3 nested FixLists of length 1, checked against a max_depth of 2.
        let input = [0x51, 0x51, 0x51, 0x50];
        let options = DecodeOptions { max_depth: 2 };
        assert!(matches!(
            decode_with_options(&input, options),
            Err(DecodeError::DepthExceeded { max_depth: 2 })
        ));
    }

    #[test]
    fn view_borrows_from_input() {
        let bytes = encode_hi();
        let view = decode_view(&bytes).unwrap();
        match view {
            ValueView::String(s) => assert_eq!(s, "Hi"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    fn encode_hi() -> Vec<u8> {
        vec![0x32, b'H', b'i']
    }
}
