//! The size-class selector: deterministic rules for choosing the
//! narrowest legal tag for a given value's magnitude or length. Pure
//! functions, no I/O; every one either returns a tag or
//! [`EncodeError::OutOfRange`].

use crate::error::EncodeError;
use crate::tags;

/// Picks the narrowest unsigned integer tag that can hold `value`.
pub fn select_uint_tag(value: u64) -> u8 {
    if value <= 0xFF {
        tags::UINT8
    } else if value <= 0xFFFF {
        tags::UINT16
    } else if value <= 0xFFFF_FFFF {
        tags::UINT32
    } else {
        tags::UINT64
    }
}

/// Picks the narrowest signed integer tag that can hold `value`.
/// `value` must be negative; callers route non-negative integers through
/// [`select_uint_tag`] instead.
pub fn select_int_tag(value: i64) -> u8 {
    if value >= -128 {
        tags::INT8
    } else if value >= -32_768 {
        tags::INT16
    } else if value >= -(1i64 << 31) {
        tags::INT32
    } else {
        tags::INT64
    }
}

/// Picks the narrowest string tag for a UTF-8 byte length `len`, or
/// `OutOfRange` if no size class can hold it.
pub fn select_string_tag(len: usize) -> Result<u8, EncodeError> {
    if len <= tags::FIX_MAX_LEN {
        Ok(tags::FIXSTRING_MIN + len as u8)
    } else if len <= tags::U16_MAX_LEN {
        Ok(tags::STRING16)
    } else if len <= tags::U32_MAX_LEN {
        Ok(tags::STRING32)
    } else {
        Err(EncodeError::OutOfRange {
            reason: "string length exceeds 2^32-1",
        })
    }
}

/// Picks the narrowest list tag for an element count `count`. List32 is
/// reserved but never emitted (see the tag table notes), so counts above
/// `0xFFFF` are out of range.
pub fn select_list_tag(count: usize) -> Result<u8, EncodeError> {
    select_container_tag(count, tags::FIXLIST_MIN, tags::LIST16, "list")
}

/// Picks the narrowest map tag for an entry count `count`. Map32 is
/// reserved but never emitted, so counts above `0xFFFF` are out of
/// range.
pub fn select_map_tag(count: usize) -> Result<u8, EncodeError> {
    select_container_tag(count, tags::FIXMAP_MIN, tags::MAP16, "map")
}

fn select_container_tag(
    count: usize,
    fix_min: u8,
    wide16: u8,
    family: &'static str,
) -> Result<u8, EncodeError> {
    if count <= tags::FIX_MAX_LEN {
        Ok(fix_min + count as u8)
    } else if count <= tags::U16_MAX_LEN {
        Ok(wide16)
    } else {
        let _ = family;
        Err(EncodeError::OutOfRange {
            reason: "container length exceeds 0xFFFF (List32/Map32 are reserved, not emitted)",
        })
    }
}

/// Picks the narrowest bytes tag for a byte length `len`.
pub fn select_bytes_tag(len: usize) -> Result<u8, EncodeError> {
    if len <= tags::U8_MAX_LEN {
        Ok(tags::BYTES8)
    } else if len <= tags::U16_MAX_LEN {
        Ok(tags::BYTES16)
    } else {
        Err(EncodeError::OutOfRange {
            reason: "byte string length exceeds 0xFFFF",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uint_boundaries() {
        assert_eq!(select_uint_tag(0), tags::UINT8);
        assert_eq!(select_uint_tag(0xFF), tags::UINT8);
        assert_eq!(select_uint_tag(0x100), tags::UINT16);
        assert_eq!(select_uint_tag(0xFFFF), tags::UINT16);
        assert_eq!(select_uint_tag(0x1_0000), tags::UINT32);
        assert_eq!(select_uint_tag(0xFFFF_FFFF), tags::UINT32);
        assert_eq!(select_uint_tag(0x1_0000_0000), tags::UINT64);
        assert_eq!(select_uint_tag(u64::MAX), tags::UINT64);
    }

    #[test]
    fn int_boundaries() {
        assert_eq!(select_int_tag(-1), tags::INT8);
        assert_eq!(select_int_tag(-128), tags::INT8);
        assert_eq!(select_int_tag(-129), tags::INT16);
        assert_eq!(select_int_tag(-32_768), tags::INT16);
        assert_eq!(select_int_tag(-32_769), tags::INT32);
        assert_eq!(select_int_tag(-(1i64 << 31)), tags::INT32);
        assert_eq!(select_int_tag(-(1i64 << 31) - 1), tags::INT64);
        assert_eq!(select_int_tag(i64::MIN), tags::INT64);
    }

    #[test]
    fn string_boundaries() {
        assert_eq!(select_string_tag(0).unwrap(), tags::FIXSTRING_MIN);
        assert_eq!(select_string_tag(15).unwrap(), tags::FIXSTRING_MIN + 15);
        assert_eq!(select_string_tag(16).unwrap(), tags::STRING16);
        assert_eq!(select_string_tag(0xFFFF).unwrap(), tags::STRING16);
        assert_eq!(select_string_tag(0x1_0000).unwrap(), tags::STRING32);
    }

    #[test]
    fn list_and_map_boundaries() {
        assert_eq!(select_list_tag(0).unwrap(), tags::FIXLIST_MIN);
        assert_eq!(select_list_tag(15).unwrap(), tags::FIXLIST_MIN + 15);
        assert_eq!(select_list_tag(16).unwrap(), tags::LIST16);
        assert_eq!(select_list_tag(0xFFFF).unwrap(), tags::LIST16);
        assert!(select_list_tag(0x1_0000).is_err());

        assert_eq!(select_map_tag(0).unwrap(), tags::FIXMAP_MIN);
        assert_eq!(select_map_tag(1).unwrap(), tags::FIXMAP_MIN + 1);
        assert_eq!(select_map_tag(16).unwrap(), tags::MAP16);
        assert!(select_map_tag(0x1_0001).is_err());
    }

    #[test]
    fn bytes_boundaries() {
        assert_eq!(select_bytes_tag(0).unwrap(), tags::BYTES8);
        assert_eq!(select_bytes_tag(0xFF).unwrap(), tags::BYTES8);
        assert_eq!(select_bytes_tag(0x100).unwrap(), tags::BYTES16);
        assert_eq!(select_bytes_tag(0xFFFF).unwrap(), tags::BYTES16);
        assert!(select_bytes_tag(0x1_0000).is_err());
    }
}
