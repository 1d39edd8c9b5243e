//! The tag table: one byte per value header, plus the size-class ranges
//! each tag family spans. Pure data, no behavior.
//!
//! Values in the `0x30..=0x3F`, `0x50..=0x5F`, and `0x70..=0x7F` ranges
//! pack a small length into the tag's low nibble ("Fix*" tags); all other
//! tags are single fixed bytes followed by an explicit length/width
//! field.

pub const NULL: u8 = 0x00;
pub const UINT8: u8 = 0x01;
pub const UINT16: u8 = 0x02;
pub const UINT32: u8 = 0x03;
pub const UINT64: u8 = 0x04;

pub const INT8: u8 = 0x11;
pub const INT16: u8 = 0x12;
pub const INT32: u8 = 0x13;
pub const INT64: u8 = 0x14;

pub const FLOAT64: u8 = 0x22;

pub const FIXSTRING_MIN: u8 = 0x30;
pub const FIXSTRING_MAX: u8 = 0x3F;
pub const STRING16: u8 = 0x41;
pub const STRING32: u8 = 0x42;

pub const FIXLIST_MIN: u8 = 0x50;
pub const FIXLIST_MAX: u8 = 0x5F;
pub const LIST16: u8 = 0x61;

pub const FIXMAP_MIN: u8 = 0x70;
pub const FIXMAP_MAX: u8 = 0x7F;
pub const MAP16: u8 = 0x81;

pub const BYTES8: u8 = 0x91;
pub const BYTES16: u8 = 0x92;

/// Largest length a Fix* tag's low nibble can carry directly.
pub const FIX_MAX_LEN: usize = 15;
pub const U16_MAX_LEN: usize = 0xFFFF;
pub const U32_MAX_LEN: usize = u32::MAX as usize;
pub const U8_MAX_LEN: usize = 0xFF;

/// Returns true if `tag` falls in the FixString range.
pub fn is_fixstring(tag: u8) -> bool {
    (FIXSTRING_MIN..=FIXSTRING_MAX).contains(&tag)
}

/// Returns true if `tag` falls in the FixList range.
pub fn is_fixlist(tag: u8) -> bool {
    (FIXLIST_MIN..=FIXLIST_MAX).contains(&tag)
}

/// Returns true if `tag` falls in the FixMap range.
pub fn is_fixmap(tag: u8) -> bool {
    (FIXMAP_MIN..=FIXMAP_MAX).contains(&tag)
}

/// Returns true if `tag` is any of the three String size classes.
pub fn is_string_tag(tag: u8) -> bool {
    is_fixstring(tag) || tag == STRING16 || tag == STRING32
}
