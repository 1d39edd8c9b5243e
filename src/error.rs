//! Error taxonomy for the encoder and decoder. Every decode failure
//! aborts the current call; none are retried, and no partial value tree
//! or partial byte sequence is ever returned alongside an error.

use thiserror::Error;

/// Failures which can occur while encoding a [`Value`][crate::Value] or
/// while using the low-level [`Writer`][crate::Writer] builder API.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EncodeError {
    /// The value is outside the nine supported variants. The encoder
    /// never attempts a best-effort conversion of an unsupported value.
    ///
    /// `Value` is a closed Rust enum, so no `&Value` can actually hold an
    /// unsupported variant; this condition cannot be constructed by
    /// `encode`. It is kept in the taxonomy for parity with the error
    /// conditions named for the value model this format describes, where
    /// the equivalent condition is reachable for a dynamically-typed
    /// input.
    #[error("unsupported value type")]
    UnsupportedType,

    /// An integer magnitude, or a container/string/byte length, exceeds
    /// what any size class for its family can encode.
    #[error("value out of range for any size class: {reason}")]
    OutOfRange { reason: &'static str },

    /// A `Map` entry had a non-string key.
    #[error("map key is not a string")]
    InvalidKey,
}

/// Failures which can occur while decoding a byte sequence into a
/// [`Value`][crate::Value] or [`ValueView`][crate::ValueView].
///
/// The cursor position at failure is included for diagnostics, but is
/// not part of the decoder's contract — callers should not match on
/// exact offsets to drive control flow.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    /// The cursor would have to advance past the end of the input to
    /// satisfy the current read.
    #[error("truncated input at offset {offset}")]
    Truncated { offset: usize },

    /// A tag byte was encountered that has no defined meaning in the tag
    /// table.
    #[error("unknown tag 0x{tag:02x} at offset {offset}")]
    UnknownTag { tag: u8, offset: usize },

    /// A String payload's bytes were not valid UTF-8.
    #[error("invalid UTF-8 in string payload at offset {offset}")]
    InvalidUtf8 { offset: usize },

    /// A Map entry's key tag was not one of the three String size
    /// classes.
    #[error("map key at offset {offset} is not a string (tag 0x{tag:02x})")]
    InvalidKey { tag: u8, offset: usize },

    /// The root value was fully decoded, but the input buffer was not
    /// fully consumed.
    #[error("trailing bytes after root value: {remaining} unread of {total}")]
    TrailingBytes { remaining: usize, total: usize },

    /// Recursive descent exceeded the configured maximum nesting depth.
    /// Not part of the wire contract; a defense against stack
    /// exhaustion on adversarial input (see [`DecodeOptions`][crate::DecodeOptions]).
    #[error("nesting depth exceeded the configured maximum of {max_depth}")]
    DepthExceeded { max_depth: u32 },
}
