//! The codec: the pair of algorithms that map a [`Value`][crate::Value]
//! to a canonical byte sequence and back. Pure, synchronous, and
//! single-threaded throughout — no I/O, no shared mutable state, no
//! suspension points (see the crate-level docs for the concurrency
//! model).

mod decode;
mod encode;
mod sink;

pub use decode::{
    decode, decode_prefix, decode_prefix_view, decode_prefix_with_options, decode_view,
    decode_with_options, DecodeOptions,
};
pub use encode::encode;

pub(crate) use encode::{encode_bytes, encode_int, encode_string, encode_uint};
pub(crate) use sink::Sink;
