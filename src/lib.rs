//! Poculum is a self-describing binary serialization format, in the
//! family of MessagePack/CBOR, for a closed set of dynamically-typed
//! values. This crate is the codec: [`encode`] maps a [`Value`] to its
//! canonical byte sequence, and [`decode`] parses such a sequence back
//! into an equivalent value.
//!
//! ```rust
//! use poculum::{decode, encode, Value};
//!
//! let value = Value::map(vec![
//!     ("name".to_owned(), Value::string("Bananrama")),
//!     ("level".to_owned(), Value::UInt(20)),
//! ]);
//!
//! let bytes = encode(&value).unwrap();
//! let decoded = decode(&bytes).unwrap();
//! assert_eq!(decoded, value);
//! ```
//!
//! # Concurrency
//!
//! `encode` and `decode` are pure, synchronous, single-threaded
//! functions: no I/O, no shared mutable state, no suspension points.
//! Calls on disjoint inputs are trivially safe to run in parallel, since
//! each call owns its input view and its output buffer.
//!
//! # Non-goals
//!
//! No user-defined type tags, no schema evolution markers, no streaming
//! or incremental decode of a single value, no float widths other than
//! 64-bit IEEE-754, no integer widths beyond 64 bits, no map keys of
//! non-string type, no cyclic references. A single call encodes or
//! decodes exactly one root value from a contiguous byte buffer.

mod codec;
mod error;
mod select;
mod tags;
mod value;
mod writer;

pub mod hex;

pub use codec::{
    decode, decode_prefix, decode_prefix_view, decode_prefix_with_options, decode_view,
    decode_with_options, encode, DecodeOptions,
};
pub use error::{DecodeError, EncodeError};
pub use value::{Value, ValueView};
pub use writer::{ListBuilder, MapBuilder, Writer};
