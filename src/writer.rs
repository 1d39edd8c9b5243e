//! Builder objects for streaming a value out field-by-field, without
//! building an intermediate [`Value`][crate::Value] tree first: very few
//! allocations beyond the output buffer itself.
//!
//! Scalars know their length as soon as they're given a value, so they
//! still pick the narrowest size class the way [`encode`][crate::encode]
//! does. `List`/`Map` builders don't know their element count until
//! [`finish`][ListBuilder::finish] is called, so — unlike `encode`,
//! which always picks the canonical Fix* tag when the count allows it —
//! they commit up front to the wide `List16`/`Map16` tag and a
//! reserved count field that gets patched in on `finish`. Callers who
//! need the canonical narrowest encoding should build a
//! [`Value`][crate::Value] and call [`encode`][crate::encode] instead.

use crate::codec::{encode_bytes, encode_int, encode_string, encode_uint, Sink};
use crate::error::EncodeError;
use crate::tags;
use std::mem;

/// Entry point for the streaming builder API. Produces exactly one root
/// value; there is no framing to set up first (see the crate-level docs
/// on the wire format having no magic bytes or version prefix).
#[derive(Default)]
pub struct Writer {
    sink: Sink,
}

impl Writer {
    pub fn new() -> Writer {
        Writer { sink: Sink::new() }
    }

    pub fn null(mut self) -> Vec<u8> {
        self.sink.write_tag(tags::NULL);
        self.sink.into_vec()
    }

    pub fn bool(mut self, value: bool) -> Vec<u8> {
        self.sink.write_tag(tags::UINT8);
        self.sink.write_u8(if value { 1 } else { 0 });
        self.sink.into_vec()
    }

    pub fn uint(mut self, value: u64) -> Vec<u8> {
        encode_uint(value, &mut self.sink);
        self.sink.into_vec()
    }

    pub fn int(mut self, value: i64) -> Result<Vec<u8>, EncodeError> {
        encode_int(value, &mut self.sink)?;
        Ok(self.sink.into_vec())
    }

    pub fn float(mut self, value: f64) -> Vec<u8> {
        self.sink.write_tag(tags::FLOAT64);
        self.sink.write_f64(value);
        self.sink.into_vec()
    }

    pub fn string(mut self, value: &str) -> Result<Vec<u8>, EncodeError> {
        encode_string(value, &mut self.sink)?;
        Ok(self.sink.into_vec())
    }

    pub fn bytes(mut self, data: &[u8]) -> Result<Vec<u8>, EncodeError> {
        encode_bytes(data, &mut self.sink)?;
        Ok(self.sink.into_vec())
    }

    /// Starts the root value as a list. `finish()` must be called on the
    /// returned builder before its bytes can be retrieved.
    pub fn list(self) -> ListBuilder {
        ListBuilder::new(self.sink)
    }

    /// Starts the root value as a map. `finish()` must be called on the
    /// returned builder before its bytes can be retrieved.
    pub fn map(self) -> MapBuilder {
        MapBuilder::new(self.sink)
    }
}

/// A builder for a List value, appending elements one at a time.
///
/// # Panics
///
/// Panics on drop if [`finish`][ListBuilder::finish] was not called.
pub struct ListBuilder {
    sink: Sink,
    count_offset: usize,
    count: u32,
    done: bool,
}

impl ListBuilder {
    fn new(mut sink: Sink) -> ListBuilder {
        sink.write_tag(tags::LIST16);
        let count_offset = sink.len();
        sink.write_u16(0);
        ListBuilder {
            sink,
            count_offset,
            count: 0,
            done: false,
        }
    }

    pub fn push_null(&mut self) -> &mut Self {
        self.sink.write_tag(tags::NULL);
        self.count += 1;
        self
    }

    pub fn push_bool(&mut self, value: bool) -> &mut Self {
        self.sink.write_tag(tags::UINT8);
        self.sink.write_u8(if value { 1 } else { 0 });
        self.count += 1;
        self
    }

    pub fn push_uint(&mut self, value: u64) -> &mut Self {
        encode_uint(value, &mut self.sink);
        self.count += 1;
        self
    }

    pub fn push_int(&mut self, value: i64) -> Result<&mut Self, EncodeError> {
        encode_int(value, &mut self.sink)?;
        self.count += 1;
        Ok(self)
    }

    pub fn push_float(&mut self, value: f64) -> &mut Self {
        self.sink.write_tag(tags::FLOAT64);
        self.sink.write_f64(value);
        self.count += 1;
        self
    }

    pub fn push_string(&mut self, value: &str) -> Result<&mut Self, EncodeError> {
        encode_string(value, &mut self.sink)?;
        self.count += 1;
        Ok(self)
    }

    pub fn push_bytes(&mut self, data: &[u8]) -> Result<&mut Self, EncodeError> {
        encode_bytes(data, &mut self.sink)?;
        self.count += 1;
        Ok(self)
    }

    /// Appends a nested list, built up by `build`.
    pub fn push_list(&mut self, build: impl FnOnce(&mut ListBuilder)) {
        self.count += 1;
        let sink = mem::take(&mut self.sink);
        let mut child = ListBuilder::new(sink);
        build(&mut child);
        self.sink = child.finish_into_sink();
    }

    /// Appends a nested map, built up by `build`.
    pub fn push_map(&mut self, build: impl FnOnce(&mut MapBuilder)) {
        self.count += 1;
        let sink = mem::take(&mut self.sink);
        let mut child = MapBuilder::new(sink);
        build(&mut child);
        self.sink = child.finish_into_sink();
    }

    fn finish_into_sink(mut self) -> Sink {
        self.done = true;
        let count_bytes = (self.count as u16).to_be_bytes();
        self.sink.patch(self.count_offset, &count_bytes);
        mem::take(&mut self.sink)
    }

    /// Finalizes the list and returns the encoded bytes.
    pub fn finish(self) -> Vec<u8> {
        self.finish_into_sink().into_vec()
    }
}

impl Drop for ListBuilder {
    fn drop(&mut self) {
        if !self.done && !std::thread::panicking() {
            panic!("ListBuilder::finish() must be called before it goes out of scope");
        }
    }
}

/// A builder for a Map value, appending (key, value) entries one at a
/// time, in the order they're added.
///
/// # Panics
///
/// Panics on drop if [`finish`][MapBuilder::finish] was not called.
pub struct MapBuilder {
    sink: Sink,
    count_offset: usize,
    count: u32,
    done: bool,
}

impl MapBuilder {
    fn new(mut sink: Sink) -> MapBuilder {
        sink.write_tag(tags::MAP16);
        let count_offset = sink.len();
        sink.write_u16(0);
        MapBuilder {
            sink,
            count_offset,
            count: 0,
            done: false,
        }
    }

    pub fn field_null(&mut self, key: &str) -> Result<&mut Self, EncodeError> {
        encode_string(key, &mut self.sink)?;
        self.sink.write_tag(tags::NULL);
        self.count += 1;
        Ok(self)
    }

    pub fn field_bool(&mut self, key: &str, value: bool) -> Result<&mut Self, EncodeError> {
        encode_string(key, &mut self.sink)?;
        self.sink.write_tag(tags::UINT8);
        self.sink.write_u8(if value { 1 } else { 0 });
        self.count += 1;
        Ok(self)
    }

    pub fn field_uint(&mut self, key: &str, value: u64) -> Result<&mut Self, EncodeError> {
        encode_string(key, &mut self.sink)?;
        encode_uint(value, &mut self.sink);
        self.count += 1;
        Ok(self)
    }

    pub fn field_int(&mut self, key: &str, value: i64) -> Result<&mut Self, EncodeError> {
        encode_string(key, &mut self.sink)?;
        encode_int(value, &mut self.sink)?;
        self.count += 1;
        Ok(self)
    }

    pub fn field_float(&mut self, key: &str, value: f64) -> Result<&mut Self, EncodeError> {
        encode_string(key, &mut self.sink)?;
        self.sink.write_tag(tags::FLOAT64);
        self.sink.write_f64(value);
        self.count += 1;
        Ok(self)
    }

    pub fn field_string(&mut self, key: &str, value: &str) -> Result<&mut Self, EncodeError> {
        encode_string(key, &mut self.sink)?;
        encode_string(value, &mut self.sink)?;
        self.count += 1;
        Ok(self)
    }

    pub fn field_bytes(&mut self, key: &str, data: &[u8]) -> Result<&mut Self, EncodeError> {
        encode_string(key, &mut self.sink)?;
        encode_bytes(data, &mut self.sink)?;
        self.count += 1;
        Ok(self)
    }

    /// Adds a field whose value is a nested list, built up by `build`.
    pub fn field_list(
        &mut self,
        key: &str,
        build: impl FnOnce(&mut ListBuilder),
    ) -> Result<(), EncodeError> {
        encode_string(key, &mut self.sink)?;
        self.count += 1;
        let sink = mem::take(&mut self.sink);
        let mut child = ListBuilder::new(sink);
        build(&mut child);
        self.sink = child.finish_into_sink();
        Ok(())
    }

    /// Adds a field whose value is a nested map, built up by `build`.
    pub fn field_map(
        &mut self,
        key: &str,
        build: impl FnOnce(&mut MapBuilder),
    ) -> Result<(), EncodeError> {
        encode_string(key, &mut self.sink)?;
        self.count += 1;
        let sink = mem::take(&mut self.sink);
        let mut child = MapBuilder::new(sink);
        build(&mut child);
        self.sink = child.finish_into_sink();
        Ok(())
    }

    fn finish_into_sink(mut self) -> Sink {
        self.done = true;
        let count_bytes = (self.count as u16).to_be_bytes();
        self.sink.patch(self.count_offset, &count_bytes);
        mem::take(&mut self.sink)
    }

    /// Finalizes the map and returns the encoded bytes.
    pub fn finish(self) -> Vec<u8> {
        self.finish_into_sink().into_vec()
    }
}

impl Drop for MapBuilder {
    fn drop(&mut self) {
        if !self.done && !std::thread::panicking() {
            panic!("MapBuilder::finish() must be called before it goes out of scope");
        }
    }
}
