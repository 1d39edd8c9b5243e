//! The byte sink the encoder appends to: a thin wrapper around a
//! `Vec<u8>` with one write method per field width, all big-endian.

use byteorder::{BigEndian, ByteOrder};

#[derive(Default)]
pub(crate) struct Sink {
    output: Vec<u8>,
}

impl Sink {
    pub(crate) fn new() -> Sink {
        Sink { output: vec![] }
    }

    pub(crate) fn into_vec(self) -> Vec<u8> {
        self.output
    }

    pub(crate) fn write_tag(&mut self, tag: u8) {
        self.output.push(tag);
    }

    pub(crate) fn write_u8(&mut self, value: u8) {
        self.output.push(value);
    }

    pub(crate) fn write_u16(&mut self, value: u16) {
        let mut buf = [0u8; 2];
        BigEndian::write_u16(&mut buf, value);
        self.output.extend_from_slice(&buf);
    }

    pub(crate) fn write_u32(&mut self, value: u32) {
        let mut buf = [0u8; 4];
        BigEndian::write_u32(&mut buf, value);
        self.output.extend_from_slice(&buf);
    }

    pub(crate) fn write_u64(&mut self, value: u64) {
        let mut buf = [0u8; 8];
        BigEndian::write_u64(&mut buf, value);
        self.output.extend_from_slice(&buf);
    }

    pub(crate) fn write_i8(&mut self, value: i8) {
        self.output.push(value as u8);
    }

    pub(crate) fn write_i16(&mut self, value: i16) {
        let mut buf = [0u8; 2];
        BigEndian::write_i16(&mut buf, value);
        self.output.extend_from_slice(&buf);
    }

    pub(crate) fn write_i32(&mut self, value: i32) {
        let mut buf = [0u8; 4];
        BigEndian::write_i32(&mut buf, value);
        self.output.extend_from_slice(&buf);
    }

    pub(crate) fn write_i64(&mut self, value: i64) {
        let mut buf = [0u8; 8];
        BigEndian::write_i64(&mut buf, value);
        self.output.extend_from_slice(&buf);
    }

    pub(crate) fn write_f64(&mut self, value: f64) {
        let mut buf = [0u8; 8];
        BigEndian::write_f64(&mut buf, value);
        self.output.extend_from_slice(&buf);
    }

    pub(crate) fn write_bytes(&mut self, data: &[u8]) {
        self.output.extend_from_slice(data);
    }

    pub(crate) fn len(&self) -> usize {
        self.output.len()
    }

    /// Overwrites `len` bytes at `offset` with `data`. Used by the
    /// builder API to patch in a container's length once all of its
    /// elements have been written.
    pub(crate) fn patch(&mut self, offset: usize, data: &[u8]) {
        self.output[offset..offset + data.len()].copy_from_slice(data);
    }
}
