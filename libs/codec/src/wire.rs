//! # Wire Primitive Codec
//!
//! ## Purpose
//!
//! Lowest layer of the codec: cursor-based reads and appends of the wire
//! format's primitives. All integers are little-endian; strings and byte
//! buffers are `u32` length-prefixed and zero-padded to the 4-byte alignment
//! unit. Every read checks remaining length first and fails with
//! `TruncatedInput` carrying the byte offset; the reader never indexes past
//! the buffer and never panics on foreign input.
//!
//! Side effects are limited to the cursor position (reads) and the owned
//! output buffer (writes); no allocation happens beyond returned values.

use crate::constants::WIRE_ALIGN;
use crate::error::{CodecError, CodecResult};

/// Zero bytes needed after `len` payload bytes to reach the alignment unit
pub(crate) fn padding_for(len: usize) -> usize {
    (WIRE_ALIGN - len % WIRE_ALIGN) % WIRE_ALIGN
}

/// Cursor over an immutable input buffer
#[derive(Debug)]
pub struct WireReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current byte offset from the start of the buffer
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Bytes not yet consumed
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn take(&mut self, n: usize, context: &str) -> CodecResult<&'a [u8]> {
        if self.remaining() < n {
            return Err(CodecError::truncated(n, self.remaining(), self.pos, context));
        }
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    /// Exactly `n` raw bytes, no length prefix or padding
    pub fn read_raw(&mut self, n: usize, context: &str) -> CodecResult<&'a [u8]> {
        self.take(n, context)
    }

    pub fn read_u32(&mut self, context: &str) -> CodecResult<u32> {
        let b = self.take(4, context)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub fn read_i32(&mut self, context: &str) -> CodecResult<i32> {
        let b = self.take(4, context)?;
        Ok(i32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub fn read_i64(&mut self, context: &str) -> CodecResult<i64> {
        let b = self.take(8, context)?;
        Ok(i64::from_le_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]]))
    }

    pub fn read_u64(&mut self, context: &str) -> CodecResult<u64> {
        let b = self.take(8, context)?;
        Ok(u64::from_le_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]]))
    }

    pub fn read_f64(&mut self, context: &str) -> CodecResult<f64> {
        let b = self.take(8, context)?;
        Ok(f64::from_le_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]]))
    }

    /// Length-prefixed byte buffer, consuming the trailing alignment padding
    pub fn read_bytes(&mut self, context: &str) -> CodecResult<Vec<u8>> {
        let len = self.read_u32(context)? as usize;
        let data = self.take(len, context)?.to_vec();
        let pad = padding_for(len);
        self.take(pad, context)?;
        Ok(data)
    }

    /// Length-prefixed UTF-8 string
    pub fn read_string(&mut self, field: &str) -> CodecResult<String> {
        let start = self.pos;
        let data = self.read_bytes(field)?;
        String::from_utf8(data).map_err(|_| CodecError::MalformedString {
            field: field.to_owned(),
            offset: start,
        })
    }
}

/// Growable output buffer with the mirror write operations
#[derive(Debug, Default)]
pub struct WireWriter {
    buf: Vec<u8>,
}

impl WireWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes written so far
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn write_u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_i32(&mut self, value: i32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_i64(&mut self, value: i64) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_u64(&mut self, value: u64) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_f64(&mut self, value: f64) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Length prefix, payload, zero padding to the alignment unit
    pub fn write_bytes(&mut self, value: &[u8]) {
        self.write_u32(value.len() as u32);
        self.buf.extend_from_slice(value);
        for _ in 0..padding_for(value.len()) {
            self.buf.push(0);
        }
    }

    pub fn write_string(&mut self, value: &str) {
        self.write_bytes(value.as_bytes());
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_are_little_endian() {
        let mut w = WireWriter::new();
        w.write_u32(0xb070_0003);
        w.write_i64(-2);
        let buf = w.into_inner();
        assert_eq!(&buf[..4], &[0x03, 0x00, 0x70, 0xb0]);

        let mut r = WireReader::new(&buf);
        assert_eq!(r.read_u32("id").unwrap(), 0xb070_0003);
        assert_eq!(r.read_i64("n").unwrap(), -2);
        assert_eq!(r.remaining(), 0);
    }

    #[test]
    fn strings_pad_to_alignment_unit() {
        let mut w = WireWriter::new();
        w.write_string("hi");
        let buf = w.into_inner();
        // 4-byte length + 2 payload bytes + 2 zero pad bytes
        assert_eq!(buf, vec![2, 0, 0, 0, b'h', b'i', 0, 0]);

        let mut r = WireReader::new(&buf);
        assert_eq!(r.read_string("text").unwrap(), "hi");
        assert_eq!(r.remaining(), 0);
    }

    #[test]
    fn aligned_payload_takes_no_padding() {
        let mut w = WireWriter::new();
        w.write_bytes(&[1, 2, 3, 4]);
        assert_eq!(w.len(), 8);
    }

    #[test]
    fn truncated_read_reports_offset_and_need() {
        let mut r = WireReader::new(&[1, 2]);
        let err = r.read_u32("message_id").unwrap_err();
        assert_eq!(
            err,
            CodecError::truncated(4, 2, 0, "message_id")
        );
    }

    #[test]
    fn truncated_padding_is_an_error() {
        // Declares 2 payload bytes but omits the 2 padding bytes.
        let buf = [2u8, 0, 0, 0, b'h', b'i'];
        let mut r = WireReader::new(&buf);
        assert!(matches!(
            r.read_bytes("data").unwrap_err(),
            CodecError::TruncatedInput { offset: 6, .. }
        ));
    }

    #[test]
    fn invalid_utf8_is_malformed_string() {
        let mut w = WireWriter::new();
        w.write_bytes(&[0xff, 0xfe]);
        let buf = w.into_inner();
        let mut r = WireReader::new(&buf);
        assert!(matches!(
            r.read_string("text").unwrap_err(),
            CodecError::MalformedString { offset: 0, .. }
        ));
    }
}
