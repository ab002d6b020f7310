//! Bounds-checked sequential reader over an instruction stream.

/// A cursor over a borrowed byte buffer.
///
/// Every read either advances the position by exactly the requested
/// width or returns `None` without advancing; the position never
/// passes the end of the buffer.
#[derive(Debug)]
pub struct ByteCursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    /// Creates a cursor at the start of `bytes`.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Reads one byte, advancing by 1.
    pub fn read_u8(&mut self) -> Option<u8> {
        let byte = *self.bytes.get(self.pos)?;
        self.pos += 1;
        Some(byte)
    }

    /// Reads two bytes as a little-endian u16, advancing by 2.
    ///
    /// With fewer than two bytes left this returns `None` and does not
    /// advance; there are no partial reads.
    pub fn read_u16_le(&mut self) -> Option<u16> {
        if self.bytes.len() - self.pos < 2 {
            return None;
        }
        let value = u16::from_le_bytes([self.bytes[self.pos], self.bytes[self.pos + 1]]);
        self.pos += 2;
        Some(value)
    }

    /// Returns true if at least one byte remains.
    pub fn has_remaining(&self) -> bool {
        self.pos < self.bytes.len()
    }

    /// Current read position as a byte offset from the buffer start.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of bytes left before the end bound.
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }
}
