//! Bit-level I/O for packing code bits into bytes.
//!
//! This module provides BitWriter and BitReader for moving between a logical
//! bit sequence and byte-aligned storage. Both operate in MSB-first order:
//! the first bit of the sequence becomes the most significant bit of the
//! first byte.
//!
//! # Padding Rules
//! - BitWriter: pads the final incomplete byte with trailing zeros
//! - BitReader: yields every bit of every byte, padding included (the packed
//!   form records no bit count, so padding is indistinguishable from data)
//!
//! # Example
//! ```
//! use vlc_archiver_core::bitio::{BitReader, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! for bit in [true, false, true, true, true] {
//!     writer.write_bit(bit);
//! }
//! // Total: 10111 -> padded to 10111000
//! let bytes = writer.finish();
//! assert_eq!(bytes, vec![0b1011_1000]);
//!
//! let bits: Vec<bool> = BitReader::new(&bytes).collect();
//! assert_eq!(bits.len(), 8);
//! assert!(bits[0]);
//! ```

/// Writes bits MSB-first into a byte buffer.
///
/// # Invariants
/// - `bit_count` is always < 8
#[derive(Debug, Clone, Default)]
pub struct BitWriter {
    /// Completed bytes
    bytes: Vec<u8>,
    /// Accumulator for the current partial byte (MSB-aligned)
    bit_buffer: u8,
    /// Number of bits in bit_buffer (0-7)
    bit_count: u8,
}

impl BitWriter {
    /// Create a new BitWriter with empty output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with room for `bits` bits.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            bit_buffer: 0,
            bit_count: 0,
        }
    }

    /// Append a single bit.
    pub fn write_bit(&mut self, bit: bool) {
        if bit {
            self.bit_buffer |= 0x80 >> self.bit_count;
        }
        self.bit_count += 1;

        if self.bit_count == 8 {
            self.bytes.push(self.bit_buffer);
            self.bit_buffer = 0;
            self.bit_count = 0;
        }
    }

    /// Finish writing and return the output bytes.
    ///
    /// The final partial byte, if any, is already zero in its unwritten
    /// positions, so it is pushed as is.
    pub fn finish(mut self) -> Vec<u8> {
        if self.bit_count > 0 {
            self.bytes.push(self.bit_buffer);
        }
        self.bytes
    }
}

/// Reads bits MSB-first from a byte buffer.
///
/// # Invariants
/// - `bit_position` never exceeds `data.len() * 8`
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    /// Source data
    data: &'a [u8],
    /// Current bit position (0 = MSB of first byte)
    bit_position: usize,
}

impl<'a> BitReader<'a> {
    /// Create a new BitReader for the given data.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            bit_position: 0,
        }
    }

    /// Read a single bit, or `None` at the end of the buffer.
    pub fn read_bit(&mut self) -> Option<bool> {
        let byte = *self.data.get(self.bit_position / 8)?;
        let bit = byte & (0x80 >> (self.bit_position % 8)) != 0;
        self.bit_position += 1;
        Some(bit)
    }

    /// Return the number of bits remaining in the buffer.
    pub fn bits_remaining(&self) -> usize {
        self.data.len() * 8 - self.bit_position
    }
}

impl Iterator for BitReader<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        self.read_bit()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bits_remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BitReader<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_all(bits: &[u8]) -> BitWriter {
        let mut writer = BitWriter::new();
        for &bit in bits {
            writer.write_bit(bit == 1);
        }
        writer
    }

    #[test]
    fn test_write_single_byte() {
        let writer = write_all(&[1, 0, 1, 1, 0, 0, 1, 1]);
        assert_eq!(writer.finish(), vec![0b10110011]);
    }

    #[test]
    fn test_padding() {
        let writer = write_all(&[1]);

        // Should be padded to 10000000
        assert_eq!(writer.finish(), vec![0b10000000]);
    }

    #[test]
    fn test_multi_byte() {
        let writer = write_all(&[1, 0, 1, 0, 1, 0, 1, 1, 1, 1, 1, 1]);
        assert_eq!(writer.finish(), vec![0b10101011, 0b11110000]);
    }

    #[test]
    fn test_empty_writer() {
        let writer = BitWriter::new();
        assert!(writer.finish().is_empty());
    }

    #[test]
    fn test_read_bits_in_order() {
        let data = [0b10110010];
        let bits: Vec<bool> = BitReader::new(&data).collect();
        assert_eq!(bits, vec![true, false, true, true, false, false, true, false]);
    }

    #[test]
    fn test_read_past_end() {
        let data = [0xFF];
        let mut reader = BitReader::new(&data);
        for _ in 0..8 {
            assert_eq!(reader.read_bit(), Some(true));
        }
        assert_eq!(reader.read_bit(), None);
        assert_eq!(reader.bits_remaining(), 0);
    }

    #[test]
    fn test_bits_remaining() {
        let data = [0xFF, 0x00];
        let mut reader = BitReader::new(&data);

        assert_eq!(reader.bits_remaining(), 16);
        reader.by_ref().take(5).for_each(drop);
        assert_eq!(reader.bits_remaining(), 11);
        assert_eq!(reader.len(), 11);
    }
}
