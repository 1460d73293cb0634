//! Byte-aligned chunks and their hexadecimal text form.
//!
//! A code bitstream has arbitrary length. To store it as text it is cut into
//! 8-bit [`BinaryChunk`]s (the last one right-padded with zeros), and each
//! chunk is rendered as a two-digit uppercase [`HexChunk`]. The packed text
//! is the hex chunks joined by single spaces:
//!
//! ```text
//! bits:   10101011 00001000 1(0000000)
//! chunks: AB       08       80
//! packed: "AB 08 80"
//! ```
//!
//! No bit count or padding marker is stored, so the padding cannot be told
//! apart from data when the chunks are joined back together.

use crate::bitio::{BitReader, BitWriter};
use crate::error::{Error, HexReason, PackError, Result};
use std::fmt;

/// Number of bits in one chunk.
pub const CHUNK_SIZE: usize = 8;

/// Number of hex digits in one rendered chunk.
const HEX_CHUNK_SIZE: usize = 2;

/// Separator between hex chunks in packed text.
const HEX_CHUNK_SEP: &str = " ";

/// Exactly eight bits of the code bitstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BinaryChunk(u8);

impl BinaryChunk {
    pub fn new(value: u8) -> Self {
        Self(value)
    }

    /// The unsigned value of the chunk's bits.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Render as a two-digit uppercase hex chunk (5 -> "05").
    pub fn to_hex(self) -> HexChunk {
        HexChunk(format!("{:02X}", self.0))
    }
}

impl fmt::Display for BinaryChunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08b}", self.0)
    }
}

/// Two uppercase hexadecimal digits representing one [`BinaryChunk`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexChunk(String);

impl HexChunk {
    /// Validate a packed token.
    ///
    /// Lowercase digits are accepted and normalised to uppercase.
    ///
    /// # Errors
    /// `PackError::InvalidHexChunk` if the token is not exactly two
    /// hexadecimal digits.
    pub fn parse(token: &str) -> Result<Self> {
        let invalid = |reason| PackError::InvalidHexChunk {
            token: token.to_string(),
            reason,
        };

        if token.chars().count() != HEX_CHUNK_SIZE {
            return Err(invalid(HexReason::WrongLength).into());
        }
        if !token.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid(HexReason::NotHex).into());
        }

        Ok(Self(token.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert back to the chunk this token represents.
    ///
    /// # Errors
    /// `PackError::InvalidHexChunk` if the token is malformed.
    pub fn to_binary(&self) -> Result<BinaryChunk> {
        if self.0.len() != HEX_CHUNK_SIZE {
            return Err(PackError::InvalidHexChunk {
                token: self.0.clone(),
                reason: HexReason::WrongLength,
            }
            .into());
        }

        u8::from_str_radix(&self.0, 16)
            .map(BinaryChunk)
            .map_err(|_| {
                Error::from(PackError::InvalidHexChunk {
                    token: self.0.clone(),
                    reason: HexReason::NotHex,
                })
            })
    }
}

impl fmt::Display for HexChunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Split a bitstream into chunks, zero-padding the last one.
///
/// # Errors
/// `PackError::InvalidBitstream` if `bits` contains anything other than
/// '0' and '1'. Nothing is produced in that case.
pub fn encode_bitstream(bits: &str) -> Result<Vec<BinaryChunk>> {
    let mut writer = BitWriter::with_capacity(bits.len());

    for (position, c) in bits.chars().enumerate() {
        match c {
            '0' => writer.write_bit(false),
            '1' => writer.write_bit(true),
            found => return Err(PackError::InvalidBitstream { found, position }.into()),
        }
    }

    Ok(writer.finish().into_iter().map(BinaryChunk).collect())
}

/// Concatenate chunk bits back into a bitstream, preserving chunk order.
///
/// Padding bits added by [`encode_bitstream`] are included.
pub fn join(chunks: &[BinaryChunk]) -> String {
    let bytes: Vec<u8> = chunks.iter().map(|chunk| chunk.value()).collect();
    BitReader::new(&bytes)
        .map(|bit| if bit { '1' } else { '0' })
        .collect()
}

/// Render each chunk as two uppercase hex digits.
pub fn chunks_to_hex(chunks: &[BinaryChunk]) -> Vec<HexChunk> {
    chunks.iter().map(|chunk| chunk.to_hex()).collect()
}

/// Convert hex chunks back to binary chunks.
///
/// # Errors
/// `PackError::InvalidHexChunk` on the first malformed token.
pub fn hex_to_chunks(hex_chunks: &[HexChunk]) -> Result<Vec<BinaryChunk>> {
    hex_chunks.iter().map(HexChunk::to_binary).collect()
}

/// Join hex chunks with a single space. Empty input yields "".
pub fn serialize(hex_chunks: &[HexChunk]) -> String {
    hex_chunks
        .iter()
        .map(HexChunk::as_str)
        .collect::<Vec<_>>()
        .join(HEX_CHUNK_SEP)
}

/// Split packed text on whitespace runs and validate every token.
///
/// # Errors
/// `PackError::InvalidHexChunk` on the first malformed token.
pub fn deserialize(packed: &str) -> Result<Vec<HexChunk>> {
    packed.split_whitespace().map(HexChunk::parse).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk_strings(chunks: &[BinaryChunk]) -> Vec<String> {
        chunks.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_split_exact_chunks() {
        let chunks = encode_bitstream("0000000111111111").unwrap();
        assert_eq!(chunk_strings(&chunks), vec!["00000001", "11111111"]);
    }

    #[test]
    fn test_split_pads_last_chunk() {
        let chunks = encode_bitstream("10101011000010001").unwrap();
        assert_eq!(
            chunk_strings(&chunks),
            vec!["10101011", "00001000", "10000000"]
        );
    }

    #[test]
    fn test_split_empty() {
        assert!(encode_bitstream("").unwrap().is_empty());
    }

    #[test]
    fn test_split_rejects_non_binary() {
        let err = encode_bitstream("0102").unwrap_err();
        assert_eq!(
            err,
            Error::Pack(PackError::InvalidBitstream {
                found: '2',
                position: 2
            })
        );
    }

    #[test]
    fn test_hex_rendering() {
        assert_eq!(BinaryChunk::new(5).to_hex().as_str(), "05");
        assert_eq!(BinaryChunk::new(255).to_hex().as_str(), "FF");
        assert_eq!(BinaryChunk::new(0xab).to_hex().as_str(), "AB");
    }

    #[test]
    fn test_hex_round_trip_all_bytes() {
        for value in 0..=255u8 {
            let chunks = vec![BinaryChunk::new(value)];
            let hex = chunks_to_hex(&chunks);
            assert_eq!(hex[0].as_str().len(), 2);
            assert_eq!(hex[0].as_str(), hex[0].as_str().to_ascii_uppercase());
            assert_eq!(hex_to_chunks(&hex).unwrap(), chunks);
        }
    }

    #[test]
    fn test_join_preserves_order_and_padding() {
        let chunks = [BinaryChunk::new(0xAB), BinaryChunk::new(0x80)];
        assert_eq!(join(&chunks), "1010101110000000");
        assert_eq!(join(&[]), "");
    }

    #[test]
    fn test_serialize() {
        let hex = chunks_to_hex(&[BinaryChunk::new(0xA1), BinaryChunk::new(0xFF)]);
        assert_eq!(serialize(&hex), "A1 FF");
        assert_eq!(serialize(&hex[..1]), "A1");
        assert_eq!(serialize(&[]), "");
    }

    #[test]
    fn test_deserialize_whitespace_runs() {
        let hex = deserialize("  a1\tFF\n\n05 ").unwrap();
        let tokens: Vec<_> = hex.iter().map(HexChunk::as_str).collect();
        assert_eq!(tokens, vec!["A1", "FF", "05"]);
        assert!(deserialize("").unwrap().is_empty());
        assert!(deserialize("   ").unwrap().is_empty());
    }

    #[test]
    fn test_deserialize_wrong_length() {
        for token in ["A", "ABC", "0FF"] {
            match deserialize(token).unwrap_err() {
                Error::Pack(PackError::InvalidHexChunk { reason, .. }) => {
                    assert_eq!(reason, HexReason::WrongLength)
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn test_deserialize_not_hex() {
        let err = deserialize("AB GZ").unwrap_err();
        assert_eq!(
            err,
            Error::Pack(PackError::InvalidHexChunk {
                token: "GZ".to_string(),
                reason: HexReason::NotHex
            })
        );
        // Sign prefixes are not hex digits
        assert!(deserialize("+F").is_err());
    }
}
