//! Error types for the VLC codec.
//!
//! All operations return structured errors rather than panicking.
//! Every failure is a deterministic function of the input, so nothing here
//! is retried; callers decide how to report it.

use thiserror::Error;

/// Top-level error type for all codec operations.
///
/// Each variant corresponds to a specific failure domain:
/// - Table: the code table is not a valid prefix-free code
/// - Encode: text contains a character the table cannot represent
/// - Pack: bitstream or hex chunk serialization problems
/// - Decode: the bit sequence does not walk the decoding tree cleanly
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Code table construction failed (programming error for the standard table)
    #[error("code table error: {0}")]
    Table(#[from] TableError),

    /// Text could not be mapped to codes
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),

    /// Bitstream chunking or hex conversion failed
    #[error("pack error: {0}")]
    Pack(#[from] PackError),

    /// Tree walk over the bit sequence failed
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}

/// Code table errors.
///
/// These are detected while building a decoding tree and together enforce
/// the prefix-free property.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A code contains something other than '0' or '1'
    #[error("invalid bit {bit:?} in code for {symbol:?}")]
    InvalidCodeBit { symbol: char, bit: char },

    /// A code is empty and would turn the root into a leaf
    #[error("empty code for {symbol:?}")]
    EmptyCode { symbol: char },

    /// One code is a proper prefix of another
    #[error("code conflict: {code:?} for {symbol:?} overlaps the code of {other:?}")]
    PrefixConflict {
        symbol: char,
        code: String,
        other: char,
    },

    /// Two characters share the same code
    #[error("duplicate code {code:?} for {symbol:?} and {other:?}")]
    DuplicateCode {
        symbol: char,
        code: String,
        other: char,
    },

    /// The same character was given more than one code
    #[error("character {0:?} appears more than once in the table")]
    DuplicateSymbol(char),
}

/// Encoding errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The character has no entry in the code table
    #[error("undefined character {symbol:?} (U+{code_point:04X})")]
    UnknownCharacter { symbol: char, code_point: u32 },
}

impl EncodeError {
    pub(crate) fn unknown(symbol: char) -> Self {
        EncodeError::UnknownCharacter {
            symbol,
            code_point: symbol as u32,
        }
    }
}

/// Bit packing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackError {
    /// The bitstream contains a character other than '0' or '1'
    #[error("invalid binary string: {found:?} at position {position}")]
    InvalidBitstream { found: char, position: usize },

    /// A packed token is not a two-digit hexadecimal byte
    #[error("invalid hex chunk {token:?}: {reason}")]
    InvalidHexChunk { token: String, reason: HexReason },
}

/// Why a hex token was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexReason {
    /// Token is not exactly two characters long
    WrongLength,
    /// Token contains a non-hexadecimal digit
    NotHex,
}

impl std::fmt::Display for HexReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HexReason::WrongLength => write!(f, "wrong size, want 2 characters"),
            HexReason::NotHex => write!(f, "not a hexadecimal value"),
        }
    }
}

/// Decoding tree walk errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// No code continues with this bit from the current node
    #[error("unexpected {bit} at position {position}")]
    UnexpectedBit { bit: char, position: usize },

    /// The bit sequence contains a character other than '0' or '1'
    #[error("invalid bit {found:?} at position {position}")]
    InvalidBit { found: char, position: usize },

    /// Bits ran out in the middle of a code
    #[error("incomplete encoding: {dangling} trailing bits do not form a code")]
    IncompleteEncoding { dangling: usize },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
