//! vlc-archiver-core: text codec built on a fixed prefix-free variable-length code
//!
//! This library maps characters to variable-length bit codes, packs the
//! resulting bitstream into 8-bit chunks written as hexadecimal text, and
//! reverses the process with a decoding tree built from the same table.
//!
//! # Architecture
//!
//! The crate is organised around clear module boundaries:
//! - `table`: the static character-to-code table
//! - `bitio`: low-level MSB-first bit writing/reading
//! - `chunks`: 8-bit chunks, hex rendering and packed text
//! - `tree`: prefix-free decoding tree
//! - `case`: `!`-escape case folding for uppercase letters
//! - `codec`: end-to-end encode/decode
//! - `stats`: sizes observed during a run
//!
//! # Example
//! ```
//! use vlc_archiver_core::Codec;
//!
//! let codec = Codec::standard().unwrap();
//! let packed = codec.encode("Test").unwrap();
//! assert_eq!(packed, "AA 41 88");
//! assert_eq!(codec.decode(&packed).unwrap(), "Test");
//! ```
//!
//! # Design Principles
//!
//! - **No panics**: all failures are structured errors
//! - **Immutable tables**: a table and its tree never change after construction
//! - **No hidden state**: every operation is a pure function of its input

pub mod bitio;
pub mod case;
pub mod chunks;
pub mod codec;
pub mod error;
pub mod stats;
pub mod table;
pub mod tree;

// Re-export commonly used types
pub use codec::Codec;
pub use error::{Error, Result};
pub use stats::PackStats;
pub use table::CodeTable;
pub use tree::DecodingTree;
