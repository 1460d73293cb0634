//! Text <-> packed text orchestration.
//!
//! ```text
//! encode: text -> fold -> code per char -> bits -> chunks (zero pad) -> hex -> "AB 08 80"
//! decode: "AB 08 80" -> hex -> chunks -> bits -> tree walk -> restore -> text
//! ```
//!
//! A [`Codec`] owns its table and the decoding tree built from it, so both
//! directions always agree on the code. [`Codec::standard`] hands out one
//! shared instance for the built-in table.

use crate::case;
use crate::chunks;
use crate::error::{Error, Result};
use crate::stats::PackStats;
use crate::table::CodeTable;
use crate::tree::DecodingTree;
use std::sync::OnceLock;

static STANDARD: OnceLock<Result<Codec>> = OnceLock::new();

/// Encoder and decoder for one code table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codec {
    table: CodeTable,
    tree: DecodingTree,
}

impl Codec {
    /// Create a codec, building the decoding tree for `table`.
    ///
    /// # Errors
    /// Any `TableError` from [`DecodingTree::build`].
    pub fn new(table: CodeTable) -> Result<Self> {
        let tree = DecodingTree::build(&table)?;
        Ok(Self { table, tree })
    }

    /// The codec for the standard table.
    ///
    /// Built on first use and shared read-only afterwards.
    pub fn standard() -> Result<&'static Codec> {
        STANDARD
            .get_or_init(|| Codec::new(CodeTable::standard()))
            .as_ref()
            .map_err(Error::clone)
    }

    pub fn table(&self) -> &CodeTable {
        &self.table
    }

    pub fn tree(&self) -> &DecodingTree {
        &self.tree
    }

    /// Encode text into space-separated hex chunks.
    ///
    /// # Errors
    /// `EncodeError::UnknownCharacter` for the first character (after case
    /// folding) with no code. No output is produced in that case.
    pub fn encode(&self, text: &str) -> Result<String> {
        self.encode_with_stats(text).map(|(packed, _)| packed)
    }

    /// Encode text and report the size of each stage.
    pub fn encode_with_stats(&self, text: &str) -> Result<(String, PackStats)> {
        let folded = case::fold(text);
        let bits = self.encode_bits(&folded)?;

        let binary = chunks::encode_bitstream(&bits)?;
        let packed = chunks::serialize(&chunks::chunks_to_hex(&binary));

        let stats = PackStats {
            text_chars: text.chars().count(),
            text_bytes: text.len(),
            folded_chars: folded.chars().count(),
            code_bits: bits.len(),
            padding_bits: binary.len() * chunks::CHUNK_SIZE - bits.len(),
            chunks: binary.len(),
            packed_len: packed.len(),
        };

        Ok((packed, stats))
    }

    /// Decode packed text back into text.
    ///
    /// Empty (or whitespace-only) input decodes to the empty string.
    ///
    /// Characters whose codes happen to be spelled by the zero padding of
    /// the last chunk are included in the output; see
    /// [`DecodingTree::decode_padded`].
    ///
    /// # Errors
    /// - `PackError::InvalidHexChunk` for a malformed token
    /// - `DecodeError` variants if the bits do not walk the tree
    pub fn decode(&self, packed: &str) -> Result<String> {
        self.decode_with_stats(packed).map(|(text, _)| text)
    }

    /// Decode packed text and report the size of each stage.
    pub fn decode_with_stats(&self, packed: &str) -> Result<(String, PackStats)> {
        if packed.trim().is_empty() {
            return Ok((String::new(), PackStats::default()));
        }

        let hex = chunks::deserialize(packed)?;
        let binary = chunks::hex_to_chunks(&hex)?;
        let bits = chunks::join(&binary);

        let folded = self.tree.decode_padded(&bits)?;
        let text = case::restore(&folded);

        let code_bits = folded
            .chars()
            .map(|c| self.table.lookup(c).map(str::len))
            .sum::<Result<usize>>()?;

        let stats = PackStats {
            text_chars: text.chars().count(),
            text_bytes: text.len(),
            folded_chars: folded.chars().count(),
            code_bits,
            padding_bits: bits.len() - code_bits,
            chunks: binary.len(),
            packed_len: packed.len(),
        };

        Ok((text, stats))
    }

    fn encode_bits(&self, folded: &str) -> Result<String> {
        let mut bits = String::with_capacity(folded.len() * 7);
        for c in folded.chars() {
            bits.push_str(self.table.lookup(c)?);
        }
        Ok(bits)
    }
}
