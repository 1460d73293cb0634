//! Statistics for a single pack or unpack run.
//!
//! Tracks the sizes at each stage of the pipeline (text, escaped text, code
//! bits, chunks, packed text) so the effect of the code table is visible.

use std::fmt;

/// Sizes observed while packing or unpacking one text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackStats {
    // === Text ===
    /// Characters in the plain text
    pub text_chars: usize,

    /// UTF-8 bytes of the plain text
    pub text_bytes: usize,

    /// Characters after case folding (escapes included)
    pub folded_chars: usize,

    // === Bits ===
    /// Bits spent on codes
    pub code_bits: usize,

    /// Zero bits appended to fill the last chunk
    pub padding_bits: usize,

    // === Packed form ===
    /// Number of 8-bit chunks
    pub chunks: usize,

    /// Length of the packed hex text in bytes
    pub packed_len: usize,
}

impl PackStats {
    /// Average code bits per plain text character.
    ///
    /// Returns 0.0 for empty text.
    pub fn bits_per_char(&self) -> f64 {
        if self.text_chars == 0 {
            0.0
        } else {
            self.code_bits as f64 / self.text_chars as f64
        }
    }

    /// Chunk bytes relative to plain text bytes.
    ///
    /// Returns 0.0 for empty text.
    pub fn compression_ratio(&self) -> f64 {
        if self.text_bytes == 0 {
            0.0
        } else {
            self.chunks as f64 / self.text_bytes as f64
        }
    }

    /// Number of case escapes added by folding.
    pub fn escapes(&self) -> usize {
        self.folded_chars.saturating_sub(self.text_chars)
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("{self}");
    }
}

impl fmt::Display for PackStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Summary ===")?;
        writeln!(
            f,
            "Text: {} chars ({} bytes, {} case escapes)",
            self.text_chars,
            self.text_bytes,
            self.escapes()
        )?;
        writeln!(
            f,
            "Bits: {} code + {} padding ({:.2} bits/char)",
            self.code_bits,
            self.padding_bits,
            self.bits_per_char()
        )?;
        writeln!(f, "Chunks: {} ({} bytes packed)", self.chunks, self.packed_len)?;
        write!(f, "Ratio: {:.1}%", self.compression_ratio() * 100.0)
    }
}
