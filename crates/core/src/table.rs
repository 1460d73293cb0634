//! The fixed character-to-code table.
//!
//! A code is a string over `{'0', '1'}`. The standard table covers lowercase
//! letters, digits and common punctuation; uppercase letters are carried by
//! the `!` escape (see [`crate::case`]). Common English letters get the
//! shortest codes.
//!
//! The table itself does not check that its codes are prefix-free. That is
//! enforced when a [`crate::tree::DecodingTree`] is built from it.

use crate::error::{EncodeError, Error, Result, TableError};
use std::collections::BTreeMap;

/// Standard code assignments, in table order.
const STANDARD_CODES: &[(char, &str)] = &[
    // Frequent letters
    ('e', "000"),
    ('t', "0010"),
    ('a', "0011"),
    ('o', "0100"),
    ('n', "0101"),
    ('s', "0110"),
    ('r', "0111"),
    ('h', "10000"),
    ('i', "10001"),
    // Digits
    ('0', "1001000"),
    ('1', "1001001"),
    ('2', "1001010"),
    ('3', "1001011"),
    ('4', "1001100"),
    ('5', "1001101"),
    ('6', "1001110"),
    ('7', "1001111"),
    ('8', "1010000"),
    ('9', "1010001"),
    // Punctuation, including the case escape
    (' ', "1010010"),
    ('.', "1010011"),
    (',', "1010100"),
    ('!', "1010101"),
    ('?', "1010110"),
    ('-', "1010111"),
    ('_', "1011000"),
    ('@', "1011001"),
    ('#', "1011010"),
    ('$', "1011011"),
    ('%', "1011100"),
    ('^', "1011101"),
    ('&', "1011110"),
    ('*', "1011111"),
    ('(', "1100000"),
    (')', "1100001"),
    // Remaining letters
    ('d', "1100010"),
    ('l', "1100011"),
    ('c', "1100100"),
    ('u', "1100101"),
    ('m', "1100110"),
    ('w', "1100111"),
    ('f', "1101000"),
    ('g', "1101001"),
    ('y', "1101010"),
    ('p', "1101011"),
    ('b', "1101100"),
    ('v', "1101101"),
    ('k', "1101110"),
    ('j', "1101111"),
    ('x', "1110000"),
    ('q', "1110001"),
    ('z', "1110010"),
];

/// Immutable mapping from character to code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<char, String>,
}

impl CodeTable {
    /// The built-in table used by the archiver.
    pub fn standard() -> Self {
        let codes = STANDARD_CODES
            .iter()
            .map(|&(symbol, code)| (symbol, code.to_string()))
            .collect();
        Self { codes }
    }

    /// Build a table from explicit `(character, code)` pairs.
    ///
    /// Codes are stored as given; bit validity and prefix-freedom are
    /// checked by the decoding tree.
    ///
    /// # Errors
    /// Returns `TableError::DuplicateSymbol` if a character is listed twice.
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (char, S)>,
        S: Into<String>,
    {
        let mut codes = BTreeMap::new();
        for (symbol, code) in entries {
            if codes.insert(symbol, code.into()).is_some() {
                return Err(TableError::DuplicateSymbol(symbol).into());
            }
        }
        Ok(Self { codes })
    }

    /// Look up the code for a character.
    ///
    /// # Errors
    /// Returns `EncodeError::UnknownCharacter` if the character has no code.
    pub fn lookup(&self, symbol: char) -> Result<&str> {
        self.codes
            .get(&symbol)
            .map(String::as_str)
            .ok_or_else(|| Error::from(EncodeError::unknown(symbol)))
    }

    /// All `(character, code)` pairs, ordered by character.
    pub fn entries(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code.as_str()))
    }
}

impl Default for CodeTable {
    fn default() -> Self {
        Self::standard()
    }
}
