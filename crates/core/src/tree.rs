//! Binary decoding tree (trie) built from a code table.
//!
//! Every root-to-leaf path spells one code; the leaf holds its character.
//! Decoding walks the tree one bit at a time (Zero child on '0', One child
//! on '1') and emits a character whenever a leaf is reached, then restarts
//! at the root. Because the table is prefix-free the walk never backtracks:
//! a single linear pass over the bits is enough.
//!
//! The prefix-free property is checked while the tree is built, so a tree
//! that exists is always unambiguous.

use crate::chunks::CHUNK_SIZE;
use crate::error::{DecodeError, Result, TableError};
use crate::table::CodeTable;

/// A node of the decoding tree.
///
/// Children are owned by their parent. A node with a `value` has no
/// children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Node {
    value: Option<char>,
    zero: Option<Box<Node>>,
    one: Option<Box<Node>>,
}

impl Node {
    fn is_branch(&self) -> bool {
        self.zero.is_some() || self.one.is_some()
    }

    fn child(&self, bit: bool) -> Option<&Node> {
        if bit {
            self.one.as_deref()
        } else {
            self.zero.as_deref()
        }
    }

    fn child_or_insert(&mut self, bit: bool) -> &mut Node {
        let slot = if bit { &mut self.one } else { &mut self.zero };
        slot.get_or_insert_with(Box::default)
    }

    /// First character found below this node, for error reporting.
    fn any_value(&self) -> Option<char> {
        self.value
            .or_else(|| self.zero.as_ref().and_then(|n| n.any_value()))
            .or_else(|| self.one.as_ref().and_then(|n| n.any_value()))
    }

    fn depth(&self) -> usize {
        let zero = self.zero.as_ref().map_or(0, |n| n.depth() + 1);
        let one = self.one.as_ref().map_or(0, |n| n.depth() + 1);
        zero.max(one)
    }

    fn leaf_count(&self) -> usize {
        let below = self.zero.as_ref().map_or(0, |n| n.leaf_count())
            + self.one.as_ref().map_or(0, |n| n.leaf_count());
        below + usize::from(self.value.is_some())
    }
}

/// Immutable decoding tree for one code table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodingTree {
    root: Node,
}

/// Outcome of walking a bit sequence.
struct Walk {
    text: String,
    /// Bits consumed since the cursor last left the root.
    dangling: usize,
    /// Whether every dangling bit was '0'.
    dangling_zeros: bool,
}

impl DecodingTree {
    /// Build the tree from a code table.
    ///
    /// # Errors
    /// - `TableError::InvalidCodeBit` if a code has a character other than '0'/'1'
    /// - `TableError::EmptyCode` if a code is empty
    /// - `TableError::PrefixConflict` if one code is a proper prefix of another
    /// - `TableError::DuplicateCode` if two characters share a code
    pub fn build(table: &CodeTable) -> Result<Self> {
        let mut root = Node::default();

        for (symbol, code) in table.entries() {
            if code.is_empty() {
                return Err(TableError::EmptyCode { symbol }.into());
            }

            let mut current = &mut root;
            for bit in code.chars() {
                let bit = match bit {
                    '0' => false,
                    '1' => true,
                    bit => return Err(TableError::InvalidCodeBit { symbol, bit }.into()),
                };

                // A shorter code already ends here
                if let Some(other) = current.value {
                    return Err(TableError::PrefixConflict {
                        symbol,
                        code: code.to_string(),
                        other,
                    }
                    .into());
                }

                current = current.child_or_insert(bit);
            }

            if let Some(other) = current.value {
                return Err(TableError::DuplicateCode {
                    symbol,
                    code: code.to_string(),
                    other,
                }
                .into());
            }

            // A longer code already passes through here
            if current.is_branch() {
                let other = current.any_value().unwrap_or(symbol);
                return Err(TableError::PrefixConflict {
                    symbol,
                    code: code.to_string(),
                    other,
                }
                .into());
            }

            current.value = Some(symbol);
        }

        Ok(Self { root })
    }

    /// Decode a bit sequence that must end exactly on a code boundary.
    ///
    /// # Errors
    /// - `DecodeError::InvalidBit` for a character other than '0'/'1'
    /// - `DecodeError::UnexpectedBit` if no code continues with that bit
    /// - `DecodeError::IncompleteEncoding` if the bits end mid-code
    pub fn decode(&self, bits: &str) -> Result<String> {
        let walk = self.walk(bits)?;
        if walk.dangling > 0 {
            return Err(DecodeError::IncompleteEncoding {
                dangling: walk.dangling,
            }
            .into());
        }
        Ok(walk.text)
    }

    /// Decode a bit sequence that came out of zero-padded chunks.
    ///
    /// Like [`decode`](Self::decode), except that a trailing partial code is
    /// dropped when it could only be chunk padding: fewer than 8 bits, all
    /// '0'. Complete codes spelled by padding bits are still emitted, since
    /// nothing in the bitstream marks where the data ended.
    ///
    /// # Errors
    /// Same as [`decode`](Self::decode); `IncompleteEncoding` only for a
    /// dangling tail that cannot be padding.
    pub fn decode_padded(&self, bits: &str) -> Result<String> {
        let walk = self.walk(bits)?;
        let is_padding = walk.dangling < CHUNK_SIZE && walk.dangling_zeros;
        if walk.dangling > 0 && !is_padding {
            return Err(DecodeError::IncompleteEncoding {
                dangling: walk.dangling,
            }
            .into());
        }
        Ok(walk.text)
    }

    fn walk(&self, bits: &str) -> Result<Walk> {
        let mut text = String::new();
        let mut current = &self.root;
        let mut dangling = 0;
        let mut dangling_zeros = true;

        for (position, c) in bits.chars().enumerate() {
            let bit = match c {
                '0' => false,
                '1' => true,
                found => return Err(DecodeError::InvalidBit { found, position }.into()),
            };

            current = current
                .child(bit)
                .ok_or(DecodeError::UnexpectedBit { bit: c, position })?;
            dangling += 1;
            dangling_zeros &= !bit;

            if let Some(value) = current.value {
                text.push(value);
                current = &self.root;
                dangling = 0;
                dangling_zeros = true;
            }
        }

        Ok(Walk {
            text,
            dangling,
            dangling_zeros,
        })
    }

    /// Length of the longest code.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Number of characters the tree can decode.
    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }
}
