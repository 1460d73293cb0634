//! Escape-based case folding.
//!
//! The code table only has lowercase letters. Before encoding, every
//! uppercase letter becomes [`ESCAPE`] followed by its lowercase form; after
//! decoding, the escape is consumed and the following letter is uppercased
//! again.
//!
//! A literal `!` in the original text cannot survive this: on restore it is
//! read as an escape and removed.

/// Marker placed before a folded uppercase letter.
pub const ESCAPE: char = '!';

/// Replace each uppercase letter with `!` and its lowercase form.
pub fn fold(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_uppercase() {
            out.push(ESCAPE);
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Undo [`fold`]: drop each escape and uppercase the next letter.
///
/// An escape stays pending across non-letters, which are kept unchanged, so
/// `"!5x"` restores to `"5X"`. A trailing escape is dropped.
pub fn restore(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut capitalize_next = false;

    for c in text.chars() {
        if c == ESCAPE {
            capitalize_next = true;
            continue;
        }

        if capitalize_next && c.is_alphabetic() {
            out.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            out.push(c);
        }
    }

    out
}
