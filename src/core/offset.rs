//! Offset conversion between wire columns and display offsets.
//!
//! Wire-protocol columns are UTF-8 byte offsets into a line. The shaping and
//! hit-testing layer addresses the same text in UTF-16 code units.

/// Moves `idx` back to the nearest UTF-8 character boundary (clamped to `text.len()`).
pub fn clamp_to_char_boundary(text: &str, idx: usize) -> usize {
    let mut idx = idx.min(text.len());
    while idx > 0 && !text.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

/// Converts a byte offset to a UTF-16 offset.
///
/// A byte offset that lands inside a multi-byte character is aligned to the
/// start of that character.
pub fn byte_to_utf16(text: &str, byte_ix: usize) -> usize {
    let byte_ix = clamp_to_char_boundary(text, byte_ix);
    text[..byte_ix].chars().map(|ch| ch.len_utf16()).sum()
}

/// Converts a UTF-16 offset to a byte offset, rounding down when the offset
/// falls between the two halves of a surrogate pair.
pub fn utf16_to_byte(text: &str, utf16_ix: usize) -> usize {
    let mut units = 0usize;
    for (idx, ch) in text.char_indices() {
        let next = units + ch.len_utf16();
        if next > utf16_ix {
            return idx;
        }
        units = next;
    }
    text.len()
}

pub fn utf16_len(text: &str) -> usize {
    text.chars().map(|ch| ch.len_utf16()).sum()
}

/// Byte length of `text` without its trailing line break (`\n` or `\r\n`).
pub fn content_len(text: &str) -> usize {
    let trimmed = text.strip_suffix('\n').unwrap_or(text);
    trimmed.strip_suffix('\r').unwrap_or(trimmed).len()
}

#[cfg(test)]
#[path = "../../tests/unit/core/offset.rs"]
mod tests;
