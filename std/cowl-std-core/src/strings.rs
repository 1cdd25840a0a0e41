//!
//! String Primitives
//!
//! Codepoint-level operations over raw UTF-8 byte buffers:
//!
//! - `codepoint_len(bytes) -> usize` - number of codepoints
//! - `char_at(bytes, index) -> Str` - the codepoint at a 1-based index
//! - `concat(parts) -> Str` - the `++` builtin over display strings
//! - `str_length(v) -> number` - the `str-length` builtin
//! - `char_at_any(v, index) -> Str` - the `char-at` builtin
//!
//! Sequences are walked by their lead byte only; continuation bytes are not
//! validated. A sequence cut short by the end of the buffer still counts as
//! one codepoint.
//!

use crate::coerce::{coerce_to_display, coerce_to_double, with_display};
use crate::number::{double_to_saturating_u64, u64_to_double};
use crate::value::{Any, Str, alloc_buffer};

/// Byte width of the sequence starting with `lead`
fn sequence_width(lead: u8) -> usize {
    if lead & 0xE0 == 0xC0 {
        2
    } else if lead & 0xF0 == 0xE0 {
        3
    } else if lead & 0xF8 == 0xF0 {
        4
    } else {
        1
    }
}

pub fn codepoint_len(bytes: &[u8]) -> usize {
    let mut count = 0;
    let mut pos = 0;
    while pos < bytes.len() {
        pos += sequence_width(bytes[pos]);
        count += 1;
    }
    count
}

/// Get the codepoint at 1-based `index` as a new owned string.
///
/// Index 0 and indices past the last codepoint return the empty string.
pub fn char_at(bytes: &[u8], index: u64) -> Str {
    if index == 0 {
        return Str::empty();
    }

    let mut remaining = index - 1;
    let mut pos = 0;
    while pos < bytes.len() {
        let end = (pos + sequence_width(bytes[pos])).min(bytes.len());
        if remaining == 0 {
            return Str::copy_from(&bytes[pos..end]);
        }
        remaining -= 1;
        pos = end;
    }

    tracing::trace!(index, len = bytes.len(), "char_at out of range");
    Str::empty()
}

/// Join the display strings of `parts`, consuming every part.
///
/// No parts yield the borrowed empty string and a single part is passed
/// through without copying.
pub fn concat(parts: impl IntoIterator<Item = Any>) -> Str {
    let mut parts = parts.into_iter().map(coerce_to_display);
    let Some(first) = parts.next() else {
        return Str::empty();
    };
    let Some(second) = parts.next() else {
        return first;
    };

    let rest: Vec<Str> = parts.collect();
    let total = first.len() + second.len() + rest.iter().map(Str::len).sum::<usize>();
    let mut buf = alloc_buffer(total);
    for part in [first, second].into_iter().chain(rest) {
        buf.extend_from_slice(part.as_bytes());
    }
    Str::owned(buf)
}

/// Codepoint length of `v`'s display string, as a number
pub fn str_length(v: Any) -> f64 {
    with_display(v, |bytes| u64_to_double(codepoint_len(bytes) as u64))
}

/// Codepoint of `v`'s display string at the 1-based number `index`
pub fn char_at_any(v: Any, index: Any) -> Str {
    let display = coerce_to_display(v);
    let index = double_to_saturating_u64(coerce_to_double(index));
    char_at(display.as_bytes(), index)
}
