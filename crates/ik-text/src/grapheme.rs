//! UAX #29 grapheme cluster boundaries.
//!
//! The input editor and scrollback need two different views of the same
//! algorithm: a pairwise predicate over adjacent code points (used while
//! scanning a buffer byte-by-byte to track the dual byte/grapheme cursor),
//! and whole-string boundary queries (used by movement operations that
//! already hold a `&str` slice). Both are backed by `unicode-segmentation`'s
//! extended grapheme cluster implementation so the two views never disagree.

use unicode_segmentation::UnicodeSegmentation;

/// Is there a grapheme cluster boundary between `prev_cp` and `cp`?
///
/// This is the pairwise form of the break algorithm: it asks whether the two
/// code points, standing alone, would be split into separate clusters. It is
/// sufficient for linear scans that only need to know "did a boundary just
/// occur here", which is how the input editor counts grapheme offsets while
/// walking `text[0..cursor.byte]`.
pub fn grapheme_break(prev_cp: char, cp: char) -> bool {
    let mut pair = String::with_capacity(prev_cp.len_utf8() + cp.len_utf8());
    pair.push(prev_cp);
    pair.push(cp);
    pair.graphemes(true).count() == 2
}

/// Byte offset of the grapheme boundary immediately before `byte` in `text`,
/// or `0` if `byte` is already at or before the first boundary.
pub fn prev_boundary(text: &str, byte: usize) -> usize {
    if byte == 0 || byte > text.len() {
        return 0;
    }
    let mut last = 0;
    for (idx, _) in text.grapheme_indices(true) {
        if idx >= byte {
            break;
        }
        last = idx;
    }
    last
}

/// Byte offset of the grapheme boundary immediately after `byte` in `text`,
/// or `text.len()` if `byte` is at or beyond the last boundary.
pub fn next_boundary(text: &str, byte: usize) -> usize {
    if byte >= text.len() {
        return text.len();
    }
    for (idx, _) in text.grapheme_indices(true) {
        if idx > byte {
            return idx;
        }
    }
    text.len()
}

/// Count grapheme boundaries in `text[0..byte]`, i.e. the grapheme offset
/// that corresponds to byte offset `byte`.
pub fn count_to(text: &str, byte: usize) -> usize {
    text[..byte].graphemes(true).count()
}

/// Iterate the grapheme clusters of `text` in order.
pub fn iter(text: &str) -> impl Iterator<Item = &str> {
    text.graphemes(true)
}
