//! Conversions between byte offset, code-point index, and grapheme-cluster
//! index, plus O(1)-per-step walkers.
//!
//! Generalizes the teacher's `cp_iter.rs` (`CodePointIter`, which walks
//! `&[u8]` by decoding one code point at a time) and `segmentation.rs`'s
//! `GraphemeIter` (which walked a pre-materialized `Vec<u32>`) into walkers
//! over an `AStr`'s raw bytes directly, and adds the random-access index
//! conversions the distilled spec calls for.

use crate::buffer::AStr;
use crate::codec;
use crate::properties::{self, GraphemeClusterBreak as GCB};

/// An `O(1)`-per-step forward/backward walker over an `AStr`'s bytes.
pub struct ByteCursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(s: &'a AStr) -> Self {
        ByteCursor {
            bytes: s.as_bytes(),
            pos: 0,
        }
    }

    pub fn at(s: &'a AStr, byte_offset: usize) -> Self {
        debug_assert!(
            byte_offset == s.byte_length() || is_codepoint_boundary(s.as_bytes(), byte_offset),
            "ByteCursor::at: {byte_offset} is not on a code point boundary"
        );
        ByteCursor {
            bytes: s.as_bytes(),
            pos: byte_offset,
        }
    }

    pub fn byte_offset(&self) -> usize {
        self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    pub fn peek_cp(&self) -> Option<u32> {
        if self.is_at_end() {
            return None;
        }
        let (cp, _) = codec::decode(&self.bytes[self.pos..]).expect("AStr invariant I1 violated");
        Some(cp)
    }

    pub fn next_cp(&mut self) -> Option<u32> {
        if self.is_at_end() {
            return None;
        }
        let (cp, len) = codec::decode(&self.bytes[self.pos..]).expect("AStr invariant I1 violated");
        self.pos += len;
        Some(cp)
    }

    pub fn prev_cp(&mut self) -> Option<u32> {
        if self.pos == 0 {
            return None;
        }
        let start = codec::previous_boundary(self.bytes, self.pos);
        let (cp, _) = codec::decode(&self.bytes[start..]).expect("AStr invariant I1 violated");
        self.pos = start;
        Some(cp)
    }

    /// Advances past one extended grapheme cluster, returning its byte range.
    pub fn next_grapheme(&mut self) -> Option<(usize, usize)> {
        if self.is_at_end() {
            return None;
        }
        let start = self.pos;
        let (first, first_len) = codec::decode(&self.bytes[self.pos..]).expect("AStr invariant I1 violated");
        let mut pos = self.pos + first_len;
        let mut prev_cp = first;
        let mut ri_count = if properties::gcb_class(first) == GCB::RI { 1 } else { 0 };
        let mut pictographic_run = properties::extended_pictographic(first);

        while pos < self.bytes.len() {
            let (cp, len) = codec::decode(&self.bytes[pos..]).expect("AStr invariant I1 violated");
            if !grapheme_joins(prev_cp, cp, ri_count, pictographic_run) {
                break;
            }
            ri_count = if properties::gcb_class(cp) == GCB::RI { ri_count + 1 } else { 0 };
            if properties::gcb_class(cp) != GCB::EX {
                pictographic_run = properties::extended_pictographic(cp);
            }
            prev_cp = cp;
            pos += len;
        }
        self.pos = pos;
        Some((start, pos))
    }

    /// Walks backward past one extended grapheme cluster, returning its byte range.
    pub fn prev_grapheme(&mut self) -> Option<(usize, usize)> {
        if self.pos == 0 {
            return None;
        }
        let end = self.pos;
        // Collect code points of the preceding run by walking back to the
        // start of the string, then re-walk forward with `next_grapheme`-style
        // logic to find the last boundary before `end`. This mirrors how the
        // distilled spec documents grapheme boundaries as needing left
        // context; a full reverse grammar is not worth it for a rarely
        // hot-path operation.
        let mut cursor = ByteCursor { bytes: self.bytes, pos: 0 };
        let mut last_start = 0;
        while !cursor.is_at_end() {
            let before = cursor.pos;
            if before >= end {
                break;
            }
            let (start, stop) = cursor.next_grapheme().unwrap();
            if stop >= end {
                last_start = start;
                break;
            }
            last_start = start;
        }
        self.pos = last_start;
        Some((last_start, end))
    }
}

/// Mirrors `segmentation::GraphemeIter`'s rule table, for a single pairwise
/// decision given carried-forward state (GB11's pictographic run, GB12/13's
/// regional-indicator parity).
fn grapheme_joins(prev: u32, next: u32, ri_count: u32, pictographic_run: bool) -> bool {
    use GCB::*;
    let prev_class = properties::gcb_class(prev);
    let next_class = properties::gcb_class(next);
    match (prev_class, next_class) {
        (CR, LF) => true,
        (CN, _) | (CR, _) | (LF, _) => false,
        (_, CN) | (_, CR) | (_, LF) => false,
        (L, L) | (L, V) | (L, LV) | (L, LVT) => true,
        (LV, V) | (LV, T) | (V, V) | (V, T) => true,
        (LVT, T) | (T, T) => true,
        (ZWJ, _) if pictographic_run && properties::extended_pictographic(next) => true,
        (_, EX) | (_, ZWJ) | (_, SM) => true,
        (PP, _) => true,
        (RI, RI) => ri_count % 2 == 1,
        _ => false,
    }
}

pub fn is_codepoint_boundary(bytes: &[u8], offset: usize) -> bool {
    offset == 0 || offset == bytes.len() || !codec_is_continuation(bytes[offset])
}

fn codec_is_continuation(b: u8) -> bool {
    (b & 0b1100_0000) == 0b1000_0000
}

/// `O(n)` worst case, `O(n/2)` typical: walks forward from the start, or
/// backward from the end via `prev_cp` when `index` is in the back half --
/// `codepoint_length` is cached, so the choice of direction is O(1).
pub fn byte_offset_of_codepoint_index(s: &AStr, index: usize) -> usize {
    debug_assert!(index <= s.codepoint_length());
    let total = s.codepoint_length();
    if index > total / 2 {
        let mut cursor = ByteCursor::at(s, s.byte_length());
        for _ in 0..(total - index) {
            cursor.prev_cp();
        }
        cursor.byte_offset()
    } else {
        let mut cursor = ByteCursor::new(s);
        for _ in 0..index {
            cursor.next_cp();
        }
        cursor.byte_offset()
    }
}

/// `O(n)` worst case, `O(n/2)` typical: same back-half walk-from-the-end
/// optimization as [`byte_offset_of_codepoint_index`], keyed off `byte_length`
/// instead of `codepoint_length` since the input here is a byte offset.
pub fn codepoint_index_of_byte_offset(s: &AStr, byte_offset: usize) -> usize {
    debug_assert!(is_codepoint_boundary(s.as_bytes(), byte_offset));
    if byte_offset > s.byte_length() / 2 {
        let mut cursor = ByteCursor::at(s, s.byte_length());
        let mut index = s.codepoint_length();
        while cursor.byte_offset() > byte_offset {
            cursor.prev_cp();
            index -= 1;
        }
        index
    } else {
        let mut cursor = ByteCursor::new(s);
        let mut index = 0;
        while cursor.byte_offset() < byte_offset {
            cursor.next_cp();
            index += 1;
        }
        index
    }
}

/// Always walks forward from the start: unlike codepoints, there is no O(1)
/// backward grapheme step to make a "start from the end" branch worthwhile
/// (see `prev_grapheme`'s own doc comment above).
pub fn byte_offset_of_grapheme_index(s: &AStr, index: usize) -> usize {
    let mut cursor = ByteCursor::new(s);
    let mut i = 0;
    let mut offset = 0;
    while i < index {
        match cursor.next_grapheme() {
            Some((_, end)) => offset = end,
            None => break,
        }
        i += 1;
    }
    if index == 0 {
        0
    } else {
        offset
    }
}

pub fn grapheme_index_of_byte_offset(s: &AStr, byte_offset: usize) -> usize {
    let mut cursor = ByteCursor::new(s);
    let mut index = 0;
    while cursor.byte_offset() < byte_offset {
        match cursor.next_grapheme() {
            Some(_) => index += 1,
            None => break,
        }
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_cp_walks_forward() {
        let s = AStr::from_str("Café");
        let mut cursor = ByteCursor::new(&s);
        let cps: Vec<u32> = std::iter::from_fn(|| cursor.next_cp()).collect();
        assert_eq!(cps, vec![0x43, 0x61, 0x66, 0x00E9]);
    }

    #[test]
    fn test_prev_cp_walks_backward() {
        let s = AStr::from_str("Café");
        let mut cursor = ByteCursor::at(&s, s.byte_length());
        let mut cps = Vec::new();
        while let Some(cp) = cursor.prev_cp() {
            cps.push(cp);
        }
        assert_eq!(cps, vec![0x00E9, 0x66, 0x61, 0x43]);
    }

    #[test]
    fn test_next_grapheme_groups_devanagari_cluster() {
        let s = AStr::from_str("\u{0928}\u{093F}");
        let mut cursor = ByteCursor::new(&s);
        let (start, end) = cursor.next_grapheme().unwrap();
        assert_eq!((start, end), (0, s.byte_length()));
        assert!(cursor.next_grapheme().is_none());
    }

    #[test]
    fn test_codepoint_index_round_trip() {
        let s = AStr::from_str("Café");
        let offset = byte_offset_of_codepoint_index(&s, 3);
        assert_eq!(codepoint_index_of_byte_offset(&s, offset), 3);
    }

    #[test]
    fn test_grapheme_index_of_byte_offset_for_flags() {
        let s = AStr::from_str("\u{1F1EB}\u{1F1F7}\u{1F1F8}\u{1F1FA}");
        let second_flag_offset = byte_offset_of_grapheme_index(&s, 1);
        assert_eq!(grapheme_index_of_byte_offset(&s, second_flag_offset), 1);
        assert_eq!(byte_offset_of_grapheme_index(&s, 2), s.byte_length());
    }
}
