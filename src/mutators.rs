//! Insert / delete / replace / concatenate at a position, plus the reversal
//! and fold-aware matching operations.
//!
//! The teacher has no buffer to mutate, so this module's shape is grounded on
//! the `ByteBuffer` design note's reserve-then-copy-then-update-metadata
//! sequencing, generalized from a ring buffer to `AStr`'s linear one, and on
//! the teacher's `case.rs`/`normalise.rs` for the fold/normalize primitives
//! these mutators call into.

use crate::buffer::AStr;
use crate::codec;
use crate::indexers::is_codepoint_boundary;
use crate::normalize::{self, NormalizationForm};
use crate::properties;
use crate::segmentation::GraphemeIter;

impl AStr {
    pub fn push_str(&mut self, tail: &str) {
        self.reserve(tail.len());
        let at = self.byte_length();
        let bytes = self.raw_bytes_mut();
        bytes.splice(at..at, tail.bytes());
        let new_byte_length = at + tail.len();
        let added_cps = tail.chars().count();
        let new_cp_length = self.codepoint_length() + added_cps;
        self.set_from_bytes(new_byte_length, new_cp_length);
    }

    pub fn push_cp(&mut self, cp: u32) {
        let mut buf = [0u8; 4];
        let len = codec::encode(cp, &mut buf);
        let s = std::str::from_utf8(&buf[..len]).expect("encode produced valid UTF-8");
        self.push_str(s);
    }

    /// Inserts `s` at `at_byte_offset`, which must fall on a code point boundary.
    pub fn insert_str(&mut self, at_byte_offset: usize, s: &str) {
        debug_assert!(
            is_codepoint_boundary(self.as_bytes(), at_byte_offset),
            "insert_str: {at_byte_offset} is not on a code point boundary"
        );
        self.reserve(s.len());
        let added_cps = s.chars().count();
        let new_byte_length = self.byte_length() + s.len();
        let new_cp_length = self.codepoint_length() + added_cps;
        let bytes = self.raw_bytes_mut();
        bytes.splice(at_byte_offset..at_byte_offset, s.bytes());
        self.set_from_bytes(new_byte_length, new_cp_length);
    }

    /// Deletes `length_bytes` bytes starting at `start_offset`; both ends
    /// must fall on code point boundaries.
    pub fn delete(&mut self, start_offset: usize, length_bytes: usize) {
        let end_offset = start_offset + length_bytes;
        debug_assert!(
            is_codepoint_boundary(self.as_bytes(), start_offset)
                && is_codepoint_boundary(self.as_bytes(), end_offset),
            "delete: range [{start_offset}, {end_offset}) is not on code point boundaries"
        );
        let removed_cps = std::str::from_utf8(&self.as_bytes()[start_offset..end_offset])
            .expect("AStr invariant I1 violated")
            .chars()
            .count();
        let new_byte_length = self.byte_length() - length_bytes;
        let new_cp_length = self.codepoint_length() - removed_cps;
        let bytes = self.raw_bytes_mut();
        bytes.drain(start_offset..end_offset);
        self.set_from_bytes(new_byte_length, new_cp_length);
    }

    /// Replaces occurrences of `needle` with `replacement`. If `all` is
    /// false, replaces only the first occurrence. Returns the count replaced.
    pub fn replace(&mut self, needle: &str, replacement: &str, all: bool) -> usize {
        if needle.is_empty() {
            return 0;
        }
        let mut count = 0;
        let mut search_from = 0;
        loop {
            let haystack = self.as_str();
            match haystack[search_from..].find(needle) {
                Some(rel_offset) => {
                    let at = search_from + rel_offset;
                    self.delete(at, needle.len());
                    self.insert_str(at, replacement);
                    count += 1;
                    search_from = at + replacement.len();
                    if !all {
                        break;
                    }
                }
                None => break,
            }
        }
        count
    }

    /// Case-insensitive `replace`, matching by full case folding via
    /// [`FoldMatcher`] rather than materializing a folded copy of `self`.
    pub fn replace_fold(&mut self, needle: &str, replacement: &str, all: bool) -> usize {
        if needle.is_empty() {
            return 0;
        }
        let needle_cps: Vec<u32> = needle.chars().map(|c| c as u32).collect();
        let mut count = 0;
        let mut search_from = 0;
        loop {
            match find_fold_match(self.as_bytes(), search_from, &needle_cps) {
                Some((start, end)) => {
                    self.delete(start, end - start);
                    self.insert_str(start, replacement);
                    count += 1;
                    search_from = start + replacement.len();
                    if !all {
                        break;
                    }
                }
                None => break,
            }
        }
        count
    }

    /// Concatenates `tail`, then renormalizes the whole buffer to `form` --
    /// the only mutator that guarantees the receiver stays normalized after
    /// the call, since no normalization form is closed under concatenation.
    pub fn push_str_normalized(&mut self, tail: &str, form: NormalizationForm) {
        self.push_str(tail);
        let normalized = normalize::normalize(self.as_str(), form);
        let new_byte_length = normalized.len();
        let new_cp_length = normalized.chars().count();
        let bytes = self.raw_bytes_mut();
        bytes.clear();
        bytes.extend_from_slice(normalized.as_bytes());
        bytes.push(0);
        self.set_from_bytes(new_byte_length, new_cp_length);
    }

    /// Reverses code-point order. This can visually garble combining marks
    /// (a trailing combining mark ends up before its base), by design: see
    /// worked scenario 4 in `SPEC_FULL.md` §8.
    pub fn reverse_codepoints(&mut self) {
        let reversed: String = self.as_str().chars().rev().collect();
        let byte_length = reversed.len();
        let cp_length = self.codepoint_length();
        let bytes = self.raw_bytes_mut();
        bytes.clear();
        bytes.extend_from_slice(reversed.as_bytes());
        bytes.push(0);
        self.set_from_bytes(byte_length, cp_length);
    }

    /// Reverses cluster-by-cluster, preserving the integrity of each
    /// extended grapheme cluster.
    pub fn reverse_graphemes(&mut self) {
        let cps: Vec<u32> = self.as_str().chars().map(|c| c as u32).collect();
        let clusters: Vec<&[u32]> = GraphemeIter::new(&cps).collect();
        let mut reversed = String::new();
        for cluster in clusters.into_iter().rev() {
            for &cp in cluster {
                reversed.push(char::from_u32(cp).expect("AStr invariant I1 violated"));
            }
        }
        let byte_length = reversed.len();
        let cp_length = self.codepoint_length();
        let bytes = self.raw_bytes_mut();
        bytes.clear();
        bytes.extend_from_slice(reversed.as_bytes());
        bytes.push(0);
        self.set_from_bytes(byte_length, cp_length);
    }
}

/// Streams full-case-fold comparison over `haystack` starting at `search_from`,
/// returning the byte range of the first match of `needle_cps` under full
/// case folding. Generalizes the teacher's `case_fold` (which materializes a
/// `Vec<u32>` up front) into a form that folds on the fly, since one source
/// code point may fold to up to three.
fn find_fold_match(haystack: &[u8], search_from: usize, needle_cps: &[u32]) -> Option<(usize, usize)> {
    let folded_needle: Vec<u32> = needle_cps.iter().flat_map(|&cp| properties::full_fold(cp).iter().copied()).collect();
    if folded_needle.is_empty() {
        return None;
    }
    let mut pos = search_from;
    while pos < haystack.len() {
        if let Some(end) = try_match_fold_at(haystack, pos, &folded_needle) {
            return Some((pos, end));
        }
        let (_, step) = codec::decode(&haystack[pos..]).ok()?;
        pos += step;
    }
    None
}

/// Attempts to match `folded_needle` starting at haystack byte offset `pos`,
/// folding haystack code points on the fly. Returns the end byte offset of
/// the haystack span consumed by the match, if any.
fn try_match_fold_at(haystack: &[u8], pos: usize, folded_needle: &[u32]) -> Option<usize> {
    let mut needle_idx = 0;
    let mut pending: Vec<u32> = Vec::new();
    let mut cursor = pos;
    while needle_idx < folded_needle.len() {
        if pending.is_empty() {
            let (cp, len) = codec::decode(&haystack[cursor..]).ok()?;
            cursor += len;
            pending.extend(properties::full_fold(cp).iter().copied());
        }
        let folded_cp = pending.remove(0);
        if folded_cp != folded_needle[needle_idx] {
            return None;
        }
        needle_idx += 1;
    }
    if !pending.is_empty() {
        // The last haystack code point folded to more code points than the
        // needle has remaining (e.g. needle ends mid-way through a `ß`'s
        // "ss" expansion) -- not a clean boundary match.
        return None;
    }
    Some(cursor)
}

/// Compares two strings for equality under full case folding, without
/// allocating folded copies of either.
pub struct FoldMatcher;

impl FoldMatcher {
    pub fn eq(a: &str, b: &str) -> bool {
        let mut fold_a = a.chars().flat_map(|c| properties::full_fold(c as u32).iter().copied());
        let mut fold_b = b.chars().flat_map(|c| properties::full_fold(c as u32).iter().copied());
        loop {
            match (fold_a.next(), fold_b.next()) {
                (Some(x), Some(y)) if x == y => continue,
                (None, None) => return true,
                _ => return false,
            }
        }
    }
}
