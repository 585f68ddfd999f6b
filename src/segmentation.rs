//! Default (non-locale-specific) extended grapheme cluster boundaries.
//!
//! Generalizes the teacher's `segmentation.rs`: same greedy forward-scan
//! `GraphemeIter` shape, but reading break-class data from `properties`
//! instead of a JSON-loaded `HashMap`, and adding GB11 (`\p{Extended_Pictographic}
//! Extend* ZWJ x \p{Extended_Pictographic}`), which the teacher's version
//! never implemented despite declaring the `EB`/`EBG`/`EM` break classes.

use crate::properties::{self, GraphemeClusterBreak as GCB};

pub struct GraphemeIter<'a> {
    code_points: &'a [u32],
    pos: usize,
}

impl<'a> GraphemeIter<'a> {
    pub fn new(code_points: &'a [u32]) -> Self {
        GraphemeIter { code_points, pos: 0 }
    }
}

/// Walks backward from `pos`, skipping a run of `Extend`, and reports whether
/// the code point the run bottoms out on is `Extended_Pictographic`. Used for
/// GB11, which allows an `Extend*` run between the pictographic code point
/// and the `ZWJ` that follows it.
fn pictographic_precedes(code_points: &[u32], mut pos: usize) -> bool {
    loop {
        if properties::gcb_class(code_points[pos]) != GCB::EX {
            return properties::extended_pictographic(code_points[pos]);
        }
        if pos == 0 {
            return false;
        }
        pos -= 1;
    }
}

impl<'a> Iterator for GraphemeIter<'a> {
    type Item = &'a [u32];

    // https://unicode.org/reports/tr29/#Grapheme_Cluster_Boundary_Rules
    // At each code point, decide whether to break or keep extending the
    // current cluster.
    fn next(&mut self) -> Option<Self::Item> {
        use GCB::*;
        if self.pos >= self.code_points.len() {
            return None;
        }
        if self.pos == self.code_points.len() - 1 {
            let start = self.pos;
            self.pos += 1;
            return Some(&self.code_points[start..]);
        }
        let start = self.pos;
        let mut ri_count = 0;
        while self.pos < self.code_points.len() - 1 {
            let cp = properties::gcb_class(self.code_points[self.pos]);
            let next_cp = self.code_points[self.pos + 1];
            let next = properties::gcb_class(next_cp);
            ri_count = if cp == RI { ri_count + 1 } else { 0 };
            match (cp, next) {
                (CR, LF) => self.pos += 1,                        // GB3
                (CN, _) | (CR, _) | (LF, _) => break,              // GB4
                (_, CN) | (_, CR) | (_, LF) => break,              // GB5
                (L, L) | (L, V) | (L, LV) | (L, LVT) => self.pos += 1, // GB6
                (LV, V) | (LV, T) | (V, V) | (V, T) => self.pos += 1,  // GB7
                (LVT, T) | (T, T) => self.pos += 1,                // GB8
                (ZWJ, _) if self.pos > 0
                    && pictographic_precedes(self.code_points, self.pos - 1)
                    && properties::extended_pictographic(next_cp) =>
                {
                    self.pos += 1 // GB11
                }
                (_, EX) => self.pos += 1,                         // GB9
                (_, ZWJ) => self.pos += 1,                         // GB9
                (_, SM) => self.pos += 1,                          // GB9a
                (PP, _) => self.pos += 1,                          // GB9b
                (RI, RI) if ri_count % 2 == 1 => self.pos += 1,    // GB12/GB13
                (RI, RI) => break,                                 // GB12/GB13
                _ => break,
            }
        }
        self.pos += 1;
        Some(&self.code_points[start..self.pos])
    }
}

/// Counts extended grapheme clusters in `code_points` without materializing them.
pub fn count(code_points: &[u32]) -> usize {
    GraphemeIter::new(code_points).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_each_codepoint_is_its_own_cluster() {
        let cps: Vec<u32> = "abc".chars().map(|c| c as u32).collect();
        let clusters: Vec<&[u32]> = GraphemeIter::new(&cps).collect();
        assert_eq!(clusters, vec![&[0x61][..], &[0x62][..], &[0x63][..]]);
    }

    #[test]
    fn test_crlf_is_one_cluster() {
        let cps = [0x000D, 0x000A, 0x41];
        let clusters: Vec<&[u32]> = GraphemeIter::new(&cps).collect();
        assert_eq!(clusters, vec![&[0x000D, 0x000A][..], &[0x41][..]]);
    }

    #[test]
    fn test_devanagari_spacing_mark_joins_base() {
        // DEVANAGARI LETTER NA + DEVANAGARI VOWEL SIGN I = one cluster.
        let cps = [0x0928, 0x093F];
        assert_eq!(count(&cps), 1);
    }

    #[test]
    fn test_regional_indicator_pairs_form_flags() {
        // Regional indicators for F R and S U: two flag clusters, not four
        // separate ones, and not one cluster of four.
        let cps = [0x1F1EB, 0x1F1F7, 0x1F1F8, 0x1F1FA];
        let clusters: Vec<&[u32]> = GraphemeIter::new(&cps).collect();
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0], &[0x1F1EB, 0x1F1F7]);
        assert_eq!(clusters[1], &[0x1F1F8, 0x1F1FA]);
    }

    #[test]
    fn test_gb11_zwj_family_emoji_is_one_cluster() {
        // MAN, ZWJ, WOMAN, ZWJ, GIRL -> a single family emoji cluster (GB11).
        let cps = [0x1F468, 0x200D, 0x1F469, 0x200D, 0x1F467];
        assert_eq!(count(&cps), 1);
    }

    #[test]
    fn test_zwj_joins_only_what_precedes_it_without_gb11() {
        // GB9 joins a preceding code point to a following ZWJ, but a ZWJ does
        // not pull in what follows unless GB11's pictographic condition holds.
        let cps = [0x41, 0x200D, 0x42];
        let clusters: Vec<&[u32]> = GraphemeIter::new(&cps).collect();
        assert_eq!(clusters, vec![&[0x41, 0x200D][..], &[0x42][..]]);
    }
}
