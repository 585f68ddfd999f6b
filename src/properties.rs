//! Property lookup: general category, GCB class, combining class,
//! quick-check, decomposition/composition, case & fold mappings, block.
//!
//! Generalizes the teacher's `ucd.rs`: the same function surface
//! (`decomposition_mapping`, `combining_class`, `is_starter`, `is_allowed`,
//! `primary_composite`, `lowercase_mapping`, `uppercase_mapping`, `cased`,
//! `case_ignorable`, `case_folding`, `grapheme_cluster_break`,
//! `extended_pictorial`) rehomed from runtime-loaded `HashMap`/`HashSet`
//! fixtures onto a two-stage trie (`trie::TwoStageTrie`) for the fixed-size
//! scalar fields, with variable-length mappings (decomposition, full casing)
//! kept as sparse `HashMap`s -- the natural Rust shape for what the distilled
//! spec calls an "id into a separate table".

use crate::tables;
use crate::trie::TwoStageTrie;
use lazy_static::lazy_static;
use std::collections::HashMap;

pub const UNICODE_VERSION: &str = tables::UNICODE_VERSION;

/// https://www.unicode.org/reports/tr44/#General_Category_Values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GeneralCategory {
    Lu,
    Ll,
    Lt,
    Lm,
    Lo,
    Mn,
    Mc,
    Me,
    Nd,
    Nl,
    No,
    Pc,
    Pd,
    Ps,
    Pe,
    Pi,
    Pf,
    Po,
    Sm,
    Sc,
    Sk,
    So,
    Zs,
    Zl,
    Zp,
    Cc,
    Cf,
    Cs,
    Co,
    /// Unassigned, or simply not present in this crate's hand-seeded tables
    /// (see `tables.rs`'s module doc comment). Used as the trie default.
    #[default]
    Cn,
}

/// https://unicode.org/reports/tr29/#Grapheme_Cluster_Break_Property_Values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GraphemeClusterBreak {
    CN, // control char, separator
    CR,
    EB,
    EBG,
    EM,
    EX, // extend
    GAZ,
    L, // Hangul Syllable Type L
    LF,
    LV,
    LVT,
    PP, // prepend
    RI, // regional indicator
    SM, // spacing mark
    T,
    V,
    #[default]
    XX, // unknown / other
    ZWJ,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Block {
    BasicLatin,
    Latin1Supplement,
    LatinExtendedA,
    CombiningDiacriticalMarks,
    GreekAndCoptic,
    Armenian,
    Devanagari,
    HangulJamo,
    GeneralPunctuation,
    EnclosedAlphanumericSupplement,
    MiscellaneousSymbolsAndPictographs,
    HangulSyllables,
    CjkUnifiedIdeographs,
    #[default]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizationForm {
    NFC,
    NFD,
    NFKC,
    NFKD,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuickCheck {
    #[default]
    Yes,
    No,
    Maybe,
}

/// The fixed-size part of a code point's property record -- the part that
/// benefits from O(1) dense-array lookup through the two-stage trie.
/// Variable-length data (decomposition, full casing) lives in side maps,
/// see below.
#[derive(Debug, Clone, Copy, Default)]
struct Row {
    category: GeneralCategory,
    gcb: GraphemeClusterBreak,
    ccc: u8,
    qc_nfc: QuickCheck,
    qc_nfd: QuickCheck,
    qc_nfkc: QuickCheck,
    qc_nfkd: QuickCheck,
    cased: bool,
    case_ignorable: bool,
    extended_pictographic: bool,
}

// `Row` must be `PartialEq` for nothing; `TwoStageTrie` only needs `Copy +
// Default`. Kept intentionally minimal.

struct Tables {
    rows: TwoStageTrie<Row>,
    decomposition: HashMap<u32, &'static [u32]>,
    compatibility_decomposition: HashMap<u32, &'static [u32]>,
    primary_composites: HashMap<(u32, u32), u32>,
    uppercase_full: HashMap<u32, &'static [u32]>,
    lowercase_simple: HashMap<u32, u32>,
    titlecase_full: HashMap<u32, &'static [u32]>,
    case_fold_full: HashMap<u32, &'static [u32]>,
}

fn build_tables() -> Tables {
    let mut overrides: Vec<(u32, Row)> = Vec::new();

    for &(cp, category) in tables::CATEGORY_RANGES_EXPANDED.iter() {
        push_or_merge(&mut overrides, cp, |row| row.category = category);
    }
    for &(cp, ccc) in tables::CCC {
        push_or_merge(&mut overrides, cp, |row| row.ccc = ccc);
    }
    for &(cp, gcb) in tables::GCB {
        push_or_merge(&mut overrides, cp, |row| row.gcb = gcb);
    }
    for &cp in tables::CASED.iter() {
        push_or_merge(&mut overrides, cp, |row| row.cased = true);
    }
    for &cp in tables::CASE_IGNORABLE {
        push_or_merge(&mut overrides, cp, |row| row.case_ignorable = true);
    }
    for &cp in tables::EXTENDED_PICTORIAL {
        push_or_merge(&mut overrides, cp, |row| row.extended_pictographic = true);
    }
    for &cp in tables::NFC_QC_MAYBE {
        push_or_merge(&mut overrides, cp, |row| row.qc_nfc = QuickCheck::Maybe);
    }
    for &cp in tables::NFC_QC_NO {
        push_or_merge(&mut overrides, cp, |row| row.qc_nfc = QuickCheck::No);
    }
    for &cp in tables::NFD_QC_NO {
        push_or_merge(&mut overrides, cp, |row| row.qc_nfd = QuickCheck::No);
    }
    for &cp in tables::NFKC_QC_NO {
        push_or_merge(&mut overrides, cp, |row| row.qc_nfkc = QuickCheck::No);
    }
    for &cp in tables::NFKD_QC_NO {
        push_or_merge(&mut overrides, cp, |row| row.qc_nfkd = QuickCheck::No);
    }

    Tables {
        rows: TwoStageTrie::build(&overrides),
        decomposition: tables::DECOMPOSITION.iter().copied().collect(),
        compatibility_decomposition: tables::COMPATIBILITY_DECOMPOSITION.iter().copied().collect(),
        primary_composites: tables::PRIMARY_COMPOSITES.iter().copied().collect(),
        uppercase_full: tables::UPPERCASE_FULL.iter().copied().collect(),
        lowercase_simple: tables::LOWERCASE_SIMPLE.iter().copied().collect(),
        titlecase_full: tables::TITLECASE_FULL.iter().copied().collect(),
        case_fold_full: tables::CASE_FOLD_FULL.iter().copied().collect(),
    }
}

/// Merges a field update into `overrides`, creating the row if this is the
/// first update seen for `cp`. `TwoStageTrie::build` takes a flat list of
/// pairs, one per code point, so every field touching the same code point has
/// to land in the same `Row` before the trie is built.
fn push_or_merge(overrides: &mut Vec<(u32, Row)>, cp: u32, f: impl FnOnce(&mut Row)) {
    if let Some(existing) = overrides.iter_mut().find(|(c, _)| *c == cp) {
        f(&mut existing.1);
    } else {
        let mut row = Row::default();
        f(&mut row);
        overrides.push((cp, row));
    }
}

lazy_static! {
    static ref TABLES: Tables = build_tables();
}

pub fn category(cp: u32) -> GeneralCategory {
    TABLES.rows.get(cp).category
}

pub fn gcb_class(cp: u32) -> GraphemeClusterBreak {
    TABLES.rows.get(cp).gcb
}

pub fn ccc(cp: u32) -> u8 {
    TABLES.rows.get(cp).ccc
}

pub fn is_starter(cp: u32) -> bool {
    ccc(cp) == 0
}

/// Block membership is naturally a small set of contiguous ranges (this is
/// exactly the shape of UCD's own `Blocks.txt`), so unlike the other
/// properties this one is a short linear scan rather than a trie entry --
/// expanding every code point in, say, the CJK Unified Ideographs block into
/// an explicit trie override would bloat `tables.rs` for no benefit.
pub fn block_of(cp: u32) -> Block {
    for &(start, end, block) in tables::BLOCK_RANGES {
        if (start..=end).contains(&cp) {
            return block;
        }
    }
    Block::Unknown
}

pub fn cased(cp: u32) -> bool {
    TABLES.rows.get(cp).cased
}

pub fn case_ignorable(cp: u32) -> bool {
    TABLES.rows.get(cp).case_ignorable
}

pub fn extended_pictographic(cp: u32) -> bool {
    TABLES.rows.get(cp).extended_pictographic
}

pub fn quick_check(cp: u32, form: NormalizationForm) -> QuickCheck {
    let row = TABLES.rows.get(cp);
    match form {
        NormalizationForm::NFC => row.qc_nfc,
        NormalizationForm::NFD => row.qc_nfd,
        NormalizationForm::NFKC => row.qc_nfkc,
        NormalizationForm::NFKD => row.qc_nfkd,
    }
}

/// Canonical (`Decomposition_Type=Canonical`) decomposition, one level (the
/// caller recurses -- see `normalize::decompose`).
pub fn decomposition_mapping(cp: u32) -> Option<&'static [u32]> {
    TABLES.decomposition.get(&cp).copied()
}

/// Compatibility decomposition (falls back to the canonical mapping, since
/// every canonically-decomposable code point is also compatibility-decomposable).
pub fn compatibility_decomposition_mapping(cp: u32) -> Option<&'static [u32]> {
    TABLES
        .compatibility_decomposition
        .get(&cp)
        .copied()
        .or_else(|| decomposition_mapping(cp))
}

pub fn primary_composite(a: u32, b: u32) -> Option<u32> {
    TABLES.primary_composites.get(&(a, b)).copied()
}

pub fn simple_lowercase(cp: u32) -> u32 {
    TABLES.lowercase_simple.get(&cp).copied().unwrap_or(cp)
}

pub fn simple_uppercase(cp: u32) -> u32 {
    // The simple mapping is the first code point of the full mapping when
    // the full mapping is itself 1:1; multi-code-point full mappings (e.g.
    // U+00DF -> "SS") have no simple uppercase and map to themselves, per
    // the distilled spec's worked scenario 2.
    match TABLES.uppercase_full.get(&cp) {
        Some(&[single]) => single,
        _ => cp,
    }
}

pub fn simple_titlecase(cp: u32) -> u32 {
    match TABLES.titlecase_full.get(&cp) {
        Some(&[single]) => single,
        _ => simple_uppercase(cp),
    }
}

pub fn simple_fold(cp: u32) -> u32 {
    match TABLES.case_fold_full.get(&cp) {
        Some(&[single]) => single,
        _ => simple_lowercase(cp),
    }
}

pub fn full_uppercase(cp: u32) -> &'static [u32] {
    TABLES
        .uppercase_full
        .get(&cp)
        .copied()
        .unwrap_or_else(|| single_cp_slice(cp))
}

pub fn full_titlecase(cp: u32) -> &'static [u32] {
    TABLES
        .titlecase_full
        .get(&cp)
        .copied()
        .unwrap_or_else(|| full_uppercase(cp))
}

pub fn full_fold(cp: u32) -> &'static [u32] {
    // A code point with no full-folding entry of its own still folds to its
    // simple lowercase mapping (CaseFolding.txt's "C"/"S" status code points
    // are a subset of the cased code points with a lowercase mapping): e.g.
    // Greek capital sigma has no multi-code-point `cf` row but still folds.
    TABLES
        .case_fold_full
        .get(&cp)
        .copied()
        .unwrap_or_else(|| single_cp_slice(simple_lowercase(cp)))
}

/// Leaks a one-element slice for a code point with no table entry.
/// `tables.rs`'s own literal slices are `'static` because they're compiled
/// in; code points that fall back to "map to themselves" need a `'static`
/// slice too, so this interns a tiny per-process cache instead of leaking on
/// every call.
fn single_cp_slice(cp: u32) -> &'static [u32] {
    lazy_static! {
        static ref CACHE: std::sync::Mutex<HashMap<u32, &'static [u32]>> =
            std::sync::Mutex::new(HashMap::new());
    }
    let mut cache = CACHE.lock().unwrap();
    cache
        .entry(cp)
        .or_insert_with(|| Box::leak(vec![cp].into_boxed_slice()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ccc_and_starter() {
        assert_eq!(ccc(0x0301), 230); // combining acute
        assert!(!is_starter(0x0301));
        assert!(is_starter(0x0041)); // 'A'
    }

    #[test]
    fn test_decomposition_and_composition_round_trip() {
        let d = decomposition_mapping(0x00E9).unwrap();
        assert_eq!(d, &[0x0065, 0x0301]);
        assert_eq!(primary_composite(0x0065, 0x0301), Some(0x00E9));
    }

    #[test]
    fn test_cased_and_case_ignorable() {
        assert!(cased(0x0041)); // 'A'
        assert!(cased(0x00DF)); // 'ß'
        assert!(case_ignorable(0x0301)); // combining acute is case-ignorable
        assert!(!cased(0x0301));
    }

    #[test]
    fn test_full_uppercase_sharp_s() {
        assert_eq!(full_uppercase(0x00DF), &[0x0053, 0x0053]);
        assert_eq!(simple_uppercase(0x00DF), 0x00DF); // no simple mapping
    }

    #[test]
    fn test_gcb_regional_indicator() {
        assert_eq!(gcb_class(0x1F1FA), GraphemeClusterBreak::RI);
        assert_eq!(gcb_class(0x1F1F8), GraphemeClusterBreak::RI);
    }

    #[test]
    fn test_block_of() {
        assert_eq!(block_of(0x0041), Block::BasicLatin);
        assert_eq!(block_of(0x00E9), Block::Latin1Supplement);
    }
}
