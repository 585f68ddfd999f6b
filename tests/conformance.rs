//! Integration tests: end-to-end scenarios plus hand-seeded
//! `NormalizationTest.txt`/`GraphemeBreakTest.txt`/`CaseFolding.txt`-shaped
//! fixtures, parsed in the teacher's own row-splitting style since the real
//! UCD test files aren't available to this port.

use unicode_study::normalize::{normalize, Form};
use unicode_study::segmentation::{count, GraphemeIter};
use unicode_study::{case, codec, AStr};

fn cps_of(s: &str) -> Vec<u32> {
    s.chars().map(|c| c as u32).collect()
}

// --- End-to-end scenarios ---------------------------------------------

#[test]
fn scenario_1_cafe_lengths_and_uppercase_and_nfd() {
    let a = AStr::from_str("Café");
    assert_eq!(a.codepoint_length(), 4);
    assert_eq!(a.byte_length(), 5);
    assert_eq!(case::to_uppercase(a.as_str()), "CAFÉ");
    let nfd = normalize(a.as_str(), Form::NFD);
    assert_eq!(nfd, "Cafe\u{0301}");
    assert_eq!(nfd.chars().count(), 5);
    assert_eq!(nfd.len(), 6);
}

#[test]
fn scenario_2_sharp_s_full_vs_simple_case_mapping() {
    assert_eq!(case::to_uppercase("ß"), "SS");
    assert_eq!(unicode_study::properties::simple_uppercase(0x00DF), 0x00DF);
    assert_eq!(case::to_fold("ß"), "ss");
    let ss = AStr::from_str("ß");
    let upper = AStr::from_str("SS");
    let mixed = AStr::from_str("Ss");
    assert!(case::canonical_caseless_match(&ss, &upper));
    assert!(case::canonical_caseless_match(&ss, &mixed));
}

#[test]
fn scenario_3_precomposed_a_ring_above_round_trips() {
    let nfd = normalize("\u{00C5}", Form::NFD);
    assert_eq!(nfd, "A\u{030A}");
    assert_eq!(normalize(&nfd, Form::NFC), "\u{00C5}");
    assert_eq!(normalize("\u{00C5}", Form::NFKC), "\u{00C5}");
}

#[test]
fn scenario_4_devanagari_ni_codepoints_vs_graphemes() {
    let mut a = AStr::from_str("\u{0928}\u{093F}");
    assert_eq!(a.codepoint_length(), 2);
    assert_eq!(count(&cps_of(a.as_str())), 1);

    let mut reversed_cp = a.clone();
    reversed_cp.reverse_codepoints();
    assert_eq!(reversed_cp.as_str(), "\u{093F}\u{0928}");

    a.reverse_graphemes();
    assert_eq!(a.as_str(), "\u{0928}\u{093F}");
}

#[test]
fn scenario_5_regional_indicator_pairs_are_two_flags() {
    let s = "\u{1F1FA}\u{1F1F8}\u{1F1EB}\u{1F1F7}";
    let a = AStr::from_str(s);
    assert_eq!(a.codepoint_length(), 4);
    assert_eq!(count(&cps_of(s)), 2);
}

#[test]
fn scenario_6_final_sigma_only_at_word_end() {
    assert_eq!(case::to_lowercase("ΟΔΥΣΣΕΥΣ"), "οδυσσευς");
}

#[test]
fn scenario_7_zwj_family_emoji_is_one_cluster() {
    let cps = [0x1F468, 0x200D, 0x1F469, 0x200D, 0x1F467];
    assert_eq!(count(&cps), 1);
}

#[test]
fn scenario_8_uppercase_buffer_sizing_grows_for_sharp_s() {
    let s = "ß and plain text";
    let upper = case::to_uppercase(s);
    assert_eq!(upper, "SS AND PLAIN TEXT");
    assert!(upper.len() > s.len());
}

// --- NormalizationTest-shaped fixture -----------------------------------

// (source, NFC, NFD, NFKC, NFKD), restricted to code points `tables`
// actually carries decomposition data for.
const NORMALIZATION_ROWS: &[(&str, &str, &str, &str, &str)] = &[
    ("\u{00C5}", "\u{00C5}", "A\u{030A}", "\u{00C5}", "A\u{030A}"),
    ("A\u{030A}", "\u{00C5}", "A\u{030A}", "\u{00C5}", "A\u{030A}"),
    ("\u{00E9}", "\u{00E9}", "e\u{0301}", "\u{00E9}", "e\u{0301}"),
    ("e\u{0301}", "\u{00E9}", "e\u{0301}", "\u{00E9}", "e\u{0301}"),
];

#[test]
fn normalization_test_shaped_rows_round_trip() {
    for &(c1, c2, c3, c4, c5) in NORMALIZATION_ROWS {
        assert_eq!(normalize(c1, Form::NFC), c2, "NFC({c1:?})");
        assert_eq!(normalize(c1, Form::NFD), c3, "NFD({c1:?})");
        assert_eq!(normalize(c1, Form::NFKC), c4, "NFKC({c1:?})");
        assert_eq!(normalize(c1, Form::NFKD), c5, "NFKD({c1:?})");
    }
}

// --- GraphemeBreakTest-shaped fixture ------------------------------------

// Each row is `÷`-delimited cluster text with `×` joining code points that
// stay within a cluster, the same separators `GraphemeBreakTest.txt` uses.
const GRAPHEME_BREAK_ROWS: &[&str] = &[
    "0061 ÷ 0062 ÷ 0063", // a ÷ b ÷ c
    "000D × 000A ÷ 0041", // CR × LF ÷ A
    "0928 × 093F",        // DEVANAGARI NA × VOWEL SIGN I (one cluster)
    "1F1EB × 1F1F7 ÷ 1F1F8 × 1F1FA", // two flags
    "1F468 × 200D × 1F469 × 200D × 1F467", // GB11 family emoji
];

fn parse_grapheme_break_row(row: &str) -> Vec<Vec<u32>> {
    let mut clusters: Vec<Vec<u32>> = vec![Vec::new()];
    for token in row.split_whitespace() {
        match token {
            "÷" => clusters.push(Vec::new()),
            "×" => {}
            hex => clusters
                .last_mut()
                .unwrap()
                .push(u32::from_str_radix(hex, 16).expect("GraphemeBreakTest hex code point")),
        }
    }
    clusters
}

#[test]
fn grapheme_break_test_shaped_rows_match_expected_boundaries() {
    for &row in GRAPHEME_BREAK_ROWS {
        let expected = parse_grapheme_break_row(row);
        let flat: Vec<u32> = expected.iter().flatten().copied().collect();
        let actual: Vec<Vec<u32>> = GraphemeIter::new(&flat).map(|c| c.to_vec()).collect();
        assert_eq!(actual, expected, "row: {row}");
    }
}

// --- CaseFolding-shaped fixture ------------------------------------------

const CASE_FOLD_ROWS: &[(&str, &str)] = &[("ß", "ss"), ("Σ", "σ"), ("A", "a")];

#[test]
fn case_folding_shaped_rows_round_trip() {
    for &(source, folded) in CASE_FOLD_ROWS {
        assert_eq!(case::to_fold(source), folded);
        assert_eq!(case::to_fold(folded), folded, "fold({folded:?}) must be idempotent");
    }
}

// --- Invariants -----------------------------------------------------------

#[test]
fn invariant_codec_round_trips_every_scalar_value() {
    for cp in [0x41u32, 0x00E9, 0x0928, 0x1F468, 0x10FFFF] {
        let mut buf = [0u8; 4];
        let len = codec::encode(cp, &mut buf);
        let (decoded, decoded_len) = codec::decode(&buf[..len]).unwrap();
        assert_eq!(decoded, cp);
        assert_eq!(decoded_len, len);
    }
}

#[test]
fn invariant_grapheme_clusters_concatenate_back_to_source() {
    let s = "Café \u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467} \u{0928}\u{093F}";
    let cps = cps_of(s);
    let rebuilt: String = GraphemeIter::new(&cps)
        .flat_map(|cluster| cluster.iter().map(|&cp| char::from_u32(cp).unwrap()))
        .collect();
    assert_eq!(rebuilt, s);
}

#[test]
fn invariant_reverse_graphemes_is_involutive() {
    let mut a = AStr::from_str("Café \u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}");
    let original = a.as_str().to_string();
    a.reverse_graphemes();
    a.reverse_graphemes();
    assert_eq!(a.as_str(), original);
}
