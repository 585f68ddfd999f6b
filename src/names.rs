//! `INCLUDE_NAMES`-equivalent: code point name lookup.
//!
//! A small hand-seeded subset of `UnicodeData.txt`'s `Name` field, covering
//! exactly the code points `tables` already carries data for -- enough to
//! exercise the feature surface without inventing a names database this
//! port has no source data for.

const NAMES: &[(u32, &str)] = &[
    (0x0041, "LATIN CAPITAL LETTER A"),
    (0x0061, "LATIN SMALL LETTER A"),
    (0x00C5, "LATIN CAPITAL LETTER A WITH RING ABOVE"),
    (0x00E9, "LATIN SMALL LETTER E WITH ACUTE"),
    (0x00DF, "LATIN SMALL LETTER SHARP S"),
    (0x0300, "COMBINING GRAVE ACCENT"),
    (0x0301, "COMBINING ACUTE ACCENT"),
    (0x030A, "COMBINING RING ABOVE"),
    (0x03A3, "GREEK CAPITAL LETTER SIGMA"),
    (0x03C2, "GREEK SMALL LETTER FINAL SIGMA"),
    (0x03C3, "GREEK SMALL LETTER SIGMA"),
    (0x0928, "DEVANAGARI LETTER NA"),
    (0x093F, "DEVANAGARI VOWEL SIGN I"),
    (0x200D, "ZERO WIDTH JOINER"),
    (0x1F1EB, "REGIONAL INDICATOR SYMBOL LETTER F"),
    (0x1F1F7, "REGIONAL INDICATOR SYMBOL LETTER R"),
    (0x1F1F8, "REGIONAL INDICATOR SYMBOL LETTER S"),
    (0x1F1FA, "REGIONAL INDICATOR SYMBOL LETTER U"),
    (0x1F467, "GIRL"),
    (0x1F468, "MAN"),
    (0x1F469, "WOMAN"),
    (0xAC00, "HANGUL SYLLABLE GA"),
];

pub fn code_point_name(cp: u32) -> Option<&'static str> {
    NAMES.iter().find(|&&(c, _)| c == cp).map(|&(_, name)| name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_code_point_has_a_name() {
        assert_eq!(code_point_name(0x0041), Some("LATIN CAPITAL LETTER A"));
    }

    #[test]
    fn test_unseeded_code_point_has_no_name() {
        assert_eq!(code_point_name(0x4E2D), None);
    }
}
