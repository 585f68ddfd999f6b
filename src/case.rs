//! Full and simple case mapping, case folding, and caseless comparison.
//!
//! Generalizes the teacher's `case.rs` (`to_lowercase`'s `U+0130`/`U+03A3`
//! special cases, `to_uppercase`, `case_fold`'s ypogegrammeni handling,
//! `canonical_caseless_match`, `is_final_sigma`) from free functions over
//! `Vec<u32>` to `AStr`-level string operations, per `SPEC_FULL.md` §4.H.

use crate::buffer::AStr;
use crate::normalize::{self, IsNormalized, NormalizationForm};
use crate::properties;

/// Greek capital sigma and its two lowercase forms: regular (mid-word) and
/// final (word-final), per `SpecialCasing.txt`'s conditional `Final_Sigma` rule.
const GREEK_CAPITAL_SIGMA: u32 = 0x03A3;
const GREEK_SMALL_FINAL_SIGMA: u32 = 0x03C2;
const GREEK_SMALL_SIGMA: u32 = 0x03C3;

/// `SpecialCasing.txt`'s unconditional `U+0130 -> U+0069 U+0307` lowercase
/// mapping (LATIN CAPITAL LETTER I WITH DOT ABOVE): applies regardless of
/// locale, unlike the `tr`/`az`-gated `I`/`i` rules in `locale.rs`. Ported
/// from the teacher's `to_lowercase`, which hard-codes this mapping outside
/// any locale branch.
const LATIN_CAPITAL_I_WITH_DOT_ABOVE: u32 = 0x0130;
const LATIN_SMALL_I_WITH_DOT_ABOVE: &[u32] = &[0x0069, 0x0307];

/// Is `cp` lowercased to `U+03C2` (final sigma) rather than `U+03C3`,
/// per SpecialCasing's `Final_Sigma` condition: preceded by a cased letter
/// (skipping case-ignorable code points) and not followed by one.
///
/// Ported from the teacher's `is_final_sigma`, generalized to the
/// trie-backed `cased`/`case_ignorable` predicates instead of `HashSet` lookups.
fn is_final_sigma(cps: &[u32], pos: usize) -> bool {
    let preceded_by_cased = cps[..pos]
        .iter()
        .rev()
        .find(|&&cp| !properties::case_ignorable(cp))
        .is_some_and(|&cp| properties::cased(cp));
    if !preceded_by_cased {
        return false;
    }
    !cps[pos + 1..]
        .iter()
        .find(|&&cp| !properties::case_ignorable(cp))
        .is_some_and(|&cp| properties::cased(cp))
}

fn full_lowercase_one(cps: &[u32], pos: usize, out: &mut Vec<u32>) {
    let cp = cps[pos];
    if cp == GREEK_CAPITAL_SIGMA {
        out.push(if is_final_sigma(cps, pos) {
            GREEK_SMALL_FINAL_SIGMA
        } else {
            GREEK_SMALL_SIGMA
        });
        return;
    }
    if cp == LATIN_CAPITAL_I_WITH_DOT_ABOVE {
        out.extend_from_slice(LATIN_SMALL_I_WITH_DOT_ABOVE);
        return;
    }
    out.push(properties::simple_lowercase(cp));
}

fn cps_of(s: &str) -> Vec<u32> {
    s.chars().map(|c| c as u32).collect()
}

fn string_of(cps: &[u32]) -> String {
    cps.iter().map(|&cp| char::from_u32(cp).expect("AStr invariant I1 violated")).collect()
}

pub fn to_lowercase(s: &str) -> String {
    let cps = cps_of(s);
    let mut out = Vec::with_capacity(cps.len());
    for pos in 0..cps.len() {
        full_lowercase_one(&cps, pos, &mut out);
    }
    string_of(&out)
}

pub fn to_uppercase(s: &str) -> String {
    let cps = cps_of(s);
    let mut out = Vec::with_capacity(cps.len());
    for &cp in &cps {
        out.extend_from_slice(properties::full_uppercase(cp));
    }
    string_of(&out)
}

/// A code point is titlecased iff it is `cased` and the previous cased code
/// point (ignoring case-ignorable code points) is absent or a cluster
/// terminator (non-cased: whitespace, punctuation, ...).
fn title_break_before(cps: &[u32], pos: usize) -> bool {
    cps[..pos]
        .iter()
        .rev()
        .find(|&&cp| !properties::case_ignorable(cp))
        .is_none_or(|&cp| !properties::cased(cp))
}

pub fn to_titlecase(s: &str) -> String {
    let cps = cps_of(s);
    let mut out = Vec::with_capacity(cps.len());
    for pos in 0..cps.len() {
        let cp = cps[pos];
        if properties::cased(cp) && title_break_before(&cps, pos) {
            out.extend_from_slice(properties::full_titlecase(cp));
        } else {
            full_lowercase_one(&cps, pos, &mut out);
        }
    }
    string_of(&out)
}

pub fn to_fold(s: &str) -> String {
    let cps = cps_of(s);
    let mut out = Vec::with_capacity(cps.len());
    for &cp in &cps {
        out.extend_from_slice(properties::full_fold(cp));
    }
    string_of(&out)
}

pub fn is_uppercase(s: &str) -> bool {
    s.chars().all(|c| properties::simple_uppercase(c as u32) == c as u32)
}

pub fn is_lowercase(s: &str) -> bool {
    s.chars().all(|c| properties::simple_lowercase(c as u32) == c as u32)
}

pub fn is_titlecase(s: &str) -> bool {
    s.chars().all(|c| properties::simple_titlecase(c as u32) == c as u32)
}

pub fn is_folded(s: &str) -> bool {
    s.chars().all(|c| properties::simple_fold(c as u32) == c as u32)
}

/// D145: `NFD(toCasefold(NFD(X))) == NFD(toCasefold(NFD(Y)))`.
///
/// Carried over verbatim in spirit from the teacher's
/// `canonical_caseless_match`, generalized to `AStr`.
pub fn canonical_caseless_match(a: &AStr, b: &AStr) -> bool {
    canonical_caseless_key(a.as_str()) == canonical_caseless_key(b.as_str())
}

fn canonical_caseless_key(s: &str) -> String {
    let step1 = normalize::normalize(s, NormalizationForm::NFD);
    let folded = to_fold(&step1);
    normalize::normalize(&folded, NormalizationForm::NFD)
}

impl AStr {
    pub fn to_uppercase(&self) -> AStr {
        AStr::from_str(&to_uppercase(self.as_str()))
    }

    pub fn to_lowercase(&self) -> AStr {
        AStr::from_str(&to_lowercase(self.as_str()))
    }

    pub fn to_titlecase(&self) -> AStr {
        AStr::from_str(&to_titlecase(self.as_str()))
    }

    pub fn to_fold(&self) -> AStr {
        AStr::from_str(&to_fold(self.as_str()))
    }
}

/// Confirms `s` is normalized to `form` without running the full algorithm
/// when `quick_check` already answers `Yes`/`No`. Used by callers that want
/// to skip normalization work on already-normalized input.
pub fn is_normalized(s: &str, form: NormalizationForm) -> bool {
    match normalize::quick_check(s, form) {
        IsNormalized::Yes => true,
        IsNormalized::No => false,
        IsNormalized::Maybe => normalize::normalize(s, form) == s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_uppercase_cafe() {
        assert_eq!(to_uppercase("Café"), "CAFÉ");
    }

    #[test]
    fn test_sharp_s_full_vs_simple() {
        assert_eq!(to_uppercase("ß"), "SS");
        assert_eq!(properties::simple_uppercase(0x00DF), 0x00DF);
    }

    #[test]
    fn test_sharp_s_fold() {
        assert_eq!(to_fold("ß"), "ss");
    }

    #[test]
    fn test_final_sigma_only_applies_word_finally() {
        assert_eq!(to_lowercase("ΟΔΥΣΣΕΥΣ"), "οδυσσευς");
    }

    #[test]
    fn test_capital_i_with_dot_above_lowercases_unconditionally() {
        assert_eq!(to_lowercase("İ"), "i\u{0307}");
    }

    #[test]
    fn test_canonical_caseless_match_sharp_s() {
        let a = AStr::from_str("ß");
        let b = AStr::from_str("SS");
        let c = AStr::from_str("Ss");
        assert!(canonical_caseless_match(&a, &b));
        assert!(canonical_caseless_match(&a, &c));
    }

    #[test]
    fn test_is_lowercase_and_is_uppercase() {
        assert!(is_lowercase("café"));
        assert!(!is_uppercase("café"));
        assert!(is_uppercase("CAFE"));
    }
}
