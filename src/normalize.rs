//! NFC/NFD/NFKC/NFKD normalization (UAX #15), canonical ordering, Hangul
//! algorithmic decomposition/composition, and quick-check.
//!
//! Generalizes the teacher's `normalise.rs` (`quick_check`, `decompose`,
//! `to_nfd`, `to_nfc`) to all four forms -- the teacher's own comment
//! `// Normalisation::NFKC => todo!()` is resolved here -- and to Hangul,
//! which the teacher's table-only approach never covered.

use crate::properties::{self, NormalizationForm, QuickCheck};

const HANGUL_S_BASE: u32 = 0xAC00;
const HANGUL_L_BASE: u32 = 0x1100;
const HANGUL_V_BASE: u32 = 0x1161;
const HANGUL_T_BASE: u32 = 0x11A7;
const HANGUL_L_COUNT: u32 = 19;
const HANGUL_V_COUNT: u32 = 21;
const HANGUL_T_COUNT: u32 = 28;
const HANGUL_N_COUNT: u32 = HANGUL_V_COUNT * HANGUL_T_COUNT;
const HANGUL_S_COUNT: u32 = HANGUL_L_COUNT * HANGUL_N_COUNT;

mod hangul {
    use super::*;

    pub fn is_syllable(cp: u32) -> bool {
        (HANGUL_S_BASE..HANGUL_S_BASE + HANGUL_S_COUNT).contains(&cp)
    }

    /// UAX #15 §3.12: a Hangul syllable decomposes arithmetically into L,V[,T].
    pub fn decompose(cp: u32) -> [u32; 3] {
        let s_index = cp - HANGUL_S_BASE;
        let l = HANGUL_L_BASE + s_index / HANGUL_N_COUNT;
        let v = HANGUL_V_BASE + (s_index % HANGUL_N_COUNT) / HANGUL_T_COUNT;
        let t_index = s_index % HANGUL_T_COUNT;
        let t = if t_index == 0 { 0 } else { HANGUL_T_BASE + t_index };
        [l, v, t]
    }

    pub fn compose(a: u32, b: u32) -> Option<u32> {
        // L + V -> LV
        if (HANGUL_L_BASE..HANGUL_L_BASE + HANGUL_L_COUNT).contains(&a)
            && (HANGUL_V_BASE..HANGUL_V_BASE + HANGUL_V_COUNT).contains(&b)
        {
            let l_index = a - HANGUL_L_BASE;
            let v_index = b - HANGUL_V_BASE;
            return Some(HANGUL_S_BASE + (l_index * HANGUL_V_COUNT + v_index) * HANGUL_T_COUNT);
        }
        // LV + T -> LVT
        if is_syllable(a) && (a - HANGUL_S_BASE) % HANGUL_T_COUNT == 0 {
            let t_index = b.checked_sub(HANGUL_T_BASE)?;
            if t_index > 0 && t_index < HANGUL_T_COUNT {
                return Some(a + t_index);
            }
        }
        None
    }
}

fn is_compatibility_form(form: NormalizationForm) -> bool {
    matches!(form, NormalizationForm::NFKC | NormalizationForm::NFKD)
}

fn is_composed_form(form: NormalizationForm) -> bool {
    matches!(form, NormalizationForm::NFC | NormalizationForm::NFKC)
}

/// Recursively decomposes one code point to its canonical (NFD/NFC) or
/// compatibility (NFKD/NFKC) base sequence, including Hangul.
fn decompose_one(cp: u32, compatibility: bool, out: &mut Vec<u32>) {
    if hangul::is_syllable(cp) {
        for &part in hangul::decompose(cp).iter() {
            if part != 0 {
                out.push(part);
            }
        }
        return;
    }
    let mapping = if compatibility {
        properties::compatibility_decomposition_mapping(cp)
    } else {
        properties::decomposition_mapping(cp)
    };
    match mapping {
        Some(parts) => {
            for &part in parts {
                decompose_one(part, compatibility, out);
            }
        }
        None => out.push(cp),
    }
}

/// Stable-sorts each maximal run of nonzero-CCC code points by CCC (UAX #15's
/// canonical ordering algorithm). Mirrors the teacher's `to_nfd`, which
/// already used `sort_by` for exactly this -- Rust's stable sort makes an
/// explicit insertion sort unnecessary for the short runs this produces.
fn canonical_reorder(cps: &mut [u32]) {
    let mut i = 0;
    while i < cps.len() {
        if properties::ccc(cps[i]) == 0 {
            i += 1;
            continue;
        }
        let start = i;
        while i < cps.len() && properties::ccc(cps[i]) != 0 {
            i += 1;
        }
        cps[start..i].sort_by_key(|&cp| properties::ccc(cp));
    }
}

fn decompose_all(cps: &[u32], compatibility: bool) -> Vec<u32> {
    let mut out = Vec::with_capacity(cps.len());
    for &cp in cps {
        decompose_one(cp, compatibility, &mut out);
    }
    canonical_reorder(&mut out);
    out
}

/// Composes a canonically-ordered, fully-decomposed sequence in place,
/// applying the blocking-class rule: a later code point only composes with
/// the most recent starter if no intervening combining mark has a combining
/// class >= the later code point's.
fn compose_all(cps: &[u32]) -> Vec<u32> {
    if cps.is_empty() {
        return Vec::new();
    }
    let mut out: Vec<u32> = vec![cps[0]];
    let mut starter_idx = 0usize;
    let mut max_ccc_since_starter = 0u8;
    for &cp in &cps[1..] {
        let ccc = properties::ccc(cp);
        let starter = out[starter_idx];
        let blocked = ccc != 0 && max_ccc_since_starter >= ccc;
        let composite = if blocked {
            None
        } else {
            hangul::compose(starter, cp).or_else(|| properties::primary_composite(starter, cp))
        };
        match composite {
            Some(composed) => {
                out[starter_idx] = composed;
                // the composite absorbs the starter's position; combining
                // marks consumed up to now stay "seen" for blocking purposes.
            }
            None => {
                out.push(cp);
                if ccc == 0 {
                    starter_idx = out.len() - 1;
                    max_ccc_since_starter = 0;
                } else {
                    max_ccc_since_starter = max_ccc_since_starter.max(ccc);
                }
            }
        }
    }
    out
}

fn cps_of(s: &str) -> Vec<u32> {
    s.chars().map(|c| c as u32).collect()
}

fn string_of(cps: &[u32]) -> String {
    cps.iter().map(|&cp| char::from_u32(cp).expect("AStr invariant I1 violated")).collect()
}

/// Normalizes `s` to `form`. Infallible: per `SPEC_FULL.md` §4.I, none of the
/// normalizer's own logic can fail -- only surrounding allocation can, which
/// is surfaced the same way as every other mutator.
pub fn normalize(s: &str, form: NormalizationForm) -> String {
    let cps = cps_of(s);
    let compatibility = is_compatibility_form(form);
    let decomposed = decompose_all(&cps, compatibility);
    if is_composed_form(form) {
        string_of(&compose_all(&decomposed))
    } else {
        string_of(&decomposed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsNormalized {
    Yes,
    No,
    Maybe,
}

/// Scans `s` once: if every code point's quick-check value is `Yes` and CCC
/// is non-decreasing within each combining run, returns `Yes`; any `No`
/// short-circuits to `No`; otherwise `Maybe` and the caller must run the
/// full algorithm. Ported from the teacher's `quick_check`, extended to
/// NFKC/NFKD.
pub fn quick_check(s: &str, form: NormalizationForm) -> IsNormalized {
    let mut maybe = false;
    let mut last_ccc = 0u8;
    for c in s.chars() {
        let cp = c as u32;
        match properties::quick_check(cp, form) {
            QuickCheck::No => return IsNormalized::No,
            QuickCheck::Maybe => maybe = true,
            QuickCheck::Yes => {}
        }
        let ccc = properties::ccc(cp);
        if ccc != 0 && ccc < last_ccc {
            return IsNormalized::No;
        }
        last_ccc = ccc;
    }
    if maybe {
        IsNormalized::Maybe
    } else {
        IsNormalized::Yes
    }
}

pub use properties::NormalizationForm as Form;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nfd_decomposes_precomposed_letter() {
        assert_eq!(normalize("\u{00C5}", NormalizationForm::NFD), "A\u{030A}");
    }

    #[test]
    fn test_nfc_recomposes_after_nfd() {
        let nfd = normalize("\u{00C5}", NormalizationForm::NFD);
        assert_eq!(normalize(&nfd, NormalizationForm::NFC), "\u{00C5}");
    }

    #[test]
    fn test_nfkc_of_precomposed_letter_is_unchanged() {
        assert_eq!(normalize("\u{00C5}", NormalizationForm::NFKC), "\u{00C5}");
    }

    #[test]
    fn test_canonical_reorder_sorts_combining_run_by_ccc() {
        // COMBINING CEDILLA (ccc=202) then COMBINING DOT BELOW (ccc=220):
        // already in CCC order, so a swapped-order input should reorder back.
        let mut cps = vec!['e' as u32, 0x0323, 0x0327]; // dot-below(220), cedilla(202)
        canonical_reorder(&mut cps);
        assert_eq!(cps, vec!['e' as u32, 0x0327, 0x0323]);
    }

    #[test]
    fn test_hangul_round_trip() {
        // HANGUL SYLLABLE GA = L(G) + V(A)
        let ga = 0xAC00;
        let decomposed = hangul::decompose(ga);
        assert_eq!(decomposed, [0x1100, 0x1161, 0]);
        assert_eq!(hangul::compose(0x1100, 0x1161), Some(ga));
    }

    #[test]
    fn test_quick_check_yes_for_plain_ascii() {
        assert_eq!(quick_check("hello", NormalizationForm::NFC), IsNormalized::Yes);
    }

    #[test]
    fn test_quick_check_maybe_for_combining_mark() {
        assert_eq!(quick_check("e\u{0301}", NormalizationForm::NFC), IsNormalized::Maybe);
    }

    #[test]
    fn test_idempotence() {
        for form in [
            NormalizationForm::NFC,
            NormalizationForm::NFD,
            NormalizationForm::NFKC,
            NormalizationForm::NFKD,
        ] {
            let once = normalize("Cafe\u{0301}", form);
            let twice = normalize(&once, form);
            assert_eq!(once, twice);
        }
    }
}
