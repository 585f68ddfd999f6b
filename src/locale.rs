//! `INCLUDE_LOCALE`-equivalent: the two locale-tailored `SpecialCasing`
//! conditions the teacher's `case.rs` names but leaves unhandled ("can
//! possibly be ignored, since they depend on the locale"):
//!
//! 1. Lithuanian: a soft-dotted letter (`i`, `j`, `į`, `ì`, ...) keeps its
//!    dot as an explicit `COMBINING DOT ABOVE` when lowercased in front of
//!    another accent, since the accent would otherwise visually replace it.
//! 2. Turkish/Azerbaijani: `I`/`i` map through the dotless/dotted pair
//!    (`ı`/`İ`) instead of the default-locale `i`/`I`.

use crate::properties;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    Root,
    Lithuanian,
    TurkishOrAzerbaijani,
}

const LATIN_CAPITAL_I: u32 = 0x0049;
const LATIN_SMALL_I: u32 = 0x0069;
const LATIN_SMALL_DOTLESS_I: u32 = 0x0131;
const LATIN_CAPITAL_I_WITH_DOT_ABOVE: u32 = 0x0130;
const COMBINING_DOT_ABOVE: u32 = 0x0307;

const SOFT_DOTTED: &[u32] = &[0x0069, 0x006A, 0x012F, 0x00EC, 0x00ED, 0x0129, 0x012B];

fn is_soft_dotted(cp: u32) -> bool {
    SOFT_DOTTED.contains(&cp)
}

fn is_above_combining_mark(cp: u32) -> bool {
    properties::ccc(cp) == 230
}

fn to_lowercase_one(cps: &[u32], pos: usize, locale: Locale, out: &mut Vec<u32>) {
    let cp = cps[pos];
    match (locale, cp) {
        (Locale::TurkishOrAzerbaijani, LATIN_CAPITAL_I) => out.push(LATIN_SMALL_DOTLESS_I),
        (Locale::TurkishOrAzerbaijani, LATIN_CAPITAL_I_WITH_DOT_ABOVE) => out.push(LATIN_SMALL_I),
        (Locale::Lithuanian, _) if is_soft_dotted(cp) => {
            out.push(properties::simple_lowercase(cp));
            if cps.get(pos + 1).is_some_and(|&next| is_above_combining_mark(next)) {
                out.push(COMBINING_DOT_ABOVE);
            }
        }
        // Unconditional per SpecialCasing.txt regardless of locale -- only
        // tr/az override U+0130 (handled above), so every other locale falls
        // through to the same expansion `case::to_lowercase` applies.
        (_, LATIN_CAPITAL_I_WITH_DOT_ABOVE) => {
            out.push(LATIN_SMALL_I);
            out.push(COMBINING_DOT_ABOVE);
        }
        _ => out.push(properties::simple_lowercase(cp)),
    }
}

pub fn to_lowercase_locale(s: &str, locale: Locale) -> String {
    let cps: Vec<u32> = s.chars().map(|c| c as u32).collect();
    let mut out = Vec::with_capacity(cps.len());
    for pos in 0..cps.len() {
        to_lowercase_one(&cps, pos, locale, &mut out);
    }
    out.iter().map(|&cp| char::from_u32(cp).expect("AStr invariant I1 violated")).collect()
}

pub fn to_uppercase_locale(s: &str, locale: Locale) -> String {
    s.chars()
        .map(|c| {
            let cp = c as u32;
            match (locale, cp) {
                (Locale::TurkishOrAzerbaijani, LATIN_SMALL_I) => LATIN_CAPITAL_I_WITH_DOT_ABOVE,
                (Locale::TurkishOrAzerbaijani, LATIN_SMALL_DOTLESS_I) => LATIN_CAPITAL_I,
                _ => properties::simple_uppercase(cp),
            }
        })
        .map(|cp| char::from_u32(cp).expect("AStr invariant I1 violated"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turkish_dotless_i() {
        assert_eq!(to_lowercase_locale("I", Locale::TurkishOrAzerbaijani), "ı");
        assert_eq!(to_lowercase_locale("İ", Locale::TurkishOrAzerbaijani), "i");
    }

    #[test]
    fn test_root_locale_uses_default_mapping() {
        assert_eq!(to_lowercase_locale("I", Locale::Root), "i");
    }

    #[test]
    fn test_root_and_lithuanian_apply_unconditional_dot_above_expansion() {
        assert_eq!(to_lowercase_locale("İ", Locale::Root), "i\u{0307}");
        assert_eq!(to_lowercase_locale("İ", Locale::Lithuanian), "i\u{0307}");
    }

    #[test]
    fn test_turkish_uppercase_dotted_i() {
        assert_eq!(to_uppercase_locale("i", Locale::TurkishOrAzerbaijani), "İ");
    }

    #[test]
    fn test_lithuanian_keeps_dot_before_accent() {
        let result = to_lowercase_locale("I\u{0300}", Locale::Lithuanian);
        assert_eq!(result, "i\u{0307}\u{0300}");
    }
}
