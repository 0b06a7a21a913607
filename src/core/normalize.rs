// src/core/normalize.rs
//! Text cleanup and per-language search normalization.
//!
//! Index tokens and query words pass through the same functions so that
//! comparisons happen between equally folded strings.

use crate::core::converter::Orthography;
use crate::core::types::{Flavorisation, Lang, TokenSlot};
use unicode_normalization::UnicodeNormalization;

/// Leading character of a translation that has not been reviewed yet.
pub const UNVERIFIED_MARKER: char = '!';

pub fn is_unverified(text: &str) -> bool {
    text.starts_with(UNVERIFIED_MARKER)
}

pub fn strip_unverified(text: &str) -> &str {
    text.strip_prefix(UNVERIFIED_MARKER).unwrap_or(text)
}

/// Removes every `open ... close` annotation from `text`.
/// An unterminated annotation runs to the end of the text.
pub fn strip_brackets(text: &str, open: char, close: char) -> String {
    let mut result = String::with_capacity(text.len());
    let mut depth = 0usize;
    for c in text.chars() {
        if c == open {
            depth += 1;
        } else if c == close && depth > 0 {
            depth -= 1;
        } else if depth == 0 {
            result.push(c);
        }
    }
    result.trim().to_string()
}

/// Strips square then round annotations, the cleanup applied before indexing.
pub fn strip_annotations(text: &str) -> String {
    strip_brackets(&strip_brackets(text, '[', ']'), '(', ')')
}

/// Splits a field into synonyms: on `;` when present, otherwise on `,`.
pub fn split_synonyms(text: &str) -> Vec<&str> {
    if text.contains(';') {
        text.split(';').collect()
    } else {
        text.split(',').collect()
    }
}

fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

/// Lowercases and drops spaces, commas and stray combining marks.
pub fn basic_fold(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|&c| c != ' ' && c != ',' && !is_combining_mark(c))
        .collect()
}

/// Reduces Latin letters with diacritics to their base letters.
pub fn filter_latin(text: &str) -> String {
    text.nfd()
        .filter(|&c| !is_combining_mark(c))
        .map(|c| match c {
            'ł' => 'l',
            'Ł' => 'L',
            'đ' => 'd',
            'Đ' => 'D',
            'ø' => 'o',
            _ => c,
        })
        .collect()
}

/// Merges `ё` into `е` as Russian search treats them as one letter.
pub fn merge_russian_yo(text: &str) -> String {
    text.replace('ё', "е")
}

/// Transliterates Serbian Latin (Gaj's alphabet) into Serbian Cyrillic.
/// Input is expected lowercase.
pub fn serbian_latin_to_cyrillic(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        let next = chars.peek().copied();
        let digraph = match (c, next) {
            ('l', Some('j')) => Some('љ'),
            ('n', Some('j')) => Some('њ'),
            ('d', Some('ž')) => Some('џ'),
            _ => None,
        };
        if let Some(letter) = digraph {
            chars.next();
            result.push(letter);
            continue;
        }
        let letter = match c {
            'a' => 'а', 'b' => 'б', 'c' => 'ц', 'č' => 'ч', 'ć' => 'ћ',
            'd' => 'д', 'đ' => 'ђ', 'e' => 'е', 'f' => 'ф', 'g' => 'г',
            'h' => 'х', 'i' => 'и', 'j' => 'ј', 'k' => 'к', 'l' => 'л',
            'm' => 'м', 'n' => 'н', 'o' => 'о', 'p' => 'п', 'r' => 'р',
            's' => 'с', 'š' => 'ш', 't' => 'т', 'u' => 'у', 'v' => 'в',
            'z' => 'з', 'ž' => 'ж',
            other => other,
        };
        result.push(letter);
    }
    result
}

/// Interslavic search form: standard Latin, no diacritics, `y` read as `i`.
pub fn isv_search_form<O: Orthography + ?Sized>(text: &str, orthography: &O) -> String {
    let standard = orthography.latin(text, Flavorisation::Standard);
    filter_latin(&standard).replace('y', "i")
}

/// Normalizes an index token for the given slot.
pub fn normalize_token<O: Orthography + ?Sized>(
    slot: TokenSlot,
    text: &str,
    orthography: &O,
) -> String {
    let folded = basic_fold(text);
    match slot {
        TokenSlot::IsvSrc => folded,
        TokenSlot::Lang(Lang::Isv) => isv_search_form(&folded, orthography),
        TokenSlot::Lang(Lang::Cs | Lang::Pl | Lang::Sk | Lang::Sl | Lang::Hr | Lang::De) => {
            filter_latin(&folded)
        }
        TokenSlot::Lang(Lang::Ru) => merge_russian_yo(&folded),
        TokenSlot::Lang(Lang::En | Lang::Be | Lang::Uk | Lang::Bg | Lang::Mk | Lang::Sr) => folded,
    }
}

/// Normalizes a query word for comparison against tokens of `slot`.
/// Identical to [`normalize_token`] except that Serbian queries typed in
/// Latin are brought into the Cyrillic the Serbian column is written in.
pub fn normalize_query<O: Orthography + ?Sized>(
    slot: TokenSlot,
    text: &str,
    orthography: &O,
) -> String {
    match slot {
        TokenSlot::Lang(Lang::Sr) => serbian_latin_to_cyrillic(&basic_fold(text)),
        _ => normalize_token(slot, text, orthography),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::converter::ScriptConverter;

    #[test]
    fn test_strip_brackets() {
        assert_eq!(strip_brackets("voda [fig.]", '[', ']'), "voda");
        assert_eq!(strip_brackets("(sę) myti", '(', ')'), "myti");
        assert_eq!(strip_annotations("a [x] (y) b"), "a   b");
        assert_eq!(strip_brackets("open [never", '[', ']'), "open");
    }

    #[test]
    fn test_split_synonyms_prefers_semicolon() {
        assert_eq!(split_synonyms("a, b; c"), vec!["a, b", " c"]);
        assert_eq!(split_synonyms("a, b"), vec!["a", " b"]);
        assert_eq!(split_synonyms(""), vec![""]);
    }

    #[test]
    fn test_unverified_marker() {
        assert!(is_unverified("!foo"));
        assert!(!is_unverified("foo!"));
        assert_eq!(strip_unverified("!foo"), "foo");
        assert_eq!(strip_unverified("foo"), "foo");
    }

    #[test]
    fn test_basic_fold() {
        assert_eq!(basic_fold("Dobry Den, Brate"), "dobrydenbrate");
        assert_eq!(basic_fold("e\u{0301}"), "e");
    }

    #[test]
    fn test_language_rules() {
        let conv = ScriptConverter::new();
        assert_eq!(normalize_token(TokenSlot::Lang(Lang::Pl), "Łódź", &conv), "lodz");
        assert_eq!(normalize_token(TokenSlot::Lang(Lang::Ru), "Ёлка", &conv), "елка");
        assert_eq!(normalize_token(TokenSlot::Lang(Lang::Isv), "Mlěko", &conv), "mleko");
        assert_eq!(normalize_token(TokenSlot::Lang(Lang::Isv), "byti", &conv), "biti");
        assert_eq!(normalize_token(TokenSlot::Lang(Lang::Isv), "млєко", &conv), "mleko");
        assert_eq!(normalize_token(TokenSlot::IsvSrc, "Mlěko", &conv), "mlěko");
        assert_eq!(normalize_query(TokenSlot::Lang(Lang::Sr), "ljubav", &conv), "љубав");
        assert_eq!(normalize_token(TokenSlot::Lang(Lang::Sr), "љубав", &conv), "љубав");
    }
}
