// src/core/converter.rs
use crate::core::types::Flavorisation;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static CASE_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+(\d)").expect("case number pattern compiles"));

/// Script conversion and transcription primitives the engine consumes.
///
/// Implementations must be pure: the same input always renders the same way.
pub trait Orthography {
    /// Renders Interslavic text (Latin or Cyrillic input) in Latin script
    /// under the given flavorisation.
    fn latin(&self, text: &str, style: Flavorisation) -> String;

    /// Renders Interslavic text in Cyrillic script.
    fn cyrillic(&self, text: &str, style: Flavorisation) -> String;

    /// Renders Latin Interslavic text in Glagolitic script.
    fn glagolitic(&self, latin: &str) -> String;

    /// Phonetic transcription of Latin Interslavic text.
    fn ipa(&self, latin: &str) -> String;

    /// Expands grammatical case numbers (`+2`) into case names (`+Gen.`).
    fn convert_cases(&self, text: &str) -> String;
}

/// Rule-based Interslavic script converter.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptConverter;

impl ScriptConverter {
    pub fn new() -> Self {
        Self
    }
}

impl Orthography for ScriptConverter {
    fn latin(&self, text: &str, style: Flavorisation) -> String {
        let latin = map_chars(text, cyrillic_letter);
        match style {
            Flavorisation::Etymological => latin,
            Flavorisation::Standard | Flavorisation::Northern => map_chars(&latin, standard_letter),
            Flavorisation::Southern => {
                let standard = map_chars(&latin, standard_letter);
                map_chars(&standard, |c| match c {
                    'ě' => Some("e"),
                    'y' => Some("i"),
                    _ => None,
                })
            }
        }
    }

    fn cyrillic(&self, text: &str, style: Flavorisation) -> String {
        let latin = self.latin(text, style);
        let mut result = String::with_capacity(latin.len());
        let mut chars = latin.chars().peekable();

        while let Some(c) = chars.next() {
            let lower = to_lower(c);
            // lj, nj and dž are single letters in Cyrillic.
            let digraph = match (lower, chars.peek().map(|&n| to_lower(n))) {
                ('l', Some('j')) => Some('љ'),
                ('n', Some('j')) => Some('њ'),
                ('d', Some('ž')) => Some('џ'),
                _ => None,
            };
            if let Some(letter) = digraph {
                chars.next();
                push_cased(&mut result, c, &letter.to_string());
                continue;
            }
            match latin_to_cyrillic(lower) {
                Some(letter) => push_cased(&mut result, c, &letter.to_string()),
                None => result.push(c),
            }
        }
        result
    }

    fn glagolitic(&self, latin: &str) -> String {
        map_chars(latin, glagolitic_letter)
    }

    fn ipa(&self, latin: &str) -> String {
        let lower = latin.to_lowercase();
        let mut result = String::with_capacity(lower.len());
        let mut chars = lower.chars().peekable();

        while let Some(c) = chars.next() {
            let next = chars.peek().copied();
            let digraph = match (c, next) {
                ('d', Some('ž')) => Some("d͡ʒ"),
                ('l', Some('j')) => Some("ʎ"),
                ('n', Some('j')) => Some("ɲ"),
                _ => None,
            };
            if let Some(sound) = digraph {
                chars.next();
                result.push_str(sound);
                continue;
            }
            match ipa_sound(c) {
                Some(sound) => result.push_str(sound),
                None => result.push(c),
            }
        }
        result
    }

    fn convert_cases(&self, text: &str) -> String {
        CASE_NUMBER
            .replace_all(text, |caps: &Captures| match case_name(&caps[1]) {
                Some(name) => format!("+{}", name),
                None => caps[0].to_string(),
            })
            .into_owned()
    }
}

fn to_lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Pushes `replacement`, capitalized when `original` was uppercase.
fn push_cased(out: &mut String, original: char, replacement: &str) {
    if original.is_uppercase() {
        let mut chars = replacement.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    } else {
        out.push_str(replacement);
    }
}

/// Applies a lowercase letter mapping to every char, keeping case.
fn map_chars<F>(text: &str, mapping: F) -> String
where
    F: Fn(char) -> Option<&'static str>,
{
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match mapping(to_lower(c)) {
            Some(replacement) => push_cased(&mut result, c, replacement),
            None => result.push(c),
        }
    }
    result
}

fn cyrillic_letter(c: char) -> Option<&'static str> {
    let latin = match c {
        'а' => "a", 'б' => "b", 'в' => "v", 'г' => "g", 'ґ' => "g",
        'д' => "d", 'ђ' => "đ", 'е' => "e", 'є' => "ě", 'ѣ' => "ě",
        'ё' => "jo", 'ж' => "ž", 'з' => "z", 'и' => "i", 'і' => "i",
        'ї' => "ji", 'й' => "j", 'ј' => "j", 'к' => "k", 'л' => "l",
        'љ' => "lj", 'м' => "m", 'н' => "n", 'њ' => "nj", 'о' => "o",
        'п' => "p", 'р' => "r", 'с' => "s", 'т' => "t", 'ћ' => "ć",
        'у' => "u", 'ф' => "f", 'х' => "h", 'ц' => "c", 'ч' => "č",
        'џ' => "dž", 'ш' => "š", 'щ' => "šč", 'ъ' => "ȯ", 'ы' => "y",
        'ь' => "", 'э' => "e", 'ю' => "ju", 'я' => "ja", 'ѧ' => "ę",
        'ѫ' => "ų",
        _ => return None,
    };
    Some(latin)
}

/// Reduces etymological-only letters to the standard alphabet.
fn standard_letter(c: char) -> Option<&'static str> {
    let standard = match c {
        'å' => "a", 'ę' => "e", 'ė' => "e", 'è' => "e", 'ų' => "u",
        'ȯ' => "o", 'ò' => "o", 'ŕ' => "r", 'ĺ' => "l", 'ľ' => "l",
        'ń' => "n", 'ť' => "t", 'ď' => "d", 'ś' => "s", 'ź' => "z",
        'ć' => "č", 'đ' => "dž",
        _ => return None,
    };
    Some(standard)
}

fn latin_to_cyrillic(c: char) -> Option<char> {
    let letter = match c {
        'a' | 'å' => 'а', 'b' => 'б', 'c' => 'ц', 'č' => 'ч', 'ć' => 'ћ',
        'd' | 'ď' => 'д', 'đ' => 'ђ', 'e' | 'ė' => 'е', 'ě' => 'є', 'ę' => 'ѧ',
        'f' => 'ф', 'g' => 'г', 'h' => 'х', 'i' => 'и', 'j' => 'ј',
        'k' => 'к', 'l' | 'ĺ' => 'л', 'ľ' => 'љ', 'm' => 'м', 'n' => 'н',
        'ń' => 'њ', 'o' => 'о', 'ȯ' | 'ò' => 'ъ', 'p' => 'п', 'r' | 'ŕ' => 'р',
        's' | 'ś' => 'с', 'š' => 'ш', 't' | 'ť' => 'т', 'u' => 'у', 'ų' => 'ѫ',
        'v' => 'в', 'y' => 'ы', 'z' | 'ź' => 'з', 'ž' => 'ж',
        _ => return None,
    };
    Some(letter)
}

fn glagolitic_letter(c: char) -> Option<&'static str> {
    let letter = match c {
        'a' | 'å' => "ⰰ", 'b' => "ⰱ", 'v' => "ⰲ", 'g' => "ⰳ", 'd' | 'ď' => "ⰴ",
        'e' | 'ė' => "ⰵ", 'ž' => "ⰶ", 'z' | 'ź' => "ⰸ", 'i' => "ⰹ", 'j' => "ⰻ",
        'ć' | 'đ' => "ⰼ", 'k' => "ⰽ", 'l' | 'ľ' | 'ĺ' => "ⰾ", 'm' => "ⰿ",
        'n' | 'ń' => "ⱀ", 'o' | 'ȯ' | 'ò' => "ⱁ", 'p' => "ⱂ", 'r' | 'ŕ' => "ⱃ",
        's' | 'ś' => "ⱄ", 't' | 'ť' => "ⱅ", 'u' => "ⱆ", 'f' => "ⱇ", 'h' => "ⱈ",
        'c' => "ⱌ", 'č' => "ⱍ", 'š' => "ⱎ", 'y' => "ⱏⰹ", 'ě' => "ⱑ",
        'ę' => "ⱔ", 'ų' => "ⱘ",
        _ => return None,
    };
    Some(letter)
}

fn ipa_sound(c: char) -> Option<&'static str> {
    let sound = match c {
        'c' => "t͡s", 'č' => "t͡ʃ", 'ć' => "t͡ɕ", 'đ' => "d͡ʑ", 'š' => "ʃ",
        'ž' => "ʒ", 'h' => "x", 'y' => "ɪ", 'ě' => "jɛ", 'e' => "ɛ",
        'o' => "ɔ", 'ę' => "æ", 'ų' => "ʊ", 'å' => "ɒ", 'ȯ' => "ə",
        'ľ' | 'ĺ' => "ʎ", 'ń' => "ɲ", 'ś' => "ɕ", 'ź' => "ʑ", 'ť' => "c",
        'ď' => "ɟ", 'ŕ' => "r̩",
        _ => return None,
    };
    Some(sound)
}

fn case_name(number: &str) -> Option<&'static str> {
    let name = match number {
        "1" => "Nom.",
        "2" => "Gen.",
        "3" => "Dat.",
        "4" => "Acc.",
        "5" => "Ins.",
        "6" => "Loc.",
        "7" => "Voc.",
        _ => return None,
    };
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cyrillic_input_to_latin() {
        let conv = ScriptConverter::new();
        assert_eq!(conv.latin("вода", Flavorisation::Standard), "voda");
        assert_eq!(conv.latin("Љубов", Flavorisation::Standard), "Ljubov");
        assert_eq!(conv.latin("џем", Flavorisation::Etymological), "džem");
    }

    #[test]
    fn test_standard_reduces_etymological_letters() {
        let conv = ScriptConverter::new();
        assert_eq!(conv.latin("pęť", Flavorisation::Etymological), "pęť");
        assert_eq!(conv.latin("pęť", Flavorisation::Standard), "pet");
        assert_eq!(conv.latin("Å", Flavorisation::Standard), "A");
        assert_eq!(conv.latin("mlěko", Flavorisation::Southern), "mleko");
    }

    #[test]
    fn test_latin_to_cyrillic_digraphs() {
        let conv = ScriptConverter::new();
        assert_eq!(conv.cyrillic("ljubov", Flavorisation::Standard), "љубов");
        assert_eq!(conv.cyrillic("Njemci", Flavorisation::Standard), "Њемци");
        assert_eq!(conv.cyrillic("mlěko", Flavorisation::Standard), "млєко");
    }

    #[test]
    fn test_glagolitic_and_ipa() {
        let conv = ScriptConverter::new();
        assert_eq!(conv.glagolitic("voda"), "ⰲⱁⰴⰰ");
        assert_eq!(conv.ipa("čaša"), "t͡ʃaʃa");
        assert_eq!(conv.ipa("ljud"), "ʎud");
    }

    #[test]
    fn test_convert_cases() {
        let conv = ScriptConverter::new();
        assert_eq!(conv.convert_cases("(+2)"), "(+Gen.)");
        assert_eq!(conv.convert_cases("(+9)"), "(+9)");
        assert_eq!(conv.convert_cases(""), "");
    }
}
