// src/core/details.rs
//! Classification of the part-of-speech column (`m.anim.`, `v.tr. ipf.`, ...).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Numeral,
    Preposition,
    Conjunction,
    Interjection,
    Particle,
    Prefix,
    Suffix,
    Phrase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PronounType {
    Personal,
    Reflexive,
    Possessive,
    Demonstrative,
    Interrogative,
    Relative,
    Indefinite,
    Negative,
    Universal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumeralType {
    Cardinal,
    Ordinal,
    Collective,
    Fractional,
    Multiplicative,
    Substantive,
    Differential,
}

/// Discrete tags of a details string: spaces and slashes dropped, split on dots.
pub fn tags(details: &str) -> Vec<String> {
    details
        .replace([' ', '/'], "")
        .split('.')
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Tags used by part-of-speech filtering. A gender tag implies `noun`.
pub fn parse_tags(details: &str) -> Vec<String> {
    let mut tags = tags(details);
    if tags.iter().any(|t| t == "m" || t == "n" || t == "f") {
        tags.push("noun".to_string());
    }
    tags
}

fn has(tags: &[String], tag: &str) -> bool {
    tags.iter().any(|t| t == tag)
}

pub fn part_of_speech(details: &str) -> Option<PartOfSpeech> {
    let tags = tags(details);
    let pos = if has(&tags, "adj") {
        PartOfSpeech::Adjective
    } else if has(&tags, "adv") {
        PartOfSpeech::Adverb
    } else if has(&tags, "conj") {
        PartOfSpeech::Conjunction
    } else if has(&tags, "prep") {
        PartOfSpeech::Preposition
    } else if has(&tags, "pron") {
        PartOfSpeech::Pronoun
    } else if has(&tags, "num") {
        PartOfSpeech::Numeral
    } else if has(&tags, "intj") {
        PartOfSpeech::Interjection
    } else if has(&tags, "particle") {
        PartOfSpeech::Particle
    } else if has(&tags, "prefix") {
        PartOfSpeech::Prefix
    } else if has(&tags, "suffix") {
        PartOfSpeech::Suffix
    } else if has(&tags, "phrase") {
        PartOfSpeech::Phrase
    } else if has(&tags, "v") {
        PartOfSpeech::Verb
    } else if has(&tags, "m") || has(&tags, "f") || has(&tags, "n") {
        PartOfSpeech::Noun
    } else {
        return None;
    };
    Some(pos)
}

pub fn gender(details: &str) -> Option<Gender> {
    let tags = tags(details);
    if has(&tags, "m") {
        Some(Gender::Masculine)
    } else if has(&tags, "f") {
        Some(Gender::Feminine)
    } else if has(&tags, "n") {
        Some(Gender::Neuter)
    } else {
        None
    }
}

/// Nouns tagged `m./f.` take both masculine and feminine declension.
pub fn is_common_gender(details: &str) -> bool {
    details.replace(' ', "").contains("m./f.")
}

pub fn is_animated(details: &str) -> bool {
    has(&tags(details), "anim")
}

pub fn is_plural(details: &str) -> bool {
    has(&tags(details), "pl")
}

pub fn is_singular(details: &str) -> bool {
    has(&tags(details), "sg")
}

pub fn is_indeclinable(details: &str) -> bool {
    has(&tags(details), "indecl")
}

pub fn pronoun_type(details: &str) -> Option<PronounType> {
    let tags = tags(details);
    [
        ("pers", PronounType::Personal),
        ("refl", PronounType::Reflexive),
        ("poss", PronounType::Possessive),
        ("dem", PronounType::Demonstrative),
        ("int", PronounType::Interrogative),
        ("rel", PronounType::Relative),
        ("indef", PronounType::Indefinite),
        ("neg", PronounType::Negative),
        ("univ", PronounType::Universal),
    ]
    .into_iter()
    .find(|(tag, _)| has(&tags, tag))
    .map(|(_, kind)| kind)
}

pub fn numeral_type(details: &str) -> Option<NumeralType> {
    let tags = tags(details);
    [
        ("card", NumeralType::Cardinal),
        ("ord", NumeralType::Ordinal),
        ("coll", NumeralType::Collective),
        ("fract", NumeralType::Fractional),
        ("mult", NumeralType::Multiplicative),
        ("subst", NumeralType::Substantive),
        ("dif", NumeralType::Differential),
    ]
    .into_iter()
    .find(|(tag, _)| has(&tags, tag))
    .map(|(_, kind)| kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_strip_spaces_and_slashes() {
        assert_eq!(tags("v.tr. ipf./pf."), vec!["v", "tr", "ipf", "pf"]);
        assert_eq!(tags(""), Vec::<String>::new());
    }

    #[test]
    fn test_gender_implies_noun() {
        assert_eq!(parse_tags("f."), vec!["f", "noun"]);
        assert_eq!(parse_tags("adj."), vec!["adj"]);
    }

    #[test]
    fn test_part_of_speech() {
        assert_eq!(part_of_speech("m.anim."), Some(PartOfSpeech::Noun));
        assert_eq!(part_of_speech("v.intr. ipf."), Some(PartOfSpeech::Verb));
        assert_eq!(part_of_speech("adj."), Some(PartOfSpeech::Adjective));
        assert_eq!(part_of_speech("pron.pers."), Some(PartOfSpeech::Pronoun));
        assert_eq!(part_of_speech("num.card."), Some(PartOfSpeech::Numeral));
        assert_eq!(part_of_speech("???"), None);
    }

    #[test]
    fn test_noun_details() {
        assert_eq!(gender("m.anim."), Some(Gender::Masculine));
        assert!(is_animated("m.anim."));
        assert!(is_plural("f.pl."));
        assert!(is_indeclinable("n.indecl."));
        assert!(is_common_gender("m./f."));
        assert!(!is_common_gender("m."));
    }

    #[test]
    fn test_subtypes() {
        assert_eq!(pronoun_type("pron.dem."), Some(PronounType::Demonstrative));
        assert_eq!(numeral_type("num.ord."), Some(NumeralType::Ordinal));
        assert_eq!(numeral_type("num."), None);
    }
}
