// File: src/morphology.rs
use crate::core::details::{self, Gender, NumeralType, PartOfSpeech, PronounType};
use crate::core::types::{Entry, Field, Lang};
use std::collections::HashSet;

/// Tag-derived parameters for noun declension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NounParams {
    pub gender: Option<Gender>,
    pub animated: bool,
    pub plural: bool,
    pub singular: bool,
    pub indeclinable: bool,
}

/// Inflection generators, one per declinable part of speech.
///
/// Every method returns the flat list of surface forms for `word`.
/// The default bodies generate nothing, which indexes headwords only.
pub trait Morphology {
    fn conjugate_verb(&self, _word: &str, _addition: &str) -> Vec<String> {
        Vec::new()
    }

    fn decline_adjective(&self, _word: &str) -> Vec<String> {
        Vec::new()
    }

    fn decline_noun(&self, _word: &str, _addition: &str, _params: NounParams) -> Vec<String> {
        Vec::new()
    }

    fn decline_pronoun(&self, _word: &str, _kind: Option<PronounType>) -> Vec<String> {
        Vec::new()
    }

    fn decline_numeral(&self, _word: &str, _kind: Option<NumeralType>) -> Vec<String> {
        Vec::new()
    }
}

/// Morphology that knows no inflections.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInflection;

impl Morphology for NoInflection {}

/// All inflected forms of an entry's headwords, deduplicated in first-seen order.
pub fn word_forms<M: Morphology + ?Sized>(morphology: &M, entry: &Entry, headword: &str) -> Vec<String> {
    let addition = entry.field(Field::Addition);
    let tags = entry.field(Field::PartOfSpeech);
    let mut forms = Vec::new();

    let Some(pos) = details::part_of_speech(tags) else {
        return forms;
    };

    for word in headword.split(',').map(str::trim) {
        match pos {
            PartOfSpeech::Verb => forms.extend(morphology.conjugate_verb(word, addition)),
            PartOfSpeech::Adjective => forms.extend(morphology.decline_adjective(word)),
            PartOfSpeech::Noun => {
                let params = NounParams {
                    gender: details::gender(tags),
                    animated: details::is_animated(tags),
                    plural: details::is_plural(tags),
                    singular: details::is_singular(tags),
                    indeclinable: details::is_indeclinable(tags),
                };
                if details::is_common_gender(tags) {
                    for gender in [Gender::Masculine, Gender::Feminine] {
                        let params = NounParams { gender: Some(gender), ..params };
                        forms.extend(morphology.decline_noun(word, addition, params));
                    }
                } else {
                    forms.extend(morphology.decline_noun(word, addition, params));
                }
            }
            PartOfSpeech::Pronoun => {
                forms.extend(morphology.decline_pronoun(word, details::pronoun_type(tags)))
            }
            PartOfSpeech::Numeral => {
                forms.extend(morphology.decline_numeral(word, details::numeral_type(tags)))
            }
            _ => {}
        }
    }

    dedup_in_order(forms)
}

/// Convenience wrapper expanding the entry's own Interslavic headword.
pub fn entry_forms<M: Morphology + ?Sized>(morphology: &M, entry: &Entry) -> Vec<String> {
    word_forms(morphology, entry, entry.lang(Lang::Isv))
}

pub(crate) fn dedup_in_order(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
