// Shared fixtures for the integration tests.
#![allow(dead_code)]

use lexicon_core::{Entry, Field, Lang, Morphology, NounParams, HEADER};

/// Builds a row from `(field, value)` pairs; unset columns stay empty.
pub fn row(id: &str, values: &[(Field, &str)]) -> Entry {
    let mut fields = vec![String::new(); HEADER.len()];
    fields[Field::Id.position()] = id.to_string();
    for (field, value) in values {
        fields[field.position()] = value.to_string();
    }
    Entry::new(fields)
}

pub fn word(id: &str, isv: &str, pos: &str, en: &str) -> Entry {
    row(
        id,
        &[
            (Field::Lang(Lang::Isv), isv),
            (Field::PartOfSpeech, pos),
            (Field::Lang(Lang::En), en),
        ],
    )
}

pub fn ids(entries: &[&Entry]) -> Vec<String> {
    entries.iter().map(|entry| entry.id().to_string()).collect()
}

/// Declines nouns by appending a couple of endings.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuffixMorphology;

impl Morphology for SuffixMorphology {
    fn decline_noun(&self, word: &str, _addition: &str, _params: NounParams) -> Vec<String> {
        vec![format!("{}u", word), format!("{}a", word), format!("{}u", word)]
    }

    fn conjugate_verb(&self, word: &str, _addition: &str) -> Vec<String> {
        match word.strip_suffix("ti") {
            Some(stem) => vec![format!("{}jų", stem), format!("{}l", stem)],
            None => Vec::new(),
        }
    }
}

pub fn sample_words() -> Vec<Entry> {
    vec![
        word("1", "dom", "m.", "house, home"),
        word("2", "voda", "f.", "water"),
        word("3", "mlěko", "n.", "milk"),
        word("4", "dobry", "adj.", "good"),
        word("5", "žaba", "f.anim.", "frog"),
        word("6", "zabava", "f.", "fun; entertainment"),
        word("7", "kot", "m.anim.", "!domestic cat"),
        word("8", "pisati", "v.ipf.", "write"),
        row(
            "9",
            &[
                (Field::Lang(Lang::Isv), "ljubov"),
                (Field::PartOfSpeech, "f."),
                (Field::Lang(Lang::En), "love"),
                (Field::Lang(Lang::Sr), "љубав"),
                (Field::Lang(Lang::Ru), "любовь"),
            ],
        ),
        word("10", "a, beda", "conj.", "and"),
        word("11", "ogȯń [fig.]", "m.", "fire"),
    ]
}
