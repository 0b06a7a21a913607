// src/core/format.rs
use crate::core::converter::Orthography;
use crate::core::normalize::{is_unverified, strip_brackets, strip_unverified};
use crate::core::types::{DisplayRecord, Entry, Field, Flavorisation, Lang};

/// Projects ranked entries into display records. No filtering happens here.
pub fn format_entries<O: Orthography + ?Sized>(
    orthography: &O,
    entries: &[&Entry],
    from: Lang,
    to: Lang,
    style: Flavorisation,
) -> Vec<DisplayRecord> {
    let translation_lang = if from == Lang::Isv { to } else { from };
    entries
        .iter()
        .map(|entry| format_entry(orthography, entry, translation_lang, style))
        .collect()
}

fn format_entry<O: Orthography + ?Sized>(
    orthography: &O,
    entry: &Entry,
    translation_lang: Lang,
    style: Flavorisation,
) -> DisplayRecord {
    let isv = entry.lang(Lang::Isv);
    let add = entry.field(Field::Addition);
    let translate = entry.lang(translation_lang);

    let original = orthography.latin(isv, style);
    let add_latin = orthography.latin(add, style);
    // transcription ignores [..] notes but keeps (..) ones
    let ipa_source = orthography.latin(&strip_brackets(isv, '[', ']'), style);

    DisplayRecord {
        translate: strip_unverified(translate).to_string(),
        original_cyr: orthography.cyrillic(isv, style),
        original_gla: orthography.glagolitic(&original),
        original,
        add: orthography.convert_cases(&add_latin),
        add_cyr: orthography.convert_cases(&orthography.cyrillic(add, style)),
        add_gla: orthography.convert_cases(&orthography.glagolitic(&add_latin)),
        details: entry.field(Field::PartOfSpeech).to_string(),
        ipa: orthography.ipa(&ipa_source),
        checked: !is_unverified(translate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::converter::ScriptConverter;
    use crate::core::types::HEADER;

    fn entry(isv: &str, add: &str, en: &str) -> Entry {
        let mut fields = vec![String::new(); HEADER.len()];
        fields[0] = isv.to_string();
        fields[1] = add.to_string();
        fields[2] = "f.".to_string();
        fields[3] = en.to_string();
        fields[16] = "1".to_string();
        Entry::new(fields)
    }

    #[test]
    fn test_unverified_translation() {
        let conv = ScriptConverter::new();
        let e = entry("voda", "", "!water");
        let records = format_entries(&conv, &[&e], Lang::Isv, Lang::En, Flavorisation::Standard);
        assert_eq!(records[0].translate, "water");
        assert!(!records[0].checked);
    }

    #[test]
    fn test_scripts_and_ipa() {
        let conv = ScriptConverter::new();
        let e = entry("voda [fig.]", "(+2)", "water");
        let records = format_entries(&conv, &[&e], Lang::En, Lang::Isv, Flavorisation::Standard);
        let record = &records[0];
        assert!(record.checked);
        assert_eq!(record.translate, "water");
        assert_eq!(record.original, "voda [fig.]");
        assert_eq!(record.original_cyr, "вода [фиг.]");
        assert_eq!(record.ipa, "vɔda");
        assert_eq!(record.add, "(+Gen.)");
        assert_eq!(record.details, "f.");
    }
}
