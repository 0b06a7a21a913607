// src/core/types.rs
use crate::error::DictionaryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Column names of a word-list row, in column order.
/// Every row and every field lookup is addressed through this ordering.
pub const HEADER: [&str; 17] = [
    "isv",
    "addition",
    "partOfSpeech",
    "en",
    "ru",
    "be",
    "uk",
    "pl",
    "cs",
    "sk",
    "bg",
    "mk",
    "sr",
    "hr",
    "sl",
    "de",
    "id",
];

/// A language column of the dictionary. Interslavic is the pivot language;
/// every other language is translated to and from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Isv,
    En,
    Ru,
    Be,
    Uk,
    Pl,
    Cs,
    Sk,
    Bg,
    Mk,
    Sr,
    Hr,
    Sl,
    De,
}

impl Lang {
    /// All indexed languages, in header order.
    pub const ALL: [Lang; 14] = [
        Lang::Isv,
        Lang::En,
        Lang::Ru,
        Lang::Be,
        Lang::Uk,
        Lang::Pl,
        Lang::Cs,
        Lang::Sk,
        Lang::Bg,
        Lang::Mk,
        Lang::Sr,
        Lang::Hr,
        Lang::Sl,
        Lang::De,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Lang::Isv => "isv",
            Lang::En => "en",
            Lang::Ru => "ru",
            Lang::Be => "be",
            Lang::Uk => "uk",
            Lang::Pl => "pl",
            Lang::Cs => "cs",
            Lang::Sk => "sk",
            Lang::Bg => "bg",
            Lang::Mk => "mk",
            Lang::Sr => "sr",
            Lang::Hr => "hr",
            Lang::Sl => "sl",
            Lang::De => "de",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Lang {
    type Err = DictionaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Lang::ALL
            .iter()
            .copied()
            .find(|lang| lang.code() == s)
            .ok_or_else(|| DictionaryError::UnknownLanguage(s.to_string()))
    }
}

/// A column of the word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Lang(Lang),
    Addition,
    PartOfSpeech,
    Id,
}

impl Field {
    /// Column position of this field inside a row.
    pub fn position(self) -> usize {
        match self {
            Field::Lang(Lang::Isv) => 0,
            Field::Addition => 1,
            Field::PartOfSpeech => 2,
            Field::Lang(lang) => 2 + Lang::ALL.iter().position(|l| *l == lang).unwrap_or(0),
            Field::Id => HEADER.len() - 1,
        }
    }
}

/// One dictionary row, aligned to [`HEADER`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    fields: Vec<String>,
}

impl Entry {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Raw value of a column. Rows shorter than the header read as empty.
    pub fn field(&self, field: Field) -> &str {
        self.fields
            .get(field.position())
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn id(&self) -> &str {
        self.field(Field::Id)
    }

    pub fn lang(&self, lang: Lang) -> &str {
        self.field(Field::Lang(lang))
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

impl From<Vec<String>> for Entry {
    fn from(fields: Vec<String>) -> Self {
        Self::new(fields)
    }
}

impl From<Vec<&str>> for Entry {
    fn from(fields: Vec<&str>) -> Self {
        Self::new(fields.into_iter().map(str::to_string).collect())
    }
}

/// Which token list of an entry a key refers to.
/// `IsvSrc` holds the cleaned but unnormalized Interslavic tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenSlot {
    Lang(Lang),
    IsvSrc,
}

impl TokenSlot {
    pub fn code(self) -> &'static str {
        match self {
            TokenSlot::Lang(lang) => lang.code(),
            TokenSlot::IsvSrc => "isv-src",
        }
    }
}

/// Token comparison used by the matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchType {
    /// Candidate starts with the query.
    #[default]
    Begin,
    /// Candidate equals the query.
    Full,
    /// Candidate ends with the query.
    End,
    /// Candidate contains the query.
    Contains,
}

impl SearchType {
    pub fn matches(self, candidate: &str, query: &str) -> bool {
        match self {
            SearchType::Begin => candidate.starts_with(query),
            SearchType::Full => candidate == query,
            SearchType::End => candidate.ends_with(query),
            SearchType::Contains => candidate.contains(query),
        }
    }
}

impl FromStr for SearchType {
    type Err = DictionaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "begin" => Ok(SearchType::Begin),
            "full" => Ok(SearchType::Full),
            "end" => Ok(SearchType::End),
            "some" => Ok(SearchType::Contains),
            other => Err(DictionaryError::UnknownSearchType(other.to_string())),
        }
    }
}

/// Orthographic convention used to render and compare Interslavic text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Flavorisation {
    /// Full etymological alphabet (code `2`).
    Etymological,
    /// Standard alphabet (code `3`).
    #[default]
    Standard,
    /// Northern flavour (code `S`).
    Northern,
    /// Southern flavour (code `J`).
    Southern,
}

impl Flavorisation {
    pub fn code(self) -> &'static str {
        match self {
            Flavorisation::Etymological => "2",
            Flavorisation::Standard => "3",
            Flavorisation::Northern => "S",
            Flavorisation::Southern => "J",
        }
    }

    /// Styles under which user letter folding takes part in matching.
    pub fn supports_folding(self) -> bool {
        matches!(self, Flavorisation::Etymological | Flavorisation::Standard)
    }
}

impl FromStr for Flavorisation {
    type Err = DictionaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2" => Ok(Flavorisation::Etymological),
            "3" => Ok(Flavorisation::Standard),
            "S" => Ok(Flavorisation::Northern),
            "J" => Ok(Flavorisation::Southern),
            other => Err(DictionaryError::UnknownFlavorisation(other.to_string())),
        }
    }
}

/// Parameters of a single search invocation.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub input_text: String,
    pub from: Lang,
    pub to: Lang,
    pub search_type: SearchType,
    /// Part-of-speech selector from the UI, used when the query has no `-p` option.
    pub pos_filter: Option<String>,
    pub flavorisation: Flavorisation,
}

impl SearchRequest {
    pub fn new(input_text: impl Into<String>, from: Lang, to: Lang) -> Self {
        Self {
            input_text: input_text.into(),
            from,
            to,
            search_type: SearchType::default(),
            pos_filter: None,
            flavorisation: Flavorisation::default(),
        }
    }

    pub fn with_search_type(mut self, search_type: SearchType) -> Self {
        self.search_type = search_type;
        self
    }

    pub fn with_pos_filter(mut self, pos: impl Into<String>) -> Self {
        let pos = pos.into();
        self.pos_filter = (!pos.is_empty()).then_some(pos);
        self
    }

    pub fn with_flavorisation(mut self, flavorisation: Flavorisation) -> Self {
        self.flavorisation = flavorisation;
        self
    }

    /// The non-Interslavic side of the translation pair.
    pub fn lang(&self) -> Lang {
        if self.from == Lang::Isv {
            self.to
        } else {
            self.from
        }
    }
}

/// A search result projected for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRecord {
    pub translate: String,
    pub original: String,
    pub original_cyr: String,
    pub original_gla: String,
    pub add: String,
    pub add_cyr: String,
    pub add_gla: String,
    pub details: String,
    pub ipa: String,
    /// False when the translation carries the unverified marker.
    pub checked: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_positions_follow_header() {
        assert_eq!(HEADER[Field::Lang(Lang::Isv).position()], "isv");
        assert_eq!(HEADER[Field::Addition.position()], "addition");
        assert_eq!(HEADER[Field::PartOfSpeech.position()], "partOfSpeech");
        assert_eq!(HEADER[Field::Id.position()], "id");
        for lang in Lang::ALL {
            assert_eq!(HEADER[Field::Lang(lang).position()], lang.code());
        }
    }

    #[test]
    fn test_entry_short_row_reads_empty() {
        let entry = Entry::from(vec!["voda"]);
        assert_eq!(entry.lang(Lang::Isv), "voda");
        assert_eq!(entry.id(), "");
    }

    #[test]
    fn test_search_type_predicates() {
        assert!(SearchType::Begin.matches("abeceda", "abe"));
        assert!(!SearchType::Begin.matches("abeceda", "ced"));
        assert!(SearchType::Full.matches("voda", "voda"));
        assert!(SearchType::End.matches("abeceda", "eda"));
        assert!(SearchType::End.matches("abab", "ab"));
        assert!(SearchType::Contains.matches("abeceda", "ced"));
        assert!("nope".parse::<SearchType>().is_err());
        assert_eq!("some".parse::<SearchType>().unwrap(), SearchType::Contains);
    }

    #[test]
    fn test_lang_parsing() {
        assert_eq!("ru".parse::<Lang>().unwrap(), Lang::Ru);
        assert!("xx".parse::<Lang>().is_err());
        assert_eq!("2".parse::<Flavorisation>().unwrap(), Flavorisation::Etymological);
    }
}
