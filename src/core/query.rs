// src/core/query.rs
//! Inline query options.
//!
//! A query is a word followed by options, each introduced by ` -`:
//!
//! - `-end`: match word endings
//! - `-etym`: compare against the etymological Interslavic spelling
//! - `-b`: search both directions
//! - `-p <pattern>`: part-of-speech filter, e.g. `-p noun.m+v.ipf`
//!   (masculine nouns or imperfective verbs)

/// Part-of-speech filter: any group may match; every tag of a group must be present.
pub type PosPattern = Vec<Vec<String>>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    pub end: bool,
    pub etym: bool,
    pub two_way: bool,
    pub pos: Option<PosPattern>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    pub word: String,
    pub options: QueryOptions,
}

/// Splits raw input into the search word and its options.
/// Unknown options are ignored.
pub fn parse_query(input: &str) -> ParsedQuery {
    let mut segments = input.split(" -").map(str::trim);
    let word = segments.next().unwrap_or_default().to_string();

    let mut options = QueryOptions::default();
    for segment in segments {
        match segment {
            "end" => options.end = true,
            "etym" => options.etym = true,
            "b" => options.two_way = true,
            _ => {
                if let Some(pattern) = segment.strip_prefix("p ") {
                    // first -p wins
                    if options.pos.is_none() {
                        options.pos = Some(parse_pos_pattern(pattern));
                    }
                }
            }
        }
    }

    ParsedQuery { word, options }
}

/// Parses `noun.m+v.ipf` into `[["noun", "m"], ["v", "ipf"]]`.
/// Spaces and slashes are ignored.
pub fn parse_pos_pattern(pattern: &str) -> PosPattern {
    pattern
        .replace([' ', '/'], "")
        .split('+')
        .filter(|group| !group.is_empty())
        .map(|group| {
            group
                .split('.')
                .filter(|tag| !tag.is_empty())
                .map(str::to_string)
                .collect()
        })
        .collect()
}

/// True when `tags` satisfies at least one group of `pattern`.
pub fn pos_matches(pattern: &PosPattern, tags: &[String]) -> bool {
    pattern
        .iter()
        .any(|group| group.iter().all(|tag| tags.contains(tag)))
}
