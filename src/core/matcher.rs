// src/core/matcher.rs
use crate::core::converter::Orthography;
use crate::core::details::parse_tags;
use crate::core::folding::FoldingConfig;
use crate::core::index::TokenIndex;
use crate::core::normalize::{basic_fold, normalize_query};
use crate::core::query::{pos_matches, ParsedQuery, PosPattern};
use crate::core::types::{Entry, Field, Flavorisation, Lang, SearchRequest, SearchType, TokenSlot};

/// A query resolved against one request and the current folding state.
/// Built fresh for every search call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedQuery {
    /// Character count of the word as typed.
    pub word_len: usize,
    /// Word normalized for the Interslavic search tokens.
    pub isv: String,
    /// Word normalized for the other language's tokens.
    pub lang: String,
    /// Word compared against the etymological tokens.
    pub etym: String,
    /// Word with the folding configuration applied.
    pub folded: String,
    pub search_type: SearchType,
    pub etymological: bool,
    pub two_way: bool,
    pub from: Lang,
    pub to: Lang,
    pub lang_side: Lang,
    pub flavorisation: Flavorisation,
    pub pos: Option<PosPattern>,
}

impl PreparedQuery {
    /// Resolves options and normalizes the word for both sides.
    /// Returns `None` when the word normalizes to nothing on either side.
    pub fn prepare<O: Orthography + ?Sized>(
        parsed: &ParsedQuery,
        request: &SearchRequest,
        folding: &FoldingConfig,
        orthography: &O,
    ) -> Option<Self> {
        let word = parsed.word.as_str();
        let lang_side = request.lang();
        let isv = normalize_query(TokenSlot::Lang(Lang::Isv), word, orthography);
        let lang = normalize_query(TokenSlot::Lang(lang_side), word, orthography);
        if isv.is_empty() || lang.is_empty() {
            return None;
        }

        let style = request.flavorisation;
        let search_type = if parsed.options.end {
            SearchType::End
        } else {
            request.search_type
        };
        // Distinguishing every letter under the etymological style is the
        // same as searching the etymological spelling.
        let etymological = request.from == Lang::Isv
            && (parsed.options.etym
                || (style == Flavorisation::Etymological && folding.is_complete()));
        let pos = parsed.options.pos.clone().or_else(|| {
            request
                .pos_filter
                .as_ref()
                .map(|pos| vec![vec![pos.clone()]])
        });
        let folded = folding.fold(&basic_fold(&orthography.latin(word, style)), style);

        Some(Self {
            word_len: word.chars().count(),
            isv,
            lang,
            etym: normalize_query(TokenSlot::IsvSrc, word, orthography),
            folded,
            search_type,
            etymological,
            two_way: parsed.options.two_way,
            from: request.from,
            to: request.to,
            lang_side,
            flavorisation: style,
            pos,
        })
    }

    /// Whether the Interslavic side takes part in matching.
    pub fn searches_isv(&self) -> bool {
        self.from == Lang::Isv || self.two_way
    }

    /// Whether the other language's side takes part in matching.
    pub fn searches_lang(&self) -> bool {
        self.to == Lang::Isv || self.two_way
    }
}

/// Tests `query` against an Interslavic token list. A one-character query
/// only looks at the first token so that it does not match deep inside long
/// synonym and inflection lists.
fn matches_tokens<'t, I>(tokens: I, query: &str, search_type: SearchType) -> bool
where
    I: IntoIterator<Item = &'t str>,
{
    let mut tokens = tokens.into_iter();
    if query.chars().count() == 1 {
        tokens
            .next()
            .map_or(false, |token| search_type.matches(token, query))
    } else {
        tokens.any(|token| search_type.matches(token, query))
    }
}

/// Candidate filtering over the token index.
pub struct Matcher<'a> {
    index: &'a TokenIndex,
    folding: &'a FoldingConfig,
    query: &'a PreparedQuery,
}

impl<'a> Matcher<'a> {
    pub fn new(index: &'a TokenIndex, folding: &'a FoldingConfig, query: &'a PreparedQuery) -> Self {
        Self {
            index,
            folding,
            query,
        }
    }

    /// Entries accepted by both filter passes, in word-list order.
    pub fn filter<'e>(&self, entries: &'e [Entry]) -> Vec<&'e Entry> {
        let recheck = self.needs_folding_recheck();
        entries
            .iter()
            .filter(|entry| self.first_pass(entry))
            .filter(|entry| !recheck || self.folding_pass(entry))
            .collect()
    }

    fn tokens(&self, entry: &Entry, slot: TokenSlot) -> impl Iterator<Item = &'a str> + 'a {
        self.index.tokens(entry.id(), slot).iter().map(String::as_str)
    }

    fn isv_matches(&self, entry: &Entry) -> bool {
        let q = self.query;
        if q.etymological {
            matches_tokens(self.tokens(entry, TokenSlot::IsvSrc), &q.etym, q.search_type)
        } else {
            matches_tokens(self.tokens(entry, TokenSlot::Lang(Lang::Isv)), &q.isv, q.search_type)
        }
    }

    /// Translation tokens are all checked, whatever the query length.
    fn lang_matches(&self, entry: &Entry) -> bool {
        let q = self.query;
        self.tokens(entry, TokenSlot::Lang(q.lang_side))
            .any(|token| q.search_type.matches(token, &q.lang))
    }

    fn first_pass(&self, entry: &Entry) -> bool {
        let q = self.query;
        let mut matched = q.searches_isv() && self.isv_matches(entry);
        if q.searches_lang() {
            matched = matched || self.lang_matches(entry);
        }
        if !matched {
            return false;
        }
        match &q.pos {
            Some(pattern) if !pattern.is_empty() => {
                pos_matches(pattern, &parse_tags(entry.field(Field::PartOfSpeech)))
            }
            _ => true,
        }
    }

    /// The folding pass applies when the user marked letters as significant,
    /// one of them shows up in the query, and the style supports folding.
    fn needs_folding_recheck(&self) -> bool {
        let q = self.query;
        q.searches_isv()
            && !q.etymological
            && q.flavorisation.supports_folding()
            && self.folding.touches(&q.isv)
    }

    fn folding_pass(&self, entry: &Entry) -> bool {
        let q = self.query;
        let folded: Vec<String> = self
            .tokens(entry, TokenSlot::IsvSrc)
            .map(|token| self.folding.fold(token, q.flavorisation))
            .collect();
        let matched = matches_tokens(folded.iter().map(String::as_str), &q.folded, q.search_type);
        matched || (q.searches_lang() && self.lang_matches(entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_character_checks_first_token_only() {
        let tokens = ["a", "abeceda"];
        assert!(matches_tokens(tokens, "a", SearchType::Begin));
        assert!(!matches_tokens(["a", "beda"], "b", SearchType::Begin));
        assert!(matches_tokens(["a", "beda"], "be", SearchType::Begin));
    }

    #[test]
    fn test_empty_token_list_never_matches() {
        assert!(!matches_tokens(std::iter::empty(), "a", SearchType::Contains));
        assert!(!matches_tokens(std::iter::empty(), "ab", SearchType::Contains));
    }
}
