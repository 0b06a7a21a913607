// src/core/engine.rs
use crate::core::converter::{Orthography, ScriptConverter};
use crate::core::folding::FoldingConfig;
use crate::core::format::format_entries;
use crate::core::index::{completion_statistics, CompletionStats, TokenIndex};
use crate::core::matcher::{Matcher, PreparedQuery};
use crate::core::query::parse_query;
use crate::core::ranker::rank;
use crate::core::types::{DisplayRecord, Entry, Flavorisation, Lang, SearchRequest};
use crate::error::{DictionaryError, Result};
use crate::morphology::{Morphology, NoInflection};
use crate::persistence::IndexSnapshot;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Word list plus everything derived from it at build time.
struct BuiltIndex {
    words: Vec<Entry>,
    index: TokenIndex,
    completion: CompletionStats,
}

/// The dictionary search engine.
///
/// Owns the word list, its token index and the session's folding preference.
/// Queries are rejected until [`Dictionary::build`] has run; afterwards they
/// only read the index, while the folding setters are the sole mutators.
pub struct Dictionary<M = NoInflection, O = ScriptConverter> {
    morphology: M,
    orthography: O,
    built: Option<BuiltIndex>,
    folding: FoldingConfig,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::with_providers(NoInflection, ScriptConverter::new())
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Morphology, O: Orthography> Dictionary<M, O> {
    pub fn with_providers(morphology: M, orthography: O) -> Self {
        Self {
            morphology,
            orthography,
            built: None,
            folding: FoldingConfig::new(),
        }
    }

    /// Indexes `words`, or adopts a previously exported snapshot of the same
    /// word list verbatim. Both paths answer queries identically.
    pub fn build(&mut self, words: Vec<Entry>, snapshot: Option<IndexSnapshot>) -> Result<()> {
        let started = Instant::now();
        let (index, completion, source) = match snapshot {
            Some(snapshot) => {
                let index = TokenIndex::from_pairs(snapshot.index)?;
                if index.is_empty() && !words.is_empty() {
                    warn!(entries = words.len(), "snapshot holds no token lists");
                }
                (index, snapshot.completion, "snapshot")
            }
            None => {
                let index = TokenIndex::build(&words, &self.morphology, &self.orthography);
                let completion = completion_statistics(&words);
                (index, completion, "word list")
            }
        };

        info!(
            source,
            entries = words.len(),
            token_lists = index.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "dictionary index ready"
        );
        self.built = Some(BuiltIndex {
            words,
            index,
            completion,
        });
        Ok(())
    }

    pub fn is_built(&self) -> bool {
        self.built.is_some()
    }

    fn built(&self) -> Result<&BuiltIndex> {
        self.built.as_ref().ok_or(DictionaryError::NotBuilt)
    }

    pub fn word_list(&self) -> Result<&[Entry]> {
        Ok(&self.built()?.words)
    }

    /// Token index as `(key, tokens)` pairs, ready to be fed back into `build`.
    pub fn get_index(&self) -> Result<Vec<(String, Vec<String>)>> {
        Ok(self.built()?.index.export())
    }

    pub fn completion_statistics(&self) -> Result<&CompletionStats> {
        Ok(&self.built()?.completion)
    }

    /// Index and statistics bundled for a later skip-build.
    pub fn snapshot(&self) -> Result<IndexSnapshot> {
        let built = self.built()?;
        Ok(IndexSnapshot {
            index: built.index.export(),
            completion: built.completion.clone(),
        })
    }

    /// Runs one query: parse, filter, rank.
    /// An empty or unnormalizable word yields no results rather than an error.
    pub fn search(&self, request: &SearchRequest) -> Result<Vec<&Entry>> {
        let built = self.built()?;
        let parsed = parse_query(&request.input_text);
        let Some(query) =
            PreparedQuery::prepare(&parsed, request, &self.folding, &self.orthography)
        else {
            return Ok(Vec::new());
        };

        let started = Instant::now();
        let matched = Matcher::new(&built.index, &self.folding, &query).filter(&built.words);
        let candidates = matched.len();
        let results = rank(&built.index, &query, matched);
        debug!(
            input = %request.input_text,
            from = %request.from,
            to = %request.to,
            candidates,
            results = results.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "search finished"
        );
        Ok(results)
    }

    /// Projects ranked entries into display records.
    pub fn format_for_display(
        &self,
        entries: &[&Entry],
        from: Lang,
        to: Lang,
        style: Flavorisation,
    ) -> Vec<DisplayRecord> {
        format_entries(&self.orthography, entries, from, to, style)
    }

    /// Convenience: search and format in one call.
    pub fn translate(&self, request: &SearchRequest) -> Result<Vec<DisplayRecord>> {
        let results = self.search(request)?;
        Ok(self.format_for_display(&results, request.from, request.to, request.flavorisation))
    }

    pub fn folding(&self) -> &FoldingConfig {
        &self.folding
    }

    /// Flips the folding pairs of every letter in `letters`.
    pub fn toggle_folding_letter(&mut self, letters: &str) -> &FoldingConfig {
        self.folding.toggle(letters);
        debug!(letters, active = self.folding.pairs().len(), "folding toggled");
        &self.folding
    }

    pub fn set_folding_configuration(&mut self, config: FoldingConfig) {
        debug!(active = config.pairs().len(), "folding replaced");
        self.folding = config;
    }
}
