// src/core/index.rs
use crate::core::converter::Orthography;
use crate::core::normalize::{
    is_unverified, normalize_token, split_synonyms, strip_annotations, strip_unverified,
};
use crate::core::types::{Entry, Flavorisation, Lang, TokenSlot};
use crate::error::{DictionaryError, Result};
use crate::morphology::{dedup_in_order, word_forms, Morphology};
use std::collections::{BTreeMap, HashMap};

/// Per-language completion percentages, formatted with one decimal place.
pub type CompletionStats = BTreeMap<Lang, String>;

/// Normalized search tokens of every entry, keyed by entry identity and slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenIndex {
    tokens: HashMap<String, HashMap<TokenSlot, Vec<String>>>,
    /// Insertion order, kept so that an export reproduces its source exactly.
    order: Vec<(String, TokenSlot)>,
}

impl TokenIndex {
    /// Tokenizes every entry for every slot.
    /// Complexity: O(E * L * T) for E entries, L languages and T tokens per field,
    /// plus whatever the morphology generators cost per Interslavic headword.
    pub fn build<M, O>(entries: &[Entry], morphology: &M, orthography: &O) -> Self
    where
        M: Morphology + ?Sized,
        O: Orthography + ?Sized,
    {
        let mut index = Self::default();
        for entry in entries {
            for lang in Lang::ALL {
                let cleaned = strip_annotations(entry.lang(lang));
                if lang == Lang::Isv {
                    let mut chunks: Vec<String> = split_synonyms(&cleaned)
                        .into_iter()
                        .map(|chunk| chunk.trim().to_string())
                        .collect();
                    chunks.extend(word_forms(morphology, entry, &cleaned));
                    let chunks = dedup_in_order(chunks);

                    let src = chunks
                        .iter()
                        .map(|chunk| {
                            let latin = orthography.latin(chunk, Flavorisation::Etymological);
                            normalize_token(TokenSlot::IsvSrc, &latin, orthography)
                        })
                        .collect();
                    let normalized = chunks
                        .iter()
                        .map(|chunk| normalize_token(TokenSlot::Lang(lang), chunk, orthography))
                        .collect();
                    index.insert(entry.id(), TokenSlot::Lang(lang), normalized);
                    index.insert(entry.id(), TokenSlot::IsvSrc, src);
                } else {
                    let normalized = split_synonyms(&cleaned)
                        .into_iter()
                        .map(|chunk| strip_unverified(chunk.trim_start()))
                        .map(|chunk| normalize_token(TokenSlot::Lang(lang), chunk, orthography))
                        .collect();
                    index.insert(entry.id(), TokenSlot::Lang(lang), normalized);
                }
            }
        }
        index
    }

    /// Rebuilds an index from exported `(key, tokens)` pairs, taking the
    /// token lists verbatim.
    pub fn from_pairs(pairs: Vec<(String, Vec<String>)>) -> Result<Self> {
        let mut index = Self::default();
        for (key, tokens) in pairs {
            let (id, slot) = parse_key(&key)?;
            index.insert(id, slot, tokens);
        }
        Ok(index)
    }

    fn insert(&mut self, id: &str, slot: TokenSlot, tokens: Vec<String>) {
        let slots = self.tokens.entry(id.to_string()).or_default();
        if slots.insert(slot, tokens).is_none() {
            self.order.push((id.to_string(), slot));
        }
    }

    /// Token list of one entry; empty when the entry was never indexed.
    pub fn tokens(&self, id: &str, slot: TokenSlot) -> &[String] {
        self.tokens
            .get(id)
            .and_then(|slots| slots.get(&slot))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Exports the index as `(key, tokens)` pairs in insertion order.
    pub fn export(&self) -> Vec<(String, Vec<String>)> {
        self.order
            .iter()
            .map(|(id, slot)| (key(id, *slot), self.tokens(id, *slot).to_vec()))
            .collect()
    }

    /// Number of token lists held.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of distinct entries covered.
    pub fn entry_count(&self) -> usize {
        self.tokens.len()
    }
}

/// Snapshot key of an entry's token list: `{id}-{slot}`.
pub fn key(id: &str, slot: TokenSlot) -> String {
    format!("{}-{}", id, slot.code())
}

/// Splits a snapshot key back into identity and slot.
/// The identity may itself contain dashes; the slot is always the suffix.
pub fn parse_key(key: &str) -> Result<(&str, TokenSlot)> {
    let src_suffix = format!("-{}", TokenSlot::IsvSrc.code());
    if let Some(id) = key.strip_suffix(src_suffix.as_str()) {
        return Ok((id, TokenSlot::IsvSrc));
    }
    let (id, code) = key
        .rsplit_once('-')
        .ok_or_else(|| DictionaryError::InvalidSnapshotKey(key.to_string()))?;
    let lang = code
        .parse::<Lang>()
        .map_err(|_| DictionaryError::InvalidSnapshotKey(key.to_string()))?;
    Ok((id, TokenSlot::Lang(lang)))
}

/// Share of entries per language whose field lacks the unverified marker.
pub fn completion_statistics(entries: &[Entry]) -> CompletionStats {
    Lang::ALL
        .iter()
        .map(|&lang| {
            let unverified = entries
                .iter()
                .filter(|entry| is_unverified(entry.lang(lang)))
                .count();
            let percent = if entries.is_empty() {
                100.0
            } else {
                (1.0 - unverified as f64 / entries.len() as f64) * 100.0
            };
            (lang, format!("{:.1}", percent))
        })
        .collect()
}
