// src/core/ranker.rs
use crate::core::index::TokenIndex;
use crate::core::matcher::PreparedQuery;
use crate::core::types::{Entry, Lang, TokenSlot};

/// Maximum number of results a search returns.
pub const RESULT_LIMIT: usize = 50;

/// Smallest edit distance between `query` and the leading tokens.
/// An empty token list ranks last.
fn min_distance(tokens: &[String], query: &str, take: usize) -> usize {
    tokens
        .iter()
        .take(take)
        .map(|token| strsim::levenshtein(query, token))
        .min()
        .unwrap_or(usize::MAX)
}

/// Orders matched entries by edit distance to the query and keeps the best
/// [`RESULT_LIMIT`]. Equal distances keep their filtering order.
pub fn rank<'e>(index: &TokenIndex, query: &PreparedQuery, matched: Vec<&'e Entry>) -> Vec<&'e Entry> {
    // Short queries only compete on the first one or two tokens.
    let take = match query.word_len {
        1 => 1,
        2 => 2,
        _ => usize::MAX,
    };
    let (from_query, to_query) = if query.from == Lang::Isv {
        (&query.isv, &query.lang)
    } else {
        (&query.lang, &query.isv)
    };

    // Distances live only for this call.
    let mut scored: Vec<(usize, &'e Entry)> = matched
        .into_iter()
        .map(|entry| {
            let tokens = index.tokens(entry.id(), TokenSlot::Lang(query.from));
            let mut distance = min_distance(tokens, from_query, take);
            if query.two_way {
                let tokens = index.tokens(entry.id(), TokenSlot::Lang(query.to));
                distance = distance.min(min_distance(tokens, to_query, take));
            }
            (distance, entry)
        })
        .collect();

    // sort_by_key is stable
    scored.sort_by_key(|&(distance, _)| distance);
    scored
        .into_iter()
        .take(RESULT_LIMIT)
        .map(|(_, entry)| entry)
        .collect()
}
