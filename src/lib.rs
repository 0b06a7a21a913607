// src/lib.rs
//! Search and ranking engine for an Interslavic-centred multilingual dictionary.
//!
//! Build a [`Dictionary`] once from a word list (or from a snapshot of a prior
//! build), then run [`Dictionary::search`] per keystroke and
//! [`Dictionary::format_for_display`] on the results.

pub mod core;
pub mod error;
pub mod morphology;
pub mod persistence;

pub use crate::core::converter::{Orthography, ScriptConverter};
pub use crate::core::engine::Dictionary;
pub use crate::core::folding::FoldingConfig;
pub use crate::core::index::CompletionStats;
pub use crate::core::ranker::RESULT_LIMIT;
pub use crate::core::types::{
    DisplayRecord, Entry, Field, Flavorisation, Lang, SearchRequest, SearchType, HEADER,
};
pub use crate::error::{DictionaryError, Result};
pub use crate::morphology::{Morphology, NoInflection, NounParams};
pub use crate::persistence::IndexSnapshot;
