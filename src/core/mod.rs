// src/core/mod.rs
pub mod converter;
pub mod details;
pub mod engine;
pub mod folding;
pub mod format;
pub mod index;
pub mod matcher;
pub mod normalize;
pub mod query;
pub mod ranker;
pub mod types;
