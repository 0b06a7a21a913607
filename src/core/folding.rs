// src/core/folding.rs
use crate::core::types::Flavorisation;
use serde::{Deserialize, Serialize};

/// Interslavic letters the user may ask search to distinguish, each with
/// the plainer spelling it folds to otherwise.
pub const REPLACEABLE_LETTERS: [(&str, &str); 18] = [
    ("đ", "dž"),
    ("ć", "č"),
    ("ž", "z"),
    ("š", "s"),
    ("č", "c"),
    ("ě", "e"),
    ("y", "i"),
    ("å", "a"),
    ("ę", "e"),
    ("ų", "u"),
    ("ò", "o"),
    ("ŕ", "r"),
    ("ľ", "l"),
    ("ń", "n"),
    ("ť", "t"),
    ("ď", "d"),
    ("ś", "s"),
    ("ź", "z"),
];

/// Letters the standard alphabet writes natively; only these follow the
/// user's choice under the standard flavorisation.
const STANDARD_LETTERS: [&str; 5] = ["š", "ž", "č", "ě", "y"];

/// Session-scoped letter folding preference.
///
/// An active letter is significant: search keeps it distinct and folds every
/// inactive pair. Only source letters are stored; replacements always come
/// from [`REPLACEABLE_LETTERS`], and letters outside the table are inert.
/// Changes apply to queries issued after the mutating call returns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoldingConfig {
    letters: Vec<String>,
}

impl FoldingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a configuration with the table pairs for the given letters active.
    pub fn with_letters(letters: &str) -> Self {
        let mut config = Self::new();
        config.toggle(letters);
        config
    }

    /// Flips every table letter that occurs in `letters`.
    pub fn toggle(&mut self, letters: &str) {
        for letter in letters.chars() {
            let mut buf = [0u8; 4];
            let letter: &str = letter.encode_utf8(&mut buf);
            if !REPLACEABLE_LETTERS.iter().any(|(from, _)| *from == letter) {
                continue;
            }
            match self.letters.iter().position(|active| active == letter) {
                Some(index) => {
                    self.letters.remove(index);
                }
                None => self.letters.push(letter.to_string()),
            }
        }
    }

    /// Active `(letter, replacement)` pairs, in activation order.
    pub fn pairs(&self) -> Vec<(&'static str, &'static str)> {
        self.letters
            .iter()
            .filter_map(|letter| {
                REPLACEABLE_LETTERS
                    .iter()
                    .find(|(from, _)| *from == letter.as_str())
                    .copied()
            })
            .collect()
    }

    pub fn is_active(&self, letter: &str) -> bool {
        self.letters.iter().any(|active| active == letter)
    }

    /// True when every table letter is active.
    pub fn is_complete(&self) -> bool {
        REPLACEABLE_LETTERS.iter().all(|(from, _)| self.is_active(from))
    }

    /// True when the replacement of some active pair occurs in `query`.
    pub fn touches(&self, query: &str) -> bool {
        self.pairs().iter().any(|(_, to)| query.contains(*to))
    }

    /// Applies every pair that should fold under `style`, in table order.
    /// `text` must already be lowercased.
    pub fn fold(&self, text: &str, style: Flavorisation) -> String {
        let mut folded = text.to_string();
        for (from, to) in REPLACEABLE_LETTERS.iter() {
            let folds = !self.is_active(from)
                || (style == Flavorisation::Standard && !STANDARD_LETTERS.contains(from));
            if folds {
                folded = folded.replace(from, to);
            }
        }
        folded
    }
}
