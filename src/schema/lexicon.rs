/// Lexicon — case-insensitive word and phrase substitution table.
use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Broad class of a lexicon entry. Only used for bookkeeping and RON
/// grouping; matching treats every category the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
pub enum Category {
    /// Pronouns, including "I" and its contractions.
    Pronoun,
    Noun,
    Verb,
    /// Adjectives and emotion words, flattened to a monotone register.
    Monotone,
    /// Multi-word verbs such as "find out".
    Phrasal,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Pronoun,
        Category::Noun,
        Category::Verb,
        Category::Monotone,
        Category::Phrasal,
    ];
}

/// A single substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub replacement: String,
    pub category: Category,
}

/// Immutable-after-construction substitution table.
///
/// Keys are stored normalized (see [`normalize_key`]); `max_words` tracks the
/// longest key so the engine knows how far ahead to look for multi-word
/// matches.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: FxHashMap<String, Entry>,
    max_words: usize,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entry. Keys that normalize to nothing are ignored.
    pub fn insert(&mut self, key: &str, replacement: &str, category: Category) {
        let key = normalize_key(key);
        if key.is_empty() {
            warn!(replacement, "ignoring lexicon entry with empty key");
            return;
        }
        let words = key.split(' ').count();
        self.max_words = self.max_words.max(words);
        self.entries.insert(
            key,
            Entry {
                replacement: replacement.to_string(),
                category,
            },
        );
    }

    /// Look up a key, normalizing it first.
    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.get(&normalize_key(key))
    }

    /// Look up an already normalized key.
    pub(crate) fn get_normalized(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of words in the longest key.
    pub fn max_words(&self) -> usize {
        self.max_words
    }

    /// Iterate over `(normalized key, entry)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(k, e)| (k.as_str(), e))
    }

    /// Merge another lexicon into this one. Entries from `other` override
    /// entries in `self` with the same key.
    pub fn merge(&mut self, other: Lexicon) {
        self.max_words = self.max_words.max(other.max_words);
        for (key, entry) in other.entries {
            self.entries.insert(key, entry);
        }
    }
}

/// Fold a source term into its lookup form: lowercase, typographic
/// apostrophes folded to `'`, whitespace runs collapsed to one space.
pub fn normalize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for word in key.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        for c in word.chars() {
            if c == '\u{2019}' {
                out.push('\'');
            } else {
                out.extend(c.to_lowercase());
            }
        }
    }
    out
}
