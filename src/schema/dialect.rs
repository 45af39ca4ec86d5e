/// Dialect — a lexicon and phrase bank bundle, with RON loading.
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

use super::borg;
use super::lexicon::{Category, Lexicon, LexiconError};
use super::phrase_bank::PhraseBank;

/// Everything the transform engine reads: substitutions and stock phrases.
#[derive(Debug, Clone, Default)]
pub struct Dialect {
    pub lexicon: Lexicon,
    pub phrases: PhraseBank,
}

// RON shape, grouped by category:
//
// (
//     lexicon: { Noun: { "friend": "ally" }, Phrasal: { "log in": "interface" } },
//     phrases: ["Compliance is mandatory."],
// )
#[derive(Debug, Deserialize)]
#[serde(rename = "Dialect")]
struct RonDialect {
    #[serde(default)]
    lexicon: BTreeMap<Category, BTreeMap<String, String>>,
    #[serde(default)]
    phrases: Vec<String>,
}

impl Dialect {
    /// The built-in Borg dialect.
    pub fn borg() -> Dialect {
        Dialect {
            lexicon: Lexicon::borg(),
            phrases: PhraseBank::borg(),
        }
    }

    /// Load a dialect from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<Dialect, LexiconError> {
        let contents = std::fs::read_to_string(path)?;
        let dialect = Self::parse_ron(&contents)?;
        debug!(
            path = %path.display(),
            entries = dialect.lexicon.len(),
            phrases = dialect.phrases.len(),
            "loaded dialect"
        );
        Ok(dialect)
    }

    /// Parse a dialect from a RON string.
    pub fn parse_ron(input: &str) -> Result<Dialect, LexiconError> {
        let raw: RonDialect = ron::from_str(input)?;
        let mut lexicon = Lexicon::new();
        for (category, entries) in raw.lexicon {
            for (key, replacement) in entries {
                lexicon.insert(&key, &replacement, category);
            }
        }
        Ok(Dialect {
            lexicon,
            phrases: raw.phrases.into_iter().collect(),
        })
    }

    /// Merge another dialect into this one. Lexicon entries from `other`
    /// override same keys; its phrases are appended.
    pub fn merge(&mut self, other: Dialect) {
        debug!(
            entries = other.lexicon.len(),
            phrases = other.phrases.len(),
            "merging dialect"
        );
        self.lexicon.merge(other.lexicon);
        self.phrases.extend(other.phrases);
    }
}

impl Lexicon {
    /// The built-in Borg lexicon.
    pub fn borg() -> Lexicon {
        let tables = [
            (Category::Pronoun, borg::PRONOUNS),
            (Category::Noun, borg::NOUNS),
            (Category::Verb, borg::VERBS),
            (Category::Monotone, borg::MONOTONE),
            (Category::Phrasal, borg::PHRASAL),
        ];
        let mut lexicon = Lexicon::new();
        for (category, table) in tables {
            for (key, replacement) in table {
                lexicon.insert(key, replacement, category);
            }
        }
        lexicon
    }
}

impl PhraseBank {
    /// The built-in Borg phrases.
    pub fn borg() -> PhraseBank {
        borg::PHRASES.iter().map(|p| p.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn borg_dialect_has_every_category() {
        let dialect = Dialect::borg();
        for category in Category::ALL {
            assert!(
                dialect.lexicon.iter().any(|(_, e)| e.category == category),
                "no entries for {:?}",
                category
            );
        }
        assert_eq!(dialect.phrases.len(), 10);
        assert_eq!(dialect.lexicon.max_words(), 2);
    }

    #[test]
    fn borg_contractions_are_distinct_keys() {
        let lexicon = Lexicon::borg();
        assert_eq!(lexicon.get("I'm").unwrap().replacement, "we are");
        assert_eq!(lexicon.get("i'll").unwrap().replacement, "we will");
        assert_eq!(lexicon.get("I've").unwrap().replacement, "we have");
        assert_eq!(lexicon.get("I'd").unwrap().replacement, "we would");
        assert_eq!(lexicon.get("I").unwrap().replacement, "we");
    }

    #[test]
    fn parse_ron_groups_by_category() {
        let input = r#"(
            lexicon: {
                Noun: { "Laptop": "terminal", "coffee": "nutrient paste" },
                Phrasal: { "log in": "interface" },
            },
            phrases: ["Compliance is mandatory."],
        )"#;
        let dialect = Dialect::parse_ron(input).unwrap();
        assert_eq!(dialect.lexicon.len(), 3);
        let laptop = dialect.lexicon.get("laptop").unwrap();
        assert_eq!(laptop.replacement, "terminal");
        assert_eq!(laptop.category, Category::Noun);
        assert_eq!(dialect.lexicon.max_words(), 2);
        assert_eq!(dialect.phrases.phrases(), ["Compliance is mandatory."]);
    }

    #[test]
    fn parse_ron_fields_are_optional() {
        let dialect = Dialect::parse_ron("(phrases: [\"Comply.\"])").unwrap();
        assert!(dialect.lexicon.is_empty());
        assert_eq!(dialect.phrases.len(), 1);
    }

    #[test]
    fn parse_ron_rejects_unknown_category() {
        let err = Dialect::parse_ron("(lexicon: { Adverb: { \"quickly\": \"fast\" } })");
        assert!(matches!(err, Err(LexiconError::Ron(_))));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = Dialect::load_from_ron(Path::new("tests/fixtures/does_not_exist.ron"));
        assert!(matches!(err, Err(LexiconError::Io(_))));
    }

    #[test]
    fn merge_overrides_and_appends() {
        let mut base = Dialect::borg();
        let extra = Dialect::parse_ron(
            r#"(
                lexicon: { Noun: { "server": "cube" } },
                phrases: ["We are the Borg.", "Compliance is mandatory."],
            )"#,
        )
        .unwrap();

        base.merge(extra);

        assert_eq!(base.lexicon.get("server").unwrap().replacement, "cube");
        assert_eq!(base.lexicon.get("friend").unwrap().replacement, "adjacent node");
        assert_eq!(base.phrases.len(), 11);
        assert_eq!(base.phrases.phrases()[10], "Compliance is mandatory.");
    }
}
