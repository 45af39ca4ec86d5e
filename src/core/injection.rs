/// Injection policy — when and how stock phrases are appended.
use serde::Deserialize;
use tracing::warn;

/// Default chance of appending a phrase.
pub const DEFAULT_INJECTION_PROBABILITY: f64 = 0.12;

/// Where phrase draws happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum InjectionScope {
    /// One draw per line; a hit appends to the end of the line.
    #[default]
    Line,
    /// One draw after every sentence terminator.
    Sentence,
}

/// How an injected phrase is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum PhraseFormat {
    /// The phrase as stored in the bank.
    #[default]
    Plain,
    /// `< PHRASE IN CAPITALS >`.
    Bracketed,
}

impl PhraseFormat {
    pub fn render(self, phrase: &str) -> String {
        match self {
            PhraseFormat::Plain => phrase.to_string(),
            PhraseFormat::Bracketed => format!("< {} >", phrase.to_uppercase()),
        }
    }
}

/// Clamp a probability into [0, 1]. NaN becomes 0.
pub fn clamp_probability(p: f64) -> f64 {
    if p.is_nan() {
        warn!("injection probability is NaN, using 0");
        return 0.0;
    }
    let clamped = p.clamp(0.0, 1.0);
    if clamped != p {
        warn!(requested = p, clamped, "injection probability out of range");
    }
    clamped
}

/// Sentence terminators for [`InjectionScope::Sentence`].
pub(crate) fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}
