/// Transform configuration, loadable from RON.
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::core::injection::{
    clamp_probability, InjectionScope, PhraseFormat, DEFAULT_INJECTION_PROBABILITY,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Knobs for the transform engine. Every field is optional in RON.
///
/// ```ron
/// (injection_probability: 0.25, scope: Sentence, phrase_format: Bracketed)
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename = "TransformConfig")]
pub struct TransformConfig {
    #[serde(default = "default_injection_probability")]
    pub injection_probability: f64,
    #[serde(default)]
    pub scope: InjectionScope,
    #[serde(default)]
    pub phrase_format: PhraseFormat,
}

fn default_injection_probability() -> f64 {
    DEFAULT_INJECTION_PROBABILITY
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            injection_probability: DEFAULT_INJECTION_PROBABILITY,
            scope: InjectionScope::default(),
            phrase_format: PhraseFormat::default(),
        }
    }
}

impl TransformConfig {
    pub fn with_probability(mut self, p: f64) -> Self {
        self.injection_probability = p;
        self
    }

    pub fn with_scope(mut self, scope: InjectionScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_phrase_format(mut self, format: PhraseFormat) -> Self {
        self.phrase_format = format;
        self
    }

    /// Copy with the probability clamped into [0, 1].
    pub fn clamped(mut self) -> Self {
        self.injection_probability = clamp_probability(self.injection_probability);
        self
    }

    /// Load a config from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<TransformConfig, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse a config from a RON string.
    pub fn parse_ron(input: &str) -> Result<TransformConfig, ConfigError> {
        Ok(ron::from_str(input)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let cfg = TransformConfig::default();
        assert_eq!(cfg.injection_probability, 0.12);
        assert_eq!(cfg.scope, InjectionScope::Line);
        assert_eq!(cfg.phrase_format, PhraseFormat::Plain);
    }

    #[test]
    fn parse_partial_ron() {
        let cfg = TransformConfig::parse_ron("(scope: Sentence)").unwrap();
        assert_eq!(cfg.injection_probability, 0.12);
        assert_eq!(cfg.scope, InjectionScope::Sentence);
        assert_eq!(cfg.phrase_format, PhraseFormat::Plain);
    }

    #[test]
    fn parse_full_ron() {
        let cfg = TransformConfig::parse_ron(
            "TransformConfig(injection_probability: 0.5, scope: Line, phrase_format: Bracketed)",
        )
        .unwrap();
        assert_eq!(cfg.injection_probability, 0.5);
        assert_eq!(cfg.phrase_format, PhraseFormat::Bracketed);
    }

    #[test]
    fn parse_bad_ron() {
        assert!(matches!(
            TransformConfig::parse_ron("(scope: Paragraph)"),
            Err(ConfigError::Ron(_))
        ));
    }

    #[test]
    fn clamped_normalizes_probability() {
        assert_eq!(TransformConfig::default().with_probability(1.7).clamped().injection_probability, 1.0);
        assert_eq!(TransformConfig::default().with_probability(-1.0).clamped().injection_probability, 0.0);
    }
}
