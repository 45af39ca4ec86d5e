//! WASM bindings for borgify — powers the in-browser assimilator.

use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

use borgify::core::config::TransformConfig;
use borgify::core::engine::TransformEngine;
use borgify::core::injection::{InjectionScope, PhraseFormat};
use borgify::schema::dialect::Dialect;

// ---------------------------------------------------------------------------
// Assimilator — the main exported struct
// ---------------------------------------------------------------------------
#[wasm_bindgen]
pub struct Assimilator {
    dialect: Dialect,
    config: TransformConfig,
    rng: StdRng,
}

#[wasm_bindgen]
impl Assimilator {
    /// Create an assimilator over the built-in Borg dialect.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64, chance: f64) -> Assimilator {
        Assimilator {
            dialect: Dialect::borg(),
            config: TransformConfig::default().with_probability(chance).clamped(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Transform a single line.
    pub fn transform(&mut self, line: &str) -> String {
        let engine = TransformEngine::new(&self.dialect, self.config.clone());
        engine.transform(line, &mut self.rng)
    }

    /// Transform every line of a text block, keeping line breaks.
    pub fn transform_lines(&mut self, text: &str) -> String {
        let engine = TransformEngine::new(&self.dialect, self.config.clone());
        text.lines()
            .map(|line| engine.transform(line, &mut self.rng))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Merge a RON dialect over the current one.
    pub fn load_dialect(&mut self, ron_src: &str) -> Result<(), JsError> {
        let extra = Dialect::parse_ron(ron_src)
            .map_err(|e| JsError::new(&format!("Dialect parse error: {e}")))?;
        self.dialect.merge(extra);
        Ok(())
    }

    pub fn set_sentence_scope(&mut self, enabled: bool) {
        self.config.scope = if enabled {
            InjectionScope::Sentence
        } else {
            InjectionScope::Line
        };
    }

    pub fn set_bracketed(&mut self, enabled: bool) {
        self.config.phrase_format = if enabled {
            PhraseFormat::Bracketed
        } else {
            PhraseFormat::Plain
        };
    }

    /// Return JSON array of the current stock phrases.
    pub fn phrases(&self) -> String {
        serde_json::to_string(self.dialect.phrases.phrases()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Reseed the random source and drop any loaded dialects.
    pub fn reset(&mut self, seed: u64) {
        self.dialect = Dialect::borg();
        self.rng = StdRng::seed_from_u64(seed);
    }
}
