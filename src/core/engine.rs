/// Transform engine — lexicon substitution and stock-phrase injection.
///
/// Lines are independent: the engine keeps no state between calls and only
/// borrows its dialect, so one engine can serve any number of threads as
/// long as each brings its own random source.
use rand::Rng;
use tracing::trace;

use crate::core::case::SurfaceCase;
use crate::core::config::TransformConfig;
use crate::core::injection::{is_terminator, InjectionScope};
use crate::core::token::{is_whitespace_gap, Tokens};
use crate::schema::dialect::Dialect;
use crate::schema::lexicon::{normalize_key, Entry, Lexicon};
use crate::schema::phrase_bank::PhraseBank;

pub struct TransformEngine<'a> {
    lexicon: &'a Lexicon,
    phrases: &'a PhraseBank,
    config: TransformConfig,
}

impl<'a> TransformEngine<'a> {
    pub fn new(dialect: &'a Dialect, config: TransformConfig) -> Self {
        Self::from_parts(&dialect.lexicon, &dialect.phrases, config)
    }

    pub fn from_parts(lexicon: &'a Lexicon, phrases: &'a PhraseBank, config: TransformConfig) -> Self {
        Self {
            lexicon,
            phrases,
            config: config.clamped(),
        }
    }

    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    /// Transform one line.
    ///
    /// Lines without any word (empty, whitespace, punctuation) come back
    /// unchanged and never get a phrase. Not idempotent: feeding output back
    /// in may substitute again ("your" → "your node" → "your node node").
    pub fn transform<R: Rng + ?Sized>(&self, line: &str, rng: &mut R) -> String {
        let tokens = Tokens::parse(line);
        if tokens.is_empty() {
            return line.to_string();
        }

        let mut out = self.substitute(&tokens);
        match self.config.scope {
            InjectionScope::Line => {
                if let Some(phrase) = self.draw_phrase(rng) {
                    out.push(' ');
                    out.push_str(&phrase);
                }
            }
            InjectionScope::Sentence => out = self.inject_after_sentences(&out, rng),
        }
        out
    }

    /// Substitution only, no randomness involved.
    pub fn substitute(&self, tokens: &Tokens<'_>) -> String {
        let words = &tokens.words;
        let mut out = String::with_capacity(tokens.lead.len() + words.len() * 8);
        out.push_str(tokens.lead);

        let mut i = 0;
        while i < words.len() {
            match self.longest_match(tokens, i) {
                Some((span, entry)) => {
                    let case = self.span_case(tokens, i, span);
                    out.push_str(&case.apply(&entry.replacement));
                    i += span;
                }
                None => {
                    out.push_str(words[i]);
                    i += 1;
                }
            }
            out.push_str(tokens.gaps[i - 1]);
        }
        out
    }

    /// Longest lexicon key starting at word `i`. Spans only extend across
    /// whitespace gaps.
    fn longest_match(&self, tokens: &Tokens<'_>, i: usize) -> Option<(usize, &'a Entry)> {
        let max = self.lexicon.max_words().min(tokens.words.len() - i);
        let mut limit = 1;
        while limit < max && is_whitespace_gap(tokens.gaps[i + limit - 1]) {
            limit += 1;
        }

        let lexicon = self.lexicon;
        (1..=limit).rev().find_map(move |span| {
            let key = normalize_key(&tokens.words[i..i + span].join(" "));
            lexicon.get_normalized(&key).map(|entry| (span, entry))
        })
    }

    /// The first word decides capitalization; a span is shouted only when
    /// every word in it is.
    fn span_case(&self, tokens: &Tokens<'_>, i: usize, span: usize) -> SurfaceCase {
        let first = word_case(tokens, i);
        if span == 1 {
            return first;
        }
        let all_upper = (i..i + span).all(|j| word_case(tokens, j) == SurfaceCase::Upper);
        match first {
            SurfaceCase::Upper if !all_upper => SurfaceCase::Capitalized,
            other => other,
        }
    }

    fn draw_phrase<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<String> {
        let roll: f64 = rng.gen();
        if roll >= self.config.injection_probability {
            return None;
        }
        let phrase = self.phrases.choose(rng)?;
        trace!(phrase, "injecting phrase");
        Some(self.config.phrase_format.render(phrase))
    }

    /// One draw after each run of `.`, `!` or `?` that ends a sentence.
    fn inject_after_sentences<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> String {
        let mut out = String::with_capacity(text.len());
        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            out.push(c);
            if !is_terminator(c) {
                continue;
            }
            if let Some(&next) = chars.peek() {
                if is_terminator(next) || !next.is_whitespace() {
                    continue;
                }
            }
            if let Some(phrase) = self.draw_phrase(rng) {
                out.push(' ');
                out.push_str(&phrase);
            }
        }
        out
    }
}

/// Surface case of word `j`. A lone capital ("I") followed by a shouted
/// word shouts too; a shouted word before it (an acronym like "NASA I")
/// does not count.
fn word_case(tokens: &Tokens<'_>, j: usize) -> SurfaceCase {
    let word = tokens.words[j];
    let case = SurfaceCase::of(word);
    if !SurfaceCase::is_lone_capital(word) {
        return case;
    }
    let next_shouted = tokens
        .words
        .get(j + 1)
        .is_some_and(|w| SurfaceCase::of(w) == SurfaceCase::Upper);
    if next_shouted {
        SurfaceCase::Upper
    } else {
        case
    }
}
