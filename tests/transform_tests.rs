/// Transform engine integration tests — built-in and substitute dialects.

use borgify::core::config::TransformConfig;
use borgify::core::engine::TransformEngine;
use borgify::core::injection::{InjectionScope, PhraseFormat};
use borgify::schema::dialect::Dialect;
use borgify::schema::lexicon::{Category, Lexicon};
use borgify::schema::phrase_bank::PhraseBank;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;

fn never() -> TransformConfig {
    TransformConfig::default().with_probability(0.0)
}

#[test]
fn every_builtin_key_maps_to_its_replacement() {
    let dialect = Dialect::borg();
    let engine = TransformEngine::new(&dialect, never());
    let mut rng = StdRng::seed_from_u64(1);

    for (key, entry) in dialect.lexicon.iter() {
        assert_eq!(
            engine.transform(key, &mut rng),
            entry.replacement,
            "lowercase key {:?}",
            key
        );
    }
}

#[test]
fn capitalized_keys_capitalize_replacements() {
    let dialect = Dialect::borg();
    let engine = TransformEngine::new(&dialect, never());
    let mut rng = StdRng::seed_from_u64(1);

    assert_eq!(engine.transform("Children", &mut rng), "Sub-units");
    assert_eq!(engine.transform("Yours", &mut rng), "Of the collective");
    assert_eq!(engine.transform("TURN OFF", &mut rng), "DEACTIVATE");
    assert_eq!(engine.transform("Set up", &mut rng), "Initialize");
}

#[test]
fn borg_paragraph() {
    let dialect = Dialect::borg();
    let engine = TransformEngine::new(&dialect, never());
    let mut rng = StdRng::seed_from_u64(1);

    assert_eq!(
        engine.transform("I'm sure my friends will help you find out the truth.", &mut rng),
        "We are sure our adjacent nodes will provide interface assistance \
         you will be assimilated detect the prime directive."
    );
    assert_eq!(
        engine.transform("\"Hello,\" said the old man.", &mut rng),
        "\"Hello,\" said the legacy unit."
    );
}

#[test]
fn lines_without_terms_get_phrase_with_configured_frequency() {
    let dialect = Dialect::borg();
    let engine = TransformEngine::new(&dialect, TransformConfig::default().with_probability(0.25));
    let mut rng = StdRng::seed_from_u64(2024);
    let line = "Zebras graze quietly";

    let trials = 4000;
    let mut hits = 0;
    for _ in 0..trials {
        let out = engine.transform(line, &mut rng);
        if out == line {
            continue;
        }
        let suffix = out
            .strip_prefix("Zebras graze quietly ")
            .expect("phrase must follow the untouched line and a space");
        assert!(dialect.phrases.phrases().iter().any(|p| p == suffix));
        hits += 1;
    }

    let rate = hits as f64 / trials as f64;
    assert!((0.21..0.29).contains(&rate), "injection rate {}", rate);
}

#[test]
fn same_seed_same_output() {
    let dialect = Dialect::borg();
    let config = TransformConfig::default()
        .with_probability(0.6)
        .with_scope(InjectionScope::Sentence);
    let engine = TransformEngine::new(&dialect, config);
    let text = "We build code. The network is slow! Is the server up? Maybe.";

    let run = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..5).map(|_| engine.transform(text, &mut rng)).collect::<Vec<_>>()
    };
    assert_eq!(run(7), run(7));
}

#[test]
fn substitute_lexicon_in_isolation() {
    let mut lexicon = Lexicon::new();
    lexicon.insert("server", "node", Category::Noun);
    lexicon.insert("my server", "our node", Category::Noun);
    let phrases = PhraseBank::default();
    let engine = TransformEngine::from_parts(&lexicon, &phrases, TransformConfig::default().with_probability(1.0));
    let mut rng = StdRng::seed_from_u64(0);

    assert_eq!(engine.transform("my server", &mut rng), "our node");
    assert_eq!(engine.transform("I love my server!", &mut rng), "I love our node!");
}

#[test]
fn merged_fixture_dialect_overrides_builtin() {
    let mut dialect = Dialect::borg();
    dialect.merge(Dialect::load_from_ron(Path::new("tests/fixtures/office_dialect.ron")).unwrap());
    let engine = TransformEngine::new(&dialect, never());
    let mut rng = StdRng::seed_from_u64(0);

    assert_eq!(
        engine.transform("Log in to my server before the meeting.", &mut rng),
        "Interface to our cube before the synchronization cycle."
    );
    assert_eq!(engine.transform("The server.", &mut rng), "The cube.");
    assert_eq!(dialect.phrases.len(), 11);
}

#[test]
fn loud_fixture_config_brackets_every_sentence() {
    let config = TransformConfig::load_from_ron(Path::new("tests/fixtures/loud_config.ron")).unwrap();
    assert_eq!(config.scope, InjectionScope::Sentence);
    assert_eq!(config.phrase_format, PhraseFormat::Bracketed);

    let dialect = Dialect {
        lexicon: Lexicon::borg(),
        phrases: PhraseBank::new(vec!["We are the Borg.".to_string()]),
    };
    let engine = TransformEngine::new(&dialect, config);
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        engine.transform("Stop. Go", &mut rng),
        "Halt. < WE ARE THE BORG. > Transmit"
    );
}
