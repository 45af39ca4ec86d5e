//! Borgify — assimilate ordinary text into Borg-speak.
//!
//! A lexicon-driven substitution engine: words and multi-word phrases are
//! swapped for their collective equivalents with the original casing kept,
//! and a stock phrase is occasionally appended. All tables are plain values
//! handed to the engine, and randomness comes from a caller-supplied `Rng`.

pub mod core;
pub mod schema;
