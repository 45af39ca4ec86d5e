mod borg;
pub mod dialect;
pub mod lexicon;
pub mod phrase_bank;
