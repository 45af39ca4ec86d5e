pub mod case;
pub mod config;
pub mod engine;
pub mod injection;
pub mod token;
