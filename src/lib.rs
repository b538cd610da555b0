//! Core logic for the marmoset stochastic string search.
//!
//! The search draws uniformly random candidate strings over a fixed
//! 27-symbol alphabet, scores each one against a goal string by positional
//! equality, and surfaces every new best (score, candidate) pair until an
//! exact match appears.

pub mod alphabet;
pub mod config;
pub mod error;
pub mod generate;
pub mod score;
pub mod search;
pub mod stats;

pub use config::SearchConfig;
pub use error::MarmosetError;
pub use generate::generate;
pub use score::score;
pub use search::{run_search, Improvement, Search, SearchOutcome};
pub use stats::Stats;
