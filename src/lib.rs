//! fitrank: deterministic candidate scoring and ranking engine
//!
//! Pure functions over candidate platform snapshots. No network calls, no
//! randomness; identical inputs always produce identical rankings.

pub mod cli;
pub mod config;
pub mod eligibility;
pub mod error;
pub mod explanation;
pub mod jd;
pub mod model;
pub mod output;
pub mod ranking;
pub mod roadmap;
pub mod scoring;
pub mod taxonomy;

pub use config::ScoringConfig;
pub use error::{FitRankError, Result};
