// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod scoring;

pub use filters::{exact_matches, matches_preferences};
pub use matcher::{MatchResult, Matcher};
pub use scoring::{score_internship, MAX_SCORE};
