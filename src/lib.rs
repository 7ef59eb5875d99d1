//! Intern Match - matching service that ranks internship openings for candidates
//!
//! This library provides the two matching strategies (exact filter and additive
//! score), the CSV-backed dataset they run against, and the HTTP routes that
//! expose them.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{exact_matches, score_internship, Matcher, MatchResult};
pub use error::{ApiError, MatchError};
pub use models::{Candidate, Internship, InternshipMatch};
pub use services::{DataError, Dataset};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let candidate = Candidate::with_preferences("1", "IT", "Delhi");
        let internship = Internship::new("10", "IT", "Delhi");
        assert_eq!(score_internship(&candidate, &internship), 2);
    }
}
