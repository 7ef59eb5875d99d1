use crate::core::{filters::exact_matches, scoring::score_internship};
use crate::error::MatchError;
use crate::models::{Internship, InternshipMatch, ScoredInternship};
use crate::services::Dataset;

pub const DEFAULT_TOP_N: usize = 5;
pub const DEFAULT_MAX_TOP_N: usize = 100;

/// Result of the ranking process
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<InternshipMatch>,
    pub total_internships: usize,
}

/// Matching orchestrator for both strategies
///
/// # Strategies
/// 1. Exact filter: sector and location must both equal the candidate's preferences
/// 2. Additive score: rank every internship by the number of matching fields
///
/// The matcher holds no per-request state. Scores live in a vector owned by
/// each call, so concurrent requests against the same dataset never interfere.
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    default_top_n: usize,
    max_top_n: usize,
}

impl Matcher {
    pub fn new(default_top_n: usize, max_top_n: usize) -> Self {
        Self {
            default_top_n: default_top_n.min(max_top_n),
            max_top_n,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_TOP_N, DEFAULT_MAX_TOP_N)
    }

    pub fn default_top_n(&self) -> usize {
        self.default_top_n
    }

    pub fn max_top_n(&self) -> usize {
        self.max_top_n
    }

    /// Resolve a caller-supplied `top_n`
    ///
    /// Absent falls back to the default, values above the maximum are capped,
    /// and zero or negative values are rejected.
    pub fn resolve_top_n(&self, requested: Option<i64>) -> Result<usize, MatchError> {
        match requested {
            None => Ok(self.default_top_n),
            Some(n) if n <= 0 => Err(MatchError::InvalidInput(format!(
                "top_n must be a positive integer, got {}",
                n
            ))),
            Some(n) => Ok(usize::try_from(n).map_or(self.max_top_n, |n| n.min(self.max_top_n))),
        }
    }

    /// Exact-filter strategy
    pub fn find_exact<'a>(
        &self,
        candidate_id: &str,
        dataset: &'a Dataset,
    ) -> Result<Vec<&'a Internship>, MatchError> {
        exact_matches(candidate_id, dataset)
    }

    /// Score every internship for a candidate, best first
    ///
    /// The sort is stable, so internships with equal scores keep file order.
    pub fn score_all<'a>(
        &self,
        candidate_id: &str,
        dataset: &'a Dataset,
    ) -> Result<Vec<ScoredInternship<'a>>, MatchError> {
        let candidate = dataset
            .candidate(candidate_id)
            .ok_or_else(|| MatchError::CandidateNotFound(candidate_id.to_string()))?;

        let mut scored: Vec<ScoredInternship<'a>> = dataset
            .internships()
            .iter()
            .map(|internship| ScoredInternship {
                internship,
                score: score_internship(candidate, internship),
            })
            .collect();

        scored.sort_by(|a, b| b.score.cmp(&a.score));

        Ok(scored)
    }

    /// Additive-score strategy: the `top_n` best internships for a candidate
    pub fn rank(
        &self,
        candidate_id: &str,
        top_n: usize,
        dataset: &Dataset,
    ) -> Result<MatchResult, MatchError> {
        let scored = self.score_all(candidate_id, dataset)?;
        let total_internships = scored.len();

        let matches = scored
            .into_iter()
            .take(top_n)
            .map(InternshipMatch::from)
            .collect();

        Ok(MatchResult {
            matches,
            total_internships,
        })
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_defaults()
    }
}
