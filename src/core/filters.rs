use crate::error::MatchError;
use crate::models::{Candidate, Internship};
use crate::services::Dataset;

/// Whether an internship's sector and location both equal the candidate's preferences
#[inline]
pub fn matches_preferences(candidate: &Candidate, internship: &Internship) -> bool {
    internship.sector == candidate.preferred_sector
        && internship.location == candidate.preferred_location
}

/// Exact-filter matcher
///
/// Returns every internship whose sector and location both equal the
/// candidate's preferences, in file order. An empty result is a valid
/// outcome; only an unknown candidate is an error.
pub fn exact_matches<'a>(
    candidate_id: &str,
    dataset: &'a Dataset,
) -> Result<Vec<&'a Internship>, MatchError> {
    let candidate = dataset
        .candidate(candidate_id)
        .ok_or_else(|| MatchError::CandidateNotFound(candidate_id.to_string()))?;

    Ok(dataset
        .internships()
        .iter()
        .filter(|internship| matches_preferences(candidate, internship))
        .collect())
}
