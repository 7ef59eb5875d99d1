use crate::models::{Candidate, Internship};

/// Highest score an internship can reach
pub const MAX_SCORE: u8 = 2;

/// Additive compatibility score (0, 1 or 2)
///
/// score = [internship.sector == candidate.preferred_sector]
///       + [internship.location == candidate.preferred_location]
///
/// Comparison is exact and case-sensitive. Skills, capacity and
/// applications do not contribute.
#[inline]
pub fn score_internship(candidate: &Candidate, internship: &Internship) -> u8 {
    u8::from(internship.sector == candidate.preferred_sector)
        + u8::from(internship.location == candidate.preferred_location)
}
