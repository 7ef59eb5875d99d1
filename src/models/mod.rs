// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Application, Candidate, Internship, InternshipMatch, ScoredInternship};
pub use requests::{MatchPath, MatchQuery};
pub use responses::{ErrorResponse, ExactMatchesResponse, HealthResponse, RankedMatchesResponse, RootResponse};
