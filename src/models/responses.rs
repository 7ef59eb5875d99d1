use serde::{Deserialize, Serialize};
use crate::models::domain::{Internship, InternshipMatch};

/// Response for the ranked match endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedMatchesResponse {
    pub candidate_id: String,
    pub matches: Vec<InternshipMatch>,
}

/// Response for the exact-filter match endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExactMatchesResponse {
    pub candidate_id: String,
    pub matches: Vec<Internship>,
}

/// Liveness message served at `/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub candidates: usize,
    pub internships: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
