use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Errors raised by the matchers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("candidate not found: {0}")]
    CandidateNotFound(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors surfaced at the HTTP boundary
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    fn kind(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "not_found",
            ApiError::InvalidInput(_) => "invalid_input",
            ApiError::Internal(_) => "internal_error",
        }
    }
}

impl From<MatchError> for ApiError {
    fn from(err: MatchError) -> Self {
        match err {
            MatchError::CandidateNotFound(_) => ApiError::NotFound("Candidate not found".to_string()),
            MatchError::InvalidInput(reason) => ApiError::InvalidInput(reason),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiError::InvalidInput(errors.to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
            status_code: status.as_u16(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_not_found_maps_to_404() {
        let err = ApiError::from(MatchError::CandidateNotFound("99".to_string()));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Candidate not found");
    }

    #[test]
    fn test_invalid_input_maps_to_400() {
        let err = ApiError::from(MatchError::InvalidInput("bad top_n".to_string()));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
