use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Path parameters for the match endpoints
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchPath {
    #[validate(length(min = 1, max = 64), custom(function = "validate_identifier"))]
    pub candidate_id: String,
}

/// Query parameters for the ranked match endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct MatchQuery {
    #[validate(range(min = 1))]
    pub top_n: Option<i64>,
}

/// Identifiers are restricted to ASCII letters, digits, `-` and `_`
pub fn validate_identifier(id: &str) -> Result<(), ValidationError> {
    if id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_identifier"))
    }
}
