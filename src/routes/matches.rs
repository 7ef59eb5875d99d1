use actix_web::{web, HttpResponse};
use validator::Validate;
use crate::core::Matcher;
use crate::error::ApiError;
use crate::models::{
    ExactMatchesResponse, HealthResponse, MatchPath, MatchQuery, RankedMatchesResponse, RootResponse,
};
use crate::services::Dataset;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub matcher: Matcher,
}

impl AppState {
    pub fn new(dataset: Dataset, matcher: Matcher) -> Self {
        Self {
            dataset: Arc::new(dataset),
            matcher,
        }
    }
}

/// Configure all routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/", web::get().to(root))
        .route("/health", web::get().to(health_check))
        .route("/candidates", web::get().to(list_candidates))
        .route("/students", web::get().to(list_candidates))
        .route("/internships", web::get().to(list_internships))
        .route("/match/{candidate_id}", web::get().to(ranked_matches))
        .route("/match/{candidate_id}/exact", web::get().to(exact_matches));
}

/// Liveness message
async fn root() -> HttpResponse {
    HttpResponse::Ok().json(RootResponse {
        message: "Internship Matching API running".to_string(),
    })
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        candidates: state.dataset.candidates().len(),
        internships: state.dataset.internships().len(),
    })
}

/// GET /candidates
async fn list_candidates(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.dataset.candidates())
}

/// GET /internships
async fn list_internships(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.dataset.internships())
}

/// Ranked matches endpoint
///
/// GET /match/{candidate_id}?top_n=5
///
/// Response body:
/// ```json
/// {
///   "candidate_id": "string",
///   "matches": [{"id": "...", "title": "...", "sector": "...", "location": "...", "company": "...", "score": 2}]
/// }
/// ```
async fn ranked_matches(
    state: web::Data<AppState>,
    path: web::Path<MatchPath>,
    query: web::Query<MatchQuery>,
) -> Result<HttpResponse, ApiError> {
    path.validate()?;
    query.validate()?;

    let candidate_id = &path.candidate_id;
    let top_n = state.matcher.resolve_top_n(query.top_n)?;

    tracing::info!("Ranking internships for candidate: {}, top_n: {}", candidate_id, top_n);

    let result = state
        .matcher
        .rank(candidate_id, top_n, &state.dataset)
        .map_err(|e| {
            tracing::info!("Ranking failed for {}: {}", candidate_id, e);
            ApiError::from(e)
        })?;

    tracing::info!(
        "Returning {} matches for candidate {} (from {} internships)",
        result.matches.len(),
        candidate_id,
        result.total_internships
    );

    Ok(HttpResponse::Ok().json(RankedMatchesResponse {
        candidate_id: candidate_id.clone(),
        matches: result.matches,
    }))
}

/// Exact-filter matches endpoint
///
/// GET /match/{candidate_id}/exact
///
/// Responds 404 both when the candidate is unknown and when no internship
/// matches sector and location exactly; the message tells the two apart.
async fn exact_matches(
    state: web::Data<AppState>,
    path: web::Path<MatchPath>,
) -> Result<HttpResponse, ApiError> {
    path.validate()?;

    let candidate_id = &path.candidate_id;

    let matches = state.matcher.find_exact(candidate_id, &state.dataset)?;

    if matches.is_empty() {
        tracing::debug!("No exact matches for candidate {}", candidate_id);
        return Err(ApiError::NotFound("No matches found".to_string()));
    }

    tracing::info!("Returning {} exact matches for candidate {}", matches.len(), candidate_id);

    Ok(HttpResponse::Ok().json(ExactMatchesResponse {
        candidate_id: candidate_id.clone(),
        matches: matches.into_iter().cloned().collect(),
    }))
}
