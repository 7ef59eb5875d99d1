// Route exports
pub mod matches;

use actix_web::{error, web, HttpRequest};

use crate::error::ApiError;

pub use matches::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
        .app_data(web::PathConfig::default().error_handler(handle_path_error))
        .configure(matches::configure);
}

/// Handle query payload errors, e.g. a non-integer `top_n`
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Query payload error on {}: {}", req.path(), err);
    ApiError::InvalidInput(format!("Invalid query: {}", err)).into()
}

/// Handle path extraction errors
pub fn handle_path_error(err: error::PathError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Path error on {}: {}", req.path(), err);
    ApiError::InvalidInput(format!("Invalid path: {}", err)).into()
}
