// Route exports
pub mod plans;

use actix_web::{error, web, HttpRequest, HttpResponse};

use crate::models::ErrorResponse;
use crate::services::{InMemoryProfileStore, ProfileStore};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    configure_routes_with::<InMemoryProfileStore>(cfg);
}

/// Same routes, backed by a different profile store
pub fn configure_routes_with<S: ProfileStore + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(plans::configure::<S>),
    );
}

/// JSON extractor config that reports malformed bodies as `invalid_json`
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(handle_json_payload_error)
}

fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    let body = ErrorResponse {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    };
    error::InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}
