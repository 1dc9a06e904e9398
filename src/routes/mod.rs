// Route exports
pub mod branding;
pub mod consultations;
pub mod recommendations;

use actix_web::{error, web, HttpRequest, HttpResponse};
use actix_web::http::StatusCode;
use crate::core::Recommender;
use crate::models::ErrorResponse;
use crate::services::{BrandingStore, ConsultationStore, WineCatalog};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: WineCatalog,
    pub recommender: Recommender,
    pub sessions: ConsultationStore,
    pub branding: BrandingStore,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .app_data(web::PathConfig::default().error_handler(handle_path_error))
            .configure(recommendations::configure)
            .configure(consultations::configure)
            .configure(branding::configure),
    );
}

/// JSON error body with a matching status code
pub(crate) fn error_response(status: StatusCode, error: &str, message: impl ToString) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message: message.to_string(),
        status_code: status.as_u16(),
    })
}

/// Handle malformed path segments, such as a consultation id that is not a UUID
pub fn handle_path_error(err: error::PathError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Path error on {}: {}", req.path(), err);
    let response = error_response(StatusCode::NOT_FOUND, "Invalid path", format!("Invalid path: {}", err));
    error::InternalError::from_response(err, response).into()
}
