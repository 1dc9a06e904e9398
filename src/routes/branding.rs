use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use crate::routes::{error_response, AppState};
use crate::services::BrandingSettings;

/// Configure branding routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/branding", web::get().to(get_branding))
        .route("/branding", web::put().to(update_branding))
        .route("/branding", web::delete().to(reset_branding))
        .route("/branding.css", web::get().to(branding_css));
}

async fn get_branding(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.branding.current())
}

/// Replace branding
///
/// PUT /api/v1/branding
///
/// Request body:
/// ```json
/// {
///   "restaurantName": "Le Cellier",
///   "logoUrl": "https://example.com/logo.png",
///   "palette": { "primary": "#722f37", "secondary": "#c9a66b", "accent": "#e8c39e",
///                "background": "#fdf8f3", "text": "#2b1d1f" }
/// }
/// ```
async fn update_branding(
    state: web::Data<AppState>,
    req: web::Json<BrandingSettings>,
) -> impl Responder {
    match state.branding.update(req.into_inner()) {
        Ok(settings) => HttpResponse::Ok().json(settings),
        Err(e) => {
            tracing::info!("Rejected branding update: {}", e);
            error_response(StatusCode::BAD_REQUEST, "Invalid branding", e)
        }
    }
}

/// Restore the startup branding
async fn reset_branding(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.branding.reset())
}

/// Palette as CSS custom properties
async fn branding_css(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/css; charset=utf-8")
        .body(state.branding.current().css_variables())
}
