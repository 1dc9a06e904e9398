use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{HealthResponse, RecommendRequest, WinesResponse};
use crate::routes::{error_response, AppState};
use crate::services::WineCatalog;

/// Configure catalog and recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/wines", web::get().to(list_wines))
        .route("/recommendations", web::post().to(recommend));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.catalog.is_empty() { "degraded" } else { "healthy" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        catalog_size: state.catalog.len(),
        timestamp: chrono::Utc::now(),
    })
}

/// Wine list endpoint
///
/// GET /api/v1/wines
async fn list_wines(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(WinesResponse {
        wines: state.catalog.wines().to_vec(),
        total: state.catalog.len(),
    })
}

/// Recommend wines endpoint
///
/// POST /api/v1/recommendations
///
/// Request body:
/// ```json
/// {
///   "preferences": {
///     "wineColor": "Красное",
///     "dish": "Мясо",
///     "sweetness": "Сухое",
///     "aromas": ["Ягодный"],
///     "body": "Полнотелое"
///   },
///   "wines": [ ... optional inline catalog ... ]
/// }
/// ```
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommend request: {:?}", errors);
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors);
    }

    let req = req.into_inner();

    // An inline catalog follows the same rules as the loaded one
    let catalog = match req.wines {
        Some(inline) => match WineCatalog::new(inline) {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::info!("Rejected inline catalog: {}", e);
                return error_response(StatusCode::BAD_REQUEST, "Invalid catalog", e);
            }
        },
        None => state.catalog.clone(),
    };
    let wines = catalog.wines();

    let recommendation = state.recommender.recommend(wines, &req.preferences);

    tracing::info!(
        "Returning {} recommendations from {} wines (fallback: {})",
        recommendation.wine_ids.len(),
        wines.len(),
        recommendation.fallback
    );

    HttpResponse::Ok().json(recommendation)
}
