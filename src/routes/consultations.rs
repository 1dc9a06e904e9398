use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use uuid::Uuid;
use validator::Validate;
use crate::core::Consultation;
use crate::models::{AnswerRequest, ConsultationResponse};
use crate::routes::{error_response, AppState};
use crate::services::SessionError;

/// Configure consultation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/consultations", web::post().to(start_consultation))
        .route("/consultations/{id}", web::get().to(get_consultation))
        .route("/consultations/{id}/answer", web::post().to(answer_consultation));
}

/// Start consultation endpoint
///
/// POST /api/v1/consultations
async fn start_consultation(state: web::Data<AppState>) -> impl Responder {
    let (id, consultation) = state.sessions.start().await;
    tracing::info!("Started consultation {}", id);

    HttpResponse::Created().json(build_response(&state, id, &consultation))
}

/// Consultation state endpoint
///
/// GET /api/v1/consultations/{id}
async fn get_consultation(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();

    match state.sessions.get(id).await {
        Ok(consultation) => HttpResponse::Ok().json(build_response(&state, id, &consultation)),
        Err(e) => session_error(e),
    }
}

/// Answer consultation endpoint
///
/// POST /api/v1/consultations/{id}/answer
///
/// Request body:
/// ```json
/// { "answer": "Красное" }
/// ```
/// A missing or null answer skips the current question.
async fn answer_consultation(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: web::Json<AnswerRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors);
    }

    let id = path.into_inner();
    let answer = req.into_inner().answer;

    match state.sessions.answer(id, answer).await {
        Ok(consultation) => {
            if consultation.is_finished() {
                tracing::info!("Consultation {} finished", id);
            }
            HttpResponse::Ok().json(build_response(&state, id, &consultation))
        }
        Err(e) => session_error(e),
    }
}

fn build_response(state: &AppState, id: Uuid, consultation: &Consultation) -> ConsultationResponse {
    let recommendation = consultation
        .snapshot()
        .map(|preferences| state.recommender.recommend(state.catalog.wines(), &preferences));

    ConsultationResponse {
        id: id.to_string(),
        question: consultation.current_question(),
        finished: consultation.is_finished(),
        preferences: consultation.preferences().clone(),
        recommendation,
    }
}

fn session_error(error: SessionError) -> HttpResponse {
    match error {
        SessionError::NotFound(_) => {
            error_response(StatusCode::NOT_FOUND, "Consultation not found", error)
        }
        SessionError::Consultation(_) => {
            error_response(StatusCode::CONFLICT, "Consultation finished", error)
        }
    }
}
