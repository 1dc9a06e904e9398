use serde::{Deserialize, Serialize};
use crate::core::consultation::Question;
use crate::models::domain::{Recommendation, UserPreferences, Wine};

/// Response for the wine list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WinesResponse {
    pub wines: Vec<Wine>,
    pub total: usize,
}

/// State of a consultation session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsultationResponse {
    pub id: String,
    /// Next question to ask, `None` once every step is answered or skipped
    pub question: Option<Question>,
    pub finished: bool,
    pub preferences: UserPreferences,
    pub recommendation: Option<Recommendation>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub catalog_size: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
