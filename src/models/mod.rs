// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Wine, Characteristics, UserPreferences, Criterion, ScoredWine, Recommendation, ScoringWeights};
pub use requests::{RecommendRequest, AnswerRequest};
pub use responses::{WinesResponse, ConsultationResponse, HealthResponse, ErrorResponse};
