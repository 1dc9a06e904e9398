use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{UserPreferences, Wine};

/// Request to recommend wines
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[serde(default)]
    pub preferences: UserPreferences,
    /// Optional inline catalog; the loaded catalog is used when absent
    #[validate(length(max = 5000))]
    #[serde(default)]
    pub wines: Option<Vec<Wine>>,
}

/// Answer to the current consultation question
///
/// A missing or null `answer` skips the question.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct AnswerRequest {
    #[validate(length(max = 200))]
    #[serde(default)]
    pub answer: Option<String>,
}
