//! Sommelier - wine recommendation service for restaurant wine menus
//!
//! This library provides the preference-driven recommendation engine behind
//! the menu's sommelier chat, along with the consultation flow that collects
//! guest preferences, the wine catalog loader and the restaurant branding store.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{recommend, Consultation, PreferenceProfile, Recommender};
pub use models::{Wine, UserPreferences, ScoredWine, Recommendation, ScoringWeights, Criterion};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let result = recommend(&[], &UserPreferences::default());
        assert!(result.wine_ids.is_empty());
    }
}
