use std::cmp::Ordering;

use crate::models::{Criterion, Recommendation, ScoredWine, ScoringWeights, UserPreferences, Wine};
use crate::core::{preferences::PreferenceProfile, scoring::calculate_wine_score};

/// Main recommendation orchestrator
///
/// # Pipeline Stages
/// 1. Typed preference profile from the guest's answers
/// 2. Additive scoring of every catalog wine
/// 3. Positive-score filter, stable ranking and truncation
/// 4. Rating-ordered fallback when nothing scored positively
///
/// The recommender holds only its weights; every call is a pure function of
/// the catalog and preference snapshots.
#[derive(Debug, Clone)]
pub struct Recommender {
    weights: ScoringWeights,
}

impl Recommender {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Recommend wines from `wines` for the given preference snapshot
    ///
    /// # Arguments
    /// * `wines` - The read-only wine catalog
    /// * `preferences` - Completed answers from the consultation
    ///
    /// # Returns
    /// At most `max_results` wines (and never more than the catalog holds),
    /// with their ids in ranked order and an advisory summary
    pub fn recommend(&self, wines: &[Wine], preferences: &UserPreferences) -> Recommendation {
        let profile = PreferenceProfile::from_preferences(preferences);
        self.recommend_for_profile(wines, &profile)
    }

    pub fn recommend_for_profile(&self, wines: &[Wine], profile: &PreferenceProfile) -> Recommendation {
        let limit = self.weights.max_results;

        // Without any stated preference the rating bonus alone would decide,
        // which is exactly the popular-wines list.
        if profile.is_empty() {
            let popular = popular_wines(wines, limit);
            return self.finish(wines.len(), popular, true);
        }

        let mut ranked: Vec<ScoredWine> = wines
            .iter()
            .filter_map(|wine| {
                let (score, matched_criteria) = calculate_wine_score(wine, profile, &self.weights);

                // Only positively scored wines are recommendations
                if score > 0.0 {
                    Some(ScoredWine {
                        wine: wine.clone(),
                        score,
                        matched_criteria,
                    })
                } else {
                    None
                }
            })
            .collect();

        // sort_by is stable: ties keep catalog order
        ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        ranked.truncate(limit);

        let fallback = ranked.is_empty();
        if fallback {
            ranked = popular_wines(wines, limit);
        }

        self.finish(wines.len(), ranked, fallback)
    }

    fn finish(&self, catalog_size: usize, ranked: Vec<ScoredWine>, fallback: bool) -> Recommendation {
        let summary = summarize(&ranked, fallback);

        tracing::debug!(
            "Recommended {} of {} wines (fallback: {})",
            ranked.len(),
            catalog_size,
            fallback
        );

        Recommendation {
            wine_ids: ranked.iter().map(|scored| scored.wine.id.clone()).collect(),
            wines: ranked,
            summary,
            fallback,
        }
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Top-rated wines, stable for equal ratings, with a nominal score of 0
fn popular_wines(wines: &[Wine], limit: usize) -> Vec<ScoredWine> {
    let mut by_rating: Vec<&Wine> = wines.iter().collect();
    by_rating.sort_by(|a, b| b.rating().partial_cmp(&a.rating()).unwrap_or(Ordering::Equal));

    by_rating
        .into_iter()
        .take(limit)
        .map(|wine| ScoredWine {
            wine: wine.clone(),
            score: 0.0,
            matched_criteria: Vec::new(),
        })
        .collect()
}

fn summarize(ranked: &[ScoredWine], fallback: bool) -> String {
    if ranked.is_empty() {
        return "В винной карте пока нет вин для рекомендации.".to_string();
    }

    if fallback {
        return "Точных совпадений не нашлось, поэтому я отметил самые популярные вина из нашей карты."
            .to_string();
    }

    let labels: Vec<&str> = ranked[0]
        .matched_criteria
        .iter()
        .map(|criterion: &Criterion| criterion.label())
        .collect();

    if labels.is_empty() {
        format!(
            "Подобрал для вас {} вин(а) с высоким рейтингом, они отмечены в карте.",
            ranked.len()
        )
    } else {
        format!(
            "Подобрал для вас {} вин(а), они отмечены в карте. Лучшее совпадение по критериям: {}.",
            ranked.len(),
            labels.join(", ")
        )
    }
}

/// Recommend with the default weights
pub fn recommend(wines: &[Wine], preferences: &UserPreferences) -> Recommendation {
    Recommender::with_default_weights().recommend(wines, preferences)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Characteristics;

    fn create_wine(id: &str, wine_type: &str, rating: Option<f64>) -> Wine {
        Wine {
            id: id.to_string(),
            name: Some(format!("Wine {}", id)),
            wine_type: wine_type.to_string(),
            characteristics: Characteristics::default(),
            aroma_tags: vec![],
            flavor_tags: vec![],
            average_rating: rating,
        }
    }

    #[test]
    fn test_color_preference_filters_mismatches() {
        let wines = vec![
            create_wine("A", "красный", Some(4.0)),
            create_wine("B", "белый", Some(5.0)),
        ];
        let preferences = UserPreferences {
            wine_color: Some("Красное".to_string()),
            ..Default::default()
        };

        let result = recommend(&wines, &preferences);

        assert_eq!(result.wine_ids, vec!["A"]);
        assert_eq!(result.wines[0].score, 7.0);
        assert_eq!(result.wines[0].matched_criteria, vec![Criterion::Color]);
        assert!(!result.fallback);
        assert!(result.summary.contains("цвет"));
    }

    #[test]
    fn test_no_preferences_ranks_by_rating() {
        let wines = vec![
            create_wine("A", "красный", Some(4.0)),
            create_wine("B", "белый", Some(5.0)),
        ];

        let result = recommend(&wines, &UserPreferences::default());

        assert!(result.fallback);
        assert_eq!(result.wine_ids, vec!["B", "A"]);
    }

    #[test]
    fn test_fallback_when_nothing_scores() {
        let wines = vec![
            create_wine("A", "белое", Some(4.0)),
            create_wine("B", "белое", Some(5.0)),
            create_wine("C", "белое", None),
        ];
        let preferences = UserPreferences {
            wine_color: Some("Красное".to_string()),
            ..Default::default()
        };

        let result = recommend(&wines, &preferences);

        assert!(result.fallback);
        assert_eq!(result.wine_ids, vec!["B", "A", "C"]);
        assert!(result.wines.iter().all(|w| w.score == 0.0 && w.matched_criteria.is_empty()));
    }

    #[test]
    fn test_fallback_ties_keep_catalog_order() {
        let wines = vec![
            create_wine("A", "белое", Some(3.0)),
            create_wine("B", "белое", None),
            create_wine("C", "белое", Some(0.0)),
            create_wine("D", "белое", Some(3.0)),
        ];
        let preferences = UserPreferences {
            wine_color: Some("Красное".to_string()),
            ..Default::default()
        };

        let result = recommend(&wines, &preferences);

        assert!(result.fallback);
        assert_eq!(result.wine_ids, vec!["A", "D", "B", "C"]);
    }

    #[test]
    fn test_empty_catalog() {
        let result = recommend(&[], &UserPreferences::default());

        assert!(result.wine_ids.is_empty());
        assert!(!result.summary.is_empty());
    }

    #[test]
    fn test_respects_limit_and_keeps_ties_in_catalog_order() {
        let wines: Vec<Wine> = (0..10)
            .map(|i| create_wine(&i.to_string(), "красное", Some(3.0)))
            .collect();
        let preferences = UserPreferences {
            wine_color: Some("Красное".to_string()),
            ..Default::default()
        };

        let result = recommend(&wines, &preferences);

        assert_eq!(result.wine_ids, vec!["0", "1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_custom_result_limit() {
        let weights = ScoringWeights {
            max_results: 2,
            ..Default::default()
        };
        let wines: Vec<Wine> = (0..5)
            .map(|i| create_wine(&i.to_string(), "белое", Some(i as f64)))
            .collect();

        let preferences = UserPreferences {
            wine_color: Some("White".to_string()),
            ..Default::default()
        };

        let result = Recommender::new(weights).recommend(&wines, &preferences);

        assert_eq!(result.wine_ids, vec!["4", "3"]);
    }
}
