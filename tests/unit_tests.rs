// Unit tests for Sommelier

use sommelier::core::{
    calculate_wine_score, recommend, Consultation, PreferenceProfile, Recommender,
};
use sommelier::models::{Characteristics, Criterion, ScoringWeights, UserPreferences, Wine};
use sommelier::services::ConsultationStore;

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

fn red_preference() -> UserPreferences {
    UserPreferences {
        wine_color: Some("Красное".to_string()),
        ..Default::default()
    }
}

#[test]
fn test_color_scenario() {
    let wines = vec![
        create_wine("A", "красный", Some(4.0)),
        create_wine("B", "белый", Some(5.0)),
    ];
    let preferences = red_preference();
    let profile = PreferenceProfile::from_preferences(&preferences);
    let weights = ScoringWeights::default();

    let (score_a, _) = calculate_wine_score(&wines[0], &profile, &weights);
    let (score_b, _) = calculate_wine_score(&wines[1], &profile, &weights);
    assert_eq!(score_a, 7.0);
    assert_eq!(score_b, -7.5);

    let result = recommend(&wines, &preferences);
    assert_eq!(result.wine_ids, vec!["A"]);
    assert!(!result.fallback);
}

#[test]
fn test_empty_preferences_scenario() {
    let wines = vec![
        create_wine("A", "красный", Some(4.0)),
        create_wine("B", "белый", Some(5.0)),
    ];

    let result = recommend(&wines, &UserPreferences::default());

    assert!(result.fallback);
    assert_eq!(result.wine_ids, vec!["B", "A"]);
}

#[test]
fn test_rating_only_score_without_preferences() {
    let profile = PreferenceProfile::default();
    let weights = ScoringWeights::default();

    for rating in [None, Some(0.0), Some(3.0), Some(4.8)] {
        let wine = create_wine("w", "красное", rating);
        let (score, matched) = calculate_wine_score(&wine, &profile, &weights);
        assert_eq!(score, 0.5 * rating.unwrap_or(0.0));
        assert!(matched.is_empty());
    }
}

#[test]
fn test_dessert_pairs_with_sweet_wine() {
    let mut wine = create_wine("S", "белое", None);
    wine.characteristics.sweetness = Some("сладкое".to_string());
    let preferences = UserPreferences {
        dish: Some("Десерт".to_string()),
        ..Default::default()
    };

    let (score, matched) = calculate_wine_score(
        &wine,
        &PreferenceProfile::from_preferences(&preferences),
        &ScoringWeights::default(),
    );

    assert_eq!(score, 4.0);
    assert_eq!(matched, vec![Criterion::Dish]);
    assert_eq!(matched[0].label(), "блюдо");
}

#[test]
fn test_color_mismatch_costs_fifteen_against_a_match() {
    let weights = ScoringWeights::default();
    let profile = PreferenceProfile::from_preferences(&red_preference());
    let neutral = PreferenceProfile::default();

    let matching = create_wine("M", "красное", Some(3.0));
    let other = create_wine("O", "белое", Some(3.0));

    let (match_score, _) = calculate_wine_score(&matching, &profile, &weights);
    let (other_score, _) = calculate_wine_score(&other, &profile, &weights);
    let (neutral_score, _) = calculate_wine_score(&other, &neutral, &weights);

    assert_eq!(match_score - other_score, 15.0);
    assert_eq!(neutral_score - other_score, 10.0);
}

#[test]
fn test_result_never_exceeds_limit_or_catalog() {
    let preference_sets = vec![
        UserPreferences::default(),
        red_preference(),
        UserPreferences {
            dish: Some("Сыр".to_string()),
            ..Default::default()
        },
    ];

    for size in [0usize, 1, 3, 6, 7, 20] {
        let wines: Vec<Wine> = (0..size)
            .map(|i| {
                let wine_type = if i % 2 == 0 { "красное" } else { "белое" };
                create_wine(&i.to_string(), wine_type, Some((i % 5) as f64))
            })
            .collect();

        for preferences in &preference_sets {
            let result = recommend(&wines, preferences);
            assert!(result.wine_ids.len() <= 6);
            assert!(result.wine_ids.len() <= wines.len());
        }
    }
}

#[test]
fn test_fallback_iff_nothing_scores_positively() {
    let wines = vec![
        create_wine("A", "белое", None),
        create_wine("B", "белое", Some(2.0)),
    ];
    let recommender = Recommender::with_default_weights();
    let profile = PreferenceProfile::from_preferences(&red_preference());

    let any_positive = wines
        .iter()
        .any(|wine| calculate_wine_score(wine, &profile, recommender.weights()).0 > 0.0);
    let result = recommender.recommend(&wines, &red_preference());

    assert!(!any_positive);
    assert!(result.fallback);
    assert_eq!(result.wine_ids, vec!["B", "A"]);
}

#[test]
fn test_fallback_keeps_catalog_order_for_equal_ratings() {
    let wines = vec![
        create_wine("A", "белое", None),
        create_wine("B", "белое", Some(4.0)),
        create_wine("C", "белое", Some(0.0)),
        create_wine("D", "белое", Some(4.0)),
        create_wine("E", "белое", None),
    ];

    let result = recommend(&wines, &red_preference());

    assert!(result.fallback);
    assert_eq!(result.wine_ids, vec!["B", "D", "A", "C", "E"]);
}

#[test]
fn test_no_opinion_answers_match_empty_preferences() {
    let wines = vec![
        create_wine("A", "красное", Some(4.0)),
        create_wine("U", "белое", None),
    ];

    for dish in ["Другое", "Просто пью"] {
        let indifferent = UserPreferences {
            wine_color: Some("Не важно".to_string()),
            dish: Some(dish.to_string()),
            sweetness: Some("Не важно".to_string()),
            aromas: vec!["Не важно".to_string()],
            body: Some("Не важно".to_string()),
        };

        let result = recommend(&wines, &indifferent);

        assert_eq!(result, recommend(&wines, &UserPreferences::default()));
        assert!(result.fallback);
        assert_eq!(result.wine_ids, vec!["A", "U"]);
    }
}

#[test]
fn test_color_stem_inside_a_word_does_not_match() {
    let wines = vec![create_wine("I", "Изабелла красное", Some(4.0))];
    let preferences = UserPreferences {
        wine_color: Some("Белое".to_string()),
        ..Default::default()
    };

    let result = recommend(&wines, &preferences);

    assert!(result.fallback);
    assert_eq!(result.wine_ids, vec!["I"]);
    assert_eq!(result.wines[0].score, 0.0);
    assert!(result.wines[0].matched_criteria.is_empty());
}

#[test]
fn test_matched_criteria_only_hold_positive_contributions() {
    let mut wine = create_wine("W", "белое", Some(4.0));
    wine.characteristics.body = Some("лёгкое".to_string());
    let preferences = UserPreferences {
        wine_color: Some("Красное".to_string()),
        dish: Some("Рыба".to_string()),
        body: Some("Полнотелое".to_string()),
        ..Default::default()
    };

    let (_, matched) = calculate_wine_score(
        &wine,
        &PreferenceProfile::from_preferences(&preferences),
        &ScoringWeights::default(),
    );

    assert_eq!(matched, vec![Criterion::Dish]);
}

#[test]
fn test_recommendation_is_idempotent() {
    let wines: Vec<Wine> = (0..12)
        .map(|i| create_wine(&i.to_string(), "красное", Some((i % 4) as f64)))
        .collect();
    let preferences = red_preference();

    let first = recommend(&wines, &preferences);
    let second = recommend(&wines, &preferences);

    assert_eq!(first, second);
}

#[test]
fn test_consultation_feeds_recommender() {
    let mut consultation = Consultation::new();
    for answer in ["Красное", "Мясо", "Не важно", "Не важно", "Не важно"] {
        consultation.answer(Some(answer.to_string())).unwrap();
    }

    let preferences = consultation.snapshot().unwrap();
    let wines = vec![
        create_wine("A", "красное", Some(4.0)),
        create_wine("B", "белое", Some(5.0)),
    ];

    let result = recommend(&wines, &preferences);
    assert_eq!(result.wine_ids, vec!["A"]);
    assert_eq!(result.wines[0].score, 5.0 + 4.0 + 2.0);
    assert_eq!(result.wines[0].matched_criteria, vec![Criterion::Color, Criterion::Dish]);
}

#[test]
fn test_consultation_store_roundtrip() {
    tokio_test::block_on(async {
        let store = ConsultationStore::new(10, 60);
        let (id, _) = store.start().await;

        store.answer(id, Some("Игристое".to_string())).await.unwrap();
        let consultation = store.get(id).await.unwrap();

        assert_eq!(consultation.preferences().wine_color.as_deref(), Some("Игристое"));
        assert!(store.stats().active_sessions <= 1);
    });
}
