use crate::models::{Criterion, ScoringWeights, Wine};
use crate::core::{
    pairing::pairing_points,
    preferences::{PreferenceProfile, WineTraits},
};

/// Calculate an additive recommendation score for a wine
///
/// Scoring formula (default weights):
/// score = (
///     color      +5 on match, -10 on mismatch
///     dish       +4 strong pairing, +2 weak pairing
///     sweetness  +3
///     aroma      +3 if any aroma or flavor tag matches
///     body       +3
///     rating     0.5 * averageRating
/// )
///
/// Returns the raw score and the criteria that contributed positively, in
/// evaluation order. The score is not clamped.
pub fn calculate_wine_score(
    wine: &Wine,
    profile: &PreferenceProfile,
    weights: &ScoringWeights,
) -> (f64, Vec<Criterion>) {
    let traits = WineTraits::of(wine);
    let mut score = 0.0;
    let mut matched = Vec::new();

    if let Some(color) = profile.color {
        if traits.has_color(color) {
            score += weights.color_match;
            matched.push(Criterion::Color);
        } else {
            score += weights.color_mismatch;
        }
    }

    if let Some(dish) = profile.dish {
        if let Some(points) = pairing_points(dish, &traits, weights) {
            score += points;
            matched.push(Criterion::Dish);
        }
    }

    if profile.sweetness.is_some() && traits.sweetness == profile.sweetness {
        score += weights.sweetness;
        matched.push(Criterion::Sweetness);
    }

    if profile.aromas.iter().any(|aroma| traits.aromas.contains(aroma)) {
        score += weights.aroma;
        matched.push(Criterion::Aroma);
    }

    if profile.body.is_some() && traits.body == profile.body {
        score += weights.body;
        matched.push(Criterion::Body);
    }

    score += rating_bonus(wine, weights);

    (score, matched)
}

#[inline]
fn rating_bonus(wine: &Wine, weights: &ScoringWeights) -> f64 {
    wine.rating() * weights.rating_factor
}
