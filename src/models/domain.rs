use serde::{Deserialize, Deserializer, Serialize};

/// Wine catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wine {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Colour category as written in the catalog ("красное", "white", ...)
    #[serde(rename = "type")]
    pub wine_type: String,
    #[serde(default)]
    pub characteristics: Characteristics,
    #[serde(rename = "aromaTags", default)]
    pub aroma_tags: Vec<String>,
    #[serde(rename = "flavorTags", default)]
    pub flavor_tags: Vec<String>,
    #[serde(rename = "averageRating", default)]
    pub average_rating: Option<f64>,
}

impl Wine {
    /// Helper to get the average rating, treating missing or non-finite values as 0
    pub fn rating(&self) -> f64 {
        match self.average_rating {
            Some(rating) if rating.is_finite() => rating,
            _ => 0.0,
        }
    }
}

/// Descriptive wine characteristics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Characteristics {
    #[serde(default)]
    pub sweetness: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

/// Guest preferences as collected by the consultation flow
///
/// Every field is optional; absence means "no opinion".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    #[serde(rename = "wineColor", default, skip_serializing_if = "Option::is_none")]
    pub wine_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dish: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sweetness: Option<String>,
    #[serde(
        default,
        deserialize_with = "one_or_many",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub aromas: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// Accept `"aromas": "fruit"` as well as `"aromas": ["fruit", "oak"]`
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(value)) => vec![value],
        Some(OneOrMany::Many(values)) => values,
    })
}

/// Preference dimension that contributed positively to a wine's score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criterion {
    Color,
    Dish,
    Sweetness,
    Aroma,
    Body,
}

impl Criterion {
    /// Guest-facing label used in the advisory summary
    pub fn label(self) -> &'static str {
        match self {
            Criterion::Color => "цвет",
            Criterion::Dish => "блюдо",
            Criterion::Sweetness => "сладость",
            Criterion::Aroma => "аромат",
            Criterion::Body => "тело",
        }
    }
}

/// Wine with its recommendation score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredWine {
    pub wine: Wine,
    pub score: f64,
    #[serde(rename = "matchedCriteria")]
    pub matched_criteria: Vec<Criterion>,
}

/// Outcome of a single recommendation pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "wineIds")]
    pub wine_ids: Vec<String>,
    pub wines: Vec<ScoredWine>,
    pub summary: String,
    /// True when nothing scored positively and popular wines were returned instead
    pub fallback: bool,
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub color_match: f64,
    pub color_mismatch: f64,
    pub dish_strong: f64,
    pub dish_weak: f64,
    pub sweetness: f64,
    pub aroma: f64,
    pub body: f64,
    pub rating_factor: f64,
    pub max_results: usize,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            color_match: 5.0,
            color_mismatch: -10.0,
            dish_strong: 4.0,
            dish_weak: 2.0,
            sweetness: 3.0,
            aroma: 3.0,
            body: 3.0,
            rating_factor: 0.5,
            max_results: 6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wine_deserializes_camel_case() {
        let json = r#"{
            "id": "w1",
            "type": "красное",
            "characteristics": { "sweetness": "сухое", "body": "полнотелое" },
            "aromaTags": ["вишня"],
            "flavorTags": ["дуб"],
            "averageRating": 4.5
        }"#;

        let wine: Wine = serde_json::from_str(json).unwrap();
        assert_eq!(wine.wine_type, "красное");
        assert_eq!(wine.characteristics.body.as_deref(), Some("полнотелое"));
        assert_eq!(wine.rating(), 4.5);
    }

    #[test]
    fn test_missing_rating_is_zero() {
        let wine: Wine = serde_json::from_str(r#"{"id": "w2", "type": "white"}"#).unwrap();
        assert_eq!(wine.rating(), 0.0);
        assert!(wine.aroma_tags.is_empty());
    }

    #[test]
    fn test_aromas_accepts_single_string() {
        let prefs: UserPreferences = serde_json::from_str(r#"{"aromas": "Фруктовый"}"#).unwrap();
        assert_eq!(prefs.aromas, vec!["Фруктовый"]);

        let prefs: UserPreferences =
            serde_json::from_str(r#"{"aromas": ["fruit", "oak"]}"#).unwrap();
        assert_eq!(prefs.aromas.len(), 2);

        let prefs: UserPreferences = serde_json::from_str(r#"{"aromas": null}"#).unwrap();
        assert!(prefs.aromas.is_empty());
    }

    #[test]
    fn test_criterion_serializes_lowercase() {
        let json = serde_json::to_string(&Criterion::Dish).unwrap();
        assert_eq!(json, "\"dish\"");
        assert_eq!(Criterion::Dish.label(), "блюдо");
    }
}
