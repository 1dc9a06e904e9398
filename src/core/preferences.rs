use crate::models::{UserPreferences, Wine};
use crate::core::vocabulary::{
    classify_all, classify_first, is_indifferent, Aroma, Body, Dish, Sweetness, Vocabulary,
    WineColor,
};

/// Typed view of a guest's preference snapshot
///
/// Sentinel answers ("Не важно"), dishes that take no part in pairing
/// ("Просто пью", "Другое") and text that matches no known variant all
/// become "no opinion".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreferenceProfile {
    pub color: Option<WineColor>,
    pub dish: Option<Dish>,
    pub sweetness: Option<Sweetness>,
    pub aromas: Vec<Aroma>,
    pub body: Option<Body>,
}

impl PreferenceProfile {
    pub fn from_preferences(preferences: &UserPreferences) -> Self {
        let mut aromas: Vec<Aroma> = Vec::new();
        for text in &preferences.aromas {
            if let Some(aroma) = parse_answer::<Aroma>(Some(text)) {
                if !aromas.contains(&aroma) {
                    aromas.push(aroma);
                }
            }
        }

        Self {
            color: parse_answer(preferences.wine_color.as_deref()),
            dish: parse_answer::<Dish>(preferences.dish.as_deref()).filter(|dish| dish.pairs()),
            sweetness: parse_answer(preferences.sweetness.as_deref()),
            aromas,
            body: parse_answer(preferences.body.as_deref()),
        }
    }

    /// True when the guest expressed no usable opinion at all
    pub fn is_empty(&self) -> bool {
        self.color.is_none()
            && self.dish.is_none()
            && self.sweetness.is_none()
            && self.aromas.is_empty()
            && self.body.is_none()
    }
}

fn parse_answer<T: Vocabulary>(text: Option<&str>) -> Option<T> {
    match text {
        Some(text) if !is_indifferent(text) => classify_first(text),
        _ => None,
    }
}

/// Classified attributes of a catalog wine
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WineTraits {
    pub colors: Vec<WineColor>,
    pub sweetness: Option<Sweetness>,
    pub body: Option<Body>,
    pub aromas: Vec<Aroma>,
}

impl WineTraits {
    pub fn of(wine: &Wine) -> Self {
        let mut aromas: Vec<Aroma> = Vec::new();
        for tag in wine.aroma_tags.iter().chain(wine.flavor_tags.iter()) {
            for aroma in classify_all::<Aroma>(tag) {
                if !aromas.contains(&aroma) {
                    aromas.push(aroma);
                }
            }
        }

        Self {
            colors: classify_all(&wine.wine_type),
            sweetness: wine.characteristics.sweetness.as_deref().and_then(classify_first),
            body: wine.characteristics.body.as_deref().and_then(classify_first),
            aromas,
        }
    }

    pub fn has_color(&self, color: WineColor) -> bool {
        self.colors.contains(&color)
    }

    pub fn is_sweet(&self) -> bool {
        self.sweetness.map(Sweetness::is_sweet).unwrap_or(false)
    }
}
