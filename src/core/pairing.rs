use crate::models::ScoringWeights;
use crate::core::preferences::WineTraits;
use crate::core::vocabulary::{Dish, WineColor};

/// Wine attribute a pairing rule looks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WineTrait {
    Color(WineColor),
    Sweet,
}

impl WineTrait {
    #[inline]
    pub fn holds_for(self, traits: &WineTraits) -> bool {
        match self {
            WineTrait::Color(color) => traits.has_color(color),
            WineTrait::Sweet => traits.is_sweet(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairingStrength {
    Strong,
    Weak,
}

impl PairingStrength {
    pub fn points(self, weights: &ScoringWeights) -> f64 {
        match self {
            PairingStrength::Strong => weights.dish_strong,
            PairingStrength::Weak => weights.dish_weak,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairingRule {
    pub dish: Dish,
    pub requires: WineTrait,
    pub strength: PairingStrength,
}

/// Dish pairing ruleset
pub const PAIRING_RULES: &[PairingRule] = &[
    PairingRule { dish: Dish::Meat, requires: WineTrait::Color(WineColor::Red), strength: PairingStrength::Strong },
    PairingRule { dish: Dish::Fish, requires: WineTrait::Color(WineColor::White), strength: PairingStrength::Strong },
    PairingRule { dish: Dish::Dessert, requires: WineTrait::Sweet, strength: PairingStrength::Strong },
    PairingRule { dish: Dish::Cheese, requires: WineTrait::Color(WineColor::White), strength: PairingStrength::Weak },
    PairingRule { dish: Dish::Cheese, requires: WineTrait::Color(WineColor::Red), strength: PairingStrength::Weak },
];

/// Points a wine earns for the chosen dish: the strongest matching rule wins,
/// `None` when no rule matches
pub fn pairing_points(
    dish: Dish,
    traits: &WineTraits,
    weights: &ScoringWeights,
) -> Option<f64> {
    pairing_points_with(PAIRING_RULES, dish, traits, weights)
}

/// Same as [`pairing_points`] over a caller-supplied ruleset
pub fn pairing_points_with(
    rules: &[PairingRule],
    dish: Dish,
    traits: &WineTraits,
    weights: &ScoringWeights,
) -> Option<f64> {
    if !dish.pairs() {
        return None;
    }

    rules
        .iter()
        .filter(|rule| rule.dish == dish && rule.requires.holds_for(traits))
        .map(|rule| rule.strength.points(weights))
        .fold(None, |best, points| match best {
            Some(current) if current >= points => Some(current),
            _ => Some(points),
        })
}
