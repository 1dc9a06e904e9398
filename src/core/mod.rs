// Core algorithm exports
pub mod consultation;
pub mod pairing;
pub mod preferences;
pub mod recommender;
pub mod scoring;
pub mod vocabulary;

pub use consultation::{Consultation, ConsultationError, Question, Step};
pub use pairing::{pairing_points, PairingRule, PairingStrength, WineTrait, PAIRING_RULES};
pub use preferences::{PreferenceProfile, WineTraits};
pub use recommender::{recommend, Recommender};
pub use scoring::calculate_wine_score;
pub use vocabulary::{Aroma, Body, Dish, Sweetness, WineColor};
