use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::UserPreferences;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConsultationError {
    #[error("Consultation already finished")]
    AlreadyFinished,
}

/// One question of the sommelier consultation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    WineColor,
    Dish,
    Sweetness,
    Aromas,
    Body,
}

impl Step {
    /// Questions in the order they are asked
    pub const ALL: [Step; 5] = [
        Step::WineColor,
        Step::Dish,
        Step::Sweetness,
        Step::Aromas,
        Step::Body,
    ];

    pub fn prompt(self) -> &'static str {
        match self {
            Step::WineColor => "Какое вино вы предпочитаете?",
            Step::Dish => "С каким блюдом будете пить вино?",
            Step::Sweetness => "Какую сладость вы предпочитаете?",
            Step::Aromas => "Какие ароматы вам нравятся?",
            Step::Body => "Какое тело вина вам ближе?",
        }
    }

    pub fn options(self) -> &'static [&'static str] {
        match self {
            Step::WineColor => &["Красное", "Белое", "Розовое", "Игристое", "Оранжевое", "Не важно"],
            Step::Dish => &["Мясо", "Рыба / морепродукты", "Сыр", "Десерт", "Просто пью", "Другое"],
            Step::Sweetness => &["Сухое", "Полусухое", "Полусладкое", "Сладкое", "Не важно"],
            Step::Aromas => &[
                "Фруктовый", "Ягодный", "Цитрусовый", "Цветочный", "Пряный", "Землистый", "Дубовый",
                "Травяной", "Не важно",
            ],
            Step::Body => &["Лёгкое", "Среднее", "Полнотелое", "Не важно"],
        }
    }
}

/// Question presented to the guest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub step: Step,
    /// Zero-based position in the consultation
    pub index: usize,
    pub total: usize,
    pub prompt: String,
    pub options: Vec<String>,
}

impl Question {
    fn for_step(index: usize) -> Option<Self> {
        Step::ALL.get(index).map(|step| Self {
            step: *step,
            index,
            total: Step::ALL.len(),
            prompt: step.prompt().to_string(),
            options: step.options().iter().map(|option| option.to_string()).collect(),
        })
    }
}

/// Linear question/answer flow that assembles a preference snapshot
///
/// Each step records one field or is skipped; the flow finishes after the
/// last step and then refuses further answers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Consultation {
    position: usize,
    preferences: UserPreferences,
}

impl Consultation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_question(&self) -> Option<Question> {
        Question::for_step(self.position)
    }

    pub fn is_finished(&self) -> bool {
        self.position >= Step::ALL.len()
    }

    pub fn preferences(&self) -> &UserPreferences {
        &self.preferences
    }

    /// Record the answer to the current question; `None` skips it
    ///
    /// Returns the next question, or `None` when the consultation is complete.
    pub fn answer(&mut self, answer: Option<String>) -> Result<Option<Question>, ConsultationError> {
        let step = *Step::ALL
            .get(self.position)
            .ok_or(ConsultationError::AlreadyFinished)?;

        let answer = answer
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty());

        if let Some(text) = answer {
            match step {
                Step::WineColor => self.preferences.wine_color = Some(text),
                Step::Dish => self.preferences.dish = Some(text),
                Step::Sweetness => self.preferences.sweetness = Some(text),
                Step::Aromas => self.preferences.aromas = vec![text],
                Step::Body => self.preferences.body = Some(text),
            }
        }

        self.position += 1;
        Ok(self.current_question())
    }

    /// Preference snapshot once every step was answered or skipped
    pub fn snapshot(&self) -> Option<UserPreferences> {
        self.is_finished().then(|| self.preferences.clone())
    }
}
