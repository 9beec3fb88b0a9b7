//! Food rule model
//!
//! One row of a rule table: three exact-match symptom thresholds and the food
//! they unlock.

use serde::{Deserialize, Serialize};

use super::SymptomProfile;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodRule {
    pub pain_threshold: i32,
    pub hunger_threshold: i32,
    pub exhaustion_threshold: i32,
    pub food: String,
}

impl FoodRule {
    pub fn new(pain: i32, hunger: i32, exhaustion: i32, food: impl Into<String>) -> Self {
        Self {
            pain_threshold: pain,
            hunger_threshold: hunger,
            exhaustion_threshold: exhaustion,
            food: food.into(),
        }
    }

    /// Whether this rule fires for the given symptoms.
    ///
    /// Each symptom is checked on its own; any single exact, non-zero match is
    /// enough.
    pub fn matches(&self, symptoms: &SymptomProfile) -> bool {
        let hit = |level: i32, threshold: i32| level != 0 && level == threshold;

        hit(symptoms.pain, self.pain_threshold)
            || hit(symptoms.hunger, self.hunger_threshold)
            || hit(symptoms.exhaustion, self.exhaustion_threshold)
    }
}
