//! Recommendation engine
//!
//! Classifies the phase, starts from the catalog foods, appends foods from
//! matching rule rows and strips anything the caller excluded.

use serde::Serialize;

use super::catalog;
use crate::data::{RuleTable, RuleTableProvider};
use crate::models::{
    CyclePhase, DietRequest, DietaryPreference, ExclusionSet, FoodRule, SymptomProfile,
};

/// Prefix of the one-line summary shown to users
pub const SUMMARY_PREFIX: &str = "Recommended Foods: ";

/// Outcome of one recommendation call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub phase: CyclePhase,
    /// Insertion order: constant foods, phase foods, rule foods
    pub foods: Vec<String>,
    /// Rule rows that fired, before exclusions were applied
    pub rules_matched: usize,
    /// False when the rule table could not be loaded
    pub rule_table_available: bool,
}

impl Recommendation {
    /// "Recommended Foods: water, fruits, ..."
    pub fn summary(&self) -> String {
        format!("{}{}", SUMMARY_PREFIX, self.foods.join(", "))
    }
}

/// Pure recommendation over an already-loaded rule set.
///
/// Duplicates across sources are kept; exclusions remove every occurrence.
pub fn recommend(
    cycle_day: i32,
    preference: DietaryPreference,
    symptoms: &SymptomProfile,
    rules: &[FoodRule],
    exclusions: &ExclusionSet,
) -> Vec<String> {
    build_foods(cycle_day, preference, symptoms, rules, exclusions).0
}

/// Foods plus the number of rules that fired
fn build_foods(
    cycle_day: i32,
    preference: DietaryPreference,
    symptoms: &SymptomProfile,
    rules: &[FoodRule],
    exclusions: &ExclusionSet,
) -> (Vec<String>, usize) {
    let phase = CyclePhase::classify(cycle_day);
    let mut foods = catalog::base_foods(preference, phase);
    let base_len = foods.len();

    foods.extend(
        rules
            .iter()
            .filter(|rule| rule.matches(symptoms))
            .map(|rule| rule.food.clone()),
    );
    let matched = foods.len() - base_len;

    exclusions.filter(&mut foods);
    (foods, matched)
}

/// Engine bound to a rule table provider
#[derive(Debug, Clone)]
pub struct RecommendationEngine<P> {
    provider: P,
}

impl<P: RuleTableProvider> RecommendationEngine<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Load the rule table for a preference, degrading to an empty table
    pub fn rule_table(&self, preference: DietaryPreference) -> Option<RuleTable> {
        match self.provider.load(preference) {
            Ok(table) => Some(table),
            Err(e) => {
                tracing::warn!(
                    "Rule table unavailable for {} ({}): {}. Continuing without rule foods.",
                    preference.as_str(),
                    self.provider.describe(preference),
                    e
                );
                None
            }
        }
    }

    pub fn suggest_diet(&self, request: &DietRequest) -> Recommendation {
        let phase = CyclePhase::classify(request.cycle_day);
        let table = self.rule_table(request.preference);
        let rule_table_available = table.is_some();
        let rules = table.map(|t| t.rules).unwrap_or_default();

        let (foods, rules_matched) = build_foods(
            request.cycle_day,
            request.preference,
            &request.symptoms,
            &rules,
            &request.exclusions,
        );

        tracing::info!(
            "Recommended {} foods for day {} ({}, {}), {} rule matches",
            foods.len(),
            request.cycle_day,
            phase.as_str(),
            request.preference.as_str(),
            rules_matched
        );

        Recommendation {
            phase,
            foods,
            rules_matched,
            rule_table_available,
        }
    }
}
