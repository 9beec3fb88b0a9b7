//! Static food catalog
//!
//! Fixed per-phase food lists for each dietary preference, plus the foods
//! recommended in every phase.

use crate::models::{CyclePhase, DietaryPreference};

// ============================================================================
// Always Included
// ============================================================================

/// Recommended regardless of phase or preference
pub const CONSTANT_FOODS: [&str; 4] = ["water", "fruits", "vegetables", "whole grains"];

// ============================================================================
// Vegetarian Table
// ============================================================================

const VEGETARIAN_MENSTRUAL: &[&str] = &["spinach", "lentils", "almonds", "tofu", "warm soups"];
const VEGETARIAN_FOLLICULAR: &[&str] = &["protein-rich foods", "nuts", "yogurt", "avocados"];
const VEGETARIAN_OVULATION: &[&str] = &["leafy greens", "berries", "seeds", "whole grains"];
const VEGETARIAN_LUTEAL: &[&str] = &["bananas", "dark chocolate", "chickpeas"];

// ============================================================================
// Non-Vegetarian Table
// ============================================================================

const NON_VEGETARIAN_MENSTRUAL: &[&str] = &["red meat", "eggs", "chicken", "bone broth"];
const NON_VEGETARIAN_FOLLICULAR: &[&str] = &["lean meats", "fish", "eggs", "dairy"];
const NON_VEGETARIAN_OVULATION: &[&str] = &["salmon", "tuna", "nuts", "lean protein"];
const NON_VEGETARIAN_LUTEAL: &[&str] = &["turkey", "chicken", "whole grains"];

// ============================================================================
// Exclusion Vocabulary
// ============================================================================

/// Common allergies offered to users; any food name may still be excluded
pub const ALLERGY_OPTIONS: [&str; 5] = ["nuts", "dairy", "gluten", "soy", "seafood"];

/// Common dislikes offered to users
pub const DISLIKE_OPTIONS: [&str; 5] = [
    "broccoli",
    "brussels sprouts",
    "eggplant",
    "mushrooms",
    "spinach",
];

/// Phase-specific foods for a preference, without the constant foods
pub fn phase_foods(preference: DietaryPreference, phase: CyclePhase) -> &'static [&'static str] {
    match (preference, phase) {
        (DietaryPreference::Vegetarian, CyclePhase::Menstrual) => VEGETARIAN_MENSTRUAL,
        (DietaryPreference::Vegetarian, CyclePhase::Follicular) => VEGETARIAN_FOLLICULAR,
        (DietaryPreference::Vegetarian, CyclePhase::Ovulation) => VEGETARIAN_OVULATION,
        (DietaryPreference::Vegetarian, CyclePhase::Luteal) => VEGETARIAN_LUTEAL,
        (DietaryPreference::NonVegetarian, CyclePhase::Menstrual) => NON_VEGETARIAN_MENSTRUAL,
        (DietaryPreference::NonVegetarian, CyclePhase::Follicular) => NON_VEGETARIAN_FOLLICULAR,
        (DietaryPreference::NonVegetarian, CyclePhase::Ovulation) => NON_VEGETARIAN_OVULATION,
        (DietaryPreference::NonVegetarian, CyclePhase::Luteal) => NON_VEGETARIAN_LUTEAL,
    }
}

/// Constant foods followed by the phase foods, in table order.
///
/// A name present in both lists (e.g. "whole grains") appears twice.
pub fn base_foods(preference: DietaryPreference, phase: CyclePhase) -> Vec<String> {
    CONSTANT_FOODS
        .iter()
        .chain(phase_foods(preference, phase))
        .map(|food| food.to_string())
        .collect()
}
