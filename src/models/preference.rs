//! Dietary preference model

use serde::{Deserialize, Serialize};

/// Which food table and rule table to consult
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietaryPreference {
    Vegetarian,
    NonVegetarian,
}

impl DietaryPreference {
    pub const ALL: [DietaryPreference; 2] =
        [DietaryPreference::Vegetarian, DietaryPreference::NonVegetarian];

    pub fn as_str(&self) -> &'static str {
        match self {
            DietaryPreference::Vegetarian => "vegetarian",
            DietaryPreference::NonVegetarian => "non_vegetarian",
        }
    }

    /// Parse a caller-supplied token, ignoring case and surrounding whitespace.
    ///
    /// Returns `None` for anything unrecognised, including the empty string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "vegetarian" | "veg" => Some(DietaryPreference::Vegetarian),
            "non-vegetarian" | "non_vegetarian" | "nonvegetarian" | "non vegetarian"
            | "non-veg" => Some(DietaryPreference::NonVegetarian),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DietaryPreference::Vegetarian => "Vegetarian",
            DietaryPreference::NonVegetarian => "Non-Vegetarian",
        }
    }

    /// File name of the rule table for this preference
    pub fn rule_table_file(&self) -> &'static str {
        match self {
            DietaryPreference::Vegetarian => "vegetarian_foods.csv",
            DietaryPreference::NonVegetarian => "non_vegetarian_foods.csv",
        }
    }
}
