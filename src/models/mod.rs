//! Data models
//!
//! Typed inputs and rule rows for the recommendation engine.

mod exclusions;
mod food_rule;
mod phase;
mod preference;
mod request;
mod symptoms;

pub use exclusions::ExclusionSet;
pub use food_rule::FoodRule;
pub use phase::CyclePhase;
pub use preference::DietaryPreference;
pub use request::{
    parse_integer, parse_preference, validate_cycle_day, validate_intensity, DietRequest,
    RawDietInput, ValidationError,
};
pub use symptoms::{SymptomProfile, MAX_INTENSITY};
