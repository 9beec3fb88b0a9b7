//! Diet recommendation module
//!
//! Static food tables, cycle arithmetic and the recommendation engine.

pub mod catalog;
pub mod cycle;
pub mod engine;

pub use catalog::{
    base_foods, phase_foods, ALLERGY_OPTIONS, CONSTANT_FOODS, DISLIKE_OPTIONS,
};
pub use cycle::{cycle_day, parse_date, today, MAX_CYCLE_LENGTH};
pub use engine::{recommend, Recommendation, RecommendationEngine, SUMMARY_PREFIX};
