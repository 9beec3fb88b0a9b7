//! Symptom intensity model

use serde::{Deserialize, Serialize};

/// Highest intensity accepted from callers
pub const MAX_INTENSITY: i32 = 10;

/// Self-reported symptom intensities.
///
/// Zero means "not reported" and never matches a rule threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomProfile {
    pub pain: i32,
    pub hunger: i32,
    pub exhaustion: i32,
}

impl SymptomProfile {
    pub fn new(pain: i32, hunger: i32, exhaustion: i32) -> Self {
        Self {
            pain,
            hunger,
            exhaustion,
        }
    }
}
