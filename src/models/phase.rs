//! Cycle phase model
//!
//! Maps a 1-based cycle day onto one of four phases.

use serde::{Deserialize, Serialize};

/// Phase of the cycle, derived from the cycle day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CyclePhase {
    Menstrual,
    Follicular,
    Ovulation,
    Luteal,
}

impl CyclePhase {
    pub const ALL: [CyclePhase; 4] = [
        CyclePhase::Menstrual,
        CyclePhase::Follicular,
        CyclePhase::Ovulation,
        CyclePhase::Luteal,
    ];

    /// Classify a cycle day.
    ///
    /// Days 1-5 are menstrual, 6-14 follicular, 15-17 ovulation. Every other
    /// integer, including zero, negatives and days past a typical cycle,
    /// falls through to luteal.
    pub fn classify(day: i32) -> Self {
        match day {
            1..=5 => CyclePhase::Menstrual,
            6..=14 => CyclePhase::Follicular,
            15..=17 => CyclePhase::Ovulation,
            _ => CyclePhase::Luteal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CyclePhase::Menstrual => "menstrual",
            CyclePhase::Follicular => "follicular",
            CyclePhase::Ovulation => "ovulation",
            CyclePhase::Luteal => "luteal",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "menstrual" => Some(CyclePhase::Menstrual),
            "follicular" => Some(CyclePhase::Follicular),
            "ovulation" => Some(CyclePhase::Ovulation),
            "luteal" => Some(CyclePhase::Luteal),
            _ => None,
        }
    }

    /// Human-readable name for display
    pub fn display_name(&self) -> &'static str {
        match self {
            CyclePhase::Menstrual => "Menstrual Phase",
            CyclePhase::Follicular => "Follicular Phase",
            CyclePhase::Ovulation => "Ovulation Phase",
            CyclePhase::Luteal => "Luteal Phase",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(CyclePhase::classify(1), CyclePhase::Menstrual);
        assert_eq!(CyclePhase::classify(5), CyclePhase::Menstrual);
        assert_eq!(CyclePhase::classify(6), CyclePhase::Follicular);
        assert_eq!(CyclePhase::classify(14), CyclePhase::Follicular);
        assert_eq!(CyclePhase::classify(15), CyclePhase::Ovulation);
        assert_eq!(CyclePhase::classify(17), CyclePhase::Ovulation);
        assert_eq!(CyclePhase::classify(18), CyclePhase::Luteal);
        assert_eq!(CyclePhase::classify(28), CyclePhase::Luteal);
    }

    #[test]
    fn test_classify_out_of_range_falls_back_to_luteal() {
        assert_eq!(CyclePhase::classify(0), CyclePhase::Luteal);
        assert_eq!(CyclePhase::classify(-3), CyclePhase::Luteal);
        assert_eq!(CyclePhase::classify(40), CyclePhase::Luteal);
        assert_eq!(CyclePhase::classify(i32::MIN), CyclePhase::Luteal);
        assert_eq!(CyclePhase::classify(i32::MAX), CyclePhase::Luteal);
    }

    #[test]
    fn test_classify_is_total() {
        for day in -50..=100 {
            assert!(CyclePhase::ALL.contains(&CyclePhase::classify(day)));
        }
    }

    #[test]
    fn test_phase_names_round_trip() {
        for phase in CyclePhase::ALL {
            assert_eq!(CyclePhase::from_str(phase.as_str()), Some(phase));
        }
        assert_eq!(CyclePhase::from_str(" Luteal "), Some(CyclePhase::Luteal));
        assert_eq!(CyclePhase::from_str("spring"), None);
    }
}
