//! Diet request model
//!
//! Validates raw caller input into the typed request the engine consumes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::symptoms::MAX_INTENSITY;
use super::{DietaryPreference, ExclusionSet, SymptomProfile};

/// Caller input rejected before the engine runs.
///
/// Every variant names the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("{field} must be one of: vegetarian, non-vegetarian (got '{value}')")]
    UnknownPreference { field: &'static str, value: String },

    #[error("{field} must be one of: menstrual, follicular, ovulation, luteal (got '{value}')")]
    UnknownPhase { field: &'static str, value: String },

    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("{field} must be an integer (got '{value}')")]
    NotAnInteger { field: &'static str, value: String },

    #[error("{field} must be a date in YYYY-MM-DD format (got '{value}')")]
    InvalidDate { field: &'static str, value: String },

    #[error("{field} cannot be in the future ({value})")]
    FutureDate { field: &'static str, value: String },
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Missing { field }
            | ValidationError::UnknownPreference { field, .. }
            | ValidationError::UnknownPhase { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::NotAnInteger { field, .. }
            | ValidationError::InvalidDate { field, .. }
            | ValidationError::FutureDate { field, .. } => *field,
        }
    }
}

/// Unvalidated input as collected by a front end
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawDietInput {
    pub cycle_day: i64,
    pub preference: String,
    pub pain: i64,
    pub hunger: i64,
    pub exhaustion: i64,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub dislikes: Vec<String>,
}

/// Validated input to one recommendation call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietRequest {
    pub cycle_day: i32,
    pub preference: DietaryPreference,
    pub symptoms: SymptomProfile,
    pub exclusions: ExclusionSet,
}

impl DietRequest {
    pub fn new(
        cycle_day: i32,
        preference: DietaryPreference,
        symptoms: SymptomProfile,
        exclusions: ExclusionSet,
    ) -> Self {
        Self {
            cycle_day,
            preference,
            symptoms,
            exclusions,
        }
    }

    pub fn from_raw(raw: &RawDietInput) -> Result<Self, ValidationError> {
        let cycle_day = validate_cycle_day(raw.cycle_day)?;
        let preference = parse_preference(&raw.preference)?;
        let symptoms = SymptomProfile::new(
            validate_intensity("pain", raw.pain)?,
            validate_intensity("hunger", raw.hunger)?,
            validate_intensity("exhaustion", raw.exhaustion)?,
        );
        let exclusions =
            ExclusionSet::from_lists(clean_names(&raw.allergies), clean_names(&raw.dislikes));

        Ok(Self::new(cycle_day, preference, symptoms, exclusions))
    }
}

pub fn parse_preference(value: &str) -> Result<DietaryPreference, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Missing {
            field: "preference",
        });
    }
    DietaryPreference::from_str(value).ok_or_else(|| ValidationError::UnknownPreference {
        field: "preference",
        value: value.to_string(),
    })
}

pub fn validate_cycle_day(value: i64) -> Result<i32, ValidationError> {
    if value < 1 || value > i32::MAX as i64 {
        return Err(ValidationError::OutOfRange {
            field: "cycle_day",
            value,
            min: 1,
            max: i32::MAX as i64,
        });
    }
    Ok(value as i32)
}

/// Symptom intensities are 0 (not reported) through 10
pub fn validate_intensity(field: &'static str, value: i64) -> Result<i32, ValidationError> {
    if !(0..=MAX_INTENSITY as i64).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field,
            value,
            min: 0,
            max: MAX_INTENSITY as i64,
        });
    }
    Ok(value as i32)
}

/// Parse a text field holding an integer, as typed into a form or on the command line
pub fn parse_integer(field: &'static str, value: &str) -> Result<i64, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Missing { field });
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| ValidationError::NotAnInteger {
            field,
            value: value.to_string(),
        })
}

fn clean_names(names: &[String]) -> Vec<String> {
    names
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> RawDietInput {
        RawDietInput {
            cycle_day: 3,
            preference: "Vegetarian".to_string(),
            pain: 4,
            hunger: 0,
            exhaustion: 10,
            allergies: vec![" nuts ".to_string(), "".to_string()],
            dislikes: vec!["spinach".to_string()],
        }
    }

    #[test]
    fn test_from_raw_valid() {
        let request = DietRequest::from_raw(&raw()).unwrap();
        assert_eq!(request.cycle_day, 3);
        assert_eq!(request.preference, DietaryPreference::Vegetarian);
        assert_eq!(request.symptoms, SymptomProfile::new(4, 0, 10));
        assert_eq!(request.exclusions.len(), 2);
        assert!(request.exclusions.contains("nuts"));
        assert!(request.exclusions.contains("spinach"));
    }

    #[test]
    fn test_symptom_out_of_range_names_field() {
        let mut input = raw();
        input.hunger = 11;
        let err = DietRequest::from_raw(&input).unwrap_err();
        assert_eq!(err.field(), "hunger");
        assert_eq!(err.to_string(), "hunger must be between 0 and 10 (got 11)");

        input.hunger = 0;
        input.exhaustion = -1;
        assert_eq!(DietRequest::from_raw(&input).unwrap_err().field(), "exhaustion");
    }

    #[test]
    fn test_empty_preference_is_missing() {
        let mut input = raw();
        input.preference = "  ".to_string();
        let err = DietRequest::from_raw(&input).unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "preference" });
        assert_eq!(err.to_string(), "preference is required");
    }

    #[test]
    fn test_unknown_preference() {
        let mut input = raw();
        input.preference = "carnivore".to_string();
        let err = DietRequest::from_raw(&input).unwrap_err();
        assert_eq!(err.field(), "preference");
        assert!(err.to_string().contains("carnivore"));
    }

    #[test]
    fn test_cycle_day_must_be_positive() {
        let mut input = raw();
        input.cycle_day = 0;
        assert_eq!(DietRequest::from_raw(&input).unwrap_err().field(), "cycle_day");
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("pain", " 7 "), Ok(7));
        assert_eq!(
            parse_integer("pain", ""),
            Err(ValidationError::Missing { field: "pain" })
        );
        let err = parse_integer("pain", "seven").unwrap_err();
        assert_eq!(err.to_string(), "pain must be an integer (got 'seven')");
    }
}
