//! Recommendation MCP Tools
//!
//! Boundary operations: validate raw tool input, run the engine, shape the
//! response.

use serde::Serialize;

use crate::data::{RowIssue, RuleTableProvider};
use crate::diet::{self, catalog, RecommendationEngine};
use crate::models::{
    parse_preference, validate_cycle_day, CyclePhase, DietRequest, DietaryPreference, FoodRule,
    RawDietInput, ValidationError,
};

/// How the caller identifies the current cycle day
#[derive(Debug, Clone, Default)]
pub struct CycleInput {
    pub cycle_day: Option<i64>,
    pub last_period_start: Option<String>,
    pub cycle_length: Option<i64>,
    /// Defaults to the local date
    pub today: Option<String>,
}

/// Raw input for suggest_diet
#[derive(Debug, Clone, Default)]
pub struct SuggestDietInput {
    pub cycle: CycleInput,
    pub preference: String,
    pub pain: i64,
    pub hunger: i64,
    pub exhaustion: i64,
    pub allergies: Vec<String>,
    pub dislikes: Vec<String>,
}

/// Response for get_cycle_phase
#[derive(Debug, Serialize)]
pub struct CyclePhaseResponse {
    pub cycle_day: i32,
    pub phase: CyclePhase,
    pub phase_name: &'static str,
}

/// Response for suggest_diet
#[derive(Debug, Serialize)]
pub struct SuggestDietResponse {
    pub cycle_day: i32,
    pub phase: CyclePhase,
    pub phase_name: &'static str,
    pub preference: DietaryPreference,
    pub foods: Vec<String>,
    pub summary: String,
    pub rules_matched: usize,
    pub rule_table_available: bool,
    pub excluded: Vec<String>,
}

/// One preference/phase cell of the catalog
#[derive(Debug, Serialize)]
pub struct PhaseFoodsEntry {
    pub preference: DietaryPreference,
    pub phase: CyclePhase,
    pub foods: Vec<&'static str>,
}

/// Response for list_phase_foods
#[derive(Debug, Serialize)]
pub struct ListPhaseFoodsResponse {
    pub constant_foods: Vec<&'static str>,
    pub entries: Vec<PhaseFoodsEntry>,
    pub allergy_options: Vec<&'static str>,
    pub dislike_options: Vec<&'static str>,
}

/// Response for list_food_rules
#[derive(Debug, Serialize)]
pub struct ListFoodRulesResponse {
    pub preference: DietaryPreference,
    pub source: String,
    pub available: bool,
    pub error: Option<String>,
    pub rules: Vec<FoodRule>,
    pub skipped: Vec<RowIssue>,
}

/// Resolve the cycle day from a direct value or from date inputs
pub fn resolve_cycle_day(input: &CycleInput) -> Result<i32, ValidationError> {
    if let Some(day) = input.cycle_day {
        return validate_cycle_day(day);
    }

    let start = input
        .last_period_start
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .ok_or(ValidationError::Missing {
            field: "cycle_day or last_period_start",
        })?;
    let start = diet::parse_date("last_period_start", start)?;

    let length = input.cycle_length.ok_or(ValidationError::Missing {
        field: "cycle_length",
    })?;
    let length = u32::try_from(length).map_err(|_| ValidationError::OutOfRange {
        field: "cycle_length",
        value: length,
        min: 1,
        max: diet::MAX_CYCLE_LENGTH as i64,
    })?;

    let today = match input.today.as_deref() {
        Some(s) => diet::parse_date("today", s)?,
        None => diet::today(),
    };

    diet::cycle_day(start, today, length)
}

pub fn get_cycle_phase(input: &CycleInput) -> Result<CyclePhaseResponse, ValidationError> {
    let cycle_day = resolve_cycle_day(input)?;
    let phase = CyclePhase::classify(cycle_day);
    Ok(CyclePhaseResponse {
        cycle_day,
        phase,
        phase_name: phase.display_name(),
    })
}

/// Validate the raw input into a request the engine accepts
pub fn build_request(input: &SuggestDietInput) -> Result<DietRequest, ValidationError> {
    let cycle_day = resolve_cycle_day(&input.cycle)?;
    DietRequest::from_raw(&RawDietInput {
        cycle_day: cycle_day as i64,
        preference: input.preference.clone(),
        pain: input.pain,
        hunger: input.hunger,
        exhaustion: input.exhaustion,
        allergies: input.allergies.clone(),
        dislikes: input.dislikes.clone(),
    })
}

pub fn suggest_diet<P: RuleTableProvider>(
    engine: &RecommendationEngine<P>,
    input: &SuggestDietInput,
) -> Result<SuggestDietResponse, ValidationError> {
    let request = build_request(input)?;
    let recommendation = engine.suggest_diet(&request);

    Ok(SuggestDietResponse {
        cycle_day: request.cycle_day,
        phase: recommendation.phase,
        phase_name: recommendation.phase.display_name(),
        preference: request.preference,
        summary: recommendation.summary(),
        foods: recommendation.foods,
        rules_matched: recommendation.rules_matched,
        rule_table_available: recommendation.rule_table_available,
        excluded: request.exclusions.iter().map(str::to_string).collect(),
    })
}

pub fn list_phase_foods(
    preference: Option<&str>,
    phase: Option<&str>,
) -> Result<ListPhaseFoodsResponse, ValidationError> {
    let preferences = match preference {
        Some(p) => vec![parse_preference(p)?],
        None => DietaryPreference::ALL.to_vec(),
    };
    let phases = match phase {
        Some(p) => vec![CyclePhase::from_str(p).ok_or_else(|| ValidationError::UnknownPhase {
            field: "phase",
            value: p.to_string(),
        })?],
        None => CyclePhase::ALL.to_vec(),
    };

    let entries = preferences
        .iter()
        .flat_map(|&preference| {
            phases.iter().map(move |&phase| PhaseFoodsEntry {
                preference,
                phase,
                foods: catalog::phase_foods(preference, phase).to_vec(),
            })
        })
        .collect();

    Ok(ListPhaseFoodsResponse {
        constant_foods: catalog::CONSTANT_FOODS.to_vec(),
        entries,
        allergy_options: catalog::ALLERGY_OPTIONS.to_vec(),
        dislike_options: catalog::DISLIKE_OPTIONS.to_vec(),
    })
}

pub fn list_food_rules<P: RuleTableProvider>(
    engine: &RecommendationEngine<P>,
    preference: &str,
) -> Result<ListFoodRulesResponse, ValidationError> {
    let preference = parse_preference(preference)?;
    let provider = engine.provider();
    let source = provider.describe(preference);

    let response = match provider.load(preference) {
        Ok(table) => ListFoodRulesResponse {
            preference,
            source,
            available: true,
            error: None,
            rules: table.rules,
            skipped: table.skipped,
        },
        Err(e) => ListFoodRulesResponse {
            preference,
            source,
            available: false,
            error: Some(e.to_string()),
            rules: Vec::new(),
            skipped: Vec::new(),
        },
    };
    Ok(response)
}
