//! CycleSync MCP Server Implementation
//!
//! Implements the MCP server with all CycleSync tools.

use std::path::PathBuf;
use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::data::CsvRuleTables;
use crate::diet::RecommendationEngine;
use crate::models::ValidationError;
use crate::tools::recommendations::{self, CycleInput, SuggestDietInput};
use crate::tools::status::StatusTracker;

/// CycleSync MCP Service
#[derive(Clone)]
pub struct CycleSyncService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    engine: Arc<RecommendationEngine<CsvRuleTables>>,
    tool_router: ToolRouter<CycleSyncService>,
}

impl CycleSyncService {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(data_dir.clone()))),
            engine: Arc::new(RecommendationEngine::new(CsvRuleTables::new(data_dir))),
            tool_router: Self::tool_router(),
        }
    }
}

fn invalid_params(e: ValidationError) -> McpError {
    McpError::invalid_params(e.to_string(), Some(serde_json::json!({ "field": e.field() })))
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetCyclePhaseParams {
    /// Cycle day (1 = first day of the period). Takes precedence over the date fields.
    pub cycle_day: Option<i64>,
    /// Start date of the last period (ISO format: YYYY-MM-DD)
    pub last_period_start: Option<String>,
    /// Cycle length in days (1-45)
    pub cycle_length: Option<i64>,
    /// Date to evaluate (ISO format: YYYY-MM-DD, defaults to today)
    pub today: Option<String>,
}

impl From<GetCyclePhaseParams> for CycleInput {
    fn from(p: GetCyclePhaseParams) -> Self {
        Self {
            cycle_day: p.cycle_day,
            last_period_start: p.last_period_start,
            cycle_length: p.cycle_length,
            today: p.today,
        }
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SuggestDietParams {
    /// Cycle day (1 = first day of the period). Takes precedence over the date fields.
    pub cycle_day: Option<i64>,
    /// Start date of the last period (ISO format: YYYY-MM-DD)
    pub last_period_start: Option<String>,
    /// Cycle length in days (1-45)
    pub cycle_length: Option<i64>,
    /// Date to evaluate (ISO format: YYYY-MM-DD, defaults to today)
    pub today: Option<String>,
    /// Dietary preference: vegetarian or non-vegetarian
    pub preference: String,
    /// Pain level 0-10 (0 = not reported)
    #[serde(default)]
    pub pain: i64,
    /// Hunger level 0-10 (0 = not reported)
    #[serde(default)]
    pub hunger: i64,
    /// Exhaustion level 0-10 (0 = not reported)
    #[serde(default)]
    pub exhaustion: i64,
    /// Food names the user is allergic to
    #[serde(default)]
    pub allergies: Vec<String>,
    /// Food names the user dislikes
    #[serde(default)]
    pub dislikes: Vec<String>,
}

impl From<SuggestDietParams> for SuggestDietInput {
    fn from(p: SuggestDietParams) -> Self {
        Self {
            cycle: CycleInput {
                cycle_day: p.cycle_day,
                last_period_start: p.last_period_start,
                cycle_length: p.cycle_length,
                today: p.today,
            },
            preference: p.preference,
            pain: p.pain,
            hunger: p.hunger,
            exhaustion: p.exhaustion,
            allergies: p.allergies,
            dislikes: p.dislikes,
        }
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListPhaseFoodsParams {
    /// Filter by preference: vegetarian or non-vegetarian (optional)
    pub preference: Option<String>,
    /// Filter by phase: menstrual, follicular, ovulation, luteal (optional)
    pub phase: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListFoodRulesParams {
    /// Dietary preference: vegetarian or non-vegetarian
    pub preference: String,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl CycleSyncService {
    // --- Status ---

    #[tool(description = "Get the current status of the CycleSync service including build info, rule table files, and process information")]
    async fn cyclesync_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        to_json(&tracker.get_status())
    }

    #[tool(description = "Get step-by-step instructions for diet recommendations. Call this before the first suggest_diet call or when unsure which inputs to collect.")]
    fn diet_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::DIET_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(DIET_INSTRUCTIONS)]))
    }

    // --- Cycle ---

    #[tool(description = "Get the cycle day and phase (menstrual, follicular, ovulation, luteal) from a cycle day or from last period start date and cycle length")]
    fn get_cycle_phase(&self, Parameters(p): Parameters<GetCyclePhaseParams>) -> Result<CallToolResult, McpError> {
        let result = recommendations::get_cycle_phase(&p.into()).map_err(invalid_params)?;
        to_json(&result)
    }

    // --- Recommendations ---

    #[tool(description = "Recommend foods for the current cycle phase, adjusted for pain/hunger/exhaustion (0-10), dietary preference, allergies and dislikes")]
    fn suggest_diet(&self, Parameters(p): Parameters<SuggestDietParams>) -> Result<CallToolResult, McpError> {
        let result = recommendations::suggest_diet(&self.engine, &p.into()).map_err(invalid_params)?;
        to_json(&result)
    }

    #[tool(description = "List the always-included foods and the per-phase food table, optionally filtered by preference and phase, plus common allergy and dislike names")]
    fn list_phase_foods(&self, Parameters(p): Parameters<ListPhaseFoodsParams>) -> Result<CallToolResult, McpError> {
        let result = recommendations::list_phase_foods(p.preference.as_deref(), p.phase.as_deref())
            .map_err(invalid_params)?;
        to_json(&result)
    }

    #[tool(description = "List the symptom rules loaded for a dietary preference, with any rule table rows that were skipped")]
    fn list_food_rules(&self, Parameters(p): Parameters<ListFoodRulesParams>) -> Result<CallToolResult, McpError> {
        let result = recommendations::list_food_rules(&self.engine, &p.preference).map_err(invalid_params)?;
        to_json(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for CycleSyncService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "cyclesync".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("CycleSync".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "CycleSync - Cycle-phase aware food recommendations. \
                 IMPORTANT: Call diet_instructions before the first recommendation. \
                 Cycle: get_cycle_phase (cycle_day, or last_period_start + cycle_length). \
                 Recommendations: suggest_diet (preference, pain/hunger/exhaustion 0-10, allergies, dislikes). \
                 Reference: list_phase_foods, list_food_rules. \
                 Status: cyclesync_status."
                    .into(),
            ),
        }
    }
}
