//! CycleSync Status Tool
//!
//! Runtime status of the service and the usage guide handed to assistants.

use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::models::DietaryPreference;

/// Diet recommendation instructions for AI assistants
pub const DIET_INSTRUCTIONS: &str = r#"
# CycleSync Diet Recommendation Instructions

CycleSync suggests foods for the current phase of the menstrual cycle, adjusted
for symptoms, dietary preference, allergies and dislikes.

## Step 1: Work Out the Cycle Day

Either pass `cycle_day` directly (1 = first day of the period), or pass:
- `last_period_start` - ISO date YYYY-MM-DD
- `cycle_length` - days, 1 to 45
- `today` (optional) - ISO date, defaults to the server's local date

`get_cycle_phase` returns the cycle day and phase without recommending food.

| Cycle day | Phase |
|-----------|-------|
| 1-5 | Menstrual |
| 6-14 | Follicular |
| 15-17 | Ovulation |
| 18+ | Luteal |

## Step 2: Collect Symptoms

Ask for three intensities on a 0-10 scale:
- `pain`
- `hunger`
- `exhaustion`

Use **0** when the user did not report a symptom. Zero never triggers a
symptom-specific food.

## Step 3: Preference and Exclusions

- `preference`: "vegetarian" or "non-vegetarian" (case-insensitive)
- `allergies`: list of food names, e.g. nuts, dairy, gluten, soy, seafood
- `dislikes`: list of food names, e.g. broccoli, eggplant, spinach

Excluded names must match the food names exactly (call `list_phase_foods`
to see the vocabulary). Excluded foods are never recommended.

## Step 4: Call suggest_diet

The response contains the ordered `foods` list and a `summary` line:
"Recommended Foods: water, fruits, ..."

Foods come in this order: always-included foods, phase foods, then
symptom-matched foods from the rule table. `rule_table_available: false`
means the symptom rules could not be read; the phase foods are still valid.

## Troubleshooting

- `list_food_rules` shows the loaded symptom rules and any skipped rows.
- `cyclesync_status` shows where the rule tables are read from.
"#;

/// Presence of one rule table file
#[derive(Debug, Clone, Serialize)]
pub struct RuleTableFileStatus {
    pub preference: DietaryPreference,
    pub path: String,
    pub size_bytes: Option<u64>,
}

/// Runtime status of the CycleSync service
#[derive(Debug, Clone, Serialize)]
pub struct CycleSyncStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Rule table information
    pub data_dir: String,
    pub rule_tables: Vec<RuleTableFileStatus>,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    data_dir: PathBuf,
}

impl StatusTracker {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            start_time: Instant::now(),
            data_dir,
        }
    }

    pub fn get_status(&self) -> CycleSyncStatus {
        let build_info = BuildInfo::current();

        let rule_tables = DietaryPreference::ALL
            .iter()
            .map(|&preference| {
                let path = self.data_dir.join(preference.rule_table_file());
                RuleTableFileStatus {
                    preference,
                    size_bytes: std::fs::metadata(&path).ok().map(|m| m.len()),
                    path: path.display().to_string(),
                }
            })
            .collect();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        CycleSyncStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            data_dir: self.data_dir.display().to_string(),
            rule_tables,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reports_rule_table_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("vegetarian_foods.csv"), "5,0,0,ginger tea\n").unwrap();

        let status = StatusTracker::new(dir.path().to_path_buf()).get_status();
        assert_eq!(status.rule_tables.len(), 2);
        assert_eq!(status.rule_tables[0].preference, DietaryPreference::Vegetarian);
        assert_eq!(status.rule_tables[0].size_bytes, Some(17));
        assert_eq!(status.rule_tables[1].size_bytes, None);
        assert_eq!(status.process_id, std::process::id());
    }
}
