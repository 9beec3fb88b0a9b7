//! Load both rule tables and report what was read and what was skipped
//! Usage: cargo run --bin check_rule_tables -- [data_dir]

use std::path::PathBuf;

use cyclesync::build_info::BuildInfo;
use cyclesync::data::{self, CsvRuleTables, RuleTableProvider};
use cyclesync::models::DietaryPreference;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let data_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(data::get_data_dir);
    let tables = CsvRuleTables::new(data_dir);

    println!("{}", BuildInfo::current().label());
    println!("Rule tables: {}", tables.data_dir().display());

    let mut problems = 0;

    for preference in DietaryPreference::ALL {
        println!("\n{} ({})", preference.display_name(), tables.describe(preference));

        let table = match tables.load(preference) {
            Ok(t) => t,
            Err(e) => {
                println!("  unavailable: {}", e);
                problems += 1;
                continue;
            }
        };

        println!("  {} rules", table.rules.len());
        for rule in &table.rules {
            println!(
                "    pain={:<2} hunger={:<2} exhaustion={:<2} -> {}",
                rule.pain_threshold, rule.hunger_threshold, rule.exhaustion_threshold, rule.food
            );
        }

        for issue in &table.skipped {
            println!("  skipped: {}", issue);
        }
        problems += table.skipped.len();
    }

    println!("\n{} problem(s) found", problems);
    Ok(())
}
