//! Rule table data module
//!
//! Locates, loads and parses the per-preference rule tables.

pub mod parser;
pub mod source;

use std::path::PathBuf;

pub use parser::{RowIssue, RowProblem, RuleTable};
pub use source::{CsvRuleTables, DataError, DataResult, RuleTableProvider, StaticRuleTables};

/// Environment variable overriding the rule table directory
pub const DATA_DIR_ENV: &str = "CYCLESYNC_DATA_DIR";

/// Get the rule table directory from the environment or use the default
///
/// The default is `data/` at the project root, found by walking up from
/// `target/release` or `target/debug` when run from a cargo build.
pub fn get_data_dir() -> PathBuf {
    std::env::var(DATA_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let mut path = std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()))
                .unwrap_or_else(|| PathBuf::from("."));

            if path.ends_with("release") || path.ends_with("debug") {
                if let Some(project_root) = path.parent().and_then(|p| p.parent()) {
                    path = project_root.to_path_buf();
                }
            }

            path.push("data");
            path
        })
}
