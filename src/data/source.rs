//! Rule table providers
//!
//! The engine asks a provider for the table belonging to a preference. The
//! CSV provider reads one file per preference from a data directory; the
//! static provider serves tables held in memory.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::RuleTable;
use crate::models::{DietaryPreference, FoodRule};

/// Rule table loading errors
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Rule table not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to open rule table '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read rule table: {0}")]
    Read(#[source] std::io::Error),
}

/// Result type for rule table operations
pub type DataResult<T> = Result<T, DataError>;

/// Supplies the rule table for a dietary preference
pub trait RuleTableProvider {
    fn load(&self, preference: DietaryPreference) -> DataResult<RuleTable>;

    /// Human-readable location of the table, for logs and status output
    fn describe(&self, preference: DietaryPreference) -> String;
}

impl<P: RuleTableProvider + ?Sized> RuleTableProvider for &P {
    fn load(&self, preference: DietaryPreference) -> DataResult<RuleTable> {
        (**self).load(preference)
    }

    fn describe(&self, preference: DietaryPreference) -> String {
        (**self).describe(preference)
    }
}

/// Reads `vegetarian_foods.csv` / `non_vegetarian_foods.csv` from a directory.
///
/// Files are re-read on every load, so edits take effect without a restart.
#[derive(Debug, Clone)]
pub struct CsvRuleTables {
    data_dir: PathBuf,
}

impl CsvRuleTables {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn path_for(&self, preference: DietaryPreference) -> PathBuf {
        self.data_dir.join(preference.rule_table_file())
    }
}

impl RuleTableProvider for CsvRuleTables {
    fn load(&self, preference: DietaryPreference) -> DataResult<RuleTable> {
        let path = self.path_for(preference);
        let file = File::open(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => DataError::NotFound(path.clone()),
            _ => DataError::Open {
                path: path.clone(),
                source: e,
            },
        })?;

        let table = RuleTable::parse(BufReader::new(file))?;
        tracing::debug!(
            "Loaded {} rules from {} ({} rows skipped)",
            table.rules.len(),
            path.display(),
            table.skipped.len()
        );
        Ok(table)
    }

    fn describe(&self, preference: DietaryPreference) -> String {
        self.path_for(preference).display().to_string()
    }
}

/// In-memory rule tables. A preference with no table loads as empty.
#[derive(Debug, Clone, Default)]
pub struct StaticRuleTables {
    tables: HashMap<DietaryPreference, Vec<FoodRule>>,
}

impl StaticRuleTables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(mut self, preference: DietaryPreference, rules: Vec<FoodRule>) -> Self {
        self.tables.insert(preference, rules);
        self
    }
}

impl RuleTableProvider for StaticRuleTables {
    fn load(&self, preference: DietaryPreference) -> DataResult<RuleTable> {
        Ok(RuleTable::new(
            self.tables.get(&preference).cloned().unwrap_or_default(),
        ))
    }

    fn describe(&self, preference: DietaryPreference) -> String {
        format!("in-memory {} table", preference.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_csv_loads_per_preference_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("vegetarian_foods.csv"), "5,0,0,ginger tea\n").unwrap();
        fs::write(dir.path().join("non_vegetarian_foods.csv"), "0,6,0,bone broth\n").unwrap();

        let tables = CsvRuleTables::new(dir.path());
        let veg = tables.load(DietaryPreference::Vegetarian).unwrap();
        let non_veg = tables.load(DietaryPreference::NonVegetarian).unwrap();

        assert_eq!(veg.rules, vec![FoodRule::new(5, 0, 0, "ginger tea")]);
        assert_eq!(non_veg.rules, vec![FoodRule::new(0, 6, 0, "bone broth")]);
    }

    #[test]
    fn test_csv_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let tables = CsvRuleTables::new(dir.path());

        let err = tables.load(DietaryPreference::Vegetarian).unwrap_err();
        assert!(matches!(err, DataError::NotFound(ref p) if p.ends_with("vegetarian_foods.csv")));
    }

    #[test]
    fn test_csv_keeps_valid_rows_around_bad_ones() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("vegetarian_foods.csv"),
            "3,,foo\n4,0,0,dates\nx,0,0,figs\n0,0,9,lentil soup\n",
        )
        .unwrap();

        let table = CsvRuleTables::new(dir.path())
            .load(DietaryPreference::Vegetarian)
            .unwrap();
        let foods: Vec<&str> = table.rules.iter().map(|r| r.food.as_str()).collect();
        assert_eq!(foods, vec!["dates", "lentil soup"]);
        assert_eq!(table.skipped.len(), 2);
    }

    #[test]
    fn test_csv_non_utf8_row_costs_only_that_row() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("vegetarian_foods.csv"),
            b"5,0,0,ginger tea\n0,0,9,cr\xe8me fra\xeeche\n0,4,0,oatmeal\n",
        )
        .unwrap();

        let table = CsvRuleTables::new(dir.path())
            .load(DietaryPreference::Vegetarian)
            .unwrap();
        let foods: Vec<&str> = table.rules.iter().map(|r| r.food.as_str()).collect();
        assert_eq!(foods, vec!["ginger tea", "oatmeal"]);
        assert_eq!(table.skipped.len(), 1);
        assert_eq!(table.skipped[0].line, 2);
    }

    #[test]
    fn test_static_tables() {
        let tables = StaticRuleTables::new().with_rules(
            DietaryPreference::NonVegetarian,
            vec![FoodRule::new(5, 0, 0, "ginger tea")],
        );
        assert_eq!(tables.load(DietaryPreference::NonVegetarian).unwrap().len(), 1);
        assert!(tables.load(DietaryPreference::Vegetarian).unwrap().is_empty());
    }
}
