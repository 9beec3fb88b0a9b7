//! Rule table parsing
//!
//! Rows are `pain,hunger,exhaustion,food`. Bad rows are skipped and recorded
//! so one broken line never costs the caller the rest of the table.

use std::io::BufRead;

use serde::Serialize;

use super::DataError;
use crate::models::FoodRule;

/// Why a row was left out of the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RowProblem {
    TooFewFields { found: usize },
    InvalidThreshold { column: &'static str, value: String },
    MissingFood,
    InvalidEncoding,
}

/// A skipped row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowIssue {
    /// 1-based line number in the source
    pub line: usize,
    pub problem: RowProblem,
}

impl std::fmt::Display for RowIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.problem {
            RowProblem::TooFewFields { found } => {
                write!(f, "Row {}: expected 4 fields, found {}", self.line, found)
            }
            RowProblem::InvalidThreshold { column, value } => {
                write!(f, "Row {}: invalid {} threshold '{}'", self.line, column, value)
            }
            RowProblem::MissingFood => write!(f, "Row {}: food name is empty", self.line),
            RowProblem::InvalidEncoding => write!(f, "Row {}: not valid UTF-8", self.line),
        }
    }
}

/// Loaded rules in source order, plus the rows that were skipped
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RuleTable {
    pub rules: Vec<FoodRule>,
    pub skipped: Vec<RowIssue>,
}

impl RuleTable {
    pub fn new(rules: Vec<FoodRule>) -> Self {
        Self {
            rules,
            skipped: Vec::new(),
        }
    }

    /// Parse rows from any line source.
    ///
    /// Lines are split on raw bytes so a row that is not UTF-8 is skipped on
    /// its own. Only an I/O failure aborts the parse.
    pub fn parse<R: BufRead>(reader: R) -> Result<Self, DataError> {
        let mut table = RuleTable::default();

        for (index, bytes) in reader.split(b'\n').enumerate() {
            let bytes = bytes.map_err(DataError::Read)?;
            let line_num = index + 1;

            let parsed = match std::str::from_utf8(&bytes) {
                Ok(line) => parse_row(line.trim_end_matches('\r')),
                Err(_) => Err(RowProblem::InvalidEncoding),
            };

            match parsed {
                Ok(rule) => table.rules.push(rule),
                Err(problem) => {
                    let issue = RowIssue {
                        line: line_num,
                        problem,
                    };
                    // Short rows are routine (blank lines, trailing commas)
                    match issue.problem {
                        RowProblem::TooFewFields { .. } => {
                            tracing::debug!("Skipping rule row: {}", issue)
                        }
                        _ => tracing::warn!("Skipping rule row: {}", issue),
                    }
                    table.skipped.push(issue);
                }
            }
        }

        Ok(table)
    }

    /// Parse rows held in memory
    pub fn parse_str(text: &str) -> Self {
        // Reading from a byte slice cannot fail
        Self::parse(text.as_bytes()).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn parse_row(line: &str) -> Result<FoodRule, RowProblem> {
    let mut fields: Vec<&str> = line.split(',').collect();

    // Trailing empty fields do not count ("5,0,0," has three)
    while fields.last().is_some_and(|f| f.trim().is_empty()) {
        fields.pop();
    }

    if fields.len() < 4 {
        return Err(RowProblem::TooFewFields {
            found: fields.len(),
        });
    }

    let threshold = |column: &'static str, raw: &str| {
        raw.trim()
            .parse::<i32>()
            .map_err(|_| RowProblem::InvalidThreshold {
                column,
                value: raw.to_string(),
            })
    };

    let pain = threshold("pain", fields[0])?;
    let hunger = threshold("hunger", fields[1])?;
    let exhaustion = threshold("exhaustion", fields[2])?;

    let food = fields[3].trim();
    if food.is_empty() {
        return Err(RowProblem::MissingFood);
    }

    Ok(FoodRule::new(pain, hunger, exhaustion, food))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_rows_in_order() {
        let table = RuleTable::parse_str("5,0,0,ginger tea\n0,7,0,oatmeal\n0,0,8,spinach smoothie\n");
        assert_eq!(table.len(), 3);
        assert!(table.skipped.is_empty());
        assert_eq!(table.rules[0], FoodRule::new(5, 0, 0, "ginger tea"));
        assert_eq!(table.rules[1].food, "oatmeal");
        assert_eq!(table.rules[2].exhaustion_threshold, 8);
    }

    #[test]
    fn test_short_row_is_skipped() {
        let table = RuleTable::parse_str("3,,foo\n5,0,0,ginger tea\n");
        assert_eq!(table.rules, vec![FoodRule::new(5, 0, 0, "ginger tea")]);
        assert_eq!(
            table.skipped,
            vec![RowIssue {
                line: 1,
                problem: RowProblem::TooFewFields { found: 3 },
            }]
        );
    }

    #[test]
    fn test_trailing_empty_fields_do_not_count() {
        let table = RuleTable::parse_str("5,0,0,\n\n");
        assert!(table.is_empty());
        assert_eq!(table.skipped.len(), 2);
        assert_eq!(table.skipped[0].problem, RowProblem::TooFewFields { found: 3 });
    }

    #[test]
    fn test_bad_threshold_skips_row_and_continues() {
        let table = RuleTable::parse_str("pain,hunger,exhaustion,food\n5,x,0,broth\n2,0,0,dates\n");
        assert_eq!(table.rules, vec![FoodRule::new(2, 0, 0, "dates")]);
        assert_eq!(table.skipped.len(), 2);
        assert_eq!(
            table.skipped[1],
            RowIssue {
                line: 2,
                problem: RowProblem::InvalidThreshold {
                    column: "hunger",
                    value: "x".to_string(),
                },
            }
        );
        assert_eq!(table.skipped[1].to_string(), "Row 2: invalid hunger threshold 'x'");
    }

    #[test]
    fn test_whitespace_and_extra_fields() {
        let table = RuleTable::parse_str(" 4 , 0 ,0 , dark chocolate ,note\r\n");
        assert_eq!(table.rules, vec![FoodRule::new(4, 0, 0, "dark chocolate")]);
    }

    #[test]
    fn test_empty_food_name_is_skipped() {
        let table = RuleTable::parse_str("5,0,0,,note\n5,0,0, ,note\n5,0,0,ginger tea\n");
        assert_eq!(table.rules, vec![FoodRule::new(5, 0, 0, "ginger tea")]);
        assert_eq!(table.skipped.len(), 2);
        assert_eq!(table.skipped[0].problem, RowProblem::MissingFood);
        assert_eq!(table.skipped[1].to_string(), "Row 2: food name is empty");
    }

    #[test]
    fn test_non_utf8_row_is_skipped_alone() {
        let bytes: &[u8] = b"5,0,0,ginger tea\n0,0,9,cr\xe8me fra\xeeche\r\n0,4,0,oatmeal\n";
        let table = RuleTable::parse(bytes).unwrap();
        assert_eq!(
            table.rules,
            vec![FoodRule::new(5, 0, 0, "ginger tea"), FoodRule::new(0, 4, 0, "oatmeal")]
        );
        assert_eq!(
            table.skipped,
            vec![RowIssue {
                line: 2,
                problem: RowProblem::InvalidEncoding,
            }]
        );
    }
}
