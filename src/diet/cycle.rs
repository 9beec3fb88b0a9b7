//! Cycle day arithmetic
//!
//! Turns a last period start date and a cycle length into a 1-based cycle day.

use chrono::NaiveDate;

use crate::models::ValidationError;

/// Longest cycle length accepted from callers, in days
pub const MAX_CYCLE_LENGTH: u32 = 45;

/// Day of the current cycle, 1-based.
///
/// Whole cycles elapsed since `last_period_start` are folded away, so a start
/// date several cycles back still lands inside the current one.
pub fn cycle_day(
    last_period_start: NaiveDate,
    today: NaiveDate,
    cycle_length: u32,
) -> Result<i32, ValidationError> {
    if cycle_length == 0 || cycle_length > MAX_CYCLE_LENGTH {
        return Err(ValidationError::OutOfRange {
            field: "cycle_length",
            value: cycle_length as i64,
            min: 1,
            max: MAX_CYCLE_LENGTH as i64,
        });
    }

    let elapsed = today.signed_duration_since(last_period_start).num_days();
    if elapsed < 0 {
        return Err(ValidationError::FutureDate {
            field: "last_period_start",
            value: last_period_start.to_string(),
        });
    }

    Ok((elapsed % cycle_length as i64) as i32 + 1)
}

/// Parse a YYYY-MM-DD date field
pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        ValidationError::InvalidDate {
            field,
            value: value.to_string(),
        }
    })
}

/// Today's date in local time
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_start_day_is_day_one() {
        assert_eq!(cycle_day(date("2026-01-10"), date("2026-01-10"), 28), Ok(1));
        assert_eq!(cycle_day(date("2026-01-10"), date("2026-01-14"), 28), Ok(5));
    }

    #[test]
    fn test_wraps_into_current_cycle() {
        // 28 days after the start is day 1 of the next cycle
        assert_eq!(cycle_day(date("2026-01-01"), date("2026-01-29"), 28), Ok(1));
        assert_eq!(cycle_day(date("2026-01-01"), date("2026-03-01"), 28), Ok(4));
        assert_eq!(cycle_day(date("2026-01-01"), date("2026-01-31"), 30), Ok(1));
    }

    #[test]
    fn test_cycle_length_bounds() {
        let err = cycle_day(date("2026-01-01"), date("2026-01-05"), 0).unwrap_err();
        assert_eq!(err.field(), "cycle_length");
        assert!(cycle_day(date("2026-01-01"), date("2026-01-05"), 46).is_err());
        assert_eq!(cycle_day(date("2026-01-01"), date("2026-01-05"), 1), Ok(1));
    }

    #[test]
    fn test_future_start_is_rejected() {
        let err = cycle_day(date("2026-02-01"), date("2026-01-05"), 28).unwrap_err();
        assert_eq!(err.field(), "last_period_start");
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("today", " 2026-10-19 "), Ok(date("2026-10-19")));
        let err = parse_date("last_period_start", "19/10/2026").unwrap_err();
        assert_eq!(
            err.to_string(),
            "last_period_start must be a date in YYYY-MM-DD format (got '19/10/2026')"
        );
    }
}
