use chrono::NaiveDate;

use crate::error::{Result, StorageError};

pub const DEFAULT_RECENT_LIMIT: i64 = 5;
pub const MAX_RECENT_LIMIT: i64 = 50;

/// Half-open `[first day, first day of next month)` range for a calendar month.
pub fn month_bounds(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate)> {
    let invalid = || StorageError::InvalidInput(format!("Invalid month: {}-{}", year, month));

    let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let end = NaiveDate::from_ymd_opt(next_year, next_month, 1).ok_or_else(invalid)?;

    Ok((start, end))
}

/// Missing, zero or negative limits fall back to the default.
pub fn recent_limit(requested: Option<i64>) -> i64 {
    match requested {
        Some(limit) if limit > 0 => limit.min(MAX_RECENT_LIMIT),
        _ => DEFAULT_RECENT_LIMIT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_bounds() {
        let (start, end) = month_bounds(2026, 2).unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
    }

    #[test]
    fn test_december_rolls_into_next_year() {
        let (_, end) = month_bounds(2025, 12).unwrap();
        assert_eq!(end, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
    }

    #[test]
    fn test_invalid_month() {
        assert!(matches!(month_bounds(2026, 13), Err(StorageError::InvalidInput(_))));
        assert!(month_bounds(2026, 0).is_err());
    }

    #[test]
    fn test_recent_limit() {
        assert_eq!(recent_limit(None), 5);
        assert_eq!(recent_limit(Some(0)), 5);
        assert_eq!(recent_limit(Some(-3)), 5);
        assert_eq!(recent_limit(Some(10)), 10);
        assert_eq!(recent_limit(Some(1000)), 50);
    }
}
