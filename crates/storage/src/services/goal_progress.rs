use chrono::NaiveDateTime;
use rust_decimal::Decimal;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// `current / target × 100`, rounded to 2 places and clamped to `0..=100`.
/// A zero (or negative) target yields 0.
pub fn progress_percent(current: Decimal, target: Decimal) -> Decimal {
    if target <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    (current / target * HUNDRED)
        .round_dp(2)
        .clamp(Decimal::ZERO, HUNDRED)
}

/// Decides the `completed_at` stamp after a write.
///
/// An explicit timestamp always wins. Completing a goal without one stamps
/// `now` unless it already carried a stamp; reopening a goal clears it.
pub fn resolve_completed_at(
    completed: bool,
    requested: Option<NaiveDateTime>,
    existing: Option<NaiveDateTime>,
    now: NaiveDateTime,
) -> Option<NaiveDateTime> {
    if !completed {
        return None;
    }
    requested.or(existing).or(Some(now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dec(value: i64) -> Decimal {
        Decimal::from(value)
    }

    fn at(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(dec(50), dec(200)), dec(25));
        assert_eq!(progress_percent(dec(1), dec(3)), Decimal::new(3333, 2));
    }

    #[test]
    fn test_progress_is_clamped() {
        assert_eq!(progress_percent(dec(250), dec(200)), dec(100));
        assert_eq!(progress_percent(dec(-10), dec(200)), Decimal::ZERO);
    }

    #[test]
    fn test_zero_target_has_no_progress() {
        assert_eq!(progress_percent(dec(10), Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_completing_stamps_now() {
        assert_eq!(resolve_completed_at(true, None, None, at(5)), Some(at(5)));
    }

    #[test]
    fn test_existing_stamp_is_kept() {
        assert_eq!(resolve_completed_at(true, None, Some(at(1)), at(5)), Some(at(1)));
    }

    #[test]
    fn test_explicit_stamp_wins() {
        assert_eq!(resolve_completed_at(true, Some(at(3)), Some(at(1)), at(5)), Some(at(3)));
    }

    #[test]
    fn test_reopening_clears_stamp() {
        assert_eq!(resolve_completed_at(false, Some(at(3)), Some(at(1)), at(5)), None);
    }
}
