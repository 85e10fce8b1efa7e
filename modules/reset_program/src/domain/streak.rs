//! Consecutive-day streak arithmetic on calendar days. Time of day never
//! matters: callers pass midnight-truncated dates.

use chrono::NaiveDate;

/// Next streak value after a state-changing completion on `today`.
///
/// First completion ever starts the streak at 1; a completion exactly one
/// calendar day after the last one extends it; a gap of more than one day
/// restarts it at 1; another completion on the same day leaves it alone.
pub fn advance(current: u32, last_completed: Option<NaiveDate>, today: NaiveDate) -> u32 {
    let Some(last) = last_completed else {
        return 1;
    };
    let diff_days = (today - last).num_days();
    if diff_days == 1 {
        current + 1
    } else if diff_days > 1 {
        1
    } else {
        // Same day; a negative diff (clock skew) is treated the same way
        // rather than punishing the user.
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn first_completion_starts_at_one() {
        assert_eq!(advance(0, None, d(2026, 3, 1)), 1);
    }

    #[test]
    fn next_day_increments() {
        assert_eq!(advance(4, Some(d(2026, 3, 1)), d(2026, 3, 2)), 5);
    }

    #[test]
    fn gap_resets_to_one() {
        assert_eq!(advance(4, Some(d(2026, 3, 1)), d(2026, 3, 3)), 1);
        assert_eq!(advance(4, Some(d(2026, 3, 1)), d(2026, 4, 1)), 1);
    }

    #[test]
    fn same_day_is_unchanged() {
        assert_eq!(advance(4, Some(d(2026, 3, 1)), d(2026, 3, 1)), 4);
    }

    #[test]
    fn increments_across_month_boundary() {
        assert_eq!(advance(2, Some(d(2026, 2, 28)), d(2026, 3, 1)), 3);
    }

    #[test]
    fn backwards_clock_is_unchanged() {
        assert_eq!(advance(4, Some(d(2026, 3, 2)), d(2026, 3, 1)), 4);
    }
}
