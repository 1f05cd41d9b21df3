//! Gestation date arithmetic.

use chrono::{Days, NaiveDate};

/// Days from mating to expected whelping for dogs.
pub const GESTATION_DAYS: u64 = 63;

/// Expected birth date for a mating on `mating_date`.
///
/// Saturates at the latest representable date instead of overflowing.
pub fn expected_birth_date(mating_date: NaiveDate) -> NaiveDate {
    mating_date
        .checked_add_days(Days::new(GESTATION_DAYS))
        .unwrap_or(NaiveDate::MAX)
}

/// Returns true if `date` lies within `[today, today + days]`.
pub fn falls_within(date: NaiveDate, today: NaiveDate, days: u32) -> bool {
    let end = today
        .checked_add_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MAX);
    date >= today && date <= end
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn expected_birth_is_sixty_three_days_out() {
        assert_eq!(expected_birth_date(date(2024, 1, 1)), date(2024, 3, 4));
    }

    #[test]
    fn expected_birth_crosses_leap_day() {
        assert_eq!(expected_birth_date(date(2024, 2, 1)), date(2024, 4, 4));
        assert_eq!(expected_birth_date(date(2023, 2, 1)), date(2023, 4, 5));
    }

    #[test]
    fn window_is_inclusive_on_both_ends() {
        let today = date(2024, 5, 1);
        assert!(falls_within(today, today, 0));
        assert!(falls_within(date(2024, 5, 31), today, 30));
        assert!(!falls_within(date(2024, 6, 1), today, 30));
        assert!(!falls_within(date(2024, 4, 30), today, 30));
    }

    proptest! {
        #[test]
        fn expected_birth_minus_mating_is_gestation(days_from_epoch in 0i64..80_000) {
            let mating = date(1970, 1, 1) + chrono::Duration::days(days_from_epoch);
            let expected = expected_birth_date(mating);
            prop_assert_eq!((expected - mating).num_days(), GESTATION_DAYS as i64);
        }
    }
}
