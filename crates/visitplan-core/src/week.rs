//! Week-aligned date arithmetic.
//!
//! Activities are placed on a timeline of Monday-to-Sunday week columns.
//! Week boundaries shift by whole days only, so the aligned instants keep the
//! input's wall-clock time; they are not floored to midnight. Sunday belongs
//! to the week that started the previous Monday (ISO convention).

use chrono::{DateTime, Datelike, Duration, FixedOffset};

/// Length of a week column in seconds
pub const SECONDS_PER_WEEK: i64 = 7 * 24 * 60 * 60;

/// The Monday of `t`'s week, preserving `t`'s time-of-day.
pub fn start_of_week(t: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    t - Duration::days(i64::from(t.weekday().num_days_from_monday()))
}

/// The Sunday of `t`'s week, preserving `t`'s time-of-day.
pub fn end_of_week(t: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    t + Duration::days(6 - i64::from(t.weekday().num_days_from_monday()))
}

/// Number of whole weeks from `a` to `b`, rounded up.
///
/// Zero when the instants coincide, negative when `b` lies more than a week
/// before `a`. The layout engine only feeds ordered pairs and clamps at zero.
pub fn weeks_between(a: DateTime<FixedOffset>, b: DateTime<FixedOffset>) -> i64 {
    let secs = (b - a).num_seconds();
    secs.div_euclid(SECONDS_PER_WEEK) + i64::from(secs.rem_euclid(SECONDS_PER_WEEK) > 0)
}

/// Header label for the week containing `t`: `month/day` of its Monday,
/// 1-based and unpadded (`8/23`).
pub fn week_label(t: DateTime<FixedOffset>) -> String {
    let monday = start_of_week(t);
    format!("{}/{}", monday.month(), monday.day())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Weekday};
    use pretty_assertions::assert_eq;

    fn instant(y: i32, m: u32, d: u32, h: u32) -> DateTime<FixedOffset> {
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
            .and_local_timezone(offset)
            .single()
            .unwrap()
    }

    #[test]
    fn start_of_week_lands_on_monday() {
        // 2021-08-23 is a Monday; walk the whole week including Sunday
        for day in 23..=29 {
            let t = instant(2021, 8, day, 9);
            let monday = start_of_week(t);
            assert_eq!(monday.weekday(), Weekday::Mon);
            assert_eq!(monday, instant(2021, 8, 23, 9));
        }
    }

    #[test]
    fn end_of_week_lands_on_sunday() {
        for day in 23..=29 {
            let t = instant(2021, 8, day, 9);
            let sunday = end_of_week(t);
            assert_eq!(sunday.weekday(), Weekday::Sun);
            assert_eq!(sunday, instant(2021, 8, 29, 9));
        }
    }

    #[test]
    fn sunday_belongs_to_previous_monday() {
        // The source tool pushed Sunday one day past Monday; we keep the ISO
        // convention instead: Sunday is six days past its week's Monday.
        let sunday = instant(2021, 8, 29, 5);
        assert_eq!(start_of_week(sunday), instant(2021, 8, 23, 5));
        assert_eq!(end_of_week(sunday), sunday);
    }

    #[test]
    fn alignment_preserves_time_of_day() {
        let t = instant(2021, 8, 26, 17);
        assert_eq!(start_of_week(t), instant(2021, 8, 23, 17));
        assert_eq!(end_of_week(t), instant(2021, 8, 29, 17));
    }

    #[test]
    fn weeks_between_rounds_up() {
        let monday = instant(2021, 8, 23, 5);
        assert_eq!(weeks_between(monday, monday), 0);
        assert_eq!(weeks_between(monday, instant(2021, 8, 24, 5)), 1);
        assert_eq!(weeks_between(monday, instant(2021, 8, 30, 5)), 1);
        assert_eq!(weeks_between(monday, instant(2021, 8, 30, 6)), 2);
        assert_eq!(weeks_between(monday, instant(2021, 9, 6, 5)), 2);
    }

    #[test]
    fn weeks_between_can_go_negative() {
        let monday = instant(2021, 8, 23, 5);
        assert_eq!(weeks_between(monday, instant(2021, 8, 20, 5)), 0);
        assert_eq!(weeks_between(monday, instant(2021, 8, 16, 5)), -1);
    }

    #[test]
    fn start_of_week_never_after_input() {
        for day in 1..=28 {
            let t = instant(2021, 8, day, 12);
            assert!(weeks_between(start_of_week(t), t) >= 0);
            assert!(start_of_week(t) <= t);
            assert!(end_of_week(t) >= t);
        }
    }

    #[test]
    fn week_label_is_unpadded_month_slash_day() {
        assert_eq!(week_label(instant(2021, 8, 26, 9)), "8/23");
        // Week spanning a month boundary labels from its Monday
        assert_eq!(week_label(instant(2021, 9, 3, 9)), "8/30");
    }
}
