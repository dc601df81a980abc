//! Total-hours estimation.
//!
//! The entry form recomputes the total-hours field whenever the date range or
//! the per-day average changes: every weekday in the inclusive range
//! contributes the average, weekends contribute nothing.

use chrono::{Datelike, Weekday};
use visitplan_core::Activity;

/// Estimate total hours for a visit from its date range and daily average.
///
/// `None` when either instant is missing or the average is absent or zero.
pub fn estimate_total_hours(activity: &Activity) -> Option<i64> {
    let avg = activity.avg_hrs.filter(|h| *h != 0)?;
    let mut day = activity.start?.date_naive();
    let end = activity.end?.date_naive();

    let mut total = 0;
    while day <= end {
        if !matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            total += avg;
        }
        day = day.succ_opt()?;
    }
    Some(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use visitplan_core::FieldMap;

    fn visit(start: &str, end: &str, avg: &str) -> Activity {
        let fields: FieldMap = [
            ("activity", "visit"),
            ("avg-hrs", avg),
            ("start-date", start),
            ("start-time", "8"),
            ("end-date", end),
            ("end-time", "17"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        Activity::from_fields(&fields)
    }

    #[test]
    fn full_work_week_counts_five_days() {
        // Mon 8/23 through Fri 8/27
        let a = visit("2021-08-23", "2021-08-27", "8");
        assert_eq!(estimate_total_hours(&a), Some(40));
    }

    #[test]
    fn weekends_contribute_nothing() {
        // Mon 8/23 through Sun 8/29: still five working days
        let a = visit("2021-08-23", "2021-08-29", "8");
        assert_eq!(estimate_total_hours(&a), Some(40));

        // Sat 8/28 through Sun 8/29 alone
        let weekend = visit("2021-08-28", "2021-08-29", "8");
        assert_eq!(estimate_total_hours(&weekend), Some(0));
    }

    #[test]
    fn two_week_range_spans_ten_working_days() {
        let a = visit("2021-08-23", "2021-09-03", "6");
        assert_eq!(estimate_total_hours(&a), Some(60));
    }

    #[test]
    fn missing_inputs_yield_no_estimate() {
        assert_eq!(estimate_total_hours(&visit("", "2021-08-27", "8")), None);
        assert_eq!(estimate_total_hours(&visit("2021-08-23", "", "8")), None);
        assert_eq!(
            estimate_total_hours(&visit("2021-08-23", "2021-08-27", "abc")),
            None
        );
        assert_eq!(
            estimate_total_hours(&visit("2021-08-23", "2021-08-27", "0")),
            None
        );
    }
}
