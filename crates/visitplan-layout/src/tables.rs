//! Print-table mapping: which fields land in which table, and how dates and
//! times format for display.

use chrono::{DateTime, Datelike, FixedOffset, Timelike};
use visitplan_core::{Activity, DetailRow, PrintTables, SummaryRow};

/// Build both print tables from an already-sorted collection.
///
/// Both tables carry one row per summarizable activity; rows without a
/// technician or with invalid dates are skipped silently.
pub fn print_tables(sorted: &[Activity]) -> PrintTables {
    let summarizable = || sorted.iter().filter(|a| a.is_summarizable());

    let detail = summarizable()
        .map(|a| DetailRow {
            activity: a.activity.clone(),
            technician: a.technician.clone(),
            details: a.details.clone(),
        })
        .collect();

    let summary = summarizable()
        .map(|a| SummaryRow {
            activity: a.activity.clone(),
            visit_type: a.visit_type.to_string(),
            start_date: a.start.map(format_date).unwrap_or_default(),
            start_time: a.start.map(format_time).unwrap_or_default(),
            end_date: a.end.map(format_date).unwrap_or_default(),
            end_time: a.end.map(format_time).unwrap_or_default(),
            avg_hrs: a.avg_hrs.map(|h| h.to_string()).unwrap_or_default(),
            total_hrs: a.total_hrs.map(|h| h.to_string()).unwrap_or_default(),
            travel_day: a.travel_day.clone(),
        })
        .collect();

    PrintTables { detail, summary }
}

/// `M/D/YY` in the instant's own offset, unpadded month and day
pub fn format_date(t: DateTime<FixedOffset>) -> String {
    format!("{}/{}/{:02}", t.month(), t.day(), t.year() % 100)
}

/// 12-hour `H:MM AM|PM`
pub fn format_time(t: DateTime<FixedOffset>) -> String {
    let (pm, hour) = t.hour12();
    format!("{}:{:02} {}", hour, t.minute(), if pm { "PM" } else { "AM" })
}
