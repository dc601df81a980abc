//! Activity records and the raw-field builder.
//!
//! An [`Activity`] is one technician visit. It is built from a flat mapping
//! of form-field names to raw text; malformed values never raise an error,
//! they surface as `None` and are filtered out by the renderable and
//! summarizable checks downstream.

use crate::week;
use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Raw form-row input: field name to entered text
pub type FieldMap = HashMap<String, String>;

/// Fixed display offset (UTC−5); all instants are constructed and
/// formatted in this offset.
pub fn display_offset() -> FixedOffset {
    FixedOffset::west_opt(5 * 3600).unwrap()
}

// ============================================================================
// VisitType
// ============================================================================

/// Category of an on-site visit
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisitType {
    Install,
    Training,
    Repair,
    Travel,
    SiteVisit,
    /// Unrecognized label, preserved verbatim for display
    Other(String),
}

impl VisitType {
    /// Map a raw field value to a visit type; unknown labels are kept as-is
    pub fn from_label(label: &str) -> Self {
        match label {
            "Install" => VisitType::Install,
            "Training" => VisitType::Training,
            "Repair" => VisitType::Repair,
            "Travel" => VisitType::Travel,
            "Site Visit" => VisitType::SiteVisit,
            other => VisitType::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for VisitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VisitType::Install => write!(f, "Install"),
            VisitType::Training => write!(f, "Training"),
            VisitType::Repair => write!(f, "Repair"),
            VisitType::Travel => write!(f, "Travel"),
            VisitType::SiteVisit => write!(f, "Site Visit"),
            VisitType::Other(label) => write!(f, "{}", label),
        }
    }
}

// ============================================================================
// Activity
// ============================================================================

/// One technician visit/task, as entered on a single form row
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Task label (may be empty; empty rows are never rendered)
    pub activity: String,
    /// Assigned technician (may be empty)
    pub technician: String,
    /// Visit category
    pub visit_type: VisitType,
    /// Average hours per working day; `None` when unparsable
    pub avg_hrs: Option<i64>,
    /// Total hours for the visit; `None` when unparsable
    pub total_hrs: Option<i64>,
    /// Travel day label
    pub travel_day: String,
    /// Visit start; `None` when the date or hour field is malformed
    pub start: Option<DateTime<FixedOffset>>,
    /// Visit end; `None` when the date or hour field is malformed
    pub end: Option<DateTime<FixedOffset>>,
    /// Free-text notes
    pub details: String,
}

impl Activity {
    /// Build an activity from raw form fields.
    ///
    /// Recognized keys: `activity`, `technician`, `visit-type`, `avg-hrs`,
    /// `total-hrs`, `travel-day`, `start-date`, `start-time`, `end-date`,
    /// `end-time`, `details`. Missing keys behave as empty strings and
    /// malformed values become `None`; this never fails.
    pub fn from_fields(fields: &FieldMap) -> Self {
        let text = |key: &str| fields.get(key).cloned().unwrap_or_default();

        Self {
            activity: text("activity"),
            technician: text("technician"),
            visit_type: VisitType::from_label(&text("visit-type")),
            avg_hrs: parse_leading_int(&text("avg-hrs")),
            total_hrs: parse_leading_int(&text("total-hrs")),
            travel_day: text("travel-day"),
            start: parse_instant(&text("start-date"), &text("start-time")),
            end: parse_instant(&text("end-date"), &text("end-time")),
            details: text("details"),
        }
    }

    /// Monday of the start instant's week, time-of-day preserved
    pub fn start_of_week(&self) -> Option<DateTime<FixedOffset>> {
        self.start.map(week::start_of_week)
    }

    /// Sunday of the end instant's week, time-of-day preserved
    pub fn end_of_week(&self) -> Option<DateTime<FixedOffset>> {
        self.end.map(week::end_of_week)
    }

    /// Width of the chart bar in whole weeks, rounded up.
    /// A same-week visit spans one column.
    pub fn duration_weeks(&self) -> Option<i64> {
        Some(week::weeks_between(self.start_of_week()?, self.end_of_week()?))
    }

    /// Qualifies for the chart body: labeled, with both instants valid
    pub fn is_renderable(&self) -> bool {
        !self.activity.is_empty() && self.start.is_some() && self.end.is_some()
    }

    /// Qualifies for the print tables: renderable with a known technician
    pub fn is_summarizable(&self) -> bool {
        self.is_renderable() && !self.technician.is_empty()
    }
}

/// Assemble raw form rows into activities, one per row, in input order.
/// No filtering or sorting happens here.
pub fn assemble(rows: &[FieldMap]) -> Vec<Activity> {
    rows.iter().map(Activity::from_fields).collect()
}

// ============================================================================
// Field parsing
// ============================================================================

/// Best-effort integer parse: optional sign, then the leading digit run;
/// trailing junk is ignored. No digits means `None`.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits: &str = {
        let end = rest
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map_or(rest.len(), |(i, _)| i);
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }

    let value: i64 = digits.parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Combine a `YYYY-MM-DD` date and an hour-of-day field into an instant at
/// the fixed display offset. Either part malformed means no instant.
fn parse_instant(date: &str, hour: &str) -> Option<DateTime<FixedOffset>> {
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()?;
    let hour: u32 = hour.trim().parse().ok()?;
    date.and_hms_opt(hour, 0, 0)?
        .and_local_timezone(display_offset())
        .single()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fields(pairs: &[(&str, &str)]) -> FieldMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn full_row() -> FieldMap {
        fields(&[
            ("activity", "Install rack"),
            ("technician", "Dana"),
            ("visit-type", "Install"),
            ("avg-hrs", "8"),
            ("total-hrs", "40"),
            ("travel-day", "Monday"),
            ("start-date", "2021-08-23"),
            ("start-time", "05"),
            ("end-date", "2021-08-27"),
            ("end-time", "05"),
            ("details", "Dock access required"),
        ])
    }

    #[test]
    fn builds_full_record() {
        let a = Activity::from_fields(&full_row());
        assert_eq!(a.activity, "Install rack");
        assert_eq!(a.technician, "Dana");
        assert_eq!(a.visit_type, VisitType::Install);
        assert_eq!(a.avg_hrs, Some(8));
        assert_eq!(a.total_hrs, Some(40));
        assert!(a.start.is_some());
        assert!(a.end.is_some());
        assert!(a.is_renderable());
        assert!(a.is_summarizable());
        assert_eq!(a.duration_weeks(), Some(1));
    }

    #[test]
    fn missing_keys_act_as_empty() {
        let a = Activity::from_fields(&FieldMap::new());
        assert_eq!(a.activity, "");
        assert_eq!(a.avg_hrs, None);
        assert_eq!(a.start, None);
        assert!(!a.is_renderable());
    }

    #[test]
    fn unparsable_hours_stay_none() {
        let mut row = full_row();
        row.insert("avg-hrs".into(), "abc".into());
        let a = Activity::from_fields(&row);
        assert_eq!(a.avg_hrs, None);
        // The rest of the record is untouched
        assert!(a.is_renderable());
    }

    #[test]
    fn leading_digits_parse_like_the_form_did() {
        assert_eq!(parse_leading_int("8"), Some(8));
        assert_eq!(parse_leading_int(" 40 "), Some(40));
        assert_eq!(parse_leading_int("8h"), Some(8));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("+12"), Some(12));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
    }

    #[test]
    fn invalid_dates_invalidate_the_instant() {
        for (date, hour) in [
            ("2021-02-30", "05"),
            ("not-a-date", "05"),
            ("", "05"),
            ("2021-08-23", "25"),
            ("2021-08-23", ""),
            ("2021-08-23", "five"),
        ] {
            assert_eq!(parse_instant(date, hour), None, "{date}T{hour}");
        }
    }

    #[test]
    fn instants_carry_the_display_offset() {
        let t = parse_instant("2021-08-23", "5").unwrap();
        assert_eq!(t.to_rfc3339(), "2021-08-23T05:00:00-05:00");
    }

    #[test]
    fn empty_label_is_not_renderable() {
        let mut row = full_row();
        row.insert("activity".into(), String::new());
        let a = Activity::from_fields(&row);
        assert!(!a.is_renderable());
        assert!(!a.is_summarizable());
    }

    #[test]
    fn missing_technician_renders_but_does_not_summarize() {
        let mut row = full_row();
        row.insert("technician".into(), String::new());
        let a = Activity::from_fields(&row);
        assert!(a.is_renderable());
        assert!(!a.is_summarizable());
    }

    #[test]
    fn visit_type_labels_round_trip() {
        for label in ["Install", "Training", "Repair", "Travel", "Site Visit"] {
            assert_eq!(VisitType::from_label(label).to_string(), label);
        }
        let other = VisitType::from_label("Inspection");
        assert_eq!(other, VisitType::Other("Inspection".into()));
        assert_eq!(other.to_string(), "Inspection");
    }

    #[test]
    fn assemble_preserves_input_order() {
        let rows = vec![
            fields(&[("activity", "second visit")]),
            fields(&[("activity", "first visit")]),
        ];
        let activities = assemble(&rows);
        assert_eq!(activities.len(), 2);
        assert_eq!(activities[0].activity, "second visit");
        assert_eq!(activities[1].activity, "first visit");
    }
}
