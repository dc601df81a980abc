//! Layout plan types.
//!
//! The layout engine reduces a collection of activities to these structures;
//! renderers consume them without touching the activities again. Everything
//! serializes, so a plan can also be emitted as JSON directly.

use crate::activity::VisitType;
use serde::{Deserialize, Serialize};

/// Complete week-aligned chart: header labels plus one row per renderable
/// activity, in sorted order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPlan {
    /// One `month/day` label per week column
    pub headers: Vec<String>,
    /// Chart body rows
    pub rows: Vec<ChartRow>,
}

impl ChartPlan {
    /// Number of week columns on the timeline
    pub fn week_count(&self) -> usize {
        self.headers.len()
    }
}

/// One chart body row: a description cell followed by blank/bar cells
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartRow {
    /// Activity label shown in the description column
    pub description: String,
    pub cells: Vec<Cell>,
}

/// A single chart cell
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// Empty week column
    Blank,
    /// Activity bar spanning `weeks` columns
    Bar {
        weeks: i64,
        /// Visit-type text shown inside the bar
        label: String,
        style: Option<BarStyle>,
    },
}

/// Style category of a chart bar, derived from the visit type
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BarStyle {
    Primary,
    Success,
    Danger,
    Secondary,
    Info,
}

impl BarStyle {
    /// Visit-type to style mapping; unrecognized types carry no style
    pub fn for_visit(visit_type: &VisitType) -> Option<Self> {
        match visit_type {
            VisitType::Install => Some(BarStyle::Primary),
            VisitType::Training => Some(BarStyle::Success),
            VisitType::Repair => Some(BarStyle::Danger),
            VisitType::Travel => Some(BarStyle::Secondary),
            VisitType::SiteVisit => Some(BarStyle::Info),
            VisitType::Other(_) => None,
        }
    }

    /// CSS class used by the HTML table renderer
    pub fn table_class(&self) -> &'static str {
        match self {
            BarStyle::Primary => "table-primary",
            BarStyle::Success => "table-success",
            BarStyle::Danger => "table-danger",
            BarStyle::Secondary => "table-secondary",
            BarStyle::Info => "table-info",
        }
    }
}

// ============================================================================
// Print tables
// ============================================================================

/// Pre-formatted rows for the two print-friendly tables
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintTables {
    pub detail: Vec<DetailRow>,
    pub summary: Vec<SummaryRow>,
}

/// Detail table row: activity, technician, free-text details
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailRow {
    pub activity: String,
    pub technician: String,
    pub details: String,
}

/// Summary table row; dates and times are pre-formatted display text
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub activity: String,
    pub visit_type: String,
    pub start_date: String,
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
    pub avg_hrs: String,
    pub total_hrs: String,
    pub travel_day: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_styles_follow_visit_types() {
        assert_eq!(
            BarStyle::for_visit(&VisitType::Install),
            Some(BarStyle::Primary)
        );
        assert_eq!(
            BarStyle::for_visit(&VisitType::Training),
            Some(BarStyle::Success)
        );
        assert_eq!(
            BarStyle::for_visit(&VisitType::Repair),
            Some(BarStyle::Danger)
        );
        assert_eq!(
            BarStyle::for_visit(&VisitType::Travel),
            Some(BarStyle::Secondary)
        );
        assert_eq!(
            BarStyle::for_visit(&VisitType::SiteVisit),
            Some(BarStyle::Info)
        );
        assert_eq!(BarStyle::for_visit(&VisitType::Other("Audit".into())), None);
    }

    #[test]
    fn table_classes_match_the_stylesheet() {
        assert_eq!(BarStyle::Primary.table_class(), "table-primary");
        assert_eq!(BarStyle::Info.table_class(), "table-info");
    }
}
