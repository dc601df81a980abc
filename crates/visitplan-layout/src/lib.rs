//! # visitplan-layout
//!
//! Layout engine for visitplan: turns an assembled activity collection into
//! a week-aligned [`ChartPlan`] and the two print tables.
//!
//! The pipeline is pure and synchronous:
//!
//! 1. Stable sort by start instant, ties broken by bar duration
//! 2. Timeline span from the minimum start-of-week to the maximum
//!    end-of-week over all renderable activities
//! 3. Per-activity leading blanks, bar width, trailing blanks
//! 4. Print-table rows with display-formatted dates and times
//!
//! ## Example
//!
//! ```rust
//! use visitplan_core::{Activity, FieldMap};
//! use visitplan_layout::plan;
//!
//! let mut fields = FieldMap::new();
//! fields.insert("activity".into(), "Site survey".into());
//! fields.insert("technician".into(), "Lee".into());
//! fields.insert("visit-type".into(), "Site Visit".into());
//! fields.insert("start-date".into(), "2021-08-23".into());
//! fields.insert("start-time".into(), "8".into());
//! fields.insert("end-date".into(), "2021-08-25".into());
//! fields.insert("end-time".into(), "17".into());
//!
//! let activities = vec![Activity::from_fields(&fields)];
//! let (chart, tables) = plan(&activities).unwrap();
//! assert_eq!(chart.headers, vec!["8/23"]);
//! assert_eq!(tables.summary.len(), 1);
//! ```

pub mod chart;
pub mod hours;
pub mod tables;

pub use chart::{layout_chart, sort_activities};
pub use hours::estimate_total_hours;
pub use tables::print_tables;

use visitplan_core::{Activity, ChartPlan, LayoutError, PrintTables};

/// Run the full layout pass over an activity collection.
///
/// Sorts a working copy, lays out the chart, and builds the print tables
/// from the same sorted order. Fails only when nothing is renderable.
pub fn plan(activities: &[Activity]) -> Result<(ChartPlan, PrintTables), LayoutError> {
    let mut sorted = activities.to_vec();
    sort_activities(&mut sorted);
    let chart = layout_chart(&sorted)?;
    let tables = print_tables(&sorted);
    Ok((chart, tables))
}
