//! Chart layout: sorting, week span, and per-row cell placement.

use chrono::{DateTime, Duration, FixedOffset};
use std::cmp::Ordering;
use visitplan_core::{week, Activity, BarStyle, Cell, ChartPlan, ChartRow, LayoutError};

/// Stable sort ascending by start instant, ties broken by bar duration.
///
/// Activities without a valid start sort after all dated ones; full ties keep
/// their input order, so an unchanged form always lays out identically.
pub fn sort_activities(activities: &mut [Activity]) {
    activities.sort_by(|a, b| match (a.start, b.start) {
        (Some(x), Some(y)) => x
            .cmp(&y)
            .then_with(|| a.duration_weeks().cmp(&b.duration_weeks())),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

/// Lay out the chart for an already-sorted collection.
///
/// The timeline span comes from an explicit min/max reduction over the
/// renderable activities' week boundaries rather than the sorted boundary
/// elements, so header and body column counts always agree. Offsets are
/// clamped at zero.
pub fn layout_chart(sorted: &[Activity]) -> Result<ChartPlan, LayoutError> {
    let renderable: Vec<&Activity> = sorted.iter().filter(|a| a.is_renderable()).collect();

    let (chart_start, chart_end) =
        timeline_bounds(&renderable).ok_or(LayoutError::NoRenderableActivities)?;
    let span = week::weeks_between(chart_start, chart_end).max(1);

    let mut headers = Vec::with_capacity(span as usize);
    let mut monday = chart_start;
    for _ in 0..span {
        headers.push(week::week_label(monday));
        monday += Duration::days(7);
    }

    let rows = renderable
        .iter()
        .filter_map(|a| layout_row(a, chart_start, chart_end))
        .collect();

    Ok(ChartPlan { headers, rows })
}

/// Minimum start-of-week and maximum end-of-week over the collection
fn timeline_bounds(
    renderable: &[&Activity],
) -> Option<(DateTime<FixedOffset>, DateTime<FixedOffset>)> {
    let mut bounds: Option<(DateTime<FixedOffset>, DateTime<FixedOffset>)> = None;

    for activity in renderable {
        let (sow, eow) = match (activity.start_of_week(), activity.end_of_week()) {
            (Some(sow), Some(eow)) => (sow, eow),
            _ => continue,
        };
        bounds = Some(match bounds {
            Some((start, end)) => (start.min(sow), end.max(eow)),
            None => (sow, eow),
        });
    }

    bounds
}

fn layout_row(
    activity: &Activity,
    chart_start: DateTime<FixedOffset>,
    chart_end: DateTime<FixedOffset>,
) -> Option<ChartRow> {
    let sow = activity.start_of_week()?;
    let eow = activity.end_of_week()?;

    let leading = week::weeks_between(chart_start, sow).max(0) as usize;
    let trailing = week::weeks_between(eow, chart_end).max(0) as usize;
    let weeks = activity.duration_weeks()?.max(1);

    let mut cells = vec![Cell::Blank; leading];
    cells.push(Cell::Bar {
        weeks,
        label: activity.visit_type.to_string(),
        style: BarStyle::for_visit(&activity.visit_type),
    });
    cells.extend(std::iter::repeat(Cell::Blank).take(trailing));

    Some(ChartRow {
        description: activity.activity.clone(),
        cells,
    })
}
