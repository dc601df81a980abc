//! Fixed-width text output for terminals.

use crate::{truncate, CORNER_LABEL};
use visitplan_core::{Cell, ChartPlan, PrintTables, RenderError, Renderer};

/// Text renderer configuration
#[derive(Clone, Debug)]
pub struct TextRenderer {
    /// Width of one week column in characters
    pub column_width: usize,
    /// Emit the detail and summary tables after the chart
    pub include_tables: bool,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            column_width: 9,
            include_tables: true,
        }
    }
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the week column width
    pub fn column_width(mut self, width: usize) -> Self {
        self.column_width = width.max(3);
        self
    }

    /// Emit only the chart
    pub fn chart_only(mut self) -> Self {
        self.include_tables = false;
        self
    }

    /// Render the chart grid alone
    pub fn render_chart(&self, chart: &ChartPlan) -> String {
        let desc_width = chart
            .rows
            .iter()
            .map(|row| row.description.chars().count())
            .chain(std::iter::once(CORNER_LABEL.len()))
            .max()
            .unwrap_or(0)
            .min(40);
        let w = self.column_width;

        let mut out = String::new();
        out.push_str(&pad_left_aligned(CORNER_LABEL, desc_width));
        out.push('|');
        for label in &chart.headers {
            out.push_str(&pad_center(label, w, ' '));
            out.push('|');
        }
        out.push('\n');

        let total = desc_width + 1 + chart.headers.len() * (w + 1);
        out.push_str(&"-".repeat(total));
        out.push('\n');

        for row in &chart.rows {
            out.push_str(&pad_left_aligned(&row.description, desc_width));
            out.push('|');
            for cell in &row.cells {
                match cell {
                    Cell::Blank => {
                        out.push_str(&" ".repeat(w));
                        out.push('|');
                    }
                    Cell::Bar { weeks, label, .. } => {
                        // A bar spanning n weeks swallows the n-1 inner separators.
                        // Deserialized plans may carry weeks < 1; render those
                        // as a single column instead of underflowing.
                        let span = (*weeks).max(1) as usize;
                        let width = span * w + (span - 1);
                        out.push_str(&pad_center(label, width, '='));
                        out.push('|');
                    }
                }
            }
            out.push('\n');
        }
        out
    }
}

impl Renderer for TextRenderer {
    type Output = String;

    fn render(
        &self,
        chart: &ChartPlan,
        tables: &PrintTables,
    ) -> Result<Self::Output, RenderError> {
        let mut out = self.render_chart(chart);
        if self.include_tables {
            out.push('\n');
            out.push_str(&render_tables(tables));
        }
        Ok(out)
    }
}

/// Render the detail and summary tables as aligned text columns
pub fn render_tables(tables: &PrintTables) -> String {
    let mut out = String::new();

    out.push_str("Detail\n");
    out.push_str(&text_table(
        &["Activity", "Technician", "Details"],
        &tables
            .detail
            .iter()
            .map(|r| {
                vec![
                    r.activity.clone(),
                    r.technician.clone(),
                    r.details.clone(),
                ]
            })
            .collect::<Vec<_>>(),
    ));

    out.push_str("\nSummary\n");
    out.push_str(&text_table(
        &[
            "Activity",
            "Visit Type",
            "Start Date",
            "Start Time",
            "End Date",
            "End Time",
            "Avg Hrs",
            "Total Hrs",
            "Travel Day",
        ],
        &tables
            .summary
            .iter()
            .map(|r| {
                vec![
                    r.activity.clone(),
                    r.visit_type.clone(),
                    r.start_date.clone(),
                    r.start_time.clone(),
                    r.end_date.clone(),
                    r.end_time.clone(),
                    r.avg_hrs.clone(),
                    r.total_hrs.clone(),
                    r.travel_day.clone(),
                ]
            })
            .collect::<Vec<_>>(),
    ));

    out
}

fn text_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for (i, header) in headers.iter().enumerate() {
        out.push_str(&pad_left_aligned(header, widths[i]));
        out.push_str("  ");
    }
    out.push('\n');
    out.push_str(&"-".repeat(widths.iter().sum::<usize>() + 2 * widths.len()));
    out.push('\n');
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            out.push_str(&pad_left_aligned(cell, widths[i]));
            out.push_str("  ");
        }
        out.push('\n');
    }
    out
}

fn pad_left_aligned(s: &str, width: usize) -> String {
    let s = truncate(s, width);
    let padding = width.saturating_sub(s.chars().count());
    format!("{}{}", s, " ".repeat(padding))
}

fn pad_center(s: &str, width: usize, fill: char) -> String {
    let s = truncate(s, width);
    let padding = width.saturating_sub(s.chars().count());
    let left = padding / 2;
    format!(
        "{}{}{}",
        fill.to_string().repeat(left),
        s,
        fill.to_string().repeat(padding - left)
    )
}
