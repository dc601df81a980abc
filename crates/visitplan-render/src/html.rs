//! Standalone HTML output.
//!
//! Reproduces the entry form's chart as a self-contained document: a Gantt
//! `<table>` with one `<th>` per week and `colspan` bar cells, followed by
//! the detail and summary print tables. All user text is escaped.

use crate::CORNER_LABEL;
use visitplan_core::{Cell, ChartPlan, PrintTables, RenderError, Renderer};

/// HTML renderer configuration
#[derive(Clone, Debug)]
pub struct HtmlRenderer {
    /// Document title
    pub title: String,
    /// Emit the detail and summary tables after the chart
    pub include_tables: bool,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self {
            title: "Activity Schedule".into(),
            include_tables: true,
        }
    }
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Emit only the chart table
    pub fn chart_only(mut self) -> Self {
        self.include_tables = false;
        self
    }

    fn render_chart(&self, chart: &ChartPlan, out: &mut String) {
        out.push_str("<table class=\"gantt\">\n<thead>\n<tr>\n");
        out.push_str(&format!(
            "<th scope=\"col\">{}</th>\n",
            escape(CORNER_LABEL)
        ));
        for label in &chart.headers {
            out.push_str(&format!("<th scope=\"col\">{}</th>\n", escape(label)));
        }
        out.push_str("</tr>\n</thead>\n<tbody>\n");

        for row in &chart.rows {
            out.push_str("<tr>\n");
            out.push_str(&format!(
                "<td class=\"activity-description\">{}</td>\n",
                escape(&row.description)
            ));
            for cell in &row.cells {
                match cell {
                    Cell::Blank => out.push_str("<td></td>\n"),
                    Cell::Bar {
                        weeks,
                        label,
                        style,
                    } => {
                        let class = style
                            .map(|s| format!(" class=\"{}\"", s.table_class()))
                            .unwrap_or_default();
                        out.push_str(&format!(
                            "<td colspan=\"{}\"{}>{}</td>\n",
                            weeks,
                            class,
                            escape(label)
                        ));
                    }
                }
            }
            out.push_str("</tr>\n");
        }
        out.push_str("</tbody>\n</table>\n");
    }

    fn render_tables(&self, tables: &PrintTables, out: &mut String) {
        out.push_str("<h2>Detail</h2>\n<table id=\"detail-table\">\n<thead>\n<tr>");
        for header in ["Activity", "Technician", "Details"] {
            out.push_str(&format!("<th scope=\"col\">{header}</th>"));
        }
        out.push_str("</tr>\n</thead>\n<tbody>\n");
        for row in &tables.detail {
            out.push_str(&format!(
                "<tr><td class=\"activity-description\">{}</td><td>{}</td><td>{}</td></tr>\n",
                escape(&row.activity),
                escape(&row.technician),
                escape(&row.details)
            ));
        }
        out.push_str("</tbody>\n</table>\n");

        out.push_str("<h2>Summary</h2>\n<table id=\"summary-table\">\n<thead>\n<tr>");
        for header in [
            "Activity",
            "Visit Type",
            "Start Date",
            "Start Time",
            "End Date",
            "End Time",
            "Avg Hrs",
            "Total Hrs",
            "Travel Day",
        ] {
            out.push_str(&format!("<th scope=\"col\">{header}</th>"));
        }
        out.push_str("</tr>\n</thead>\n<tbody>\n");
        for row in &tables.summary {
            out.push_str("<tr>");
            for value in [
                &row.activity,
                &row.visit_type,
                &row.start_date,
                &row.start_time,
                &row.end_date,
                &row.end_time,
                &row.avg_hrs,
                &row.total_hrs,
                &row.travel_day,
            ] {
                out.push_str(&format!("<td>{}</td>", escape(value)));
            }
            out.push_str("</tr>\n");
        }
        out.push_str("</tbody>\n</table>\n");
    }
}

impl Renderer for HtmlRenderer {
    type Output = String;

    fn render(
        &self,
        chart: &ChartPlan,
        tables: &PrintTables,
    ) -> Result<Self::Output, RenderError> {
        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
        out.push_str(&format!("<title>{}</title>\n", escape(&self.title)));
        out.push_str(STYLE);
        out.push_str("</head>\n<body>\n");
        out.push_str(&format!("<h1>{}</h1>\n", escape(&self.title)));

        self.render_chart(chart, &mut out);
        if self.include_tables {
            self.render_tables(tables, &mut out);
        }

        out.push_str("</body>\n</html>\n");
        Ok(out)
    }
}

/// Minimal escape for text nodes and attribute values
fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const STYLE: &str = "<style>\n\
    body { font-family: system-ui, sans-serif; margin: 2rem; }\n\
    table { border-collapse: collapse; margin-bottom: 2rem; }\n\
    th, td { border: 1px solid #dee2e6; padding: 0.3rem 0.6rem; }\n\
    th { background: #f8f9fa; text-align: left; }\n\
    td.activity-description { white-space: nowrap; }\n\
    .gantt td { min-width: 3.5rem; }\n\
    .table-primary { background: #cfe2ff; }\n\
    .table-success { background: #d1e7dd; }\n\
    .table-danger { background: #f8d7da; }\n\
    .table-secondary { background: #e2e3e5; }\n\
    .table-info { background: #cff4fc; }\n\
    </style>\n";
