//! visitplan CLI - Field Visit Scheduling Engine
//!
//! Command-line interface for parsing activity rows, laying out the weekly
//! chart, and rendering it as text, HTML, or JSON.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use visitplan_core::{assemble, Activity, ChartPlan, PrintTables, Renderer};
use visitplan_layout::{estimate_total_hours, plan};
use visitplan_render::{HtmlRenderer, TextRenderer};

#[derive(Parser)]
#[command(name = "visitplan")]
#[command(author, version, about = "Field visit scheduling engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a rows file and report what would be charted
    Check {
        /// Input rows file (.toml or .json)
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Lay out the weekly chart and render it
    Chart {
        /// Input rows file (.toml or .json)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = ChartFormat::Text)]
        format: ChartFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Document title for HTML output
        #[arg(short, long, default_value = "Activity Schedule")]
        title: String,
    },

    /// Print the detail and summary tables
    Tables {
        /// Input rows file (.toml or .json)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = TableFormat::Text)]
        format: TableFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ChartFormat {
    Text,
    Html,
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TableFormat {
    Text,
    Json,
}

/// Chart and tables together, for `--format json`
#[derive(Serialize)]
struct RenderPlan<'a> {
    chart: &'a ChartPlan,
    tables: &'a PrintTables,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { file } => check(&file),
        Commands::Chart {
            file,
            format,
            output,
            title,
        } => chart(&file, format, output.as_deref(), &title),
        Commands::Tables {
            file,
            format,
            output,
        } => tables(&file, format, output.as_deref()),
    }
}

/// Parse, assemble, and fill in missing total-hours estimates
fn load_activities(file: &std::path::Path) -> Result<Vec<Activity>> {
    let rows = visitplan_parser::parse_file(file)
        .with_context(|| format!("cannot load rows from {}", file.display()))?;
    debug!(rows = rows.len(), "parsed rows file");

    let mut activities = assemble(&rows);
    for activity in &mut activities {
        if activity.total_hrs.is_none() {
            activity.total_hrs = estimate_total_hours(activity);
        }
    }
    Ok(activities)
}

fn check(file: &std::path::Path) -> Result<()> {
    let activities = load_activities(file)?;
    let renderable = activities.iter().filter(|a| a.is_renderable()).count();
    let summarizable = activities.iter().filter(|a| a.is_summarizable()).count();

    println!("{}: {} rows", file.display(), activities.len());
    println!("  chartable:    {renderable}");
    println!("  summarizable: {summarizable}");

    for (index, activity) in activities.iter().enumerate() {
        if !activity.is_renderable() {
            let reason = if activity.activity.is_empty() {
                "no activity label"
            } else {
                "invalid start or end date"
            };
            println!("  row {} skipped: {}", index + 1, reason);
        }
    }
    Ok(())
}

fn chart(
    file: &std::path::Path,
    format: ChartFormat,
    output: Option<&std::path::Path>,
    title: &str,
) -> Result<()> {
    let activities = load_activities(file)?;
    let (chart, tables) = plan(&activities)?;
    debug!(weeks = chart.week_count(), rows = chart.rows.len(), "laid out chart");

    let rendered = match format {
        ChartFormat::Text => TextRenderer::new().render(&chart, &tables)?,
        ChartFormat::Html => HtmlRenderer::new().title(title).render(&chart, &tables)?,
        ChartFormat::Json => {
            let mut json = serde_json::to_string_pretty(&RenderPlan {
                chart: &chart,
                tables: &tables,
            })?;
            json.push('\n');
            json
        }
    };

    emit(output, &rendered)
}

fn tables(
    file: &std::path::Path,
    format: TableFormat,
    output: Option<&std::path::Path>,
) -> Result<()> {
    let mut activities = load_activities(file)?;
    visitplan_layout::sort_activities(&mut activities);
    let tables = visitplan_layout::print_tables(&activities);

    let rendered = match format {
        TableFormat::Text => visitplan_render::text::render_tables(&tables),
        TableFormat::Json => {
            let mut json = serde_json::to_string_pretty(&tables)?;
            json.push('\n');
            json
        }
    };

    emit(output, &rendered)
}

fn emit(output: Option<&std::path::Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, content)
            .with_context(|| format!("cannot write {}", path.display())),
        None => {
            print!("{content}");
            Ok(())
        }
    }
}
