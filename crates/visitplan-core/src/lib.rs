//! # visitplan-core
//!
//! Core domain model for the visitplan scheduling engine.
//!
//! This crate provides:
//! - Domain types: `Activity`, `VisitType`, `FieldMap`
//! - Week-aligned date arithmetic (`week` module)
//! - Layout plan types: `ChartPlan`, `PrintTables`
//! - The `Renderer` trait and error types
//!
//! ## Example
//!
//! ```rust
//! use visitplan_core::{Activity, FieldMap};
//!
//! let mut fields = FieldMap::new();
//! fields.insert("activity".into(), "Install rack".into());
//! fields.insert("technician".into(), "Dana".into());
//! fields.insert("visit-type".into(), "Install".into());
//! fields.insert("start-date".into(), "2021-08-23".into());
//! fields.insert("start-time".into(), "05".into());
//! fields.insert("end-date".into(), "2021-08-27".into());
//! fields.insert("end-time".into(), "05".into());
//!
//! let activity = Activity::from_fields(&fields);
//! assert!(activity.is_renderable());
//! assert_eq!(activity.duration_weeks(), Some(1));
//! ```

pub mod activity;
pub mod plan;
pub mod week;

pub use activity::{assemble, Activity, FieldMap, VisitType};
pub use plan::{BarStyle, Cell, ChartPlan, ChartRow, DetailRow, PrintTables, SummaryRow};

use thiserror::Error;

// ============================================================================
// Traits
// ============================================================================

/// Output rendering over a computed layout plan.
///
/// The layout engine produces a `ChartPlan` and `PrintTables`; renderers turn
/// them into a concrete output format without re-reading the activities.
pub trait Renderer {
    type Output;

    /// Render a chart plan and its print tables to the output format
    fn render(&self, chart: &ChartPlan, tables: &PrintTables)
        -> Result<Self::Output, RenderError>;
}

// ============================================================================
// Errors
// ============================================================================

/// Layout error
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The collection holds no activity with a non-empty label and valid
    /// start/end instants, so there is nothing to place on the timeline.
    #[error("no renderable activities to lay out")]
    NoRenderableActivities,
}

/// Rendering error
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Format error: {0}")]
    Format(String),
}
