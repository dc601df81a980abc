//! # visitplan-render
//!
//! Rendering backends for visitplan layout plans.
//!
//! This crate provides:
//! - Standalone HTML output: the Gantt table plus the two print tables
//! - Fixed-width text output for terminals
//! - Both implement the `Renderer` trait from `visitplan-core`
//!
//! ## Example
//!
//! ```rust,ignore
//! use visitplan_core::Renderer;
//! use visitplan_render::{HtmlRenderer, TextRenderer};
//!
//! let html = HtmlRenderer::new().title("Week 34").render(&chart, &tables)?;
//! let text = TextRenderer::new().render(&chart, &tables)?;
//! ```

pub mod html;
pub mod text;

pub use html::HtmlRenderer;
pub use text::TextRenderer;

/// Label of the corner cell at the top of the description column
pub const CORNER_LABEL: &str = "Activity Summary";

/// Shorten a label to `max` characters with a trailing ellipsis
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{head}…")
    }
}
