//! Report renderers for the aggregated tally
//!
//! Renderers are pure functions of an [`IssueTally`]: they never recompute
//! counts and never perform I/O.

use crate::tally::IssueTally;

/// Render a finished tally in a specific format
pub trait ReportRenderer {
    fn render(&self, tally: &IssueTally) -> String;
}

/// Which sections a report carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportView {
    /// Every breakdown: presence, fix status, other values, unfixed categories
    #[default]
    Full,
    /// Fix-status totals and the breakdown of free-form fix descriptions
    FixDescriptions,
}

pub mod json;
pub mod table;
pub mod text;

pub use json::JsonRenderer;
pub use table::TableBuilder;
pub use text::TextRenderer;
