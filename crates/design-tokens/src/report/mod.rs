//! Report rendering for validation results.
//!
//! Text reports are rendered through a MiniJinja template whose `style`
//! filter applies `console` styles when color is enabled.

mod filters;
mod output;
mod renderer;

pub use output::OutputMode;
pub use renderer::{render_report, ReportError, ReportRenderer, SUCCESS_MESSAGE};
