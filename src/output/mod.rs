//! Output formatting for ranking, eligibility, roadmap, and explanation views

pub mod formatter;

pub use formatter::{ConsoleFormatter, JsonFormatter, OutputFormatter, Report};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Console,
    Json,
}
