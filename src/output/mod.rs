//! Report assembly and output formatting

pub mod formatter;
pub mod report;

pub use formatter::{ConsoleFormatter, JsonFormatter, OutputFormatter, ReportPayload};
pub use report::RecommendationReport;
