//! Output: report envelope, formatters and result sinks

pub mod formatter;
pub mod report;
pub mod sink;

pub use report::AnalysisReport;
pub use sink::{JsonFileSink, ResultSink};
