//! Result persistence

use crate::error::Result;
use crate::output::formatter::{JsonFormatter, OutputFormatter};
use crate::output::report::AnalysisReport;
use log::info;
use std::path::PathBuf;

/// Accepts the results of one complete run
pub trait ResultSink {
    fn store(&mut self, report: &AnalysisReport) -> Result<()>;
}

/// Writes the report as JSON to a file, creating parent directories
pub struct JsonFileSink {
    path: PathBuf,
    pretty: bool,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>, pretty: bool) -> Self {
        Self {
            path: path.into(),
            pretty,
        }
    }
}

impl ResultSink for JsonFileSink {
    fn store(&mut self, report: &AnalysisReport) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = JsonFormatter::new(self.pretty).format_report(report)?;
        std::fs::write(&self.path, json)?;
        info!(
            "Stored {} results to {}",
            report.results.len(),
            self.path.display()
        );
        Ok(())
    }
}
