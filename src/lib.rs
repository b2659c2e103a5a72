//! Job market signals library

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod output;
pub mod processing;

pub use analysis::Analyst;
pub use config::Config;
pub use error::{AnalystError, Result};
pub use input::CorpusLoader;
pub use model::{AnalysisResult, Corpus, JobRecord, Payload};
pub use output::{AnalysisReport, JsonFileSink, ResultSink};
pub use processing::TextPipeline;
