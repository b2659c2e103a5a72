//! Error handling for the job signals engine

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalystError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Record {index}: field '{field}' must be a list of strings, found {found}")]
    DataShape {
        index: usize,
        field: String,
        found: String,
    },

    #[error("Text pipeline initialization failed: {0}")]
    PipelineInit(String),

    #[error("Analysis '{name}' failed: {source}")]
    StepFailed {
        name: String,
        #[source]
        source: Box<AnalystError>,
    },

    #[error("Processing error: {0}")]
    Processing(String),
}

pub type Result<T> = std::result::Result<T, AnalystError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for AnalystError {
    fn from(err: anyhow::Error) -> Self {
        AnalystError::Processing(err.to_string())
    }
}

impl AnalystError {
    /// Wrap an error with the name of the analysis step that produced it
    pub fn in_step(self, name: impl Into<String>) -> Self {
        AnalystError::StepFailed {
            name: name.into(),
            source: Box::new(self),
        }
    }
}
