//! Statistical analyses over a corpus of job records

pub mod frequency;
pub mod orchestrator;
pub mod overload;
pub mod pmi;
pub mod pos;
pub mod tfidf;

pub use frequency::FieldMode;
pub use orchestrator::{plan, AnalysisStep, Analyst};
