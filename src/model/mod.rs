//! Data model: input records and output artifacts

pub mod record;
pub mod result;

pub use record::{Corpus, FieldValue, JobRecord, SKILL_FIELDS};
pub use result::{AnalysisResult, Counts, OverloadScore, Payload, PosTokens, SkillEdge, SkillScore};
