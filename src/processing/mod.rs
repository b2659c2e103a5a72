//! Text processing: the linguistic pipeline shared by every analysis

pub mod lexicon;
pub mod tagger;
pub mod text_pipeline;

pub use tagger::RuleTagger;
pub use text_pipeline::{Annotator, PosTag, TextPipeline, Token};
