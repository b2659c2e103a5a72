//! Corpus input
//! Handles source detection, JSON loading and record shape validation

pub mod file_detector;
pub mod loader;

pub use loader::CorpusLoader;
