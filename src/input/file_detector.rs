//! Corpus source detection

use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub enum SourceKind {
    /// Directory of `*.json` files
    Directory,
    /// One JSON file holding a record or an array of records
    JsonFile,
    Unknown,
}

impl SourceKind {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "json" => SourceKind::JsonFile,
            _ => SourceKind::Unknown,
        }
    }

    pub fn detect(path: &Path) -> Self {
        if path.is_dir() {
            return SourceKind::Directory;
        }
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(SourceKind::Unknown)
    }
}
