//! Corpus loader for JSON job records

use crate::error::{AnalystError, Result};
use crate::input::file_detector::SourceKind;
use crate::model::record::LIST_FIELDS;
use crate::model::{Corpus, JobRecord};
use log::{debug, info, warn};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::fs;

#[derive(Debug, Clone, Default)]
pub struct CorpusLoader;

impl CorpusLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load every record under `path`, which is a `.json` file or a directory of them
    pub async fn load(&self, path: &Path) -> Result<Corpus> {
        if !path.exists() {
            return Err(AnalystError::InvalidInput(format!(
                "Corpus path does not exist: {}",
                path.display()
            )));
        }

        let values = match SourceKind::detect(path) {
            SourceKind::Directory => {
                info!("Loading corpus from directory: {}", path.display());
                let mut values = Vec::new();
                for file in self.json_files(path).await? {
                    values.extend(self.read_values(&file).await?);
                }
                values
            }
            SourceKind::JsonFile => {
                info!("Loading corpus from file: {}", path.display());
                self.read_values(path).await?
            }
            SourceKind::Unknown => {
                return Err(AnalystError::InvalidInput(format!(
                    "Unsupported corpus source: {}",
                    path.display()
                )));
            }
        };

        let corpus = parse_records(values)?;
        info!("Loaded {} job records", corpus.len());
        Ok(corpus)
    }

    /// `*.json` files directly inside `dir`, sorted by name
    async fn json_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut entries = fs::read_dir(dir).await?;
        let mut files = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if SourceKind::detect(&path) == SourceKind::JsonFile {
                files.push(path);
            } else {
                debug!("Skipping non-JSON entry: {}", path.display());
            }
        }

        if files.is_empty() {
            warn!("No JSON files found in {}", dir.display());
        }
        files.sort();
        Ok(files)
    }

    async fn read_values(&self, path: &Path) -> Result<Vec<Value>> {
        let content = fs::read_to_string(path).await?;
        let value: Value = serde_json::from_str(&content).map_err(|e| {
            AnalystError::InvalidInput(format!("Failed to parse '{}': {}", path.display(), e))
        })?;

        Ok(match value {
            Value::Array(items) => items,
            single => vec![single],
        })
    }
}

/// Validate and deserialize raw records, preserving their order
pub fn parse_records(values: Vec<Value>) -> Result<Corpus> {
    let mut records = Vec::with_capacity(values.len());

    for (index, value) in values.into_iter().enumerate() {
        validate_shape(index, &value)?;
        let record: JobRecord = serde_json::from_value(value).map_err(|e| {
            AnalystError::InvalidInput(format!("Record {}: {}", index, e))
        })?;
        records.push(record);
    }

    Ok(Corpus::new(records))
}

/// List-shaped fields must be arrays of strings (or null/absent)
pub fn validate_shape(index: usize, value: &Value) -> Result<()> {
    let Value::Object(fields) = value else {
        return Err(AnalystError::InvalidInput(format!(
            "Record {} is {}, expected an object",
            index,
            kind(value)
        )));
    };

    for field in LIST_FIELDS {
        match fields.get(field) {
            None | Some(Value::Null) => {}
            Some(Value::Array(items)) => {
                if let Some(item) = items.iter().find(|item| !item.is_string()) {
                    return Err(AnalystError::DataShape {
                        index,
                        field: field.to_string(),
                        found: format!("an array containing {}", kind(item)),
                    });
                }
            }
            Some(other) => {
                return Err(AnalystError::DataShape {
                    index,
                    field: field.to_string(),
                    found: kind(other).to_string(),
                });
            }
        }
    }

    Ok(())
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_skill_field_is_a_shape_error() {
        let values = vec![
            json!({"role": "backend", "databases": ["postgresql"]}),
            json!({"role": "frontend", "databases": "mysql"}),
        ];

        let err = parse_records(values).unwrap_err();

        match err {
            AnalystError::DataShape { index, field, found } => {
                assert_eq!(index, 1);
                assert_eq!(field, "databases");
                assert_eq!(found, "a string");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_non_string_tags_are_rejected() {
        let err = validate_shape(0, &json!({"methodologies": ["scrum", 3]})).unwrap_err();

        assert!(err.to_string().contains("methodologies"));
    }

    #[test]
    fn test_nulls_and_missing_lists_are_empty() {
        let corpus = parse_records(vec![json!({"role": null, "frameworks_tools": null})]).unwrap();

        assert_eq!(corpus.len(), 1);
        assert!(corpus.records()[0].frameworks_tools.is_empty());
        assert!(corpus.records()[0].role.is_none());
    }

    #[tokio::test]
    async fn test_directory_loading_is_sorted_by_file_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.json"), r#"{"company": "second"}"#).unwrap();
        std::fs::write(dir.path().join("a.json"), r#"[{"company": "first"}]"#).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let corpus = CorpusLoader::new().load(dir.path()).await.unwrap();

        let companies: Vec<_> = corpus.iter().map(|r| r.company.clone().unwrap()).collect();
        assert_eq!(companies, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_missing_path_is_invalid_input() {
        let result = CorpusLoader::new().load(Path::new("does/not/exist.json")).await;

        assert!(matches!(result, Err(AnalystError::InvalidInput(_))));
    }
}
