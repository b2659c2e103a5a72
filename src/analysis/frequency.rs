//! Frequency counting over a single column

use crate::model::{Corpus, Counts, FieldValue};
use crate::processing::TextPipeline;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How the values of a column are turned into countable strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldMode {
    /// Each value is one opaque label
    Categorical,
    /// Each value is a list of tags; tags are counted individually
    TagList,
    /// Each value is free text; lemmas are counted
    FreeText,
}

pub(crate) fn bump(counts: &mut Counts, key: impl Into<String>) {
    *counts.entry(key.into()).or_insert(0) += 1;
}

/// Count the values of one column.
///
/// A column whose first non-null value is a list is flattened as tags whatever
/// `mode` says. Values that do not fit the chosen path are skipped.
pub fn frequencies(pipeline: &TextPipeline, values: &[FieldValue], mode: FieldMode) -> Counts {
    let present: Vec<&FieldValue> = values.iter().filter(|v| !v.is_null()).collect();
    let mut counts = Counts::new();

    let Some(first) = present.first() else {
        return counts;
    };

    if mode == FieldMode::TagList || matches!(first, FieldValue::List(_)) {
        for value in &present {
            if let FieldValue::List(tags) = value {
                for tag in tags {
                    bump(&mut counts, tag.to_lowercase());
                }
            }
        }
    } else if mode == FieldMode::FreeText {
        for value in &present {
            if let FieldValue::Text(text) = value {
                for lemma in pipeline.normalize(text) {
                    bump(&mut counts, lemma);
                }
            }
        }
    } else {
        for value in &present {
            if let FieldValue::Text(text) = value {
                bump(&mut counts, text.to_lowercase());
            }
        }
    }

    counts
}

/// The `n` most frequent entries, highest count first, ties in key order
pub fn most_common(counts: &Counts, n: usize) -> Vec<(String, u64)> {
    let mut entries: Vec<(String, u64)> = counts.iter().map(|(k, v)| (k.clone(), *v)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.truncate(n);
    entries
}

/// Value counts for scalar columns such as salaries and years of experience.
/// Columns unknown to the schema and to every record are left out.
pub fn number_frequencies(corpus: &Corpus, columns: &[&str]) -> BTreeMap<String, Counts> {
    let mut result = BTreeMap::new();

    for column in columns {
        if !corpus.has_field(column) {
            continue;
        }

        let mut counts = Counts::new();
        for value in corpus.field_values(column) {
            let key = match value {
                FieldValue::Number(n) => render_number(n),
                FieldValue::Bool(b) => b.to_string(),
                FieldValue::Text(s) => s,
                FieldValue::Null | FieldValue::List(_) => continue,
            };
            bump(&mut counts, key);
        }
        result.insert(column.to_string(), counts);
    }

    result
}

fn render_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::JobRecord;

    fn pipeline() -> TextPipeline {
        TextPipeline::with_defaults(&[]).unwrap()
    }

    fn tags(items: &[&str]) -> FieldValue {
        FieldValue::List(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_tag_list_total_is_conserved() {
        let values = vec![
            tags(&["Python", "aws"]),
            FieldValue::Null,
            tags(&["python"]),
            tags(&[]),
        ];

        let counts = frequencies(&pipeline(), &values, FieldMode::TagList);

        assert_eq!(counts.get("python"), Some(&2));
        assert_eq!(counts.get("aws"), Some(&1));
        assert_eq!(counts.values().sum::<u64>(), 3);
    }

    #[test]
    fn test_list_values_are_flattened_regardless_of_mode() {
        let values = vec![tags(&["docker"]), tags(&["docker", "k8s"])];

        let counts = frequencies(&pipeline(), &values, FieldMode::Categorical);

        assert_eq!(counts.get("docker"), Some(&2));
        assert_eq!(counts.get("k8s"), Some(&1));
    }

    #[test]
    fn test_categorical_lowercases_and_skips_non_strings() {
        let values = vec![
            FieldValue::Text("Senior".into()),
            FieldValue::Text("senior".into()),
            FieldValue::Number(3.0),
            FieldValue::Bool(true),
            FieldValue::Text("Junior".into()),
        ];

        let counts = frequencies(&pipeline(), &values, FieldMode::Categorical);

        assert_eq!(counts.get("senior"), Some(&2));
        assert_eq!(counts.get("junior"), Some(&1));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_free_text_counts_lemmas() {
        let values = vec![
            FieldValue::Text("data_scientist".into()),
            FieldValue::Text("Data Engineer".into()),
        ];

        let counts = frequencies(&pipeline(), &values, FieldMode::FreeText);

        assert_eq!(counts.get("data"), Some(&2));
        assert_eq!(counts.get("scientist"), Some(&1));
        assert_eq!(counts.get("engineer"), Some(&1));
    }

    #[test]
    fn test_empty_input_yields_empty_counts() {
        for mode in [FieldMode::Categorical, FieldMode::TagList, FieldMode::FreeText] {
            assert!(frequencies(&pipeline(), &[], mode).is_empty());
            assert!(frequencies(&pipeline(), &[FieldValue::Null], mode).is_empty());
        }
    }

    #[test]
    fn test_most_common_orders_by_count_then_key() {
        let mut counts = Counts::new();
        counts.insert("b".into(), 2);
        counts.insert("a".into(), 2);
        counts.insert("c".into(), 5);
        counts.insert("d".into(), 1);

        let top = most_common(&counts, 3);

        assert_eq!(
            top,
            vec![("c".to_string(), 5), ("a".to_string(), 2), ("b".to_string(), 2)]
        );
        // A tie at the cut keeps the smaller key
        assert_eq!(
            most_common(&counts, 2),
            vec![("c".to_string(), 5), ("a".to_string(), 2)]
        );
    }

    #[test]
    fn test_number_frequencies() {
        let corpus = Corpus::new(vec![
            JobRecord {
                years_experience_min: Some(3.0),
                salary_eur_min: Some(52000.5),
                ..Default::default()
            },
            JobRecord {
                years_experience_min: Some(3.0),
                ..Default::default()
            },
        ]);

        let result =
            number_frequencies(&corpus, &["years_experience_min", "salary_eur_min", "unknown"]);

        assert_eq!(result["years_experience_min"].get("3"), Some(&2));
        assert_eq!(result["salary_eur_min"].get("52000.5"), Some(&1));
        assert!(!result.contains_key("unknown"));
    }
}
