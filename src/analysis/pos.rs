//! Part-of-speech bucketing of free-text columns

use crate::analysis::frequency::bump;
use crate::model::{FieldValue, PosTokens};
use crate::processing::{PosTag, TextPipeline};

/// Count content lemmas of a column, split into verb, noun and adjective buckets.
/// Each item of a list value is tagged as its own phrase.
pub fn pos_tokens(pipeline: &TextPipeline, values: &[FieldValue]) -> PosTokens {
    let mut result = PosTokens::default();

    let phrases = values.iter().flat_map(|value| match value {
        FieldValue::Text(text) => vec![text.as_str()],
        FieldValue::List(items) => items.iter().map(String::as_str).collect(),
        _ => Vec::new(),
    });

    for phrase in phrases {
        for token in pipeline.content_tokens(phrase) {
            let bucket = match token.pos {
                PosTag::Verb => Some(&mut result.verbs),
                PosTag::Noun => Some(&mut result.nouns),
                PosTag::Adj => Some(&mut result.adjectives),
                _ => None,
            };
            if let Some(bucket) = bucket {
                bump(bucket, token.lemma.clone());
            }
            bump(&mut result.all, token.lemma);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipeline() -> TextPipeline {
        TextPipeline::with_defaults(&[]).unwrap()
    }

    #[test]
    fn test_responsibilities_are_bucketed() {
        let values = vec![
            FieldValue::List(vec![
                "design_scalable_systems".to_string(),
                "mentor_junior_engineers".to_string(),
            ]),
            FieldValue::Null,
            FieldValue::List(vec!["build_reliable_pipelines".to_string()]),
        ];

        let tokens = pos_tokens(&pipeline(), &values);

        assert_eq!(tokens.verbs.get("design"), Some(&1));
        assert_eq!(tokens.verbs.get("mentor"), Some(&1));
        assert_eq!(tokens.verbs.get("build"), Some(&1));
        assert_eq!(tokens.nouns.get("system"), Some(&1));
        assert_eq!(tokens.nouns.get("pipeline"), Some(&1));
        assert_eq!(tokens.adjectives.get("scalable"), Some(&1));
        assert_eq!(tokens.adjectives.get("reliable"), Some(&1));
        assert_eq!(tokens.all.values().sum::<u64>(), 9);
    }

    #[test]
    fn test_tokens_outside_buckets_still_count_in_all() {
        let values = vec![FieldValue::Text("deploy 3 services quickly".to_string())];

        let tokens = pos_tokens(&pipeline(), &values);

        assert_eq!(tokens.all.get("3"), Some(&1));
        assert_eq!(tokens.all.get("quickly"), Some(&1));
        assert!(!tokens.nouns.contains_key("3"));
        assert!(!tokens.adjectives.contains_key("quickly"));
    }

    #[test]
    fn test_objects_of_verbs_are_nouns() {
        let values = vec![FieldValue::List(vec![
            "write_code".to_string(),
            "run_code_review".to_string(),
            "oversee_cloud_migrations".to_string(),
        ])];

        let tokens = pos_tokens(&pipeline(), &values);

        assert_eq!(tokens.verbs.get("write"), Some(&1));
        assert_eq!(tokens.verbs.get("run"), Some(&1));
        assert_eq!(tokens.verbs.get("oversee"), Some(&1));
        assert_eq!(tokens.nouns.get("code"), Some(&2));
        assert_eq!(tokens.nouns.get("review"), Some(&1));
        assert_eq!(tokens.nouns.get("migration"), Some(&1));
        assert_eq!(tokens.verbs.values().sum::<u64>(), 3);
    }

    #[test]
    fn test_empty_input_yields_empty_buckets() {
        let tokens = pos_tokens(&pipeline(), &[]);

        assert_eq!(tokens, PosTokens::default());
    }
}
