//! Overload Degree Index: unique skills per responsibility verb

use crate::model::{Corpus, JobRecord, OverloadScore};
use crate::processing::TextPipeline;
use std::collections::HashSet;

/// Postings above this ODI are flagged as overloaded
pub const OVERLOAD_THRESHOLD: f64 = 1.0;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Number of distinct skill tags, compared case-insensitively
pub fn unique_skill_count(record: &JobRecord) -> usize {
    record
        .skills()
        .map(|skill| skill.trim().to_lowercase())
        .collect::<HashSet<_>>()
        .len()
}

pub fn score_record(pipeline: &TextPipeline, index: usize, record: &JobRecord) -> OverloadScore {
    let num_skills = unique_skill_count(record);
    let num_verbs = pipeline.count_phrase_verbs(&record.responsibilities);

    // Without verbs the ratio is undefined and the posting is never flagged
    let odi = (num_verbs > 0).then(|| round2(num_skills as f64 / num_verbs as f64));

    OverloadScore {
        index,
        role: record.role.clone(),
        company: record.company.clone(),
        odi,
        flagged: odi.is_some_and(|value| value > OVERLOAD_THRESHOLD),
    }
}

/// One score per record, in corpus order
pub fn overload_scores(pipeline: &TextPipeline, corpus: &Corpus) -> Vec<OverloadScore> {
    corpus
        .iter()
        .enumerate()
        .map(|(index, record)| score_record(pipeline, index, record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipeline() -> TextPipeline {
        TextPipeline::with_defaults(&[]).unwrap()
    }

    fn record(skills: &[&str], responsibilities: &[&str]) -> JobRecord {
        JobRecord {
            role: Some("backend".to_string()),
            company: Some("acme".to_string()),
            programming_languages: skills.iter().map(|s| s.to_string()).collect(),
            responsibilities: responsibilities.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_ratio_and_flagging() {
        let corpus = Corpus::new(vec![
            record(&["python", "aws"], &["build_apis", "deploy_services"]),
            record(&["python", "aws", "docker"], &["maintain_infrastructure"]),
            record(&["python"], &[]),
        ]);

        let scores = overload_scores(&pipeline(), &corpus);

        assert_eq!(scores.len(), 3);
        assert_eq!(scores[0].odi, Some(1.0));
        assert!(!scores[0].flagged);
        assert_eq!(scores[1].odi, Some(3.0));
        assert!(scores[1].flagged);
        assert_eq!(scores[2].odi, None);
        assert!(!scores[2].flagged);
        assert_eq!(scores.iter().map(|s| s.index).collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(scores[1].company.as_deref(), Some("acme"));
    }

    #[test]
    fn test_zero_verbs_never_flagged() {
        let many_skills: Vec<String> = (0..20).map(|i| format!("tool{}", i)).collect();
        let skills: Vec<&str> = many_skills.iter().map(String::as_str).collect();
        let corpus = Corpus::new(vec![record(&skills, &["strong_communication_skills"])]);

        let scores = overload_scores(&pipeline(), &corpus);

        assert_eq!(scores[0].odi, None);
        assert!(!scores[0].flagged);
    }

    #[test]
    fn test_varied_imperatives_are_counted() {
        let corpus = Corpus::new(vec![
            record(
                &["terraform", "azure", "kubernetes"],
                &[
                    "oversee_cloud_migrations",
                    "shape_the_product_roadmap",
                    "take_ownership_of_releases",
                ],
            ),
            record(
                &["python", "sql", "airflow", "spark"],
                &["meet_delivery_deadlines", "write_code"],
            ),
            record(&["java"], &["run_code_review", "build_test_automation"]),
        ]);

        let scores = overload_scores(&pipeline(), &corpus);

        assert_eq!(scores[0].odi, Some(1.0));
        assert!(!scores[0].flagged);
        assert_eq!(scores[1].odi, Some(2.0));
        assert!(scores[1].flagged);
        assert_eq!(scores[2].odi, Some(0.5));
    }

    #[test]
    fn test_duplicate_skills_counted_once_and_rounded() {
        let corpus = Corpus::new(vec![record(
            &["Python", "python", "go", "rust", "java"],
            &["design_systems", "build_services", "maintain_infrastructure"],
        )]);

        let scores = overload_scores(&pipeline(), &corpus);

        assert_eq!(unique_skill_count(&corpus.records()[0]), 4);
        assert_eq!(scores[0].odi, Some(1.33));
        assert!(scores[0].flagged);
    }
}
