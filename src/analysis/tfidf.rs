//! Role-distinctive skills: TF-IDF over one pseudo-document per role

use crate::model::{Corpus, SkillScore};
use crate::processing::TextPipeline;
use log::debug;
use ndarray::{Array1, Array2, Axis};
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

fn term_regex() -> &'static Regex {
    static TERM: OnceLock<Regex> = OnceLock::new();
    // Two or more word characters, as a standard bag-of-words vectorizer does
    TERM.get_or_init(|| Regex::new(r"\b\w\w+\b").expect("term pattern is valid"))
}

/// Build the cleaned pseudo-document of every role, in first-seen role order
pub fn role_documents(pipeline: &TextPipeline, corpus: &Corpus) -> Vec<(String, String)> {
    let mut order: Vec<String> = Vec::new();
    let mut skills: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for record in corpus {
        let Some(role) = &record.role else {
            continue;
        };
        let bag = skills.entry(role.clone()).or_insert_with(|| {
            order.push(role.clone());
            Vec::new()
        });
        bag.extend(record.skills().cloned());
    }

    order
        .into_iter()
        .map(|role| {
            let joined = skills.get(&role).map(|bag| bag.join(" ")).unwrap_or_default();
            let document = pipeline.normalize(&joined).join(" ");
            (role, document)
        })
        .collect()
}

/// Smoothed, L2-normalised TF-IDF matrix (documents x vocabulary).
/// The vocabulary is sorted, which fixes the tie order between equal scores.
pub fn tfidf_matrix(documents: &[&str]) -> (Vec<String>, Array2<f64>) {
    let tokenized: Vec<Vec<&str>> = documents
        .iter()
        .map(|doc| term_regex().find_iter(doc).map(|m| m.as_str()).collect())
        .collect();

    let vocabulary: Vec<String> = tokenized
        .iter()
        .flatten()
        .map(|term| term.to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let index: BTreeMap<&str, usize> = vocabulary
        .iter()
        .enumerate()
        .map(|(i, term)| (term.as_str(), i))
        .collect();

    let mut matrix = Array2::<f64>::zeros((documents.len(), vocabulary.len()));
    for (row, terms) in tokenized.iter().enumerate() {
        for term in terms {
            if let Some(&col) = index.get(term) {
                matrix[[row, col]] += 1.0;
            }
        }
    }

    let n_docs = documents.len() as f64;
    let document_frequency: Array1<f64> = matrix
        .map(|&tf| if tf > 0.0 { 1.0 } else { 0.0 })
        .sum_axis(Axis(0));
    let idf = document_frequency.mapv(|df| ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0);

    matrix *= &idf;
    for mut row in matrix.rows_mut() {
        let norm = row.dot(&row).sqrt();
        if norm > 0.0 {
            row /= norm;
        }
    }

    (vocabulary, matrix)
}

/// Top `top_k` distinctive skills per role. Roles whose cleaned document is empty are absent.
pub fn tfidf_top_skills(
    pipeline: &TextPipeline,
    corpus: &Corpus,
    top_k: usize,
) -> BTreeMap<String, Vec<SkillScore>> {
    let documents = role_documents(pipeline, corpus);

    if documents.iter().all(|(_, doc)| doc.trim().is_empty()) {
        debug!("No role has a non-empty skill document; skipping TF-IDF");
        return BTreeMap::new();
    }

    let texts: Vec<&str> = documents.iter().map(|(_, doc)| doc.as_str()).collect();
    let (vocabulary, matrix) = tfidf_matrix(&texts);
    debug!(
        "TF-IDF over {} roles and {} terms",
        documents.len(),
        vocabulary.len()
    );

    let mut result = BTreeMap::new();
    for (row, (role, _)) in matrix.rows().into_iter().zip(&documents) {
        let mut ranked: Vec<(usize, f64)> = row
            .iter()
            .enumerate()
            .map(|(col, &score)| (col, score))
            .filter(|&(_, score)| score > 0.0)
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(top_k);

        if ranked.is_empty() {
            continue;
        }

        let skills = ranked
            .into_iter()
            .map(|(col, score)| SkillScore {
                skill: vocabulary[col].clone(),
                score,
            })
            .collect();
        result.insert(role.clone(), skills);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::JobRecord;

    fn pipeline() -> TextPipeline {
        TextPipeline::with_defaults(&[]).unwrap()
    }

    fn record(role: Option<&str>, languages: &[&str], tools: &[&str]) -> JobRecord {
        JobRecord {
            role: role.map(String::from),
            programming_languages: languages.iter().map(|s| s.to_string()).collect(),
            frameworks_tools: tools.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_distinctive_skills_rank_first() {
        let corpus = Corpus::new(vec![
            record(Some("backend"), &["python", "rust"], &["docker"]),
            record(Some("backend"), &["rust"], &["docker"]),
            record(Some("frontend"), &["typescript"], &["react", "docker"]),
            record(None, &["cobol"], &[]),
        ]);

        let result = tfidf_top_skills(&pipeline(), &corpus, 10);

        assert_eq!(result.len(), 2);
        let backend = &result["backend"];
        assert_eq!(backend[0].skill, "rust");
        assert!(backend.iter().all(|s| s.score > 0.0));
        assert!(backend.windows(2).all(|w| w[0].score >= w[1].score));
        assert!(!result.values().flatten().any(|s| s.skill == "cobol"));
    }

    #[test]
    fn test_two_role_scores_match_smoothed_idf() {
        let corpus = Corpus::new(vec![
            record(Some("backend"), &["rust"], &["docker"]),
            record(Some("frontend"), &[], &["react", "docker"]),
        ]);

        let result = tfidf_top_skills(&pipeline(), &corpus, 10);

        // n = 2: docker is in both documents (idf 1), rust only in one (idf ln 1.5 + 1)
        let idf_rust = (3.0_f64 / 2.0).ln() + 1.0;
        let norm = (1.0 + idf_rust * idf_rust).sqrt();
        let backend = &result["backend"];
        assert_eq!(backend.len(), 2);
        assert_eq!(backend[0].skill, "rust");
        assert!((backend[0].score - idf_rust / norm).abs() < 1e-12);
        assert!((backend[0].score - 0.814802).abs() < 1e-6);
        assert_eq!(backend[1].skill, "docker");
        assert!((backend[1].score - 0.579739).abs() < 1e-6);

        let frontend = &result["frontend"];
        assert_eq!(frontend[0].skill, "react");
        assert!((frontend[0].score - 0.814802).abs() < 1e-6);
    }

    #[test]
    fn test_top_k_truncates() {
        let corpus = Corpus::new(vec![
            record(Some("data"), &["python", "r", "scala", "julia"], &["spark"]),
            record(Some("web"), &["javascript"], &[]),
        ]);

        let result = tfidf_top_skills(&pipeline(), &corpus, 2);

        assert_eq!(result["data"].len(), 2);
    }

    #[test]
    fn test_all_empty_documents_yield_empty_map() {
        let corpus = Corpus::new(vec![
            record(Some("backend"), &[], &[]),
            record(Some("frontend"), &["and", "or"], &[]),
        ]);

        assert!(tfidf_top_skills(&pipeline(), &corpus, 10).is_empty());
        assert!(tfidf_top_skills(&pipeline(), &Corpus::default(), 10).is_empty());
    }

    #[test]
    fn test_role_with_empty_document_is_absent() {
        let corpus = Corpus::new(vec![
            record(Some("backend"), &["rust"], &[]),
            record(Some("manager"), &[], &[]),
        ]);

        let result = tfidf_top_skills(&pipeline(), &corpus, 10);

        assert!(result.contains_key("backend"));
        assert!(!result.contains_key("manager"));
    }

    #[test]
    fn test_matrix_rows_are_unit_length() {
        let (vocabulary, matrix) = tfidf_matrix(&["go go docker", "react docker"]);

        assert_eq!(vocabulary, vec!["docker", "go", "react"]);
        for row in matrix.rows() {
            assert!((row.dot(&row) - 1.0).abs() < 1e-9);
        }
        // A term present in every document gets the minimum idf of 1
        let shared = matrix[[1, 0]];
        let unique = matrix[[1, 2]];
        assert!(unique > shared);
    }
}
