//! Skill co-occurrence network weighted by pointwise mutual information

use crate::model::{Corpus, SkillEdge};
use crate::processing::TextPipeline;
use log::debug;
use std::collections::{BTreeMap, BTreeSet};

/// Presence counts over a corpus: how many postings mention each skill and each skill pair
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cooccurrence {
    pub total: u64,
    pub skill_freq: BTreeMap<String, u64>,
    pub pair_freq: BTreeMap<(String, String), u64>,
}

impl Cooccurrence {
    pub fn count(pipeline: &TextPipeline, corpus: &Corpus) -> Self {
        let mut stats = Self {
            total: corpus.len() as u64,
            ..Default::default()
        };

        for record in corpus {
            // Presence, not raw counts
            let skills: BTreeSet<String> =
                pipeline.normalize(&record.skill_phrase()).into_iter().collect();
            let skills: Vec<&String> = skills.iter().collect();

            for skill in &skills {
                *stats.skill_freq.entry((*skill).clone()).or_insert(0) += 1;
            }
            for (i, first) in skills.iter().enumerate() {
                for second in &skills[i + 1..] {
                    let pair = ((*first).clone(), (*second).clone());
                    *stats.pair_freq.entry(pair).or_insert(0) += 1;
                }
            }
        }

        stats
    }

    /// PMI in bits, or `None` when any probability is zero
    pub fn pmi(&self, first: &str, second: &str) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        let (a, b) = if first <= second { (first, second) } else { (second, first) };
        let total = self.total as f64;

        let p_x = *self.skill_freq.get(a)? as f64 / total;
        let p_y = *self.skill_freq.get(b)? as f64 / total;
        let p_xy = *self.pair_freq.get(&(a.to_string(), b.to_string()))? as f64 / total;

        if p_x > 0.0 && p_y > 0.0 && p_xy > 0.0 {
            Some((p_xy / (p_x * p_y)).log2())
        } else {
            None
        }
    }
}

/// Undirected skill edges with positive PMI and at least `min_cofrequency` shared postings
pub fn skill_network(
    pipeline: &TextPipeline,
    corpus: &Corpus,
    min_cofrequency: u64,
) -> Vec<SkillEdge> {
    let stats = Cooccurrence::count(pipeline, corpus);

    let edges: Vec<SkillEdge> = stats
        .pair_freq
        .iter()
        .filter(|(_, co_freq)| **co_freq >= min_cofrequency)
        .filter_map(|((source, target), _)| {
            let weight = stats.pmi(source, target)?;
            (weight > 0.0).then(|| SkillEdge {
                source: source.clone(),
                target: target.clone(),
                weight,
            })
        })
        .collect();

    debug!(
        "PMI network: {} skills, {} pairs, {} edges kept",
        stats.skill_freq.len(),
        stats.pair_freq.len(),
        edges.len()
    );

    edges
}
