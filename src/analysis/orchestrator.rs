//! The analysis engine: runs the fixed plan of analyses over one corpus snapshot

use crate::analysis::frequency::{self, FieldMode};
use crate::analysis::{overload, pmi, pos, tfidf};
use crate::config::{AnalysisConfig, Config};
use crate::error::{AnalystError, Result};
use crate::model::{
    AnalysisResult, Corpus, Counts, OverloadScore, Payload, PosTokens, SkillEdge, SkillScore,
};
use crate::processing::TextPipeline;
use log::{debug, info};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::Instant;

/// Columns tabulated after the role table, with the shape of their values
pub const FREQUENCY_COLUMNS: [(&str, FieldMode); 7] = [
    ("level", FieldMode::Categorical),
    ("location", FieldMode::Categorical),
    ("programming_languages", FieldMode::TagList),
    ("frameworks_tools", FieldMode::TagList),
    ("cloud_platforms", FieldMode::TagList),
    ("databases", FieldMode::TagList),
    ("employment_type", FieldMode::Categorical),
];

/// Numeric columns of the extraction schema
pub const NUMBER_COLUMNS: [&str; 4] = [
    "years_experience_min",
    "years_experience_max",
    "salary_eur_min",
    "salary_eur_max",
];

/// One entry of the analysis plan
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnalysisStep {
    RoleFrequency,
    Frequency(&'static str, FieldMode),
    PosTokens(&'static str),
    TfidfSkills,
    SkillNetwork,
    Overload,
}

impl AnalysisStep {
    pub fn name(&self) -> String {
        match self {
            AnalysisStep::RoleFrequency => "freq.role".to_string(),
            AnalysisStep::Frequency(column, _) => format!("freq.{}", column),
            AnalysisStep::PosTokens(column) => format!("pos.{}", column),
            AnalysisStep::TfidfSkills => "tfidf.skills".to_string(),
            AnalysisStep::SkillNetwork => "graph.skills".to_string(),
            AnalysisStep::Overload => "swiss_knife".to_string(),
        }
    }
}

/// The fixed plan, in output order
pub fn plan() -> Vec<AnalysisStep> {
    let mut steps = vec![AnalysisStep::RoleFrequency];
    steps.extend(
        FREQUENCY_COLUMNS
            .iter()
            .map(|&(column, mode)| AnalysisStep::Frequency(column, mode)),
    );
    steps.push(AnalysisStep::PosTokens("responsibilities"));
    steps.push(AnalysisStep::TfidfSkills);
    steps.push(AnalysisStep::SkillNetwork);
    steps.push(AnalysisStep::Overload);
    steps
}

/// Analysis engine. Holds no per-run state; every method is a pure function of its inputs.
#[derive(Debug, Clone)]
pub struct Analyst {
    pipeline: TextPipeline,
    config: AnalysisConfig,
}

impl Analyst {
    pub fn new(pipeline: TextPipeline, config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { pipeline, config })
    }

    /// Engine with the built-in rule tagger, configured from `config`
    pub fn from_config(config: &Config) -> Result<Self> {
        let pipeline = TextPipeline::with_defaults(&config.text.extra_stop_words)?;
        Self::new(pipeline, config.analysis.clone())
    }

    pub fn pipeline(&self) -> &TextPipeline {
        &self.pipeline
    }

    /// Counts for one column; fails for a column neither the schema nor any record knows
    pub fn frequencies(&self, corpus: &Corpus, column: &str, mode: FieldMode) -> Result<Counts> {
        if !corpus.has_field(column) {
            return Err(AnalystError::UnknownField(column.to_string()));
        }
        Ok(frequency::frequencies(&self.pipeline, &corpus.field_values(column), mode))
    }

    /// Role counts over role lemmas, trimmed to the `role_top_n` most common
    pub fn role_frequencies(&self, corpus: &Corpus) -> Result<Counts> {
        let counts = self.frequencies(corpus, "role", FieldMode::FreeText)?;
        Ok(frequency::most_common(&counts, self.config.role_top_n)
            .into_iter()
            .collect())
    }

    pub fn pos_tokens(&self, corpus: &Corpus, column: &str) -> Result<PosTokens> {
        if !corpus.has_field(column) {
            return Err(AnalystError::UnknownField(column.to_string()));
        }
        Ok(pos::pos_tokens(&self.pipeline, &corpus.field_values(column)))
    }

    pub fn tfidf_top_skills(&self, corpus: &Corpus) -> BTreeMap<String, Vec<SkillScore>> {
        tfidf::tfidf_top_skills(&self.pipeline, corpus, self.config.top_k)
    }

    pub fn skill_network(&self, corpus: &Corpus) -> Vec<SkillEdge> {
        pmi::skill_network(&self.pipeline, corpus, self.config.min_cofrequency)
    }

    pub fn overload_scores(&self, corpus: &Corpus) -> Vec<OverloadScore> {
        overload::overload_scores(&self.pipeline, corpus)
    }

    pub fn number_frequencies(
        &self,
        corpus: &Corpus,
        columns: &[&str],
    ) -> BTreeMap<String, Counts> {
        frequency::number_frequencies(corpus, columns)
    }

    pub fn execute(&self, step: AnalysisStep, corpus: &Corpus) -> Result<AnalysisResult> {
        let started = Instant::now();
        let payload = match step {
            AnalysisStep::RoleFrequency => Payload::Frequencies(self.role_frequencies(corpus)?),
            AnalysisStep::Frequency(column, mode) => {
                Payload::Frequencies(self.frequencies(corpus, column, mode)?)
            }
            AnalysisStep::PosTokens(column) => Payload::PosTokens(self.pos_tokens(corpus, column)?),
            AnalysisStep::TfidfSkills => Payload::TopSkills(self.tfidf_top_skills(corpus)),
            AnalysisStep::SkillNetwork => Payload::Network(self.skill_network(corpus)),
            AnalysisStep::Overload => Payload::Overload(self.overload_scores(corpus)),
        };

        let name = step.name();
        debug!("{} computed in {:?}", name, started.elapsed());
        Ok(AnalysisResult::new(name, payload))
    }

    /// Run every analysis of the plan. Results follow plan order; any failure aborts the run.
    pub fn run(&self, corpus: &Corpus) -> Result<Vec<AnalysisResult>> {
        let started = Instant::now();
        let steps = plan();
        info!(
            "Running {} analyses over {} records{}",
            steps.len(),
            corpus.len(),
            if self.config.parallel { " in parallel" } else { "" }
        );

        let attempt = |step: &AnalysisStep| {
            self.execute(*step, corpus)
                .map_err(|e| e.in_step(step.name()))
        };

        let results: Vec<AnalysisResult> = if self.config.parallel {
            steps.par_iter().map(attempt).collect::<Result<_>>()?
        } else {
            steps.iter().map(attempt).collect::<Result<_>>()?
        };

        info!("Analysis run completed in {:?}", started.elapsed());
        Ok(results)
    }
}
