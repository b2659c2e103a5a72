//! Report envelope handed to the result sink

use crate::model::{AnalysisResult, Payload};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One completed run: every result of the plan, or nothing at all
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// When the run finished
    pub generated_at: DateTime<Utc>,

    /// Number of job records in the corpus snapshot
    pub record_count: usize,

    /// Results in plan order
    pub results: Vec<AnalysisResult>,
}

impl AnalysisReport {
    pub fn new(record_count: usize, results: Vec<AnalysisResult>) -> Self {
        Self {
            generated_at: Utc::now(),
            record_count,
            results,
        }
    }

    pub fn get(&self, name: &str) -> Option<&Payload> {
        self.results
            .iter()
            .find(|result| result.name == name)
            .map(|result| &result.payload)
    }

    pub fn flagged_count(&self) -> usize {
        match self.get("swiss_knife") {
            Some(Payload::Overload(scores)) => scores.iter().filter(|s| s.flagged).count(),
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OverloadScore;

    #[test]
    fn test_lookup_by_name() {
        let report = AnalysisReport::new(
            2,
            vec![AnalysisResult::new(
                "swiss_knife",
                Payload::Overload(vec![
                    OverloadScore {
                        index: 0,
                        role: None,
                        company: None,
                        odi: Some(2.5),
                        flagged: true,
                    },
                    OverloadScore {
                        index: 1,
                        role: None,
                        company: None,
                        odi: None,
                        flagged: false,
                    },
                ]),
            )],
        );

        assert!(report.get("graph.skills").is_none());
        assert_eq!(report.flagged_count(), 1);
    }
}
