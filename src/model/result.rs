//! Named analysis artifacts produced by one run

use serde::{de, Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Multiset of strings. Ordered so that serialized output is reproducible.
pub type Counts = BTreeMap<String, u64>;

/// Lemma counts bucketed by part of speech
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PosTokens {
    pub all: Counts,
    pub verbs: Counts,
    pub nouns: Counts,
    pub adjectives: Counts,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillScore {
    pub skill: String,
    pub score: f64,
}

/// Undirected PMI edge; `source < target` always holds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillEdge {
    pub source: String,
    pub target: String,
    pub weight: f64,
}

/// Overload Degree Index of one posting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverloadScore {
    pub index: usize,
    pub role: Option<String>,
    pub company: Option<String>,
    pub odi: Option<f64>,
    pub flagged: bool,
}

/// Serialized without a tag. Empty maps and lists carry no shape, so reading a
/// payload back goes through [`Payload::from_named`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Frequencies(Counts),
    PosTokens(PosTokens),
    TopSkills(BTreeMap<String, Vec<SkillScore>>),
    Network(Vec<SkillEdge>),
    Overload(Vec<OverloadScore>),
}

impl Payload {
    /// Rebuild a payload from JSON, picking the variant from the result name
    pub fn from_named(name: &str, value: serde_json::Value) -> serde_json::Result<Self> {
        use serde_json::from_value;

        let payload = match name.split_once('.').map_or(name, |(prefix, _)| prefix) {
            "freq" => Payload::Frequencies(from_value(value)?),
            "pos" => Payload::PosTokens(from_value(value)?),
            "tfidf" => Payload::TopSkills(from_value(value)?),
            "graph" => Payload::Network(from_value(value)?),
            "swiss_knife" => Payload::Overload(from_value(value)?),
            other => {
                return Err(de::Error::custom(format!("unknown result name '{}'", other)));
            }
        };
        Ok(payload)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub name: String,
    pub payload: Payload,
}

impl<'de> Deserialize<'de> for AnalysisResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Stored {
            name: String,
            payload: serde_json::Value,
        }

        let stored = Stored::deserialize(deserializer)?;
        let payload = Payload::from_named(&stored.name, stored.payload).map_err(de::Error::custom)?;
        Ok(Self {
            name: stored.name,
            payload,
        })
    }
}

impl AnalysisResult {
    pub fn new(name: impl Into<String>, payload: Payload) -> Self {
        Self {
            name: name.into(),
            payload,
        }
    }
}
