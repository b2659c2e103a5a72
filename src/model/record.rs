//! Job posting records and the corpus snapshot they form

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// The six skill-tag fields, in the order their tags are concatenated
pub const SKILL_FIELDS: [&str; 6] = [
    "programming_languages",
    "frameworks_tools",
    "cloud_platforms",
    "databases",
    "api_protocols",
    "methodologies",
];

/// Fields that must hold a list of strings when present
pub const LIST_FIELDS: [&str; 13] = [
    "benefits",
    "responsibilities",
    "required_core_skills",
    "desirable_skills",
    "programming_languages",
    "frameworks_tools",
    "databases",
    "cloud_platforms",
    "api_protocols",
    "methodologies",
    "mobile_technologies",
    "domain_keywords",
    "language_requirements",
];

/// One normalized job posting as produced by the upstream extractor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub employment_type: Option<String>,
    #[serde(default)]
    pub salary_eur_min: Option<f64>,
    #[serde(default)]
    pub salary_eur_max: Option<f64>,
    #[serde(default)]
    pub bonus_percent: Option<f64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub years_experience_min: Option<f64>,
    #[serde(default)]
    pub years_experience_max: Option<f64>,
    #[serde(default)]
    pub education_required: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub responsibilities: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub required_core_skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub desirable_skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub programming_languages: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub frameworks_tools: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub databases: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub cloud_platforms: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub api_protocols: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub methodologies: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub mobile_technologies: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub domain_keywords: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub language_requirements: Vec<String>,
    #[serde(default)]
    pub remote_work: Option<String>,
    #[serde(default)]
    pub work_permit_required: Option<bool>,
    #[serde(default)]
    pub visa_sponsorship: Option<bool>,
    #[serde(default)]
    pub contact_person: Option<String>,

    /// Columns the extractor emitted that this schema does not name
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// A single column value, as seen by the frequency counter
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Text(String),
    List(Vec<String>),
    Number(f64),
    Bool(bool),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    fn from_text(value: &Option<String>) -> Self {
        value.clone().map(FieldValue::Text).unwrap_or(FieldValue::Null)
    }

    fn from_number(value: Option<f64>) -> Self {
        value.map(FieldValue::Number).unwrap_or(FieldValue::Null)
    }

    fn from_bool(value: Option<bool>) -> Self {
        value.map(FieldValue::Bool).unwrap_or(FieldValue::Null)
    }
}

impl From<&serde_json::Value> for FieldValue {
    fn from(value: &serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => FieldValue::Null,
            Value::String(s) => FieldValue::Text(s.clone()),
            Value::Bool(b) => FieldValue::Bool(*b),
            Value::Number(n) => n.as_f64().map(FieldValue::Number).unwrap_or(FieldValue::Null),
            Value::Array(items) => FieldValue::List(
                items
                    .iter()
                    .filter_map(|item| match item {
                        Value::String(s) => Some(s.clone()),
                        Value::Number(n) => Some(n.to_string()),
                        Value::Bool(b) => Some(b.to_string()),
                        _ => None,
                    })
                    .collect(),
            ),
            // Nested objects have no countable shape
            Value::Object(_) => FieldValue::Null,
        }
    }
}

impl JobRecord {
    /// Generic column accessor. Returns `None` for a column this record does not carry.
    pub fn field(&self, name: &str) -> Option<FieldValue> {
        let value = match name {
            "company" => FieldValue::from_text(&self.company),
            "role" => FieldValue::from_text(&self.role),
            "level" => FieldValue::from_text(&self.level),
            "location" => FieldValue::from_text(&self.location),
            "employment_type" => FieldValue::from_text(&self.employment_type),
            "education_required" => FieldValue::from_text(&self.education_required),
            "remote_work" => FieldValue::from_text(&self.remote_work),
            "contact_person" => FieldValue::from_text(&self.contact_person),
            "salary_eur_min" => FieldValue::from_number(self.salary_eur_min),
            "salary_eur_max" => FieldValue::from_number(self.salary_eur_max),
            "bonus_percent" => FieldValue::from_number(self.bonus_percent),
            "years_experience_min" => FieldValue::from_number(self.years_experience_min),
            "years_experience_max" => FieldValue::from_number(self.years_experience_max),
            "work_permit_required" => FieldValue::from_bool(self.work_permit_required),
            "visa_sponsorship" => FieldValue::from_bool(self.visa_sponsorship),
            list => match self.list_field(list) {
                Some(items) => FieldValue::List(items.to_vec()),
                None => return self.extra.get(name).map(FieldValue::from),
            },
        };
        Some(value)
    }

    /// Whether `name` is one of the columns of the extraction schema
    pub fn is_schema_field(name: &str) -> bool {
        JobRecord::default().field(name).is_some()
    }

    fn list_field(&self, name: &str) -> Option<&[String]> {
        let items = match name {
            "benefits" => &self.benefits,
            "responsibilities" => &self.responsibilities,
            "required_core_skills" => &self.required_core_skills,
            "desirable_skills" => &self.desirable_skills,
            "programming_languages" => &self.programming_languages,
            "frameworks_tools" => &self.frameworks_tools,
            "databases" => &self.databases,
            "cloud_platforms" => &self.cloud_platforms,
            "api_protocols" => &self.api_protocols,
            "methodologies" => &self.methodologies,
            "mobile_technologies" => &self.mobile_technologies,
            "domain_keywords" => &self.domain_keywords,
            "language_requirements" => &self.language_requirements,
            _ => return None,
        };
        Some(items)
    }

    /// All skill tags across the six skill fields, in [`SKILL_FIELDS`] order
    pub fn skills(&self) -> impl Iterator<Item = &String> {
        SKILL_FIELDS
            .into_iter()
            .filter_map(move |name| self.list_field(name))
            .flatten()
    }

    /// Skill tags joined into one space-separated phrase
    pub fn skill_phrase(&self) -> String {
        self.skills().map(String::as_str).collect::<Vec<_>>().join(" ")
    }
}

/// Immutable, ordered snapshot of job records for one analysis run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Corpus {
    records: Vec<JobRecord>,
}

impl Corpus {
    pub fn new(records: Vec<JobRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[JobRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, JobRecord> {
        self.records.iter()
    }

    /// Values of one column across the corpus, in record order
    pub fn field_values(&self, name: &str) -> Vec<FieldValue> {
        self.records
            .iter()
            .map(|record| record.field(name).unwrap_or(FieldValue::Null))
            .collect()
    }

    /// Whether any record (or the schema itself) knows the column
    pub fn has_field(&self, name: &str) -> bool {
        JobRecord::is_schema_field(name)
            || self.records.iter().any(|record| record.extra.contains_key(name))
    }
}

impl From<Vec<JobRecord>> for Corpus {
    fn from(records: Vec<JobRecord>) -> Self {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a JobRecord;
    type IntoIter = std::slice::Iter<'a, JobRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
