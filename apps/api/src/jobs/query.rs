//! Query request parsing: turns loosely-typed surface params into a `QueryRequest`.
//!
//! Both the HTTP route and the callable action produce `JobSearchParams` and
//! convert through the same `QueryRequest::from_params`.

use serde::{Deserialize, Deserializer};

// ────────────────────────────────────────────────────────────────────────────
// Parsed request
// ────────────────────────────────────────────────────────────────────────────

/// Experience filter. Unrecognized values parse to `None` and filter nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
}

impl ExperienceLevel {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "entry" | "junior" | "entry-level" | "entry_level" => Some(Self::Entry),
            "mid" | "mid-level" | "mid_level" => Some(Self::Mid),
            "senior" => Some(Self::Senior),
            _ => None,
        }
    }
}

/// A requested employment type. The set of categories in source data is open,
/// so unknown tags are kept verbatim and matched by substring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmploymentTag {
    FullTime,
    PartTime,
    Contract,
    Internship,
    Remote,
    Other(String),
}

impl EmploymentTag {
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = normalize_tag(raw);
        if normalized.is_empty() {
            return None;
        }

        Some(match normalized.as_str() {
            "fulltime" => Self::FullTime,
            "parttime" => Self::PartTime,
            "contract" => Self::Contract,
            "internship" => Self::Internship,
            "remote" => Self::Remote,
            _ => Self::Other(normalized),
        })
    }
}

/// Lowercases and strips `-`, `_` and spaces: `Full-Time` → `fulltime`.
pub fn normalize_tag(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Date,
    Salary,
}

impl SortKey {
    /// Anything other than `salary` sorts by recency.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("salary") {
            Self::Salary
        } else {
            Self::Date
        }
    }
}

/// Input to the query engine. Built per call and discarded afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryRequest {
    pub query: Option<String>,
    pub location: Option<String>,
    pub experience: Option<ExperienceLevel>,
    pub employment_types: Vec<EmploymentTag>,
    pub date_posted_within_days: Option<u32>,
    pub min_salary: Option<f64>,
    pub sort_by: SortKey,
    /// 1-based, always ≥ 1.
    pub page: usize,
}

impl Default for QueryRequest {
    fn default() -> Self {
        Self {
            query: None,
            location: None,
            experience: None,
            employment_types: Vec::new(),
            date_posted_within_days: None,
            min_salary: None,
            sort_by: SortKey::Date,
            page: 1,
        }
    }
}

impl QueryRequest {
    pub fn from_params(params: JobSearchParams) -> Self {
        Self {
            query: non_blank(params.query),
            location: non_blank(params.location),
            experience: params.experience.as_deref().and_then(ExperienceLevel::parse),
            employment_types: params
                .job_type
                .iter()
                .filter_map(|t| EmploymentTag::parse(t))
                .collect(),
            date_posted_within_days: params
                .date_posted
                .as_deref()
                .and_then(|d| d.trim().parse::<u32>().ok()),
            min_salary: params
                .min_salary
                .as_deref()
                .and_then(|s| s.trim().parse::<f64>().ok())
                .filter(|s| s.is_finite()),
            sort_by: params
                .sort_by
                .as_deref()
                .map(SortKey::parse)
                .unwrap_or_default(),
            page: params
                .page
                .as_deref()
                .and_then(|p| p.trim().parse::<i64>().ok())
                .map(|p| p.max(1) as usize)
                .unwrap_or(1),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// ────────────────────────────────────────────────────────────────────────────
// Raw surface params
// ────────────────────────────────────────────────────────────────────────────

/// Raw parameters as both surfaces receive them. Numeric fields stay textual
/// until `QueryRequest::from_params` so non-numeric input degrades to "absent"
/// instead of rejecting the call.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobSearchParams {
    pub query: Option<String>,
    pub location: Option<String>,
    pub experience: Option<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub job_type: Vec<String>,
    #[serde(deserialize_with = "text_or_number")]
    pub date_posted: Option<String>,
    #[serde(deserialize_with = "text_or_number")]
    pub min_salary: Option<String>,
    #[serde(deserialize_with = "text_or_number")]
    pub page: Option<String>,
    pub sort_by: Option<String>,
}

impl JobSearchParams {
    /// Builds params from decoded query-string pairs. `jobType` may repeat;
    /// for every other key the last occurrence wins.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();

        for (key, value) in pairs {
            match key.as_str() {
                "query" => params.query = Some(value),
                "location" => params.location = Some(value),
                "experience" => params.experience = Some(value),
                "jobType" => params.job_type.push(value),
                "datePosted" => params.date_posted = Some(value),
                "minSalary" => params.min_salary = Some(value),
                "page" => params.page = Some(value),
                "sortBy" => params.sort_by = Some(value),
                _ => {}
            }
        }

        params
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<TextOrNumber>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        TextOrNumber::Text(s) => s,
        TextOrNumber::Number(n) => n.to_string(),
    }))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

/// `jobType` may be a single string, as a lone query-string pair would be.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<OneOrMany>::deserialize(deserializer)?;
    Ok(match value {
        Some(OneOrMany::One(s)) => vec![s],
        Some(OneOrMany::Many(v)) => v,
        None => Vec::new(),
    })
}
