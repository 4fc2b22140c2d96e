//! Remote job-search client: the only module that talks to the upstream API.
//!
//! Upstream is a JSearch-style RapidAPI endpoint. Its records are loosely
//! shaped, so every field is optional on the wire and defaulted during
//! mapping instead of rejecting the response.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::config::RemoteConfig;
use crate::jobs::query::{EmploymentTag, ExperienceLevel, QueryRequest};
use crate::models::job::{JobRecord, REMOTE_CITY};

/// Search term sent when the caller gave none; upstream requires one.
const DEFAULT_SEARCH_TERM: &str = "developer";

const DEFAULT_EMPLOYER: &str = "Unknown Company";
const DEFAULT_TITLE: &str = "Job Position";
const DEFAULT_DESCRIPTION: &str = "No description available.";
const DEFAULT_EMPLOYMENT_TYPE: &str = "FULLTIME";
const DEFAULT_COUNTRY: &str = "United States";
const DEFAULT_APPLY_URL: &str = "#";

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Remote source timed out after {0:?}")]
    Timeout(Duration),
}

/// A source of already-filtered, already-paginated job listings.
///
/// Carried by the gateway as `Arc<dyn JobSource>`.
#[async_trait]
pub trait JobSource: Send + Sync {
    async fn fetch(&self, request: &QueryRequest, now: i64)
        -> Result<Vec<JobRecord>, RemoteError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Option<Vec<Value>>,
}

/// One upstream record. Every attribute may be missing, null or of the wrong
/// type; such attributes read as absent.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RemoteJob {
    #[serde(deserialize_with = "lenient")]
    pub job_id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub employer_name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub employer_logo: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub job_employment_type: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub job_title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub job_description: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub job_apply_link: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub job_city: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub job_country: Option<String>,
    #[serde(deserialize_with = "lenient_timestamp")]
    pub job_posted_at_timestamp: Option<i64>,
    #[serde(deserialize_with = "lenient_amount")]
    pub job_min_salary: Option<f64>,
    #[serde(deserialize_with = "lenient_amount")]
    pub job_max_salary: Option<f64>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Whole seconds; fractional timestamps are truncated.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    })
}

/// Salaries arrive as numbers or numeric strings.
fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let amount = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(amount.filter(|a| a.is_finite()))
}

impl RemoteJob {
    /// Maps into the canonical shape. `index` builds a fallback id; `now`
    /// stands in for a missing posting time.
    pub fn into_record(self, index: usize, now: i64) -> JobRecord {
        JobRecord {
            id: present(self.job_id).unwrap_or_else(|| format!("remote-{index}")),
            employer_name: present(self.employer_name)
                .unwrap_or_else(|| DEFAULT_EMPLOYER.to_string()),
            employer_logo_url: present(self.employer_logo),
            employment_type: present(self.job_employment_type)
                .unwrap_or_else(|| DEFAULT_EMPLOYMENT_TYPE.to_string()),
            title: present(self.job_title).unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            description: present(self.job_description)
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            apply_url: present(self.job_apply_link)
                .unwrap_or_else(|| DEFAULT_APPLY_URL.to_string()),
            city: present(self.job_city).unwrap_or_else(|| REMOTE_CITY.to_string()),
            country: present(self.job_country).unwrap_or_else(|| DEFAULT_COUNTRY.to_string()),
            // clamp: a posting time in the future is read as "just posted"
            posted_at_epoch_seconds: self
                .job_posted_at_timestamp
                .map_or(now, |ts| ts.min(now)),
            min_salary: self.job_min_salary.filter(|s| *s >= 0.0),
            max_salary: self.job_max_salary.filter(|s| *s >= 0.0),
        }
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct JSearchClient {
    client: Client,
    base_url: String,
    api_key: String,
    api_host: String,
}

impl JSearchClient {
    pub fn new(config: &RemoteConfig, timeout: Duration) -> Result<Self, RemoteError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            api_host: config.api_host.clone(),
        })
    }
}

#[async_trait]
impl JobSource for JSearchClient {
    async fn fetch(
        &self,
        request: &QueryRequest,
        now: i64,
    ) -> Result<Vec<JobRecord>, RemoteError> {
        let params = upstream_params(request);
        debug!("Remote job search: {:?}", params);

        let response = self
            .client
            .get(format!("{}/search", self.base_url))
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", &self.api_host)
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RemoteError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;

        Ok(parsed
            .data
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .filter_map(|(i, item)| match serde_json::from_value::<RemoteJob>(item) {
                Ok(job) => Some(job.into_record(i, now)),
                Err(e) => {
                    debug!("Skipping unreadable remote record {i}: {e}");
                    None
                }
            })
            .collect())
    }
}

/// Translates a request into upstream query parameters.
pub fn upstream_params(request: &QueryRequest) -> Vec<(&'static str, String)> {
    let term = request.query.as_deref().unwrap_or(DEFAULT_SEARCH_TERM);
    let query = match request.location.as_deref() {
        Some(location) => format!("{term} in {location}"),
        None => term.to_string(),
    };

    let mut params = vec![
        ("query", query),
        ("page", request.page.to_string()),
        ("num_pages", "1".to_string()),
        (
            "date_posted",
            date_posted_bucket(request.date_posted_within_days).to_string(),
        ),
    ];

    let employment_types: Vec<&str> = request
        .employment_types
        .iter()
        .filter_map(|tag| match tag {
            EmploymentTag::FullTime => Some("FULLTIME"),
            EmploymentTag::PartTime => Some("PARTTIME"),
            EmploymentTag::Contract => Some("CONTRACTOR"),
            EmploymentTag::Internship => Some("INTERN"),
            EmploymentTag::Remote | EmploymentTag::Other(_) => None,
        })
        .collect();
    if !employment_types.is_empty() {
        params.push(("employment_types", employment_types.join(",")));
    }

    let wants_remote = request.employment_types.contains(&EmploymentTag::Remote)
        || request
            .location
            .as_deref()
            .is_some_and(|l| l.to_lowercase().contains("remote"));
    if wants_remote {
        params.push(("remote_jobs_only", "true".to_string()));
    }

    match request.experience {
        Some(ExperienceLevel::Entry) => {
            params.push(("job_requirements", "under_3_years_experience".to_string()))
        }
        Some(ExperienceLevel::Mid | ExperienceLevel::Senior) => {
            params.push(("job_requirements", "more_than_3_years_experience".to_string()))
        }
        None => {}
    }

    params
}

/// Upstream only knows coarse recency buckets; round the window up to one.
fn date_posted_bucket(days: Option<u32>) -> &'static str {
    match days {
        None => "all",
        Some(0..=1) => "today",
        Some(2..=3) => "3days",
        Some(4..=7) => "week",
        Some(8..=30) => "month",
        Some(_) => "all",
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
