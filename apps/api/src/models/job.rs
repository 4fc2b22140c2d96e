use serde::{Deserialize, Serialize};

/// Sentinel city value used by listings that are not tied to an office.
pub const REMOTE_CITY: &str = "Remote";

/// Canonical job listing shape. Every source (seed data or remote API) is
/// normalized into this before it reaches a caller.
///
/// Field names on the wire follow the upstream job-search API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(rename = "job_id")]
    pub id: String,
    pub employer_name: String,
    #[serde(rename = "employer_logo")]
    pub employer_logo_url: Option<String>,
    #[serde(rename = "job_employment_type")]
    pub employment_type: String,
    #[serde(rename = "job_title")]
    pub title: String,
    #[serde(rename = "job_description")]
    pub description: String,
    #[serde(rename = "job_apply_link")]
    pub apply_url: String,
    #[serde(rename = "job_city")]
    pub city: String,
    #[serde(rename = "job_country")]
    pub country: String,
    #[serde(rename = "job_posted_at_timestamp")]
    pub posted_at_epoch_seconds: i64,
    #[serde(rename = "job_min_salary")]
    pub min_salary: Option<f64>,
    #[serde(rename = "job_max_salary")]
    pub max_salary: Option<f64>,
}

impl JobRecord {
    pub fn is_remote(&self) -> bool {
        self.city.eq_ignore_ascii_case(REMOTE_CITY)
    }

    /// `max_salary`, falling back to `min_salary`. `None` when neither is set.
    pub fn salary_ceiling(&self) -> Option<f64> {
        self.max_salary.or(self.min_salary)
    }
}

/// Derived pagination metadata. Only constructed by the paginator and the
/// gateway; callers never set these independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub total_jobs: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub page_size: usize,
}

/// Which branch of the gateway produced a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultSource {
    Remote,
    Local,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultPage {
    pub jobs: Vec<JobRecord>,
    pub metadata: PageMetadata,
    pub source: ResultSource,
}

impl ResultPage {
    /// The page returned when the local pipeline itself is broken.
    pub fn empty(current_page: usize, page_size: usize) -> Self {
        Self {
            jobs: Vec::new(),
            metadata: PageMetadata {
                total_jobs: 0,
                total_pages: 1,
                current_page,
                page_size,
            },
            source: ResultSource::Local,
        }
    }

    /// Wraps a page the upstream API already filtered and paginated.
    /// Upstream reports no totals, so the metadata is a lower bound.
    pub fn from_upstream(jobs: Vec<JobRecord>, current_page: usize, page_size: usize) -> Self {
        let current_page = current_page.max(1);
        let total_jobs = (current_page - 1)
            .saturating_mul(page_size)
            .saturating_add(jobs.len());

        Self {
            jobs,
            metadata: PageMetadata {
                total_jobs,
                total_pages: current_page,
                current_page,
                page_size,
            },
            source: ResultSource::Remote,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_job() -> JobRecord {
        JobRecord {
            id: "job-1".to_string(),
            employer_name: "Acme".to_string(),
            employer_logo_url: None,
            employment_type: "FULLTIME".to_string(),
            title: "Engineer".to_string(),
            description: "Build things".to_string(),
            apply_url: "#".to_string(),
            city: "remote".to_string(),
            country: "United States".to_string(),
            posted_at_epoch_seconds: 1_700_000_000,
            min_salary: Some(90_000.0),
            max_salary: None,
        }
    }

    #[test]
    fn test_job_record_serializes_with_upstream_field_names() {
        let value = serde_json::to_value(make_job()).unwrap();
        assert_eq!(value["job_id"], "job-1");
        assert_eq!(value["job_employment_type"], "FULLTIME");
        assert_eq!(value["job_posted_at_timestamp"], 1_700_000_000);
        assert_eq!(value["employer_logo"], json!(null));
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_is_remote_ignores_case() {
        assert!(make_job().is_remote());
    }

    #[test]
    fn test_salary_ceiling_falls_back_to_min() {
        let mut job = make_job();
        assert_eq!(job.salary_ceiling(), Some(90_000.0));
        job.max_salary = Some(120_000.0);
        assert_eq!(job.salary_ceiling(), Some(120_000.0));
        job.min_salary = None;
        job.max_salary = None;
        assert_eq!(job.salary_ceiling(), None);
    }

    #[test]
    fn test_metadata_serializes_camel_case() {
        let page = ResultPage::empty(1, 10);
        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(value["metadata"]["totalJobs"], 0);
        assert_eq!(value["metadata"]["totalPages"], 1);
        assert_eq!(value["metadata"]["currentPage"], 1);
        assert_eq!(value["metadata"]["pageSize"], 10);
        assert_eq!(value["source"], "local");
    }

    #[test]
    fn test_upstream_page_metadata_is_lower_bound() {
        let page = ResultPage::from_upstream(vec![make_job(), make_job()], 3, 10);
        assert_eq!(page.metadata.total_jobs, 22);
        assert_eq!(page.metadata.total_pages, 3);
        assert_eq!(page.metadata.current_page, 3);
        assert_eq!(page.source, ResultSource::Remote);
    }
}
