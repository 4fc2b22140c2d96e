//! Local pipeline: Record Store → filter → sort → paginate.

use crate::jobs::filter::filter;
use crate::jobs::paginate::{paginate, PipelineError};
use crate::jobs::query::QueryRequest;
use crate::jobs::sort::sort;
use crate::jobs::store::RecordStore;
use crate::models::job::{ResultPage, ResultSource};

pub fn run_local(
    store: &RecordStore,
    request: &QueryRequest,
    now: i64,
    page_size: usize,
) -> Result<ResultPage, PipelineError> {
    let filtered = filter(store.records(), request, now);
    let sorted = sort(filtered, request.sort_by);
    let page = paginate(sorted, request.page, page_size)?;

    Ok(ResultPage {
        jobs: page.jobs,
        metadata: page.metadata,
        source: ResultSource::Local,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::filter::SECONDS_PER_DAY;
    use crate::jobs::paginate::DEFAULT_PAGE_SIZE;
    use crate::jobs::query::{EmploymentTag, SortKey};
    use crate::models::job::{JobRecord, REMOTE_CITY};

    const NOW: i64 = 1_750_000_000;

    fn make_job(id: &str) -> JobRecord {
        JobRecord {
            id: id.to_string(),
            employer_name: "Acme".to_string(),
            employer_logo_url: None,
            employment_type: "FULLTIME".to_string(),
            title: "Engineer".to_string(),
            description: "Build services".to_string(),
            apply_url: "#".to_string(),
            city: "Austin".to_string(),
            country: "United States".to_string(),
            posted_at_epoch_seconds: NOW,
            min_salary: None,
            max_salary: None,
        }
    }

    fn store_of(records: Vec<JobRecord>) -> RecordStore {
        RecordStore::from_records(records).unwrap()
    }

    #[test]
    fn test_salary_sort_scenario() {
        let mut records = Vec::new();
        for (id, salary) in [("a", 50_000.0), ("b", 80_000.0), ("c", 120_000.0)] {
            let mut job = make_job(id);
            job.min_salary = Some(salary);
            records.push(job);
        }
        let request = QueryRequest {
            sort_by: SortKey::Salary,
            ..QueryRequest::default()
        };

        let page = run_local(&store_of(records), &request, NOW, DEFAULT_PAGE_SIZE).unwrap();
        let salaries: Vec<Option<f64>> = page.jobs.iter().map(|j| j.min_salary).collect();
        assert_eq!(
            salaries,
            vec![Some(120_000.0), Some(80_000.0), Some(50_000.0)]
        );
        assert_eq!(page.source, ResultSource::Local);
    }

    #[test]
    fn test_remote_location_scenario() {
        let mut remote = make_job("remote");
        remote.city = REMOTE_CITY.to_string();
        let austin = make_job("austin");
        let request = QueryRequest {
            location: Some("remote".to_string()),
            ..QueryRequest::default()
        };

        let page = run_local(&store_of(vec![remote, austin]), &request, NOW, DEFAULT_PAGE_SIZE)
            .unwrap();
        let ids: Vec<&str> = page.jobs.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["remote"]);
    }

    #[test]
    fn test_date_posted_scenario() {
        let mut stale = make_job("stale");
        stale.posted_at_epoch_seconds = NOW - 8 * SECONDS_PER_DAY;
        let mut fresh = make_job("fresh");
        fresh.posted_at_epoch_seconds = NOW - 6 * SECONDS_PER_DAY;
        let request = QueryRequest {
            date_posted_within_days: Some(7),
            ..QueryRequest::default()
        };

        let page = run_local(&store_of(vec![stale, fresh]), &request, NOW, DEFAULT_PAGE_SIZE)
            .unwrap();
        let ids: Vec<&str> = page.jobs.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["fresh"]);
    }

    #[test]
    fn test_min_salary_scenario() {
        let request = QueryRequest {
            min_salary: Some(100_000.0),
            ..QueryRequest::default()
        };
        let page =
            run_local(&store_of(vec![make_job("unpaid")]), &request, NOW, DEFAULT_PAGE_SIZE)
                .unwrap();
        assert!(page.jobs.is_empty());
        assert_eq!(page.metadata.total_jobs, 0);
        assert_eq!(page.metadata.total_pages, 1);
    }

    #[test]
    fn test_pagination_scenario() {
        let records = (0..25)
            .map(|i| {
                let mut job = make_job(&format!("job-{i:02}"));
                job.posted_at_epoch_seconds = NOW - i;
                job
            })
            .collect();
        let request = QueryRequest {
            page: 3,
            ..QueryRequest::default()
        };

        let page = run_local(&store_of(records), &request, NOW, DEFAULT_PAGE_SIZE).unwrap();
        assert_eq!(page.jobs.len(), 5);
        assert_eq!(page.jobs[0].id, "job-20");
        assert_eq!(page.metadata.total_pages, 3);
        assert_eq!(page.metadata.current_page, 3);
        assert_eq!(page.metadata.page_size, 10);
    }

    #[test]
    fn test_seed_store_contract_filter() {
        let store = RecordStore::seeded(NOW).unwrap();
        let request = QueryRequest {
            employment_types: vec![EmploymentTag::Contract],
            ..QueryRequest::default()
        };
        let page = run_local(&store, &request, NOW, DEFAULT_PAGE_SIZE).unwrap();
        assert!(!page.jobs.is_empty());
        assert!(page
            .jobs
            .iter()
            .all(|j| j.employment_type.to_lowercase().contains("contract")));
        assert!(page
            .jobs
            .windows(2)
            .all(|w| w[0].posted_at_epoch_seconds >= w[1].posted_at_epoch_seconds));
    }

    #[test]
    fn test_zero_page_size_surfaces_error() {
        let store = RecordStore::seeded(NOW).unwrap();
        assert_eq!(
            run_local(&store, &QueryRequest::default(), NOW, 0),
            Err(PipelineError::InvalidPageSize)
        );
    }
}
