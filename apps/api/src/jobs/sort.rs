//! Sort Stage: reorders filtered records. Both passes are stable.

use crate::jobs::query::SortKey;
use crate::models::job::JobRecord;

/// Recency descending is always applied first; `SortKey::Salary` then reorders
/// by salary descending, so equal salaries stay newest-first.
pub fn sort(mut records: Vec<JobRecord>, sort_by: SortKey) -> Vec<JobRecord> {
    records.sort_by(|a, b| b.posted_at_epoch_seconds.cmp(&a.posted_at_epoch_seconds));

    if sort_by == SortKey::Salary {
        records.sort_by(|a, b| salary_key(b).total_cmp(&salary_key(a)));
    }

    records
}

/// `max_salary`, else `min_salary`, else 0.
pub fn salary_key(record: &JobRecord) -> f64 {
    record.salary_ceiling().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::store::RecordStore;

    const NOW: i64 = 1_750_000_000;

    fn make_job(id: &str, posted: i64, min: Option<f64>, max: Option<f64>) -> JobRecord {
        JobRecord {
            id: id.to_string(),
            employer_name: "Acme".to_string(),
            employer_logo_url: None,
            employment_type: "FULLTIME".to_string(),
            title: "Engineer".to_string(),
            description: String::new(),
            apply_url: "#".to_string(),
            city: "Austin".to_string(),
            country: "United States".to_string(),
            posted_at_epoch_seconds: posted,
            min_salary: min,
            max_salary: max,
        }
    }

    fn ids(records: &[JobRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_salary_sort_descending_by_min_salary() {
        let records = vec![
            make_job("low", NOW, Some(50_000.0), None),
            make_job("mid", NOW, Some(80_000.0), None),
            make_job("high", NOW, Some(120_000.0), None),
        ];
        let sorted = sort(records, SortKey::Salary);
        let salaries: Vec<f64> = sorted.iter().map(salary_key).collect();
        assert_eq!(salaries, vec![120_000.0, 80_000.0, 50_000.0]);
    }

    #[test]
    fn test_salary_key_prefers_max() {
        let job = make_job("a", NOW, Some(10.0), Some(20.0));
        assert_eq!(salary_key(&job), 20.0);
        let job = make_job("b", NOW, None, None);
        assert_eq!(salary_key(&job), 0.0);
    }

    #[test]
    fn test_default_sort_is_newest_first() {
        let records = vec![
            make_job("old", NOW - 300, None, None),
            make_job("new", NOW, None, None),
            make_job("mid", NOW - 100, None, None),
        ];
        assert_eq!(ids(&sort(records, SortKey::Date)), vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_date_ties_keep_input_order() {
        let records = vec![
            make_job("first", NOW, None, None),
            make_job("second", NOW, None, None),
            make_job("third", NOW, None, None),
        ];
        assert_eq!(
            ids(&sort(records, SortKey::Date)),
            vec!["first", "second", "third"]
        );
    }

    #[test]
    fn test_salary_ties_stay_newest_first() {
        let records = vec![
            make_job("older", NOW - 50, Some(90_000.0), None),
            make_job("unpaid", NOW, None, None),
            make_job("newer", NOW, None, Some(90_000.0)),
        ];
        assert_eq!(
            ids(&sort(records, SortKey::Salary)),
            vec!["newer", "older", "unpaid"]
        );
    }

    #[test]
    fn test_sort_is_idempotent_for_both_keys() {
        let store = RecordStore::seeded(NOW).unwrap();
        for key in [SortKey::Date, SortKey::Salary] {
            let once = sort(store.records().to_vec(), key);
            let twice = sort(once.clone(), key);
            assert_eq!(ids(&once), ids(&twice), "not idempotent for {key:?}");
        }
    }
}
