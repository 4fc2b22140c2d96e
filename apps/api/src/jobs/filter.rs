//! Filter Engine: conjunction of optional predicates over job records.
//!
//! Each predicate is exposed on its own so they can be composed and tested
//! independently. `filter` keeps survivors in store iteration order.

use crate::jobs::query::{normalize_tag, EmploymentTag, ExperienceLevel, QueryRequest};
use crate::models::job::JobRecord;

pub const SECONDS_PER_DAY: i64 = 86_400;

const ENTRY_KEYWORDS: &[&str] = &["junior", "entry", "entry-level", "0-2 years", "1-3 years"];
const MID_KEYWORDS: &[&str] = &["mid", "3-5 years", "2-4 years"];
const SENIOR_TITLE_KEYWORDS: &[&str] = &["senior", "sr."];
const SENIOR_DESCRIPTION_KEYWORDS: &[&str] = &["senior", "5+ years", "7+ years"];

/// Applies every predicate in `request`. `now` is the reference instant for
/// the date-posted window.
pub fn filter(records: &[JobRecord], request: &QueryRequest, now: i64) -> Vec<JobRecord> {
    records
        .iter()
        .filter(|r| matches_query(r, request.query.as_deref()))
        .filter(|r| matches_location(r, request.location.as_deref()))
        .filter(|r| matches_experience(r, request.experience))
        .filter(|r| matches_employment_types(r, &request.employment_types))
        .filter(|r| matches_date_posted(r, request.date_posted_within_days, now))
        .filter(|r| matches_min_salary(r, request.min_salary))
        .cloned()
        .collect()
}

/// Case-insensitive substring over title, description and employer name.
pub fn matches_query(record: &JobRecord, query: Option<&str>) -> bool {
    let Some(query) = query else {
        return true;
    };
    let query = query.to_lowercase();

    contains_ci(&record.title, &query)
        || contains_ci(&record.description, &query)
        || contains_ci(&record.employer_name, &query)
}

/// Case-insensitive substring over city and country. A location mentioning
/// "remote" also matches every remote listing.
pub fn matches_location(record: &JobRecord, location: Option<&str>) -> bool {
    let Some(location) = location else {
        return true;
    };
    let location = location.to_lowercase();

    contains_ci(&record.city, &location)
        || contains_ci(&record.country, &location)
        || (location.contains("remote") && record.is_remote())
}

/// Keyword heuristic over title and description. `None` filters nothing.
pub fn matches_experience(record: &JobRecord, level: Option<ExperienceLevel>) -> bool {
    let Some(level) = level else {
        return true;
    };
    let title = record.title.to_lowercase();
    let description = record.description.to_lowercase();
    let in_either = |keywords: &[&str]| {
        keywords
            .iter()
            .any(|k| title.contains(k) || description.contains(k))
    };

    match level {
        ExperienceLevel::Entry => in_either(ENTRY_KEYWORDS),
        ExperienceLevel::Mid => in_either(MID_KEYWORDS),
        ExperienceLevel::Senior => {
            SENIOR_TITLE_KEYWORDS.iter().any(|k| title.contains(k))
                || SENIOR_DESCRIPTION_KEYWORDS
                    .iter()
                    .any(|k| description.contains(k))
        }
    }
}

/// OR across the requested tags; an empty set filters nothing.
pub fn matches_employment_types(record: &JobRecord, tags: &[EmploymentTag]) -> bool {
    if tags.is_empty() {
        return true;
    }
    let employment_type = record.employment_type.to_lowercase();

    tags.iter().any(|tag| match tag {
        EmploymentTag::FullTime => employment_type.contains("full"),
        EmploymentTag::PartTime => employment_type.contains("part"),
        EmploymentTag::Contract => employment_type.contains("contract"),
        EmploymentTag::Internship => employment_type.contains("intern"),
        EmploymentTag::Remote => record.is_remote(),
        EmploymentTag::Other(tag) => normalize_tag(&employment_type).contains(tag.as_str()),
    })
}

pub fn matches_date_posted(record: &JobRecord, within_days: Option<u32>, now: i64) -> bool {
    let Some(days) = within_days else {
        return true;
    };
    let cutoff = now - i64::from(days) * SECONDS_PER_DAY;
    record.posted_at_epoch_seconds >= cutoff
}

/// Compares `max_salary`, else `min_salary`. Records with neither fail.
pub fn matches_min_salary(record: &JobRecord, min_salary: Option<f64>) -> bool {
    let Some(min_salary) = min_salary else {
        return true;
    };
    record
        .salary_ceiling()
        .is_some_and(|salary| salary >= min_salary)
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
