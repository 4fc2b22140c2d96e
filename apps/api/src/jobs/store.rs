//! Record Store: the fixed, read-only set of job listings used when the remote
//! source is unavailable.
//!
//! Built once at startup and shared behind an `Arc`; nothing mutates it after
//! construction. Seed timestamps are expressed as an age relative to the
//! construction instant so the data never drifts into the future or goes stale.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::job::{JobRecord, REMOTE_CITY};

const SECONDS_PER_HOUR: i64 = 3_600;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Duplicate job id in store: {0}")]
    DuplicateId(String),
}

#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<JobRecord>,
}

impl RecordStore {
    /// Builds a store from arbitrary records, rejecting duplicate ids.
    pub fn from_records(records: Vec<JobRecord>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(StoreError::DuplicateId(record.id.clone()));
            }
        }
        Ok(Self { records })
    }

    /// The built-in seed dataset, with posting times anchored at `now`.
    pub fn seeded(now: i64) -> Result<Self, StoreError> {
        Self::from_records(SEED_JOBS.iter().map(|seed| seed.to_record(now)).collect())
    }

    pub fn records(&self) -> &[JobRecord] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&JobRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Seed data
// ────────────────────────────────────────────────────────────────────────────

struct SeedJob {
    id: &'static str,
    employer: &'static str,
    logo: Option<&'static str>,
    employment_type: &'static str,
    title: &'static str,
    description: &'static str,
    apply_url: &'static str,
    city: &'static str,
    country: &'static str,
    age_hours: i64,
    min_salary: Option<f64>,
    max_salary: Option<f64>,
}

impl SeedJob {
    fn to_record(&self, now: i64) -> JobRecord {
        JobRecord {
            id: self.id.to_string(),
            employer_name: self.employer.to_string(),
            employer_logo_url: self.logo.map(str::to_string),
            employment_type: self.employment_type.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            apply_url: self.apply_url.to_string(),
            city: self.city.to_string(),
            country: self.country.to_string(),
            posted_at_epoch_seconds: now - self.age_hours.max(0) * SECONDS_PER_HOUR,
            min_salary: self.min_salary,
            max_salary: self.max_salary,
        }
    }
}

const SEED_JOBS: &[SeedJob] = &[
    SeedJob {
        id: "seed-001",
        employer: "Northwind Labs",
        logo: Some("https://logo.clearbit.com/northwind.example"),
        employment_type: "FULLTIME",
        title: "Senior Backend Engineer",
        description: "Own the design of our payments ledger. 5+ years building distributed systems in Rust or Go. On-call rotation shared across the platform team.",
        apply_url: "https://northwind.example/careers/senior-backend",
        city: "San Francisco",
        country: "United States",
        age_hours: 6,
        min_salary: Some(170_000.0),
        max_salary: Some(210_000.0),
    },
    SeedJob {
        id: "seed-002",
        employer: "Brightline Health",
        logo: None,
        employment_type: "FULLTIME",
        title: "Junior Frontend Developer",
        description: "Entry-level role on the patient portal team. 0-2 years of experience with React and TypeScript. Mentorship program included.",
        apply_url: "https://brightline.example/jobs/junior-frontend",
        city: REMOTE_CITY,
        country: "United States",
        age_hours: 20,
        min_salary: Some(70_000.0),
        max_salary: Some(85_000.0),
    },
    SeedJob {
        id: "seed-003",
        employer: "Cascade Analytics",
        logo: Some("https://logo.clearbit.com/cascade.example"),
        employment_type: "CONTRACTOR",
        title: "Data Engineer (Contract)",
        description: "Six-month engagement migrating batch pipelines to streaming. 3-5 years with Spark, Kafka and Airflow expected.",
        apply_url: "https://cascade.example/contract/data-engineer",
        city: "Seattle",
        country: "United States",
        age_hours: 30,
        min_salary: Some(95_000.0),
        max_salary: None,
    },
    SeedJob {
        id: "seed-004",
        employer: "Fjord Mobility",
        logo: None,
        employment_type: "PARTTIME",
        title: "Part-Time QA Analyst",
        description: "Twenty hours per week testing our iOS and Android apps. Flexible schedule, 1-3 years of manual and automated testing.",
        apply_url: "https://fjord.example/careers/qa",
        city: "Oslo",
        country: "Norway",
        age_hours: 52,
        min_salary: None,
        max_salary: None,
    },
    SeedJob {
        id: "seed-005",
        employer: "Helix Robotics",
        logo: Some("https://logo.clearbit.com/helix.example"),
        employment_type: "INTERN",
        title: "Software Engineering Intern",
        description: "Summer internship with the perception team. Work on sensor fusion in C++ alongside senior engineers. Students graduating next year preferred.",
        apply_url: "https://helix.example/internships",
        city: "Boston",
        country: "United States",
        age_hours: 75,
        min_salary: Some(40_000.0),
        max_salary: Some(48_000.0),
    },
    SeedJob {
        id: "seed-006",
        employer: "Quill & Ledger",
        logo: None,
        employment_type: "FULLTIME",
        title: "Mid-Level Full Stack Engineer",
        description: "Build customer-facing accounting tools with Django and Vue. 2-4 years of professional experience shipping web products.",
        apply_url: "https://quill.example/jobs/fullstack",
        city: "Austin",
        country: "United States",
        age_hours: 96,
        min_salary: Some(110_000.0),
        max_salary: Some(135_000.0),
    },
    SeedJob {
        id: "seed-007",
        employer: "Outpost Security",
        logo: Some("https://logo.clearbit.com/outpost.example"),
        employment_type: "FULLTIME",
        title: "Sr. Security Engineer",
        description: "Lead threat modeling and incident response for cloud workloads. 7+ years in security engineering, strong AWS background.",
        apply_url: "https://outpost.example/careers/security",
        city: REMOTE_CITY,
        country: "Canada",
        age_hours: 110,
        min_salary: Some(160_000.0),
        max_salary: Some(195_000.0),
    },
    SeedJob {
        id: "seed-008",
        employer: "Greenleaf Energy",
        logo: None,
        employment_type: "FULLTIME",
        title: "DevOps Engineer",
        description: "Maintain Kubernetes clusters and Terraform modules for grid monitoring services. 3-5 years of infrastructure experience.",
        apply_url: "https://greenleaf.example/jobs/devops",
        city: "Denver",
        country: "United States",
        age_hours: 130,
        min_salary: Some(120_000.0),
        max_salary: Some(145_000.0),
    },
    SeedJob {
        id: "seed-009",
        employer: "Lumen Learning Co",
        logo: None,
        employment_type: "CONTRACTOR",
        title: "Technical Writer",
        description: "Document public APIs and SDKs for our education platform. Three-month contract with possible extension.",
        apply_url: "#",
        city: REMOTE_CITY,
        country: "United Kingdom",
        age_hours: 150,
        min_salary: None,
        max_salary: Some(60_000.0),
    },
    SeedJob {
        id: "seed-010",
        employer: "Atlas Freight",
        logo: Some("https://logo.clearbit.com/atlas.example"),
        employment_type: "FULLTIME",
        title: "Machine Learning Engineer",
        description: "Forecast shipping demand with gradient boosted models and deploy them behind low-latency services. Python and SQL required.",
        apply_url: "https://atlas.example/careers/ml",
        city: "Chicago",
        country: "United States",
        age_hours: 170,
        min_salary: Some(140_000.0),
        max_salary: Some(175_000.0),
    },
    SeedJob {
        id: "seed-011",
        employer: "Pebble Games",
        logo: None,
        employment_type: "FULLTIME",
        title: "Entry Level Game Programmer",
        description: "Join a small studio building cozy puzzle games in Unity. Great first role for recent graduates.",
        apply_url: "https://pebble.example/jobs/programmer",
        city: "Montreal",
        country: "Canada",
        age_hours: 190,
        min_salary: Some(55_000.0),
        max_salary: Some(65_000.0),
    },
    SeedJob {
        id: "seed-012",
        employer: "Vantage Capital",
        logo: Some("https://logo.clearbit.com/vantage.example"),
        employment_type: "FULLTIME",
        title: "Senior Quantitative Developer",
        description: "Build execution systems for equity strategies. Senior C++ engineers with low-latency trading experience.",
        apply_url: "https://vantage.example/careers/quant-dev",
        city: "New York",
        country: "United States",
        age_hours: 220,
        min_salary: Some(200_000.0),
        max_salary: Some(260_000.0),
    },
    SeedJob {
        id: "seed-013",
        employer: "Harbor Civic Tech",
        logo: None,
        employment_type: "PARTTIME",
        title: "Accessibility Consultant",
        description: "Audit municipal web services against WCAG 2.2 and coach product teams. Around 15 hours per week.",
        apply_url: "#",
        city: REMOTE_CITY,
        country: "United States",
        age_hours: 260,
        min_salary: Some(45_000.0),
        max_salary: None,
    },
    SeedJob {
        id: "seed-014",
        employer: "Coral Biotech",
        logo: None,
        employment_type: "FULLTIME",
        title: "Bioinformatics Software Engineer",
        description: "Develop genomics pipelines in Rust and Nextflow. Mid career engineers with research computing background welcome.",
        apply_url: "https://coral.example/careers/bioinformatics",
        city: "San Diego",
        country: "United States",
        age_hours: 300,
        min_salary: Some(125_000.0),
        max_salary: Some(150_000.0),
    },
    SeedJob {
        id: "seed-015",
        employer: "Meridian Retail",
        logo: Some("https://logo.clearbit.com/meridian.example"),
        employment_type: "FULLTIME",
        title: "iOS Engineer",
        description: "Ship features in our shopping app used by millions. SwiftUI, Combine and a passion for polished UI.",
        apply_url: "https://meridian.example/jobs/ios",
        city: "London",
        country: "United Kingdom",
        age_hours: 340,
        min_salary: Some(90_000.0),
        max_salary: Some(115_000.0),
    },
    SeedJob {
        id: "seed-016",
        employer: "Tidewater Logistics",
        logo: None,
        employment_type: "INTERN",
        title: "Data Analyst Intern",
        description: "Twelve-week internship analysing warehouse throughput with SQL and Tableau. Entry point into our analytics graduate program.",
        apply_url: "https://tidewater.example/internships/data",
        city: "Rotterdam",
        country: "Netherlands",
        age_hours: 400,
        min_salary: None,
        max_salary: None,
    },
    SeedJob {
        id: "seed-017",
        employer: "Summit Cloud",
        logo: Some("https://logo.clearbit.com/summit.example"),
        employment_type: "FULLTIME",
        title: "Site Reliability Engineer",
        description: "Keep our managed Postgres fleet healthy. 5+ years operating production databases at scale, strong Linux fundamentals.",
        apply_url: "https://summit.example/careers/sre",
        city: REMOTE_CITY,
        country: "Germany",
        age_hours: 450,
        min_salary: Some(130_000.0),
        max_salary: Some(165_000.0),
    },
    SeedJob {
        id: "seed-018",
        employer: "Kestrel Aerospace",
        logo: None,
        employment_type: "CONTRACTOR",
        title: "Embedded Firmware Engineer",
        description: "Contract role writing flight controller firmware in C for ARM Cortex-M. 3-5 years embedded experience.",
        apply_url: "https://kestrel.example/contract/firmware",
        city: "Toulouse",
        country: "France",
        age_hours: 500,
        min_salary: Some(85_000.0),
        max_salary: Some(100_000.0),
    },
    SeedJob {
        id: "seed-019",
        employer: "Orchard Media",
        logo: None,
        employment_type: "FULLTIME",
        title: "Product Designer",
        description: "Design editorial tools for newsroom staff. Portfolio demonstrating research-driven interaction design required.",
        apply_url: "https://orchard.example/jobs/designer",
        city: "Brooklyn",
        country: "United States",
        age_hours: 560,
        min_salary: Some(100_000.0),
        max_salary: Some(125_000.0),
    },
    SeedJob {
        id: "seed-020",
        employer: "Nimbus Payments",
        logo: Some("https://logo.clearbit.com/nimbus.example"),
        employment_type: "FULLTIME",
        title: "Staff Platform Engineer",
        description: "Set technical direction for our API gateway and service mesh. Senior leadership presence across teams, 7+ years expected.",
        apply_url: "https://nimbus.example/careers/staff-platform",
        city: "Dublin",
        country: "Ireland",
        age_hours: 620,
        min_salary: Some(180_000.0),
        max_salary: Some(220_000.0),
    },
    SeedJob {
        id: "seed-021",
        employer: "Sparrow Nonprofit Network",
        logo: None,
        employment_type: "PARTTIME",
        title: "WordPress Developer",
        description: "Maintain donation pages and volunteer portals. Part-time, fully asynchronous collaboration.",
        apply_url: "#",
        city: REMOTE_CITY,
        country: "Australia",
        age_hours: 700,
        min_salary: Some(30_000.0),
        max_salary: Some(38_000.0),
    },
    SeedJob {
        id: "seed-022",
        employer: "Basalt Manufacturing",
        logo: None,
        employment_type: "FULLTIME",
        title: "Industrial Automation Engineer",
        description: "Program PLCs and integrate SCADA systems across three plants. Travel up to 25 percent.",
        apply_url: "https://basalt.example/jobs/automation",
        city: "Detroit",
        country: "United States",
        age_hours: 780,
        min_salary: Some(95_000.0),
        max_salary: Some(118_000.0),
    },
    SeedJob {
        id: "seed-023",
        employer: "Wayfarer Travel",
        logo: Some("https://logo.clearbit.com/wayfarer.example"),
        employment_type: "FULLTIME",
        title: "Android Developer",
        description: "Build offline-first booking flows in Kotlin. 2-4 years of Android experience and familiarity with Jetpack Compose.",
        apply_url: "https://wayfarer.example/careers/android",
        city: "Lisbon",
        country: "Portugal",
        age_hours: 860,
        min_salary: Some(60_000.0),
        max_salary: Some(78_000.0),
    },
    SeedJob {
        id: "seed-024",
        employer: "Ironbark Consulting",
        logo: None,
        employment_type: "CONTRACTOR",
        title: "Salesforce Administrator",
        description: "Short engagement cleaning up CRM workflows for a regional bank. Certification required.",
        apply_url: "#",
        city: "Toronto",
        country: "Canada",
        age_hours: 950,
        min_salary: None,
        max_salary: None,
    },
    SeedJob {
        id: "seed-025",
        employer: "Polaris Research Institute",
        logo: None,
        employment_type: "FULLTIME",
        title: "Research Software Engineer",
        description: "Support climate modelling groups with performance tuning of Fortran and Python codes on HPC clusters.",
        apply_url: "https://polaris.example/jobs/rse",
        city: "Zurich",
        country: "Switzerland",
        age_hours: 1_100,
        min_salary: Some(115_000.0),
        max_salary: Some(140_000.0),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_750_000_000;

    #[test]
    fn test_seed_ids_are_unique() {
        let store = RecordStore::seeded(NOW).unwrap();
        assert_eq!(store.len(), SEED_JOBS.len());
    }

    #[test]
    fn test_seed_timestamps_are_not_in_future() {
        let store = RecordStore::seeded(NOW).unwrap();
        assert!(store
            .records()
            .iter()
            .all(|r| r.posted_at_epoch_seconds <= NOW));
    }

    #[test]
    fn test_seed_records_have_employer_names() {
        let store = RecordStore::seeded(NOW).unwrap();
        assert!(store
            .records()
            .iter()
            .all(|r| !r.employer_name.trim().is_empty()));
    }

    #[test]
    fn test_seed_salaries_are_non_negative() {
        let store = RecordStore::seeded(NOW).unwrap();
        for record in store.records() {
            assert!(record.min_salary.map_or(true, |s| s >= 0.0));
            assert!(record.max_salary.map_or(true, |s| s >= 0.0));
        }
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let store = RecordStore::seeded(NOW).unwrap();
        let mut records = store.records()[..2].to_vec();
        records[1].id = records[0].id.clone();

        match RecordStore::from_records(records) {
            Err(StoreError::DuplicateId(id)) => assert_eq!(id, "seed-001"),
            other => panic!("expected duplicate id error, got {other:?}"),
        }
    }

    #[test]
    fn test_get_by_id() {
        let store = RecordStore::seeded(NOW).unwrap();
        assert_eq!(
            store.get("seed-007").map(|r| r.title.as_str()),
            Some("Sr. Security Engineer")
        );
        assert!(store.get("missing").is_none());
    }
}
