//! Paginator: slices sorted records into fixed-size, 1-based pages.

use thiserror::Error;

use crate::models::job::{JobRecord, PageMetadata};

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    #[error("Page size must be positive")]
    InvalidPageSize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub jobs: Vec<JobRecord>,
    pub metadata: PageMetadata,
}

/// `page` below 1 is read as 1. A page past the end yields no jobs, but
/// `current_page` still echoes the requested number.
pub fn paginate(
    records: Vec<JobRecord>,
    page: usize,
    page_size: usize,
) -> Result<Page, PipelineError> {
    if page_size == 0 {
        return Err(PipelineError::InvalidPageSize);
    }

    let page = page.max(1);
    let total_jobs = records.len();
    let total_pages = total_jobs.div_ceil(page_size).max(1);

    let start = (page - 1).saturating_mul(page_size);
    let jobs = records.into_iter().skip(start).take(page_size).collect();

    Ok(Page {
        jobs,
        metadata: PageMetadata {
            total_jobs,
            total_pages,
            current_page: page,
            page_size,
        },
    })
}
