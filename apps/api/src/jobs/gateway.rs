//! Fallback Gateway: the one place that decides between the remote source
//! and the local pipeline. Both call surfaces go through `JobGateway`.
//!
//! State machine:
//! 1. No remote configured → local pipeline.
//! 2. Remote call under a deadline. Non-empty result → returned as-is, wrapped
//!    in a `ResultPage` (upstream already filtered and paginated).
//! 3. Transport error, non-2xx, parse error, timeout or empty result → local
//!    pipeline.
//!
//! `fetch_jobs` never fails. A broken local pipeline yields an empty page.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, error, info, warn};

use crate::jobs::paginate::DEFAULT_PAGE_SIZE;
use crate::jobs::pipeline::run_local;
use crate::jobs::query::QueryRequest;
use crate::jobs::remote::{JobSource, RemoteError};
use crate::jobs::store::RecordStore;
use crate::models::job::{JobRecord, ResultPage};

pub struct JobGateway {
    store: Arc<RecordStore>,
    remote: Option<Arc<dyn JobSource>>,
    timeout: Duration,
    page_size: usize,
}

impl JobGateway {
    pub fn new(
        store: Arc<RecordStore>,
        remote: Option<Arc<dyn JobSource>>,
        timeout: Duration,
    ) -> Self {
        Self {
            store,
            remote,
            timeout,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    #[cfg(test)]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub async fn fetch_jobs(&self, request: &QueryRequest) -> ResultPage {
        self.fetch_jobs_at(request, Utc::now().timestamp()).await
    }

    pub async fn fetch_jobs_at(&self, request: &QueryRequest, now: i64) -> ResultPage {
        let Some(remote) = &self.remote else {
            debug!("Remote job source not configured, serving local listings");
            return self.local(request, now);
        };

        match self.fetch_remote(remote.as_ref(), request, now).await {
            Ok(jobs) if !jobs.is_empty() => {
                debug!("Remote job source returned {} listings", jobs.len());
                ResultPage::from_upstream(jobs, request.page, self.page_size)
            }
            Ok(_) => {
                info!("Remote job source returned no listings, falling back to local");
                self.local(request, now)
            }
            Err(e) => {
                warn!("Remote job source failed, falling back to local: {e}");
                self.local(request, now)
            }
        }
    }

    async fn fetch_remote(
        &self,
        remote: &dyn JobSource,
        request: &QueryRequest,
        now: i64,
    ) -> Result<Vec<JobRecord>, RemoteError> {
        tokio::time::timeout(self.timeout, remote.fetch(request, now))
            .await
            .map_err(|_| RemoteError::Timeout(self.timeout))?
    }

    fn local(&self, request: &QueryRequest, now: i64) -> ResultPage {
        run_local(&self.store, request, now, self.page_size).unwrap_or_else(|e| {
            error!("Local job pipeline failed: {e}");
            ResultPage::empty(request.page, self.page_size)
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
