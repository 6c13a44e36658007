//! Abortable page fetch cycle.
//!
//! Nothing fails past this boundary: cancellation and errors are folded into
//! [`FetchOutcome`] so the listing keeps working whatever the source does.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::source::CompanySource;
use crate::types::{Company, CompanyPage, PageRequest};

/// Result of one fetch cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The source answered with a page
    Loaded(CompanyPage),
    /// The request was abandoned through its cancellation token
    Cancelled,
    /// The source failed; the reason is kept for display only
    Failed(String),
}

impl FetchOutcome {
    /// Companies delivered by this cycle; empty unless loaded
    pub fn items(&self) -> &[Company] {
        match self {
            FetchOutcome::Loaded(page) => &page.data,
            FetchOutcome::Cancelled | FetchOutcome::Failed(_) => &[],
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, FetchOutcome::Cancelled)
    }
}

/// Fetch one page, abandoning it if `cancel` fires first
pub async fn fetch_page<S: CompanySource>(
    source: &S,
    request: PageRequest,
    cancel: Option<&CancellationToken>,
) -> FetchOutcome {
    let result = match cancel {
        Some(token) => {
            tokio::select! {
                biased;
                _ = token.cancelled() => None,
                result = source.fetch_page(request) => Some(result),
            }
        }
        None => Some(source.fetch_page(request).await),
    };

    match result {
        None => {
            tracing::debug!(page = request.page(), "Fetch cancelled");
            FetchOutcome::Cancelled
        }
        Some(Ok(page)) => FetchOutcome::Loaded(page),
        Some(Err(e)) => {
            tracing::warn!("Failed to fetch page {}: {e}", request.page());
            FetchOutcome::Failed(e.to_string())
        }
    }
}

/// Fetch page 1 after `delay`; the wait is cancellable too
pub async fn load_initial_page<S: CompanySource>(
    source: &S,
    size: u32,
    delay: Duration,
    cancel: &CancellationToken,
) -> FetchOutcome {
    let request = match PageRequest::new(1, size) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!("Cannot load first page: {e}");
            return FetchOutcome::Failed(e.to_string());
        }
    };

    if !delay.is_zero() {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::debug!("Initial load cancelled before it was issued");
                return FetchOutcome::Cancelled;
            }
            _ = tokio::time::sleep(delay) => {}
        }
    }

    fetch_page(source, request, Some(cancel)).await
}
