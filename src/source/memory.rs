//! In-memory company source backed by a fixed list.

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use super::{CompanySource, paginate};
use crate::error::Result;
use crate::types::{Company, CompanyPage, PageRequest};

/// Serves pages sliced from a static company list
#[derive(Debug, Clone)]
pub struct StaticSource {
    companies: Arc<Vec<Company>>,
    latency: Duration,
    served: Arc<AtomicUsize>,
}

impl StaticSource {
    pub fn new(companies: Vec<Company>) -> Self {
        Self {
            companies: Arc::new(companies),
            latency: Duration::ZERO,
            served: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Load a JSON array of companies
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let companies: Vec<Company> = serde_json::from_str(&content)?;
        Ok(Self::new(companies))
    }

    /// Delay every response by `latency`
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    /// Number of page requests received so far (shared between clones)
    pub fn requests_served(&self) -> usize {
        self.served.load(Ordering::SeqCst)
    }
}

impl CompanySource for StaticSource {
    async fn fetch_page(&self, request: PageRequest) -> Result<CompanyPage> {
        self.served.fetch_add(1, Ordering::SeqCst);
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(paginate(&self.companies, request))
    }
}
