//! Mock data builders and sources for listing tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use roster::{Company, CompanyPage, CompanySource, PageRequest, Result, RosterError, paginate};

/// Builder for creating test companies
pub struct CompanyBuilder {
    company: Company,
}

impl CompanyBuilder {
    pub fn new(id: u64) -> Self {
        Self {
            company: Company::new(
                id,
                format!("Company {id}"),
                format!("https://company{id}.example"),
            ),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.company.name = name.to_string();
        self
    }

    pub fn url(mut self, url: &str) -> Self {
        self.company.url = url.to_string();
        self
    }

    pub fn shortname(mut self, shortname: &str) -> Self {
        self.company.shortnames.push(shortname.to_string());
        self
    }

    pub fn build(self) -> Company {
        self.company
    }
}

/// Companies with ids `1..=count`
pub fn companies(count: u64) -> Vec<Company> {
    (1..=count).map(|id| CompanyBuilder::new(id).build()).collect()
}

/// Source that fails the first `failures` requests, then serves pages
#[derive(Clone)]
pub struct FlakySource {
    companies: Arc<Vec<Company>>,
    failures: usize,
    calls: Arc<AtomicUsize>,
}

impl FlakySource {
    pub fn new(companies: Vec<Company>, failures: usize) -> Self {
        Self {
            companies: Arc::new(companies),
            failures,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl CompanySource for FlakySource {
    async fn fetch_page(&self, request: PageRequest) -> Result<CompanyPage> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.failures {
            return Err(RosterError::Api(
                "company listing returned HTTP 503 Service Unavailable".to_string(),
            ));
        }
        Ok(paginate(&self.companies, request))
    }
}
