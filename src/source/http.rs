//! HTTP company source for the `GET /api/companies` endpoint.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use super::CompanySource;
use crate::error::{Result, RosterError};
use crate::types::{CompanyPage, PageRequest};

/// Timeout applied when none is configured
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Company source backed by a remote listing endpoint
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    endpoint: Url,
}

impl HttpSource {
    /// Create a source for `endpoint`, e.g. `http://localhost:3000/api/companies`
    pub fn new(endpoint: &str) -> Result<Self> {
        Self::with_timeout(endpoint, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(endpoint: &str, timeout: Duration) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| RosterError::InvalidEndpoint(endpoint.to_string(), e.to_string()))?;

        if endpoint.cannot_be_a_base() {
            return Err(RosterError::InvalidEndpoint(
                endpoint.to_string(),
                "expected an http(s) URL".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RosterError::Api(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Endpoint URL carrying the page query, replacing any existing one
    pub fn page_url(&self, request: PageRequest) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .clear()
            .append_pair("page", &request.page().to_string())
            .append_pair("size", &request.size().to_string());
        url
    }
}

impl CompanySource for HttpSource {
    async fn fetch_page(&self, request: PageRequest) -> Result<CompanyPage> {
        let url = self.page_url(request);
        tracing::debug!(%url, "fetching company page");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RosterError::Api(format!(
                "company listing returned HTTP {status}"
            )));
        }

        let page: CompanyPage = response.json().await?;
        Ok(page)
    }
}
