//! Company sources.
//!
//! A source answers page requests with the endpoint's response envelope.
//! `StaticSource` slices an in-memory list the same way the listing endpoint
//! does; `HttpSource` talks to a running endpoint.

pub mod http;
pub mod memory;

use std::future::Future;

use crate::error::Result;
use crate::types::{Company, CompanyPage, PageRequest};

pub use http::HttpSource;
pub use memory::StaticSource;

/// Common interface for company listing backends
pub trait CompanySource: Send + Sync {
    /// Fetch one page of companies
    fn fetch_page(&self, request: PageRequest) -> impl Future<Output = Result<CompanyPage>> + Send;
}

/// Offset pagination over a fixed collection.
///
/// Pages past the end yield an empty `data` array rather than an error.
pub fn paginate(all: &[Company], request: PageRequest) -> CompanyPage {
    let total_items = all.len();
    let size = request.size() as usize;
    let start = request.offset().min(total_items);
    let end = start.saturating_add(size).min(total_items);

    CompanyPage {
        page: request.page(),
        size: request.size(),
        total_items: total_items as u64,
        total_pages: total_items.div_ceil(size) as u32,
        data: all[start..end].to_vec(),
    }
}
