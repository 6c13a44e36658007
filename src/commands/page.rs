use std::path::Path;

use crate::error::Result;
use crate::source::{StaticSource, paginate};
use crate::types::{ENDPOINT_DEFAULT_SIZE, PageRequest};

/// Print one page of a company data file as the endpoint would return it
pub fn cmd_page(data: &Path, page: Option<u32>, size: Option<u32>) -> Result<()> {
    let source = StaticSource::from_json_file(data)?;
    let request = PageRequest::new(page.unwrap_or(1), size.unwrap_or(ENDPOINT_DEFAULT_SIZE))?;

    let envelope = paginate(source.companies(), request);
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}
