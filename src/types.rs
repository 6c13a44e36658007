use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};

/// Page size used when neither config nor flags provide one
pub const DEFAULT_PAGE_SIZE: u32 = 15;

/// Page size the endpoint falls back to when the query omits `size`
pub const ENDPOINT_DEFAULT_SIZE: u32 = 10;

/// Key under which the accumulated company list is persisted
pub const COMPANIES_KEY: &str = "companies";

/// A company rendered as one card in the listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Stable unique identifier
    pub id: u64,
    /// Display name
    pub name: String,
    /// Website URL
    pub url: String,
    /// Alternative short names
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shortnames: Vec<String>,
}

impl Company {
    pub fn new(id: u64, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            url: url.into(),
            shortnames: Vec::new(),
        }
    }

    /// Initials shown in the name badge ("Acme Widget Co" -> "AWC")
    pub fn initials(&self) -> String {
        self.name
            .split(' ')
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// A validated request for one page of companies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    page: u32,
    size: u32,
}

impl PageRequest {
    /// Both `page` and `size` are 1-based and must be at least 1
    pub fn new(page: u32, size: u32) -> Result<Self> {
        if page == 0 {
            return Err(RosterError::InvalidPageRequest(
                "page must be at least 1".to_string(),
            ));
        }
        if size == 0 {
            return Err(RosterError::InvalidPageRequest(
                "size must be at least 1".to_string(),
            ));
        }
        Ok(Self { page, size })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Index of the first company on this page
    pub fn offset(&self) -> usize {
        (self.page as usize - 1) * self.size as usize
    }

    /// Same page size, different page (clamped to at least 1)
    pub fn at_page(&self, page: u32) -> Self {
        Self {
            page: page.max(1),
            size: self.size,
        }
    }
}

/// Response envelope of the company listing endpoint.
///
/// Only `data` is required; missing metadata reads as 0, and a
/// `total_pages` of 0 means the total is unknown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyPage {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub total_items: u64,
    #[serde(default)]
    pub total_pages: u32,
    pub data: Vec<Company>,
}

impl CompanyPage {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        let company = Company::new(1, "acme widget co", "https://acme.example");
        assert_eq!(company.initials(), "AWC");
    }

    #[test]
    fn test_initials_skips_repeated_spaces() {
        let company = Company::new(1, "Big  Corp", "https://big.example");
        assert_eq!(company.initials(), "BC");
    }

    #[test]
    fn test_page_request_rejects_zero() {
        assert!(PageRequest::new(0, 15).is_err());
        assert!(PageRequest::new(1, 0).is_err());
    }

    #[test]
    fn test_page_request_offset_and_at_page() {
        let request = PageRequest::new(3, 15).unwrap();
        assert_eq!(request.offset(), 30);
        assert_eq!(request.at_page(4).page(), 4);
        assert_eq!(request.at_page(4).size(), 15);
        assert_eq!(request.at_page(0).page(), 1);
    }

    #[test]
    fn test_company_page_wire_format() {
        let json = r#"{
            "page": 1,
            "size": 2,
            "totalItems": 3,
            "totalPages": 2,
            "data": [
                {"id": 1, "name": "Acme", "url": "https://acme.example"},
                {"id": 2, "name": "Globex", "url": "https://globex.example", "shortnames": ["GBX"]}
            ]
        }"#;
        let page: CompanyPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.data.len(), 2);
        assert!(page.data[0].shortnames.is_empty());
        assert_eq!(page.data[1].shortnames, vec!["GBX".to_string()]);
    }

    #[test]
    fn test_company_page_without_metadata() {
        let json = r#"{"data": [{"id": 1, "name": "Acme", "url": "https://acme.example"}]}"#;
        let page: CompanyPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.page, 0);
        assert_eq!(page.total_items, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_company_page_requires_data() {
        assert!(serde_json::from_str::<CompanyPage>(r#"{"page": 1, "totalPages": 2}"#).is_err());
    }

    #[test]
    fn test_company_omits_empty_shortnames() {
        let company = Company::new(7, "Initech", "https://initech.example");
        let json = serde_json::to_string(&company).unwrap();
        assert!(!json.contains("shortnames"));
    }
}
