use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::listing::{ListingState, is_selected};

#[derive(Tabled)]
struct CompanyRow {
    #[tabled(rename = "")]
    selected: &'static str,
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "URL")]
    url: String,
}

/// Format the loaded companies as a plain table
pub fn format_companies_table(state: &ListingState) -> String {
    let rows: Vec<CompanyRow> = state
        .items
        .iter()
        .map(|company| CompanyRow {
            selected: if is_selected(state, company) { "x" } else { "" },
            id: company.id,
            name: company.name.clone(),
            url: company.url.clone(),
        })
        .collect();

    Table::new(rows).with(Style::markdown()).to_string()
}
