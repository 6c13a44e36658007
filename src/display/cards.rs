use owo_colors::OwoColorize;

use super::{format_checkbox, format_name_badge};
use crate::controller::RemovalPrompt;
use crate::listing::{ListingState, is_selected};
use crate::types::Company;

pub const LOADING_TEXT: &str = "loading companies";
pub const EMPTY_TEXT: &str = "There are no companies yet.";

/// Format one company card on a single line
pub fn format_card(company: &Company, selected: bool) -> String {
    format!(
        "{} {} {}  {} {}",
        format_checkbox(selected),
        format_name_badge(company),
        company.name,
        "Explore website".dimmed(),
        company.url.cyan()
    )
}

/// Footer with the listing title and the bulk-delete affordance
pub fn format_footer(state: &ListingState) -> String {
    let mut footer = format!(
        "{}  {}",
        "COMPANIES".bold(),
        "List of active companies".dimmed()
    );

    let count = state.selected_count();
    if count > 0 {
        footer.push_str(&format!("  {}", format!("Remove ({count})").red().bold()));
    }
    footer
}

/// Render the whole listing: placeholder, empty state, or cards plus footer
pub fn format_listing(state: &ListingState, loading: bool) -> String {
    if loading {
        return LOADING_TEXT.dimmed().to_string();
    }
    if state.items.is_empty() {
        return EMPTY_TEXT.dimmed().to_string();
    }

    let mut lines: Vec<String> = state
        .items
        .iter()
        .map(|company| format_card(company, is_selected(state, company)))
        .collect();

    let progress = if state.can_paginate {
        format!("page {}/{}", state.page, format_total(state.total_pages))
    } else {
        format!("page {}/{} (end of list)", state.page, state.total_pages)
    };
    lines.push(String::new());
    lines.push(progress.dimmed().to_string());
    lines.push(format_footer(state));
    lines.join("\n")
}

/// Format the bulk-delete confirmation prompt
pub fn format_removal_prompt(prompt: &RemovalPrompt) -> String {
    format!("{}\n{}", prompt.message(), "[Cancel] [Yes]".bold())
}

fn format_total(total_pages: u32) -> String {
    if total_pages == 0 {
        "?".to_string()
    } else {
        total_pages.to_string()
    }
}
