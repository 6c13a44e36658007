use owo_colors::{AnsiColors, OwoColorize};

use crate::types::Company;

pub mod cards;
pub mod table;

pub use cards::*;
pub use table::format_companies_table;

/// Badge colors, picked per company id
const BADGE_COLORS: [AnsiColors; 8] = [
    AnsiColors::Red,
    AnsiColors::Yellow,
    AnsiColors::Green,
    AnsiColors::Cyan,
    AnsiColors::Blue,
    AnsiColors::Magenta,
    AnsiColors::BrightRed,
    AnsiColors::BrightBlue,
];

pub fn badge_color(company: &Company) -> AnsiColors {
    BADGE_COLORS[(company.id % BADGE_COLORS.len() as u64) as usize]
}

/// Name badge showing the company initials
pub fn format_name_badge(company: &Company) -> String {
    format!("({})", company.initials())
        .color(badge_color(company))
        .bold()
        .to_string()
}

/// Checkbox marker for the selection state
pub fn format_checkbox(checked: bool) -> String {
    if checked {
        "[x]".green().to_string()
    } else {
        "[ ]".dimmed().to_string()
    }
}
