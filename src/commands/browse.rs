//! Headless browsing session.
//!
//! Mirrors what the listing screen does: wait for the first page, scroll to
//! the bottom a number of times, select some companies and optionally
//! confirm their removal, then render the result.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use owo_colors::OwoColorize;
use serde_json::json;

use crate::config::Config;
use crate::controller::{ListingController, ListingOptions};
use crate::display::{format_companies_table, format_listing, format_removal_prompt};
use crate::error::{Result, RosterError};
use crate::listing::{ItemSink, JsonFileSink, NullSink};
use crate::scroll::ScrollMetrics;
use crate::source::{CompanySource, HttpSource, StaticSource};

/// Height of one rendered card, used to fake scroll geometry
const CARD_HEIGHT: f64 = 64.0;
const VIEWPORT_HEIGHT: f64 = 600.0;

/// Options for `roster browse`
#[derive(Debug, Clone, Default)]
pub struct BrowseOptions {
    pub data: Option<PathBuf>,
    pub endpoint: Option<String>,
    pub size: Option<u32>,
    pub delay_ms: Option<u64>,
    pub scrolls: usize,
    pub select: Vec<u64>,
    pub delete: bool,
    pub store: Option<PathBuf>,
    pub table: bool,
    pub json: bool,
}

pub async fn cmd_browse(options: BrowseOptions) -> Result<()> {
    let config = Config::load()?;

    let mut listing = ListingOptions::from_config(&config, options.size)?;
    if let Some(delay_ms) = options.delay_ms {
        listing.initial_delay = Duration::from_millis(delay_ms);
    }

    let sink: Arc<dyn ItemSink> = match options.store.clone().or_else(|| config.store_dir()) {
        Some(dir) => Arc::new(JsonFileSink::new(dir)),
        None => Arc::new(NullSink),
    };

    if let Some(data) = &options.data {
        let source = StaticSource::from_json_file(data)?;
        return run_session(source, sink, listing, &options).await;
    }

    let endpoint = options
        .endpoint
        .clone()
        .or_else(|| config.endpoint())
        .ok_or_else(|| {
            RosterError::Config(
                "no company source. Pass --data or --endpoint, or set 'endpoint' in .roster/config.yaml"
                    .to_string(),
            )
        })?;
    let source = HttpSource::with_timeout(&endpoint, config.request_timeout())?;
    run_session(source, sink, listing, &options).await
}

async fn run_session<S: CompanySource + 'static>(
    source: S,
    sink: Arc<dyn ItemSink>,
    listing: ListingOptions,
    options: &BrowseOptions,
) -> Result<()> {
    let mut controller = ListingController::new(source, sink, listing)?;

    controller.load_initial().await;
    if let Some(reason) = controller.last_error() {
        return Err(RosterError::Api(format!("failed to load companies: {reason}")));
    }

    for _ in 0..options.scrolls {
        let content_height = controller.state().items.len() as f64 * CARD_HEIGHT;
        let metrics = ScrollMetrics::at_bottom(VIEWPORT_HEIGHT, content_height);
        if controller.fill_window(&metrics).await == 0 && !controller.state().can_paginate {
            break;
        }
    }

    if !options.select.is_empty() {
        controller.select_ids(&options.select);
    }

    let mut removed = 0;
    if options.delete {
        if let Some(prompt) = controller.request_removal() {
            if !options.json {
                println!("{}", format_removal_prompt(prompt));
            }
            removed = controller.confirm_removal();
        } else if !options.json {
            println!("{}", "Nothing selected to remove".dimmed());
        }
    }

    let state = controller.state();
    if options.json {
        let output = json!({
            "page": state.page,
            "total_pages": state.total_pages,
            "can_paginate": state.can_paginate,
            "removed": removed,
            "selected": state.selected_companies().iter().map(|c| c.id).collect::<Vec<_>>(),
            "companies": state.items,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if removed > 0 {
        let noun = if removed > 1 { "companies" } else { "company" };
        println!("{} {removed} {noun}", "Removed".red());
        println!();
    }

    if options.table {
        println!("{}", format_companies_table(state));
    } else {
        println!("{}", format_listing(state, controller.is_loading()));
    }
    Ok(())
}
