pub mod cli;
pub mod commands;
pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod fetch;
pub mod listing;
pub mod scroll;
pub mod source;
pub mod types;

#[cfg(test)]
mod test_guards;

pub use config::Config;
pub use controller::{ListingController, ListingOptions, PageTicket, RemovalPrompt};
pub use error::{Result, RosterError};
pub use fetch::{FetchOutcome, fetch_page, load_initial_page};
pub use listing::{
    ClickTarget, ItemSink, JsonFileSink, ListingAction, ListingState, ListingStore, MemorySink,
    NullSink, reduce_listing_state, route_click,
};
pub use scroll::{ScrollMetrics, ScrollTrigger};
pub use source::{CompanySource, HttpSource, StaticSource, paginate};
pub use types::{COMPANIES_KEY, Company, CompanyPage, DEFAULT_PAGE_SIZE, PageRequest};
