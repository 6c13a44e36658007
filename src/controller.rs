//! Listing controller: one browsing session from mount to teardown.
//!
//! The controller owns the store and drives it from fetch completions:
//! - the first page is loaded with `Load`, later pages with `NextPage` + `Append`
//! - scroll-triggered requests are gated by `can_paginate` and the in-flight guard
//! - completions are applied strictly in page order through a reorder buffer
//! - `refresh` starts a new generation; completions from older ones are dropped

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use futures::stream::{FuturesUnordered, StreamExt};
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::error::Result;
use crate::fetch::{FetchOutcome, fetch_page, load_initial_page};
use crate::listing::{
    ClickTarget, ItemSink, ListingAction, ListingState, ListingStore, route_click, toggle_action,
};
use crate::scroll::{ScrollMetrics, ScrollTrigger};
use crate::source::CompanySource;
use crate::types::{Company, CompanyPage, DEFAULT_PAGE_SIZE, PageRequest};

/// Tunables for a listing session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingOptions {
    pub page_size: u32,
    pub initial_delay: Duration,
    pub max_in_flight: usize,
}

impl Default for ListingOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            initial_delay: Duration::from_millis(2000),
            max_in_flight: 1,
        }
    }
}

impl ListingOptions {
    /// Options from config and environment; `page_size` wins over both
    /// and skips their page size lookup entirely.
    pub fn from_config(config: &Config, page_size: Option<u32>) -> Result<Self> {
        let page_size = match page_size {
            Some(size) => size,
            None => config.page_size()?,
        };
        Ok(Self {
            page_size,
            initial_delay: config.initial_delay(),
            max_in_flight: config.max_in_flight(),
        })
    }
}

/// Handle for one outstanding page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTicket {
    pub page: u32,
    generation: u64,
}

/// Pending bulk-delete confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalPrompt {
    pub count: usize,
}

impl RemovalPrompt {
    pub fn message(&self) -> String {
        let noun = if self.count > 1 { "companies" } else { "company" };
        format!(
            "You are about to delete {} {}. Do you want to continue?",
            self.count, noun
        )
    }
}

pub struct ListingController<S> {
    source: Arc<S>,
    store: ListingStore,
    trigger: ScrollTrigger,
    lifetime: CancellationToken,
    base_request: PageRequest,
    initial_delay: Duration,
    generation: u64,
    /// Last page applied to the store, 0 before the first page
    applied: u32,
    /// Lowest page not yet requested in this generation
    next_page: u32,
    pending: BTreeMap<u32, CompanyPage>,
    loading: bool,
    last_error: Option<String>,
    removal: Option<RemovalPrompt>,
}

impl<S: CompanySource> ListingController<S> {
    pub fn new(source: S, sink: Arc<dyn ItemSink>, options: ListingOptions) -> Result<Self> {
        let base_request = PageRequest::new(1, options.page_size)?;
        Ok(Self {
            source: Arc::new(source),
            store: ListingStore::new(sink),
            trigger: ScrollTrigger::new(options.max_in_flight),
            lifetime: CancellationToken::new(),
            base_request,
            initial_delay: options.initial_delay,
            generation: 0,
            applied: 0,
            next_page: 1,
            pending: BTreeMap::new(),
            loading: true,
            last_error: None,
            removal: None,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn state(&self) -> &ListingState {
        self.store.state()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// True until the first page has resolved (skeleton condition)
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Reason of the most recent failed fetch, cleared by the next success
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn removal_prompt(&self) -> Option<&RemovalPrompt> {
        self.removal.as_ref()
    }

    pub fn in_flight_count(&self) -> usize {
        self.trigger.in_flight_count()
    }

    /// Token cancelled at teardown; clones observe the same cancellation
    pub fn cancellation_token(&self) -> CancellationToken {
        self.lifetime.clone()
    }

    pub fn is_torn_down(&self) -> bool {
        self.lifetime.is_cancelled()
    }

    // ========================================================================
    // Loading
    // ========================================================================

    /// Load page 1 after the configured delay
    pub async fn load_initial(&mut self) -> FetchOutcome {
        let outcome = load_initial_page(
            self.source.as_ref(),
            self.base_request.size(),
            self.initial_delay,
            &self.lifetime,
        )
        .await;
        self.apply_first_page(&outcome);
        outcome
    }

    /// Discard the session and load page 1 again, without the initial delay
    pub async fn refresh(&mut self) -> FetchOutcome {
        self.generation += 1;
        self.store.dispatch(ListingAction::Refresh);
        self.trigger.reset();
        self.pending.clear();
        self.applied = 0;
        self.next_page = 1;
        self.loading = true;
        self.last_error = None;
        self.removal = None;

        tracing::debug!(generation = self.generation, "Listing refreshed");

        let outcome = fetch_page(
            self.source.as_ref(),
            self.base_request,
            Some(&self.lifetime),
        )
        .await;
        self.apply_first_page(&outcome);
        outcome
    }

    fn apply_first_page(&mut self, outcome: &FetchOutcome) {
        match outcome {
            FetchOutcome::Loaded(page) => {
                self.store.dispatch(ListingAction::Load(page.data.clone()));
                self.store.dispatch(ListingAction::NextPage {
                    page: 1,
                    total_pages: page.total_pages,
                });
                self.applied = 1;
                self.next_page = 2;
                self.loading = false;
                self.last_error = None;
            }
            FetchOutcome::Cancelled => {}
            FetchOutcome::Failed(reason) => {
                self.loading = false;
                self.last_error = Some(reason.clone());
            }
        }
    }

    // ========================================================================
    // Scrolling
    // ========================================================================

    /// Claim the next page to request, if this scroll position calls for one.
    ///
    /// When the total is known and every page has been applied, the
    /// `NextPage` probe is dispatched instead, closing the pagination gate
    /// without any request.
    pub fn begin_next_page(&mut self, metrics: &ScrollMetrics) -> Option<PageTicket> {
        if self.is_torn_down() || self.loading {
            return None;
        }

        let state = self.store.state();
        if !self.trigger.should_request(metrics, state.can_paginate) {
            return None;
        }

        let mut page = self.next_page;
        while self.trigger.is_in_flight(page) || self.pending.contains_key(&page) {
            page += 1;
        }

        let total_pages = state.total_pages;
        if total_pages > 0 && page > total_pages {
            if self.pending.is_empty() && self.trigger.in_flight_count() == 0 {
                tracing::debug!(page, total_pages, "Listing exhausted");
                self.store.dispatch(ListingAction::NextPage { page, total_pages });
            }
            return None;
        }

        self.trigger.begin(page);
        self.next_page = page + 1;
        Some(PageTicket {
            page,
            generation: self.generation,
        })
    }

    /// Apply the outcome of a ticket's request
    pub fn complete_page(&mut self, ticket: PageTicket, outcome: FetchOutcome) {
        if ticket.generation != self.generation {
            tracing::debug!(page = ticket.page, "Dropping completion from a previous session");
            return;
        }

        self.trigger.finish(ticket.page);

        match outcome {
            FetchOutcome::Loaded(page) => {
                self.last_error = None;
                self.pending.insert(ticket.page, page);
                self.drain_pending();
            }
            FetchOutcome::Cancelled => {
                self.next_page = self.next_page.min(ticket.page);
            }
            FetchOutcome::Failed(reason) => {
                self.last_error = Some(reason);
                // Requested again by the next bottom-reached scroll
                self.next_page = self.next_page.min(ticket.page);
            }
        }
    }

    fn drain_pending(&mut self) {
        while let Some(page) = self.pending.remove(&(self.applied + 1)) {
            self.applied += 1;
            self.store.dispatch(ListingAction::NextPage {
                page: self.applied,
                total_pages: page.total_pages,
            });
            self.store.dispatch(ListingAction::Append(page.data));
        }
    }

    /// Fetch the page claimed by `ticket`, cancelled at teardown
    pub fn fetch(
        &self,
        ticket: PageTicket,
    ) -> impl Future<Output = (PageTicket, FetchOutcome)> + use<S> {
        let source = Arc::clone(&self.source);
        let request = self.base_request.at_page(ticket.page);
        let cancel = self.lifetime.child_token();
        async move {
            let outcome = fetch_page(source.as_ref(), request, Some(&cancel)).await;
            (ticket, outcome)
        }
    }

    /// React to one scroll event; returns the outcome if a page was requested
    pub async fn on_scroll(&mut self, metrics: &ScrollMetrics) -> Option<FetchOutcome> {
        let ticket = self.begin_next_page(metrics)?;
        let (ticket, outcome) = self.fetch(ticket).await;
        self.complete_page(ticket, outcome.clone());
        Some(outcome)
    }

    /// Request as many pages as the in-flight window allows and apply them
    /// in arrival order. Returns the number of pages requested.
    pub async fn fill_window(&mut self, metrics: &ScrollMetrics) -> usize {
        let mut requests = FuturesUnordered::new();
        while let Some(ticket) = self.begin_next_page(metrics) {
            requests.push(self.fetch(ticket));
        }

        let requested = requests.len();
        while let Some((ticket, outcome)) = requests.next().await {
            self.complete_page(ticket, outcome);
        }
        requested
    }

    // ========================================================================
    // Selection and removal
    // ========================================================================

    pub fn toggle(&mut self, company: &Company) -> &ListingState {
        let action = toggle_action(self.store.state(), company);
        self.store.dispatch(action)
    }

    pub fn click(&mut self, company: &Company, target: ClickTarget) -> &ListingState {
        for action in route_click(self.store.state(), company, target) {
            self.store.dispatch(action);
        }
        self.store.state()
    }

    /// Select every loaded company whose id is in `ids`
    pub fn select_ids(&mut self, ids: &[u64]) {
        let companies: Vec<Company> = self
            .store
            .state()
            .items
            .iter()
            .filter(|c| ids.contains(&c.id))
            .cloned()
            .collect();
        for company in companies {
            self.store.dispatch(ListingAction::Select(company));
        }
    }

    /// Open the confirmation prompt; `None` when nothing is selected
    pub fn request_removal(&mut self) -> Option<&RemovalPrompt> {
        let count = self.store.state().selected_count();
        if count == 0 {
            self.removal = None;
        } else {
            self.removal = Some(RemovalPrompt { count });
        }
        self.removal.as_ref()
    }

    pub fn cancel_removal(&mut self) {
        self.removal = None;
    }

    /// Remove the selected companies; returns how many were removed
    pub fn confirm_removal(&mut self) -> usize {
        if self.removal.take().is_none() {
            return 0;
        }

        let selected = self.store.state().selected_companies();
        let removed = selected.len();
        self.store.dispatch(ListingAction::Remove(selected));
        tracing::debug!(removed, "Removed selected companies");
        removed
    }

    // ========================================================================
    // Teardown
    // ========================================================================

    /// Cancel the initial load and every outstanding request
    pub fn teardown(&self) {
        self.lifetime.cancel();
    }
}

impl<S> Drop for ListingController<S> {
    fn drop(&mut self) {
        self.lifetime.cancel();
    }
}

impl<S> std::fmt::Debug for ListingController<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListingController")
            .field("store", &self.store)
            .field("generation", &self.generation)
            .field("applied", &self.applied)
            .field("next_page", &self.next_page)
            .field("loading", &self.loading)
            .finish_non_exhaustive()
    }
}
