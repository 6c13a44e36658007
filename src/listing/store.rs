//! Reducer host owning a single listing state instance.

use std::sync::Arc;

use super::model::{ListingAction, ListingState, reduce_listing_state};
use super::sink::ItemSink;
use crate::types::COMPANIES_KEY;

/// Applies actions in dispatch order and performs the append write-through
pub struct ListingStore {
    state: ListingState,
    sink: Arc<dyn ItemSink>,
}

impl ListingStore {
    pub fn new(sink: Arc<dyn ItemSink>) -> Self {
        Self {
            state: ListingState::default(),
            sink,
        }
    }

    pub fn state(&self) -> &ListingState {
        &self.state
    }

    /// Apply `action` and return the resulting state
    pub fn dispatch(&mut self, action: ListingAction) -> &ListingState {
        tracing::debug!(action = action.name(), "dispatch");

        let persist = matches!(action, ListingAction::Append(_));
        let state = std::mem::take(&mut self.state);
        self.state = reduce_listing_state(state, action);

        if persist {
            self.write_through();
        }

        &self.state
    }

    fn write_through(&self) {
        if let Err(e) = self.sink.write(COMPANIES_KEY, &self.state.items) {
            tracing::debug!("Ignoring failed write of '{COMPANIES_KEY}': {e}");
        }
    }
}

impl std::fmt::Debug for ListingStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListingStore")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
