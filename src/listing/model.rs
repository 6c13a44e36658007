//! Listing model types for testable state management
//!
//! The listing state is only ever changed by `reduce_listing_state`, a pure
//! function over `(state, action)`. Side effects (persistence, fetching) live
//! in the store and controller that host it.

use std::collections::HashSet;

use crate::types::Company;

// ============================================================================
// State Types
// ============================================================================

/// State of one listing session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingState {
    /// Loaded companies in load/append order
    pub items: Vec<Company>,
    /// Ids of companies marked for bulk action
    pub selected: HashSet<u64>,
    /// Highest page applied so far (1-based)
    pub page: u32,
    /// Total known pages, 0 while unknown
    pub total_pages: u32,
    /// Whether further page requests may be issued
    pub can_paginate: bool,
}

impl Default for ListingState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            selected: HashSet::new(),
            page: 1,
            total_pages: 0,
            can_paginate: true,
        }
    }
}

impl ListingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.items.iter().any(|c| c.id == id)
    }

    /// Selected companies in listing order
    pub fn selected_companies(&self) -> Vec<Company> {
        self.items
            .iter()
            .filter(|c| self.selected.contains(&c.id))
            .cloned()
            .collect()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Whether a page beyond the current one is known not to exist
    pub fn is_exhausted(&self) -> bool {
        self.total_pages > 0 && self.page >= self.total_pages
    }
}

// ============================================================================
// Action Types
// ============================================================================

/// All possible transitions of the listing state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingAction {
    /// Replace the loaded companies (first page)
    Load(Vec<Company>),
    /// Append a subsequent page of companies
    Append(Vec<Company>),
    /// Advance to a page, or close the pagination gate when exhausted
    NextPage { page: u32, total_pages: u32 },
    /// Mark a company as selected
    Select(Company),
    /// Unmark a company
    Deselect(Company),
    /// Remove companies from the listing and clear the selection
    Remove(Vec<Company>),
    /// Start a fresh session, re-opening the pagination gate
    Refresh,
}

impl ListingAction {
    /// Short name used in log output
    pub fn name(&self) -> &'static str {
        match self {
            ListingAction::Load(_) => "LOAD",
            ListingAction::Append(_) => "APPEND",
            ListingAction::NextPage { .. } => "NEXT_PAGE",
            ListingAction::Select(_) => "SELECT",
            ListingAction::Deselect(_) => "DESELECT",
            ListingAction::Remove(_) => "REMOVE",
            ListingAction::Refresh => "REFRESH",
        }
    }
}

// ============================================================================
// Reducer
// ============================================================================

/// Pure function: apply an action to the listing state
pub fn reduce_listing_state(mut state: ListingState, action: ListingAction) -> ListingState {
    match action {
        ListingAction::Load(companies) => {
            state.items = companies;
            // Ids that did not survive the reload cannot stay selected
            let items = &state.items;
            state
                .selected
                .retain(|id| items.iter().any(|c| c.id == *id));
        }
        ListingAction::Append(companies) => {
            state.items.extend(companies);
        }
        ListingAction::NextPage { page, total_pages } => {
            if state.total_pages == 0 || state.page < state.total_pages {
                state.page = page;
                state.total_pages = total_pages;
            } else {
                state.can_paginate = false;
            }
        }
        ListingAction::Select(company) => {
            if state.contains(company.id) {
                state.selected.insert(company.id);
            }
        }
        ListingAction::Deselect(company) => {
            state.selected.remove(&company.id);
        }
        ListingAction::Remove(companies) => {
            let removed: HashSet<u64> = companies.iter().map(|c| c.id).collect();
            state.items.retain(|c| !removed.contains(&c.id));
            state.selected.clear();
        }
        ListingAction::Refresh => {
            state = ListingState::default();
        }
    }

    state
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn make_company(id: u64) -> Company {
        Company::new(id, format!("Company {id}"), format!("https://c{id}.example"))
    }

    fn make_companies(ids: std::ops::RangeInclusive<u64>) -> Vec<Company> {
        ids.map(make_company).collect()
    }

    fn state_with_data() -> ListingState {
        reduce_listing_state(
            ListingState::default(),
            ListingAction::Load(make_companies(1..=10)),
        )
    }

    fn all_actions() -> Vec<ListingAction> {
        vec![
            ListingAction::Load(make_companies(1..=3)),
            ListingAction::Append(make_companies(11..=12)),
            ListingAction::NextPage {
                page: 2,
                total_pages: 3,
            },
            ListingAction::Select(make_company(2)),
            ListingAction::Deselect(make_company(2)),
            ListingAction::Remove(vec![make_company(1)]),
            ListingAction::Refresh,
        ]
    }

    // ========================================================================
    // Initial state
    // ========================================================================

    #[test]
    fn test_initial_state() {
        let state = ListingState::new();
        assert!(state.items.is_empty());
        assert!(state.selected.is_empty());
        assert_eq!(state.page, 1);
        assert_eq!(state.total_pages, 0);
        assert!(state.can_paginate);
    }

    // ========================================================================
    // Load / Append
    // ========================================================================

    #[test]
    fn test_reduce_load_replaces_items() {
        let state = state_with_data();
        let new_state = reduce_listing_state(state, ListingAction::Load(make_companies(20..=21)));
        let ids: Vec<u64> = new_state.items.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![20, 21]);
    }

    #[test]
    fn test_reduce_load_drops_stale_selection() {
        let mut state = state_with_data();
        state.selected.insert(3);
        let new_state = reduce_listing_state(state, ListingAction::Load(make_companies(20..=21)));
        assert!(new_state.selected.is_empty());
    }

    #[test]
    fn test_reduce_append_preserves_order() {
        let state = state_with_data();
        let new_state =
            reduce_listing_state(state, ListingAction::Append(make_companies(11..=13)));
        let ids: Vec<u64> = new_state.items.iter().map(|c| c.id).collect();
        assert_eq!(ids, (1..=13).collect::<Vec<_>>());
    }

    // ========================================================================
    // NextPage gate
    // ========================================================================

    #[test]
    fn test_reduce_next_page_unknown_total_always_advances() {
        let state = ListingState::default();
        let new_state = reduce_listing_state(
            state,
            ListingAction::NextPage {
                page: 1,
                total_pages: 3,
            },
        );
        assert_eq!(new_state.page, 1);
        assert_eq!(new_state.total_pages, 3);
        assert!(new_state.can_paginate);
    }

    #[test]
    fn test_reduce_next_page_within_total() {
        let mut state = ListingState::default();
        state.total_pages = 3;
        let new_state = reduce_listing_state(
            state,
            ListingAction::NextPage {
                page: 2,
                total_pages: 3,
            },
        );
        assert_eq!(new_state.page, 2);
        assert!(new_state.can_paginate);
    }

    #[test]
    fn test_reduce_next_page_beyond_total_closes_gate() {
        let mut state = ListingState::default();
        state.page = 3;
        state.total_pages = 3;
        let new_state = reduce_listing_state(
            state,
            ListingAction::NextPage {
                page: 4,
                total_pages: 3,
            },
        );
        assert_eq!(new_state.page, 3);
        assert_eq!(new_state.total_pages, 3);
        assert!(!new_state.can_paginate);
    }

    #[test]
    fn test_gate_is_monotonic() {
        let mut state = ListingState::default();
        state.page = 3;
        state.total_pages = 3;
        state = reduce_listing_state(
            state,
            ListingAction::NextPage {
                page: 4,
                total_pages: 3,
            },
        );
        assert!(!state.can_paginate);

        // Even a payload announcing more pages cannot re-open the gate
        for payload in [(4, 10), (1, 0), (2, 2)] {
            state = reduce_listing_state(
                state,
                ListingAction::NextPage {
                    page: payload.0,
                    total_pages: payload.1,
                },
            );
            assert!(!state.can_paginate);
        }
    }

    // ========================================================================
    // Selection
    // ========================================================================

    #[test]
    fn test_reduce_select_is_idempotent() {
        let state = state_with_data();
        let state = reduce_listing_state(state, ListingAction::Select(make_company(3)));
        let state = reduce_listing_state(state, ListingAction::Select(make_company(3)));
        assert_eq!(state.selected_count(), 1);
        assert!(state.selected.contains(&3));
    }

    #[test]
    fn test_reduce_select_ignores_unloaded_company() {
        let state = state_with_data();
        let new_state = reduce_listing_state(state, ListingAction::Select(make_company(99)));
        assert!(new_state.selected.is_empty());
    }

    #[test]
    fn test_reduce_deselect_absent_is_noop() {
        let state = state_with_data();
        let new_state =
            reduce_listing_state(state.clone(), ListingAction::Deselect(make_company(4)));
        assert_eq!(new_state, state);
    }

    #[test]
    fn test_selected_companies_follow_listing_order() {
        let mut state = state_with_data();
        state = reduce_listing_state(state, ListingAction::Select(make_company(7)));
        state = reduce_listing_state(state, ListingAction::Select(make_company(3)));
        let ids: Vec<u64> = state.selected_companies().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 7]);
    }

    // ========================================================================
    // Remove
    // ========================================================================

    #[test]
    fn test_reduce_remove_clears_whole_selection() {
        let mut state = state_with_data();
        state = reduce_listing_state(state, ListingAction::Select(make_company(3)));
        state = reduce_listing_state(state, ListingAction::Select(make_company(7)));

        let state = reduce_listing_state(state, ListingAction::Remove(vec![make_company(3)]));
        assert!(!state.contains(3));
        assert!(state.contains(7));
        assert!(state.selected.is_empty());
    }

    #[test]
    fn test_reduce_remove_empty_payload_clears_selection() {
        let mut state = state_with_data();
        state = reduce_listing_state(state, ListingAction::Select(make_company(5)));
        let state = reduce_listing_state(state, ListingAction::Remove(vec![]));
        assert_eq!(state.items.len(), 10);
        assert!(state.selected.is_empty());
    }

    // ========================================================================
    // Refresh
    // ========================================================================

    #[test]
    fn test_reduce_refresh_reopens_gate() {
        let mut state = state_with_data();
        state.page = 3;
        state.total_pages = 3;
        state.can_paginate = false;
        state.selected.insert(1);
        let state = reduce_listing_state(state, ListingAction::Refresh);
        assert_eq!(state, ListingState::default());
    }

    // ========================================================================
    // Properties
    // ========================================================================

    #[test]
    fn test_reducer_is_pure() {
        let mut state = state_with_data();
        state.selected.insert(2);
        for action in all_actions() {
            let first = reduce_listing_state(state.clone(), action.clone());
            let second = reduce_listing_state(state.clone(), action);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_selection_stays_subset_of_items() {
        let sequence = vec![
            ListingAction::Select(make_company(3)),
            ListingAction::Select(make_company(7)),
            ListingAction::Select(make_company(42)),
            ListingAction::Deselect(make_company(3)),
            ListingAction::Select(make_company(9)),
            ListingAction::Remove(vec![make_company(9)]),
            ListingAction::Select(make_company(1)),
            ListingAction::Load(make_companies(5..=6)),
            ListingAction::Select(make_company(6)),
            ListingAction::Remove(vec![]),
        ];

        let mut state = state_with_data();
        for action in sequence {
            state = reduce_listing_state(state, action);
            assert!(state.selected.iter().all(|id| state.contains(*id)));
        }
    }

    #[test]
    fn test_action_names() {
        let names: Vec<&str> = all_actions().iter().map(ListingAction::name).collect();
        assert_eq!(
            names,
            vec![
                "LOAD",
                "APPEND",
                "NEXT_PAGE",
                "SELECT",
                "DESELECT",
                "REMOVE",
                "REFRESH"
            ]
        );
    }
}
