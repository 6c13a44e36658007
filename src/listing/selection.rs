//! Selection projection: membership test and toggle routing

use super::model::{ListingAction, ListingState};
use crate::types::Company;

/// Element of a card that received a click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The card body
    Card,
    /// The checkbox nested inside the card
    Checkbox,
}

impl ClickTarget {
    /// Elements a click on `self` bubbles through, innermost first
    pub fn bubble_path(self) -> &'static [ClickTarget] {
        match self {
            ClickTarget::Checkbox => &[ClickTarget::Checkbox, ClickTarget::Card],
            ClickTarget::Card => &[ClickTarget::Card],
        }
    }
}

/// Whether a handled click continues to the enclosing element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    Stop,
}

/// Whether `company` is part of the current selection
pub fn is_selected(state: &ListingState, company: &Company) -> bool {
    state.selected.contains(&company.id)
}

/// The single action that flips the selection state of `company`
pub fn toggle_action(state: &ListingState, company: &Company) -> ListingAction {
    if is_selected(state, company) {
        ListingAction::Deselect(company.clone())
    } else {
        ListingAction::Select(company.clone())
    }
}

/// Click handler attached to `handler`.
///
/// Both handlers toggle; the checkbox handler also consumes the click.
pub fn handle_click(
    handler: ClickTarget,
    state: &ListingState,
    company: &Company,
) -> (ListingAction, Propagation) {
    match handler {
        ClickTarget::Checkbox => (toggle_action(state, company), Propagation::Stop),
        ClickTarget::Card => (toggle_action(state, company), Propagation::Continue),
    }
}

/// Actions produced by a click on `target`, running each handler on its
/// bubble path until one stops propagation.
pub fn route_click(
    state: &ListingState,
    company: &Company,
    target: ClickTarget,
) -> Vec<ListingAction> {
    let mut actions = Vec::new();
    for handler in target.bubble_path() {
        let (action, propagation) = handle_click(*handler, state, company);
        actions.push(action);
        if propagation == Propagation::Stop {
            tracing::trace!(company = company.id, ?handler, "click consumed");
            break;
        }
    }
    actions
}
