//! Pagination and selection state for the company listing.

pub mod model;
pub mod selection;
pub mod sink;
pub mod store;

pub use model::{ListingAction, ListingState, reduce_listing_state};
pub use selection::{
    ClickTarget, Propagation, handle_click, is_selected, route_click, toggle_action,
};
pub use sink::{ItemSink, JsonFileSink, MemorySink, NullSink};
pub use store::ListingStore;
