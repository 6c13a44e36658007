//! Scroll trigger for infinite loading.

use std::collections::BTreeSet;

/// Geometry of the scrollable list region
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// Distance scrolled from the top
    pub offset: f64,
    /// Height of the visible region
    pub viewport_height: f64,
    /// Height of the full content
    pub content_height: f64,
}

impl ScrollMetrics {
    pub fn new(offset: f64, viewport_height: f64, content_height: f64) -> Self {
        Self {
            offset,
            viewport_height,
            content_height,
        }
    }

    /// Metrics of a region scrolled all the way down
    pub fn at_bottom(viewport_height: f64, content_height: f64) -> Self {
        Self::new(
            (content_height - viewport_height).max(0.0),
            viewport_height,
            content_height,
        )
    }

    /// Bottom reached, inclusive
    pub fn reached_bottom(&self) -> bool {
        self.offset + self.viewport_height >= self.content_height
    }
}

/// Decides when a scroll should request the next page.
///
/// Pages handed out by [`ScrollTrigger::begin`] stay outstanding until
/// [`ScrollTrigger::finish`]; no more than `max_in_flight` are outstanding at
/// once.
#[derive(Debug, Clone)]
pub struct ScrollTrigger {
    max_in_flight: usize,
    in_flight: BTreeSet<u32>,
}

impl Default for ScrollTrigger {
    fn default() -> Self {
        Self::new(1)
    }
}

impl ScrollTrigger {
    pub fn new(max_in_flight: usize) -> Self {
        Self {
            max_in_flight: max_in_flight.max(1),
            in_flight: BTreeSet::new(),
        }
    }

    pub fn should_request(&self, metrics: &ScrollMetrics, can_paginate: bool) -> bool {
        can_paginate && metrics.reached_bottom() && self.has_capacity()
    }

    pub fn has_capacity(&self) -> bool {
        self.in_flight.len() < self.max_in_flight
    }

    /// Mark `page` outstanding; false if it already was
    pub fn begin(&mut self, page: u32) -> bool {
        self.in_flight.insert(page)
    }

    pub fn finish(&mut self, page: u32) {
        self.in_flight.remove(&page);
    }

    pub fn is_in_flight(&self, page: u32) -> bool {
        self.in_flight.contains(&page)
    }

    pub fn in_flight_count(&self) -> usize {
        self.in_flight.len()
    }

    pub fn reset(&mut self) {
        self.in_flight.clear();
    }
}
