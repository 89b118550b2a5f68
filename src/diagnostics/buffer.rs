// SPDX-License-Identifier: MPL-2.0
//! Memory-bounded storage for lifecycle events.
//!
//! The log is a ring buffer: when full, pushing a new event evicts the
//! oldest one. Events are kept in chronological order (oldest first).

use std::collections::VecDeque;

use super::events::ToastEvent;

/// Valid bounds for the event-log capacity.
pub mod log_capacity_bounds {
    /// Minimum retained events.
    pub const MIN: usize = 16;
    /// Maximum retained events.
    pub const MAX: usize = 4096;
    /// Default retained events.
    pub const DEFAULT: usize = 256;
}

/// Event-log capacity, guaranteed to be within valid bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogCapacity(usize);

impl LogCapacity {
    /// Creates a new capacity, clamping the value to the valid range.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self(capacity.clamp(log_capacity_bounds::MIN, log_capacity_bounds::MAX))
    }

    /// Returns the raw capacity value.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for LogCapacity {
    fn default() -> Self {
        Self(log_capacity_bounds::DEFAULT)
    }
}

/// A bounded chronological log of toast lifecycle events.
#[derive(Debug, Clone)]
pub struct EventLog {
    events: VecDeque<ToastEvent>,
    capacity: usize,
}

impl EventLog {
    /// Creates an empty log with the given capacity.
    #[must_use]
    pub fn new(capacity: LogCapacity) -> Self {
        Self {
            events: VecDeque::with_capacity(capacity.value()),
            capacity: capacity.value(),
        }
    }

    /// Appends an event, evicting the oldest if at capacity.
    pub fn push(&mut self, event: ToastEvent) {
        if self.events.len() >= self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Iterates over the retained events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &ToastEvent> {
        self.events.iter()
    }

    /// Returns the number of retained events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if no events are retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns the maximum number of retained events.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Removes all retained events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new(LogCapacity::default())
    }
}
