// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for toast lifecycle tracking.

use std::time::Instant;

use crate::notifications::{NotificationId, Severity};

/// A single recorded lifecycle event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastEvent {
    /// When the event occurred (monotonic clock for duration calculations).
    pub timestamp: Instant,
    /// The type and data of the event.
    pub kind: ToastEventKind,
}

impl ToastEvent {
    /// Creates a new event with the current timestamp.
    #[must_use]
    pub fn new(kind: ToastEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }

    /// Creates a new event with a specific timestamp.
    #[must_use]
    pub fn with_timestamp(kind: ToastEventKind, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}

/// The type and associated data for a toast lifecycle event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastEventKind {
    /// A toast was admitted to the active collection.
    Enqueued {
        id: NotificationId,
        severity: Severity,
    },
    /// The display timer for a toast elapsed; its removal sequence starts.
    DisplayElapsed { id: NotificationId },
    /// The presentation layer requested an early close.
    CloseRequested { id: NotificationId },
    /// A toast was removed from the active collection.
    Removed { id: NotificationId },
    /// A toast was evicted to make room under a configured capacity bound.
    Evicted { id: NotificationId },
    /// The service was torn down with this many toasts still active.
    Shutdown { cleared: usize },
}

impl ToastEventKind {
    /// Returns the notification this event refers to, if any.
    #[must_use]
    pub fn id(&self) -> Option<NotificationId> {
        match self {
            ToastEventKind::Enqueued { id, .. }
            | ToastEventKind::DisplayElapsed { id }
            | ToastEventKind::CloseRequested { id }
            | ToastEventKind::Removed { id }
            | ToastEventKind::Evicted { id } => Some(*id),
            ToastEventKind::Shutdown { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_kind_exposes_subject_id() {
        let id = NotificationId::next();
        let kind = ToastEventKind::Removed { id };
        assert_eq!(kind.id(), Some(id));
        assert_eq!(ToastEventKind::Shutdown { cleared: 2 }.id(), None);
    }

    #[test]
    fn with_timestamp_preserves_instant() {
        let now = Instant::now();
        let event = ToastEvent::with_timestamp(ToastEventKind::Shutdown { cleared: 0 }, now);
        assert_eq!(event.timestamp, now);
    }
}
