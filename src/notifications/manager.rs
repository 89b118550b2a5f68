// SPDX-License-Identifier: MPL-2.0
//! Synchronous queue state.
//!
//! The `Manager` owns the active collection: admission at the tail,
//! closing marks, idempotent removal, and optional drop-oldest eviction
//! under a capacity bound. It knows nothing about timers; the timed
//! lifecycle lives in [`super::service`].

use std::collections::VecDeque;

use super::notification::{Notification, NotificationId, ToastRequest};
use crate::diagnostics::{DiagnosticsHandle, ToastEventKind};

/// Outcome of an admission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Admitted {
    /// The id assigned to the new toast.
    pub id: NotificationId,
    /// The toast evicted to make room, when a capacity bound is hit.
    pub evicted: Option<NotificationId>,
}

/// Owns the ordered collection of active toasts.
///
/// Admission order is preserved: the most recently admitted toast is last.
/// No reordering or priority promotion ever occurs.
#[derive(Debug, Default)]
pub struct Manager {
    active: VecDeque<Notification>,
    max_active: Option<usize>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Manager {
    /// Creates an empty, unbounded manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty manager with a capacity bound.
    ///
    /// When full, admitting a new toast evicts the oldest active one.
    #[must_use]
    pub fn bounded(max_active: usize) -> Self {
        Self {
            max_active: Some(max_active.max(1)),
            ..Self::default()
        }
    }

    /// Sets the diagnostics handle used to record lifecycle events.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Admits a new toast at the tail of the active collection.
    ///
    /// Assigns a fresh unique id; the toast is visible immediately.
    pub fn enqueue(&mut self, request: ToastRequest) -> Admitted {
        let mut evicted = None;
        if let Some(max) = self.max_active {
            if self.active.len() >= max {
                if let Some(oldest) = self.active.pop_front() {
                    self.log(ToastEventKind::Evicted { id: oldest.id() });
                    evicted = Some(oldest.id());
                }
            }
        }

        let id = NotificationId::next();
        let severity = request.severity();
        self.active.push_back(Notification::admit(id, request));
        self.log(ToastEventKind::Enqueued { id, severity });
        Admitted { id, evicted }
    }

    /// Marks a toast as closing.
    ///
    /// Returns `false` if the toast is absent or already closing, so the
    /// removal sequence runs at most once per toast.
    pub fn begin_close(&mut self, id: NotificationId) -> bool {
        match self.active.iter_mut().find(|n| n.id() == id) {
            Some(toast) if !toast.is_closing() => {
                toast.mark_closing();
                true
            }
            _ => false,
        }
    }

    /// Removes a toast permanently.
    ///
    /// Removing an absent id is a no-op and returns `false`.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.active.iter().position(|n| n.id() == id) {
            self.active.remove(pos);
            self.log(ToastEventKind::Removed { id });
            return true;
        }
        false
    }

    /// Removes everything; returns how many toasts were dropped.
    pub fn clear(&mut self) -> usize {
        let cleared = self.active.len();
        self.active.clear();
        cleared
    }

    /// Returns whether a toast with this id is still active.
    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.active.iter().any(|n| n.id() == id)
    }

    /// Iterates over the active toasts in admission order.
    pub fn active(&self) -> impl Iterator<Item = &Notification> {
        self.active.iter()
    }

    /// Returns the number of active toasts.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Returns whether any toast is active.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.active.is_empty()
    }

    /// Returns an owned point-in-time copy of the active collection.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Notification> {
        self.active.iter().cloned().collect()
    }

    fn log(&self, kind: ToastEventKind) {
        if let Some(handle) = &self.diagnostics {
            handle.log(kind);
        }
    }
}
