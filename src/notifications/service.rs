// SPDX-License-Identifier: MPL-2.0
//! Timed display-then-dismiss lifecycle.
//!
//! `ToastService` drives the queue with per-toast dismissal timers: a toast
//! is displayed for a fixed duration, marked closing, given a grace period
//! for the exit transition, and then removed. Every state change republishes
//! a snapshot of the active collection on a watch channel.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::manager::Manager;
use super::notification::{Notification, NotificationId, ToastRequest};
use crate::config::{DEFAULT_DISPLAY_DURATION_MS, DEFAULT_EXIT_GRACE_MS};
use crate::diagnostics::{DiagnosticsHandle, ToastEventKind};

/// Lifecycle timing for one service.
///
/// All toasts of a service share one display duration, so dismissal order
/// always matches admission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// How long a toast stays before its removal sequence starts.
    pub display: Duration,
    /// Delay between the closing mark and final removal.
    pub grace: Duration,
    /// Capacity bound for the active collection; `None` is unbounded.
    pub max_active: Option<usize>,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            display: Duration::from_millis(DEFAULT_DISPLAY_DURATION_MS),
            grace: Duration::from_millis(DEFAULT_EXIT_GRACE_MS),
            max_active: None,
        }
    }
}

/// Owns the queue state, the dismissal timers, and the snapshot channel.
///
/// Must be used inside a tokio runtime: admission and close spawn the
/// timer tasks that drive dismissal.
#[derive(Debug)]
pub struct ToastService {
    state: Mutex<Manager>,
    timers: Mutex<HashMap<NotificationId, JoinHandle<()>>>,
    snapshots: watch::Sender<Vec<Notification>>,
    timing: Timing,
    diagnostics: Option<DiagnosticsHandle>,
}

impl ToastService {
    /// Creates a service with the given timing and no diagnostics.
    #[must_use]
    pub fn new(timing: Timing) -> Arc<Self> {
        Self::build(timing, None)
    }

    /// Creates a service that records lifecycle events through `handle`.
    #[must_use]
    pub fn with_diagnostics(timing: Timing, handle: DiagnosticsHandle) -> Arc<Self> {
        Self::build(timing, Some(handle))
    }

    fn build(timing: Timing, diagnostics: Option<DiagnosticsHandle>) -> Arc<Self> {
        let mut manager = match timing.max_active {
            Some(max) => Manager::bounded(max),
            None => Manager::new(),
        };
        if let Some(handle) = &diagnostics {
            manager.set_diagnostics(handle.clone());
        }
        let (snapshots, _) = watch::channel(Vec::new());
        Arc::new(Self {
            state: Mutex::new(manager),
            timers: Mutex::new(HashMap::new()),
            snapshots,
            timing,
            diagnostics,
        })
    }

    /// Returns the timing this service runs with.
    #[must_use]
    pub fn timing(&self) -> Timing {
        self.timing
    }

    /// Admits a toast and starts its display timer.
    ///
    /// Returns the assigned id so the caller may close its own toast early;
    /// the return value can be ignored.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn toast(self: &Arc<Self>, request: ToastRequest) -> NotificationId {
        let admitted = self.state().enqueue(request);
        if let Some(evicted) = admitted.evicted {
            // The evicted toast is already gone; its timer must not fire.
            if let Some(timer) = self.timers().remove(&evicted) {
                timer.abort();
            }
        }
        self.publish();

        let id = admitted.id;
        let display = self.timing.display;
        let service = Arc::downgrade(self);
        let timer = tokio::spawn(async move {
            tokio::time::sleep(display).await;
            if let Some(service) = service.upgrade() {
                service.log(ToastEventKind::DisplayElapsed { id });
                service.run_removal(id).await;
            }
        });
        self.timers().insert(id, timer);
        id
    }

    /// Requests an early close: the removal sequence starts now instead of
    /// at display-timer expiry, so the toast is gone one grace period later.
    ///
    /// Closing an absent id is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn close(self: &Arc<Self>, id: NotificationId) {
        if !self.state().contains(id) {
            return;
        }
        if let Some(timer) = self.timers().remove(&id) {
            timer.abort();
        }
        self.log(ToastEventKind::CloseRequested { id });

        let service = Arc::clone(self);
        let timer = tokio::spawn(async move {
            service.run_removal(id).await;
        });
        self.timers().insert(id, timer);
    }

    /// Subscribes to snapshots of the active collection.
    ///
    /// A new snapshot is published on every admission, close-begin, and
    /// removal. The receiver always holds the latest state.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<Notification>> {
        self.snapshots.subscribe()
    }

    /// Returns a point-in-time snapshot of the active collection.
    #[must_use]
    pub fn active(&self) -> Vec<Notification> {
        self.state().snapshot()
    }

    /// Tears the service down: aborts all outstanding timers, drops every
    /// active toast, and publishes the empty snapshot. Idempotent; no timer
    /// acts on stale state afterwards.
    pub fn shutdown(&self) {
        let timers: Vec<JoinHandle<()>> = self.timers().drain().map(|(_, timer)| timer).collect();
        for timer in &timers {
            timer.abort();
        }
        let cleared = self.state().clear();
        if cleared > 0 {
            self.log(ToastEventKind::Shutdown { cleared });
        }
        self.publish();
    }

    /// Runs the removal sequence: closing mark, grace period, removal.
    ///
    /// A close request landing while the grace period is already running
    /// restarts it; removal then lands one grace period after that request.
    async fn run_removal(self: Arc<Self>, id: NotificationId) {
        let began = self.state().begin_close(id);
        if began {
            self.publish();
        } else if !self.state().contains(id) {
            self.timers().remove(&id);
            return;
        }
        tokio::time::sleep(self.timing.grace).await;
        if self.state().remove(id) {
            self.publish();
        }
        self.timers().remove(&id);
    }

    fn publish(&self) {
        let snapshot = self.state().snapshot();
        self.snapshots.send_replace(snapshot);
    }

    fn log(&self, kind: ToastEventKind) {
        if let Some(handle) = &self.diagnostics {
            handle.log(kind);
        }
    }

    fn state(&self) -> MutexGuard<'_, Manager> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn timers(&self) -> MutexGuard<'_, HashMap<NotificationId, JoinHandle<()>>> {
        self.timers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
