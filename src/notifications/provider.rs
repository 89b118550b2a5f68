// SPDX-License-Identifier: MPL-2.0
//! The shared access point for requesting toasts.
//!
//! One `ToastProvider` is created at application start and owns the
//! service; any part of the UI tree holds a cheap [`ToastHandle`] instead
//! of wiring the service through explicitly. Dropping the provider tears
//! the service down, and a handle used after that fails loudly: it is a
//! configuration error, not a runtime condition.

use std::sync::{Arc, Weak};

use tokio::sync::watch;

use super::notification::{Notification, NotificationId, ToastRequest};
use super::service::{Timing, ToastService};
use crate::config::Config;
use crate::diagnostics::{DiagnosticsCollector, LogCapacity};

/// Owns the toast service for the lifetime of the application.
#[derive(Debug)]
pub struct ToastProvider {
    service: Arc<ToastService>,
}

impl ToastProvider {
    /// Creates a provider with default timing and no diagnostics.
    #[must_use]
    pub fn new() -> Self {
        Self::with_timing(Timing::default())
    }

    /// Creates a provider with explicit timing.
    #[must_use]
    pub fn with_timing(timing: Timing) -> Self {
        Self {
            service: ToastService::new(timing),
        }
    }

    /// Creates a provider that records lifecycle events, returning the
    /// collector that retains them.
    #[must_use]
    pub fn with_diagnostics(timing: Timing, capacity: LogCapacity) -> (Self, DiagnosticsCollector) {
        let (collector, handle) = DiagnosticsCollector::new(capacity);
        (
            Self {
                service: ToastService::with_diagnostics(timing, handle),
            },
            collector,
        )
    }

    /// Creates a provider from persisted configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> (Self, DiagnosticsCollector) {
        Self::with_diagnostics(config.timing(), config.log_capacity())
    }

    /// Returns a handle for requesting toasts from anywhere in the UI tree.
    #[must_use]
    pub fn handle(&self) -> ToastHandle {
        ToastHandle {
            service: Arc::downgrade(&self.service),
        }
    }
}

impl Default for ToastProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ToastProvider {
    fn drop(&mut self) {
        self.service.shutdown();
    }
}

/// Cheap, cloneable access to the provider's service.
///
/// Every operation panics if the owning [`ToastProvider`] is gone, so a
/// mis-wired integration is caught at development time instead of
/// silently dropping toasts.
#[derive(Debug, Clone)]
pub struct ToastHandle {
    service: Weak<ToastService>,
}

impl ToastHandle {
    /// Shows a toast; returns its id for optional early close.
    ///
    /// # Panics
    ///
    /// Panics if the owning provider is gone, or if called outside a
    /// tokio runtime.
    pub fn toast(&self, request: ToastRequest) -> NotificationId {
        let service = self.service();
        service.toast(request)
    }

    /// Requests an early close of a toast.
    ///
    /// # Panics
    ///
    /// Panics if the owning provider is gone, or if called outside a
    /// tokio runtime.
    pub fn close(&self, id: NotificationId) {
        let service = self.service();
        service.close(id);
    }

    /// Subscribes to snapshots of the active collection.
    ///
    /// # Panics
    ///
    /// Panics if the owning provider is gone.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<Notification>> {
        self.service().subscribe()
    }

    /// Returns a point-in-time snapshot of the active collection.
    ///
    /// # Panics
    ///
    /// Panics if the owning provider is gone.
    #[must_use]
    pub fn active(&self) -> Vec<Notification> {
        self.service().active()
    }

    fn service(&self) -> Arc<ToastService> {
        self.service
            .upgrade()
            .expect("ToastHandle used outside an active ToastProvider")
    }
}
