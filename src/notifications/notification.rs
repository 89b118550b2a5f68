// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the caller-facing `ToastRequest`, the manager-owned
//! `Notification`, and the `Severity` enum used throughout the queue.

use std::fmt;

/// Unique identifier for a notification.
///
/// Assigned by the manager at admission time; never supplied by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Returns the next unique notification ID.
    pub(crate) fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Severity of a toast. Affects presentation only, never the lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// Neutral informational toast.
    #[default]
    Default,
    /// Destructive or error toast.
    Destructive,
}

impl Severity {
    #[must_use]
    pub fn is_destructive(self) -> bool {
        matches!(self, Severity::Destructive)
    }
}

/// A caller-facing toast request: what to show, not how long or where.
///
/// All fields are optional; a request with neither title nor description is
/// permitted and renders as an empty toast.
#[derive(Debug, Clone, Default)]
pub struct ToastRequest {
    title: Option<String>,
    description: Option<String>,
    severity: Severity,
}

impl ToastRequest {
    /// Creates an empty request with default severity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty request with destructive severity.
    #[must_use]
    pub fn destructive() -> Self {
        Self {
            severity: Severity::Destructive,
            ..Self::default()
        }
    }

    /// Sets the short title text.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the longer description text.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Overrides the severity.
    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Returns the severity this request asks for.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns true if the request carries no visible payload.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }
}

/// A toast held by the manager, from admission until removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    id: NotificationId,
    title: Option<String>,
    description: Option<String>,
    severity: Severity,
    visible: bool,
    closing: bool,
}

impl Notification {
    /// Builds the stored value for a freshly admitted request.
    pub(crate) fn admit(id: NotificationId, request: ToastRequest) -> Self {
        Self {
            id,
            title: request.title,
            description: request.description,
            severity: request.severity,
            visible: true,
            closing: false,
        }
    }

    pub(crate) fn mark_closing(&mut self) {
        self.closing = true;
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the short title text, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the longer description text, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the severity.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// True from admission until removal is finalized.
    #[must_use]
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// True once the removal sequence has begun; the exit transition
    /// runs while this is set.
    #[must_use]
    pub fn is_closing(&self) -> bool {
        self.closing
    }
}
