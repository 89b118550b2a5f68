// SPDX-License-Identifier: MPL-2.0
//! Toast notification queue.
//!
//! Screens request toasts; the queue admits them in order, shows each for a
//! fixed duration, marks it closing, waits out an exit-transition grace
//! period, and removes it. The active collection is republished to
//! subscribers on every change.
//!
//! # Components
//!
//! - [`notification`] - `ToastRequest`, `Notification`, and `Severity`
//! - [`manager`] - synchronous `Manager` owning the active collection
//! - [`service`] - `ToastService` with the timed dismissal lifecycle
//! - [`provider`] - `ToastProvider`/`ToastHandle` access boundary
//!
//! # Usage
//!
//! ```ignore
//! use toast_queue::notifications::{ToastProvider, ToastRequest};
//!
//! // Created once at application start, inside the tokio runtime.
//! let provider = ToastProvider::new();
//! let toasts = provider.handle();
//!
//! // From any screen:
//! toasts.toast(ToastRequest::new().with_title("Profile saved"));
//!
//! // The presentation layer renders each published snapshot:
//! let mut snapshots = toasts.subscribe();
//! while snapshots.changed().await.is_ok() {
//!     render(&snapshots.borrow_and_update());
//! }
//! ```

mod manager;
mod notification;
mod provider;
mod service;

pub use manager::{Admitted, Manager};
pub use notification::{Notification, NotificationId, Severity, ToastRequest};
pub use provider::{ToastHandle, ToastProvider};
pub use service::{Timing, ToastService};
