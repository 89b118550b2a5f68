// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording toast lifecycle activity.
//!
//! Events are captured by producers through a non-blocking
//! [`DiagnosticsHandle`] and retained in a memory-bounded ring buffer.
//!
//! # Architecture
//!
//! - [`EventLog`]: ring buffer with clamped [`LogCapacity`]
//! - [`ToastEvent`]: a timestamped lifecycle event
//! - [`DiagnosticsCollector`]: drains the event channel into the log

mod buffer;
mod collector;
mod events;

pub use buffer::{log_capacity_bounds, EventLog, LogCapacity};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{ToastEvent, ToastEventKind};
