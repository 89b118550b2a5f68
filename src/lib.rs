// SPDX-License-Identifier: MPL-2.0
//! `toast_queue` is a headless toast-notification queue for UI shells.
//!
//! It owns an ordered collection of active toasts, admits new ones from
//! anywhere in the application through a shared handle, schedules their
//! automatic dismissal, and republishes read-only snapshots for a
//! presentation layer to render. Rendering itself is out of scope; the
//! crate has no drawing code and no platform dependencies.

#![doc(html_root_url = "https://docs.rs/toast_queue/0.1.0")]

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod notifications;
