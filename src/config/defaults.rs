// SPDX-License-Identifier: MPL-2.0
//! Default values for user-configurable settings.

/// How long a toast stays on screen before its removal sequence starts.
pub const DEFAULT_DISPLAY_DURATION_MS: u64 = 4000;

/// Delay between the closing mark and final removal, reserved for the
/// presentation layer's exit transition.
pub const DEFAULT_EXIT_GRACE_MS: u64 = 200;

/// Default diagnostics event-log capacity (number of retained events).
pub const DEFAULT_EVENT_LOG_CAPACITY: usize = 256;
