// SPDX-License-Identifier: MPL-2.0
//! Event collection plumbing.
//!
//! Producers hold a cheap [`DiagnosticsHandle`] and log events without
//! blocking; a [`DiagnosticsCollector`] drains them into the bounded
//! [`EventLog`] on demand.

use tokio::sync::mpsc::{self, Receiver, Sender};

use super::buffer::{EventLog, LogCapacity};
use super::events::{ToastEvent, ToastEventKind};

/// Bound on in-flight events between producers and the collector.
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Cloneable, non-blocking logging handle.
#[derive(Debug, Clone)]
pub struct DiagnosticsHandle {
    event_tx: Sender<ToastEvent>,
}

impl DiagnosticsHandle {
    /// Logs a lifecycle event with the current timestamp.
    ///
    /// Non-blocking; the event is dropped if the channel is full.
    pub fn log(&self, kind: ToastEventKind) {
        let _ = self.event_tx.try_send(ToastEvent::new(kind));
    }
}

/// Owns the receiving side of the event channel and the retained log.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    event_rx: Receiver<ToastEvent>,
    log: EventLog,
}

impl DiagnosticsCollector {
    /// Creates a collector/handle pair with the given log capacity.
    #[must_use]
    pub fn new(capacity: LogCapacity) -> (Self, DiagnosticsHandle) {
        let (event_tx, event_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        (
            Self {
                event_rx,
                log: EventLog::new(capacity),
            },
            DiagnosticsHandle { event_tx },
        )
    }

    /// Moves all pending events into the log; returns how many were drained.
    pub fn drain(&mut self) -> usize {
        let mut drained = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.log.push(event);
            drained += 1;
        }
        drained
    }

    /// Returns the retained event log.
    #[must_use]
    pub fn log(&self) -> &EventLog {
        &self.log
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drained_events_land_in_the_log() {
        let (mut collector, handle) = DiagnosticsCollector::new(LogCapacity::default());
        handle.log(ToastEventKind::Shutdown { cleared: 0 });
        handle.log(ToastEventKind::Shutdown { cleared: 1 });

        assert!(collector.log().is_empty());
        assert_eq!(collector.drain(), 2);
        assert_eq!(collector.log().len(), 2);
    }

    #[test]
    fn full_channel_drops_events_instead_of_blocking() {
        let (mut collector, handle) = DiagnosticsCollector::new(LogCapacity::default());
        for i in 0..EVENT_CHANNEL_CAPACITY + 10 {
            handle.log(ToastEventKind::Shutdown { cleared: i });
        }

        assert_eq!(collector.drain(), EVENT_CHANNEL_CAPACITY);
    }

    #[test]
    fn cloned_handles_feed_the_same_collector() {
        let (mut collector, handle) = DiagnosticsCollector::new(LogCapacity::default());
        let other = handle.clone();
        handle.log(ToastEventKind::Shutdown { cleared: 0 });
        other.log(ToastEventKind::Shutdown { cleared: 1 });

        assert_eq!(collector.drain(), 2);
    }
}
