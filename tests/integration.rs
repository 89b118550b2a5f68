// SPDX-License-Identifier: MPL-2.0
use std::time::Duration;

use tempfile::tempdir;
use toast_queue::config::{self, Config};
use toast_queue::diagnostics::ToastEventKind;
use toast_queue::notifications::{Severity, Timing, ToastProvider, ToastRequest};
use tokio::time::sleep;

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

#[tokio::test(start_paused = true)]
async fn two_toasts_enqueued_in_order_leave_in_order() {
    let provider = ToastProvider::new();
    let toasts = provider.handle();

    toasts.toast(ToastRequest::new().with_title("A"));
    sleep(ms(10)).await;
    toasts.toast(ToastRequest::new().with_title("B"));

    // Immediately after both: [A, B] in admission order.
    let active = toasts.active();
    let titles: Vec<&str> = active.iter().filter_map(|n| n.title()).collect();
    assert_eq!(titles, vec!["A", "B"]);

    // After 4000ms both have begun closing.
    sleep(ms(4005)).await;
    let active = toasts.active();
    assert_eq!(active.len(), 2);
    assert!(active.iter().all(|n| n.is_closing()));

    // After 4200ms (plus B's 10ms offset) both are absent.
    sleep(ms(300)).await;
    assert!(toasts.active().is_empty());
}

#[tokio::test(start_paused = true)]
async fn early_close_does_not_disturb_the_other_toast() {
    let provider = ToastProvider::new();
    let toasts = provider.handle();

    let x = toasts.toast(ToastRequest::new().with_title("X"));
    sleep(ms(10)).await;
    toasts.toast(ToastRequest::new().with_title("Y"));

    sleep(ms(490)).await; // t = 500ms
    toasts.close(x);

    sleep(ms(210)).await; // t = 710ms: X gone, Y untouched
    let active = toasts.active();
    let titles: Vec<&str> = active.iter().filter_map(|n| n.title()).collect();
    assert_eq!(titles, vec!["Y"]);
    assert!(!active[0].is_closing());

    sleep(ms(3400)).await; // t = 4110ms: Y closing but still shown
    let active = toasts.active();
    assert_eq!(active.len(), 1);
    assert!(active[0].is_closing());

    sleep(ms(200)).await; // t = 4310ms: past Y's 4210ms removal
    assert!(toasts.active().is_empty());
}

#[tokio::test(start_paused = true)]
async fn configured_timing_drives_the_lifecycle() {
    let timing = Timing {
        display: ms(1000),
        grace: ms(100),
        max_active: None,
    };
    let provider = ToastProvider::with_timing(timing);
    let toasts = provider.handle();

    toasts.toast(ToastRequest::destructive().with_title("Short-lived"));
    sleep(ms(1050)).await;
    let active = toasts.active();
    assert_eq!(active.len(), 1);
    assert!(active[0].is_closing());
    assert!(active[0].severity().is_destructive());

    sleep(ms(100)).await; // past 1100ms
    assert!(toasts.active().is_empty());
}

#[tokio::test(start_paused = true)]
async fn snapshots_track_every_lifecycle_step() {
    let provider = ToastProvider::new();
    let toasts = provider.handle();
    let mut snapshots = toasts.subscribe();

    toasts.toast(ToastRequest::new().with_title("tracked"));
    snapshots.changed().await.expect("provider alive");
    assert_eq!(snapshots.borrow_and_update().len(), 1);

    sleep(ms(4100)).await;
    {
        let latest = snapshots.borrow_and_update();
        assert_eq!(latest.len(), 1);
        assert!(latest[0].is_closing());
    }

    sleep(ms(200)).await;
    assert!(snapshots.borrow_and_update().is_empty());
}

#[tokio::test(start_paused = true)]
async fn capacity_bound_evicts_oldest_across_the_handle() {
    let timing = Timing {
        max_active: Some(2),
        ..Timing::default()
    };
    let provider = ToastProvider::with_timing(timing);
    let toasts = provider.handle();

    for title in ["one", "two", "three"] {
        toasts.toast(ToastRequest::new().with_title(title));
    }

    let titles: Vec<String> = toasts
        .active()
        .iter()
        .filter_map(|n| n.title().map(str::to_string))
        .collect();
    assert_eq!(titles, vec!["two", "three"]);
}

#[tokio::test(start_paused = true)]
async fn diagnostics_record_the_full_lifecycle() {
    let (provider, mut collector) =
        ToastProvider::with_diagnostics(Timing::default(), Config::default().log_capacity());
    let toasts = provider.handle();

    let id = toasts.toast(ToastRequest::destructive().with_title("boom"));
    sleep(ms(500)).await;
    toasts.close(id);
    sleep(ms(300)).await;

    collector.drain();
    let kinds: Vec<ToastEventKind> = collector.log().iter().map(|e| e.kind.clone()).collect();
    assert_eq!(
        kinds,
        vec![
            ToastEventKind::Enqueued {
                id,
                severity: Severity::Destructive
            },
            ToastEventKind::CloseRequested { id },
            ToastEventKind::Removed { id },
        ]
    );
}

#[test]
fn settings_round_trip_preserves_lifecycle_timing() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let written = Config {
        display_duration_ms: Some(1500),
        exit_grace_ms: Some(50),
        max_active: Some(2),
        event_log_capacity: Some(64),
    };
    config::save_to_path(&written, &path).expect("Failed to save config");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let timing = loaded.timing();
    assert_eq!(timing.display, Duration::from_millis(1500));
    assert_eq!(timing.grace, Duration::from_millis(50));
    assert_eq!(timing.max_active, Some(2));
    assert_eq!(loaded.log_capacity().value(), 64);
}

#[test]
#[should_panic(expected = "outside an active ToastProvider")]
fn mis_wired_handle_is_caught_at_development_time() {
    let handle = {
        let provider = ToastProvider::new();
        provider.handle()
    };
    let _ = handle.active();
}
