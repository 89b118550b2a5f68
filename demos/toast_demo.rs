// SPDX-License-Identifier: MPL-2.0
//! Headless demo: prints each published snapshot of the toast queue.
//!
//! Run with `cargo run --example toast_demo`.

use std::time::Duration;

use toast_queue::diagnostics::LogCapacity;
use toast_queue::notifications::{Notification, Timing, ToastProvider, ToastRequest};

fn render(toasts: &[Notification]) {
    if toasts.is_empty() {
        println!("(no toasts)");
        return;
    }
    for toast in toasts {
        let marker = if toast.severity().is_destructive() {
            "!"
        } else {
            "*"
        };
        let state = if toast.is_closing() { "closing" } else { "shown" };
        println!(
            "{} [{}] {} — {}",
            marker,
            state,
            toast.title().unwrap_or("(untitled)"),
            toast.description().unwrap_or(""),
        );
    }
}

#[tokio::main]
async fn main() {
    // Short timing so the demo finishes quickly.
    let timing = Timing {
        display: Duration::from_millis(1200),
        grace: Duration::from_millis(200),
        max_active: None,
    };
    let (provider, mut collector) = ToastProvider::with_diagnostics(timing, LogCapacity::default());
    let toasts = provider.handle();

    let mut snapshots = toasts.subscribe();
    let printer = tokio::spawn(async move {
        while snapshots.changed().await.is_ok() {
            let latest = snapshots.borrow_and_update().clone();
            println!("--- snapshot ---");
            render(&latest);
        }
    });

    toasts.toast(
        ToastRequest::new()
            .with_title("Profile saved")
            .with_description("Your changes are live"),
    );
    tokio::time::sleep(Duration::from_millis(300)).await;

    let failing = toasts.toast(
        ToastRequest::destructive()
            .with_title("Upload failed")
            .with_description("Check your connection"),
    );
    tokio::time::sleep(Duration::from_millis(400)).await;

    // The user taps the close control on the error toast.
    toasts.close(failing);

    tokio::time::sleep(Duration::from_millis(1500)).await;
    drop(provider);
    let _ = printer.await;

    collector.drain();
    println!("--- recorded events ---");
    for event in collector.log().iter() {
        println!("{:?}", event.kind);
    }
}
