use chrono::NaiveDateTime;
use dioxus::prelude::*;
use tokio::sync::broadcast::error::RecvError;

use crate::{use_auth, use_stores};

/// Wall-clock time in the user's zone, matching how reminder times are entered.
pub fn local_now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

#[component]
pub fn Dashboard() -> Element {
    let stores = use_stores();
    let auth = use_auth();
    let mut summary = use_signal(|| stores.peek().read_summary(local_now()));

    // Re-read storage whenever any store reports a change
    use_future(move || async move {
        let mut changes = stores.peek().subscribe();
        loop {
            match changes.recv().await {
                Ok(change) => tracing::debug!(key = %change.key, "refreshing dashboard"),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "dashboard missed changes, refreshing")
                }
                Err(RecvError::Closed) => break,
            }
            summary.set(stores.peek().read_summary(local_now()));
        }
    });

    let greeting = match auth().user {
        Some(user) => format!("Welcome back, {}", user.display_name()),
        None => "Welcome".to_string(),
    };
    let current = summary();

    rsx! {
        div {
            class: "page dashboard",
            h1 { "{greeting}" }
            div {
                class: "stat-grid",
                StatCard { label: "Notes", value: current.notes }
                StatCard { label: "Reminders", value: current.reminders }
                StatCard { label: "Upcoming", value: current.upcoming }
            }
            section {
                class: "next-due",
                h2 { "Next reminder" }
                match current.next_due {
                    Some(reminder) => rsx! {
                        p { class: "next-due-text", "{reminder.text}" }
                        p { class: "next-due-time", "{reminder.time}" }
                    },
                    None => rsx! { p { class: "muted", "Nothing scheduled." } },
                }
            }
        }
    }
}

#[component]
fn StatCard(label: String, value: usize) -> Element {
    rsx! {
        div {
            class: "stat-card",
            span { class: "stat-value", "{value}" }
            span { class: "stat-label", "{label}" }
        }
    }
}
