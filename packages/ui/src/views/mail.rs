use dioxus::prelude::*;

use crate::views::backend_list::{list_state, use_backend_list, ListStatus};

#[component]
pub fn MailView() -> Element {
    let messages = use_backend_list(|client| async move { client.mail().await });
    let (messages, loading, error) = list_state(&messages);
    let unread = messages.iter().filter(|m| m.unread).count();

    rsx! {
        div {
            class: "page mail",
            div {
                class: "page-header",
                h1 { "Mail" }
                if !messages.is_empty() {
                    span {
                        class: "muted",
                        "{unread} unread"
                    }
                }
            }
            ListStatus { loading, error, empty: messages.is_empty(), noun: "messages" }
            ul {
                class: "message-list",
                for message in messages {
                    li {
                        key: "{message.id}",
                        class: "message",
                        class: if message.unread { "unread" },
                        div {
                            class: "message-header",
                            span { class: "message-from", "{message.from}" }
                            span { class: "message-date", {message.date.clone().unwrap_or_default()} }
                        }
                        p { class: "message-subject", "{message.subject}" }
                        p { class: "message-snippet", "{message.snippet}" }
                    }
                }
            }
        }
    }
}
