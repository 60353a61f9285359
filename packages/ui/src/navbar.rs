use dioxus::prelude::*;

use crate::{use_auth, LogoutButton, ThemeToggle};

/// Top bar: app links passed as children, then the signed-in user and session controls.
#[component]
pub fn Navbar(children: Element) -> Element {
    let auth = use_auth();

    rsx! {
        nav {
            class: "navbar",
            span { class: "brand", "Pulse" }
            div { class: "nav-links", {children} }
            div {
                class: "nav-session",
                ThemeToggle {}
                if let Some(user) = auth().user {
                    if let Some(picture) = user.picture.clone() {
                        img { class: "avatar", src: "{picture}", alt: "" }
                    }
                    span { class: "user-name", "{user.display_name()}" }
                    LogoutButton { class: "btn small" }
                }
            }
        }
    }
}
