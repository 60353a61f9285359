//! Sign-in page.

use dioxus::prelude::*;
use ui::{use_auth, LoginButton};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    // Already signed in: go straight to the dashboard
    use_effect(move || {
        if !auth().loading && auth().is_authenticated() {
            nav.replace(Route::Dashboard {});
        }
    });

    rsx! {
        div {
            class: "login-page",
            h1 { "Pulse" }
            p { class: "muted", "Contacts, mail, files, notes and reminders in one place." }
            LoginButton { label: "Continue with Google", class: "btn primary login-btn" }
        }
    }
}
