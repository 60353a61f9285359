use dioxus::prelude::*;

use crate::Route;

/// Shell for every signed-in page. Visitors without a session are sent to the login page.
#[component]
pub fn AppLayout() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();

    use_effect(move || {
        let state = auth();
        if !state.loading && !state.is_authenticated() {
            tracing::info!("no active session, redirecting to login");
            nav.replace(Route::Login {});
        }
    });

    let state = auth();
    if state.loading {
        return rsx! {
            div { class: "page", p { class: "list-status", "Loading..." } }
        };
    }
    if !state.is_authenticated() {
        return rsx! {};
    }

    rsx! {
        ui::Navbar {
            Link { to: Route::Dashboard {}, active_class: "active", "Dashboard" }
            Link { to: Route::NotesView {}, active_class: "active", "Notes" }
            Link { to: Route::RemindersView {}, active_class: "active", "Reminders" }
            Link { to: Route::ContactsView {}, active_class: "active", "Contacts" }
            Link { to: Route::MailView {}, active_class: "active", "Mail" }
            Link { to: Route::DriveView {}, active_class: "active", "Drive" }
            Link { to: Route::PhotosView {}, active_class: "active", "Photos" }
        }
        main {
            Outlet::<Route> {}
        }
    }
}
