use dioxus::prelude::*;

use ui::views::{ContactsView, Dashboard, DriveView, MailView, NotesView, PhotosView, RemindersView};
use views::{AppLayout, Login, NotFound};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/login")]
    Login {},
    #[layout(AppLayout)]
        #[route("/")]
        Dashboard {},
        #[route("/notes")]
        NotesView {},
        #[route("/reminders")]
        RemindersView {},
        #[route("/contacts")]
        ContactsView {},
        #[route("/mail")]
        MailView {},
        #[route("/drive")]
        DriveView {},
        #[route("/photos")]
        PhotosView {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn main() {
    if let Err(err) = dioxus::logger::init(dioxus::logger::tracing::Level::INFO) {
        eprintln!("failed to initialise logging: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ui::VIEWS_CSS }
        ui::StoresProvider {
            ui::AuthProvider {
                Router::<Route> {}
            }
        }
    }
}
