//! Shared loading for the pages that only display backend data.

use std::future::Future;

use api::{ApiError, BackendClient};
use dioxus::prelude::*;

use crate::auth::{handle_api_error, use_auth, use_backend};

pub type ListResource<T> = Resource<Result<Vec<T>, String>>;

/// Fetch a list from the backend once per mount. A rejected session signs the
/// user out; other failures are reported as the error string.
pub fn use_backend_list<T, F, Fut>(fetch: F) -> ListResource<T>
where
    T: 'static,
    F: Fn(BackendClient) -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    let client = use_backend();
    let mut auth = use_auth();
    use_resource(move || {
        let pending = fetch(client.clone());
        async move {
            pending.await.map_err(|err| {
                handle_api_error(&mut auth, &err);
                err.to_string()
            })
        }
    })
}

/// Snapshot of a list resource: the items so far, whether it is still loading,
/// and the error if the fetch failed.
pub fn list_state<T: Clone + 'static>(list: &ListResource<T>) -> (Vec<T>, bool, Option<String>) {
    match &*list.read() {
        Some(Ok(items)) => (items.clone(), false, None),
        Some(Err(err)) => (Vec::new(), false, Some(err.clone())),
        None => (Vec::new(), true, None),
    }
}

/// Placeholder shown while a list is loading, failed or empty.
#[component]
pub fn ListStatus(
    loading: bool,
    #[props(!optional)] error: Option<String>,
    empty: bool,
    noun: String,
) -> Element {
    if loading {
        return rsx! { p { class: "list-status", "Loading {noun}..." } };
    }
    if let Some(error) = error {
        return rsx! { p { class: "list-status error", "Could not load {noun}: {error}" } };
    }
    if empty {
        return rsx! { p { class: "list-status", "No {noun} yet." } };
    }
    rsx! {}
}
