//! Authentication context and hooks for the UI.
//!
//! The backend owns the session; the UI only observes it. [`AuthProvider`]
//! asks the backend who is signed in on mount and re-checks periodically, so an
//! expired session is noticed even on pages that make no backend calls.

use api::{ApiError, BackendClient, UserInfo};
use dioxus::prelude::*;

const SESSION_CHECK_SECS: u64 = 60;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn signed_in(user: UserInfo) -> Self {
        Self {
            user: Some(user),
            loading: false,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            user: None,
            loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

pub fn use_backend() -> BackendClient {
    use_context::<BackendClient>()
}

/// Apply the outcome of a backend call to the session: a 401/403 signs the user out.
pub fn handle_api_error(auth: &mut Signal<AuthState>, err: &ApiError) {
    if err.requires_logout() {
        tracing::info!("session rejected by backend, signing out");
        auth.set(AuthState::signed_out());
    } else {
        tracing::error!("backend request failed: {err}");
    }
}

/// Provider component that manages authentication state.
/// Must be rendered inside [`crate::StoresProvider`], which supplies the client.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);
    let client = use_backend();

    // Fetch the current user on mount
    let _ = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                match client.current_user().await {
                    Ok(Some(user)) => auth_state.set(AuthState::signed_in(user)),
                    Ok(None) => auth_state.set(AuthState::signed_out()),
                    Err(err) => {
                        tracing::error!("failed to fetch current user: {err}");
                        auth_state.set(AuthState::signed_out());
                    }
                }
            }
        }
    });

    // Periodic session check
    use_future(move || {
        let client = client.clone();
        async move {
            loop {
                #[cfg(target_arch = "wasm32")]
                gloo_timers::future::sleep(std::time::Duration::from_secs(SESSION_CHECK_SECS)).await;
                #[cfg(not(target_arch = "wasm32"))]
                tokio::time::sleep(std::time::Duration::from_secs(SESSION_CHECK_SECS)).await;

                // Don't check while initial load is still in progress or nobody is signed in
                let current = auth_state();
                if current.loading || !current.is_authenticated() {
                    continue;
                }
                match client.current_user().await {
                    Ok(Some(user)) => {
                        if current.user.as_ref() != Some(&user) {
                            auth_state.set(AuthState::signed_in(user));
                        }
                    }
                    Ok(None) => auth_state.set(AuthState::signed_out()),
                    // Network trouble is not a reason to sign the user out
                    Err(err) => tracing::warn!("session check failed: {err}"),
                }
            }
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button that starts the Google sign-in redirect through the backend.
#[component]
pub fn LoginButton(
    #[props(default = "Sign in with Google".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let client = use_backend();
    let mut redirecting = use_signal(|| false);

    let onclick = move |_| {
        let url = client.login_url();
        redirecting.set(true);
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(err) = window.location().set_href(&url) {
                    tracing::error!("failed to redirect to login: {err:?}");
                    redirecting.set(false);
                }
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            tracing::info!("open {url} in a browser to sign in");
            redirecting.set(false);
        }
    };

    rsx! {
        button {
            class: "{class}",
            disabled: redirecting(),
            onclick: onclick,
            if redirecting() {
                "Redirecting..."
            } else {
                "{label}"
            }
        }
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth_state = use_auth();
    let client = use_backend();

    let onclick = move |_| {
        let client = client.clone();
        async move {
            if let Err(err) = client.logout().await {
                tracing::warn!("logout request failed: {err}");
            }
            // The local session ends either way
            auth_state.set(AuthState::signed_out());
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
