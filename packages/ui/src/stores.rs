//! Shared local stores for all platforms.
//!
//! [`make_storage`] returns the platform-appropriate [`store::KeyValueStore`]:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorage`]
//! - **Desktop / Mobile** (native): files under `<data_dir>/pulse-crm/` via [`store::FileStore`]
//!
//! Either falls back to an in-memory store when persistent storage is not
//! available, so the pages still work for the lifetime of the session.
//!
//! [`StoresProvider`] opens one [`LocalStores`] per app and hands it to every
//! view through context; [`use_stores`] retrieves it.

use std::rc::Rc;

use dioxus::prelude::*;
use store::{KeyValueStore, LocalStores, MemoryStore, PulseConfig};

pub type SharedStorage = Rc<dyn KeyValueStore>;
pub type AppStores = LocalStores<SharedStorage>;

/// Load `pulse.toml` (native) or the defaults (web), with environment overrides.
pub fn load_config() -> PulseConfig {
    #[cfg(not(target_arch = "wasm32"))]
    let mut config = match data_dir() {
        Some(dir) => PulseConfig::read_from_dir(&dir).unwrap_or_else(|err| {
            tracing::warn!("ignoring unreadable {}: {err}", PulseConfig::filename());
            PulseConfig::default()
        }),
        None => PulseConfig::default(),
    };
    #[cfg(target_arch = "wasm32")]
    let mut config = PulseConfig::default();

    config.backend = api::config::with_env_overrides(config.backend);
    config
}

#[cfg(not(target_arch = "wasm32"))]
fn data_dir() -> Option<std::path::PathBuf> {
    dirs::data_dir().map(|base| base.join("pulse-crm"))
}

/// Create the platform-appropriate storage adapter.
pub fn make_storage(config: &PulseConfig) -> SharedStorage {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        match store::LocalStorage::from_window() {
            Ok(storage) => return Rc::new(storage),
            Err(err) => tracing::warn!("local storage unavailable, keeping records in memory: {err}"),
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        match config.storage.data_dir.clone().or_else(data_dir) {
            Some(dir) => return Rc::new(store::FileStore::new(dir)),
            None => tracing::warn!("no data directory, keeping records in memory"),
        }
    }
    let _ = config;
    Rc::new(MemoryStore::new())
}

pub fn use_stores() -> Signal<AppStores> {
    use_context::<Signal<AppStores>>()
}

pub fn use_config() -> PulseConfig {
    use_context::<PulseConfig>()
}

/// Opens the local stores and the backend client and provides them to children.
#[component]
pub fn StoresProvider(children: Element) -> Element {
    let config = use_context_provider(load_config);
    let _client = use_context_provider(|| api::BackendClient::new(&config.backend));
    let stores = use_signal(|| {
        let storage = make_storage(&config);
        LocalStores::open(storage, config.storage.clone())
    });
    use_context_provider(|| stores);

    // Apply the remembered theme before any page renders
    use_hook(|| {
        let stores = stores.peek();
        crate::apply_theme(crate::Theme::load(stores.storage(), &stores.config().theme_key));
    });

    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    use_hook(|| listen_for_other_tabs(stores));

    rsx! {
        {children}
    }
}

/// Reload a collection when another tab writes it. The browser fires `storage`
/// only in the other tabs of the origin, never in the one that wrote.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
fn listen_for_other_tabs(mut stores: Signal<AppStores>) {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::StorageEvent;

    let Some(window) = web_sys::window() else {
        return;
    };
    let on_storage = Closure::<dyn FnMut(StorageEvent)>::new(move |event: StorageEvent| {
        let key = event.key();
        let watched = {
            let current = stores.peek();
            key.as_deref()
                .map_or(true, |k| k == current.notes.key() || k == current.reminders.key())
        };
        if watched && stores.write().apply_external_change(key.as_deref()) {
            tracing::debug!(?key, "picked up a change from another tab");
        }
    });
    if let Err(err) =
        window.add_event_listener_with_callback("storage", on_storage.as_ref().unchecked_ref())
    {
        tracing::warn!("cannot watch other tabs: {err:?}");
        return;
    }
    // The listener lives as long as the page
    on_storage.forget();
}

/// Show a blocking message to the user.
pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::warn!("{message}");
    }
}
