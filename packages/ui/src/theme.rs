//! Light/dark theme, remembered in local storage.

use dioxus::prelude::*;
use store::KeyValueStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Stored theme, or `Light` when absent, unreadable or unknown.
    pub fn load(storage: &impl KeyValueStore, key: &str) -> Self {
        match storage.get_item(key).ok().flatten().as_deref() {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn save(self, storage: &impl KeyValueStore, key: &str) {
        if let Err(err) = storage.set_item(key, self.as_str()) {
            tracing::warn!("failed to save theme: {err}");
        }
    }
}

/// Reflect the theme on the document root (`<html data-theme="dark">`).
pub fn apply_theme(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("theme set to {}", theme.as_str());
    }
}

#[component]
pub fn ThemeToggle() -> Element {
    let stores = crate::use_stores();
    let mut theme = use_signal(|| {
        let stores = stores.peek();
        Theme::load(stores.storage(), &stores.config().theme_key)
    });

    use_effect(move || apply_theme(theme()));

    let onclick = move |_| {
        let next = theme().toggled();
        let stores = stores.peek();
        next.save(stores.storage(), &stores.config().theme_key);
        theme.set(next);
    };

    rsx! {
        button {
            class: "theme-toggle",
            title: "Toggle theme",
            onclick: onclick,
            if theme() == Theme::Dark { "\u{2600}" } else { "\u{263E}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemoryStore;

    #[test]
    fn test_theme_persists() {
        let storage = MemoryStore::new();
        assert_eq!(Theme::load(&storage, "theme"), Theme::Light);

        Theme::Dark.save(&storage, "theme");
        assert_eq!(Theme::load(&storage, "theme"), Theme::Dark);
        assert_eq!(storage.get_item("theme").unwrap().as_deref(), Some("dark"));

        Theme::Dark.toggled().save(&storage, "theme");
        assert_eq!(Theme::load(&storage, "theme"), Theme::Light);
    }

    #[test]
    fn test_unknown_value_is_light() {
        let storage = MemoryStore::new();
        storage.set_item("theme", "solarized").unwrap();
        assert_eq!(Theme::load(&storage, "theme"), Theme::Light);
    }
}
