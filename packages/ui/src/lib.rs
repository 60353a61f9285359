//! Shared UI for Pulse: providers, page controllers and views.

use dioxus::prelude::*;

pub const VIEWS_CSS: Asset = asset!("/src/views/views.css");

pub mod page;
pub mod views;

mod markdown;
pub use markdown::render_markdown;

mod stores;
pub use stores::{alert, load_config, make_storage, use_config, use_stores, AppStores, SharedStorage, StoresProvider};

mod auth;
pub use auth::{handle_api_error, use_auth, use_backend, AuthProvider, AuthState, LoginButton, LogoutButton};

mod theme;
pub use theme::{apply_theme, Theme, ThemeToggle};

mod navbar;
pub use navbar::Navbar;
