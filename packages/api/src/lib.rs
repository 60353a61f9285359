//! # API crate: client for the Pulse CRM backend
//!
//! The backend owns the Google OAuth flow and the cookie session, and proxies the
//! user's Google data. This crate is the front-end's only way to reach it.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`BackendClient`]: credentialed `reqwest` calls for the user profile, contacts, mail, drive files, photos, and logout |
//! | [`config`] | Environment overrides for the backend location (native only) |
//! | [`errors`] | [`ApiError`], including the 401/403 signal that the session is gone |
//! | [`export`] | Contact export to CSV and vCard |
//! | [`models`] | Response types (`UserInfo`, `Contact`, `MailMessage`, `DriveFile`, `Photo`) |
//!
//! ## Session handling
//!
//! Every request carries the session cookie (`credentials: "include"` in the
//! browser, a cookie jar natively). A 401 or 403 from any endpoint surfaces as
//! [`ApiError::Unauthorized`]; callers treat that as "log out and return to the
//! login page" ([`ApiError::requires_logout`]).

pub mod client;
pub mod config;
pub mod errors;
pub mod export;
pub mod models;

pub use client::BackendClient;
pub use errors::ApiError;
pub use models::{Contact, DriveFile, MailMessage, Photo, UserInfo};

pub use store::BackendConfig;
