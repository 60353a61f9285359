//! HTTP client for the backend REST API.

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::errors::{check_status, ApiError};
use crate::models::{Contact, DriveFile, MailMessage, Photo, UserInfo};
use store::BackendConfig;

pub const USER_PATH: &str = "/api/user";
pub const CONTACTS_PATH: &str = "/api/contacts";
pub const MAIL_PATH: &str = "/api/mail";
pub const DRIVE_PATH: &str = "/api/drive";
pub const PHOTOS_PATH: &str = "/api/photos";
pub const LOGIN_PATH: &str = "/auth/google";
pub const LOGOUT_PATH: &str = "/auth/logout";

/// Credentialed client for one backend. Cheap to clone.
#[derive(Clone, Debug)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(config: &BackendConfig) -> Self {
        let http = build_http(config).unwrap_or_else(|err| {
            warn!("falling back to default http client: {err}");
            reqwest::Client::new()
        });
        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Where the browser goes to start the Google sign-in redirect.
    pub fn login_url(&self) -> String {
        self.url(LOGIN_PATH)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// The signed-in user, or `None` when there is no live session.
    pub async fn current_user(&self) -> Result<Option<UserInfo>, ApiError> {
        match self.fetch_json(USER_PATH).await {
            Ok(user) => Ok(Some(user)),
            Err(ApiError::Unauthorized(_)) => Ok(None),
            Err(err) => Err(err),
        }
    }

    pub async fn contacts(&self) -> Result<Vec<Contact>, ApiError> {
        self.fetch_json(CONTACTS_PATH).await
    }

    pub async fn mail(&self) -> Result<Vec<MailMessage>, ApiError> {
        self.fetch_json(MAIL_PATH).await
    }

    pub async fn drive_files(&self) -> Result<Vec<DriveFile>, ApiError> {
        self.fetch_json(DRIVE_PATH).await
    }

    pub async fn photos(&self) -> Result<Vec<Photo>, ApiError> {
        self.fetch_json(PHOTOS_PATH).await
    }

    /// End the backend session. An already-expired session counts as logged out.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let request = with_credentials(self.http.post(self.url(LOGOUT_PATH)));
        let response = request.send().await?;
        match check_status(response.status()) {
            Ok(()) | Err(ApiError::Unauthorized(_)) => Ok(()),
            Err(err) => Err(err),
        }
    }

    async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        debug!("GET {path}");
        let request = with_credentials(self.http.get(self.url(path)));
        let response = request.send().await?;
        check_status(response.status())?;
        Ok(response.json::<T>().await?)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http(config: &BackendConfig) -> reqwest::Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder().cookie_store(true);
    if config.timeout_secs > 0 {
        builder = builder.timeout(std::time::Duration::from_secs(config.timeout_secs));
    }
    builder.build()
}

#[cfg(target_arch = "wasm32")]
fn build_http(_config: &BackendConfig) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder().build()
}

/// Send the session cookie along with the request.
fn with_credentials(request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    #[cfg(target_arch = "wasm32")]
    {
        request.fetch_credentials_include()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        request
    }
}
