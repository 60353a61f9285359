//! # Signed-in user profile
//!
//! [`UserInfo`] is what the backend returns from `/api/user` for a live session:
//! the Google account's id, email, and optional display name and avatar.
//! The helper [`UserInfo::display_name`] returns the user's name or falls back to
//! their email address.

use serde::{Deserialize, Serialize};

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "avatar_url")]
    pub picture: Option<String>,
}

impl UserInfo {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_falls_back_to_email() {
        let mut user: UserInfo =
            serde_json::from_str(r#"{"id":"1","email":"ana@example.com"}"#).unwrap();
        assert_eq!(user.display_name(), "ana@example.com");

        user.name = Some(" ".to_string());
        assert_eq!(user.display_name(), "ana@example.com");

        user.name = Some("Ana".to_string());
        assert_eq!(user.display_name(), "Ana");
    }
}
