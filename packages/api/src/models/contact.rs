use serde::{Deserialize, Serialize};

/// A contact from the user's Google address book.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(default, alias = "resource_name")]
    pub resource_name: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub emails: Vec<String>,
    #[serde(default)]
    pub phones: Vec<String>,
    #[serde(default)]
    pub organization: Option<String>,
}

impl Contact {
    /// Name to show, falling back to the first email address.
    pub fn display_name(&self) -> &str {
        if !self.name.trim().is_empty() {
            &self.name
        } else {
            self.emails.first().map(String::as_str).unwrap_or("Unnamed contact")
        }
    }
}
