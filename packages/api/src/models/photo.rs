use serde::{Deserialize, Serialize};

/// A media item from the user's Google Photos library.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: String,
    #[serde(default)]
    pub filename: String,
    #[serde(alias = "base_url")]
    pub base_url: String,
    #[serde(default, alias = "mime_type")]
    pub mime_type: String,
    #[serde(default, alias = "creation_time")]
    pub creation_time: Option<String>,
}

impl Photo {
    /// Thumbnail URL; Photos base URLs take size parameters after `=`.
    pub fn thumbnail_url(&self, size: u32) -> String {
        format!("{}=w{size}-h{size}-c", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thumbnail_url() {
        let photo: Photo = serde_json::from_str(
            r#"{"id":"p1","filename":"IMG_1.jpg","baseUrl":"https://lh3.googleusercontent.com/abc"}"#,
        )
        .unwrap();
        assert_eq!(
            photo.thumbnail_url(256),
            "https://lh3.googleusercontent.com/abc=w256-h256-c"
        );
    }
}
