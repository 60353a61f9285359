use serde::{Deserialize, Serialize};

/// A file in the user's Google Drive.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DriveFile {
    pub id: String,
    pub name: String,
    #[serde(default, alias = "mime_type")]
    pub mime_type: String,
    #[serde(default, alias = "modified_time")]
    pub modified_time: Option<String>,
    #[serde(default, alias = "web_view_link")]
    pub web_view_link: Option<String>,
    /// Byte size as reported by Drive (a decimal string; absent for folders and Docs).
    #[serde(default)]
    pub size: Option<String>,
}

impl DriveFile {
    pub fn is_folder(&self) -> bool {
        self.mime_type == "application/vnd.google-apps.folder"
    }

    /// Size formatted for display, e.g. "1.5 MB".
    pub fn human_size(&self) -> Option<String> {
        let bytes: f64 = self.size.as_deref()?.parse().ok()?;
        let units = ["B", "KB", "MB", "GB", "TB"];
        let mut value = bytes;
        let mut unit = 0;
        while value >= 1024.0 && unit < units.len() - 1 {
            value /= 1024.0;
            unit += 1;
        }
        Some(if unit == 0 {
            format!("{value} {}", units[unit])
        } else {
            format!("{value:.1} {}", units[unit])
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_drive_listing() {
        let files: Vec<DriveFile> = serde_json::from_str(
            r#"[
                {"id":"1","name":"Plans","mimeType":"application/vnd.google-apps.folder"},
                {"id":"2","name":"deck.pdf","mimeType":"application/pdf","size":"1572864",
                 "webViewLink":"https://drive.google.com/file/d/2"}
            ]"#,
        )
        .unwrap();
        assert!(files[0].is_folder());
        assert_eq!(files[0].human_size(), None);
        assert!(!files[1].is_folder());
        assert_eq!(files[1].human_size().as_deref(), Some("1.5 MB"));
        assert_eq!(
            files[1].web_view_link.as_deref(),
            Some("https://drive.google.com/file/d/2")
        );
    }

    #[test]
    fn test_small_sizes_in_bytes() {
        let file = DriveFile {
            size: Some("512".to_string()),
            ..DriveFile::default()
        };
        assert_eq!(file.human_size().as_deref(), Some("512 B"));
    }
}
