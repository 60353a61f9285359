//! # Domain models for local records
//!
//! Notes and reminders share one shape, [`Record<F>`]: an id, the kind-specific
//! fields `F` inlined at the top level, and two timestamps. The kind is
//! described by [`RecordKind`], which names the storage key, a display label,
//! and the fields that must be filled in before a record is accepted.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Note`] = `Record<NoteFields>` | Free-text note: `title` + `content`. Stored under `localNotes`. |
//! | [`Reminder`] = `Record<ReminderFields>` | Reminder: `text` + `time` (a date-time string). Stored under `localReminders`. |
//!
//! ## Stored form
//!
//! ```json
//! {"id":1714557600000,"title":"A","content":"B",
//!  "created_at":"2024-05-01T10:00:00.000Z","updated_at":"2024-05-01T10:00:00.000Z"}
//! ```

use std::fmt::Debug;
use std::ops::Deref;

use chrono::{DateTime, Local, NaiveDateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

pub type RecordId = i64;

/// An entity kind managed by [`crate::CrudStore`].
pub trait RecordKind: Clone + Debug + PartialEq + Serialize + DeserializeOwned {
    /// Human label used in messages: "Note", "Reminder".
    const LABEL: &'static str;
    /// Default key of the persisted collection.
    const STORAGE_KEY: &'static str;

    /// Names of required fields that are empty or whitespace only.
    fn missing_fields(&self) -> Vec<&'static str>;

    fn validate(&self) -> Result<(), ValidationError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                kind: Self::LABEL,
                missing,
            })
        }
    }
}

/// A stored entity with its identity and audit timestamps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record<F> {
    pub id: RecordId,
    #[serde(flatten)]
    pub fields: F,
    #[serde(with = "crate::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "crate::timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl<F> Deref for Record<F> {
    type Target = F;

    fn deref(&self) -> &F {
        &self.fields
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NoteFields {
    pub title: String,
    pub content: String,
}

impl NoteFields {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

impl RecordKind for NoteFields {
    const LABEL: &'static str = "Note";
    const STORAGE_KEY: &'static str = "localNotes";

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if is_blank(&self.title) {
            missing.push("title");
        }
        if is_blank(&self.content) {
            missing.push("content");
        }
        missing
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReminderFields {
    pub text: String,
    /// Due date-time as entered, usually `YYYY-MM-DDTHH:MM`.
    pub time: String,
}

impl ReminderFields {
    pub fn new(text: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            time: time.into(),
        }
    }

    /// Parse `time` into a wall-clock date-time, if it is in a recognised form.
    pub fn due_at(&self) -> Option<NaiveDateTime> {
        let raw = self.time.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Local).naive_local());
        }
        ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    }
}

impl RecordKind for ReminderFields {
    const LABEL: &'static str = "Reminder";
    const STORAGE_KEY: &'static str = "localReminders";

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if is_blank(&self.text) {
            missing.push("text");
        }
        if is_blank(&self.time) {
            missing.push("time");
        }
        missing
    }
}

pub type Note = Record<NoteFields>;
pub type Reminder = Record<ReminderFields>;

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    #[test]
    fn test_note_serializes_flat() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        let note = Note {
            id: 1714557600000,
            fields: NoteFields::new("A", "B"),
            created_at: ts,
            updated_at: ts,
        };
        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(json["id"], 1714557600000i64);
        assert_eq!(json["title"], "A");
        assert_eq!(json["content"], "B");
        assert_eq!(json["created_at"], "2024-05-01T10:00:00.000Z");
        assert!(json.get("fields").is_none());
    }

    #[test]
    fn test_reads_browser_written_reminder() {
        let raw = r#"{"id":1700000000000,"text":"Call Ana","time":"2024-06-01T09:30",
            "created_at":"2023-11-14T22:13:20.000Z","updated_at":"2023-11-14T22:13:20.000Z"}"#;
        let reminder: Reminder = serde_json::from_str(raw).unwrap();
        assert_eq!(reminder.text, "Call Ana");
        assert_eq!(
            reminder.due_at(),
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap().and_hms_opt(9, 30, 0)
        );
    }

    #[test]
    fn test_validation_lists_missing_fields() {
        let err = NoteFields::new("  ", "").validate().unwrap_err();
        assert_eq!(err.kind, "Note");
        assert_eq!(err.missing, vec!["title", "content"]);
        assert_eq!(
            err.to_string(),
            "Note is missing required field(s): title, content"
        );

        assert!(ReminderFields::new("Call", "2024-06-01T09:30").validate().is_ok());
        assert_eq!(
            ReminderFields::new("Call", "").validate().unwrap_err().missing,
            vec!["time"]
        );
    }

    #[test]
    fn test_due_at_unparseable() {
        assert!(ReminderFields::new("x", "tomorrow-ish").due_at().is_none());
        assert!(ReminderFields::new("x", "2024-06-01T09:30:00Z").due_at().is_some());
    }

    #[test]
    fn test_due_at_with_offset_is_local_wall_time() {
        let with_offset = ReminderFields::new("x", "2024-06-01T09:30:00+02:00").due_at();
        let as_utc = ReminderFields::new("x", "2024-06-01T07:30:00Z").due_at();
        assert!(with_offset.is_some());
        assert_eq!(with_offset, as_utc);
        let expected = "2024-06-01T07:30:00Z"
            .parse::<DateTime<Utc>>()
            .unwrap()
            .with_timezone(&Local)
            .naive_local();
        assert_eq!(with_offset, Some(expected));
    }
}
