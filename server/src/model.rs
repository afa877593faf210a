//! The `Todo` entity and the request payload accepted by create and update.
//!
//! Validation is an explicit pass over the payload that collects every
//! violated constraint into a [`FieldErrors`] map before anything reaches
//! storage.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Longest accepted title, counted in UTF-16 code units.
pub const TITLE_MAX_LEN: usize = 255;

pub const MSG_NOT_EMPTY: &str = "must not be empty";
pub const MSG_TITLE_SIZE: &str = "size must be between 0 and 255";

/// Field name to violation message, ordered by field name.
pub type FieldErrors = BTreeMap<String, String>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

/// A todo handed to the repository. `id: None` asks for an insert with a
/// fresh id; `Some(id)` overwrites (or creates) the record with that id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TodoRecord {
    pub id: Option<i64>,
    pub title: String,
    pub completed: bool,
}

impl TodoRecord {
    pub fn new(title: impl Into<String>, completed: bool) -> Self {
        Self {
            id: None,
            title: title.into(),
            completed,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

/// Body of `POST /api/todos` and `PUT /api/todos/{id}`.
///
/// `title` is optional at the JSON level so that a missing title is reported
/// through the field-error map like an empty one. Any `id` key in the body is
/// ignored: on create the server assigns it, on update the path fixes it.
/// A `null` or missing `completed` means `false`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TodoPayload {
    pub title: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
}

impl TodoPayload {
    /// Checks every field constraint, returning all violations at once.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        match self.title.as_deref() {
            None | Some("") => {
                errors.insert("title".to_string(), MSG_NOT_EMPTY.to_string());
            }
            Some(title) if title.encode_utf16().count() > TITLE_MAX_LEN => {
                errors.insert("title".to_string(), MSG_TITLE_SIZE.to_string());
            }
            Some(_) => {}
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validates and converts into a record ready for storage.
    pub fn into_record(self) -> Result<TodoRecord, FieldErrors> {
        self.validate()?;
        Ok(TodoRecord::new(
            self.title.unwrap_or_default(),
            self.completed.unwrap_or(false),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(title: Option<&str>) -> TodoPayload {
        TodoPayload {
            title: title.map(str::to_string),
            completed: None,
        }
    }

    #[test]
    fn todo_serializes_to_json() {
        let todo = Todo {
            id: 7,
            title: "Test".to_string(),
            completed: false,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json, serde_json::json!({"id": 7, "title": "Test", "completed": false}));
    }

    #[test]
    fn payload_defaults_completed_to_false() {
        let input: TodoPayload = serde_json::from_str(r#"{"title":"No completed field"}"#).unwrap();
        assert_eq!(input.title.as_deref(), Some("No completed field"));
        assert!(!input.into_record().unwrap().completed);
    }

    #[test]
    fn payload_treats_null_completed_as_false() {
        let input: TodoPayload =
            serde_json::from_str(r#"{"title":"x","completed":null}"#).unwrap();
        assert_eq!(input.completed, None);
        assert!(!input.into_record().unwrap().completed);
    }

    #[test]
    fn payload_ignores_id() {
        let input: TodoPayload =
            serde_json::from_str(r#"{"id":42,"title":"Done","completed":true}"#).unwrap();
        assert_eq!(input.title.as_deref(), Some("Done"));
        assert_eq!(input.completed, Some(true));
    }

    #[test]
    fn payload_accepts_missing_title() {
        let input: TodoPayload = serde_json::from_str(r#"{"completed":true}"#).unwrap();
        assert!(input.title.is_none());
    }

    #[test]
    fn valid_title_passes() {
        assert!(payload(Some("Buy milk")).validate().is_ok());
    }

    #[test]
    fn empty_title_is_rejected() {
        let errors = payload(Some("")).validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["title"], MSG_NOT_EMPTY);
    }

    #[test]
    fn missing_title_is_rejected_as_empty() {
        let errors = payload(None).validate().unwrap_err();
        assert_eq!(errors["title"], MSG_NOT_EMPTY);
    }

    #[test]
    fn title_length_boundary() {
        let at_limit = "a".repeat(TITLE_MAX_LEN);
        assert!(payload(Some(&at_limit)).validate().is_ok());

        let over = "a".repeat(TITLE_MAX_LEN + 1);
        let errors = payload(Some(&over)).validate().unwrap_err();
        assert_eq!(errors["title"], MSG_TITLE_SIZE);
    }

    #[test]
    fn title_length_counts_utf16_units_not_bytes() {
        // 255 two-byte characters is 510 bytes but 255 UTF-16 units.
        let title = "é".repeat(TITLE_MAX_LEN);
        assert!(payload(Some(&title)).validate().is_ok());
    }

    #[test]
    fn astral_characters_count_twice() {
        // Each emoji is one char but a surrogate pair in UTF-16.
        let at_limit = format!("{}a", "😀".repeat(127));
        assert!(payload(Some(&at_limit)).validate().is_ok());

        let over = "😀".repeat(128);
        assert_eq!(over.chars().count(), 128);
        let errors = payload(Some(&over)).validate().unwrap_err();
        assert_eq!(errors["title"], MSG_TITLE_SIZE);
    }

    #[test]
    fn whitespace_title_is_not_empty() {
        assert!(payload(Some(" ")).validate().is_ok());
    }

    #[test]
    fn into_record_has_no_id() {
        let record = TodoPayload {
            title: Some("Walk dog".to_string()),
            completed: Some(true),
        }
        .into_record()
        .unwrap();
        assert_eq!(record, TodoRecord::new("Walk dog", true));
        assert_eq!(record.clone().with_id(3).id, Some(3));
    }
}
