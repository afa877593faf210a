//! Wire types for the todo API, defined independently of the server crate.
//! The integration test catches any schema drift between the two.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A todo as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

/// Body for both create and update. Update replaces every field, so there
/// is no partial variant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoPayload {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl TodoPayload {
    pub fn new(title: impl Into<String>, completed: bool) -> Self {
        Self {
            title: title.into(),
            completed,
        }
    }
}

/// Field name to violation message, as returned with a 400.
pub type FieldErrors = BTreeMap<String, String>;
