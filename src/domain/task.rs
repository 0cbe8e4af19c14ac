//! Task domain model
//!
//! A task is one to-do item: an ID, a title, and a due date with minute
//! precision. Due dates carry no timezone; they are whatever the user's
//! wall clock says.

use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};

use super::id::TaskId;

/// Canonical textual date-time format, e.g. `2024-01-02 09:00`.
///
/// Shared by user input parsing and the on-disk record format.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parses a due date in the canonical format
pub fn parse_due(s: &str) -> chrono::ParseResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), DATE_FORMAT)
}

/// Formats a due date in the canonical format
pub fn format_due(due: &NaiveDateTime) -> String {
    due.format(DATE_FORMAT).to_string()
}

fn serialize_due<S>(due: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_due(due))
}

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Task {
    /// Unique identifier, assigned by the list and immutable afterwards
    pub id: TaskId,

    /// Human-readable title; empty is allowed
    pub title: String,

    /// When the task is due (minute precision)
    #[serde(serialize_with = "serialize_due")]
    pub due: NaiveDateTime,
}

impl Task {
    /// Creates a task with the given ID, title and due date
    pub fn new(id: TaskId, title: impl Into<String>, due: NaiveDateTime) -> Self {
        Self {
            id,
            title: title.into(),
            due,
        }
    }

    /// Replaces the title
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Replaces the due date
    pub fn set_due(&mut self, due: NaiveDateTime) {
        self.due = due;
    }
}
