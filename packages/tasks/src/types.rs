// ABOUTME: Task type definitions
// ABOUTME: Structures for stored to-do items and the input used to create them

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// Identifier assigned by the store on creation. Never reused.
pub type TaskId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub id: TaskId,
    pub description: String,
    pub tags: Vec<String>,
    /// Keeps the offset it was created with; due-date queries compare the
    /// calendar date in that offset.
    pub due: DateTime<FixedOffset>,
}

impl Task {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskCreateInput {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "unset_due")]
    pub due: DateTime<FixedOffset>,
}

/// Due instant for tasks created without one: 0001-01-01T00:00:00+00:00.
pub fn unset_due() -> DateTime<FixedOffset> {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .expect("0001-01-01T00:00:00 is a valid datetime")
        .and_utc()
        .fixed_offset()
}

impl TaskCreateInput {
    pub fn new(description: impl Into<String>, due: DateTime<FixedOffset>) -> Self {
        Self {
            description: description.into(),
            tags: Vec::new(),
            due,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}
