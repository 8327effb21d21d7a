//! Task model for the scheduling assistant.
//!
//! Times are naive local date-times: the scheduler only needs them to be
//! comparable, so there is no timezone handling at this layer.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Task category tag.
///
/// Opaque to the optimizer; callers use it for grouping and chart colours.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Personal,
    Academic,
    /// Any other tag, stored lowercased.
    Other(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Category::Personal => "personal",
            Category::Academic => "academic",
            Category::Other(tag) => tag,
        }
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        let tag = s.trim().to_lowercase();
        match tag.as_str() {
            "personal" => Category::Personal,
            "academic" => Category::Academic,
            _ => Category::Other(tag),
        }
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        Category::from(s.as_str())
    }
}

impl From<Category> for String {
    fn from(c: Category) -> Self {
        c.as_str().to_string()
    }
}

impl FromStr for Category {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Category::from(s))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A time-bounded task with a priority weight.
///
/// `[start_time, end_time)` is the interval used for overlap checks;
/// `deadline` is only used for lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    pub category: Category,

    /// Higher is more valuable to include.
    pub priority: u32,

    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub deadline: NaiveDateTime,
}

impl Task {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<Category>,
        priority: u32,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        deadline: NaiveDateTime,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            priority,
            start_time,
            end_time,
            deadline,
        }
    }

    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }

    /// Zero-length tasks are kept as point events.
    pub fn is_point_event(&self) -> bool {
        self.start_time == self.end_time
    }

    /// Two tasks overlap when each starts before the other ends.
    ///
    /// One task ending exactly when the other starts is not an overlap.
    pub fn overlaps(&self, other: &Task) -> bool {
        self.start_time < other.end_time && other.start_time < self.end_time
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): Priority {}, Start: {}, End: {}, Deadline: {}",
            self.name,
            self.category,
            self.priority,
            self.start_time.format(crate::time::DEFAULT_FORMAT),
            self.end_time.format(crate::time::DEFAULT_FORMAT),
            self.deadline.format(crate::time::DEFAULT_FORMAT),
        )
    }
}
