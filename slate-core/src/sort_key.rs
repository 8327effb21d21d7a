//! Named sort keys for task listings.
//!
//! Each key maps to an explicit comparison over two tasks, so "sort by field
//! name" never needs field reflection.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::task::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Name,
    Category,
    Priority,
    StartTime,
    EndTime,
    Deadline,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::Name,
        SortKey::Category,
        SortKey::Priority,
        SortKey::StartTime,
        SortKey::EndTime,
        SortKey::Deadline,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Category => "category",
            SortKey::Priority => "priority",
            SortKey::StartTime => "start_time",
            SortKey::EndTime => "end_time",
            SortKey::Deadline => "deadline",
        }
    }

    /// Ascending comparison on this key.
    pub fn compare(&self, a: &Task, b: &Task) -> Ordering {
        match self {
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Category => a.category.as_str().cmp(b.category.as_str()),
            SortKey::Priority => a.priority.cmp(&b.priority),
            SortKey::StartTime => a.start_time.cmp(&b.start_time),
            SortKey::EndTime => a.end_time.cmp(&b.end_time),
            SortKey::Deadline => a.deadline.cmp(&b.deadline),
        }
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            // `task_type` is the older name for the category field.
            "category" | "task_type" => Ok(SortKey::Category),
            "priority" => Ok(SortKey::Priority),
            "start_time" => Ok(SortKey::StartTime),
            "end_time" => Ok(SortKey::EndTime),
            "deadline" => Ok(SortKey::Deadline),
            _ => Err(Error::InvalidField(s.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
