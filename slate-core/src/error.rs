use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `sort_by` was given a field name that is not a sort key.
    #[error(
        "invalid sort field '{0}' \
         (expected one of: name, category, priority, start_time, end_time, deadline)"
    )]
    InvalidField(String),

    #[error("invalid timestamp '{value}': expected format {format}")]
    InvalidTimestamp { value: String, format: String },

    #[error("invalid priority '{0}': expected a non-negative integer")]
    InvalidPriority(String),

    #[error("end time {end} is before start time {start}")]
    InvalidInterval { start: String, end: String },

    #[error("task name must not be empty")]
    EmptyName,

    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    #[error("malformed task '{0}': expected name|category|priority|start|end|deadline")]
    MalformedTaskSpec(String),
}

pub type Result<T> = std::result::Result<T, Error>;
