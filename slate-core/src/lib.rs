//! slate-core: task model, task store and the weighted interval scheduler

pub mod error;
pub mod input;
pub mod scheduler;
pub mod sort_key;
pub mod store;
pub mod task;
pub mod time;

pub use error::{Error, Result};
pub use input::{TaskDraft, parse_category, parse_priority, parse_task_spec};
pub use scheduler::{Interval, SchedulePlan, optimise, optimise_schedule, select};
pub use sort_key::SortKey;
pub use store::TaskStore;
pub use task::{Category, Task};
pub use time::{DEFAULT_FORMAT, format_timestamp, parse_timestamp};
