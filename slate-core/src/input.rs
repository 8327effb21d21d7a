//! Building tasks from user-supplied strings.
//!
//! Used by both the interactive menu (one field per prompt) and the
//! one-shot commands (`name|category|priority|start|end|deadline`).

use crate::error::{Error, Result};
use crate::task::{Category, Task};
use crate::time::parse_timestamp;

pub fn parse_priority(s: &str) -> Result<u32> {
    s.trim()
        .parse::<u32>()
        .map_err(|_| Error::InvalidPriority(s.trim().to_string()))
}

/// Parse a category tag, checking it against `allowed` when non-empty.
pub fn parse_category(s: &str, allowed: &[String]) -> Result<Category> {
    let category = Category::from(s);
    if allowed.is_empty() || allowed.iter().any(|a| Category::from(a.as_str()) == category) {
        Ok(category)
    } else {
        Err(Error::UnknownCategory(category.as_str().to_string()))
    }
}

/// Raw task fields as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub name: String,
    pub category: String,
    pub priority: String,
    pub start_time: String,
    pub end_time: String,
    pub deadline: String,
}

impl TaskDraft {
    /// Validate every field and build the task.
    pub fn build(&self, format: &str, allowed_categories: &[String]) -> Result<Task> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(Error::EmptyName);
        }

        let category = parse_category(&self.category, allowed_categories)?;
        let priority = parse_priority(&self.priority)?;
        let start_time = parse_timestamp(&self.start_time, format)?;
        let end_time = parse_timestamp(&self.end_time, format)?;
        let deadline = parse_timestamp(&self.deadline, format)?;

        if end_time < start_time {
            return Err(Error::InvalidInterval {
                start: self.start_time.trim().to_string(),
                end: self.end_time.trim().to_string(),
            });
        }

        Ok(Task::new(name, category, priority, start_time, end_time, deadline))
    }
}

/// Split `name|category|priority|start|end|deadline` into a draft.
pub fn parse_task_spec(spec: &str) -> Result<TaskDraft> {
    let fields: Vec<&str> = spec.split('|').map(str::trim).collect();
    let [name, category, priority, start_time, end_time, deadline] = fields.as_slice() else {
        return Err(Error::MalformedTaskSpec(spec.to_string()));
    };

    Ok(TaskDraft {
        name: name.to_string(),
        category: category.to_string(),
        priority: priority.to_string(),
        start_time: start_time.to_string(),
        end_time: end_time.to_string(),
        deadline: deadline.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::DEFAULT_FORMAT;
    use rstest::rstest;

    fn draft() -> TaskDraft {
        parse_task_spec(
            "Essay | academic | 4 | 2026-03-02 09:00 | 2026-03-02 11:00 | 2026-03-03 23:59",
        )
        .unwrap()
    }

    #[test]
    fn builds_task_from_spec() {
        let t = draft().build(DEFAULT_FORMAT, &[]).unwrap();
        assert_eq!(t.name, "Essay");
        assert_eq!(t.category, Category::Academic);
        assert_eq!(t.priority, 4);
        assert_eq!(t.duration().num_minutes(), 120);
    }

    #[test]
    fn point_event_is_accepted() {
        let mut d = draft();
        d.end_time = d.start_time.clone();
        assert!(d.build(DEFAULT_FORMAT, &[]).unwrap().is_point_event());
    }

    #[rstest]
    #[case::too_few("a|b|1")]
    #[case::too_many("a|personal|1|x|y|z|extra")]
    #[case::empty("")]
    fn rejects_wrong_field_count(#[case] spec: &str) {
        assert_eq!(
            parse_task_spec(spec),
            Err(Error::MalformedTaskSpec(spec.to_string()))
        );
    }

    #[rstest]
    #[case::negative("-1")]
    #[case::fraction("2.5")]
    #[case::word("high")]
    fn rejects_bad_priority(#[case] priority: &str) {
        let mut d = draft();
        d.priority = priority.to_string();
        assert!(matches!(
            d.build(DEFAULT_FORMAT, &[]),
            Err(Error::InvalidPriority(_))
        ));
    }

    #[test]
    fn rejects_end_before_start() {
        let mut d = draft();
        d.end_time = "2026-03-02 08:00".to_string();
        assert!(matches!(
            d.build(DEFAULT_FORMAT, &[]),
            Err(Error::InvalidInterval { .. })
        ));
    }

    #[test]
    fn rejects_blank_name() {
        let mut d = draft();
        d.name = "   ".to_string();
        assert_eq!(d.build(DEFAULT_FORMAT, &[]), Err(Error::EmptyName));
    }

    #[test]
    fn rejects_bad_timestamp() {
        let mut d = draft();
        d.deadline = "tomorrow".to_string();
        assert!(matches!(
            d.build(DEFAULT_FORMAT, &[]),
            Err(Error::InvalidTimestamp { .. })
        ));
    }

    #[test]
    fn category_allow_list() {
        let allowed = vec!["personal".to_string(), "Academic".to_string()];
        assert_eq!(parse_category("ACADEMIC", &allowed), Ok(Category::Academic));
        assert_eq!(
            parse_category("work", &allowed),
            Err(Error::UnknownCategory("work".to_string()))
        );
        assert_eq!(
            parse_category("work", &[]),
            Ok(Category::Other("work".to_string()))
        );
    }
}
