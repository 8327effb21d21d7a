use slate_core::{SchedulePlan, Task, format_timestamp};

use crate::config::Config;

/// One-line task description using the configured timestamp format.
pub fn describe(task: &Task, cfg: &Config) -> String {
    let fmt = &cfg.input.datetime_format;
    let mut s = format!(
        "{} ({}): Priority {}, Start: {}, End: {}",
        task.name,
        task.category,
        task.priority,
        format_timestamp(task.start_time, fmt),
        format_timestamp(task.end_time, fmt),
    );
    if cfg.display.show_deadline {
        s.push_str(&format!(", Deadline: {}", format_timestamp(task.deadline, fmt)));
    }
    s
}

pub fn describe_plan(plan: &SchedulePlan, cfg: &Config) -> String {
    let mut s = String::from("Optimal Task Schedule:\n");
    if plan.selected.is_empty() {
        s.push_str("(nothing to schedule)\n");
    }
    for t in &plan.selected {
        s.push_str(&format!("- {}\n", describe(t, cfg)));
    }
    s.push_str(&format!("Total priority: {}\n", plan.total_priority));
    if !plan.skipped.is_empty() {
        let names: Vec<&str> = plan.skipped.iter().map(|t| t.name.as_str()).collect();
        s.push_str(&format!("Skipped: {}\n", names.join(", ")));
    }
    s
}
