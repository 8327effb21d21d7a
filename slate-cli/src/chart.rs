//! Text timeline ("Gantt") rendering.
//!
//! One row per task, bars scaled across the span covered by all tasks.
//! Only reads name, category, start and end.

use slate_core::{Category, DEFAULT_FORMAT, Task};

const MAX_LABEL: usize = 20;

/// Widest bar area the renderer will draw.
pub const MAX_CHART_WIDTH: usize = 500;

fn glyph(category: &Category) -> char {
    match category {
        Category::Academic => '#',
        Category::Personal => '=',
        Category::Other(_) => '*',
    }
}

fn label(name: &str) -> String {
    if name.chars().count() <= MAX_LABEL {
        name.to_string()
    } else {
        let mut s: String = name.chars().take(MAX_LABEL - 1).collect();
        s.push('~');
        s
    }
}

pub fn render_timeline<'a>(tasks: impl IntoIterator<Item = &'a Task>, width: usize) -> String {
    let tasks: Vec<&Task> = tasks.into_iter().collect();
    let (Some(first), Some(last)) = (
        tasks.iter().map(|t| t.start_time).min(),
        tasks.iter().map(|t| t.end_time).max(),
    ) else {
        return "(no tasks)\n".to_string();
    };

    let width = width.clamp(1, MAX_CHART_WIDTH) as i64;
    let span = (last - first).num_seconds().max(1);
    let labels: Vec<String> = tasks.iter().map(|t| label(&t.name)).collect();
    let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!(
        "Timeline {} -> {}\n",
        first.format(DEFAULT_FORMAT),
        last.format(DEFAULT_FORMAT)
    ));

    for (task, name) in tasks.iter().zip(&labels) {
        let offset = |at: chrono::NaiveDateTime| (at - first).num_seconds().saturating_mul(width);
        let mut from = offset(task.start_time) / span;
        let mut to = (offset(task.end_time) + span - 1) / span;
        if to <= from {
            // Point events still get one column.
            from = from.min(width - 1);
            to = from + 1;
        }

        let bar: String = (0..width)
            .map(|col| if (from..to).contains(&col) { glyph(&task.category) } else { ' ' })
            .collect();
        out.push_str(&format!("{name:<label_width$} |{bar}|\n"));
    }

    out.push_str("Legend: # academic  = personal  * other\n");
    out
}
