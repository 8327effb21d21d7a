use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use slate_core::{Task, TaskStore, optimise, optimise_schedule};

fn base() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 1, 5)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// (start offset, length, priority) in minutes.
///
/// Lengths are kept positive on purpose: brute force checks compatibility
/// with `Task::overlaps`, which matches the scheduler's end-order rule only
/// for positive-length tasks. Zero-length tasks are pinned by unit tests in
/// `scheduler.rs`.
fn build(specs: &[(i64, i64, u32)]) -> Vec<Task> {
    let t0 = base();
    specs
        .iter()
        .enumerate()
        .map(|(i, &(start, len, priority))| {
            Task::new(
                format!("t{i}"),
                if i % 2 == 0 { "academic" } else { "personal" },
                priority,
                t0 + Duration::minutes(start),
                t0 + Duration::minutes(start + len),
                t0 + Duration::minutes(start + len + (i as i64 % 3) * 60),
            )
        })
        .collect()
}

fn total(tasks: &[Task]) -> u64 {
    tasks.iter().map(|t| u64::from(t.priority)).sum()
}

/// Best achievable total by trying every subset.
fn brute_force_best(tasks: &[Task]) -> u64 {
    let n = tasks.len();
    let mut best = 0;
    for mask in 0u32..(1 << n) {
        let chosen: Vec<&Task> = (0..n)
            .filter(|&i| mask & (1 << i) != 0)
            .map(|i| &tasks[i])
            .collect();
        let compatible = chosen
            .iter()
            .enumerate()
            .all(|(i, a)| chosen[i + 1..].iter().all(|b| !a.overlaps(b)));
        if compatible {
            best = best.max(chosen.iter().map(|t| u64::from(t.priority)).sum());
        }
    }
    best
}

fn task_specs(max_len: usize) -> impl Strategy<Value = Vec<(i64, i64, u32)>> {
    prop::collection::vec((0i64..60, 1i64..25, 0u32..10), 0..max_len)
}

proptest! {
    #[test]
    fn selected_tasks_never_overlap(specs in task_specs(25)) {
        let tasks = build(&specs);
        let out = optimise_schedule(&tasks);
        for (i, a) in out.iter().enumerate() {
            for b in &out[i + 1..] {
                prop_assert!(!a.overlaps(b), "{a} overlaps {b}");
            }
        }
    }

    #[test]
    fn selection_is_optimal(specs in task_specs(11)) {
        let tasks = build(&specs);
        let plan = optimise(&tasks);
        prop_assert_eq!(plan.total_priority, total(&plan.selected));
        prop_assert_eq!(plan.total_priority, brute_force_best(&tasks));
    }

    #[test]
    fn selection_is_an_ordered_subset(specs in task_specs(25)) {
        let tasks = build(&specs);
        let plan = optimise(&tasks);
        prop_assert_eq!(plan.selected.len() + plan.skipped.len(), tasks.len());
        for t in &plan.selected {
            prop_assert!(tasks.contains(t));
        }
        for w in plan.selected.windows(2) {
            prop_assert!(w[0].end_time <= w[1].start_time);
        }
    }

    #[test]
    fn optimise_is_idempotent(specs in task_specs(25)) {
        let tasks = build(&specs);
        prop_assert_eq!(optimise_schedule(&tasks), optimise_schedule(&tasks));
    }

    #[test]
    fn priority_sort_is_stable(specs in task_specs(30)) {
        let mut store: TaskStore = build(&specs).into_iter().collect();
        store.sort_by("priority").unwrap();

        let sorted: Vec<&Task> = store.tasks().collect();
        for w in sorted.windows(2) {
            prop_assert!(w[0].priority <= w[1].priority);
            if w[0].priority == w[1].priority {
                let pos = |t: &Task| t.name[1..].parse::<usize>().unwrap();
                prop_assert!(pos(w[0]) < pos(w[1]));
            }
        }
    }

    #[test]
    fn deadline_lookup_round_trips(specs in task_specs(25), query_min in 0i64..200) {
        let tasks = build(&specs);
        let store: TaskStore = tasks.iter().cloned().collect();

        for t in &tasks {
            let hit = store.find_by_deadline(t.deadline);
            prop_assert_eq!(hit.map(|h| h.deadline), Some(t.deadline));
        }

        let query = base() + Duration::minutes(query_min);
        let expected = tasks.iter().find(|t| t.deadline == query);
        prop_assert_eq!(store.find_by_deadline(query), expected);
    }
}

#[test]
fn empty_store_schedules_nothing() {
    assert!(TaskStore::new().optimise_schedule().is_empty());
}
