//! Weighted interval scheduling.
//!
//! # Algorithm
//!
//! 1. Stable-sort the intervals by end time (ties keep input order).
//! 2. For each position `i` (1-indexed) find `p(i)`, the latest earlier
//!    position whose end is `<=` the start of `i`; `0` means none.
//!    Ends are sorted, so this is a binary search over the prefix.
//! 3. `dp[0] = 0`, `dp[i] = max(dp[i-1], w(i) + dp[p(i)])`.
//! 4. Walk back from `n`: include `i` only when `w(i) + dp[p(i)] > dp[i-1]`
//!    and jump to `p(i)`, otherwise step to `i-1`. Equal values exclude.
//! 5. Reverse the picks to get ascending end-time order.
//!
//! # Complexity
//! O(n log n) for the sort and the predecessor searches, O(n) for the DP.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::task::Task;

/// Anything with a half-open `[start, end)` span and a weight.
pub trait Interval {
    type Time: Ord + Copy;

    fn start(&self) -> Self::Time;
    fn end(&self) -> Self::Time;
    fn weight(&self) -> u64;
}

impl Interval for Task {
    type Time = NaiveDateTime;

    fn start(&self) -> NaiveDateTime {
        self.start_time
    }

    fn end(&self) -> NaiveDateTime {
        self.end_time
    }

    fn weight(&self) -> u64 {
        u64::from(self.priority)
    }
}

impl<T: Interval> Interval for &T {
    type Time = T::Time;

    fn start(&self) -> Self::Time {
        (*self).start()
    }

    fn end(&self) -> Self::Time {
        (*self).end()
    }

    fn weight(&self) -> u64 {
        (*self).weight()
    }
}

/// Indices into `items` of a maximum-weight compatible subset, in ascending
/// end-time order.
pub fn select<T: Interval>(items: &[T]) -> Vec<usize> {
    let n = items.len();
    if n == 0 {
        return Vec::new();
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by_key(|&i| items[i].end());
    let ends: Vec<T::Time> = order.iter().map(|&i| items[i].end()).collect();

    // p[k] for k in 1..=n; p[0] is unused.
    let mut p = vec![0usize; n + 1];
    for k in 1..=n {
        let start = items[order[k - 1]].start();
        p[k] = ends[..k - 1].partition_point(|end| *end <= start);
    }

    let mut dp = vec![0u64; n + 1];
    let include = |k: usize, dp: &[u64]| items[order[k - 1]].weight().saturating_add(dp[p[k]]);
    for k in 1..=n {
        let best = dp[k - 1].max(include(k, &dp));
        dp[k] = best;
    }

    let mut picked = Vec::new();
    let mut k = n;
    while k > 0 {
        if include(k, &dp) > dp[k - 1] {
            picked.push(order[k - 1]);
            k = p[k];
        } else {
            k -= 1;
        }
    }
    picked.reverse();

    debug!(
        intervals = n,
        selected = picked.len(),
        total_weight = dp[n],
        "selected compatible intervals"
    );

    picked
}

/// Result of optimising a task list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SchedulePlan {
    /// Chosen tasks, ascending by end time.
    pub selected: Vec<Task>,
    /// Tasks left out, in input order.
    pub skipped: Vec<Task>,
    pub total_priority: u64,
}

/// Optimise and keep both the chosen and the skipped tasks.
pub fn optimise(tasks: &[Task]) -> SchedulePlan {
    let picked = select(tasks);

    let mut chosen = vec![false; tasks.len()];
    for &i in &picked {
        chosen[i] = true;
    }

    let selected: Vec<Task> = picked.iter().map(|&i| tasks[i].clone()).collect();
    let skipped = tasks
        .iter()
        .zip(&chosen)
        .filter(|(_, chosen)| !**chosen)
        .map(|(t, _)| t.clone())
        .collect();
    let total_priority = selected.iter().map(|t| u64::from(t.priority)).sum();

    SchedulePlan {
        selected,
        skipped,
        total_priority,
    }
}

/// Maximum-priority set of mutually non-overlapping tasks, ascending by end
/// time. Empty input gives an empty schedule.
pub fn optimise_schedule(tasks: &[Task]) -> Vec<Task> {
    optimise(tasks).selected
}
