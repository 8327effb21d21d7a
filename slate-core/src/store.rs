//! TaskStore: owned task collection with a deadline index and sortable view.
//!
//! Design:
//! - `tasks` keeps canonical insertion order and is append-only.
//! - `view` is a permutation of `tasks` used for listings; `sort_by`
//!   rebuilds it from insertion order with a stable sort, so equal keys
//!   always keep insertion order no matter how often the view is re-sorted.
//! - `deadline_index` holds `(deadline, position)` pairs kept sorted on
//!   insert, so exact-deadline lookup is a binary search.
//!
//! The store is single-writer; share it across threads only behind one lock
//! around the whole store.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::error::Result;
use crate::scheduler::{self, SchedulePlan};
use crate::sort_key::SortKey;
use crate::task::Task;

#[derive(Debug, Default, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
    view: Vec<usize>,
    deadline_index: Vec<(NaiveDateTime, usize)>,
    sort_key: Option<SortKey>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Task at position `i` of the current view.
    pub fn get(&self, i: usize) -> Option<&Task> {
        self.view.get(i).map(|&pos| &self.tasks[pos])
    }

    /// Key of the last successful sort, if any.
    pub fn sort_key(&self) -> Option<SortKey> {
        self.sort_key
    }

    pub fn add(&mut self, task: Task) {
        let pos = self.tasks.len();
        let key = (task.deadline, pos);
        let at = self.deadline_index.partition_point(|entry| *entry < key);
        self.deadline_index.insert(at, key);

        // A sorted view stays sorted: equal keys go after existing ones.
        let at = match self.sort_key {
            Some(sort_key) => self
                .view
                .partition_point(|&i| sort_key.compare(&self.tasks[i], &task).is_le()),
            None => self.view.len(),
        };
        self.view.insert(at, pos);

        debug!(name = %task.name, position = pos, "task added");
        self.tasks.push(task);
    }

    /// Tasks in the current view order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.view.iter().map(|&pos| &self.tasks[pos])
    }

    /// Tasks in the order they were added.
    pub fn insertion_order(&self) -> &[Task] {
        &self.tasks
    }

    /// Find a task whose deadline equals `deadline` exactly.
    ///
    /// With several matches, the earliest-added one is returned.
    pub fn find_by_deadline(&self, deadline: NaiveDateTime) -> Option<&Task> {
        let at = self.deadline_index.partition_point(|(d, _)| *d < deadline);
        match self.deadline_index.get(at) {
            Some(&(d, pos)) if d == deadline => Some(&self.tasks[pos]),
            _ => None,
        }
    }

    /// Sort the view by a field name. Unknown names leave the store as is.
    pub fn sort_by(&mut self, field: &str) -> Result<()> {
        let key: SortKey = field.parse()?;
        self.sort_by_key(key);
        Ok(())
    }

    pub fn sort_by_key(&mut self, key: SortKey) {
        let mut view: Vec<usize> = (0..self.tasks.len()).collect();
        view.sort_by(|&a, &b| key.compare(&self.tasks[a], &self.tasks[b]));
        self.view = view;
        self.sort_key = Some(key);
        debug!(key = %key, tasks = self.tasks.len(), "tasks sorted");
    }

    /// Optimal non-overlapping schedule over a snapshot of the store.
    pub fn optimise_schedule(&self) -> Vec<Task> {
        scheduler::optimise_schedule(&self.tasks)
    }

    pub fn plan(&self) -> SchedulePlan {
        scheduler::optimise(&self.tasks)
    }
}

impl Extend<Task> for TaskStore {
    fn extend<I: IntoIterator<Item = Task>>(&mut self, iter: I) {
        for task in iter {
            self.add(task);
        }
    }
}

impl FromIterator<Task> for TaskStore {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        let mut store = TaskStore::new();
        store.extend(iter);
        store
    }
}
