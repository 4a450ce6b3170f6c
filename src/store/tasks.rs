//! The task store: canonical collection, mutation entry points, derived
//! views, and persistence-on-change.

use chrono::{DateTime, Local, NaiveDate, Utc};
use tracing::debug;

use crate::io::kv::KvStore;
use crate::model::task::{Task, seed_tasks};
use crate::ops::list_ops;
use crate::store::migrate::{StoredTask, migrate};

/// Storage key for the task collection.
pub const TASKS_KEY: &str = "tasks";

/// Owns the canonical ordered task collection.
///
/// All mutations go through the pure functions in [`list_ops`], which return
/// a brand-new collection or reject the command; [`TaskStore::commit`] is the
/// single choke-point that swaps in the new collection and persists it.
/// Rejected commands leave both memory and storage untouched.
pub struct TaskStore {
    tasks: Vec<Task>,
    kv: KvStore,
}

impl TaskStore {
    /// Load the persisted collection, or seed the example tasks when nothing
    /// has been stored yet. Loaded records pass through the migration
    /// pass, and the result is written back so migrations are one-time.
    pub fn open(kv: KvStore) -> Self {
        let tasks = match kv.get::<Vec<StoredTask>>(TASKS_KEY) {
            Some(records) => migrate(records, Utc::now()),
            None => seed_tasks(),
        };
        let store = TaskStore { tasks, kv };
        store.persist();
        store
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Add a task; returns the assigned id, or None if the title was blank.
    pub fn add_task(&mut self, title: &str, due_date: Option<DateTime<Utc>>) -> Option<u64> {
        let next = list_ops::add_task(&self.tasks, title, due_date)?;
        let id = next.last()?.id;
        self.commit(next);
        Some(id)
    }

    /// Flip completion on the task with `id`; false if no such task.
    pub fn toggle_completed(&mut self, id: u64) -> bool {
        self.apply(list_ops::toggle_completed(&self.tasks, id))
    }

    /// Remove the task with `id`; false if no such task.
    pub fn delete_task(&mut self, id: u64) -> bool {
        self.apply(list_ops::delete_task(&self.tasks, id))
    }

    /// Replace the title of the task with `id`; false if the title was blank
    /// or no task matched.
    pub fn update_task(&mut self, id: u64, new_title: &str) -> bool {
        self.apply(list_ops::update_task(&self.tasks, id, new_title))
    }

    fn apply(&mut self, next: Option<Vec<Task>>) -> bool {
        match next {
            Some(tasks) => {
                self.commit(tasks);
                true
            }
            None => false,
        }
    }

    /// The persistence choke-point: replace the held collection and write it
    /// out. Only called for accepted mutations.
    fn commit(&mut self, next: Vec<Task>) {
        self.tasks = next;
        debug!(count = self.tasks.len(), "collection changed, persisting");
        self.persist();
    }

    fn persist(&self) {
        self.kv.set(TASKS_KEY, &self.tasks);
    }

    // -----------------------------------------------------------------------
    // Derived views — recomputed from the current collection on every read
    // -----------------------------------------------------------------------

    /// The canonical collection, insertion order.
    pub fn all_tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Count of incomplete tasks.
    pub fn remaining(&self) -> usize {
        list_ops::remaining(&self.tasks)
    }

    /// Total number of tasks.
    pub fn total(&self) -> usize {
        self.tasks.len()
    }

    /// Incomplete tasks, original order.
    pub fn active_tasks(&self) -> Vec<Task> {
        list_ops::active_tasks(&self.tasks)
    }

    /// Completed tasks, original order.
    pub fn completed_tasks(&self) -> Vec<Task> {
        list_ops::completed_tasks(&self.tasks)
    }

    /// Incomplete tasks already past their due date, as of the current local
    /// day.
    pub fn overdue_tasks(&self) -> Vec<Task> {
        self.overdue_tasks_on(Local::now().date_naive())
    }

    /// Overdue view pinned to a specific day.
    pub fn overdue_tasks_on(&self, today: NaiveDate) -> Vec<Task> {
        list_ops::overdue_tasks(&self.tasks, today)
    }

    /// Look up a task by id.
    pub fn task(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }
}
