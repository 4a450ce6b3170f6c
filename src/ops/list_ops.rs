//! Pure mutations over the task collection.
//!
//! Every operation takes the current collection by reference and returns
//! `Some(new_collection)` when it changes something, or `None` for a rejected
//! or no-op command (empty title, unknown id). The input is never mutated;
//! the store decides what to do with the result.

use chrono::{DateTime, Utc};

use crate::model::task::{Task, next_id};

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// Append a new task. The title is trimmed first; an empty or
/// whitespace-only title rejects the command.
pub fn add_task(tasks: &[Task], title: &str, due_date: Option<DateTime<Utc>>) -> Option<Vec<Task>> {
    let title = title.trim();
    if title.is_empty() {
        return None;
    }
    let mut next = tasks.to_vec();
    next.push(Task::new(next_id(tasks), title.to_string(), due_date));
    Some(next)
}

/// Flip `completed` on the task with the given id, leaving every other field
/// and every other task untouched.
pub fn toggle_completed(tasks: &[Task], id: u64) -> Option<Vec<Task>> {
    tasks.iter().position(|t| t.id == id)?;
    Some(
        tasks
            .iter()
            .map(|t| {
                if t.id == id {
                    let mut toggled = t.clone();
                    toggled.completed = !t.completed;
                    toggled
                } else {
                    t.clone()
                }
            })
            .collect(),
    )
}

/// Remove the task with the given id.
pub fn delete_task(tasks: &[Task], id: u64) -> Option<Vec<Task>> {
    tasks.iter().position(|t| t.id == id)?;
    Some(tasks.iter().filter(|t| t.id != id).cloned().collect())
}

/// Replace the title of the task with the given id. Trimmed; empty titles
/// reject the command.
pub fn update_task(tasks: &[Task], id: u64, new_title: &str) -> Option<Vec<Task>> {
    let new_title = new_title.trim();
    if new_title.is_empty() {
        return None;
    }
    tasks.iter().position(|t| t.id == id)?;
    Some(
        tasks
            .iter()
            .map(|t| {
                if t.id == id {
                    let mut updated = t.clone();
                    updated.title = new_title.to_string();
                    updated
                } else {
                    t.clone()
                }
            })
            .collect(),
    )
}

// ---------------------------------------------------------------------------
// Derived views
// ---------------------------------------------------------------------------

/// Count of incomplete tasks.
pub fn remaining(tasks: &[Task]) -> usize {
    tasks.iter().filter(|t| !t.completed).count()
}

/// Incomplete tasks, original order preserved.
pub fn active_tasks(tasks: &[Task]) -> Vec<Task> {
    tasks.iter().filter(|t| !t.completed).cloned().collect()
}

/// Completed tasks, original order preserved.
pub fn completed_tasks(tasks: &[Task]) -> Vec<Task> {
    tasks.iter().filter(|t| t.completed).cloned().collect()
}

/// Incomplete tasks whose due date falls strictly before `today`.
pub fn overdue_tasks(tasks: &[Task], today: chrono::NaiveDate) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| t.is_overdue_on(today))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::dates::parse_due;
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<Task> {
        let mut done = Task::new(1, "Hacer mis tareas".into(), None);
        done.completed = true;
        vec![
            done,
            Task::new(2, "Leer el libro".into(), None),
            Task::new(3, "Estudiar para las pruebas".into(), None),
        ]
    }

    // --- add ---

    #[test]
    fn add_assigns_next_id_and_defaults() {
        let tasks = sample();
        let next = add_task(&tasks, "Buy milk", None).unwrap();
        assert_eq!(next.len(), 4);
        let added = next.last().unwrap();
        assert_eq!(added.id, 4);
        assert_eq!(added.title, "Buy milk");
        assert!(!added.completed);
        assert!(added.due_date.is_none());
    }

    #[test]
    fn add_to_empty_collection_starts_at_one() {
        let next = add_task(&[], "Buy milk", None).unwrap();
        assert_eq!(next.len(), 1);
        assert_eq!(next[0].id, 1);
        assert!(!next[0].completed);
        assert_eq!(remaining(&next), 1);
    }

    #[test]
    fn add_trims_title() {
        let next = add_task(&[], "  Buy milk  ", None).unwrap();
        assert_eq!(next[0].title, "Buy milk");
    }

    #[test]
    fn add_rejects_blank_titles() {
        assert!(add_task(&sample(), "", None).is_none());
        assert!(add_task(&sample(), "   ", None).is_none());
        assert!(add_task(&sample(), "\t\n", None).is_none());
    }

    #[test]
    fn add_keeps_given_due_date() {
        let due = parse_due("2025-12-31");
        let next = add_task(&[], "Buy milk", due).unwrap();
        assert_eq!(next[0].due_date, due);
    }

    #[test]
    fn add_never_reuses_ids_after_delete() {
        // Ids are one past the max, so deleting a middle task cannot cause a
        // collision
        let tasks = sample();
        let next = delete_task(&tasks, 2).unwrap();
        let next = add_task(&next, "nuevo", None).unwrap();
        assert_eq!(next.last().unwrap().id, 4);
        let mut ids: Vec<u64> = next.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), next.len());
    }

    // --- toggle ---

    #[test]
    fn toggle_flips_only_the_target() {
        let tasks = sample();
        let next = toggle_completed(&tasks, 2).unwrap();
        assert!(next[1].completed);
        // Everything else untouched
        assert_eq!(next[0], tasks[0]);
        assert_eq!(next[2], tasks[2]);
        assert_eq!(next[1].title, tasks[1].title);
        assert_eq!(next[1].created_at, tasks[1].created_at);
    }

    #[test]
    fn toggle_twice_restores_the_original() {
        let tasks = sample();
        let once = toggle_completed(&tasks, 2).unwrap();
        let twice = toggle_completed(&once, 2).unwrap();
        assert_eq!(twice, tasks);
    }

    #[test]
    fn toggle_unknown_id_is_rejected() {
        assert!(toggle_completed(&sample(), 99).is_none());
    }

    // --- delete ---

    #[test]
    fn delete_removes_exactly_one() {
        let tasks = sample();
        let next = delete_task(&tasks, 2).unwrap();
        assert_eq!(next.len(), 2);
        assert!(next.iter().all(|t| t.id != 2));
    }

    #[test]
    fn delete_incomplete_task_decrements_remaining() {
        let tasks = sample();
        let before = remaining(&tasks);
        let next = delete_task(&tasks, 2).unwrap(); // incomplete
        assert_eq!(remaining(&next), before - 1);
    }

    #[test]
    fn delete_completed_task_keeps_remaining() {
        let tasks = sample();
        let before = remaining(&tasks);
        let next = delete_task(&tasks, 1).unwrap(); // completed
        assert_eq!(remaining(&next), before);
    }

    #[test]
    fn delete_unknown_id_is_rejected() {
        assert!(delete_task(&sample(), 99).is_none());
    }

    // --- update ---

    #[test]
    fn update_replaces_title_only() {
        let tasks = sample();
        let next = update_task(&tasks, 2, "  Leer otro libro  ").unwrap();
        assert_eq!(next[1].title, "Leer otro libro");
        assert_eq!(next[1].id, tasks[1].id);
        assert_eq!(next[1].completed, tasks[1].completed);
        assert_eq!(next[1].created_at, tasks[1].created_at);
        assert_eq!(next[0], tasks[0]);
    }

    #[test]
    fn update_rejects_blank_titles() {
        assert!(update_task(&sample(), 2, "").is_none());
        assert!(update_task(&sample(), 2, "   ").is_none());
    }

    #[test]
    fn update_unknown_id_is_rejected() {
        assert!(update_task(&sample(), 99, "title").is_none());
    }

    // --- views ---

    #[test]
    fn views_partition_by_completed_preserving_order() {
        let tasks = sample();
        assert_eq!(remaining(&tasks), 2);
        let active: Vec<u64> = active_tasks(&tasks).iter().map(|t| t.id).collect();
        assert_eq!(active, vec![2, 3]);
        let completed: Vec<u64> = completed_tasks(&tasks).iter().map(|t| t.id).collect();
        assert_eq!(completed, vec![1]);
    }

    #[test]
    fn overdue_excludes_completed_and_undated() {
        let mut tasks = sample();
        tasks[1].due_date = parse_due("2020-01-01"); // incomplete, past due
        tasks[0].due_date = parse_due("2020-01-01"); // completed, past due
        let today = "2020-06-01".parse().unwrap();
        let overdue: Vec<u64> = overdue_tasks(&tasks, today).iter().map(|t| t.id).collect();
        assert_eq!(overdue, vec![2]);
    }

    #[test]
    fn toggling_removes_from_overdue_without_touching_due_date() {
        let mut tasks = sample();
        tasks[1].due_date = parse_due("2020-01-01");
        let today = "2020-06-01".parse().unwrap();
        assert_eq!(overdue_tasks(&tasks, today).len(), 1);

        let next = toggle_completed(&tasks, 2).unwrap();
        assert!(overdue_tasks(&next, today).is_empty());
        assert_eq!(next[1].due_date, tasks[1].due_date);
    }
}
