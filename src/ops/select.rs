//! Filter-tab selection: map a filter tag to the matching subset of the
//! collection. Composed with the sort engine by the presentation layer:
//! `sort_tasks(&select_tasks(tasks, filter), sort_key)`.

use crate::model::filter::Filter;
use crate::model::task::Task;
use crate::ops::list_ops::{active_tasks, completed_tasks};

/// Select the subset of `tasks` shown under `filter`, original order
/// preserved. Selection never mutates the underlying data.
pub fn select_tasks(tasks: &[Task], filter: Filter) -> Vec<Task> {
    match filter {
        Filter::All => tasks.to_vec(),
        Filter::Active => active_tasks(tasks),
        Filter::Completed => completed_tasks(tasks),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Task> {
        let mut done = Task::new(1, "done".into(), None);
        done.completed = true;
        vec![
            done,
            Task::new(2, "open a".into(), None),
            Task::new(3, "open b".into(), None),
        ]
    }

    #[test]
    fn all_returns_everything_in_order() {
        let tasks = sample();
        let ids: Vec<u64> = select_tasks(&tasks, Filter::All).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn active_and_completed_partition_the_collection() {
        let tasks = sample();
        let active: Vec<u64> = select_tasks(&tasks, Filter::Active).iter().map(|t| t.id).collect();
        let completed: Vec<u64> =
            select_tasks(&tasks, Filter::Completed).iter().map(|t| t.id).collect();
        assert_eq!(active, vec![2, 3]);
        assert_eq!(completed, vec![1]);
        assert_eq!(active.len() + completed.len(), tasks.len());
    }

    #[test]
    fn selection_does_not_mutate_input() {
        let tasks = sample();
        let before = tasks.clone();
        for f in Filter::ALL {
            let _ = select_tasks(&tasks, f);
        }
        assert_eq!(tasks, before);
    }
}
