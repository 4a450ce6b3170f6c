//! Display ordering for task lists.

use std::cmp::Ordering;

use crate::model::filter::SortKey;
use crate::model::task::Task;

/// Return a new collection ordered by `key`. The input is never mutated;
/// display sorting has no effect on the canonical store order.
pub fn sort_tasks(tasks: &[Task], key: SortKey) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    match key {
        // Ascending by due date; tasks without one sort after all tasks that
        // have one. The sort is stable, so undated tasks keep their relative
        // order.
        SortKey::DueDate => sorted.sort_by(|a, b| match (a.due_date, b.due_date) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }),
        // Most recently created first
        SortKey::CreatedAt => sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::Title => sorted.sort_by(|a, b| compare_titles(&a.title, &b.title)),
    }
    sorted
}

/// Case-insensitive title comparison, tie-broken on the raw string so the
/// result is a total order.
fn compare_titles(a: &str, b: &str) -> Ordering {
    let a_lower: String = a.chars().flat_map(|c| c.to_lowercase()).collect();
    let b_lower: String = b.chars().flat_map(|c| c.to_lowercase()).collect();
    a_lower.cmp(&b_lower).then_with(|| a.cmp(b))
}
