use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::task::Task;
use crate::util::dates::format_long;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskJson {
    pub id: u64,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    pub overdue: bool,
}

#[derive(Serialize)]
pub struct ListJson {
    pub filter: String,
    pub sort: String,
    pub remaining: usize,
    pub total: usize,
    pub tasks: Vec<TaskJson>,
}

#[derive(Serialize)]
pub struct StatsJson {
    pub total: usize,
    pub remaining: usize,
    pub completed: usize,
    pub overdue: usize,
}

// ---------------------------------------------------------------------------
// Conversions and printers
// ---------------------------------------------------------------------------

pub fn task_to_json(task: &Task) -> TaskJson {
    TaskJson {
        id: task.id,
        title: task.title.clone(),
        completed: task.completed,
        created_at: task.created_at,
        due_date: task.due_date,
        overdue: task.is_overdue(),
    }
}

/// One plain-text list line: ` 12 [x] Title (due 01 Oct 2025)` with an
/// overdue marker when past due.
pub fn task_line(task: &Task) -> String {
    let checkbox = if task.completed { "[x]" } else { "[ ]" };
    let mut line = format!("{:>3} {} {}", task.id, checkbox, task.title);
    if let Some(due) = task.due_date {
        line.push_str(&format!("  (due {})", format_long(due)));
        if task.is_overdue() {
            line.push_str("  !overdue");
        }
    }
    line
}

pub fn print_tasks(tasks: &[Task]) {
    for task in tasks {
        println!("{}", task_line(task));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::dates::parse_due;

    #[test]
    fn task_line_shows_id_checkbox_and_title() {
        let mut t = Task::new(7, "Leer el libro".into(), None);
        assert_eq!(task_line(&t), "  7 [ ] Leer el libro");
        t.completed = true;
        assert_eq!(task_line(&t), "  7 [x] Leer el libro");
    }

    #[test]
    fn task_line_includes_due_date_and_overdue_marker() {
        let t = Task::new(1, "pagar".into(), parse_due("2020-01-01"));
        let line = task_line(&t);
        assert!(line.contains("due 01 Jan 2020"));
        assert!(line.contains("!overdue"));
    }

    #[test]
    fn json_output_keeps_camel_case_fields() {
        let t = Task::new(1, "t".into(), parse_due("2099-01-01"));
        let json = serde_json::to_string(&task_to_json(&t)).unwrap();
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"dueDate\""));
        assert!(json.contains("\"overdue\":false"));
    }
}
