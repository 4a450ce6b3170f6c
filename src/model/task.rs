use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single to-do entry.
///
/// Serialized as camelCase so the persisted JSON keeps the historical layout:
/// `{"id":1,"title":"…","completed":false,"createdAt":"…"}` with an optional
/// `dueDate`. chrono's serde support stores both timestamps as ISO-8601
/// strings on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Positive, unique within the collection
    pub id: u64,
    /// Non-empty after trimming
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    /// Absent means "no deadline"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
}

impl Task {
    /// Create a new incomplete task stamped with the current time.
    pub fn new(id: u64, title: String, due_date: Option<DateTime<Utc>>) -> Self {
        Task {
            id,
            title,
            completed: false,
            created_at: Utc::now(),
            due_date,
        }
    }

    /// Whether this task is overdue as of `today` (date-only precision,
    /// local calendar): incomplete, has a due date, and the due date falls
    /// strictly before `today`.
    pub fn is_overdue_on(&self, today: NaiveDate) -> bool {
        if self.completed {
            return false;
        }
        match self.due_date {
            Some(due) => due.with_timezone(&Local).date_naive() < today,
            None => false,
        }
    }

    /// Overdue as of the current local date.
    pub fn is_overdue(&self) -> bool {
        self.is_overdue_on(Local::now().date_naive())
    }
}

/// The next id to assign: one past the current maximum, or 1 for an empty
/// collection.
pub fn next_id(tasks: &[Task]) -> u64 {
    tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1
}

/// Example tasks seeded on first run, when nothing has been persisted yet.
pub fn seed_tasks() -> Vec<Task> {
    let mut done = Task::new(1, "Hacer mis tareas".to_string(), None);
    done.completed = true;
    vec![
        done,
        Task::new(2, "Leer el libro".to_string(), None),
        Task::new(3, "Estudiar para las pruebas".to_string(), None),
    ]
}
