//! Normalization of persisted task records.
//!
//! The stored layout has drifted over time: early records carried no
//! `createdAt`, and corrupted files can hold duplicate ids or blank titles.
//! Loading runs every record through one migration pass that restores the
//! in-memory invariants. The pass is idempotent — migrating an
//! already-migrated collection changes nothing.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::task::Task;

/// A task record as found in storage. Timestamps arrive as ISO-8601 strings
/// and are decoded to native values by serde; `createdAt` may be missing
/// entirely in records written before it existed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredTask {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
}

/// Normalize loaded records into the in-memory shape:
/// - a missing `createdAt` is backfilled with `now`;
/// - duplicate ids keep the first occurrence;
/// - blank titles (possible only through corrupted storage) are dropped.
pub fn migrate(records: Vec<StoredTask>, now: DateTime<Utc>) -> Vec<Task> {
    let mut seen = HashSet::new();
    let mut tasks = Vec::with_capacity(records.len());
    for record in records {
        let title = record.title.trim();
        if title.is_empty() {
            continue;
        }
        if !seen.insert(record.id) {
            continue;
        }
        tasks.push(Task {
            id: record.id,
            title: title.to_string(),
            completed: record.completed,
            created_at: record.created_at.unwrap_or(now),
            due_date: record.due_date,
        });
    }
    tasks
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(id: u64, title: &str) -> StoredTask {
        StoredTask {
            id,
            title: title.to_string(),
            completed: false,
            created_at: None,
            due_date: None,
        }
    }

    fn now() -> DateTime<Utc> {
        "2025-06-01T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn string_dates_decode_to_native_instants() {
        let json = r#"[{
            "id": 1,
            "title": "Leer el libro",
            "completed": false,
            "createdAt": "2025-01-02T03:04:05Z",
            "dueDate": "2025-12-31T00:00:00Z"
        }]"#;
        let records: Vec<StoredTask> = serde_json::from_str(json).unwrap();
        let tasks = migrate(records, now());
        assert_eq!(
            tasks[0].created_at,
            "2025-01-02T03:04:05Z".parse::<DateTime<Utc>>().unwrap()
        );
        assert_eq!(
            tasks[0].due_date,
            Some("2025-12-31T00:00:00Z".parse::<DateTime<Utc>>().unwrap())
        );
    }

    #[test]
    fn missing_created_at_is_backfilled() {
        let json = r#"[{"id": 1, "title": "old record", "completed": true}]"#;
        let records: Vec<StoredTask> = serde_json::from_str(json).unwrap();
        let tasks = migrate(records, now());
        assert_eq!(tasks[0].created_at, now());
        assert!(tasks[0].completed);
        assert!(tasks[0].due_date.is_none());
    }

    #[test]
    fn duplicate_ids_keep_the_first_occurrence() {
        let records = vec![record(1, "first"), record(2, "other"), record(1, "second")];
        let tasks = migrate(records, now());
        let titles: Vec<&str> = tasks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "other"]);
    }

    #[test]
    fn blank_titles_are_dropped() {
        let records = vec![record(1, "keep"), record(2, "   "), record(3, "")];
        let tasks = migrate(records, now());
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "keep");
    }

    #[test]
    fn titles_are_trimmed() {
        let tasks = migrate(vec![record(1, "  padded  ")], now());
        assert_eq!(tasks[0].title, "padded");
    }

    #[test]
    fn migration_is_idempotent() {
        let records = vec![
            record(1, "  first  "),
            record(1, "dup"),
            record(2, ""),
            StoredTask {
                id: 3,
                title: "dated".into(),
                completed: false,
                created_at: Some("2025-01-01T00:00:00Z".parse().unwrap()),
                due_date: Some("2025-12-31T00:00:00Z".parse().unwrap()),
            },
        ];
        let once = migrate(records, now());

        // Round-trip the migrated collection through the stored form and
        // migrate again with a different clock
        let json = serde_json::to_string(&once).unwrap();
        let reloaded: Vec<StoredTask> = serde_json::from_str(&json).unwrap();
        let later = "2030-01-01T00:00:00Z".parse().unwrap();
        let twice = migrate(reloaded, later);

        assert_eq!(twice, once);
    }
}
