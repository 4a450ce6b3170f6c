use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which subset of tasks is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn as_str(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }

    /// Tab label for the TUI tab bar
    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    /// The next tab in display order (wraps around)
    pub fn next(self) -> Filter {
        match self {
            Filter::All => Filter::Active,
            Filter::Active => Filter::Completed,
            Filter::Completed => Filter::All,
        }
    }

    pub fn prev(self) -> Filter {
        self.next().next()
    }
}

impl FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Filter::All),
            "active" => Ok(Filter::Active),
            "completed" | "done" => Ok(Filter::Completed),
            other => Err(format!(
                "unknown filter '{}' (expected all, active, or completed)",
                other
            )),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which ordering is applied to a displayed subset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Ascending by due date; tasks without one sort last
    #[default]
    DueDate,
    /// Descending by creation time (newest first)
    CreatedAt,
    /// Ascending by title, case-insensitive
    Title,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::DueDate => "dueDate",
            SortKey::CreatedAt => "createdAt",
            SortKey::Title => "title",
        }
    }

    /// Short label for the TUI status row
    pub fn label(self) -> &'static str {
        match self {
            SortKey::DueDate => "due",
            SortKey::CreatedAt => "created",
            SortKey::Title => "title",
        }
    }

    /// Cycle order for the TUI sort key: due → created → title → due
    pub fn next(self) -> SortKey {
        match self {
            SortKey::DueDate => SortKey::CreatedAt,
            SortKey::CreatedAt => SortKey::Title,
            SortKey::Title => SortKey::DueDate,
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dueDate" | "due" => Ok(SortKey::DueDate),
            "createdAt" | "created" => Ok(SortKey::CreatedAt),
            "title" => Ok(SortKey::Title),
            other => Err(format!(
                "unknown sort key '{}' (expected due, created, or title)",
                other
            )),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
