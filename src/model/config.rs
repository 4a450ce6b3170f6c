use serde::{Deserialize, Serialize};

use crate::model::filter::{Filter, SortKey};

/// Configuration from config.toml in the data directory.
///
/// Everything is optional — a missing file or a missing key falls back to the
/// built-in defaults (show all tasks, sort by due date).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Initial sort key: "dueDate", "createdAt", or "title"
    #[serde(default)]
    pub default_sort: Option<String>,
    /// Initial filter tab: "all", "active", or "completed"
    #[serde(default)]
    pub default_filter: Option<String>,
}

impl Config {
    /// The configured initial sort key, falling back to the default when
    /// missing or unparseable.
    pub fn default_sort(&self) -> SortKey {
        self.ui
            .default_sort
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// The configured initial filter tab, with the same fallback policy.
    pub fn default_filter(&self) -> Filter {
        self.ui
            .default_filter
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.default_sort(), SortKey::DueDate);
        assert_eq!(config.default_filter(), Filter::All);
    }

    #[test]
    fn configured_values_parse() {
        let config: Config = toml::from_str(
            r#"[ui]
default_sort = "title"
default_filter = "active"
"#,
        )
        .unwrap();
        assert_eq!(config.default_sort(), SortKey::Title);
        assert_eq!(config.default_filter(), Filter::Active);
    }

    #[test]
    fn unparseable_values_fall_back() {
        let config: Config = toml::from_str(
            r#"[ui]
default_sort = "alphabetical"
"#,
        )
        .unwrap();
        assert_eq!(config.default_sort(), SortKey::DueDate);
    }
}
