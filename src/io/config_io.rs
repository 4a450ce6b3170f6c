use std::fs;
use std::path::Path;

use tracing::warn;

use crate::io::kv::config_path;
use crate::model::config::Config;

/// Read config.toml from the data directory. A missing file yields the
/// defaults; a malformed file is logged and also yields the defaults, so a
/// bad config never blocks the app.
pub fn read_config(data_dir: &Path) -> Config {
    let path = config_path(data_dir);
    let content = match fs::read_to_string(&path) {
        Ok(c) => c,
        Err(_) => return Config::default(),
    };
    match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not parse config, using defaults");
            Config::default()
        }
    }
}
