use std::{collections::HashMap, fs, path::Path, time::Duration};

use tracing::warn;

pub const SETTINGS_FILE: &str = "catalog.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub catalog_source: String,
    pub container_id: String,
    pub page_title: String,
    pub fetch_timeout_secs: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_source: "catalog.json".into(),
            container_id: "courses".into(),
            page_title: "Course Catalog".into(),
            fetch_timeout_secs: None,
        }
    }
}

impl Settings {
    /// `None` means the fetch may wait indefinitely.
    pub fn fetch_timeout(&self) -> Option<Duration> {
        self.fetch_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

/// Flags given on the command line; they win over file and environment.
#[derive(Debug, Default)]
pub struct Overrides {
    pub catalog_source: Option<String>,
    pub container_id: Option<String>,
    pub page_title: Option<String>,
    pub fetch_timeout_secs: Option<u64>,
}

pub fn load_settings(overrides: Overrides) -> Settings {
    let mut settings = load_settings_from(Path::new(SETTINGS_FILE), |key| std::env::var(key).ok());

    if let Some(v) = overrides.catalog_source {
        settings.catalog_source = v;
    }
    if let Some(v) = overrides.container_id {
        settings.container_id = v;
    }
    if let Some(v) = overrides.page_title {
        settings.page_title = v;
    }
    if let Some(v) = overrides.fetch_timeout_secs {
        settings.fetch_timeout_secs =
            positive_timeout(i64::try_from(v).unwrap_or(i64::MAX), "--timeout-secs");
    }

    settings
}

/// Defaults, then `path` if it exists, then the environment as seen by `env`.
pub fn load_settings_from(path: &Path, env: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        match toml::from_str::<HashMap<String, toml::Value>>(&raw) {
            Ok(file_cfg) => apply_file(&mut settings, &file_cfg),
            Err(err) => warn!(
                path = %path.display(),
                error = %err,
                "config: ignoring unreadable settings file"
            ),
        }
    }

    if let Some(v) = env("CATALOG_SOURCE") {
        settings.catalog_source = v;
    }
    if let Some(v) = env("APP__CATALOG_SOURCE") {
        settings.catalog_source = v;
    }

    if let Some(v) = env("APP__CONTAINER_ID") {
        settings.container_id = v;
    }

    if let Some(v) = env("APP__PAGE_TITLE") {
        settings.page_title = v;
    }

    if let Some(v) = env("APP__FETCH_TIMEOUT_SECS") {
        match v.parse::<i64>() {
            Ok(parsed) => {
                settings.fetch_timeout_secs = positive_timeout(parsed, "APP__FETCH_TIMEOUT_SECS")
            }
            Err(_) => warn!(value = %v, "config: APP__FETCH_TIMEOUT_SECS is not a number"),
        }
    }

    settings
}

fn apply_file(settings: &mut Settings, file_cfg: &HashMap<String, toml::Value>) {
    if let Some(v) = file_cfg.get("catalog_source").and_then(toml::Value::as_str) {
        settings.catalog_source = v.to_string();
    }
    if let Some(v) = file_cfg.get("container_id").and_then(toml::Value::as_str) {
        settings.container_id = v.to_string();
    }
    if let Some(v) = file_cfg.get("page_title").and_then(toml::Value::as_str) {
        settings.page_title = v.to_string();
    }
    match file_cfg.get("fetch_timeout_secs") {
        Some(toml::Value::Integer(v)) => {
            settings.fetch_timeout_secs = positive_timeout(*v, SETTINGS_FILE);
        }
        Some(other) => warn!(
            value = %other,
            "config: fetch_timeout_secs in {SETTINGS_FILE} is not an integer"
        ),
        None => {}
    }
}

/// Zero or negative timeouts mean "no timeout".
fn positive_timeout(secs: i64, origin: &str) -> Option<u64> {
    if secs <= 0 {
        warn!(
            origin,
            secs,
            "config: non-positive fetch timeout, fetching without a timeout"
        );
        return None;
    }
    u64::try_from(secs).ok()
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
