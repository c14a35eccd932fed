//! Application configuration.
//!
//! Values are fixed at build time: any `HEROES_*` environment variable set
//! while compiling overrides the matching default.

use hero_views::DEFAULT_DASHBOARD_SIZE;
use log::Level;

/// Runtime settings for the frontend.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Title shown in the header and the browser tab
    pub title: String,
    /// Number of tiles on the dashboard
    pub dashboard_size: usize,
    /// Simulated latency of every data service call, in milliseconds
    pub latency_ms: u32,
    /// Maximum level passed to the console logger
    pub log_level: Level,
    /// JSON roster replacing the builtin heroes
    pub seed_json: Option<String>,
    /// Overrides that could not be parsed and fell back to the default
    pub warnings: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Tour of Heroes".to_string(),
            dashboard_size: DEFAULT_DASHBOARD_SIZE,
            latency_ms: 0,
            log_level: Level::Info,
            seed_json: None,
            warnings: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Configuration baked in at compile time.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match key {
            "HEROES_APP_TITLE" => option_env!("HEROES_APP_TITLE"),
            "HEROES_DASHBOARD_SIZE" => option_env!("HEROES_DASHBOARD_SIZE"),
            "HEROES_LATENCY_MS" => option_env!("HEROES_LATENCY_MS"),
            "HEROES_LOG_LEVEL" => option_env!("HEROES_LOG_LEVEL"),
            "HEROES_SEED_JSON" => option_env!("HEROES_SEED_JSON"),
            _ => None,
        })
    }

    /// Build a configuration from a key lookup, starting from the defaults.
    pub fn from_lookup<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Self {
        let mut config = Self::default();

        if let Some(title) = lookup("HEROES_APP_TITLE").map(str::trim)
            && !title.is_empty()
        {
            config.title = title.to_string();
        }

        if let Some(raw) = lookup("HEROES_DASHBOARD_SIZE") {
            match raw.trim().parse::<usize>() {
                Ok(size) if size > 0 => config.dashboard_size = size,
                _ => config.reject("HEROES_DASHBOARD_SIZE", raw),
            }
        }

        if let Some(raw) = lookup("HEROES_LATENCY_MS") {
            match raw.trim().parse::<u32>() {
                Ok(ms) => config.latency_ms = ms,
                Err(_) => config.reject("HEROES_LATENCY_MS", raw),
            }
        }

        if let Some(raw) = lookup("HEROES_LOG_LEVEL") {
            match raw.trim().parse::<Level>() {
                Ok(level) => config.log_level = level,
                Err(_) => config.reject("HEROES_LOG_LEVEL", raw),
            }
        }

        config.seed_json = lookup("HEROES_SEED_JSON")
            .map(str::trim)
            .filter(|json| !json.is_empty())
            .map(String::from);

        config
    }

    fn reject(&mut self, key: &str, raw: &str) {
        self.warnings
            .push(format!("ignoring {key}={raw:?}: not a valid value"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&'static str, &'static str)]) -> AppConfig {
        let env: HashMap<&str, &str> = pairs.iter().copied().collect();
        AppConfig::from_lookup(|key| env.get(key).copied())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.dashboard_size, 4);
        assert_eq!(config.log_level, Level::Info);
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("HEROES_APP_TITLE", "Hall of Heroes"),
            ("HEROES_DASHBOARD_SIZE", "6"),
            ("HEROES_LATENCY_MS", "250"),
            ("HEROES_LOG_LEVEL", "debug"),
            ("HEROES_SEED_JSON", r#"[{"id": 1, "name": "Storm"}]"#),
        ]);

        assert_eq!(config.title, "Hall of Heroes");
        assert_eq!(config.dashboard_size, 6);
        assert_eq!(config.latency_ms, 250);
        assert_eq!(config.log_level, Level::Debug);
        assert!(config.seed_json.is_some());
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn test_invalid_values_fall_back_with_warning() {
        let config = config_from(&[
            ("HEROES_DASHBOARD_SIZE", "lots"),
            ("HEROES_LATENCY_MS", "-5"),
            ("HEROES_LOG_LEVEL", "loud"),
        ]);

        assert_eq!(config.dashboard_size, 4);
        assert_eq!(config.latency_ms, 0);
        assert_eq!(config.log_level, Level::Info);
        assert_eq!(config.warnings.len(), 3);
    }

    #[test]
    fn test_zero_dashboard_size_is_rejected() {
        let config = config_from(&[("HEROES_DASHBOARD_SIZE", "0")]);

        assert_eq!(config.dashboard_size, DEFAULT_DASHBOARD_SIZE);
        assert_eq!(config.warnings.len(), 1);
    }

    #[test]
    fn test_blank_title_and_seed_are_ignored() {
        let config = config_from(&[("HEROES_APP_TITLE", "  "), ("HEROES_SEED_JSON", " ")]);

        assert_eq!(config.title, "Tour of Heroes");
        assert_eq!(config.seed_json, None);
    }
}
