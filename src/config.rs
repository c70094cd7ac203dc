//! Runtime configuration for the command-line binary.
//!
//! Values come from the environment, optionally seeded from a `.env` file.

use crate::bulk::{sanitize_patterns, HeaderPriority};
use std::collections::HashMap;

pub const ENV_LOG_CONFIG: &str = "IP_RANGE_KIT_LOG_CONFIG";
pub const ENV_HEADERS: &str = "IP_RANGE_KIT_HEADERS";
pub const ENV_PATTERNS: &str = "IP_RANGE_KIT_PATTERNS";
pub const ENV_COLOR: &str = "IP_RANGE_KIT_COLOR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path of the log4rs YAML file.
    pub log_config: String,
    /// Header order for client address resolution.
    pub headers: HeaderPriority,
    /// Default pattern list for `match`.
    pub patterns: Vec<String>,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: "log4rs.yml".to_string(),
            headers: HeaderPriority::default(),
            patterns: vec![],
            color: true,
        }
    }
}

/// Load `.env` (if present) and snapshot the process environment.
pub fn load_env() -> HashMap<String, String> {
    dotenv::dotenv().ok();
    std::env::vars().collect()
}

/// log4rs config path. Needed before logging is up, so it is read on its own.
pub fn log_config_path(vars: &HashMap<String, String>) -> String {
    vars.get(ENV_LOG_CONFIG)
        .cloned()
        .unwrap_or_else(|| Config::default().log_config)
}

impl Config {
    /// Build from an explicit variable map. Unknown keys are ignored.
    ///
    /// Problems are logged, so initialise logging first.
    pub fn from_vars(vars: &HashMap<String, String>) -> Config {
        let mut config = Config {
            log_config: log_config_path(vars),
            ..Config::default()
        };
        if let Some(list) = vars.get(ENV_HEADERS) {
            let headers = HeaderPriority::from_csv(list);
            if headers.headers().is_empty() {
                log::warn!("{ENV_HEADERS} is empty, keeping default header order");
            } else {
                config.headers = headers;
            }
        }
        if let Some(list) = vars.get(ENV_PATTERNS) {
            config.patterns = sanitize_patterns(list.replace(',', "\n"));
        }
        if let Some(flag) = vars.get(ENV_COLOR) {
            config.color = !matches!(flag.trim().to_lowercase().as_str(), "0" | "false" | "no" | "off");
        }
        config
    }
}
