//! Client configuration read from `data-*` attributes on the page body.

use std::str::FromStr;

use crate::error::ConfigError;
use crate::routes::Endpoints;
use crate::search::DEFAULT_DEBOUNCE_MS;

pub const API_BASE_KEY: &str = "apiBase";
pub const DEBOUNCE_KEY: &str = "searchDebounceMs";
pub const LOG_LEVEL_KEY: &str = "logLevel";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for API requests; empty means same origin.
    pub api_base: String,
    pub search_debounce_ms: u32,
    pub log_level: log::Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            search_debounce_ms: DEFAULT_DEBOUNCE_MS,
            log_level: log::Level::Info,
        }
    }
}

impl ClientConfig {
    /// Build a config from dataset lookups (`apiBase` for `data-api-base`,
    /// and so on).
    ///
    /// Values that fail to parse keep their default; the problems are
    /// returned so the caller can report them once logging is up.
    pub fn from_dataset<L>(lookup: L) -> (Self, Vec<ConfigError>)
    where
        L: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let mut problems = Vec::new();

        if let Some(base) = lookup(API_BASE_KEY) {
            config.api_base = base.trim().to_string();
        }

        if let Some(raw) = lookup(DEBOUNCE_KEY) {
            match raw.trim().parse::<u32>() {
                Ok(ms) => config.search_debounce_ms = ms,
                Err(_) => problems.push(ConfigError::InvalidNumber {
                    key: DEBOUNCE_KEY,
                    value: raw,
                }),
            }
        }

        if let Some(raw) = lookup(LOG_LEVEL_KEY) {
            match log::Level::from_str(raw.trim()) {
                Ok(level) => config.log_level = level,
                Err(_) => problems.push(ConfigError::InvalidLogLevel(raw)),
            }
        }

        (config, problems)
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(self.api_base.as_str())
    }
}
