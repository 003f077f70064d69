use std::path::PathBuf;

pub const LOG_ENV: &str = "WEEKLY_HOURS_LOG";
pub const CATALOG_ENV: &str = "WEEKLY_HOURS_CATALOG";

const DEFAULT_LOG_FILTER: &str = "warn";

/// Runtime settings for the command line tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub log_filter: String,
    /// Catalog loaded at startup, if any.
    pub catalog_path: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            catalog_path: None,
        }
    }
}

impl CliConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();
        Self {
            log_filter: non_blank(LOG_ENV).unwrap_or(defaults.log_filter),
            catalog_path: non_blank(CATALOG_ENV).map(PathBuf::from),
        }
    }
}
