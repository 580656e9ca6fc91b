use serde::Deserialize;

use userdir_core::config::Config;

/// Directory configuration loaded from `DIRECTORY_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryConfig {
    /// Database connection URL. Env var: `DIRECTORY_DATABASE_URL`.
    pub database_url: String,
    /// When set, a failed active-user count is logged and reported as 0
    /// instead of an error. The count only feeds metrics, never an
    /// authorization decision. Env var: `DIRECTORY_COUNT_FAILURE_RETURNS_ZERO`
    /// (default `true`).
    #[serde(default = "default_count_failure_returns_zero")]
    pub count_failure_returns_zero: bool,
}

fn default_count_failure_returns_zero() -> bool {
    true
}

impl Config for DirectoryConfig {
    const PREFIX: &'static str = "DIRECTORY_";
}

impl DirectoryConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            count_failure_returns_zero: default_count_failure_returns_zero(),
        }
    }
}
