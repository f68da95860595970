use std::path::PathBuf;
use std::time::Duration;

/// Default delay between the last keystroke and the search it triggers.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Default `env_logger` filter.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Runtime configuration.
///
/// Parsed from environment variables with fallback defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Search debounce delay.
    pub debounce: Duration,
    /// Record file to load instead of the built-in sample records.
    pub records_path: Option<PathBuf>,
    /// Log filter passed to `env_logger`.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            records_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Parses configuration from environment variables.
    ///
    /// Falls back to defaults when env vars are not set or invalid.
    ///
    /// # Environment Variables
    ///
    /// - `LIFEORG_DEBOUNCE_MS` (u64, default 300): Search debounce delay
    /// - `LIFEORG_RECORDS` (path, optional): JSON record file
    /// - `LIFEORG_LOG` (string, default `warn`): Log filter
    pub fn from_env() -> Self {
        let debounce_ms = std::env::var("LIFEORG_DEBOUNCE_MS")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_DEBOUNCE_MS);

        let records_path = std::env::var_os("LIFEORG_RECORDS")
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let log_filter = std::env::var("LIFEORG_LOG")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            debounce: Duration::from_millis(debounce_ms),
            records_path,
            log_filter,
        }
    }
}

/// Returns the default record file location, `{data_dir}/lifeorg/records.json`.
///
/// `data_dir` is:
/// - Linux: `~/.local/share`
/// - macOS: `~/Library/Application Support`
/// - Windows: `C:\Users\<user>\AppData\Roaming`
///
/// Returns `None` if the platform has no data directory.
pub fn default_records_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("lifeorg").join("records.json"))
}
