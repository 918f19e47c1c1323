//! Configuration file loading with precedence handling.

use crate::state::navigation::default_base_url;
use crate::state::pagination::{DEFAULT_PAGE_SIZE, DEFAULT_PAGINATION_THRESHOLD};
use crate::state::theme::Theme;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;
use url::Url;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "ADMINTABLE_CONFIG";
/// Environment variable overriding the theme (`dark` or `light`).
pub const THEME_ENV: &str = "ADMINTABLE_THEME";
/// Environment variable overriding rows per page.
pub const PAGE_SIZE_ENV: &str = "ADMINTABLE_PAGE_SIZE";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML or an unknown key.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A value parsed but is out of range.
    #[error("Invalid value for `{field}` in {path}: {reason}")]
    InvalidValue {
        /// Config file the value came from.
        path: PathBuf,
        /// Offending key.
        field: &'static str,
        /// Why the value was refused.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/admintable/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Rows per page.
    #[serde(default)]
    pub page_size: Option<usize>,

    /// Tables with at most this many rows are not paginated.
    #[serde(default)]
    pub pagination_threshold: Option<usize>,

    /// Idle time before a typed search is applied.
    #[serde(default)]
    pub search_debounce_ms: Option<u64>,

    /// Time a flash alert stays visible before fading.
    #[serde(default)]
    pub alert_timeout_ms: Option<u64>,

    /// Forces a theme instead of the saved preference.
    #[serde(default)]
    pub theme: Option<Theme>,

    /// Location page-size changes and page links navigate from.
    #[serde(default)]
    pub base_url: Option<Url>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Rows per page.
    pub page_size: usize,
    /// Row count at or below which pagination is hidden.
    pub pagination_threshold: usize,
    /// Idle time before a typed search is applied.
    pub search_debounce: Duration,
    /// Time a flash alert stays visible.
    pub alert_timeout: Duration,
    /// `None` defers to the saved preference.
    pub theme: Option<Theme>,
    /// Location page links and page-size changes navigate from.
    pub base_url: Url,
    /// Where tracing output is written.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            pagination_threshold: DEFAULT_PAGINATION_THRESHOLD,
            search_debounce: Duration::from_millis(300),
            alert_timeout: Duration::from_millis(5000),
            theme: None,
            base_url: default_base_url(),
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/admintable/admintable.log` on Linux, or the
/// appropriate platform path elsewhere. Falls back to the current
/// directory when no state directory exists.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("admintable").join("admintable.log")
    } else {
        PathBuf::from("admintable.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but cannot be read, parsed, or holds a
/// zero page size.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    if config.page_size == Some(0) {
        return Err(ConfigError::InvalidValue {
            path,
            field: "page_size",
            reason: "must be at least 1".to_string(),
        });
    }

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/admintable/config.toml` on Linux, the appropriate
/// path on other platforms, `None` if no config directory is known.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("admintable").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `ADMINTABLE_CONFIG` environment variable
/// 3. Default path `~/.config/admintable/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        page_size: config.page_size.unwrap_or(defaults.page_size),
        pagination_threshold: config
            .pagination_threshold
            .unwrap_or(defaults.pagination_threshold),
        search_debounce: config
            .search_debounce_ms
            .map_or(defaults.search_debounce, Duration::from_millis),
        alert_timeout: config
            .alert_timeout_ms
            .map_or(defaults.alert_timeout, Duration::from_millis),
        theme: config.theme.or(defaults.theme),
        base_url: config.base_url.unwrap_or(defaults.base_url),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `ADMINTABLE_THEME`: `dark` or `light`
/// - `ADMINTABLE_PAGE_SIZE`: positive integer
///
/// Unparseable values are logged and ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(theme) = std::env::var(THEME_ENV) {
        match theme.trim() {
            "dark" => config.theme = Some(Theme::Dark),
            "light" => config.theme = Some(Theme::Light),
            other => warn!(value = other, "Ignoring unknown {}", THEME_ENV),
        }
    }

    if let Ok(page_size) = std::env::var(PAGE_SIZE_ENV) {
        match page_size.trim().parse::<usize>() {
            Ok(n) if n > 0 => config.page_size = n,
            _ => warn!(value = %page_size, "Ignoring invalid {}", PAGE_SIZE_ENV),
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    page_size_override: Option<usize>,
    theme_override: Option<Theme>,
    base_url_override: Option<Url>,
) -> ResolvedConfig {
    if let Some(page_size) = page_size_override.filter(|n| *n > 0) {
        config.page_size = page_size;
    }

    if let Some(theme) = theme_override {
        config.theme = Some(theme);
    }

    if let Some(base_url) = base_url_override {
        config.base_url = base_url;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
