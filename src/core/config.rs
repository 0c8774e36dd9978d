//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.byebuy/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use crate::core::route::{AppRoute, Route};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ByeBuyConfig {
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NavigationConfig {
    pub start_route: Option<String>,
    pub login_route: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    pub restore: Option<bool>,
    pub file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LogConfig {
    pub level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_SESSION_FILE: &str = "session.json";
pub const DEFAULT_LOG_FILE: &str = "byebuy.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub start_route: AppRoute,
    pub login_route: AppRoute,
    pub restore_session: bool,
    /// `None` when the home directory is unknown; the session is then not persisted.
    pub session_path: Option<PathBuf>,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    /// Problems found while resolving, logged once the logger is up.
    pub warnings: Vec<String>,
}

/// Values taken from CLI flags (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub start_route: Option<String>,
    pub login_route: Option<String>,
    pub fresh: bool,
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.byebuy/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".byebuy"))
}

/// Returns the path to `~/.byebuy/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.byebuy/config.toml`.
pub fn load_config() -> Result<ByeBuyConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(ByeBuyConfig::default())
        }
    }
}

/// Load config from `path`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ByeBuyConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config_from(path: &Path) -> Result<ByeBuyConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(ByeBuyConfig::default());
    }

    let contents = fs::read_to_string(path)?;
    let config: ByeBuyConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# ByeBuy Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.
# Routes are written as <graph>/<screen>, e.g. "bottom_bar/home".

# [navigation]
# start_route = "onboarding/welcome"     # Or set BYEBUY_START_ROUTE
# login_route = "authentication/login"   # Or set BYEBUY_LOGIN_ROUTE

# [session]
# restore = true                         # Reopen the last history on start
# file = "session.json"                  # Path relative to ~/.byebuy/

# [log]
# level = "debug"                        # off, error, warn, info, debug, trace
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &ByeBuyConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading environment variables through `env`.
pub fn resolve_with_env(
    config: &ByeBuyConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let mut warnings = Vec::new();

    // Routes: CLI → env → config → default
    let start_route = pick_route(
        "start route",
        [
            cli.start_route.clone(),
            env("BYEBUY_START_ROUTE"),
            config.navigation.start_route.clone(),
        ],
        AppRoute::default(),
        &mut warnings,
    );
    let login_route = pick_route(
        "login route",
        [
            cli.login_route.clone(),
            env("BYEBUY_LOGIN_ROUTE"),
            config.navigation.login_route.clone(),
        ],
        AppRoute::LOGIN,
        &mut warnings,
    );

    // Log level: env → config → default
    let log_level = match env("BYEBUY_LOG_LEVEL").or_else(|| config.log.level.clone()) {
        Some(raw) => LevelFilter::from_str(&raw).unwrap_or_else(|_| {
            warnings.push(format!("Unknown log level `{raw}`, using {DEFAULT_LOG_LEVEL}"));
            DEFAULT_LOG_LEVEL
        }),
        None => DEFAULT_LOG_LEVEL,
    };

    let session_file = config
        .session
        .file
        .clone()
        .unwrap_or_else(|| DEFAULT_SESSION_FILE.to_string());

    ResolvedConfig {
        start_route,
        login_route,
        restore_session: !cli.fresh && config.session.restore.unwrap_or(true),
        session_path: config_dir().map(|d| d.join(session_file)),
        log_level,
        log_file: cli
            .log_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
        warnings,
    }
}

/// First candidate that is set wins. A winner that doesn't parse, or that
/// needs sign-in, falls back to `default`: a new process is always signed out.
fn pick_route<const N: usize>(
    what: &str,
    candidates: [Option<String>; N],
    default: AppRoute,
    warnings: &mut Vec<String>,
) -> AppRoute {
    let Some(raw) = candidates.into_iter().flatten().next() else {
        return default;
    };
    let route: AppRoute = match raw.parse() {
        Ok(route) => route,
        Err(e) => {
            warnings.push(format!("Invalid {what} `{raw}` ({e}), using {default}"));
            return default;
        }
    };
    if route.requires_login() {
        warnings.push(format!(
            "The {what} cannot be `{raw}` because it requires sign-in, using {default}"
        ));
        return default;
    }
    route
}
