//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::path::PathBuf;

use log::LevelFilter;

use crate::core::config::ResolvedConfig;
use crate::core::route::AppRoute;
use crate::core::state::App;

/// Config with default routes and no session file.
pub fn test_config() -> ResolvedConfig {
    ResolvedConfig {
        start_route: AppRoute::default(),
        login_route: AppRoute::LOGIN,
        restore_session: false,
        session_path: None,
        log_level: LevelFilter::Off,
        log_file: PathBuf::from("test.log"),
        warnings: Vec::new(),
    }
}

/// Creates a test App starting on the onboarding welcome screen.
pub fn test_app() -> App {
    App::from_config(&test_config(), None)
}
