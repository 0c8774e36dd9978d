//! # Session Persistence
//!
//! Saves the navigation history to `~/.byebuy/session.json` so the next run
//! can reopen where the user left off.
//!
//! Only the history is stored. Sign-in state and the pending redirect are
//! process-scoped, and protected routes are dropped again when the stack is
//! rebuilt (see `AuthBackStack::restore`).
//!
//! Writes use atomic rename (write `.tmp`, then `rename()`) for crash safety.

use std::fs;
use std::io;
use std::path::Path;

use chrono::Utc;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::core::route::AppRoute;
use crate::core::state::App;

/// On-disk form of a saved session.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SavedNavigation {
    pub saved_at: i64,
    pub history: Vec<AppRoute>,
}

/// Atomically write `data` as JSON to `path` (via `.tmp` + rename).
fn atomic_write_json<T: Serialize>(path: &Path, data: &T) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

/// Save `history` to `path`.
pub fn save_navigation(path: &Path, history: &[AppRoute]) -> io::Result<()> {
    let saved = SavedNavigation {
        saved_at: Utc::now().timestamp(),
        history: history.to_vec(),
    };
    atomic_write_json(path, &saved)?;
    debug!("Saved {} routes to {}", history.len(), path.display());
    Ok(())
}

/// Load a saved session. Returns `Ok(None)` if there is none yet.
pub fn load_navigation(path: &Path) -> io::Result<Option<SavedNavigation>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };
    let saved: SavedNavigation = serde_json::from_str(&contents)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    info!(
        "Loaded {} saved routes from {}",
        saved.history.len(),
        path.display()
    );
    Ok(Some(saved))
}

/// Save the app's current history, logging instead of failing.
pub fn save_current_session(app: &App, path: Option<&Path>) {
    let Some(path) = path else {
        return;
    };
    if let Err(e) = save_navigation(path, app.back_stack.back_stack()) {
        warn!("Failed to save session to {}: {}", path.display(), e);
    }
}

/// Load the saved history for startup, logging instead of failing.
pub fn load_saved_history(path: Option<&Path>) -> Option<Vec<AppRoute>> {
    let path = path?;
    match load_navigation(path) {
        Ok(saved) => saved.map(|s| s.history),
        Err(e) => {
            warn!("Ignoring unreadable session {}: {}", path.display(), e);
            None
        }
    }
}
