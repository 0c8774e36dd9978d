//! # Application State
//!
//! Core business state for ByeBuy. Domain logic only, no TUI types.
//! Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── back_stack: AuthBackStack<AppRoute>  // navigation history + auth flag
//! └── status_message: String               // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::backstack::{AuthBackStack, BackStackChange};
use crate::core::config::ResolvedConfig;
use crate::core::route::AppRoute;

pub struct App {
    pub back_stack: AuthBackStack<AppRoute>,
    pub status_message: String,
}

impl App {
    pub fn new(start_route: AppRoute, login_route: AppRoute) -> Self {
        Self {
            back_stack: AuthBackStack::new(start_route, login_route),
            status_message: String::from("Welcome to ByeBuy!"),
        }
    }

    /// Builds the app from resolved config, resuming `saved_history` if given.
    pub fn from_config(config: &ResolvedConfig, saved_history: Option<Vec<AppRoute>>) -> Self {
        let back_stack = match saved_history {
            Some(history) => {
                AuthBackStack::restore(config.start_route, config.login_route, history)
            }
            None => AuthBackStack::new(config.start_route, config.login_route),
        };
        Self {
            back_stack,
            status_message: String::from("Welcome to ByeBuy!"),
        }
    }

    /// The route currently on screen.
    pub fn current_route(&self) -> Option<AppRoute> {
        self.back_stack.top().copied()
    }
}

/// Status bar text for a back stack change.
pub fn describe_change(change: &BackStackChange<AppRoute>) -> String {
    match change {
        BackStackChange::Pushed(route) => format!("Opened {}", route.title()),
        BackStackChange::Redirected { requested } => {
            format!("Sign in to open {}", requested.title())
        }
        BackStackChange::Popped(route) => format!("Left {}", route.title()),
        BackStackChange::LoggedIn {
            resumed: Some(route),
        } => format!("Signed in, continuing to {}", route.title()),
        BackStackChange::LoggedIn { resumed: None } => "Signed in".to_string(),
        BackStackChange::LoggedOut { purged: 0 } => "Signed out".to_string(),
        BackStackChange::LoggedOut { purged } => {
            format!("Signed out, closed {purged} protected screen(s)")
        }
    }
}
