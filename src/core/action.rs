//! # Actions
//!
//! Everything that can happen in ByeBuy becomes an `Action`.
//! User picks a destination? That's `Action::Navigate(route)`.
//! User presses Esc? That's `Action::Back`.
//!
//! `update()` applies an action to the `App` and returns an `Effect` telling
//! the host what to do next. No I/O here; saving and quitting happen in the TUI.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::core::route::AppRoute;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Navigate(AppRoute),
    Back,
    SignIn,
    SignOut,
    Quit,
}

/// What the host should do after an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    SaveSession,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Navigate(route) => {
            app.back_stack.add(route);
            Effect::None
        }
        Action::Back => {
            // An empty stack has nothing to render; leaving the root screen exits.
            if app.back_stack.len() <= 1 {
                info!("Back pressed on root screen, exiting");
                return Effect::Quit;
            }
            app.back_stack.remove();
            Effect::None
        }
        Action::SignIn => {
            app.back_stack.login();
            Effect::None
        }
        Action::SignOut => {
            app.back_stack.logout();
            Effect::SaveSession
        }
        Action::Quit => Effect::Quit,
    }
}
