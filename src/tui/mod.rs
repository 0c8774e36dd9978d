//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The loop sleeps up to 250ms waiting for input and only redraws when an
//! event arrived or the back stack's revision moved. All queued events are
//! applied before the next frame, and the back stack's change channel is
//! drained into the status line in between.

mod component;
mod components;
mod event;
mod ui;

use log::info;
use std::sync::mpsc::Receiver;
use std::time::Duration;

use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::backstack::BackStackChange;
use crate::core::config::ResolvedConfig;
use crate::core::route::{AppRoute, BottomBarRoute};
use crate::core::session;
use crate::core::state::{App, describe_change};
use crate::tui::component::EventHandler;
use crate::tui::components::{ScreenEntry, ScreenEvent, ScreenState, entries_for};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub screen: ScreenState,
}

impl TuiState {
    pub fn new(app: &App) -> Self {
        Self {
            screen: ScreenState::new(entries_for(app)),
        }
    }
}

pub fn run(config: ResolvedConfig, saved_history: Option<Vec<AppRoute>>) -> std::io::Result<()> {
    let mut app = App::from_config(&config, saved_history);
    let changes = app.back_stack.subscribe();
    let mut tui = TuiState::new(&app);

    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut app, &mut tui, &changes, &config);

    // Save on exit so the next run reopens here
    session::save_current_session(&app, config.session_path.as_deref());

    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
    changes: &Receiver<BackStackChange<AppRoute>>,
    config: &ResolvedConfig,
) -> std::io::Result<()> {
    let mut seen_revision = app.back_stack.revision();
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            tui.screen.sync(entries_for(app));
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(Duration::from_millis(250));
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let Some(action) = action_for_event(event, tui) else {
                continue;
            };
            match update(app, action) {
                Effect::Quit => should_quit = true,
                Effect::SaveSession => {
                    session::save_current_session(app, config.session_path.as_deref());
                }
                Effect::None => {}
            }
            // Later queued events must act on the rows of the new screen
            tui.screen.sync(entries_for(app));
            if should_quit {
                break;
            }
        }

        while let Ok(change) = changes.try_recv() {
            info!("Back stack change: {:?}", change);
            app.status_message = describe_change(&change);
        }

        if app.back_stack.revision() != seen_revision {
            seen_revision = app.back_stack.revision();
            needs_redraw = true;
        }

        if should_quit {
            return Ok(());
        }
    }
}

/// Translate a terminal event into a core action, routing row selection
/// through the active screen.
fn action_for_event(event: TuiEvent, tui: &mut TuiState) -> Option<Action> {
    match event {
        TuiEvent::Resize => None,
        TuiEvent::Quit => Some(Action::Quit),
        TuiEvent::Back => Some(Action::Back),
        TuiEvent::SignOut => Some(Action::SignOut),
        TuiEvent::Section(index) => BottomBarRoute::ALL
            .get(index)
            .map(|section| Action::Navigate(AppRoute::BottomBar(*section))),
        other => tui
            .screen
            .handle_event(&other)
            .map(|ScreenEvent::Activate(entry)| match entry {
                ScreenEntry::Go(route) => Action::Navigate(route),
                ScreenEntry::SignIn => Action::SignIn,
                ScreenEntry::SignOut => Action::SignOut,
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::route::Onboarding;
    use crate::test_support::test_app;

    #[test]
    fn test_section_keys_navigate() {
        let app = test_app();
        let mut tui = TuiState::new(&app);
        assert_eq!(
            action_for_event(TuiEvent::Section(1), &mut tui),
            Some(Action::Navigate(AppRoute::BottomBar(BottomBarRoute::Calendar)))
        );
        assert_eq!(action_for_event(TuiEvent::Section(9), &mut tui), None);
    }

    #[test]
    fn test_submit_activates_selected_row() {
        let app = test_app();
        let mut tui = TuiState::new(&app);
        assert_eq!(
            action_for_event(TuiEvent::Submit, &mut tui),
            Some(Action::Navigate(AppRoute::Onboarding(Onboarding::Permissions)))
        );
    }

    #[test]
    fn test_redirect_then_sign_in_through_screen_rows() {
        let mut app = test_app();
        let changes = app.back_stack.subscribe();
        let mut tui = TuiState::new(&app);

        let action = action_for_event(TuiEvent::Section(0), &mut tui).unwrap();
        update(&mut app, action);
        tui.screen.sync(entries_for(&app));

        // Login screen: "Sign in" is the first row
        let action = action_for_event(TuiEvent::Submit, &mut tui).unwrap();
        assert_eq!(action, Action::SignIn);
        update(&mut app, action);

        assert_eq!(
            app.current_route(),
            Some(AppRoute::BottomBar(BottomBarRoute::Home))
        );
        let status: Vec<String> = changes.try_iter().map(|c| describe_change(&c)).collect();
        assert_eq!(
            status,
            vec!["Sign in to open Home", "Signed in, continuing to Home"]
        );
    }
}
