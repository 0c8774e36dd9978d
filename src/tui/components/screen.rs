//! # Screen Component
//!
//! The body of whatever route is on top of the back stack: a title and a
//! selectable list of things to do from here.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ScreenState` lives in `TuiState`
//! - `Screen` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding};

use crate::core::route::{AppRoute, Route};
use crate::core::state::App;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// One selectable row on a screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScreenEntry {
    Go(AppRoute),
    SignIn,
    SignOut,
}

impl ScreenEntry {
    fn label(&self, logged_in: bool) -> String {
        match self {
            ScreenEntry::Go(route) if route.requires_login() && !logged_in => {
                format!("Go to {} (sign-in required)", route.title())
            }
            ScreenEntry::Go(route) => format!("Go to {}", route.title()),
            ScreenEntry::SignIn => "Sign in".to_string(),
            ScreenEntry::SignOut => "Sign out".to_string(),
        }
    }
}

/// Rows for the route currently on top of `app`'s back stack.
///
/// The login route offers "Sign in" first; a signed-in user can always sign out.
pub fn entries_for(app: &App) -> Vec<ScreenEntry> {
    let Some(route) = app.current_route() else {
        return Vec::new();
    };
    let logged_in = app.back_stack.is_logged_in();

    let mut entries = Vec::new();
    if route == *app.back_stack.login_route() && !logged_in {
        entries.push(ScreenEntry::SignIn);
    }
    entries.extend(route.destinations().into_iter().map(ScreenEntry::Go));
    if logged_in {
        entries.push(ScreenEntry::SignOut);
    }
    entries
}

/// Events emitted by a screen.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenEvent {
    Activate(ScreenEntry),
}

/// Persistent state for the active screen.
pub struct ScreenState {
    pub entries: Vec<ScreenEntry>,
    pub selected: usize,
    pub list_state: ListState,
}

impl ScreenState {
    pub fn new(entries: Vec<ScreenEntry>) -> Self {
        let mut list_state = ListState::default();
        if !entries.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            entries,
            selected: 0,
            list_state,
        }
    }

    /// Replace the rows, resetting the selection only if they changed.
    pub fn sync(&mut self, entries: Vec<ScreenEntry>) {
        if entries != self.entries {
            *self = Self::new(entries);
        }
    }
}

impl EventHandler for ScreenState {
    type Event = ScreenEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ScreenEvent> {
        match event {
            TuiEvent::CursorUp => {
                if !self.entries.is_empty() {
                    self.selected = self.selected.saturating_sub(1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::CursorDown => {
                if !self.entries.is_empty() {
                    self.selected = (self.selected + 1).min(self.entries.len() - 1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::Submit => self
                .entries
                .get(self.selected)
                .map(|entry| ScreenEvent::Activate(*entry)),
            _ => None,
        }
    }
}

/// Transient render wrapper for the active screen.
pub struct Screen<'a> {
    state: &'a mut ScreenState,
    route: AppRoute,
    logged_in: bool,
}

impl<'a> Screen<'a> {
    pub fn new(state: &'a mut ScreenState, route: AppRoute, logged_in: bool) -> Self {
        Self {
            state,
            route,
            logged_in,
        }
    }
}

impl Component for Screen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_color = if self.route.requires_login() {
            Color::Green
        } else {
            Color::Cyan
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                format!(" {} ", self.route.title()),
                Style::default().fg(title_color).add_modifier(Modifier::BOLD),
            ))
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(format!(" {} ", self.route)).right_aligned())
            .padding(Padding::horizontal(1));

        let items: Vec<ListItem> = self
            .state
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    match entry {
                        ScreenEntry::Go(route) if route.requires_login() && !self.logged_in => {
                            Style::default().fg(Color::DarkGray)
                        }
                        ScreenEntry::SignIn | ScreenEntry::SignOut => {
                            Style::default().fg(Color::Yellow)
                        }
                        ScreenEntry::Go(_) => Style::default().fg(Color::Gray),
                    }
                };
                ListItem::new(Line::from(Span::styled(entry.label(self.logged_in), style)))
            })
            .collect();

        let list = List::new(items).block(block);

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::route::{AuthenticationRoute, BottomBarRoute, Onboarding};
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_login_screen_offers_sign_in_first() {
        let mut app = test_app();
        update(&mut app, Action::Navigate(AppRoute::LOGIN));
        let entries = entries_for(&app);
        assert_eq!(entries[0], ScreenEntry::SignIn);
        assert!(entries.contains(&ScreenEntry::Go(AppRoute::Authentication(
            AuthenticationRoute::Register
        ))));
        assert!(!entries.contains(&ScreenEntry::SignOut));
    }

    #[test]
    fn test_signed_in_screen_offers_sign_out() {
        let mut app = test_app();
        update(&mut app, Action::SignIn);
        update(
            &mut app,
            Action::Navigate(AppRoute::BottomBar(BottomBarRoute::Home)),
        );
        let entries = entries_for(&app);
        assert_eq!(entries.last(), Some(&ScreenEntry::SignOut));
        assert!(!entries.contains(&ScreenEntry::SignIn));
    }

    #[test]
    fn test_selection_clamps_at_edges() {
        let mut state = ScreenState::new(vec![ScreenEntry::SignIn, ScreenEntry::SignOut]);
        assert_eq!(state.handle_event(&TuiEvent::CursorUp), None);
        assert_eq!(state.selected, 0);

        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected, 1);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(ScreenEvent::Activate(ScreenEntry::SignOut))
        );
    }

    #[test]
    fn test_sync_keeps_selection_when_unchanged() {
        let entries = vec![ScreenEntry::SignIn, ScreenEntry::SignOut];
        let mut state = ScreenState::new(entries.clone());
        state.handle_event(&TuiEvent::CursorDown);

        state.sync(entries);
        assert_eq!(state.selected, 1);

        state.sync(vec![ScreenEntry::SignIn]);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_submit_on_empty_screen_is_none() {
        let mut state = ScreenState::new(Vec::new());
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
    }

    #[test]
    fn test_render_marks_locked_destinations() {
        let backend = TestBackend::new(60, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        let route = AppRoute::Onboarding(Onboarding::Final);
        let mut state = ScreenState::new(
            route.destinations().into_iter().map(ScreenEntry::Go).collect(),
        );

        terminal
            .draw(|f| {
                Screen::new(&mut state, route, false).render(f, f.area());
            })
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("All Set"));
        assert!(text.contains("Go to Home (sign-in required)"));
        assert!(text.contains("Go to Get Started"));
    }
}
