//! # BottomBar Component
//!
//! The row of top-level sections (Home, Calendar, Profile, Settings), each
//! reachable with its number key. Every section needs sign-in, so while the
//! user is signed out they are drawn dimmed; selecting one still works and
//! goes through the usual sign-in redirect.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::route::BottomBarRoute;
use crate::tui::component::Component;

pub struct BottomBar {
    /// Section currently on screen, if any.
    pub current: Option<BottomBarRoute>,
    pub logged_in: bool,
}

impl BottomBar {
    pub fn new(current: Option<BottomBarRoute>, logged_in: bool) -> Self {
        Self { current, logged_in }
    }

    fn section_style(&self, section: BottomBarRoute) -> Style {
        if self.current == Some(section) {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else if self.logged_in {
            Style::default().fg(Color::Gray)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }
}

impl Component for BottomBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        for (i, section) in BottomBarRoute::ALL.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("   "));
            }
            spans.push(Span::styled(
                format!(" {} {} ", i + 1, section.label()),
                self.section_style(section),
            ));
        }

        let border_style = if self.logged_in {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        };
        let block = Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_style(border_style);

        let bar = Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(bar, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_renders_all_sections_with_keys() {
        let backend = TestBackend::new(80, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut bar = BottomBar::new(None, false);

        terminal.draw(|f| bar.render(f, f.area())).unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("1 Home"));
        assert!(text.contains("2 Calendar"));
        assert!(text.contains("3 Profile"));
        assert!(text.contains("4 Settings"));
    }

    #[test]
    fn test_current_section_is_highlighted() {
        let bar = BottomBar::new(Some(BottomBarRoute::Profile), true);
        assert!(
            bar.section_style(BottomBarRoute::Profile)
                .add_modifier
                .contains(Modifier::REVERSED)
        );
        assert_eq!(bar.section_style(BottomBarRoute::Home).fg, Some(Color::Gray));
    }

    #[test]
    fn test_sections_dimmed_when_signed_out() {
        let bar = BottomBar::new(None, false);
        assert_eq!(
            bar.section_style(BottomBarRoute::Calendar).fg,
            Some(Color::DarkGray)
        );
    }
}
