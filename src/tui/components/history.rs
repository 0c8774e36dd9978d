//! # History Panel
//!
//! Side panel listing the back stack, newest entry first, so the redirect
//! and purge behavior is visible while navigating. Protected entries are
//! marked with `*`; a pending redirect target is shown underneath.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use crate::core::route::{AppRoute, Route};
use crate::tui::component::Component;

pub struct HistoryPanel<'a> {
    pub history: &'a [AppRoute],
    pub pending: Option<AppRoute>,
}

impl<'a> HistoryPanel<'a> {
    pub fn new(history: &'a [AppRoute], pending: Option<AppRoute>) -> Self {
        Self { history, pending }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines: Vec<Line> = self
            .history
            .iter()
            .enumerate()
            .rev()
            .map(|(depth, route)| {
                let is_top = depth + 1 == self.history.len();
                let marker = if route.requires_login() { "*" } else { " " };
                let style = if is_top {
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                Line::from(vec![
                    Span::styled(format!("{:>2} ", depth + 1), Style::default().fg(Color::DarkGray)),
                    Span::styled(format!("{marker} {}", route.title()), style),
                ])
            })
            .collect();

        if let Some(pending) = self.pending {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!("pending: {}", pending.title()),
                Style::default().fg(Color::Yellow),
            )));
        }
        lines
    }
}

impl Component for HistoryPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" History ")
            .padding(Padding::horizontal(1));

        frame.render_widget(Paragraph::new(self.lines()).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::route::{BottomBarRoute, Onboarding};

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_newest_first_with_protected_marker() {
        let history = [
            AppRoute::Onboarding(Onboarding::Welcome),
            AppRoute::BottomBar(BottomBarRoute::Calendar),
        ];
        let panel = HistoryPanel::new(&history, None);
        let lines: Vec<String> = panel.lines().iter().map(plain).collect();

        assert_eq!(lines, vec![" 2 * Calendar", " 1   Welcome"]);
    }

    #[test]
    fn test_pending_target_is_listed() {
        let history = [AppRoute::Onboarding(Onboarding::Welcome), AppRoute::LOGIN];
        let panel = HistoryPanel::new(&history, Some(AppRoute::BottomBar(BottomBarRoute::Home)));
        let lines: Vec<String> = panel.lines().iter().map(plain).collect();

        assert_eq!(lines.last().map(String::as_str), Some("pending: Home"));
    }
}
