//! # TitleBar Component
//!
//! Top status bar: app name, current screen, sign-in state and the latest
//! status message.
//!
//! TitleBar is purely presentational. It receives all data as props and
//! has no internal state.
//!
//! The text is cut to the terminal width by display columns (not bytes), so
//! the sign-in state stays visible and a long status message is the part that
//! gets truncated.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::Component;

pub struct TitleBar {
    /// Title of the screen on top of the back stack
    pub screen_title: String,
    pub logged_in: bool,
    /// Status message (e.g., "Sign in to open Calendar")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(screen_title: String, logged_in: bool, status_message: String) -> Self {
        Self {
            screen_title,
            logged_in,
            status_message,
        }
    }

    fn auth_label(&self) -> &'static str {
        if self.logged_in { "signed in" } else { "signed out" }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let head = format!("ByeBuy | {} | ", self.screen_title);
        let auth = self.auth_label();
        let auth_color = if self.logged_in { Color::Green } else { Color::Yellow };

        let mut spans = vec![
            Span::raw(head.clone()),
            Span::styled(auth, Style::default().fg(auth_color)),
        ];

        if !self.status_message.is_empty() {
            let used = head.width() + auth.width() + 3;
            let room = (area.width as usize).saturating_sub(used);
            spans.push(Span::raw(" | "));
            spans.push(Span::raw(truncate_to_width(&self.status_message, room)));
        }

        frame.render_widget(Line::from(spans), area);
    }
}

/// Cut `s` to at most `max_width` display columns, ending in "…" if cut.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width - 1 {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(title_bar: &mut TitleBar, width: u16) -> String {
        let backend = TestBackend::new(width, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| title_bar.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let mut title_bar = TitleBar::new(
            "Sign In".to_string(),
            false,
            "Sign in to open Calendar".to_string(),
        );
        let text = render_text(&mut title_bar, 80);

        assert!(text.contains("ByeBuy | Sign In | signed out"));
        assert!(text.contains("Sign in to open Calendar"));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let mut title_bar = TitleBar::new("Home".to_string(), true, String::new());
        let text = render_text(&mut title_bar, 80);

        assert!(text.contains("signed in"));
        assert_eq!(text.matches('|').count(), 2);
    }

    #[test]
    fn test_long_status_is_truncated() {
        let mut title_bar = TitleBar::new(
            "Home".to_string(),
            true,
            "Signed in, continuing to a very long destination name".to_string(),
        );
        let text = render_text(&mut title_bar, 40);

        assert!(text.contains("signed in"));
        assert!(text.contains('…'));
    }

    #[test]
    fn test_truncate_to_width_counts_columns() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdef", 4), "abc…");
        // Wide characters take two columns each
        assert_eq!(truncate_to_width("日本語です", 5), "日本…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }
}
