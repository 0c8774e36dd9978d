use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{BottomBar, HistoryPanel, Screen, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph};

const HELP_TEXT: &str = "↑↓ Select  Enter Open  Esc Back  1-4 Sections  o Sign out  q Quit";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min, Percentage};
    let layout = Layout::vertical([Length(1), Min(0), Length(3), Length(1)]);
    let [title_area, main_area, bottom_area, help_area] = layout.areas(frame.area());

    let logged_in = app.back_stack.is_logged_in();
    let current = app.current_route();

    let mut title_bar = TitleBar::new(
        current.map(|r| r.title()).unwrap_or("-").to_string(),
        logged_in,
        app.status_message.clone(),
    );
    title_bar.render(frame, title_area);

    let [screen_area, history_area] =
        Layout::horizontal([Percentage(65), Percentage(35)]).areas(main_area);

    match current {
        Some(route) => Screen::new(&mut tui.screen, route, logged_in).render(frame, screen_area),
        None => draw_empty_view(frame, screen_area),
    }

    HistoryPanel::new(
        app.back_stack.back_stack(),
        app.back_stack.pending_redirect().copied(),
    )
    .render(frame, history_area);

    BottomBar::new(current.and_then(|r| r.section()), logged_in).render(frame, bottom_area);

    let help = Paragraph::new(HELP_TEXT)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, help_area);
}

fn draw_empty_view(frame: &mut Frame, area: Rect) {
    let empty = Paragraph::new("Nothing left to show.")
        .block(Block::bordered())
        .alignment(Alignment::Center);
    frame.render_widget(empty, area);
}
