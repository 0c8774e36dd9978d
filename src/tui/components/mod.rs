//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: Top status bar with screen title, sign-in state and status
//! - `BottomBar`: Top-level sections reachable by number key
//! - `HistoryPanel`: The back stack, newest first
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `ScreenState` / `Screen`: The route on top of the stack and its actions
//!
//! Components receive external data as "props" (struct fields), never by
//! reaching into `App` themselves:
//!
//! ```rust,ignore
//! let mut bar = BottomBar::new(app.current_route().and_then(|r| r.section()), logged_in);
//! bar.render(frame, area);
//! ```

mod bottom_bar;
mod history;
mod screen;
mod title_bar;

pub use bottom_bar::BottomBar;
pub use history::HistoryPanel;
pub use screen::{Screen, ScreenEntry, ScreenEvent, ScreenState, entries_for};
pub use title_bar::TitleBar;
