//! # Core Application Logic
//!
//! This module contains ByeBuy's navigation logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Routes (destinations)│
//!                    │  • AuthBackStack        │
//!                    │  • Action + update()    │
//!                    └───────────┬─────────────┘
//!                                │
//!                         ┌──────┴─────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`route`]: The `Route` capability trait and the app's `AppRoute` graphs
//! - [`backstack`]: `AuthBackStack`, history with login gating
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: `~/.byebuy/config.toml` loading and resolution
//! - [`session`]: Saved history for the next run

pub mod action;
pub mod backstack;
pub mod config;
pub mod route;
pub mod session;
pub mod state;
