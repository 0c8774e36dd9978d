//! # Authentication-Aware Back Stack
//!
//! An ordered navigation history (oldest first, top = current screen) that
//! refuses to show protected routes to a signed-out user.
//!
//! ```text
//! add(Calendar) while signed out        login()
//! [Home]  →  [Home, Login]              →  [Home, Calendar]
//!             pending = Calendar            pending = none
//! ```
//!
//! - Navigating to a route with `requires_login()` while signed out pushes
//!   the login route instead and remembers the requested route as the
//!   pending redirect target. There is only ever one pending slot.
//! - Navigating to the login route directly clears any pending target.
//! - `login()` resumes the pending target and drops the login route.
//! - `logout()` purges every protected entry and the pending target.
//!
//! The stack is the single owner of this state. Hosts read it through the
//! accessors and react to changes either by polling [`AuthBackStack::revision`]
//! or by draining a channel from [`AuthBackStack::subscribe`].

use log::debug;
use std::sync::mpsc::{self, Receiver, Sender};

use crate::core::route::Route;

/// A change notification, emitted once per state-changing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum BackStackChange<R> {
    /// The route was pushed as requested.
    Pushed(R),
    /// A protected route was requested while signed out; the login route was pushed instead.
    Redirected { requested: R },
    /// The route was popped off the top.
    Popped(R),
    /// The user signed in, resuming the pending target if there was one.
    LoggedIn { resumed: Option<R> },
    /// The user signed out and `purged` protected entries were removed.
    LoggedOut { purged: usize },
}

/// Navigation history that sends signed-out users to the login route for protected screens.
#[derive(Debug)]
pub struct AuthBackStack<R: Route> {
    history: Vec<R>,
    login_route: R,
    pending_redirect: Option<R>,
    logged_in: bool,
    revision: u64,
    subscribers: Vec<Sender<BackStackChange<R>>>,
}

impl<R: Route> AuthBackStack<R> {
    /// Creates a signed-out stack holding only `start_route`.
    ///
    /// `start_route` and `login_route` may be equal; nothing checks.
    pub fn new(start_route: R, login_route: R) -> Self {
        Self {
            history: vec![start_route],
            login_route,
            pending_redirect: None,
            logged_in: false,
            revision: 0,
            subscribers: Vec::new(),
        }
    }

    /// Rebuilds a signed-out stack from a saved history.
    ///
    /// Protected entries are dropped since a restored session is never
    /// authenticated. Falls back to `[start_route]` if nothing survives.
    pub fn restore(start_route: R, login_route: R, history: Vec<R>) -> Self {
        let mut history: Vec<R> = history
            .into_iter()
            .filter(|route| !route.requires_login())
            .collect();
        if history.is_empty() {
            history.push(start_route);
        }
        Self {
            history,
            login_route,
            pending_redirect: None,
            logged_in: false,
            revision: 0,
            subscribers: Vec::new(),
        }
    }

    /// Navigates to `route`, redirecting to the login route if it is protected
    /// and the user is signed out.
    pub fn add(&mut self, route: R) {
        let change = if route.requires_login() && !self.logged_in {
            debug!("Redirecting {:?} to {:?}", route, self.login_route);
            self.pending_redirect = Some(route.clone());
            self.history.push(self.login_route.clone());
            BackStackChange::Redirected {
                requested: route.clone(),
            }
        } else {
            self.history.push(route.clone());
            BackStackChange::Pushed(route.clone())
        };

        if route == self.login_route {
            self.pending_redirect = None;
        }

        self.notify(change);
    }

    /// Pops the top entry.
    ///
    /// Popping the last entry leaves the history empty; hosts that want to
    /// keep a screen on display must not call this at depth 1.
    pub fn remove(&mut self) -> Option<R> {
        let route = self.history.pop()?;
        self.notify(BackStackChange::Popped(route.clone()));
        Some(route)
    }

    /// Marks the user as signed in and resumes the pending target, if any.
    pub fn login(&mut self) {
        let was_logged_in = self.logged_in;
        self.logged_in = true;

        let resumed = self.pending_redirect.take();
        if let Some(target) = &resumed {
            self.history.push(target.clone());
            if let Some(index) = self.history.iter().position(|r| *r == self.login_route) {
                self.history.remove(index);
            }
            debug!("Resumed {:?} after login", target);
        }

        if !was_logged_in || resumed.is_some() {
            self.notify(BackStackChange::LoggedIn { resumed });
        }
    }

    /// Marks the user as signed out and removes every protected entry.
    pub fn logout(&mut self) {
        let was_logged_in = self.logged_in;
        self.logged_in = false;

        let before = self.history.len();
        self.history.retain(|route| !route.requires_login());
        let purged = before - self.history.len();

        let dropped_pending = self.pending_redirect.take().is_some();
        if purged > 0 || dropped_pending {
            debug!(
                "Logout purged {} protected routes (pending dropped: {})",
                purged, dropped_pending
            );
        }

        if was_logged_in || purged > 0 || dropped_pending {
            self.notify(BackStackChange::LoggedOut { purged });
        }
    }

    pub fn back_stack(&self) -> &[R] {
        &self.history
    }

    pub fn top(&self) -> Option<&R> {
        self.history.last()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn pending_redirect(&self) -> Option<&R> {
        self.pending_redirect.as_ref()
    }

    pub fn login_route(&self) -> &R {
        &self.login_route
    }

    /// Counter bumped on every observable change. Unchanged by no-op calls.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns a channel that receives every subsequent change.
    ///
    /// Dropping the receiver unsubscribes.
    pub fn subscribe(&mut self) -> Receiver<BackStackChange<R>> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    fn notify(&mut self, change: BackStackChange<R>) {
        self.revision += 1;
        self.subscribers.retain(|tx| tx.send(change.clone()).is_ok());
    }
}
