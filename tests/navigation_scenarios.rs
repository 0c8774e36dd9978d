//! End-to-end navigation scenarios against the public back stack API,
//! using the app's own routes.

use byebuy::core::action::{Action, Effect, update};
use byebuy::core::backstack::AuthBackStack;
use byebuy::core::route::{AppRoute, AuthenticationRoute, BottomBarRoute, Onboarding, Route};
use byebuy::core::session::{load_navigation, save_navigation};
use byebuy::core::state::App;

const HOME: AppRoute = AppRoute::BottomBar(BottomBarRoute::Home);
const CALENDAR: AppRoute = AppRoute::BottomBar(BottomBarRoute::Calendar);
const PROFILE: AppRoute = AppRoute::BottomBar(BottomBarRoute::Profile);
const WELCOME: AppRoute = AppRoute::Onboarding(Onboarding::Welcome);
const REGISTER: AppRoute = AppRoute::Authentication(AuthenticationRoute::Register);
const LOGIN: AppRoute = AppRoute::LOGIN;

#[test]
fn redirect_then_resume() {
    let mut stack = AuthBackStack::new(WELCOME, LOGIN);

    stack.add(CALENDAR);
    assert_eq!(stack.back_stack(), &[WELCOME, LOGIN]);
    assert_eq!(stack.pending_redirect(), Some(&CALENDAR));

    stack.login();
    assert_eq!(stack.back_stack(), &[WELCOME, CALENDAR]);
    assert_eq!(stack.pending_redirect(), None);
    assert!(stack.is_logged_in());
}

#[test]
fn login_without_pending_keeps_history() {
    let mut stack = AuthBackStack::new(LOGIN, LOGIN);

    stack.add(REGISTER);
    assert_eq!(stack.back_stack(), &[LOGIN, REGISTER]);

    stack.login();
    assert_eq!(stack.back_stack(), &[LOGIN, REGISTER]);
    assert!(stack.is_logged_in());
}

#[test]
fn logout_purges_protected_screens() {
    let mut stack = AuthBackStack::new(WELCOME, LOGIN);
    stack.login();
    stack.add(CALENDAR);
    stack.add(PROFILE);

    stack.logout();
    assert_eq!(stack.back_stack(), &[WELCOME]);
    assert!(!stack.is_logged_in());
    assert!(!stack.back_stack().iter().any(Route::requires_login));
}

#[test]
fn remove_on_single_entry_empties_stack() {
    let mut stack = AuthBackStack::new(WELCOME, LOGIN);
    assert_eq!(stack.remove(), Some(WELCOME));
    assert!(stack.is_empty());
}

#[test]
fn protected_routes_pass_through_once_signed_in() {
    let mut stack = AuthBackStack::new(WELCOME, LOGIN);
    stack.login();
    for route in [HOME, REGISTER, PROFILE] {
        stack.add(route);
        assert_eq!(stack.top(), Some(&route));
    }
}

#[test]
fn unprotected_routes_pass_through_while_signed_out() {
    let mut stack = AuthBackStack::new(WELCOME, LOGIN);
    for route in [REGISTER, LOGIN, WELCOME] {
        stack.add(route);
        assert_eq!(stack.top(), Some(&route));
    }
}

#[test]
fn full_session_through_reducer() {
    let mut app = App::new(WELCOME, LOGIN);

    update(&mut app, Action::Navigate(PROFILE));
    assert_eq!(app.current_route(), Some(LOGIN));

    update(&mut app, Action::SignIn);
    update(&mut app, Action::Navigate(CALENDAR));
    assert_eq!(app.back_stack.back_stack(), &[WELCOME, PROFILE, CALENDAR]);

    assert_eq!(update(&mut app, Action::SignOut), Effect::SaveSession);
    assert_eq!(app.back_stack.back_stack(), &[WELCOME]);

    assert_eq!(update(&mut app, Action::Back), Effect::Quit);
    assert_eq!(app.back_stack.len(), 1);
}

#[test]
fn saved_session_restores_signed_out() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    save_navigation(&path, &[WELCOME, HOME, REGISTER]).unwrap();
    let saved = load_navigation(&path).unwrap().unwrap();

    let stack = AuthBackStack::restore(WELCOME, LOGIN, saved.history);
    assert_eq!(stack.back_stack(), &[WELCOME, REGISTER]);
    assert!(!stack.is_logged_in());
}
