//! # Routes
//!
//! A route is a value naming a navigable destination. The back stack only
//! ever asks two things of it: "is this the same destination?" (`PartialEq`)
//! and "does this need a signed-in user?" (`Route::requires_login`).
//!
//! The app's concrete destinations live in [`AppRoute`], grouped in three
//! graphs:
//!
//! ```text
//! onboarding      welcome → permissions → final
//! authentication  welcome, login, register, forgot_password, verify_email
//! bottom_bar      home, calendar, profile, settings      (requires login)
//! ```
//!
//! Every route has a path form `<graph>/<screen>` that is used in config
//! files, CLI flags and the saved session.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A navigable destination.
pub trait Route: Clone + PartialEq + fmt::Debug {
    /// True if the destination may only be shown to a signed-in user.
    fn requires_login(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Onboarding {
    Welcome,
    Permissions,
    Final,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthenticationRoute {
    Welcome,
    Login,
    Register,
    ForgotPassword,
    VerifyEmail,
}

/// Top-level sections reachable from the bottom bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BottomBarRoute {
    Home,
    Calendar,
    Profile,
    Settings,
}

impl BottomBarRoute {
    pub const ALL: [BottomBarRoute; 4] = [
        BottomBarRoute::Home,
        BottomBarRoute::Calendar,
        BottomBarRoute::Profile,
        BottomBarRoute::Settings,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BottomBarRoute::Home => "Home",
            BottomBarRoute::Calendar => "Calendar",
            BottomBarRoute::Profile => "Profile",
            BottomBarRoute::Settings => "Settings",
        }
    }
}

/// Every destination the app knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AppRoute {
    Onboarding(Onboarding),
    Authentication(AuthenticationRoute),
    BottomBar(BottomBarRoute),
}

impl Route for AppRoute {
    fn requires_login(&self) -> bool {
        matches!(self, AppRoute::BottomBar(_))
    }
}

impl Default for AppRoute {
    fn default() -> Self {
        AppRoute::Onboarding(Onboarding::Welcome)
    }
}

impl AppRoute {
    pub const LOGIN: AppRoute = AppRoute::Authentication(AuthenticationRoute::Login);

    /// Human-readable screen title.
    pub fn title(&self) -> &'static str {
        match self {
            AppRoute::Onboarding(Onboarding::Welcome) => "Welcome",
            AppRoute::Onboarding(Onboarding::Permissions) => "Permissions",
            AppRoute::Onboarding(Onboarding::Final) => "All Set",
            AppRoute::Authentication(AuthenticationRoute::Welcome) => "Get Started",
            AppRoute::Authentication(AuthenticationRoute::Login) => "Sign In",
            AppRoute::Authentication(AuthenticationRoute::Register) => "Create Account",
            AppRoute::Authentication(AuthenticationRoute::ForgotPassword) => "Forgot Password",
            AppRoute::Authentication(AuthenticationRoute::VerifyEmail) => "Verify Email",
            AppRoute::BottomBar(section) => section.label(),
        }
    }

    /// Destinations linked from this route's screen, in display order.
    pub fn destinations(&self) -> Vec<AppRoute> {
        use AuthenticationRoute as A;

        match self {
            AppRoute::Onboarding(Onboarding::Welcome) => {
                vec![AppRoute::Onboarding(Onboarding::Permissions)]
            }
            AppRoute::Onboarding(Onboarding::Permissions) => {
                vec![AppRoute::Onboarding(Onboarding::Final)]
            }
            AppRoute::Onboarding(Onboarding::Final) => vec![
                AppRoute::BottomBar(BottomBarRoute::Home),
                AppRoute::Authentication(A::Welcome),
            ],
            AppRoute::Authentication(A::Welcome) => vec![
                AppRoute::Authentication(A::Login),
                AppRoute::Authentication(A::Register),
            ],
            AppRoute::Authentication(A::Login) => vec![
                AppRoute::Authentication(A::Register),
                AppRoute::Authentication(A::ForgotPassword),
            ],
            AppRoute::Authentication(A::Register) => vec![
                AppRoute::Authentication(A::VerifyEmail),
                AppRoute::Authentication(A::Login),
            ],
            AppRoute::Authentication(A::ForgotPassword | A::VerifyEmail) => {
                vec![AppRoute::Authentication(A::Login)]
            }
            AppRoute::BottomBar(current) => BottomBarRoute::ALL
                .into_iter()
                .filter(|section| section != current)
                .map(AppRoute::BottomBar)
                .collect(),
        }
    }

    /// The bottom-bar section this route belongs to, if any.
    pub fn section(&self) -> Option<BottomBarRoute> {
        match self {
            AppRoute::BottomBar(section) => Some(*section),
            _ => None,
        }
    }

    fn graph(&self) -> &'static str {
        match self {
            AppRoute::Onboarding(_) => "onboarding",
            AppRoute::Authentication(_) => "authentication",
            AppRoute::BottomBar(_) => "bottom_bar",
        }
    }

    fn screen(&self) -> &'static str {
        match self {
            AppRoute::Onboarding(Onboarding::Welcome) => "welcome",
            AppRoute::Onboarding(Onboarding::Permissions) => "permissions",
            AppRoute::Onboarding(Onboarding::Final) => "final",
            AppRoute::Authentication(AuthenticationRoute::Welcome) => "welcome",
            AppRoute::Authentication(AuthenticationRoute::Login) => "login",
            AppRoute::Authentication(AuthenticationRoute::Register) => "register",
            AppRoute::Authentication(AuthenticationRoute::ForgotPassword) => "forgot_password",
            AppRoute::Authentication(AuthenticationRoute::VerifyEmail) => "verify_email",
            AppRoute::BottomBar(BottomBarRoute::Home) => "home",
            AppRoute::BottomBar(BottomBarRoute::Calendar) => "calendar",
            AppRoute::BottomBar(BottomBarRoute::Profile) => "profile",
            AppRoute::BottomBar(BottomBarRoute::Settings) => "settings",
        }
    }
}

impl fmt::Display for AppRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.graph(), self.screen())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseRouteError {
    #[error("route `{0}` is not of the form <graph>/<screen>")]
    Malformed(String),
    #[error("unknown navigation graph `{0}`")]
    UnknownGraph(String),
    #[error("graph `{graph}` has no screen `{screen}`")]
    UnknownScreen { graph: String, screen: String },
}

impl FromStr for AppRoute {
    type Err = ParseRouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (graph, screen) = s
            .trim()
            .split_once('/')
            .ok_or_else(|| ParseRouteError::Malformed(s.to_string()))?;

        let unknown_screen = || ParseRouteError::UnknownScreen {
            graph: graph.to_string(),
            screen: screen.to_string(),
        };

        let route = match graph {
            "onboarding" => AppRoute::Onboarding(match screen {
                "welcome" => Onboarding::Welcome,
                "permissions" => Onboarding::Permissions,
                "final" => Onboarding::Final,
                _ => return Err(unknown_screen()),
            }),
            "authentication" => AppRoute::Authentication(match screen {
                "welcome" => AuthenticationRoute::Welcome,
                "login" => AuthenticationRoute::Login,
                "register" => AuthenticationRoute::Register,
                "forgot_password" => AuthenticationRoute::ForgotPassword,
                "verify_email" => AuthenticationRoute::VerifyEmail,
                _ => return Err(unknown_screen()),
            }),
            "bottom_bar" => AppRoute::BottomBar(match screen {
                "home" => BottomBarRoute::Home,
                "calendar" => BottomBarRoute::Calendar,
                "profile" => BottomBarRoute::Profile,
                "settings" => BottomBarRoute::Settings,
                _ => return Err(unknown_screen()),
            }),
            other => return Err(ParseRouteError::UnknownGraph(other.to_string())),
        };
        Ok(route)
    }
}

impl TryFrom<String> for AppRoute {
    type Error = ParseRouteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AppRoute> for String {
    fn from(route: AppRoute) -> Self {
        route.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_bottom_bar_requires_login() {
        assert!(AppRoute::BottomBar(BottomBarRoute::Calendar).requires_login());
        assert!(!AppRoute::LOGIN.requires_login());
        assert!(!AppRoute::Onboarding(Onboarding::Final).requires_login());
    }

    #[test]
    fn test_path_parses_back() {
        for path in [
            "onboarding/permissions",
            "authentication/forgot_password",
            "bottom_bar/settings",
        ] {
            let route: AppRoute = path.parse().unwrap();
            assert_eq!(route.to_string(), path);
        }
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "home".parse::<AppRoute>(),
            Err(ParseRouteError::Malformed("home".to_string()))
        );
        assert_eq!(
            "shop/cart".parse::<AppRoute>(),
            Err(ParseRouteError::UnknownGraph("shop".to_string()))
        );
        assert!(matches!(
            "bottom_bar/cart".parse::<AppRoute>(),
            Err(ParseRouteError::UnknownScreen { .. })
        ));
    }

    #[test]
    fn test_serde_uses_path_form() {
        let json = serde_json::to_string(&AppRoute::LOGIN).unwrap();
        assert_eq!(json, "\"authentication/login\"");

        let route: AppRoute = serde_json::from_str("\"bottom_bar/home\"").unwrap();
        assert_eq!(route, AppRoute::BottomBar(BottomBarRoute::Home));

        assert!(serde_json::from_str::<AppRoute>("\"bottom_bar/nope\"").is_err());
    }

    #[test]
    fn test_bottom_bar_links_to_other_sections() {
        let destinations = AppRoute::BottomBar(BottomBarRoute::Profile).destinations();
        assert_eq!(destinations.len(), 3);
        assert!(!destinations.contains(&AppRoute::BottomBar(BottomBarRoute::Profile)));
    }

    #[test]
    fn test_every_route_has_somewhere_to_go() {
        let final_screen = AppRoute::Onboarding(Onboarding::Final);
        assert!(final_screen.destinations().iter().any(Route::requires_login));
        assert!(!AppRoute::LOGIN.destinations().is_empty());
    }
}
