//! Role-gated view resolution.
//!
//! `resolve` is a pure function of the session snapshot and the requested
//! target. Rules, first match wins:
//!
//! 1. not ready            -> `Loading`
//! 2. admin                -> `AdminDashboard` (whatever was requested)
//! 3. user                 -> `UserDashboard`
//! 4. signed out           -> requested home / user-login / admin-login,
//!                            anything else falls back to `Home`

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use super::session::{Principal, SessionState};

/// A requested destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavigationTarget {
    Home,
    UserLogin,
    AdminLogin,
    UserDashboard,
    AdminDashboard,
}

impl NavigationTarget {
    /// Router path for this target.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::UserLogin => "/login/user",
            Self::AdminLogin => "/login/admin",
            Self::UserDashboard => "/user",
            Self::AdminDashboard => "/admin",
        }
    }
}

/// What the content area renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum View {
    Loading,
    Home,
    UserLogin,
    AdminLogin,
    UserDashboard,
    AdminDashboard,
}

impl View {
    /// Target whose path matches this view. `Loading` has none.
    #[must_use]
    pub fn target(self) -> Option<NavigationTarget> {
        match self {
            Self::Loading => None,
            Self::Home => Some(NavigationTarget::Home),
            Self::UserLogin => Some(NavigationTarget::UserLogin),
            Self::AdminLogin => Some(NavigationTarget::AdminLogin),
            Self::UserDashboard => Some(NavigationTarget::UserDashboard),
            Self::AdminDashboard => Some(NavigationTarget::AdminDashboard),
        }
    }
}

/// Decide what to render for `target` given `session`.
#[must_use]
pub fn resolve(session: &SessionState, target: NavigationTarget) -> View {
    let Some(principal) = session.principal() else {
        return View::Loading;
    };
    match principal {
        Principal::Admin(_) => View::AdminDashboard,
        Principal::User(_) => View::UserDashboard,
        Principal::Unauthenticated => match target {
            NavigationTarget::UserLogin => View::UserLogin,
            NavigationTarget::AdminLogin => View::AdminLogin,
            NavigationTarget::Home | NavigationTarget::UserDashboard | NavigationTarget::AdminDashboard => View::Home,
        },
    }
}

/// Path to redirect to when the resolved view does not match the request.
#[must_use]
pub fn redirect_for(view: View, requested: NavigationTarget) -> Option<&'static str> {
    view.target().filter(|resolved| *resolved != requested).map(NavigationTarget::path)
}
