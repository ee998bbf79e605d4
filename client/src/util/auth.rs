//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every routed view applies the same rule: once the session is ready, the
//! URL must name the view that is actually rendered.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;
use crate::state::view::{NavigationTarget, redirect_for, resolve};

/// Path the router should be moved to for `requested`, if any.
#[must_use]
pub fn view_redirect(state: &SessionState, requested: NavigationTarget) -> Option<&'static str> {
    redirect_for(resolve(state, requested), requested)
}

/// Replace the current history entry whenever the resolved view stops
/// matching `requested`.
pub fn install_view_redirect<F>(session: RwSignal<SessionState>, requested: NavigationTarget, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(path) = session.with(|state| view_redirect(state, requested)) {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
