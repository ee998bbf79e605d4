//! Email + password login form for the user and admin portals.
//!
//! The store owns the outcome: on success the session changes and the
//! routed view switches to the matching dashboard on its own. Only failures
//! are surfaced here.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::modal::{Modal, Notice};
use crate::net::error::ApiError;
use crate::net::types::{Credentials, LoginPortal};
use crate::state::session::Principal;

/// Dialog to show for a finished login attempt, if any.
fn login_notice(outcome: &Result<Principal, ApiError>) -> Option<Notice> {
    match outcome {
        Ok(_) | Err(ApiError::Superseded) => None,
        Err(err) if err.is_retryable() => Some(Notice::error("Server Unavailable", err.user_message())),
        Err(err) => Some(Notice::error("Login Failed", err.user_message())),
    }
}

fn submit_label(portal: LoginPortal) -> &'static str {
    match portal {
        LoginPortal::User => "Login",
        LoginPortal::Admin => "Admin Login",
    }
}

#[component]
pub fn LoginPage(portal: LoginPortal) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let notice = RwSignal::new(None::<Notice>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = match Credentials::from_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(err) => {
                notice.set(login_notice(&Err(err)));
                return;
            }
        };
        busy.set(true);
        notice.set(None);
        let login = ctx.session.login(portal, credentials);
        leptos::task::spawn_local(async move {
            let outcome = login.await;
            busy.set(false);
            if let Some(failure) = login_notice(&outcome) {
                notice.set(Some(failure));
                password.set(String::new());
            }
        });
    };

    view! {
        <div class="card card--narrow">
            <h2>{portal.title()}</h2>
            <form class="login-form" on:submit=on_submit>
                <input
                    class="login-input"
                    type="email"
                    placeholder="Email"
                    autocomplete="username"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="login-input"
                    type="password"
                    placeholder="Password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="btn btn--wide" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { submit_label(portal) }}
                </button>
            </form>
            {move || {
                notice.get().map(|n| view! { <Modal notice=n on_close=Callback::new(move |()| notice.set(None))/> })
            }}
        </div>
    }
}
