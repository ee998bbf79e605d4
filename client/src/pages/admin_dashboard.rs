//! Admin dashboard: backend status text, role elevation and targeted
//! notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered only for admin sessions. Every privileged call goes through
//! `AdminConsole`, which rechecks the session before issuing a request.
//! Outcomes are reported in a `Modal`; the admin's own session is never
//! touched by anything on this page.

#[cfg(test)]
#[path = "admin_dashboard_test.rs"]
mod admin_dashboard_test;

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::modal::{Modal, Notice};
use crate::net::error::ApiError;
use crate::state::session::Identity;

const DASHBOARD_LOADING: &str = "Loading admin data...";

/// Row of the notification directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotifyTarget {
    pub uid: String,
    pub email: String,
}

/// Demonstration directory: three fixed accounts plus the signed-in admin.
fn notify_targets(me: Option<&Identity>) -> Vec<NotifyTarget> {
    let mut targets: Vec<NotifyTarget> = (1..=3)
        .map(|n| NotifyTarget { uid: format!("mockuser{n}_uid"), email: format!("user{n}@example.com") })
        .collect();
    if let Some(me) = me {
        targets.push(NotifyTarget { uid: me.uid.clone(), email: format!("{} (You)", me.email) });
    }
    targets
}

/// Failure dialog. Local rejections are shown as-is; backend failures get
/// the operation prefix.
fn failure_notice(title: &str, prefix: &str, err: &ApiError) -> Notice {
    match err {
        ApiError::Validation(message) | ApiError::Forbidden(message) => Notice::error(title, message.clone()),
        other => Notice::error(title, format!("{prefix}: {}", other.user_message())),
    }
}

/// Text for the status paragraph plus an optional failure dialog.
#[cfg(any(test, feature = "hydrate"))]
fn dashboard_outcome(result: Result<String, ApiError>) -> (String, Option<Notice>) {
    match result {
        Ok(text) => (text, None),
        Err(ApiError::Forbidden(message)) => (message, None),
        Err(err) => (
            "Failed to fetch admin data.".to_owned(),
            Some(failure_notice("Error", "Failed to fetch admin data", &err)),
        ),
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let state = ctx.state;
    let status = RwSignal::new(DASHBOARD_LOADING.to_owned());
    let notice = RwSignal::new(None::<Notice>);
    let uid_input = RwSignal::new(String::new());
    let granting = RwSignal::new(false);
    let notify_uid = RwSignal::new(None::<String>);
    let notify_message = RwSignal::new(String::new());
    let sending = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let admin = std::sync::Arc::clone(&ctx.admin);
        leptos::task::spawn_local(async move {
            let (text, failure) = dashboard_outcome(admin.dashboard().await);
            status.set(text);
            if failure.is_some() {
                notice.set(failure);
            }
        });
    }

    let admin = std::sync::Arc::clone(&ctx.admin);
    let on_grant = move |_| {
        if granting.get_untracked() {
            return;
        }
        granting.set(true);
        let admin = std::sync::Arc::clone(&admin);
        let uid = uid_input.get_untracked();
        leptos::task::spawn_local(async move {
            match admin.grant_admin(&uid).await {
                Ok(confirmation) => {
                    notice.set(Some(Notice::success("Success", confirmation)));
                    uid_input.set(String::new());
                }
                Err(err) => notice.set(Some(failure_notice("Error", "Failed to set admin claim", &err))),
            }
            granting.set(false);
        });
    };

    let close_prompt = move || {
        notify_uid.set(None);
        notify_message.set(String::new());
    };

    let admin = std::sync::Arc::clone(&ctx.admin);
    let on_send = move |_| {
        let Some(target) = notify_uid.get_untracked() else {
            return;
        };
        if sending.get_untracked() {
            return;
        }
        sending.set(true);
        let admin = std::sync::Arc::clone(&admin);
        let message = notify_message.get_untracked();
        leptos::task::spawn_local(async move {
            match admin.notify_user(&target, &message).await {
                Ok(confirmation) => {
                    close_prompt();
                    notice.set(Some(Notice::success("Notification Sent", confirmation)));
                }
                Err(err) => {
                    notice.set(Some(failure_notice("Notification Error", "Failed to send notification", &err)));
                }
            }
            sending.set(false);
        });
    };

    let email = move || state.with(|s| s.identity().map(|i| i.email.clone()).unwrap_or_default());
    let uid = move || state.with(|s| s.identity().map(|i| i.uid.clone()).unwrap_or_default());
    let rows = move || state.with(|s| notify_targets(s.identity()));

    view! {
        <div class="card card--wide">
            <h2>"Admin Dashboard"</h2>
            <p>
                "Welcome, Admin " <span class="card__highlight">{email}</span> "!"
                <br/>
                "Your UID: " <span class="mono">{uid}</span>
            </p>
            <p class="card__status">{move || status.get()}</p>

            <section class="card__section">
                <h3>"Manage User Roles"</h3>
                <p class="card__hint">
                    "Grant admin claims to a user. They will need to log out and log back in for the change to take effect."
                </p>
                <div class="card__row">
                    <input
                        class="login-input"
                        type="text"
                        placeholder="User UID to make admin"
                        prop:value=move || uid_input.get()
                        on:input=move |ev| uid_input.set(event_target_value(&ev))
                    />
                    <button class="btn" on:click=on_grant disabled=move || granting.get()>
                        "Set Admin Claim"
                    </button>
                </div>
            </section>

            <section class="card__section">
                <h3>"Send Custom Notifications"</h3>
                <p class="card__hint">"Demonstration directory; pick a user to send a push notification."</p>
                <table class="directory">
                    <thead>
                        <tr>
                            <th>"User Email"</th>
                            <th>"User UID"</th>
                            <th>"Action"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For each=rows key=|row| row.uid.clone() children=move |row: NotifyTarget| {
                            let NotifyTarget { uid, email } = row;
                            let pick = uid.clone();
                            view! {
                                <tr>
                                    <td>{email}</td>
                                    <td class="mono">{uid}</td>
                                    <td>
                                        <button
                                            class="btn btn--small"
                                            on:click=move |_| {
                                                notify_message.set(String::new());
                                                notify_uid.set(Some(pick.clone()));
                                            }
                                        >
                                            "Notify"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }/>
                    </tbody>
                </table>
            </section>

            <Show when=move || notify_uid.get().is_some()>
                <div class="dialog-backdrop">
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h3>"Notify User: " {move || notify_uid.get().unwrap_or_default()}</h3>
                        <textarea
                            class="dialog__textarea"
                            placeholder="Enter notification message..."
                            prop:value=move || notify_message.get()
                            on:input=move |ev| notify_message.set(event_target_value(&ev))
                        ></textarea>
                        <div class="dialog__actions">
                            <button class="btn btn--success" on:click=on_send.clone() disabled=move || sending.get()>
                                "Send Notification"
                            </button>
                            <button class="btn btn--muted" on:click=move |_| close_prompt()>
                                "Cancel"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>

            {move || {
                notice.get().map(|n| view! { <Modal notice=n on_close=Callback::new(move |()| notice.set(None))/> })
            }}
        </div>
    }
}
