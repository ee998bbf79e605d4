//! Dashboard for signed-in plain users.

use leptos::prelude::*;

use crate::app::AppContext;

#[component]
pub fn UserDashboardPage() -> impl IntoView {
    let state = expect_context::<AppContext>().state;
    let email = move || state.with(|s| s.identity().map(|i| i.email.clone()).unwrap_or_default());
    let uid = move || state.with(|s| s.identity().map(|i| i.uid.clone()).unwrap_or_default());

    view! {
        <div class="card">
            <h2>"User Dashboard"</h2>
            <p>
                "Welcome, " <span class="card__highlight">{email}</span> "!"
                <br/>
                "Your UID: " <span class="mono">{uid}</span>
            </p>
            <p class="card__hint">"You are signed in with a standard user account."</p>
        </div>
    }
}
